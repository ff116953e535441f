use crate::config::toml_config::BenchConfig;
use crate::core::comparison::{ComparisonFlow, ComparisonOutcome};
use crate::domain::ports::Terminal;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

const BANNER: [&str; 4] = [
    "========================================================",
    "   ITERATIVE VS RECURSIVE ALGORITHM COMPARISON",
    "           FOR GEOMETRIC SERIES SUMS",
    "========================================================",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compare,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// 取該行第一個 token 當整數解析；無法解析視為無效選項
    pub fn parse(line: &str) -> Self {
        match line.split_whitespace().next().map(str::parse::<i64>) {
            Some(Ok(1)) => MenuChoice::Compare,
            Some(Ok(2)) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// 選單結束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    UserExit,
    EndOfInput,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub completed: usize,
    pub aborted: usize,
    pub invalid_choices: usize,
}

pub struct MenuLoop {
    flow: ComparisonFlow,
    monitor: SystemMonitor,
    summary: SessionSummary,
}

impl MenuLoop {
    pub fn new(config: &BenchConfig) -> Self {
        Self::with_monitor(config, SystemMonitor::new(config.monitoring_enabled()))
    }

    pub fn with_monitor(config: &BenchConfig, monitor: SystemMonitor) -> Self {
        Self {
            flow: ComparisonFlow::new(config.benchmark, config.calculator),
            monitor,
            summary: SessionSummary::default(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// 顯示選單直到使用者選擇離開或輸入結束
    pub fn run<T: Terminal>(&mut self, terminal: &mut T) -> Result<MenuExit> {
        loop {
            for line in BANNER {
                terminal.write_line(line)?;
            }
            terminal.write_line("")?;
            terminal.write_line("Choose a program mode:")?;
            terminal.write_line("1. Compare iterative and recursive methods")?;
            terminal.write_line("2. Exit")?;
            terminal.write_prompt("\nEnter your choice (1/2): ")?;

            let line = match terminal.read_line()? {
                Some(line) => line,
                None => {
                    tracing::info!("Input closed, leaving menu");
                    terminal.write_line("")?;
                    self.monitor.log_final_stats();
                    return Ok(MenuExit::EndOfInput);
                }
            };

            match MenuChoice::parse(&line) {
                MenuChoice::Compare => match self.flow.run(terminal, &mut self.monitor)? {
                    ComparisonOutcome::Completed(_) => self.summary.completed += 1,
                    ComparisonOutcome::Aborted(_) => self.summary.aborted += 1,
                },
                MenuChoice::Exit => {
                    terminal.write_line("Thank you for using this program. Goodbye!")?;
                    tracing::info!("👋 Exit requested ({:?})", self.summary);
                    self.monitor.log_final_stats();
                    return Ok(MenuExit::UserExit);
                }
                MenuChoice::Invalid => {
                    tracing::warn!("⚠️ Invalid menu choice: {:?}", line);
                    self.summary.invalid_choices += 1;
                    terminal.write_line("Invalid choice! Please choose 1 or 2.")?;
                }
            }

            terminal.write_line("")?;
            terminal.write_line("Press Enter to return to the main menu...")?;
            terminal.discard_pending();
            if terminal.read_line()?.is_none() {
                tracing::info!("Input closed, leaving menu");
                self.monitor.log_final_stats();
                return Ok(MenuExit::EndOfInput);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Compare);
        assert_eq!(MenuChoice::parse("  2  "), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("2 trailing"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("3"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("-1"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("one"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
    }
}
