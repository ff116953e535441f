use crate::domain::ports::Terminal;
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// 以行為單位緩衝的終端，適用於任何 `BufRead + Write`
///
/// token 讀取會跨行；同一行剩下的內容保留給下一次讀取。
pub struct LineConsole<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn next_raw_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl LineConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for LineConsole<R, W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            match self.next_raw_line()? {
                Some(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                None => return Ok(None),
            }
        }
        Ok(self.pending.pop_front())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        if !self.pending.is_empty() {
            let rest: Vec<String> = self.pending.drain(..).collect();
            return Ok(Some(rest.join(" ")));
        }
        self.next_raw_line()
    }

    fn discard_pending(&mut self) {
        self.pending.clear();
    }
}
