pub mod benchmark;
pub mod calculator;
pub mod comparison;
pub mod input;

pub use crate::domain::model::{ComparisonReport, GeometricSequence, MethodTiming};
pub use crate::domain::ports::Terminal;
pub use crate::utils::error::Result;
