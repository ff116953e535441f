// Domain layer: sequence model, comparison report and the terminal port.

pub mod model;
pub mod ports;
