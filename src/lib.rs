pub mod calculator;
pub mod config;
pub mod sample;

pub use calculator::Calculator;
pub use sample::{run, SampleResults};
