//! The program body: one calculator, five calls.
//!
//! This file is the call-site fixture. `tests/reference_counts.rs` scans it,
//! so any new invocation of a calculator method here changes the expected
//! counts.

use log::debug;

use crate::calculator::Calculator;

/// The named result slots, one per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleResults {
    pub result1: i32,
    pub result2: i32,
    pub result3: i32,
    pub result4: i32,
    pub result5: i32,
}

/// Constructs the calculator and makes the five calls in program order.
pub fn run() -> SampleResults {
    let calc = Calculator::new();

    // Two references to `add`.
    let result1 = calc.add(1, 2);
    let result2 = calc.add(3, 4);

    // Three references to `multiply`.
    let result3 = calc.multiply(2, 3);
    let result4 = calc.multiply(4, 5);
    let result5 = calc.multiply(6, 7);

    let results = SampleResults {
        result1,
        result2,
        result3,
        result4,
        result5,
    };
    debug!("Sample results: {:?}", results);

    results
}
