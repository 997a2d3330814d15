use std::fmt::Debug;
use std::ops::{Add, Mul};

use log::trace;

/// Stateless calculator used as the reference-counting fixture.
///
/// `add` and `multiply` are called from [`crate::sample::run`];
/// `unused_method` has no callers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// Returns the constant `"never called"`.
    pub fn unused_method(&self) -> &'static str {
        "never called"
    }

    /// Returns `a + b` with the native semantics of `T`.
    pub fn add<T>(&self, a: T, b: T) -> T
    where
        T: Add<Output = T> + Debug + Copy,
    {
        trace!("add({:?}, {:?})", a, b);
        a + b
    }

    /// Returns `a * b` with the native semantics of `T`.
    pub fn multiply<T>(&self, a: T, b: T) -> T
    where
        T: Mul<Output = T> + Debug + Copy,
    {
        trace!("multiply({:?}, {:?})", a, b);
        a * b
    }
}
