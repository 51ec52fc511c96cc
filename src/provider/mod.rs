pub mod factory;
pub mod traits;
pub mod types;

pub mod finnhub;
pub mod fixed;

#[cfg(test)]
mod types_tests;
