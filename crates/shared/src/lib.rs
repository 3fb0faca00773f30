pub mod domain;
pub mod error;
pub mod lenient;
pub mod protocol;

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
