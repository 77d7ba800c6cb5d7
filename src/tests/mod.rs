// Scenario tests that cross module boundaries. Unit tests live next to the
// code they cover.
pub mod common;

mod generate;
