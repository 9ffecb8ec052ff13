// Core infrastructure modules
pub mod core;

// Feature-specific modules
pub mod catalog;
pub mod config;
pub mod repl;
pub mod results_grid;
pub mod runner;

// Fixture builders for the sample databases, used by unit and integration
// tests and by the CLI smoke tests
pub mod test_utils;
