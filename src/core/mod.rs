/// Core Module for sqlwalk
///
/// This module contains the fundamental components underlying the walkthrough:
/// database handle lifecycle, query execution, schema introspection, and the
/// shared error taxonomy.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{Result, SqlWalkError};
