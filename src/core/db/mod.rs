/// Database Module
///
/// The database layer is split into three concerns:
/// - **Handle lifecycle** (`connection.rs`): opening, closing, and scoped
///   acquisition of read-only handles to the sample database files
/// - **Query Execution** (`query.rs`): running example SQL and classifying
///   engine failures into the walkthrough's error taxonomy
/// - **Schema Introspection** (`schema.rs`): table and column metadata
///
/// All operations use the standardized `SqlWalkError` type for error
/// propagation. Execution is single-threaded, synchronous, and blocking;
/// the intended usage opens exactly one handle at a time.
pub mod connection;
pub mod query;
pub mod schema;

pub use connection::*;
pub use query::*;
pub use schema::*;
