//! Search and schema filters
//!
//! A filter names a field, a [`SearchCondition`] and an optional comparison
//! string. The caller resolves the field to a [`FieldValue`] (or to nothing)
//! and the evaluator decides pass/fail. Evaluation is pure and synchronous.

pub mod condition;
pub mod eval;
pub mod search_filter;
pub mod value;

pub use condition::SearchCondition;
pub use eval::evaluate;
pub use search_filter::{SchemaFilter, SearchFilter};
pub use value::FieldValue;
