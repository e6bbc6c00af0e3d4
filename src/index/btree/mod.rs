//! B-tree sort-order validation.
//!
//! # Components
//! - [`Node`] / [`Tree`] - Owned B-tree structure with optional child slots
//! - [`Validator`] - Recursive, fail-fast ordering check
//! - [`Violation`] - Description of the first ordering defect found
//! - [`ValidationStats`] - Counters for validator work

mod node;
mod stats;
mod validator;

pub use node::{Node, Tree};
pub use stats::{StatsSnapshot, ValidationStats};
pub use validator::{Validator, Violation};
