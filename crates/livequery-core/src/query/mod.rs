//! Query filters for livequery.
//!
//! This module holds the operator set of the query protocol and the filters
//! that evaluate a single `Filter:` clause against a record.

mod custom_vars_filter;
mod operator;

pub use custom_vars_filter::{split_argument, CustomVarsFilter};
pub use operator::{Operator, SignedOperator};
