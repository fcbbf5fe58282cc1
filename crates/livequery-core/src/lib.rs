//! livequery Core - Columns, operators, and filters.
//!
//! This crate provides the filter evaluation used by the livequery
//! monitoring query engine.

pub mod column;
pub mod config;
pub mod error;
pub mod query;

pub use column::{
    ColumnShape, CustomVariables, CustomVarsColumn, CustomVarsColumnDef, CustomVarsKind,
};
pub use config::FilterConfig;
pub use error::{Error, FilterError, ResponseCode};
pub use query::{CustomVarsFilter, Operator, SignedOperator};
