//! Column descriptors consumed by filters.
//!
//! A column knows how to pull one attribute out of a record. Filters never
//! touch records directly; they go through the column they were built for.

mod custom_vars;

pub use custom_vars::{CustomVariables, CustomVarsColumnDef, CustomVarsKind};

/// Shape of a custom-variables attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnShape {
    /// Mapping from variable name to value.
    Dictionary,
    /// Flat list of tokens.
    List,
}

/// A column exposing the custom variables of a record.
pub trait CustomVarsColumn {
    /// The record type rows are read from.
    type Record;

    /// Column name as used in `Filter:` headers.
    fn name(&self) -> &str;

    /// Shape of the attribute. Must not change over the column's lifetime.
    fn shape(&self) -> ColumnShape;

    /// Value of the variable `name`, if the record defines it.
    fn variable<'r>(&self, record: &'r Self::Record, name: &str) -> Option<&'r str>;

    /// Whether the record's list contains `token`.
    fn contains(&self, record: &Self::Record, token: &str) -> bool;
}
