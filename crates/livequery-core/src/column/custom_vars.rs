//! In-memory custom-variable columns.

use std::fmt;

use super::{ColumnShape, CustomVarsColumn};

/// The custom variables attached to a host or service, in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomVariables {
    vars: Vec<(String, String)>,
}

impl CustomVariables {
    /// Create an empty set of variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable (builder pattern).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a variable, replacing the value of an existing one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.vars.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.vars.push((name, value)),
        }
    }

    /// Value of a variable by exact name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Variable names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(|(n, _)| n.as_str())
    }

    /// Variable values in definition order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(|(_, v)| v.as_str())
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are defined.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for CustomVariables {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut vars = CustomVariables::new();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}

/// Which view of the custom variables a column exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomVarsKind {
    /// List of variable names.
    Names,
    /// List of variable values.
    Values,
    /// Name to value mapping.
    Dict,
}

impl CustomVarsKind {
    /// Column name without table prefix.
    pub fn column_suffix(self) -> &'static str {
        match self {
            CustomVarsKind::Names => "custom_variable_names",
            CustomVarsKind::Values => "custom_variable_values",
            CustomVarsKind::Dict => "custom_variables",
        }
    }

    /// Attribute shape of this view.
    pub fn shape(self) -> ColumnShape {
        match self {
            CustomVarsKind::Names | CustomVarsKind::Values => ColumnShape::List,
            CustomVarsKind::Dict => ColumnShape::Dictionary,
        }
    }
}

/// A custom-variables column over records of type `R`.
pub struct CustomVarsColumnDef<R> {
    name: String,
    kind: CustomVarsKind,
    extract: fn(&R) -> &CustomVariables,
}

impl<R> CustomVarsColumnDef<R> {
    /// Create a column with an explicit name.
    pub fn new(
        name: impl Into<String>,
        kind: CustomVarsKind,
        extract: fn(&R) -> &CustomVariables,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            extract,
        }
    }

    /// Create a column named after its table, e.g. `host_custom_variables`.
    pub fn for_table(
        prefix: &str,
        kind: CustomVarsKind,
        extract: fn(&R) -> &CustomVariables,
    ) -> Self {
        Self::new(format!("{prefix}{}", kind.column_suffix()), kind, extract)
    }

    /// Which view this column exposes.
    pub fn kind(&self) -> CustomVarsKind {
        self.kind
    }
}

impl<R> fmt::Debug for CustomVarsColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomVarsColumnDef")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<R> CustomVarsColumn for CustomVarsColumnDef<R> {
    type Record = R;

    fn name(&self) -> &str {
        &self.name
    }

    fn shape(&self) -> ColumnShape {
        self.kind.shape()
    }

    fn variable<'r>(&self, record: &'r R, name: &str) -> Option<&'r str> {
        (self.extract)(record).get(name)
    }

    fn contains(&self, record: &R, token: &str) -> bool {
        let vars = (self.extract)(record);
        match self.kind {
            CustomVarsKind::Names | CustomVarsKind::Dict => vars.names().any(|n| n == token),
            CustomVarsKind::Values => vars.values().any(|v| v == token),
        }
    }
}
