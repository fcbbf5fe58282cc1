//! Filters over custom-variable columns.
//!
//! Dictionary columns take an argument of the form `<varname> <value>`:
//!
//! ```text
//! Filter: custom_variables = PATH /hirni.mk
//! ```
//!
//! List columns take a single token and only support membership tests,
//! spelled `>=` (contains) and `<` (does not contain).

use std::fmt;

use regex::{Regex, RegexBuilder};
use tracing::{debug, info};

use super::operator::{Operator, SignedOperator};
use crate::column::{ColumnShape, CustomVarsColumn};
use crate::config::FilterConfig;
use crate::error::FilterError;

/// Whitespace as understood by the header parser: space, `\t`, `\n`,
/// `\v`, `\f` and `\r`.
fn is_header_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Split a dictionary filter argument into variable name and reference value.
///
/// The name is the leading run of non-whitespace characters. The value is
/// everything after the whitespace run that follows it, and is empty when
/// nothing follows.
pub fn split_argument(argument: &str) -> (&str, &str) {
    let name_end = argument.find(is_header_space).unwrap_or(argument.len());
    let (name, rest) = argument.split_at(name_end);
    (name, rest.trim_start_matches(is_header_space))
}

/// Column-shape specific state, fixed at construction.
enum Target {
    List,
    Dictionary {
        varname: String,
        ref_value: String,
        matcher: Option<Regex>,
    },
}

/// A single `Filter:` clause on a custom-variables column.
pub struct CustomVarsFilter<'c, C: CustomVarsColumn> {
    column: &'c C,
    op: Operator,
    negate: bool,
    ref_text: String,
    target: Target,
}

impl<'c, C: CustomVarsColumn> CustomVarsFilter<'c, C> {
    /// Build a filter from a signed protocol operator id.
    ///
    /// A negative id negates the operator.
    pub fn new(column: &'c C, opid: i32, argument: &str) -> Result<Self, FilterError> {
        Self::with_config(
            column,
            SignedOperator::decode(opid),
            argument,
            &FilterConfig::default(),
        )
    }

    /// Build a filter with an explicit configuration.
    pub fn with_config(
        column: &'c C,
        op: SignedOperator,
        argument: &str,
        config: &FilterConfig,
    ) -> Result<Self, FilterError> {
        let target = match column.shape() {
            ColumnShape::List => Target::List,
            ColumnShape::Dictionary => {
                let (varname, ref_value) = split_argument(argument);
                let matcher = if op.op.is_regex() {
                    Some(compile_matcher(op.op, ref_value, argument, config)?)
                } else {
                    None
                };
                Target::Dictionary {
                    varname: varname.to_string(),
                    ref_value: ref_value.to_string(),
                    matcher,
                }
            }
        };

        debug!(
            column = column.name(),
            operator = %op,
            argument,
            "built custom variables filter"
        );

        Ok(Self {
            column,
            op: op.op,
            negate: op.negate,
            ref_text: argument.to_string(),
            target,
        })
    }

    /// Name of the filtered column.
    pub fn column_name(&self) -> &str {
        self.column.name()
    }

    /// The operator, including negation.
    pub fn operator(&self) -> SignedOperator {
        SignedOperator {
            op: self.op,
            negate: self.negate,
        }
    }

    /// Whether the operator is negated.
    pub fn is_negated(&self) -> bool {
        self.negate
    }

    /// The argument as supplied.
    pub fn argument(&self) -> &str {
        &self.ref_text
    }

    /// Variable name, for dictionary columns.
    pub fn variable_name(&self) -> Option<&str> {
        match &self.target {
            Target::Dictionary { varname, .. } => Some(varname.as_str()),
            Target::List => None,
        }
    }

    /// Reference value, for dictionary columns.
    pub fn reference_value(&self) -> Option<&str> {
        match &self.target {
            Target::Dictionary { ref_value, .. } => Some(ref_value.as_str()),
            Target::List => None,
        }
    }

    /// Whether a regular expression was compiled for this filter.
    pub fn has_matcher(&self) -> bool {
        matches!(&self.target, Target::Dictionary { matcher: Some(_), .. })
    }

    /// Evaluate the filter against one record.
    ///
    /// Operators the column shape does not support accept every record.
    pub fn accepts(&self, record: &C::Record) -> bool {
        match &self.target {
            Target::Dictionary {
                varname,
                ref_value,
                matcher,
            } => {
                let actual = self.column.variable(record, varname).unwrap_or("");
                let pass = match self.op {
                    Operator::Equal => ref_value == actual,
                    Operator::EqualIcase => ref_value.eq_ignore_ascii_case(actual),
                    Operator::Regex | Operator::RegexIcase => {
                        matcher.as_ref().is_some_and(|re| re.is_match(actual))
                    }
                    Operator::Greater => ref_value.as_str() < actual,
                    Operator::Less => ref_value.as_str() > actual,
                    Operator::Other(_) => return self.accept_unsupported("strings"),
                };
                pass != self.negate
            }
            Target::List => {
                let is_member = self.column.contains(record, &self.ref_text);
                match self.op {
                    // `<` selects records without the token, `>=` those with it.
                    Operator::Less => is_member == self.negate,
                    _ => self.accept_unsupported("custom variable lists"),
                }
            }
        }
    }

    fn accept_unsupported(&self, kind: &str) -> bool {
        info!(
            column = self.column.name(),
            operator = %self.operator(),
            id = self.op.id(),
            "operator for {kind} not implemented, accepting record"
        );
        true
    }
}

impl<C: CustomVarsColumn> fmt::Debug for CustomVarsFilter<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomVarsFilter")
            .field("column", &self.column.name())
            .field("operator", &format_args!("{}", self.operator()))
            .field("argument", &self.ref_text)
            .field("variable_name", &self.variable_name())
            .field("reference_value", &self.reference_value())
            .field("has_matcher", &self.has_matcher())
            .finish()
    }
}

/// Compile the reference value of a `~` or `~~` filter.
///
/// Patterns containing braces are rejected before compilation.
fn compile_matcher(
    op: Operator,
    pattern: &str,
    argument: &str,
    config: &FilterConfig,
) -> Result<Regex, FilterError> {
    if pattern.contains(|c: char| c == '{' || c == '}') {
        return Err(FilterError::DisallowedRegex {
            argument: argument.to_string(),
        });
    }

    RegexBuilder::new(pattern)
        .case_insensitive(op == Operator::RegexIcase)
        .size_limit(config.regex_size_limit)
        .dfa_size_limit(config.regex_dfa_size_limit)
        .build()
        .map_err(|e| FilterError::InvalidRegex {
            argument: argument.to_string(),
            reason: e.to_string(),
        })
}
