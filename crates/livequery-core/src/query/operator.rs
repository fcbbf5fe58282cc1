//! Filter operators.
//!
//! The query protocol identifies operators by small integers and encodes
//! negation in the sign: `-1` is "not equal", `-6` is "not less", and so
//! on. `SignedOperator::decode` splits such an id into an [`Operator`] and
//! a negation flag; nothing past that call sees the signed form.

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// A comparison operator, without negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`: exact equality.
    Equal,
    /// `~`: regular expression search.
    Regex,
    /// `=~`: case-insensitive equality.
    EqualIcase,
    /// `~~`: case-insensitive regular expression search.
    RegexIcase,
    /// `>`: greater than.
    Greater,
    /// `<`: less than.
    Less,
    /// Any other id known to the engine. Columns that cannot handle an
    /// operator fall back to accepting every record.
    Other(u32),
}

impl Operator {
    /// Look up an operator by its unsigned id.
    pub fn from_id(id: u32) -> Self {
        match id {
            1 => Operator::Equal,
            2 => Operator::Regex,
            3 => Operator::EqualIcase,
            4 => Operator::RegexIcase,
            5 => Operator::Greater,
            6 => Operator::Less,
            other => Operator::Other(other),
        }
    }

    /// The unsigned protocol id.
    pub fn id(self) -> u32 {
        match self {
            Operator::Equal => 1,
            Operator::Regex => 2,
            Operator::EqualIcase => 3,
            Operator::RegexIcase => 4,
            Operator::Greater => 5,
            Operator::Less => 6,
            Operator::Other(id) => id,
        }
    }

    /// Textual name, as written in a `Filter:` header.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::Regex => "~",
            Operator::EqualIcase => "=~",
            Operator::RegexIcase => "~~",
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::Other(_) => "(invalid)",
        }
    }

    /// Whether the argument is compiled into a regular expression.
    pub fn is_regex(self) -> bool {
        matches!(self, Operator::Regex | Operator::RegexIcase)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Other(id) => write!(f, "(invalid {id})"),
            op => f.write_str(op.name()),
        }
    }
}

/// An operator together with its negation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignedOperator {
    /// The operator magnitude.
    pub op: Operator,
    /// Invert the operator's result.
    pub negate: bool,
}

impl SignedOperator {
    /// Create a non-negated operator.
    pub fn new(op: Operator) -> Self {
        Self { op, negate: false }
    }

    /// Create a negated operator.
    pub fn negated(op: Operator) -> Self {
        Self { op, negate: true }
    }

    /// Decode a signed protocol id.
    pub fn decode(id: i32) -> Self {
        Self {
            op: Operator::from_id(id.unsigned_abs()),
            negate: id < 0,
        }
    }

    /// Encode back into a signed protocol id.
    ///
    /// Returns `None` when the id does not fit a signed protocol id.
    pub fn encode(self) -> Option<i32> {
        let id = i32::try_from(self.op.id()).ok()?;
        if self.negate {
            id.checked_neg()
        } else {
            Some(id)
        }
    }

    /// Textual name including negation.
    ///
    /// Negated `<` and `>` read as `>=` and `<=`.
    pub fn name(self) -> &'static str {
        if !self.negate {
            return self.op.name();
        }
        match self.op {
            Operator::Equal => "!=",
            Operator::Regex => "!~",
            Operator::EqualIcase => "!=~",
            Operator::RegexIcase => "!~~",
            Operator::Greater => "<=",
            Operator::Less => ">=",
            Operator::Other(_) => "!(invalid)",
        }
    }
}

impl From<Operator> for SignedOperator {
    fn from(op: Operator) -> Self {
        SignedOperator::new(op)
    }
}

impl fmt::Display for SignedOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            Operator::Other(_) if self.negate => write!(f, "!{}", self.op),
            Operator::Other(_) => write!(f, "{}", self.op),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for SignedOperator {
    type Err = FilterError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let signed = match token {
            "=" => SignedOperator::new(Operator::Equal),
            "~" => SignedOperator::new(Operator::Regex),
            "=~" => SignedOperator::new(Operator::EqualIcase),
            "~~" => SignedOperator::new(Operator::RegexIcase),
            ">" => SignedOperator::new(Operator::Greater),
            "<" => SignedOperator::new(Operator::Less),
            "!=" => SignedOperator::negated(Operator::Equal),
            "!~" => SignedOperator::negated(Operator::Regex),
            "!=~" => SignedOperator::negated(Operator::EqualIcase),
            "!~~" => SignedOperator::negated(Operator::RegexIcase),
            ">=" => SignedOperator::negated(Operator::Less),
            "<=" => SignedOperator::negated(Operator::Greater),
            _ => return Err(FilterError::UnknownOperator(token.to_string())),
        };
        Ok(signed)
    }
}
