//! Attribute filtering.
//!
//! Raw filter expressions have the form `field:op:value`, e.g.
//! `distance:>:50000` or `is_hazardous:=:true`. This module classifies raw
//! expressions by the record kind that owns their field, parses them into
//! typed [`Filter`] predicates, and applies predicates to candidate lists
//! while preserving input order.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{FlybyError, Result};
use crate::model::{CloseApproach, NearEarthObject};

/// Which record kind owns a filterable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTarget {
    Neo,
    Approach,
}

/// The closed set of filterable fields.
///
/// Resolving a field name happens here, at predicate-construction time, so
/// an unknown field fails fast instead of surfacing as a missing attribute
/// somewhere inside application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    IsHazardous,
    Diameter,
    Distance,
}

impl Field {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "is_hazardous" => Some(Field::IsHazardous),
            "diameter" => Some(Field::Diameter),
            "distance" => Some(Field::Distance),
            _ => None,
        }
    }

    pub fn target(self) -> FilterTarget {
        match self {
            Field::IsHazardous | Field::Diameter => FilterTarget::Neo,
            Field::Distance => FilterTarget::Approach,
        }
    }

    /// Type the raw comparison value per this field's tag. A value that does
    /// not parse as the field's native type is kept as text, which routes
    /// the comparison through the string branch.
    fn parse_value(self, raw: &str) -> FilterValue {
        let trimmed = raw.trim();
        match self {
            Field::IsHazardous => match trimmed.to_ascii_lowercase().parse::<bool>() {
                Ok(flag) => FilterValue::Bool(flag),
                Err(_) => FilterValue::Text(raw.to_string()),
            },
            Field::Diameter | Field::Distance => match trimmed.parse::<f64>() {
                Ok(number) => FilterValue::Number(number),
                Err(_) => FilterValue::Text(raw.to_string()),
            },
        }
    }
}

/// A typed comparison value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Number(n) => write!(f, "{}", n),
            FilterValue::Bool(b) => write!(f, "{}", b),
            FilterValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// The fixed operator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// `=`
    Eq,
    /// `>` (strict)
    Gt,
    /// `>=`
    Ge,
}

impl FilterOp {
    pub fn parse(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(FilterOp::Eq),
            ">" => Some(FilterOp::Gt),
            ">=" => Some(FilterOp::Ge),
            _ => None,
        }
    }

    fn holds(self, ordering: Ordering) -> bool {
        match self {
            FilterOp::Eq => ordering == Ordering::Equal,
            FilterOp::Gt => ordering == Ordering::Greater,
            FilterOp::Ge => ordering != Ordering::Less,
        }
    }
}

/// Records that expose filterable fields.
pub trait Filterable {
    /// The record's value for `field`, or `None` when this record kind does
    /// not carry that field.
    fn field_value(&self, field: Field) -> Option<FilterValue>;
}

impl Filterable for NearEarthObject {
    fn field_value(&self, field: Field) -> Option<FilterValue> {
        match field {
            Field::IsHazardous => Some(FilterValue::Bool(self.is_hazardous)),
            Field::Diameter => Some(FilterValue::Number(self.diameter_min_km)),
            Field::Distance => None,
        }
    }
}

impl Filterable for CloseApproach {
    fn field_value(&self, field: Field) -> Option<FilterValue> {
        match field {
            Field::Distance => Some(FilterValue::Number(self.miss_distance_km)),
            Field::IsHazardous | Field::Diameter => None,
        }
    }
}

/// A single field/operator/value predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: Field,
    pub op: FilterOp,
    pub value: FilterValue,
}

impl Filter {
    /// Parse a raw `field:op:value` expression into a predicate.
    ///
    /// The value part may itself contain `:`; only the first two separators
    /// split the expression.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.splitn(3, ':');
        let (field, op, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(field), Some(op), Some(value)) => (field, op, value),
            _ => return Err(FlybyError::InvalidFilter(raw.to_string())),
        };

        let field = Field::parse(field)
            .ok_or_else(|| FlybyError::Unsupported(format!("filter field '{}'", field)))?;
        let op = FilterOp::parse(op)
            .ok_or_else(|| FlybyError::Unsupported(format!("filter operator '{}'", op)))?;

        Ok(Self {
            field,
            op,
            value: field.parse_value(value),
        })
    }

    /// Keep the candidates for which `op(candidate_value, filter_value)`
    /// holds, preserving input order.
    pub fn apply<'a, T: Filterable>(&self, candidates: Vec<&'a T>) -> Result<Vec<&'a T>> {
        let mut kept = Vec::new();
        for candidate in candidates {
            let value = candidate.field_value(self.field).ok_or_else(|| {
                FlybyError::Unsupported(format!(
                    "field '{:?}' does not apply to this record kind",
                    self.field
                ))
            })?;
            if self.matches(&value) {
                kept.push(candidate);
            }
        }
        Ok(kept)
    }

    /// Compare natively when both sides carry the same type tag; on any
    /// mismatch compare the string renderings of both sides instead.
    fn matches(&self, value: &FilterValue) -> bool {
        let ordering = match (value, &self.value) {
            (FilterValue::Number(a), FilterValue::Number(b)) => a.total_cmp(b),
            (FilterValue::Bool(a), FilterValue::Bool(b)) => a.cmp(b),
            (FilterValue::Text(a), FilterValue::Text(b)) => a.cmp(b),
            (a, b) => a.to_string().cmp(&b.to_string()),
        };
        self.op.holds(ordering)
    }
}

/// Raw expressions bucketed by the record kind that owns their field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedFilters {
    pub neo: Vec<String>,
    pub approach: Vec<String>,
    /// Expressions whose field name is not in the closed set. Dropped from
    /// both buckets; callers decide whether to surface them.
    pub dropped: Vec<String>,
}

/// Classify raw expressions by the owner of their field-name token.
///
/// Only the field name is inspected here; full parsing (and its stricter
/// errors) happens in [`Filter::parse`].
pub fn classify<S: AsRef<str>>(raw_filters: &[S]) -> ClassifiedFilters {
    let mut classified = ClassifiedFilters::default();
    for raw in raw_filters {
        let expr = raw.as_ref();
        let name = expr.split(':').next().unwrap_or_default();
        match Field::parse(name).map(Field::target) {
            Some(FilterTarget::Neo) => classified.neo.push(expr.to_string()),
            Some(FilterTarget::Approach) => classified.approach.push(expr.to_string()),
            None => classified.dropped.push(expr.to_string()),
        }
    }
    classified
}
