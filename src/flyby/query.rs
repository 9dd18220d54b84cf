//! Query translation: loose user-supplied parameters become a normalized
//! [`Query`] descriptor the search layer can execute.

use chrono::NaiveDate;

/// The date criterion of a query. Exactly one variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSearch {
    /// Match a single approach date.
    Equals(NaiveDate),
    /// Match every date within the inclusive bounds; an absent bound leaves
    /// that side open.
    Between {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

/// Which record kind the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    Neo,
    Approach,
}

impl ReturnKind {
    /// Resolve a shape name against the fixed two-value set. Unrecognized
    /// names resolve to `None`; that is not an error here.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "neo" => Some(ReturnKind::Neo),
            "path" => Some(ReturnKind::Approach),
            _ => None,
        }
    }
}

/// Loose query parameters as a caller hands them over, e.g. straight from
/// CLI flags. Nothing is validated at this stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub number: Option<usize>,
    pub return_kind: Option<String>,
    pub filters: Vec<String>,
}

impl QueryParams {
    /// Translate into a normalized [`Query`].
    ///
    /// An exact `date` always wins over the start/end pair. Filter strings
    /// are carried through unparsed; the filter layer classifies and parses
    /// them later.
    pub fn build(self) -> Query {
        let date_search = match self.date {
            Some(date) => DateSearch::Equals(date),
            None => DateSearch::Between {
                start: self.start_date,
                end: self.end_date,
            },
        };

        let return_kind = self.return_kind.as_deref().and_then(ReturnKind::parse);

        Query {
            date_search,
            number: self.number,
            filters: self.filters,
            return_kind,
        }
    }
}

/// A normalized search request.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub date_search: DateSearch,
    pub number: Option<usize>,
    /// Raw filter expressions, in the order the caller gave them.
    pub filters: Vec<String>,
    pub return_kind: Option<ReturnKind>,
}
