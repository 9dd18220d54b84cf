//! The search engine: date lookup against the index store plus the result
//! pipeline (hazard gate, user filters, truncation).

use std::ops::Bound;

use chrono::NaiveDate;

use crate::database::NeoDatabase;
use crate::error::Result;
use crate::filter::{self, Filter};
use crate::model::NearEarthObject;
use crate::query::{DateSearch, Query};

/// State-free executor over a built [`NeoDatabase`].
pub struct Searcher<'db> {
    db: &'db NeoDatabase,
}

impl<'db> Searcher<'db> {
    pub fn new(db: &'db NeoDatabase) -> Self {
        Self { db }
    }

    /// All objects recorded on exactly `date`, in ingestion order,
    /// duplicates kept.
    pub fn date_search_equals(&self, date: NaiveDate) -> Vec<&'db NearEarthObject> {
        self.db.neos_on(date)
    }

    /// All objects recorded on any date within the inclusive bounds,
    /// concatenated in ascending date order. An absent bound leaves that
    /// side open.
    pub fn date_search_between(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Vec<&'db NearEarthObject> {
        let lower = start.map_or(Bound::Unbounded, Bound::Included);
        let upper = end.map_or(Bound::Unbounded, Bound::Included);

        self.db
            .date_entries()
            .range((lower, upper))
            .flat_map(|(_, names)| self.db.resolve(names))
            .collect()
    }

    /// Execute a query end to end.
    ///
    /// Pipeline: dispatch on the date criterion; drop every non-hazardous
    /// object (a fixed gate that always runs, independent of user filters);
    /// apply the user filters that belong to the object kind, sequentially
    /// and in caller order; truncate to the requested count, where an absent
    /// count means the full list.
    ///
    /// The result is always a list of objects. The descriptor's return-kind
    /// selector is accepted but does not reshape the output, and filters on
    /// approach-level fields cannot apply here; the API layer reports both
    /// conditions to the caller.
    pub fn get_objects(&self, query: &Query) -> Result<Vec<&'db NearEarthObject>> {
        let mut neos = match query.date_search {
            DateSearch::Equals(date) => self.date_search_equals(date),
            DateSearch::Between { start, end } => self.date_search_between(start, end),
        };

        neos.retain(|neo| neo.is_hazardous);

        let classified = filter::classify(&query.filters);
        for raw in &classified.neo {
            let predicate = Filter::parse(raw)?;
            neos = predicate.apply(neos)?;
        }

        if let Some(count) = query.number {
            neos.truncate(count);
        }

        Ok(neos)
    }
}
