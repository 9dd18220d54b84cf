//! The index store: two derived mappings built once from the ingested rows.
//!
//! `by_name` owns the canonical [`NearEarthObject`] instances, one per
//! distinct name. `by_date` stores object *names* per approach date, in
//! ingestion order, one entry per row (the same object may appear several
//! times under one date). Resolving a name through `by_name` always yields
//! the same canonical instance, which is how both mappings share objects
//! without shared ownership. After construction the database is read-only.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::ingest::{self, ApproachRow};
use crate::model::{CloseApproach, NearEarthObject};

#[derive(Debug, Default)]
pub struct NeoDatabase {
    by_name: HashMap<String, NearEarthObject>,
    by_date: BTreeMap<NaiveDate, Vec<String>>,
}

impl NeoDatabase {
    /// Read the CSV file at `path` and build the index store from its rows.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let rows = ingest::read_rows(path)?;
        Ok(Self::from_rows(rows))
    }

    /// Build the index store from already-ingested rows.
    ///
    /// Object-level attributes are taken from the first row seen for each
    /// name; every row appends one approach to its object and one name entry
    /// under its date.
    pub fn from_rows(rows: Vec<ApproachRow>) -> Self {
        let mut db = Self::default();
        for row in rows {
            let neo = db.by_name.entry(row.name.clone()).or_insert_with(|| {
                NearEarthObject::new(
                    row.name.clone(),
                    row.id.clone(),
                    row.diameter_min_km,
                    row.is_hazardous,
                )
            });
            neo.approaches.push(CloseApproach::new(
                row.name.clone(),
                row.date,
                row.miss_distance_km,
            ));
            db.by_date.entry(row.date).or_default().push(row.name);
        }
        db
    }

    /// Look up the canonical instance for `name`.
    pub fn neo(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name)
    }

    /// The objects recorded on `date`, in ingestion order, duplicates kept.
    pub fn neos_on(&self, date: NaiveDate) -> Vec<&NearEarthObject> {
        self.by_date
            .get(&date)
            .map(|names| self.resolve(names))
            .unwrap_or_default()
    }

    /// The full by-date mapping, for the search layer.
    pub(crate) fn date_entries(&self) -> &BTreeMap<NaiveDate, Vec<String>> {
        &self.by_date
    }

    /// Resolve a list of names against `by_name`, preserving order.
    pub(crate) fn resolve<'a>(&'a self, names: &'a [String]) -> Vec<&'a NearEarthObject> {
        names
            .iter()
            .filter_map(|name| self.by_name.get(name))
            .collect()
    }

    pub fn neo_count(&self) -> usize {
        self.by_name.len()
    }

    pub fn approach_count(&self) -> usize {
        self.by_name.values().map(|neo| neo.approaches.len()).sum()
    }

    pub fn hazardous_count(&self) -> usize {
        self.by_name.values().filter(|neo| neo.is_hazardous).count()
    }

    /// Earliest and latest approach date in the dataset.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.by_date.keys().next()?;
        let last = self.by_date.keys().next_back()?;
        Some((*first, *last))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn row(name: &str, date: NaiveDate, miss_distance_km: f64) -> ApproachRow {
        ApproachRow {
            name: name.to_string(),
            id: Some(format!("id-{}", name)),
            diameter_min_km: 0.5,
            is_hazardous: false,
            date,
            miss_distance_km,
        }
    }

    pub fn hazardous_row(name: &str, date: NaiveDate, miss_distance_km: f64) -> ApproachRow {
        let mut r = row(name, date, miss_distance_km);
        r.is_hazardous = true;
        r
    }
}
