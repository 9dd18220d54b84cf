//! # API Facade
//!
//! The single entry point for all flyby operations, regardless of the UI in
//! front of it. The facade resolves the data source, builds the database
//! once, and exposes `query`, `inspect`, and `stats`. It returns structured
//! outcome types carrying results plus user-facing [`CmdMessage`] values; it
//! never prints and never exits.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::FlybyConfig;
use crate::database::NeoDatabase;
use crate::error::{FlybyError, Result};
use crate::filter;
use crate::model::NearEarthObject;
use crate::query::{QueryParams, ReturnKind};
use crate::search::Searcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing message produced by an operation. The CLI decides how to
/// render it; the facade only decides what to say.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Result of a `query` operation.
#[derive(Debug, Default)]
pub struct QueryOutcome {
    pub neos: Vec<NearEarthObject>,
    pub messages: Vec<CmdMessage>,
}

/// Result of an `inspect` operation.
#[derive(Debug, Default)]
pub struct InspectOutcome {
    pub neo: Option<NearEarthObject>,
    pub messages: Vec<CmdMessage>,
}

/// Dataset summary numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub neo_count: usize,
    pub approach_count: usize,
    pub hazardous_count: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

/// The main facade. Owns the loaded database.
#[derive(Debug)]
pub struct Flyby {
    db: NeoDatabase,
}

impl Flyby {
    /// Resolve the data source and load it. An explicit path wins over the
    /// configured default; with neither, the load fails.
    pub fn load(explicit: Option<PathBuf>, config: &FlybyConfig) -> Result<Self> {
        let path = explicit
            .or_else(|| config.data_file.clone())
            .ok_or(FlybyError::NoDataSource)?;
        Ok(Self {
            db: NeoDatabase::from_path(path)?,
        })
    }

    /// Wrap an already-built database (used by tests and embedders).
    pub fn from_database(db: NeoDatabase) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &NeoDatabase {
        &self.db
    }

    /// Translate the loose parameters, execute the search, and report
    /// anything the caller should know about how the query was interpreted.
    pub fn query(&self, params: QueryParams) -> Result<QueryOutcome> {
        let query = params.build();

        let mut messages = Vec::new();
        let classified = filter::classify(&query.filters);
        for dropped in &classified.dropped {
            messages.push(CmdMessage::warning(format!(
                "ignoring filter with unknown field: {}",
                dropped
            )));
        }
        for unused in &classified.approach {
            messages.push(CmdMessage::warning(format!(
                "filter applies to close approaches, not objects, and was not used: {}",
                unused
            )));
        }
        if query.return_kind == Some(ReturnKind::Approach) {
            messages.push(CmdMessage::info(
                "close-approach output is not implemented; listing objects instead",
            ));
        }

        let searcher = Searcher::new(&self.db);
        let neos: Vec<NearEarthObject> = searcher
            .get_objects(&query)?
            .into_iter()
            .cloned()
            .collect();

        if neos.is_empty() {
            messages.push(CmdMessage::info("No matching objects found."));
        }

        Ok(QueryOutcome { neos, messages })
    }

    /// Look up one object by its dataset name.
    pub fn inspect(&self, name: &str) -> InspectOutcome {
        match self.db.neo(name) {
            Some(neo) => InspectOutcome {
                neo: Some(neo.clone()),
                messages: Vec::new(),
            },
            None => InspectOutcome {
                neo: None,
                messages: vec![CmdMessage::warning(format!(
                    "No object named '{}' in the dataset.",
                    name
                ))],
            },
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            neo_count: self.db.neo_count(),
            approach_count: self.db.approach_count(),
            hazardous_count: self.db.hazardous_count(),
            date_range: self.db.date_range(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fixtures::{date, hazardous_row, row};

    fn api() -> Flyby {
        Flyby::from_database(NeoDatabase::from_rows(vec![
            hazardous_row("Eros", date(2020, 1, 1), 40000.0),
            row("Quiet", date(2020, 1, 1), 50000.0),
            hazardous_row("Eros", date(2020, 1, 8), 60000.0),
        ]))
    }

    #[test]
    fn load_without_any_source_fails() {
        let err = Flyby::load(None, &FlybyConfig::default()).unwrap_err();
        assert!(matches!(err, FlybyError::NoDataSource));
    }

    #[test]
    fn query_returns_cloned_survivors() {
        let outcome = api()
            .query(QueryParams {
                date: Some(date(2020, 1, 1)),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(outcome.neos.len(), 1);
        assert_eq!(outcome.neos[0].name, "Eros");
        // the clone carries the full approach history of the canonical instance
        assert_eq!(outcome.neos[0].approaches.len(), 2);
    }

    #[test]
    fn query_warns_about_dropped_filters() {
        let outcome = api()
            .query(QueryParams {
                filters: vec!["albedo:=:0.25".to_string()],
                ..Default::default()
            })
            .unwrap();

        assert!(outcome
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.contains("albedo")));
    }

    #[test]
    fn query_warns_about_unused_approach_filters() {
        let outcome = api()
            .query(QueryParams {
                filters: vec!["distance:>:1".to_string()],
                ..Default::default()
            })
            .unwrap();

        assert!(outcome
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.contains("not used")));
    }

    #[test]
    fn query_notes_the_unimplemented_approach_shape() {
        let outcome = api()
            .query(QueryParams {
                return_kind: Some("path".to_string()),
                ..Default::default()
            })
            .unwrap();

        // still objects, with a notice
        assert!(!outcome.neos.is_empty());
        assert!(outcome
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Info && m.content.contains("not implemented")));
    }

    #[test]
    fn inspect_finds_the_canonical_instance() {
        let outcome = api().inspect("Eros");
        let neo = outcome.neo.unwrap();

        assert_eq!(neo.approaches.len(), 2);
        assert!(outcome.messages.is_empty());
    }

    #[test]
    fn inspect_of_unknown_name_warns_without_error() {
        let outcome = api().inspect("Planet X");

        assert!(outcome.neo.is_none());
        assert_eq!(outcome.messages.len(), 1);
        assert_eq!(outcome.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn stats_summarize_the_dataset() {
        let stats = api().stats();

        assert_eq!(stats.neo_count, 2);
        assert_eq!(stats.approach_count, 3);
        assert_eq!(stats.hazardous_count, 1);
        assert_eq!(
            stats.date_range,
            Some((date(2020, 1, 1), date(2020, 1, 8)))
        );
    }
}
