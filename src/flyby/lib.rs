//! # Flyby Architecture
//!
//! Flyby is a **UI-agnostic search library** over a tabular dataset of
//! close-approach records. This is not a CLI application that happens to have
//! some library code; it's a library that happens to have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: load, query, inspect, stats                 │
//! │  - Returns structured results plus user-facing messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model / database / query / filter / search)          │
//! │  - Pure in-memory logic, no I/O assumptions whatsoever      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Ingestion (ingest.rs)                                      │
//! │  - Delimited-text reader with an explicit row schema        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Index System
//!
//! The dataset is loaded once into a [`database::NeoDatabase`], which keeps
//! two derived mappings: approach date → the objects recorded on that day,
//! and object name → the single canonical [`model::NearEarthObject`]
//! instance. Repeated rows for the same name never create duplicates; they
//! append another [`model::CloseApproach`] to the existing object. After the
//! load the database is read-only, so the [`search::Searcher`] can borrow it
//! immutably for the lifetime of the process.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types (`Result<…>`), never writes to stdout/stderr, and never calls
//! `std::process::exit`. The same core could serve a REST API or any other
//! UI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`model`]: Core data types (`NearEarthObject`, `CloseApproach`)
//! - [`database`]: The by-date / by-name index store
//! - [`query`]: Loose parameters → normalized query descriptor
//! - [`filter`]: `field:op:value` predicates and their application
//! - [`search`]: Date search plus the result pipeline
//! - [`ingest`]: CSV reading with documented field defaults
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod model;
pub mod query;
pub mod search;
