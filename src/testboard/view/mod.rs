//! # List Views
//!
//! Every list screen of the dashboard (executions, results, users, sectors)
//! works the same way: a source list fetched from the backend, a set of
//! filter fields, a sortable header row and a page bar. This module is that
//! machinery, written once and driven by a per-entity [`Schema`].
//!
//! ## Pieces
//!
//! | Module | Role |
//! |--------|------|
//! | `schema` | Registry of filter fields and sort keys per entity |
//! | `value` | Filter values, record targets, missing-value conversions |
//! | `filter` | `FilterState` and the per-field predicates |
//! | `engine` | `derive()` and the notifying `FilterEngine` |
//! | `page` | `Paginator` and page windows |
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = FilterEngine::new(executions, |view: &[&Execution]| {
//!     println!("{} rows", view.len());
//! });
//! engine.set_filter_field("statut", "error");
//! engine.set_sort("duration"); // descending
//! engine.set_sort("duration"); // ascending
//! ```

mod engine;
mod filter;
mod page;
mod record;
mod schema;
mod value;

pub use engine::{derive, FilterEngine};
pub use filter::{FilterState, SortState};
pub use page::{Page, Paginator, DEFAULT_MAX_VISIBLE_PAGES};
pub use record::Record;
pub use schema::{Direction, FieldSpec, FilterKind, Schema};
pub use value::{
    duration_millis, epoch_millis, parse_timestamp, text_or_empty, timestamp_date, FilterValue,
    SortValue, Target,
};
