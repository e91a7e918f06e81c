//! # Testboard Architecture
//!
//! Testboard is the list-view core of a test automation dashboard: the
//! filtering, sorting and paging behind the executions, results, users and
//! sectors screens. It is a library first; the `testboard` binary is one
//! client that reads list snapshots from disk and prints the views.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Fills page sizes from the configuration                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, stats, options, config                             │
//! │  - Returns Rust types plus user-facing messages             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Beside the layers sit the pure parts: [`view`] (schemas, filter state,
//! the derive engine, pagination), [`model`] (entity records) and
//! [`stats`]. None of them does I/O, so a web front end could drive the
//! same engine.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`store`]: Snapshot storage abstraction and implementations
//! - [`view`]: Filter/sort/paginate engine
//! - [`model`]: Executions, results, users, sectors
//! - [`stats`]: Summary figures and dropdown options
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod stats;
pub mod store;
pub mod view;
