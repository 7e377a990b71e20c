//! Expense Tracker - terminal expense ledger with report export
//!
//! This library provides the core functionality for the `expense` binary:
//! recording expenses, aggregating them into report figures, and exporting
//! those figures as PDF, CSV, JSON or YAML artifacts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, report figures, preferences)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Demo and ledger-derived report figures
//! - `export`: Report artifact encoders
//! - `preferences`: Appearance preferences and their store
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::export::{export_report, ReportFormat};
//! use expense_tracker::reports::demo_report;
//!
//! let data = demo_report("6months");
//! let path = export_report(&data, "6months", ReportFormat::Pdf, "exports".as_ref())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod preferences;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
