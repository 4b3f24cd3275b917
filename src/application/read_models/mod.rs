//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of session state for output.

mod catalog_report;
mod catalog_report_builder;

pub use catalog_report::{CatalogReport, ProjectView, ReportMetadata};
pub use catalog_report_builder::CatalogReportBuilder;
