//! Paginated tabular report document (PDF)
//!
//! Layout and serialization are separate steps: [`TabularDocument::layout`]
//! places every title, header and cell, and [`write_pdf`] encodes the result.

pub mod layout;
pub mod writer;

pub use layout::{Element, Font, Page, Position, TablePlacement, TabularDocument};
pub use writer::{render_pdf, write_pdf};

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::ReportData;

/// Lay out and write a report as a PDF document
pub fn write_report_pdf<W: Write>(
    data: &ReportData,
    period: &str,
    writer: &mut W,
) -> ExpenseResult<()> {
    let document = TabularDocument::layout(data, period);
    write_pdf(&document, writer)
}
