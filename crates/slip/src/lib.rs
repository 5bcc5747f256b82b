//! Slip - prescription slip layout and export
//!
//! This crate provides:
//! - The backend `Prescription` record shape and the `ClinicInfo` header data
//! - A pure transform into `PrescriptionSlipData`
//! - A layout engine (cursor, writer, section renderers) producing a
//!   paginated `SlipLayout`
//! - PDF serialization and save targets for the finished document
//!
//! # Example
//!
//! ```ignore
//! use slip::{parse_clinic_info, parse_prescription, DirectoryTarget, SlipConfig, SlipGenerator};
//!
//! let prescription = parse_prescription(&prescription_json)?;
//! let clinic = parse_clinic_info(&clinic_json)?;
//! let data = slip::convert_to_slip_data_today(&prescription);
//!
//! let generator = SlipGenerator::new(SlipConfig::default())?;
//! let mut target = DirectoryTarget::new("output");
//! let filename = generator.export(&data, &clinic, &mut target)?;
//! ```

pub mod config;
pub mod cursor;
pub mod export;
pub mod layout;
pub mod model;
pub mod parser;
pub mod sections;
pub mod writer;

mod generator;
mod render;
mod transform;

pub use config::{FooterPlacement, PageBreakPolicy, PageFormat, SlipConfig};
pub use cursor::{LayoutCursor, PageGeometry};
pub use export::{slip_filename, DirectoryTarget, MemoryTarget, SaveTarget};
pub use generator::SlipGenerator;
pub use layout::{Element, FontSpec, LayoutPage, Rule, SlipLayout, TextRun};
pub use model::*;
pub use parser::{parse_clinic_info, parse_prescription};
pub use render::{render_pdf, RenderOptions};
pub use transform::{convert_to_slip_data, convert_to_slip_data_today};
pub use writer::SlipWriter;

use thiserror::Error;

/// Errors that can occur while building or exporting a slip
#[derive(Debug, Error)]
pub enum SlipError {
    #[error("Failed to parse input: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Invalid file name: {0}")]
    InvalidFilename(String),

    #[error("Export error: {0}")]
    ExportError(String),

    #[error("PDF error: {0}")]
    PdfError(#[from] pdf_core::PdfError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for slip operations
pub type Result<T> = std::result::Result<T, SlipError>;
