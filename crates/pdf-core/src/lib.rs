//! PDF Core - Low-level PDF writing
//!
//! This crate provides functionality for:
//! - Creating new PDF documents with fixed-size pages
//! - Using the standard Helvetica family (no font files needed)
//! - Measuring text with built-in font metrics
//! - Inserting text and horizontal rules at specific coordinates
//! - Saving documents with compressed content streams
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{Align, FontWeight, PageSize, PdfDocument};
//!
//! let mut doc = PdfDocument::new(PageSize::A4);
//! let page = doc.add_page();
//! doc.set_font_size(12.0);
//! doc.set_font_weight(FontWeight::Bold);
//! doc.insert_text("Hello, World!", page, 297.6, 72.0, Align::Center)?;
//! doc.save("output.pdf")?;
//! ```

mod document;
mod font;
mod text;

pub use document::{Color, PageSize, PdfDocument};
pub use font::{
    encode_text_hex, encode_text_string, encode_win_ansi, FontStyle, FontWeight, StandardFont,
};
pub use text::{generate_line_operators, generate_text_operators, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("Character {character:?} cannot be written in WinAnsi text: {text:?}")]
    UnencodableText { character: char, text: String },

    #[error("Compression error: {0}")]
    CompressionError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Points per millimetre (1 pt = 1/72 inch)
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Convert millimetres to PDF points
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

/// Convert PDF points to millimetres
pub fn pt_to_mm(pt: f64) -> f64 {
    pt / POINTS_PER_MM
}
