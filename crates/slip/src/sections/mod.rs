//! Section renderers
//!
//! Each renderer draws one block of the slip starting at baseline `y` and
//! returns the baseline where the next block starts. Renderers only share
//! the writer and that threaded position.

mod clinical;
mod footer;
mod header;
mod medications;
mod parties;

pub use clinical::{render_diagnosis, render_instructions, render_notes, PATIENT_INSTRUCTIONS};
pub use footer::{render_footer, FOOTER_NOTICE};
pub use header::{render_clinic_header, render_date};
pub use medications::render_medications;
pub use parties::{render_doctor, render_patient};

use crate::layout::FontSpec;
use crate::writer::SlipWriter;
use pdf_core::Align;

/// Baseline step for body text
pub const LINE_HEIGHT: f64 = 6.0;
/// Baseline step for medication details and small print
pub const DETAIL_LINE_HEIGHT: f64 = 5.0;
/// Space after a section
pub const SECTION_GAP: f64 = 4.0;
/// Offset of the right-hand column from the left margin
pub const RIGHT_COLUMN_OFFSET: f64 = 85.0;

pub(crate) const LABEL_SIZE: f32 = 12.0;
pub(crate) const BODY_SIZE: f32 = 11.0;

/// Bold section heading at the left margin
pub(crate) fn section_label(writer: &mut SlipWriter, label: &str, y: f64) -> f64 {
    let mut cursor = writer.cursor_at(y);
    // Keep the heading with at least its first line
    writer.flow_break(&mut cursor, 7.0 + LINE_HEIGHT);

    let x = writer.geometry().margin_left;
    writer.set_font(FontSpec::bold(LABEL_SIZE));
    writer.text(label, x, cursor.y(), Align::Left);
    cursor.advance(7.0)
}

/// A value worth printing: present and not just whitespace
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
