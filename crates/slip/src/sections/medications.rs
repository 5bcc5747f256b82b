//! Medication list with per-entry page breaks

use super::{non_blank, section_label, BODY_SIZE, DETAIL_LINE_HEIGHT, LINE_HEIGHT};
use crate::layout::FontSpec;
use crate::writer::SlipWriter;
use crate::{Medication, PrescriptionSlipData};
use pdf_core::Align;

const DETAIL_SIZE: f32 = 10.0;
const DETAIL_INDENT: f64 = 5.0;
const ENTRY_GAP: f64 = 5.0;

/// Numbered entries in prescribing order
///
/// Each entry is measured before it is drawn; when it would cross the bottom
/// reserve it moves whole to a new page, so an entry is never split.
pub fn render_medications(writer: &mut SlipWriter, data: &PrescriptionSlipData, y: f64) -> f64 {
    let y = section_label(writer, "MEDICATIONS", y) + 1.0;
    let mut cursor = writer.cursor_at(y);

    for (index, medication) in data.medications.iter().enumerate() {
        let instructions = instruction_lines(writer, medication);
        let needed = entry_height(instructions.len());
        if writer.break_before(&mut cursor, needed) {
            tracing::debug!(entry = index + 1, "medication moved to next page");
        }

        let left = writer.geometry().margin_left;
        let detail_x = left + DETAIL_INDENT;

        writer.set_font(FontSpec::bold(BODY_SIZE));
        writer.text(
            &format!("{}. {}", index + 1, medication.name),
            left,
            cursor.y(),
            Align::Left,
        );
        cursor.advance(LINE_HEIGHT);

        writer.set_font(FontSpec::regular(DETAIL_SIZE));
        for detail in [
            format!("Dosage: {}", medication.dosage),
            format!("Frequency: {}", medication.frequency),
            format!("Duration: {}", medication.duration),
            format!("Quantity: {} units", medication.quantity),
        ] {
            writer.text(&detail, detail_x, cursor.y(), Align::Left);
            cursor.advance(DETAIL_LINE_HEIGHT);
        }

        writer.set_font(FontSpec::italic(DETAIL_SIZE));
        for line in &instructions {
            writer.text(line, detail_x, cursor.y(), Align::Left);
            cursor.advance(DETAIL_LINE_HEIGHT);
        }

        cursor.advance(ENTRY_GAP);
    }

    cursor.y()
}

fn entry_height(instruction_lines: usize) -> f64 {
    LINE_HEIGHT + 4.0 * DETAIL_LINE_HEIGHT + instruction_lines as f64 * DETAIL_LINE_HEIGHT
}

fn instruction_lines(writer: &mut SlipWriter, medication: &Medication) -> Vec<String> {
    let Some(instructions) = non_blank(Some(medication.instructions.as_str())) else {
        return Vec::new();
    };

    let width = writer.geometry().content_width() - DETAIL_INDENT;
    writer.set_font(FontSpec::italic(DETAIL_SIZE));
    writer.split_to_width(&format!("Instructions: {instructions}"), width)
}
