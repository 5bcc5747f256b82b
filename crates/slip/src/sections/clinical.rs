//! Free-text sections: diagnosis, clinical notes and the fixed instructions

use super::{non_blank, section_label, BODY_SIZE, DETAIL_LINE_HEIGHT, LINE_HEIGHT, SECTION_GAP};
use crate::layout::FontSpec;
use crate::writer::SlipWriter;
use crate::PrescriptionSlipData;

/// Printed on every slip, in this order
pub const PATIENT_INSTRUCTIONS: [&str; 5] = [
    "Take medications exactly as prescribed. Do not change the dose without consulting your doctor.",
    "Complete the full course of treatment even if you start to feel better.",
    "Store medications in a cool, dry place out of the reach of children.",
    "Contact your doctor immediately if you experience any adverse reactions.",
    "Bring this prescription slip to your next appointment.",
];

const INSTRUCTION_SIZE: f32 = 9.0;

pub fn render_diagnosis(writer: &mut SlipWriter, data: &PrescriptionSlipData, y: f64) -> f64 {
    let y = section_label(writer, "DIAGNOSIS", y);
    let y = body_text(writer, &data.prescription.diagnosis, y);
    y + SECTION_GAP
}

/// Clinical notes; a no-op returning `y` when the notes are absent or blank
pub fn render_notes(writer: &mut SlipWriter, data: &PrescriptionSlipData, y: f64) -> f64 {
    let Some(notes) = non_blank(data.prescription.notes.as_deref()) else {
        tracing::debug!("no clinical notes to render");
        return y;
    };

    let y = section_label(writer, "CLINICAL NOTES", y);
    let y = body_text(writer, notes, y);
    y + SECTION_GAP
}

pub fn render_instructions(writer: &mut SlipWriter, y: f64) -> f64 {
    let mut y = section_label(writer, "IMPORTANT INSTRUCTIONS", y);

    let geometry = *writer.geometry();
    writer.set_font(FontSpec::regular(INSTRUCTION_SIZE));
    for instruction in PATIENT_INSTRUCTIONS {
        y = writer.paragraph(
            &format!("\u{2022} {instruction}"),
            geometry.margin_left,
            y,
            geometry.content_width(),
            DETAIL_LINE_HEIGHT,
        );
    }

    y + SECTION_GAP
}

fn body_text(writer: &mut SlipWriter, text: &str, y: f64) -> f64 {
    let geometry = *writer.geometry();
    writer.set_font(FontSpec::regular(BODY_SIZE));
    writer.paragraph(
        text,
        geometry.margin_left,
        y,
        geometry.content_width(),
        LINE_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing;
    use crate::{PageBreakPolicy, SlipConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_diagnosis() {
        let mut writer = testing::writer();
        let y = render_diagnosis(&mut writer, &testing::data(), 107.0);
        assert_eq!(y, 124.0);

        let layout = writer.into_layout();
        assert!(layout.pages[0].find_text("DIAGNOSIS").is_some());
        assert!(layout.pages[0].find_text("Acute bronchitis").is_some());
    }

    #[test]
    fn test_long_diagnosis_wraps() {
        let mut data = testing::data();
        data.prescription.diagnosis = "Community acquired pneumonia ".repeat(10);

        let mut writer = testing::writer();
        let y = render_diagnosis(&mut writer, &data, 100.0);
        let layout = writer.into_layout();
        let lines = layout.pages[0].texts().count() - 1;
        assert!(lines > 1);
        assert_eq!(y, 100.0 + 7.0 + lines as f64 * LINE_HEIGHT + SECTION_GAP);
    }

    #[test]
    fn test_notes_rendered() {
        let mut writer = testing::writer();
        let y = render_notes(&mut writer, &testing::data(), 150.0);
        assert_eq!(y, 167.0);
        let layout = writer.into_layout();
        assert!(layout.pages[0].find_text("CLINICAL NOTES").is_some());
        assert!(layout.pages[0].find_text("Return if fever persists").is_some());
    }

    #[test]
    fn test_notes_blank_or_absent() {
        for notes in [None, Some(String::new()), Some("  \n ".to_string())] {
            let mut data = testing::data();
            data.prescription.notes = notes;

            let mut writer = testing::writer();
            assert_eq!(render_notes(&mut writer, &data, 150.0), 150.0);
            assert!(!writer.into_layout().contains_text("CLINICAL NOTES"));
        }
    }

    #[test]
    fn test_instructions_fixed_text() {
        let mut writer = testing::writer();
        render_instructions(&mut writer, 150.0);
        let layout = writer.into_layout();
        let page = &layout.pages[0];

        assert!(page.find_text("IMPORTANT INSTRUCTIONS").is_some());
        assert!(page.contains_text("\u{2022} Take medications exactly as prescribed."));
        assert!(page.contains_text("\u{2022} Bring this prescription slip to your next appointment."));
        let bullets = page.texts().filter(|run| run.text.starts_with('\u{2022}')).count();
        assert_eq!(bullets, PATIENT_INSTRUCTIONS.len());
    }

    #[test]
    fn test_instructions_overflow_without_flow_breaks() {
        let mut writer = testing::writer();
        render_instructions(&mut writer, 250.0);
        assert_eq!(writer.page_count(), 1);
    }

    #[test]
    fn test_instructions_flow_with_all_sections() {
        let mut writer = SlipWriter::new(
            SlipConfig::default().geometry(),
            PageBreakPolicy::AllSections,
        );
        render_instructions(&mut writer, 250.0);
        assert_eq!(writer.page_count(), 2);
        let layout = writer.into_layout();
        assert!(layout.pages[0].find_text("IMPORTANT INSTRUCTIONS").is_none());
        assert!(layout.pages[1].find_text("IMPORTANT INSTRUCTIONS").is_some());
    }
}
