//! Patient and prescribing doctor blocks

use super::{non_blank, section_label, BODY_SIZE, LINE_HEIGHT, RIGHT_COLUMN_OFFSET, SECTION_GAP};
use crate::layout::FontSpec;
use crate::writer::SlipWriter;
use crate::PrescriptionSlipData;
use pdf_core::Align;

pub fn render_patient(writer: &mut SlipWriter, data: &PrescriptionSlipData, y: f64) -> f64 {
    let patient = &data.patient;
    let left = writer.geometry().margin_left;
    let right = left + RIGHT_COLUMN_OFFSET;

    let y = section_label(writer, "PATIENT INFORMATION", y);
    let mut cursor = writer.cursor_at(y);

    writer.set_font(FontSpec::bold(BODY_SIZE));
    writer.text(&format!("Name: {}", patient.name), left, cursor.y(), Align::Left);
    cursor.advance(LINE_HEIGHT);

    writer.set_font(FontSpec::regular(BODY_SIZE));
    let phone = non_blank(patient.phone.as_deref());
    let email = non_blank(patient.email.as_deref());
    if phone.is_some() || email.is_some() {
        writer.flow_break(&mut cursor, LINE_HEIGHT);
        if let Some(phone) = phone {
            writer.text(&format!("Phone: {phone}"), left, cursor.y(), Align::Left);
        }
        if let Some(email) = email {
            writer.text(&format!("Email: {email}"), right, cursor.y(), Align::Left);
        }
        cursor.advance(LINE_HEIGHT);
    }

    let mut details = Vec::new();
    if let Some(age) = patient.age {
        details.push(format!("Age: {age} years"));
    }
    if let Some(gender) = non_blank(patient.gender.as_deref()) {
        details.push(format!("Gender: {gender}"));
    }
    if !details.is_empty() {
        writer.flow_break(&mut cursor, LINE_HEIGHT);
        writer.text(&details.join(" | "), left, cursor.y(), Align::Left);
        cursor.advance(LINE_HEIGHT);
    }

    cursor.advance(SECTION_GAP)
}

pub fn render_doctor(writer: &mut SlipWriter, data: &PrescriptionSlipData, y: f64) -> f64 {
    let doctor = &data.doctor;
    let left = writer.geometry().margin_left;

    let y = section_label(writer, "PRESCRIBED BY", y);
    let mut cursor = writer.cursor_at(y);

    writer.set_font(FontSpec::bold(BODY_SIZE));
    writer.text(&doctor.name, left, cursor.y(), Align::Left);

    if let Some(specialization) = non_blank(doctor.specialization.as_deref()) {
        writer.set_font(FontSpec::regular(BODY_SIZE));
        writer.text(specialization, left + RIGHT_COLUMN_OFFSET, cursor.y(), Align::Left);
    }
    cursor.advance(LINE_HEIGHT);

    cursor.advance(SECTION_GAP)
}
