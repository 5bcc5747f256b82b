//! Clinic header and prescription date

use super::non_blank;
use crate::layout::FontSpec;
use crate::writer::SlipWriter;
use crate::{ClinicInfo, PrescriptionSlipData};
use chrono::Local;
use pdf_core::{Align, Color};
use slip_text::format_long_date;

const NAME_SIZE: f32 = 20.0;
const NAME_LINE_HEIGHT: f64 = 8.0;
const CONTACT_SIZE: f32 = 10.0;
const CONTACT_LINE_HEIGHT: f64 = 5.0;

/// Clinic name, contact line, optional website and a separator rule
pub fn render_clinic_header(writer: &mut SlipWriter, clinic: &ClinicInfo, y: f64) -> f64 {
    let geometry = *writer.geometry();
    let center = geometry.center_x();
    let width = geometry.content_width();
    let mut y = y;

    writer.set_text_color(Color::black());
    writer.set_font(FontSpec::bold(NAME_SIZE));
    for line in writer.split_to_width(&clinic.name.to_uppercase(), width) {
        writer.text(&line, center, y, Align::Center);
        y += NAME_LINE_HEIGHT;
    }

    writer.set_font(FontSpec::regular(CONTACT_SIZE));
    let contact = [&clinic.address, &clinic.phone, &clinic.email]
        .into_iter()
        .filter_map(|part| non_blank(Some(part.as_str())))
        .collect::<Vec<_>>()
        .join(" | ");
    if !contact.is_empty() {
        for line in writer.split_to_width(&contact, width) {
            writer.text(&line, center, y, Align::Center);
            y += CONTACT_LINE_HEIGHT;
        }
    }

    if let Some(website) = non_blank(clinic.website.as_deref()) {
        writer.text(website, center, y, Align::Center);
        y += CONTACT_LINE_HEIGHT;
    }

    y += 3.0;
    writer.rule(geometry.margin_left, geometry.right_x(), y, 0.5, Color::black());
    y + 10.0
}

/// Right-aligned `Date: Mon, January 15, 2024` from the creation timestamp
///
/// The timestamp is shown in local time, the same calendar the footer date
/// and the patient's age are taken from.
pub fn render_date(writer: &mut SlipWriter, data: &PrescriptionSlipData, y: f64) -> f64 {
    let x = writer.geometry().right_x();
    let date = format_long_date(
        data.prescription
            .created_at
            .with_timezone(&Local)
            .date_naive(),
    );

    writer.set_font(FontSpec::regular(CONTACT_SIZE));
    writer.text(&format!("Date: {date}"), x, y, Align::Right);
    y + 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_lines() {
        let mut writer = testing::writer();
        let y = render_clinic_header(&mut writer, &testing::clinic(), 20.0);
        // name 8 + contact 5 + website 5 + 3 + 10
        assert_eq!(y, 51.0);

        let layout = writer.into_layout();
        let page = &layout.pages[0];
        let name = page.find_text("RIVERSIDE FAMILY CLINIC").unwrap();
        assert_eq!(name.align, Align::Center);
        assert_eq!(name.x, 105.0);
        assert!(name.font.is_bold());

        assert!(page
            .find_text("12 River Road, Springfield | 555-0199 | hello@riverside.example")
            .is_some());
        assert!(page.find_text("www.riverside.example").is_some());

        let rule = page.rules().next().unwrap();
        assert_eq!((rule.x1, rule.x2, rule.y), (20.0, 190.0, 41.0));
    }

    #[test]
    fn test_header_skips_blank_contact_parts() {
        let mut clinic = testing::clinic();
        clinic.phone = " ".to_string();
        clinic.website = None;

        let mut writer = testing::writer();
        let y = render_clinic_header(&mut writer, &clinic, 20.0);
        assert_eq!(y, 46.0);

        let layout = writer.into_layout();
        assert!(layout.pages[0]
            .find_text("12 River Road, Springfield | hello@riverside.example")
            .is_some());
    }

    #[test]
    fn test_long_clinic_name_wraps() {
        let mut clinic = testing::clinic();
        clinic.name = "The Greater Metropolitan Riverside Community Family Health and Wellness Clinic"
            .to_string();

        let mut writer = testing::writer();
        render_clinic_header(&mut writer, &clinic, 20.0);
        let layout = writer.into_layout();
        let bold_lines = layout.pages[0]
            .texts()
            .filter(|run| run.font.size == NAME_SIZE)
            .count();
        assert!(bold_lines >= 2);
    }

    #[test]
    fn test_date_line() {
        let mut writer = testing::writer();
        let y = render_date(&mut writer, &testing::data(), 51.0);
        assert_eq!(y, 61.0);

        let layout = writer.into_layout();
        let run = layout.pages[0].find_text("Date: Mon, January 15, 2024").unwrap();
        assert_eq!(run.align, Align::Right);
        assert_eq!(run.x, 190.0);
    }

    #[test]
    fn test_date_uses_local_calendar_day() {
        // Late evening UTC lands on another day in many zones
        let created_at = Utc.with_ymd_and_hms(2024, 3, 9, 23, 30, 0).unwrap();
        let mut data = testing::data();
        data.prescription.created_at = created_at;

        let mut writer = testing::writer();
        render_date(&mut writer, &data, 51.0);

        let local_day = created_at.with_timezone(&Local).date_naive();
        let expected = format!("Date: {}", format_long_date(local_day));
        assert!(writer.into_layout().pages[0].find_text(&expected).is_some());
    }
}
