//! Page footer

use crate::layout::FontSpec;
use crate::writer::SlipWriter;
use chrono::NaiveDate;
use pdf_core::{Align, Color};
use slip_text::format_short_date;

pub const FOOTER_NOTICE: &str = "This is a computer-generated prescription slip";

const FOOTER_SIZE: f32 = 8.0;

/// Rule plus generation date and notice near the bottom of the current page
///
/// Positioned from the page bottom, independent of the content cursor.
pub fn render_footer(writer: &mut SlipWriter, generated_on: NaiveDate) {
    let geometry = *writer.geometry();
    let y = geometry.footer_y();

    writer.rule(
        geometry.margin_left,
        geometry.right_x(),
        y - 5.0,
        0.3,
        Color::gray(),
    );

    writer.set_font(FontSpec::regular(FOOTER_SIZE));
    writer.set_text_color(Color::gray());
    writer.text(
        &format!("Generated on: {}", format_short_date(generated_on)),
        geometry.margin_left,
        y,
        Align::Left,
    );
    writer.text(FOOTER_NOTICE, geometry.center_x(), y, Align::Center);
    writer.set_text_color(Color::black());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_footer_position() {
        let mut writer = testing::writer();
        render_footer(&mut writer, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

        let layout = writer.into_layout();
        let page = &layout.pages[0];

        let generated = page.find_text("Generated on: 1/5/2024").unwrap();
        assert_eq!(generated.y, 277.0);
        assert_eq!(generated.x, 20.0);
        assert_eq!(generated.color, Color::gray());
        assert_eq!(generated.font.size, FOOTER_SIZE);

        let notice = page.find_text(FOOTER_NOTICE).unwrap();
        assert_eq!(notice.align, Align::Center);
        assert_eq!(notice.x, 105.0);

        let rule = page.rules().next().unwrap();
        assert_eq!(rule.y, 272.0);
        assert_eq!(rule.width, 0.3);
    }

    #[test]
    fn test_footer_restores_text_color() {
        let mut writer = testing::writer();
        render_footer(&mut writer, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        writer.text("after", 20.0, 100.0, Align::Left);

        let layout = writer.into_layout();
        assert_eq!(layout.pages[0].find_text("after").unwrap().color, Color::black());
    }
}
