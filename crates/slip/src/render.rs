//! PDF output for a finished layout

use crate::layout::{Element, SlipLayout};
use crate::Result;
use pdf_core::{mm_to_pt, PageSize, PdfDocument};

/// Document-level output options
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Written to the document info dictionary
    pub title: Option<String>,
    /// Flate-compress page content streams
    pub compress: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: None,
            compress: true,
        }
    }
}

/// Serialize a layout to PDF bytes, one PDF page per layout page
pub fn render_pdf(layout: &SlipLayout, options: &RenderOptions) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new(PageSize::from_mm(layout.page_width, layout.page_height));
    doc.set_compression(options.compress);
    doc.set_producer("rxslip");
    if let Some(title) = &options.title {
        doc.set_title(title);
    }

    for page in &layout.pages {
        let page_num = doc.add_page();

        for element in &page.elements {
            match element {
                Element::Text(run) => {
                    doc.set_font_size(run.font.size);
                    doc.set_font_weight(run.font.weight);
                    doc.set_font_style(run.font.style);
                    doc.set_text_color(run.color);
                    doc.insert_text(
                        &run.text,
                        page_num,
                        mm_to_pt(run.x),
                        mm_to_pt(run.y),
                        run.align,
                    )?;
                }
                Element::Rule(rule) => {
                    doc.set_draw_color(rule.color);
                    doc.set_line_width(mm_to_pt(rule.width));
                    let y = mm_to_pt(rule.y);
                    doc.draw_line(page_num, mm_to_pt(rule.x1), y, mm_to_pt(rule.x2), y)?;
                }
            }
        }
    }

    tracing::debug!(pages = layout.page_count(), "rendering PDF");
    Ok(doc.to_bytes()?)
}
