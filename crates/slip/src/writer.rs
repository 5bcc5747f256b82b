//! Layout writer: the drawing surface the section renderers share

use crate::config::PageBreakPolicy;
use crate::cursor::{LayoutCursor, PageGeometry};
use crate::layout::{Element, FontSpec, LayoutPage, Rule, SlipLayout, TextRun};
use crate::Result;
use pdf_core::{pt_to_mm, Align, Color, PdfError, StandardFont};
use slip_text::wrap_to_width;

/// Collects text runs and rules into pages
///
/// Keeps a current font, text color and page, much like a PDF content stream
/// does, so renderers only pass positions.
#[derive(Debug)]
pub struct SlipWriter {
    geometry: PageGeometry,
    policy: PageBreakPolicy,
    pages: Vec<LayoutPage>,
    /// 0-indexed
    current: usize,
    font: FontSpec,
    text_color: Color,
}

impl SlipWriter {
    /// Writer with a single empty page
    pub fn new(geometry: PageGeometry, policy: PageBreakPolicy) -> Self {
        Self {
            geometry,
            policy,
            pages: vec![LayoutPage::default()],
            current: 0,
            font: FontSpec::regular(10.0),
            text_color: Color::black(),
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Place one line of text on the current page; empty text is skipped
    pub fn text(&mut self, text: &str, x: f64, y: f64, align: Align) {
        if text.is_empty() {
            return;
        }
        let run = TextRun {
            text: text.to_string(),
            x,
            y,
            font: self.font,
            color: self.text_color,
            align,
        };
        self.pages[self.current].elements.push(Element::Text(run));
    }

    /// Horizontal rule on the current page
    pub fn rule(&mut self, x1: f64, x2: f64, y: f64, width: f64, color: Color) {
        self.pages[self.current].elements.push(Element::Rule(Rule {
            x1,
            x2,
            y,
            width,
            color,
        }));
    }

    /// Width of `text` in the current font, in millimetres
    pub fn text_width(&self, text: &str) -> f64 {
        let font = StandardFont::from_variant(self.font.weight, self.font.style);
        pt_to_mm(font.text_width_points(text, self.font.size))
    }

    /// Wrap `text` to `max_width` millimetres in the current font
    pub fn split_to_width(&self, text: &str, max_width: f64) -> Vec<String> {
        wrap_to_width(text, max_width, &|s: &str| self.text_width(s))
    }

    /// Wrapped, left-aligned text starting at baseline `y`
    ///
    /// Returns the baseline below the last line. Under
    /// [`PageBreakPolicy::AllSections`] a line that would cross the bottom
    /// reserve moves to a new page.
    pub fn paragraph(&mut self, text: &str, x: f64, y: f64, max_width: f64, line_height: f64) -> f64 {
        let mut cursor = self.cursor_at(y);
        for line in self.split_to_width(text, max_width) {
            self.flow_break(&mut cursor, line_height);
            self.text(&line, x, cursor.y(), Align::Left);
            cursor.advance(line_height);
        }
        cursor.y()
    }

    /// Append a page and make it current; returns its 1-indexed number
    pub fn add_page(&mut self) -> usize {
        self.pages.push(LayoutPage::default());
        self.current = self.pages.len() - 1;
        self.pages.len()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// 1-indexed number of the page being written
    pub fn current_page(&self) -> usize {
        self.current + 1
    }

    /// Switch to an existing page (1-indexed)
    pub fn set_page(&mut self, page: usize) -> Result<()> {
        if page == 0 || page > self.pages.len() {
            return Err(PdfError::InvalidPage(page, self.pages.len()).into());
        }
        self.current = page - 1;
        Ok(())
    }

    pub fn cursor_at(&self, y: f64) -> LayoutCursor {
        LayoutCursor::at(self.geometry, y)
    }

    /// Start a new page when `needed` millimetres do not fit below the cursor
    ///
    /// A cursor still at the top offset never breaks, so a block taller than
    /// a page lands on a fresh page and overflows instead of looping.
    pub fn break_before(&mut self, cursor: &mut LayoutCursor, needed: f64) -> bool {
        if cursor.fits(needed) || cursor.at_top() {
            return false;
        }

        let page = self.add_page();
        tracing::debug!(page, y = cursor.y(), needed, "page break");
        cursor.reset_to_top();
        true
    }

    /// Line-level break for sections other than medications
    pub fn flow_break(&mut self, cursor: &mut LayoutCursor, needed: f64) -> bool {
        match self.policy {
            PageBreakPolicy::AllSections => self.break_before(cursor, needed),
            PageBreakPolicy::MedicationsOnly => false,
        }
    }

    pub fn into_layout(self) -> SlipLayout {
        SlipLayout {
            page_width: self.geometry.width,
            page_height: self.geometry.height,
            pages: self.pages,
        }
    }
}
