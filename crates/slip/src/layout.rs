//! Paginated page description produced by the layout pass
//!
//! Coordinates are millimetres from the top-left corner of the page. For text
//! `y` is the baseline and `x` is the anchor selected by `align`.

use pdf_core::{Align, Color, FontStyle, FontWeight};

/// Font selection for a text run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Size in points
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl FontSpec {
    pub fn regular(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::regular(size)
        }
    }

    pub fn italic(size: f32) -> Self {
        Self {
            style: FontStyle::Italic,
            ..Self::regular(size)
        }
    }

    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }

    pub fn is_italic(&self) -> bool {
        self.style == FontStyle::Italic
    }
}

/// One line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: FontSpec,
    pub color: Color,
    pub align: Align,
}

/// A horizontal line
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    /// Stroke width in millimetres
    pub width: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextRun),
    Rule(Rule),
}

/// Elements of a single page in drawing order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPage {
    pub elements: Vec<Element>,
}

impl LayoutPage {
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text(run) => Some(run),
            Element::Rule(_) => None,
        })
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.elements.iter().filter_map(|element| match element {
            Element::Rule(rule) => Some(rule),
            Element::Text(_) => None,
        })
    }

    /// First text run with exactly this text
    pub fn find_text(&self, text: &str) -> Option<&TextRun> {
        self.texts().find(|run| run.text == text)
    }

    /// Whether any text run contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|run| run.text.contains(needle))
    }
}

/// The complete paginated slip
#[derive(Debug, Clone, PartialEq)]
pub struct SlipLayout {
    pub page_width: f64,
    pub page_height: f64,
    pub pages: Vec<LayoutPage>,
}

impl SlipLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text runs with their 1-indexed page number
    pub fn texts(&self) -> impl Iterator<Item = (usize, &TextRun)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(index, page)| page.texts().map(move |run| (index + 1, run)))
    }

    /// Page number and run of the first text run with exactly this text
    pub fn find_text(&self, text: &str) -> Option<(usize, &TextRun)> {
        self.texts().find(|(_, run)| run.text == text)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.pages.iter().any(|page| page.contains_text(needle))
    }
}
