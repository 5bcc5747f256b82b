//! Slip configuration

use crate::cursor::PageGeometry;
use crate::{Result, SlipError};
use serde::{Deserialize, Serialize};

/// Supported paper sizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
}

impl PageFormat {
    /// Page width and height in millimetres
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            PageFormat::A4 => (210.0, 297.0),
            PageFormat::Letter => (215.9, 279.4),
        }
    }
}

/// Which pages carry the footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FooterPlacement {
    #[default]
    EveryPage,
    LastPage,
}

/// Where the writer is allowed to start a new page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageBreakPolicy {
    /// Only before a medication entry that would not fit
    #[default]
    MedicationsOnly,
    /// Also between wrapped lines of every other section
    AllSections,
}

/// Layout and output options, all lengths in millimetres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlipConfig {
    pub page_format: PageFormat,
    /// Left and right margin
    pub margin: f64,
    /// First baseline on every page
    pub top_offset: f64,
    /// Space kept free at the bottom of the page for the footer
    pub bottom_reserve: f64,
    /// Distance of the footer text from the page bottom
    pub footer_offset: f64,
    pub include_notes: bool,
    pub footer: FooterPlacement,
    pub page_breaks: PageBreakPolicy,
    /// Flate-compress page content streams
    pub compress: bool,
}

impl Default for SlipConfig {
    fn default() -> Self {
        Self {
            page_format: PageFormat::A4,
            margin: 20.0,
            top_offset: 20.0,
            bottom_reserve: 40.0,
            footer_offset: 20.0,
            include_notes: true,
            footer: FooterPlacement::EveryPage,
            page_breaks: PageBreakPolicy::MedicationsOnly,
            compress: true,
        }
    }
}

impl SlipConfig {
    /// Parse and validate a configuration from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SlipConfig = serde_json::from_str(json)
            .map_err(|e| SlipError::ConfigError(format!("Invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_include_notes(mut self, include_notes: bool) -> Self {
        self.include_notes = include_notes;
        self
    }

    /// Check that the geometry leaves room for content
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("margin", self.margin),
            ("topOffset", self.top_offset),
            ("bottomReserve", self.bottom_reserve),
            ("footerOffset", self.footer_offset),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(SlipError::ConfigError(format!(
                    "{name} must be a non-negative length, got {value}"
                )));
            }
        }

        let (width, height) = self.page_format.dimensions_mm();
        if width - 2.0 * self.margin <= 0.0 {
            return Err(SlipError::ConfigError(format!(
                "margin {} leaves no content width on a {width}mm page",
                self.margin
            )));
        }
        if self.top_offset >= height - self.bottom_reserve {
            return Err(SlipError::ConfigError(format!(
                "topOffset {} must be above the bottom reserve ({}mm from the top)",
                self.top_offset,
                height - self.bottom_reserve
            )));
        }
        if self.footer_offset >= height {
            return Err(SlipError::ConfigError(format!(
                "footerOffset {} is outside the page",
                self.footer_offset
            )));
        }

        Ok(())
    }

    /// Page geometry derived from the format and margins
    pub fn geometry(&self) -> PageGeometry {
        let (width, height) = self.page_format.dimensions_mm();
        PageGeometry {
            width,
            height,
            margin_left: self.margin,
            margin_right: self.margin,
            top_offset: self.top_offset,
            bottom_reserve: self.bottom_reserve,
            footer_offset: self.footer_offset,
        }
    }
}
