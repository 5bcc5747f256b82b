//! Slip assembly: runs the section renderers in order and exports the result

use crate::config::{FooterPlacement, SlipConfig};
use crate::export::{slip_filename, SaveTarget};
use crate::layout::SlipLayout;
use crate::render::{render_pdf, RenderOptions};
use crate::sections::{
    render_clinic_header, render_date, render_diagnosis, render_doctor, render_footer,
    render_instructions, render_medications, render_notes, render_patient,
};
use crate::writer::SlipWriter;
use crate::{ClinicInfo, PrescriptionSlipData, Result};
use chrono::{Local, NaiveDate};

/// Prescription slip generator
///
/// Holds a validated configuration; every call lays out a fresh document.
#[derive(Debug, Clone)]
pub struct SlipGenerator {
    config: SlipConfig,
    generated_on: Option<NaiveDate>,
}

impl SlipGenerator {
    /// Create a generator, validating the configuration
    pub fn new(config: SlipConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            generated_on: None,
        })
    }

    /// Fix the date printed in the footer instead of using today's date
    pub fn generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    pub fn config(&self) -> &SlipConfig {
        &self.config
    }

    /// Lay out the slip without producing PDF bytes
    pub fn layout(&self, data: &PrescriptionSlipData, clinic: &ClinicInfo) -> Result<SlipLayout> {
        let geometry = self.config.geometry();
        let mut writer = SlipWriter::new(geometry, self.config.page_breaks);

        let mut y = geometry.top_offset;
        y = render_clinic_header(&mut writer, clinic, y);
        y = render_date(&mut writer, data, y);
        y = render_patient(&mut writer, data, y);
        y = render_doctor(&mut writer, data, y);
        y = render_diagnosis(&mut writer, data, y);
        y = render_medications(&mut writer, data, y);
        if self.config.include_notes {
            y = render_notes(&mut writer, data, y);
        } else {
            tracing::debug!("clinical notes disabled by configuration");
        }
        y = render_instructions(&mut writer, y);
        tracing::debug!(end_y = y, pages = writer.page_count(), "body laid out");

        let generated_on = self
            .generated_on
            .unwrap_or_else(|| Local::now().date_naive());
        let last_page = writer.page_count();
        let footer_pages = match self.config.footer {
            FooterPlacement::EveryPage => 1..=last_page,
            FooterPlacement::LastPage => last_page..=last_page,
        };
        for page in footer_pages {
            writer.set_page(page)?;
            render_footer(&mut writer, generated_on);
        }

        Ok(writer.into_layout())
    }

    /// Lay out and serialize the slip to PDF bytes
    pub fn generate(&self, data: &PrescriptionSlipData, clinic: &ClinicInfo) -> Result<Vec<u8>> {
        let layout = self.layout(data, clinic)?;
        let options = RenderOptions {
            title: Some(format!("Prescription Slip {}", data.prescription.id)),
            compress: self.config.compress,
        };
        render_pdf(&layout, &options)
    }

    /// Generate the slip and hand it to `target`; returns the file name used
    ///
    /// Nothing reaches the target unless the whole document serialized.
    pub fn export(
        &self,
        data: &PrescriptionSlipData,
        clinic: &ClinicInfo,
        target: &mut dyn SaveTarget,
    ) -> Result<String> {
        let bytes = self.generate(data, clinic)?;
        let filename = slip_filename(&data.prescription.id);
        target.save(&filename, &bytes)?;
        tracing::info!(%filename, bytes = bytes.len(), "exported prescription slip");
        Ok(filename)
    }
}
