//! WASM bindings for rxslip
//!
//! This crate provides a JavaScript-friendly API for:
//! - Generating a prescription slip PDF from backend records
//! - Triggering a browser download of the slip
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { downloadPrescriptionSlip, generatePrescriptionSlip } from 'rxslip-wasm';
//!
//! await init();
//!
//! // Bytes only
//! const pdf = generatePrescriptionSlip(prescription, clinic, { includeNotes: false });
//!
//! // Or save through the browser; returns "prescription-slip-<id>.pdf"
//! const filename = downloadPrescriptionSlip(prescription, clinic);
//! ```

use chrono::Local;
use slip::{
    convert_to_slip_data, slip_filename, ClinicInfo, Prescription, PrescriptionSlipData,
    SaveTarget, SlipConfig, SlipError, SlipGenerator,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Delay before the object URL behind a download is released
const REVOKE_DELAY_MS: i32 = 40_000;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Generate a prescription slip PDF
///
/// @param prescription - Prescription record (patient/doctor expanded or ids)
/// @param clinic - Clinic info for the header
/// @param options - Optional config, e.g. `{ pageFormat: "letter", footer: "lastPage" }`
/// @returns PDF bytes (Uint8Array)
#[wasm_bindgen(js_name = generatePrescriptionSlip)]
pub fn generate_prescription_slip(
    prescription: JsValue,
    clinic: JsValue,
    options: JsValue,
) -> Result<Vec<u8>, JsValue> {
    let (generator, data, clinic) = prepare(prescription, clinic, options)?;
    generator.generate(&data, &clinic).map_err(to_js_error)
}

/// Generate a prescription slip and save it as a browser download
///
/// @param prescription - Prescription record
/// @param clinic - Clinic info for the header
/// @param options - Optional config object
/// @returns The downloaded file name
#[wasm_bindgen(js_name = downloadPrescriptionSlip)]
pub fn download_prescription_slip(
    prescription: JsValue,
    clinic: JsValue,
    options: JsValue,
) -> Result<String, JsValue> {
    let (generator, data, clinic) = prepare(prescription, clinic, options)?;
    generator
        .export(&data, &clinic, &mut BrowserDownload)
        .map_err(to_js_error)
}

/// File name used for a prescription's slip
///
/// @param id - Prescription id
/// @returns "prescription-slip-<id>.pdf"
#[wasm_bindgen(js_name = slipFilename)]
pub fn slip_filename_js(id: &str) -> String {
    slip_filename(id)
}

/// Save target that hands the PDF to the browser through an object URL
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDownload;

impl SaveTarget for BrowserDownload {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> slip::Result<()> {
        trigger_download(filename, bytes)
            .map_err(|e| SlipError::ExportError(js_error_message(&e)))
    }
}

fn trigger_download(filename: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let properties = web_sys::BlobPropertyBag::new();
    properties.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &properties)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    schedule_revoke(&window, url)?;
    tracing::info!(%filename, "browser download triggered");
    Ok(())
}

/// Release the object URL once the browser has had time to start the download
fn schedule_revoke(window: &web_sys::Window, url: String) -> Result<i32, JsValue> {
    let revoke = Closure::once_into_js(move || {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            tracing::warn!(error = %js_error_message(&e), "failed to revoke object URL");
        }
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        revoke.unchecked_ref(),
        REVOKE_DELAY_MS,
    )
}

fn prepare(
    prescription: JsValue,
    clinic: JsValue,
    options: JsValue,
) -> Result<(SlipGenerator, PrescriptionSlipData, ClinicInfo), JsValue> {
    let prescription: Prescription = serde_wasm_bindgen::from_value(prescription)
        .map_err(|e| to_js_error(SlipError::ParseError(format!("prescription: {e}"))))?;
    let clinic: ClinicInfo = serde_wasm_bindgen::from_value(clinic)
        .map_err(|e| to_js_error(SlipError::ParseError(format!("clinic info: {e}"))))?;
    let config = parse_options(options)?;

    let generator = SlipGenerator::new(config).map_err(to_js_error)?;
    let data = convert_to_slip_data(&prescription, Local::now().date_naive());
    Ok((generator, data, clinic))
}

/// Missing options mean the default configuration
fn parse_options(options: JsValue) -> Result<SlipConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(SlipConfig::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| to_js_error(SlipError::ConfigError(e.to_string())))
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
