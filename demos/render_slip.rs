//! Prescription Slip Renderer
//!
//! Renders a prescription slip PDF from a prescription record and clinic info.
//! The output file is named `prescription-slip-<id>.pdf`.
//!
//! Usage:
//!   cargo run -p slip --example render_slip -- <prescription.json> <clinic.json> [out_dir] [config.json]
//!
//! Examples:
//!   cargo run -p slip --example render_slip -- demos/input/prescription.json demos/input/clinic.json
//!   RUST_LOG=slip=debug cargo run -p slip --example render_slip -- demos/input/prescription.json demos/input/clinic.json output demos/input/config.json

use anyhow::Context;
use slip::{
    convert_to_slip_data_today, parse_clinic_info, parse_prescription, DirectoryTarget, SlipConfig,
    SlipGenerator,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} <prescription.json> <clinic.json> [out_dir] [config.json]",
            args[0]
        );
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run -p slip --example render_slip -- demos/input/prescription.json demos/input/clinic.json");
        std::process::exit(1);
    }

    let prescription_path = &args[1];
    let clinic_path = &args[2];
    let out_dir = args.get(3).map(String::as_str).unwrap_or("output");

    let prescription_json = std::fs::read_to_string(prescription_path)
        .with_context(|| format!("Failed to read prescription '{prescription_path}'"))?;
    let clinic_json = std::fs::read_to_string(clinic_path)
        .with_context(|| format!("Failed to read clinic info '{clinic_path}'"))?;

    let config = match args.get(4) {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config '{path}'"))?;
            SlipConfig::from_json(&json)?
        }
        None => SlipConfig::default(),
    };

    let prescription = parse_prescription(&prescription_json)?;
    let clinic = parse_clinic_info(&clinic_json)?;
    let data = convert_to_slip_data_today(&prescription);

    let generator = SlipGenerator::new(config)?;
    let mut target = DirectoryTarget::new(out_dir);
    let filename = generator.export(&data, &clinic, &mut target)?;

    println!("Generated: {}", target.dir().join(filename).display());

    Ok(())
}
