//! Conversion from the backend record to per-render slip data

use crate::{
    DoctorRecord, PatientRecord, Prescription, PrescriptionSlipData, SlipDoctor, SlipPatient,
    SlipPrescription,
};
use chrono::{Local, NaiveDate};
use slip_text::{age_on, parse_calendar_date};

/// Shown when the patient reference was not expanded
pub const UNKNOWN_PATIENT: &str = "Unknown Patient";

/// Shown when the doctor reference was not expanded
pub const UNKNOWN_DOCTOR: &str = "Unknown Doctor";

/// Build slip data from a prescription, computing ages as of `today`
///
/// Missing optional fields never fail the conversion: an unexpanded patient
/// or doctor falls back to a placeholder name and an absent or unreadable
/// birth date leaves the age empty.
pub fn convert_to_slip_data(prescription: &Prescription, today: NaiveDate) -> PrescriptionSlipData {
    let patient = match prescription.patient.as_ref().and_then(|p| p.expanded()) {
        Some(record) => slip_patient(record, today),
        None => SlipPatient {
            name: UNKNOWN_PATIENT.to_string(),
            phone: None,
            email: None,
            age: None,
            gender: None,
        },
    };

    let doctor = match prescription.doctor.as_ref().and_then(|d| d.expanded()) {
        Some(record) => slip_doctor(record),
        None => SlipDoctor {
            name: UNKNOWN_DOCTOR.to_string(),
            specialization: None,
        },
    };

    PrescriptionSlipData {
        prescription: SlipPrescription {
            id: prescription.id.clone(),
            diagnosis: prescription.diagnosis.clone(),
            notes: prescription.notes.clone(),
            created_at: prescription.created_at,
        },
        patient,
        doctor,
        medications: prescription.medications.clone(),
    }
}

/// Same as [`convert_to_slip_data`] with today's local date
pub fn convert_to_slip_data_today(prescription: &Prescription) -> PrescriptionSlipData {
    convert_to_slip_data(prescription, Local::now().date_naive())
}

fn slip_patient(record: &PatientRecord, today: NaiveDate) -> SlipPatient {
    let age = record
        .date_of_birth
        .as_deref()
        .and_then(|dob| match parse_calendar_date(dob) {
            Ok(birth) => age_on(birth, today),
            Err(e) => {
                tracing::debug!(patient = %record.id, "ignoring birth date: {e}");
                None
            }
        });

    SlipPatient {
        name: format!("{} {}", record.first_name, record.last_name),
        phone: record.phone.clone(),
        email: record.email.clone(),
        age,
        gender: record.gender.clone(),
    }
}

fn slip_doctor(record: &DoctorRecord) -> SlipDoctor {
    SlipDoctor {
        name: format!("Dr. {} {}", record.first_name, record.last_name),
        specialization: record.specialization.clone(),
    }
}
