//! Input records and the per-render slip data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reference that the backend sends either as a bare identifier or as the
/// expanded record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    /// Identifier only (the record was not expanded)
    Id(String),
    /// Fully expanded record
    Expanded(T),
}

impl<T> Ref<T> {
    /// The expanded record, if present
    pub fn expanded(&self) -> Option<&T> {
        match self {
            Ref::Expanded(record) => Some(record),
            Ref::Id(_) => None,
        }
    }

    /// Whether the reference carries the full record
    pub fn is_expanded(&self) -> bool {
        matches!(self, Ref::Expanded(_))
    }
}

/// Patient record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// `YYYY-MM-DD` or a full timestamp
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Doctor record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecord {
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub specialization: Option<String>,
}

/// One prescribed medication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub quantity: u32,
}

/// Prescription record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: String,
    #[serde(default, alias = "patient_id")]
    pub patient: Option<Ref<PatientRecord>>,
    #[serde(default, alias = "doctor_id")]
    pub doctor: Option<Ref<DoctorRecord>>,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Clinic details printed in the slip header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicInfo {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
}

/// Prescription fields used by the slip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlipPrescription {
    pub id: String,
    pub diagnosis: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Patient as displayed on the slip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlipPatient {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

/// Prescribing doctor as displayed on the slip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlipDoctor {
    pub name: String,
    pub specialization: Option<String>,
}

/// Everything one render pass needs, resolved from a `Prescription`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionSlipData {
    pub prescription: SlipPrescription,
    pub patient: SlipPatient,
    pub doctor: SlipDoctor,
    /// In prescribing order
    pub medications: Vec<Medication>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ref_from_string_is_id() {
        let value: Ref<DoctorRecord> = serde_json::from_value(json!("doc-7")).unwrap();
        assert_eq!(value, Ref::Id("doc-7".to_string()));
        assert!(!value.is_expanded());
        assert!(value.expanded().is_none());
    }

    #[test]
    fn test_ref_from_object_is_expanded() {
        let value: Ref<DoctorRecord> = serde_json::from_value(json!({
            "id": "doc-7",
            "first_name": "Grace",
            "last_name": "Hopper",
            "specialization": "Cardiology"
        }))
        .unwrap();
        assert!(value.is_expanded());
        assert_eq!(value.expanded().unwrap().last_name, "Hopper");
    }

    #[test]
    fn test_prescription_accepts_id_aliases() {
        let prescription: Prescription = serde_json::from_value(json!({
            "id": "rx-1",
            "patient_id": "pat-1",
            "doctor_id": "doc-1",
            "diagnosis": "Flu",
            "medications": [],
            "created_at": "2024-01-15T09:30:00Z"
        }))
        .unwrap();
        assert_eq!(prescription.patient, Some(Ref::Id("pat-1".to_string())));
        assert_eq!(prescription.doctor, Some(Ref::Id("doc-1".to_string())));
        assert_eq!(prescription.notes, None);
    }

    #[test]
    fn test_medication_defaults() {
        let medication: Medication = serde_json::from_value(json!({
            "name": "Paracetamol",
            "dosage": "500mg"
        }))
        .unwrap();
        assert_eq!(medication.instructions, "");
        assert_eq!(medication.quantity, 0);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let result: std::result::Result<Medication, _> = serde_json::from_value(json!({
            "name": "Paracetamol",
            "quantity": -3
        }));
        assert!(result.is_err());
    }
}
