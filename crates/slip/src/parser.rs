//! JSON parsing for backend records and clinic info

use crate::{ClinicInfo, Prescription, Result, SlipError};

/// Parse a prescription record from JSON string
pub fn parse_prescription(json: &str) -> Result<Prescription> {
    serde_json::from_str(json).map_err(|e| SlipError::ParseError(format!("prescription: {e}")))
}

/// Parse clinic info from JSON string
pub fn parse_clinic_info(json: &str) -> Result<ClinicInfo> {
    serde_json::from_str(json).map_err(|e| SlipError::ParseError(format!("clinic info: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ref;

    #[test]
    fn test_parse_prescription_expanded() {
        let json = r#"{
            "id": "rx-100",
            "patient": {
                "id": "pat-1",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "phone": "555-0100",
                "date_of_birth": "1990-12-10"
            },
            "doctor": "doc-9",
            "diagnosis": "Seasonal allergies",
            "notes": "Review in two weeks",
            "medications": [
                {
                    "name": "Cetirizine",
                    "dosage": "10mg",
                    "frequency": "Once daily",
                    "duration": "14 days",
                    "instructions": "Take at night",
                    "quantity": 14
                }
            ],
            "created_at": "2024-03-01T10:00:00Z",
            "updated_at": "2024-03-01T10:05:00Z"
        }"#;

        let prescription = parse_prescription(json).unwrap();
        assert_eq!(prescription.id, "rx-100");
        assert!(matches!(prescription.patient, Some(Ref::Expanded(_))));
        assert_eq!(prescription.doctor, Some(Ref::Id("doc-9".to_string())));
        assert_eq!(prescription.medications.len(), 1);
        assert_eq!(prescription.medications[0].quantity, 14);
        assert!(prescription.updated_at.is_some());
    }

    #[test]
    fn test_parse_prescription_missing_created_at() {
        let json = r#"{ "id": "rx-1", "diagnosis": "Flu" }"#;
        let err = parse_prescription(json).unwrap_err();
        assert!(matches!(err, SlipError::ParseError(_)));
        assert!(err.to_string().contains("prescription"));
    }

    #[test]
    fn test_parse_clinic_info() {
        let json = r#"{
            "name": "Riverside Clinic",
            "address": "12 River Rd",
            "phone": "555-0199",
            "email": "hello@riverside.example"
        }"#;

        let clinic = parse_clinic_info(json).unwrap();
        assert_eq!(clinic.name, "Riverside Clinic");
        assert_eq!(clinic.website, None);
    }

    #[test]
    fn test_parse_clinic_info_invalid() {
        assert!(matches!(
            parse_clinic_info("not json"),
            Err(SlipError::ParseError(_))
        ));
    }
}
