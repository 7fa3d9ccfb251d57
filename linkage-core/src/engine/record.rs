//! Identity records as the orchestrator hands them over.
//!
//! Every field is optional: online registrations and decades-old registry
//! rows are both routinely incomplete.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::normalize::{
    normalize_arabic_name, normalize_document_number, normalize_latin_name, normalize_phone_with,
    NormalizedName,
};

/// One citizen identity, raw as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    /// Caller-owned identifier (registry key or online application id)
    pub id: String,
    pub first_name_ar: Option<String>,
    pub father_name_ar: Option<String>,
    pub last_name_ar: Option<String>,
    pub first_name_en: Option<String>,
    pub last_name_en: Option<String>,
    pub phone: Option<String>,
    pub document_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl IdentityRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the Arabic first, father's and last names.
    pub fn with_arabic_names(mut self, first: &str, father: &str, last: &str) -> Self {
        self.first_name_ar = Some(first.to_string());
        self.father_name_ar = Some(father.to_string());
        self.last_name_ar = Some(last.to_string());
        self
    }

    /// Set the Latin first and last names.
    pub fn with_latin_names(mut self, first: &str, last: &str) -> Self {
        self.first_name_en = Some(first.to_string());
        self.last_name_en = Some(last.to_string());
        self
    }

    /// Run every field through its normalization pipeline.
    pub fn normalized(&self, country_code: &str) -> NormalizedRecord {
        let arabic = |f: &Option<String>| {
            f.as_deref()
                .and_then(normalize_arabic_name)
                .map(NormalizedName::into_string)
        };
        let latin = |f: &Option<String>| {
            f.as_deref()
                .and_then(normalize_latin_name)
                .map(NormalizedName::into_string)
        };

        NormalizedRecord {
            id: self.id.clone(),
            first_name_ar: arabic(&self.first_name_ar),
            father_name_ar: arabic(&self.father_name_ar),
            last_name_ar: arabic(&self.last_name_ar),
            first_name_en: latin(&self.first_name_en),
            last_name_en: latin(&self.last_name_en),
            phone: self
                .phone
                .as_deref()
                .and_then(|p| normalize_phone_with(p, country_code)),
            document_number: self
                .document_number
                .as_deref()
                .and_then(normalize_document_number),
            date_of_birth: self.date_of_birth,
        }
    }
}

/// An [`IdentityRecord`] after normalization; blank fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub id: String,
    pub first_name_ar: Option<String>,
    pub father_name_ar: Option<String>,
    pub last_name_ar: Option<String>,
    pub first_name_en: Option<String>,
    pub last_name_en: Option<String>,
    pub phone: Option<String>,
    pub document_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_record() {
        let record = IdentityRecord {
            phone: Some("03 123 456".into()),
            document_number: Some("ab-1234".into()),
            ..IdentityRecord::new("online-1")
                .with_arabic_names("أحمـد", "علي", "  ")
                .with_latin_names("Ahmad", "Haddâd")
        };

        let norm = record.normalized("961");
        assert_eq!(norm.id, "online-1");
        assert_eq!(norm.first_name_ar.as_deref(), Some("احمد"));
        assert_eq!(norm.father_name_ar.as_deref(), Some("علي"));
        assert_eq!(norm.last_name_ar, None);
        assert_eq!(norm.first_name_en.as_deref(), Some("ahmad"));
        assert_eq!(norm.last_name_en.as_deref(), Some("haddad"));
        assert_eq!(norm.phone.as_deref(), Some("+9613123456"));
        assert_eq!(norm.document_number.as_deref(), Some("AB1234"));
    }

    #[test]
    fn test_empty_record_normalizes_to_nothing() {
        let norm = IdentityRecord::new("r").normalized("961");
        assert_eq!(norm, NormalizedRecord { id: "r".into(), ..Default::default() });
    }

    #[test]
    fn test_record_json_shape() {
        let record = IdentityRecord {
            date_of_birth: NaiveDate::from_ymd_opt(1988, 2, 29),
            ..IdentityRecord::new("r-9").with_latin_names("Nour", "Saad")
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["firstNameEn"], "Nour");
        assert_eq!(json["dateOfBirth"], "1988-02-29");

        let back: IdentityRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
