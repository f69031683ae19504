//! The whole form as submitted by a user.
//!
//! [`PatientFormFields`] is the loose boundary shape: every field optional, selector values as
//! text. It is what the CLI reads from YAML and what the API layers fill from their request
//! types. [`PatientFormFields::into_form`] applies form defaults, parses selector labels and
//! clamps measurements, producing a [`PatientForm`].

use crate::constants::{
    DATE_OF_CHECK_FORMAT, DEFAULT_AGE, DEFAULT_CHOLESTEROL, DEFAULT_MAX_HEART_RATE,
    DEFAULT_RESTING_BP, DEFAULT_ST_DEPRESSION,
};
use crate::patient::parse_yes_no;
use crate::{
    AssessmentError, AssessmentResult, ChestPainType, ClinicalDetails, PatientInput, RestingEcg,
    Sex, StSlope, SymptomSelection, Thalassemia,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patient name that is guaranteed non-empty after trimming.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatientName(String);

impl PatientName {
    /// Trims `input`; returns `None` when nothing is left.
    pub fn new(input: impl AsRef<str>) -> Option<Self> {
        let trimmed = input.as_ref().trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PatientName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses the date of check; a blank value means today (UTC).
///
/// # Errors
///
/// Returns [`AssessmentError::InvalidDate`] if the value is not `YYYY-MM-DD`.
pub fn parse_date_of_check(value: Option<&str>) -> AssessmentResult<NaiveDate> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => NaiveDate::parse_from_str(v, DATE_OF_CHECK_FORMAT)
            .map_err(|_| AssessmentError::InvalidDate(v.to_string())),
        None => Ok(chrono::Utc::now().date_naive()),
    }
}

/// A yes/no selector value, written either as a YAML boolean or as text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum YesNo {
    Flag(bool),
    Text(String),
}

impl YesNo {
    fn resolve(self, field: &'static str) -> AssessmentResult<bool> {
        match self {
            Self::Flag(flag) => Ok(flag),
            Self::Text(text) => parse_yes_no(field, &text),
        }
    }
}

/// Raw form values as they arrive from a user.
///
/// Missing fields and blank strings take the form defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PatientFormFields {
    pub name: Option<String>,
    pub date_of_check: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub chest_pain_type: Option<String>,
    pub resting_blood_pressure: Option<i32>,
    pub cholesterol: Option<i32>,
    pub fasting_blood_sugar: Option<YesNo>,
    pub resting_ecg: Option<String>,
    pub max_heart_rate: Option<i32>,
    pub exercise_induced_angina: Option<YesNo>,
    pub st_depression: Option<f64>,
    pub st_slope: Option<String>,
    pub major_vessels: Option<u8>,
    pub thalassemia: Option<String>,
    pub symptoms: Vec<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses an optional selector label, falling back to the type's default option.
fn parse_or_default<T: Default>(
    value: Option<String>,
    parse: fn(&str) -> AssessmentResult<T>,
) -> AssessmentResult<T> {
    non_blank(value)
        .map(|v| parse(&v))
        .transpose()
        .map(Option::unwrap_or_default)
}

impl PatientFormFields {
    /// Parses form fields from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidYaml`] naming the failing field path when the text is
    /// not valid YAML, has an unknown key, or has a value of the wrong type.
    pub fn from_yaml(yaml_text: &str) -> AssessmentResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
        serde_path_to_error::deserialize(deserializer).map_err(|err| {
            let path = err.path().to_string();
            let path = if path.is_empty() || path == "." {
                "<root>".to_string()
            } else {
                path
            };
            AssessmentError::InvalidYaml {
                path,
                source: err.into_inner(),
            }
        })
    }

    /// Applies defaults, parses selector labels and clamps measurements.
    ///
    /// # Errors
    ///
    /// Returns an [`AssessmentError`] for an unknown selector label, an unknown symptom or a
    /// malformed date.
    pub fn into_form(self) -> AssessmentResult<PatientForm> {
        let date_of_check = parse_date_of_check(self.date_of_check.as_deref())?;

        let input = PatientInput::new(
            self.age.unwrap_or(DEFAULT_AGE),
            self.resting_blood_pressure.unwrap_or(DEFAULT_RESTING_BP),
            self.cholesterol.unwrap_or(DEFAULT_CHOLESTEROL),
            self.max_heart_rate.unwrap_or(DEFAULT_MAX_HEART_RATE),
            self.st_depression.unwrap_or(DEFAULT_ST_DEPRESSION),
        );

        let details = ClinicalDetails::new(
            parse_or_default(self.sex, Sex::parse)?,
            parse_or_default(self.chest_pain_type, ChestPainType::parse)?,
            self.fasting_blood_sugar
                .map(|v| v.resolve("fasting_blood_sugar"))
                .transpose()?
                .unwrap_or(true),
            parse_or_default(self.resting_ecg, RestingEcg::parse)?,
            self.exercise_induced_angina
                .map(|v| v.resolve("exercise_induced_angina"))
                .transpose()?
                .unwrap_or(true),
            parse_or_default(self.st_slope, StSlope::parse)?,
            self.major_vessels.unwrap_or(0),
            parse_or_default(self.thalassemia, Thalassemia::parse)?,
        );

        let symptoms = SymptomSelection::from_labels(&self.symptoms)?;

        Ok(PatientForm {
            name: self.name.and_then(PatientName::new),
            date_of_check,
            input,
            details,
            symptoms,
        })
    }
}

/// A fully parsed form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PatientForm {
    pub name: Option<PatientName>,
    pub date_of_check: NaiveDate,
    pub input: PatientInput,
    pub details: ClinicalDetails,
    pub symptoms: SymptomSelection,
}

impl PatientForm {
    /// Reads and parses a YAML form in one step.
    pub fn from_yaml(yaml_text: &str) -> AssessmentResult<Self> {
        PatientFormFields::from_yaml(yaml_text)?.into_form()
    }
}
