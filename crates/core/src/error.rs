/// Errors raised while turning raw form values into core inputs.
///
/// The decision functions themselves cannot fail; everything here belongs to the boundary where
/// free text becomes typed values.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),
    #[error("invalid value for {field}: {value}")]
    InvalidOption { field: &'static str, value: String },
    #[error("invalid date of check (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("form schema mismatch at {path}: {source}")]
    InvalidYaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type AssessmentResult<T> = std::result::Result<T, AssessmentError>;
