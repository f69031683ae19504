//! Patient measurements and clinical details collected by the form.
//!
//! [`PatientInput`] holds the five measurements the risk score reads. [`ClinicalDetails`]
//! holds the remaining selector fields; they are displayed and echoed back but no decision
//! rule reads them.

use crate::constants::{
    AGE_RANGE, CHOLESTEROL_RANGE, DEFAULT_AGE, DEFAULT_CHOLESTEROL, DEFAULT_MAX_HEART_RATE,
    DEFAULT_RESTING_BP, DEFAULT_ST_DEPRESSION, MAJOR_VESSELS_RANGE, MAX_HEART_RATE_RANGE,
    RESTING_BP_RANGE, ST_DEPRESSION_RANGE,
};
use crate::symptoms::normalise_label;
use crate::{AssessmentError, AssessmentResult, RiskFactor};
use serde::{Deserialize, Serialize};

/// The numeric measurements read by the risk scorer.
///
/// Fields are private so every instance has gone through the range clamp in
/// [`PatientInput::new`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PatientInput {
    age: i32,
    resting_blood_pressure: i32,
    cholesterol: i32,
    max_heart_rate: i32,
    st_depression: f64,
}

impl PatientInput {
    /// Creates an input, clamping each value into the range the form allows.
    ///
    /// A warning is logged for every clamped field. A NaN ST depression is treated as the
    /// lower bound.
    pub fn new(
        age: i32,
        resting_blood_pressure: i32,
        cholesterol: i32,
        max_heart_rate: i32,
        st_depression: f64,
    ) -> Self {
        Self {
            age: clamp_int("age", age, AGE_RANGE),
            resting_blood_pressure: clamp_int(
                "resting_blood_pressure",
                resting_blood_pressure,
                RESTING_BP_RANGE,
            ),
            cholesterol: clamp_int("cholesterol", cholesterol, CHOLESTEROL_RANGE),
            max_heart_rate: clamp_int("max_heart_rate", max_heart_rate, MAX_HEART_RATE_RANGE),
            st_depression: clamp_float("st_depression", st_depression, ST_DEPRESSION_RANGE),
        }
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn resting_blood_pressure(&self) -> i32 {
        self.resting_blood_pressure
    }

    pub fn cholesterol(&self) -> i32 {
        self.cholesterol
    }

    pub fn max_heart_rate(&self) -> i32 {
        self.max_heart_rate
    }

    pub fn st_depression(&self) -> f64 {
        self.st_depression
    }

    /// The five measurements as `(factor, value)` pairs in predicate order.
    pub fn risk_factors(&self) -> [(RiskFactor, f64); 5] {
        [
            (RiskFactor::Age, f64::from(self.age)),
            (
                RiskFactor::RestingBloodPressure,
                f64::from(self.resting_blood_pressure),
            ),
            (RiskFactor::Cholesterol, f64::from(self.cholesterol)),
            (RiskFactor::MaxHeartRate, f64::from(self.max_heart_rate)),
            (RiskFactor::StDepression, self.st_depression),
        ]
    }
}

impl Default for PatientInput {
    fn default() -> Self {
        Self::new(
            DEFAULT_AGE,
            DEFAULT_RESTING_BP,
            DEFAULT_CHOLESTEROL,
            DEFAULT_MAX_HEART_RATE,
            DEFAULT_ST_DEPRESSION,
        )
    }
}

fn clamp_int(field: &'static str, value: i32, (min, max): (i32, i32)) -> i32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        tracing::warn!(field, value, clamped, "form value outside allowed range");
    }
    clamped
}

fn clamp_float(field: &'static str, value: f64, (min, max): (f64, f64)) -> f64 {
    let clamped = if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    };
    if clamped != value {
        tracing::warn!(field, value, clamped, "form value outside allowed range");
    }
    clamped
}

/// Finds the option whose label matches `value`, ignoring case and separators.
fn parse_option<T: Copy>(
    field: &'static str,
    value: &str,
    options: &[(T, &'static str)],
) -> AssessmentResult<T> {
    let wanted = normalise_label(value);
    options
        .iter()
        .find(|(_, label)| normalise_label(label) == wanted)
        .map(|(option, _)| *option)
        .ok_or_else(|| AssessmentError::InvalidOption {
            field,
            value: value.to_string(),
        })
}

/// Parses a "Yes"/"No" selector value.
pub fn parse_yes_no(field: &'static str, value: &str) -> AssessmentResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "true" => Ok(true),
        "no" | "false" => Ok(false),
        _ => Err(AssessmentError::InvalidOption {
            field,
            value: value.to_string(),
        }),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    const OPTIONS: [(Sex, &'static str); 2] = [(Sex::Male, "Male"), (Sex::Female, "Female")];

    pub fn parse(value: &str) -> AssessmentResult<Self> {
        parse_option("sex", value, &Self::OPTIONS)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Chest pain type as listed on the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChestPainType {
    #[default]
    TypicalAngina,
    AtypicalAngina,
    NonAnginalPain,
    Asymptomatic,
}

impl ChestPainType {
    const OPTIONS: [(ChestPainType, &'static str); 4] = [
        (ChestPainType::TypicalAngina, "Typical Angina"),
        (ChestPainType::AtypicalAngina, "Atypical Angina"),
        (ChestPainType::NonAnginalPain, "Non-anginal Pain"),
        (ChestPainType::Asymptomatic, "Asymptomatic"),
    ];

    pub fn parse(value: &str) -> AssessmentResult<Self> {
        parse_option("chest_pain_type", value, &Self::OPTIONS)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TypicalAngina => "Typical Angina",
            Self::AtypicalAngina => "Atypical Angina",
            Self::NonAnginalPain => "Non-anginal Pain",
            Self::Asymptomatic => "Asymptomatic",
        }
    }
}

/// Resting electrocardiogram result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestingEcg {
    #[default]
    Normal,
    StTWaveAbnormality,
    LeftVentricularHypertrophy,
}

impl RestingEcg {
    const OPTIONS: [(RestingEcg, &'static str); 3] = [
        (RestingEcg::Normal, "Normal"),
        (RestingEcg::StTWaveAbnormality, "ST-T Wave Abnormality"),
        (
            RestingEcg::LeftVentricularHypertrophy,
            "Left Ventricular Hypertrophy",
        ),
    ];

    pub fn parse(value: &str) -> AssessmentResult<Self> {
        parse_option("resting_ecg", value, &Self::OPTIONS)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::StTWaveAbnormality => "ST-T Wave Abnormality",
            Self::LeftVentricularHypertrophy => "Left Ventricular Hypertrophy",
        }
    }
}

/// Slope of the peak exercise ST segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StSlope {
    #[default]
    Upsloping,
    Flat,
    Downsloping,
}

impl StSlope {
    const OPTIONS: [(StSlope, &'static str); 3] = [
        (StSlope::Upsloping, "Upsloping"),
        (StSlope::Flat, "Flat"),
        (StSlope::Downsloping, "Downsloping"),
    ];

    pub fn parse(value: &str) -> AssessmentResult<Self> {
        parse_option("st_slope", value, &Self::OPTIONS)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Upsloping => "Upsloping",
            Self::Flat => "Flat",
            Self::Downsloping => "Downsloping",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Thalassemia {
    #[default]
    Normal,
    FixedDefect,
    ReversibleDefect,
}

impl Thalassemia {
    const OPTIONS: [(Thalassemia, &'static str); 3] = [
        (Thalassemia::Normal, "Normal"),
        (Thalassemia::FixedDefect, "Fixed Defect"),
        (Thalassemia::ReversibleDefect, "Reversible Defect"),
    ];

    pub fn parse(value: &str) -> AssessmentResult<Self> {
        parse_option("thalassemia", value, &Self::OPTIONS)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::FixedDefect => "Fixed Defect",
            Self::ReversibleDefect => "Reversible Defect",
        }
    }
}

/// Selector fields collected alongside the measurements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClinicalDetails {
    pub sex: Sex,
    pub chest_pain_type: ChestPainType,
    /// Fasting blood sugar above 120 mg/dl.
    pub fasting_blood_sugar_over_120: bool,
    pub resting_ecg: RestingEcg,
    pub exercise_induced_angina: bool,
    pub st_slope: StSlope,
    /// Number of major vessels coloured by fluoroscopy (0 to 4).
    major_vessels: u8,
    pub thalassemia: Thalassemia,
}

impl ClinicalDetails {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sex: Sex,
        chest_pain_type: ChestPainType,
        fasting_blood_sugar_over_120: bool,
        resting_ecg: RestingEcg,
        exercise_induced_angina: bool,
        st_slope: StSlope,
        major_vessels: u8,
        thalassemia: Thalassemia,
    ) -> Self {
        let (min, max) = MAJOR_VESSELS_RANGE;
        let clamped = major_vessels.clamp(min, max);
        if clamped != major_vessels {
            tracing::warn!(
                field = "major_vessels",
                value = major_vessels,
                clamped,
                "form value outside allowed range"
            );
        }

        Self {
            sex,
            chest_pain_type,
            fasting_blood_sugar_over_120,
            resting_ecg,
            exercise_induced_angina,
            st_slope,
            major_vessels: clamped,
            thalassemia,
        }
    }

    pub fn major_vessels(&self) -> u8 {
        self.major_vessels
    }
}

impl Default for ClinicalDetails {
    // "Yes" is the first option of both yes/no selectors on the form.
    fn default() -> Self {
        Self::new(
            Sex::default(),
            ChestPainType::default(),
            true,
            RestingEcg::default(),
            true,
            StSlope::default(),
            0,
            Thalassemia::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_values_are_kept() {
        let input = PatientInput::new(55, 140, 250, 110, 2.5);
        assert_eq!(input.age(), 55);
        assert_eq!(input.resting_blood_pressure(), 140);
        assert_eq!(input.cholesterol(), 250);
        assert_eq!(input.max_heart_rate(), 110);
        assert_eq!(input.st_depression(), 2.5);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let input = PatientInput::new(0, 300, 50, 10, 12.5);
        assert_eq!(input.age(), 1);
        assert_eq!(input.resting_blood_pressure(), 250);
        assert_eq!(input.cholesterol(), 100);
        assert_eq!(input.max_heart_rate(), 50);
        assert_eq!(input.st_depression(), 10.0);

        let input = PatientInput::new(130, 40, 700, 251, -1.0);
        assert_eq!(input.age(), 120);
        assert_eq!(input.resting_blood_pressure(), 50);
        assert_eq!(input.cholesterol(), 600);
        assert_eq!(input.max_heart_rate(), 250);
        assert_eq!(input.st_depression(), 0.0);
    }

    #[test]
    fn nan_st_depression_becomes_lower_bound() {
        let input = PatientInput::new(30, 120, 200, 150, f64::NAN);
        assert_eq!(input.st_depression(), 0.0);
    }

    #[test]
    fn defaults_match_the_form() {
        let input = PatientInput::default();
        assert_eq!(input.age(), 30);
        assert_eq!(input.resting_blood_pressure(), 120);
        assert_eq!(input.cholesterol(), 200);
        assert_eq!(input.max_heart_rate(), 150);
        assert_eq!(input.st_depression(), 1.0);

        let details = ClinicalDetails::default();
        assert_eq!(details.sex, Sex::Male);
        assert!(details.fasting_blood_sugar_over_120);
        assert!(details.exercise_induced_angina);
        assert_eq!(details.major_vessels(), 0);
    }

    #[test]
    fn risk_factors_follow_predicate_order() {
        let input = PatientInput::new(40, 120, 200, 150, 1.5);
        let labels: Vec<&str> = input
            .risk_factors()
            .iter()
            .map(|(factor, _)| factor.label())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Age",
                "Resting Blood Pressure",
                "Cholesterol",
                "Max Heart Rate",
                "ST Depression"
            ]
        );
        assert_eq!(input.risk_factors()[4].1, 1.5);
    }

    #[test]
    fn selector_labels_parse() {
        assert_eq!(
            ChestPainType::parse("Non-anginal Pain").unwrap(),
            ChestPainType::NonAnginalPain
        );
        assert_eq!(
            ChestPainType::parse("non_anginal_pain").unwrap(),
            ChestPainType::NonAnginalPain
        );
        assert_eq!(
            RestingEcg::parse("ST-T Wave Abnormality").unwrap(),
            RestingEcg::StTWaveAbnormality
        );
        assert_eq!(StSlope::parse("FLAT").unwrap(), StSlope::Flat);
        assert_eq!(
            Thalassemia::parse("reversible defect").unwrap(),
            Thalassemia::ReversibleDefect
        );
        assert_eq!(Sex::parse("female").unwrap(), Sex::Female);
    }

    #[test]
    fn unknown_selector_label_is_rejected() {
        let err = Thalassemia::parse("Minor").expect_err("should reject unknown option");
        assert!(matches!(
            err,
            AssessmentError::InvalidOption { field: "thalassemia", value } if value == "Minor"
        ));
    }

    #[test]
    fn yes_no_values() {
        assert!(parse_yes_no("fbs", "Yes").unwrap());
        assert!(!parse_yes_no("fbs", " no ").unwrap());
        assert!(parse_yes_no("fbs", "maybe").is_err());
    }

    #[test]
    fn major_vessels_are_clamped() {
        let details = ClinicalDetails::new(
            Sex::Female,
            ChestPainType::Asymptomatic,
            false,
            RestingEcg::Normal,
            false,
            StSlope::Flat,
            9,
            Thalassemia::FixedDefect,
        );
        assert_eq!(details.major_vessels(), 4);
    }
}
