//! Constants used throughout the Cardio core crate.
//!
//! Risk thresholds, form field ranges and defaults, and the fixed result texts shown to the
//! user. None of these are configurable at runtime.

/// Age above which the age risk factor counts (strictly greater).
pub const AGE_THRESHOLD: i32 = 50;

/// Resting blood pressure (mm Hg) above which the factor counts.
pub const RESTING_BP_THRESHOLD: i32 = 130;

/// Serum cholesterol (mg/dl) above which the factor counts.
pub const CHOLESTEROL_THRESHOLD: i32 = 240;

/// Maximum heart rate below which the factor counts (strictly less).
pub const MAX_HEART_RATE_THRESHOLD: i32 = 120;

/// Exercise-induced ST depression above which the factor counts.
pub const ST_DEPRESSION_THRESHOLD: f64 = 2.0;

/// Minimum score classified as [`crate::RiskLevel::High`].
pub const HIGH_RISK_MIN_SCORE: u8 = 3;

/// Score classified as [`crate::RiskLevel::Moderate`].
pub const MODERATE_RISK_SCORE: u8 = 2;

/// Inclusive range accepted by the age field.
pub const AGE_RANGE: (i32, i32) = (1, 120);

/// Inclusive range accepted by the resting blood pressure field.
pub const RESTING_BP_RANGE: (i32, i32) = (50, 250);

/// Inclusive range accepted by the cholesterol field.
pub const CHOLESTEROL_RANGE: (i32, i32) = (100, 600);

/// Inclusive range accepted by the maximum heart rate field.
pub const MAX_HEART_RATE_RANGE: (i32, i32) = (50, 250);

/// Inclusive range accepted by the ST depression field.
pub const ST_DEPRESSION_RANGE: (f64, f64) = (0.0, 10.0);

/// Inclusive range accepted by the major vessel count field.
pub const MAJOR_VESSELS_RANGE: (u8, u8) = (0, 4);

pub const DEFAULT_AGE: i32 = 30;
pub const DEFAULT_RESTING_BP: i32 = 120;
pub const DEFAULT_CHOLESTEROL: i32 = 200;
pub const DEFAULT_MAX_HEART_RATE: i32 = 150;
pub const DEFAULT_ST_DEPRESSION: f64 = 1.0;

/// Date format accepted for the date of check.
pub const DATE_OF_CHECK_FORMAT: &str = "%Y-%m-%d";

/// Message returned when no condition rule matches the selected symptoms.
pub const NO_CONDITION_MESSAGE: &str =
    "No specific condition detected. Please consult a doctor for a detailed diagnosis.";
