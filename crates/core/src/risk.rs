//! Heart disease risk scoring.
//!
//! The score is a count of five independent threshold predicates over the numeric fields of a
//! [`PatientInput`]. Every comparison is strict, so a value sitting exactly on a threshold does
//! not count.
//!
//! The scoring functions do not validate their arguments. Values outside the form ranges are
//! compared against the same thresholds as any other value; clamping is the job of
//! [`PatientInput::new`].

use crate::constants::{
    AGE_THRESHOLD, CHOLESTEROL_THRESHOLD, HIGH_RISK_MIN_SCORE, MAX_HEART_RATE_THRESHOLD,
    MODERATE_RISK_SCORE, RESTING_BP_THRESHOLD, ST_DEPRESSION_THRESHOLD,
};
use crate::PatientInput;
use serde::{Deserialize, Serialize};

/// Ordinal heart disease risk classification.
///
/// Variants are declared in increasing severity so the derived ordering matches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Classifies a raw risk score.
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_RISK_MIN_SCORE {
            Self::High
        } else if score == MODERATE_RISK_SCORE {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Returns the label shown on the form ("Low", "Moderate" or "High").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Returns the result banner text for this level.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Low => "Low risk of heart disease.",
            Self::Moderate => "Moderate risk of heart disease.",
            Self::High => "High risk of heart disease detected.",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the five measurements that contribute to the risk score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskFactor {
    Age,
    RestingBloodPressure,
    Cholesterol,
    MaxHeartRate,
    StDepression,
}

impl RiskFactor {
    /// All factors in predicate order.
    pub const ALL: [RiskFactor; 5] = [
        RiskFactor::Age,
        RiskFactor::RestingBloodPressure,
        RiskFactor::Cholesterol,
        RiskFactor::MaxHeartRate,
        RiskFactor::StDepression,
    ];

    /// Display label, also used as the bar chart category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::RestingBloodPressure => "Resting Blood Pressure",
            Self::Cholesterol => "Cholesterol",
            Self::MaxHeartRate => "Max Heart Rate",
            Self::StDepression => "ST Depression",
        }
    }

    fn is_triggered(
        &self,
        age: i32,
        resting_blood_pressure: i32,
        cholesterol: i32,
        max_heart_rate: i32,
        st_depression: f64,
    ) -> bool {
        match self {
            Self::Age => age > AGE_THRESHOLD,
            Self::RestingBloodPressure => resting_blood_pressure > RESTING_BP_THRESHOLD,
            Self::Cholesterol => cholesterol > CHOLESTEROL_THRESHOLD,
            Self::MaxHeartRate => max_heart_rate < MAX_HEART_RATE_THRESHOLD,
            Self::StDepression => st_depression > ST_DEPRESSION_THRESHOLD,
        }
    }
}

/// Result of scoring a [`PatientInput`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Number of triggered factors (0 to 5).
    pub score: u8,
    pub level: RiskLevel,
    /// Triggered factors in predicate order.
    pub triggered: Vec<RiskFactor>,
}

/// Counts the triggered threshold predicates.
pub fn risk_score(
    age: i32,
    resting_blood_pressure: i32,
    cholesterol: i32,
    max_heart_rate: i32,
    st_depression: f64,
) -> u8 {
    RiskFactor::ALL
        .iter()
        .filter(|factor| {
            factor.is_triggered(
                age,
                resting_blood_pressure,
                cholesterol,
                max_heart_rate,
                st_depression,
            )
        })
        .count() as u8
}

/// Maps the five numeric measurements to a [`RiskLevel`].
pub fn compute_risk(
    age: i32,
    resting_blood_pressure: i32,
    cholesterol: i32,
    max_heart_rate: i32,
    st_depression: f64,
) -> RiskLevel {
    RiskLevel::from_score(risk_score(
        age,
        resting_blood_pressure,
        cholesterol,
        max_heart_rate,
        st_depression,
    ))
}

/// Scores a clamped input and records which factors fired.
pub fn assess_risk(input: &PatientInput) -> RiskAssessment {
    let triggered: Vec<RiskFactor> = RiskFactor::ALL
        .into_iter()
        .filter(|factor| {
            factor.is_triggered(
                input.age(),
                input.resting_blood_pressure(),
                input.cholesterol(),
                input.max_heart_rate(),
                input.st_depression(),
            )
        })
        .collect();
    let score = triggered.len() as u8;

    RiskAssessment {
        score,
        level: RiskLevel::from_score(score),
        triggered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn all_factors_give_high() {
        assert_eq!(risk_score(55, 140, 250, 110, 2.5), 5);
        assert_eq!(compute_risk(55, 140, 250, 110, 2.5), RiskLevel::High);
    }

    #[test]
    fn no_factors_give_low() {
        assert_eq!(risk_score(40, 120, 200, 150, 1.0), 0);
        assert_eq!(compute_risk(40, 120, 200, 150, 1.0), RiskLevel::Low);
    }

    #[test]
    fn two_factors_give_moderate() {
        assert_eq!(risk_score(55, 140, 200, 150, 1.0), 2);
        assert_eq!(compute_risk(55, 140, 200, 150, 1.0), RiskLevel::Moderate);
    }

    #[test]
    fn single_factor_is_still_low() {
        assert_eq!(compute_risk(51, 120, 200, 150, 1.0), RiskLevel::Low);
    }

    #[test]
    fn thresholds_are_strict() {
        let base = (40, 120, 200, 150, 1.0);

        assert_eq!(risk_score(50, base.1, base.2, base.3, base.4), 0);
        assert_eq!(risk_score(51, base.1, base.2, base.3, base.4), 1);

        assert_eq!(risk_score(base.0, 130, base.2, base.3, base.4), 0);
        assert_eq!(risk_score(base.0, 131, base.2, base.3, base.4), 1);

        assert_eq!(risk_score(base.0, base.1, 240, base.3, base.4), 0);
        assert_eq!(risk_score(base.0, base.1, 241, base.3, base.4), 1);

        assert_eq!(risk_score(base.0, base.1, base.2, 120, base.4), 0);
        assert_eq!(risk_score(base.0, base.1, base.2, 119, base.4), 1);

        assert_eq!(risk_score(base.0, base.1, base.2, base.3, 2.0), 0);
        assert_eq!(risk_score(base.0, base.1, base.2, base.3, 2.1), 1);
    }

    #[test]
    fn from_score_covers_every_score() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(1), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(2), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(3), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(5), RiskLevel::High);
    }

    #[test]
    fn out_of_range_values_are_scored_as_given() {
        assert_eq!(compute_risk(500, -10, 9_999, -1, 50.0), RiskLevel::High);
        assert_eq!(risk_score(500, -10, 9_999, -1, 50.0), 4);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
    }

    #[test]
    fn labels_and_messages() {
        assert_eq!(RiskLevel::High.to_string(), "High");
        assert_eq!(RiskLevel::Moderate.as_str(), "Moderate");
        assert_eq!(RiskLevel::Low.message(), "Low risk of heart disease.");
        assert_eq!(
            RiskLevel::High.message(),
            "High risk of heart disease detected."
        );
    }

    #[test]
    fn assess_risk_lists_triggered_factors_in_order() {
        let input = PatientInput::new(55, 120, 250, 110, 1.0);
        let assessment = assess_risk(&input);

        assert_eq!(assessment.score, 3);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(
            assessment.triggered,
            vec![
                RiskFactor::Age,
                RiskFactor::Cholesterol,
                RiskFactor::MaxHeartRate
            ]
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let first = compute_risk(60, 135, 230, 125, 2.2);
        let second = compute_risk(60, 135, 230, 125, 2.2);
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn raising_a_risky_value_never_lowers_the_level(
            age in 1i32..=120,
            bp in 50i32..=250,
            chol in 100i32..=600,
            hr in 50i32..=250,
            st in 0.0f64..=10.0,
            bump in 0i32..=100,
            st_bump in 0.0f64..=5.0,
        ) {
            let before = compute_risk(age, bp, chol, hr, st);

            prop_assert!(compute_risk(age + bump, bp, chol, hr, st) >= before);
            prop_assert!(compute_risk(age, bp + bump, chol, hr, st) >= before);
            prop_assert!(compute_risk(age, bp, chol + bump, hr, st) >= before);
            prop_assert!(compute_risk(age, bp, chol, hr - bump, st) >= before);
            prop_assert!(compute_risk(age, bp, chol, hr, st + st_bump) >= before);
        }

        #[test]
        fn score_never_exceeds_factor_count(
            age in any::<i32>(),
            bp in any::<i32>(),
            chol in any::<i32>(),
            hr in any::<i32>(),
            st in -100.0f64..100.0,
        ) {
            prop_assert!(risk_score(age, bp, chol, hr, st) <= 5);
        }
    }
}
