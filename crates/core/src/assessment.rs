//! Assessment service: the entry point the API layers and CLI call.

use crate::{
    assess_risk, match_conditions, ConditionList, PatientForm, PatientInput, PatientName,
    RiskAssessment, SymptomSelection,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Outcome of running both checks over a full form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Assessment {
    pub name: Option<PatientName>,
    pub date_of_check: NaiveDate,
    pub risk: RiskAssessment,
    pub conditions: ConditionList,
}

/// Stateless assessment operations - no API concerns.
#[derive(Default, Clone, Debug)]
pub struct AssessmentService;

impl AssessmentService {
    /// Creates a new instance of AssessmentService.
    pub fn new() -> Self {
        Self
    }

    /// Scores the heart disease risk of `input`.
    pub fn predict_risk(&self, input: &PatientInput) -> RiskAssessment {
        let assessment = assess_risk(input);
        tracing::debug!(
            score = assessment.score,
            level = %assessment.level,
            "predicted heart disease risk"
        );
        assessment
    }

    /// Suggests possible conditions for the selected symptoms.
    pub fn check_symptoms(&self, symptoms: &SymptomSelection) -> ConditionList {
        let conditions = match_conditions(symptoms);
        tracing::debug!(
            selected = symptoms.len(),
            matched = conditions.is_match(),
            "checked symptoms"
        );
        conditions
    }

    /// Runs both checks over a parsed form.
    pub fn assess(&self, form: &PatientForm) -> Assessment {
        let risk = self.predict_risk(&form.input);
        let conditions = self.check_symptoms(&form.symptoms);
        tracing::info!(
            date_of_check = %form.date_of_check,
            risk = %risk.level,
            conditions = conditions.len(),
            "assessment complete"
        );

        Assessment {
            name: form.name.clone(),
            date_of_check: form.date_of_check,
            risk,
            conditions,
        }
    }
}
