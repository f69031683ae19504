//! Request handling shared by the gRPC and REST APIs.
//!
//! Translates protobuf request types into core values, runs the core operation and translates
//! the result back. Both transports call these methods so they answer identically; each maps
//! [`AssessmentError`] onto its own error representation.

use crate::pb;
use cardio_charts::ChartRenderer;
use cardio_core::constants::{
    DEFAULT_AGE, DEFAULT_CHOLESTEROL, DEFAULT_MAX_HEART_RATE, DEFAULT_RESTING_BP,
    DEFAULT_ST_DEPRESSION,
};
use cardio_core::{
    AssessmentError, AssessmentService, ConditionList, PatientFormFields, PatientInput,
    RiskAssessment, Symptom, SymptomSelection, YesNo,
};

/// Converts a protobuf input into a clamped core input. Each unset field, or the whole input
/// when missing, takes its form default.
pub fn patient_input_from_pb(input: Option<pb::PatientInput>) -> PatientInput {
    let input = input.unwrap_or_default();
    PatientInput::new(
        input.age.unwrap_or(DEFAULT_AGE),
        input.resting_blood_pressure.unwrap_or(DEFAULT_RESTING_BP),
        input.cholesterol.unwrap_or(DEFAULT_CHOLESTEROL),
        input.max_heart_rate.unwrap_or(DEFAULT_MAX_HEART_RATE),
        input.st_depression.unwrap_or(DEFAULT_ST_DEPRESSION),
    )
}

fn risk_to_pb(risk: &RiskAssessment) -> pb::AssessRiskRes {
    pb::AssessRiskRes {
        risk_level: risk.level.as_str().to_string(),
        score: u32::from(risk.score),
        message: risk.level.message().to_string(),
        triggered_factors: risk
            .triggered
            .iter()
            .map(|factor| factor.label().to_string())
            .collect(),
    }
}

fn conditions_to_pb(conditions: &ConditionList) -> pb::CheckSymptomsRes {
    pb::CheckSymptomsRes {
        conditions: conditions
            .messages()
            .into_iter()
            .map(str::to_string)
            .collect(),
        matched: conditions.is_match(),
    }
}

fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

/// Shared request handlers over [`AssessmentService`].
#[derive(Clone, Default)]
pub struct AssessmentApi {
    service: AssessmentService,
}

impl AssessmentApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// The symptom vocabulary in display order.
    pub fn list_symptoms(&self) -> pb::ListSymptomsRes {
        pb::ListSymptomsRes {
            symptoms: Symptom::ALL
                .iter()
                .map(|symptom| symptom.label().to_string())
                .collect(),
        }
    }

    /// "Predict Heart Disease Risk".
    pub fn assess_risk(&self, req: pb::AssessRiskReq) -> pb::AssessRiskRes {
        let input = patient_input_from_pb(req.input);
        risk_to_pb(&self.service.predict_risk(&input))
    }

    /// "Check Symptoms".
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::UnknownSymptom`] for a label outside the vocabulary.
    pub fn check_symptoms(
        &self,
        req: pb::CheckSymptomsReq,
    ) -> Result<pb::CheckSymptomsRes, AssessmentError> {
        let selection = SymptomSelection::from_labels(&req.symptoms)?;
        Ok(conditions_to_pb(&self.service.check_symptoms(&selection)))
    }

    /// Renders both charts as SVG.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::UnknownSymptom`] for a label outside the vocabulary.
    pub fn render_charts(
        &self,
        req: pb::RenderChartsReq,
    ) -> Result<pb::RenderChartsRes, AssessmentError> {
        let input = patient_input_from_pb(req.input);
        let selection = SymptomSelection::from_labels(&req.symptoms)?;

        Ok(pb::RenderChartsRes {
            risk_factors_svg: ChartRenderer::risk_factors(&input).to_svg(),
            symptom_distribution_svg: ChartRenderer::symptom_distribution(&selection)
                .map(|chart| chart.to_svg())
                .unwrap_or_default(),
        })
    }

    /// Runs both checks over a whole form.
    ///
    /// # Errors
    ///
    /// Returns an [`AssessmentError`] for an unknown symptom, an unknown selector label or a
    /// malformed date of check.
    pub fn assess(&self, req: pb::AssessmentReq) -> Result<pb::AssessmentRes, AssessmentError> {
        let input = req.input.unwrap_or_default();

        let fields = PatientFormFields {
            name: non_blank(req.name),
            date_of_check: non_blank(req.date_of_check),
            age: input.age,
            sex: non_blank(req.sex),
            chest_pain_type: non_blank(req.chest_pain_type),
            resting_blood_pressure: input.resting_blood_pressure,
            cholesterol: input.cholesterol,
            fasting_blood_sugar: non_blank(req.fasting_blood_sugar).map(YesNo::Text),
            resting_ecg: non_blank(req.resting_ecg),
            max_heart_rate: input.max_heart_rate,
            exercise_induced_angina: non_blank(req.exercise_induced_angina).map(YesNo::Text),
            st_depression: input.st_depression,
            st_slope: non_blank(req.st_slope),
            major_vessels: Some(u8::try_from(req.major_vessels).unwrap_or(u8::MAX)),
            thalassemia: non_blank(req.thalassemia),
            symptoms: req.symptoms,
        };
        let form = fields.into_form()?;
        let assessment = self.service.assess(&form);
        let assessment_id = uuid::Uuid::new_v4();
        tracing::debug!(%assessment_id, "assessed form");

        Ok(pb::AssessmentRes {
            assessment_id: assessment_id.to_string(),
            name: assessment
                .name
                .map(|name| name.to_string())
                .unwrap_or_default(),
            date_of_check: assessment.date_of_check.to_string(),
            risk: Some(risk_to_pb(&assessment.risk)),
            conditions: Some(conditions_to_pb(&assessment.conditions)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(age: i32, bp: i32, chol: i32, hr: i32, st: f64) -> Option<pb::PatientInput> {
        Some(pb::PatientInput {
            age: Some(age),
            resting_blood_pressure: Some(bp),
            cholesterol: Some(chol),
            max_heart_rate: Some(hr),
            st_depression: Some(st),
        })
    }

    #[test]
    fn assess_risk_reports_level_score_and_factors() {
        let res = AssessmentApi::new().assess_risk(pb::AssessRiskReq {
            input: input(55, 140, 250, 110, 2.5),
        });
        assert_eq!(res.risk_level, "High");
        assert_eq!(res.score, 5);
        assert_eq!(res.message, "High risk of heart disease detected.");
        assert_eq!(res.triggered_factors.len(), 5);
    }

    #[test]
    fn missing_input_uses_form_defaults() {
        let res = AssessmentApi::new().assess_risk(pb::AssessRiskReq { input: None });
        assert_eq!(res.risk_level, "Low");
        assert_eq!(res.score, 0);
    }

    #[test]
    fn partial_input_defaults_each_unset_field() {
        let api = AssessmentApi::new();
        let res = api.assess_risk(pb::AssessRiskReq {
            input: Some(pb::PatientInput {
                age: Some(60),
                ..Default::default()
            }),
        });
        assert_eq!(res.risk_level, "Low");
        assert_eq!(res.score, 1);
        assert_eq!(res.triggered_factors, vec!["Age"]);

        let form = cardio_core::PatientForm::from_yaml("age: 60").expect("form");
        let yaml_risk = cardio_core::assess_risk(&form.input);
        assert_eq!(u32::from(yaml_risk.score), res.score);
        assert_eq!(yaml_risk.level.as_str(), res.risk_level);

        let assessed = api
            .assess(pb::AssessmentReq {
                input: Some(pb::PatientInput {
                    age: Some(60),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .expect("valid form");
        assert_eq!(assessed.risk.expect("risk").score, 1);
    }

    #[test]
    fn check_symptoms_lists_conditions() {
        let res = AssessmentApi::new()
            .check_symptoms(pb::CheckSymptomsReq {
                symptoms: vec![
                    "Chest Pain".into(),
                    "Shortness of Breath".into(),
                    "Fever".into(),
                    "Cough".into(),
                ],
            })
            .expect("known symptoms");
        assert!(res.matched);
        assert_eq!(
            res.conditions,
            vec![
                "Possible Respiratory Infection (e.g., Pneumonia, COVID-19)",
                "Possible Heart Condition (e.g., Angina, Heart Attack)",
            ]
        );
    }

    #[test]
    fn check_symptoms_rejects_unknown_label() {
        let err = AssessmentApi::new()
            .check_symptoms(pb::CheckSymptomsReq {
                symptoms: vec!["Hiccups".into()],
            })
            .expect_err("should reject");
        assert!(matches!(err, AssessmentError::UnknownSymptom(_)));
    }

    #[test]
    fn render_charts_skips_pie_without_symptoms() {
        let res = AssessmentApi::new()
            .render_charts(pb::RenderChartsReq {
                input: input(40, 120, 200, 150, 1.0),
                symptoms: Vec::new(),
            })
            .expect("charts");
        assert!(res.risk_factors_svg.contains("Heart Disease Risk Factors"));
        assert!(res.symptom_distribution_svg.is_empty());

        let res = AssessmentApi::new()
            .render_charts(pb::RenderChartsReq {
                input: None,
                symptoms: vec!["Nausea".into(), "Fever".into()],
            })
            .expect("charts");
        assert!(res.symptom_distribution_svg.contains("50.0%"));
    }

    #[test]
    fn assess_runs_the_whole_form() {
        let res = AssessmentApi::new()
            .assess(pb::AssessmentReq {
                name: "Alex".into(),
                date_of_check: "2026-03-04".into(),
                input: input(55, 140, 200, 150, 1.0),
                sex: "Female".into(),
                fasting_blood_sugar: "No".into(),
                major_vessels: 7,
                symptoms: vec!["Fatigue".into(), "Swelling in Legs".into()],
                ..Default::default()
            })
            .expect("valid form");

        assert_eq!(res.name, "Alex");
        assert_eq!(res.date_of_check, "2026-03-04");
        assert!(uuid::Uuid::parse_str(&res.assessment_id).is_ok());
        let risk = res.risk.expect("risk");
        assert_eq!(risk.risk_level, "Moderate");
        let conditions = res.conditions.expect("conditions");
        assert_eq!(conditions.conditions, vec!["Possible Heart Failure"]);
    }

    #[test]
    fn assess_rejects_bad_selector_value() {
        let err = AssessmentApi::new()
            .assess(pb::AssessmentReq {
                chest_pain_type: "Sharp".into(),
                ..Default::default()
            })
            .expect_err("should reject");
        assert!(matches!(
            err,
            AssessmentError::InvalidOption { field: "chest_pain_type", .. }
        ));
    }

    #[test]
    fn vocabulary_is_complete() {
        let res = AssessmentApi::new().list_symptoms();
        assert_eq!(res.symptoms.len(), 10);
        assert_eq!(res.symptoms[2], "Shortness of Breath");
    }
}
