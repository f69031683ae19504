//! # Cardio Core
//!
//! Decision logic for the heart disease risk and symptom checker.
//!
//! This crate contains pure, synchronous operations only:
//! - Heart disease risk scoring over five measurements ([`risk`])
//! - Symptom-to-condition matching over a fixed rule list ([`symptoms`])
//! - The typed form model and its parsing from loose boundary values ([`patient`], [`form`])
//!
//! **No API concerns**: HTTP/gRPC servers, protobuf types and chart rendering belong in
//! `api-rest`, `api-grpc`, `api-shared` and `cardio-charts`.

pub mod assessment;
pub mod constants;
pub mod error;
pub mod form;
pub mod patient;
pub mod risk;
pub mod symptoms;

pub use assessment::{Assessment, AssessmentService};
pub use error::{AssessmentError, AssessmentResult};
pub use form::{parse_date_of_check, PatientForm, PatientFormFields, PatientName, YesNo};
pub use patient::{
    parse_yes_no, ChestPainType, ClinicalDetails, PatientInput, RestingEcg, Sex, StSlope,
    Thalassemia,
};
pub use risk::{assess_risk, compute_risk, risk_score, RiskAssessment, RiskFactor, RiskLevel};
pub use symptoms::{match_conditions, Condition, ConditionList, Symptom, SymptomSelection};
