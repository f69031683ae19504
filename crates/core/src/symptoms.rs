//! Symptom vocabulary and condition matching.
//!
//! Each condition rule is a conjunction over symptom tags. All rules are evaluated on every
//! call and the conditions of the rules that fire are returned in declaration order. When no
//! rule fires the result holds the single fallback entry.

use crate::constants::NO_CONDITION_MESSAGE;
use crate::{AssessmentError, AssessmentResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A reportable symptom from the fixed checker vocabulary.
///
/// Declaration order is the order the form lists them in, and the order a
/// [`SymptomSelection`] iterates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symptom {
    Fever,
    Cough,
    ShortnessOfBreath,
    ChestPain,
    Fatigue,
    Headache,
    Nausea,
    Dizziness,
    SwellingInLegs,
    Palpitations,
}

impl Symptom {
    /// The whole vocabulary in display order.
    pub const ALL: [Symptom; 10] = [
        Symptom::Fever,
        Symptom::Cough,
        Symptom::ShortnessOfBreath,
        Symptom::ChestPain,
        Symptom::Fatigue,
        Symptom::Headache,
        Symptom::Nausea,
        Symptom::Dizziness,
        Symptom::SwellingInLegs,
        Symptom::Palpitations,
    ];

    /// Returns the label shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fever => "Fever",
            Self::Cough => "Cough",
            Self::ShortnessOfBreath => "Shortness of Breath",
            Self::ChestPain => "Chest Pain",
            Self::Fatigue => "Fatigue",
            Self::Headache => "Headache",
            Self::Nausea => "Nausea",
            Self::Dizziness => "Dizziness",
            Self::SwellingInLegs => "Swelling in Legs",
            Self::Palpitations => "Palpitations",
        }
    }

    /// Parses a symptom from its label.
    ///
    /// Matching ignores case, spaces, hyphens and underscores, so `"Shortness of Breath"`,
    /// `"shortness_of_breath"` and `"ShortnessOfBreath"` are the same tag.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::UnknownSymptom`] if the label is not in the vocabulary.
    pub fn parse(label: &str) -> AssessmentResult<Self> {
        let wanted = normalise_label(label);
        Self::ALL
            .into_iter()
            .find(|symptom| normalise_label(symptom.label()) == wanted)
            .ok_or_else(|| AssessmentError::UnknownSymptom(label.trim().to_string()))
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Symptom {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Lowercases and drops separators so selector labels and identifiers compare equal.
pub(crate) fn normalise_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// The set of symptoms ticked on the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomSelection(BTreeSet<Symptom>);

impl SymptomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from selector labels. Repeated labels collapse into one tag.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::UnknownSymptom`] for the first label outside the vocabulary.
    pub fn from_labels<I, S>(labels: I) -> AssessmentResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|label| Symptom::parse(label.as_ref()))
            .collect()
    }

    pub fn insert(&mut self, symptom: Symptom) -> bool {
        self.0.insert(symptom)
    }

    pub fn contains(&self, symptom: Symptom) -> bool {
        self.0.contains(&symptom)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the selected symptoms in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.0.iter().copied()
    }

    /// Occurrence count per selected symptom.
    ///
    /// A selection cannot hold duplicates, so every count is one.
    pub fn frequencies(&self) -> Vec<(Symptom, usize)> {
        self.iter().map(|symptom| (symptom, 1)).collect()
    }
}

impl FromIterator<Symptom> for SymptomSelection {
    fn from_iter<T: IntoIterator<Item = Symptom>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A possible condition suggested by the symptom checker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    RespiratoryInfection,
    HeartCondition,
    HeartFailure,
    HypertensionOrNeurological,
    /// Fallback when no rule matched.
    NoSpecificCondition,
}

impl Condition {
    /// Text displayed for this condition.
    pub fn message(&self) -> &'static str {
        match self {
            Self::RespiratoryInfection => {
                "Possible Respiratory Infection (e.g., Pneumonia, COVID-19)"
            }
            Self::HeartCondition => "Possible Heart Condition (e.g., Angina, Heart Attack)",
            Self::HeartFailure => "Possible Heart Failure",
            Self::HypertensionOrNeurological => "Possible Hypertension or Neurological Issue",
            Self::NoSpecificCondition => NO_CONDITION_MESSAGE,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// A conjunctive rule: fires when every required symptom is selected.
struct ConditionRule {
    requires: &'static [Symptom],
    condition: Condition,
}

impl ConditionRule {
    fn fires(&self, selection: &SymptomSelection) -> bool {
        self.requires.iter().all(|symptom| selection.contains(*symptom))
    }
}

const CONDITION_RULES: [ConditionRule; 4] = [
    ConditionRule {
        requires: &[Symptom::Fever, Symptom::Cough, Symptom::ShortnessOfBreath],
        condition: Condition::RespiratoryInfection,
    },
    ConditionRule {
        requires: &[Symptom::ChestPain, Symptom::ShortnessOfBreath],
        condition: Condition::HeartCondition,
    },
    ConditionRule {
        requires: &[Symptom::Fatigue, Symptom::SwellingInLegs],
        condition: Condition::HeartFailure,
    },
    ConditionRule {
        requires: &[Symptom::Headache, Symptom::Dizziness],
        condition: Condition::HypertensionOrNeurological,
    },
];

/// Ordered, never-empty list of suggested conditions. Only [`match_conditions`] builds one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConditionList(Vec<Condition>);

impl ConditionList {
    /// False when the list only holds the fallback entry.
    pub fn is_match(&self) -> bool {
        !matches!(self.0.as_slice(), [Condition::NoSpecificCondition])
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.0
    }

    /// The display texts, in rule order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.0.iter().map(Condition::message).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a list built by [`match_conditions`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Matches the selected symptoms against the condition rules.
pub fn match_conditions(selection: &SymptomSelection) -> ConditionList {
    let mut conditions: Vec<Condition> = CONDITION_RULES
        .iter()
        .filter(|rule| rule.fires(selection))
        .map(|rule| rule.condition)
        .collect();

    if conditions.is_empty() {
        conditions.push(Condition::NoSpecificCondition);
    }

    ConditionList(conditions)
}
