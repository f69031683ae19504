//! # Cardio Charts
//!
//! Visualisation of the form state: a bar chart of the five risk measurements and a pie chart
//! of the selected symptoms. Charts render to standalone SVG for the web surfaces and to plain
//! text for the terminal.
//!
//! Nothing here feeds back into the risk level or the condition list.

pub mod bar;
pub mod pie;
pub mod svg;

pub use bar::{Bar, BarChart};
pub use pie::{percentage_label, PieChart, PieSlice};

use cardio_core::{PatientInput, SymptomSelection};

/// Chart construction from core values.
///
/// This is a zero-sized type used for namespacing chart operations.
/// All methods are associated functions.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Bar chart of the five risk measurements, in predicate order.
    pub fn risk_factors(input: &PatientInput) -> BarChart {
        BarChart {
            title: "Heart Disease Risk Factors".into(),
            x_label: "Factors".into(),
            y_label: "Values".into(),
            bars: input
                .risk_factors()
                .iter()
                .map(|(factor, value)| Bar {
                    label: factor.label().to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    /// Pie chart of symptom counts, or `None` when nothing is selected.
    pub fn symptom_distribution(selection: &SymptomSelection) -> Option<PieChart> {
        if selection.is_empty() {
            return None;
        }

        let slices = selection
            .frequencies()
            .into_iter()
            .map(|(symptom, count)| PieSlice {
                label: symptom.label().to_string(),
                count,
            })
            .collect();
        tracing::debug!(slices = selection.len(), "built symptom distribution");

        Some(PieChart {
            title: "Symptom Distribution".into(),
            start_angle: 140.0,
            slices,
        })
    }
}
