//! Categorical bar chart.

use crate::svg::{colour, escape_xml, format_value, open_document, text};
use serde::Serialize;
use std::fmt::Write as _;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 500;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 80.0;
const Y_TICKS: u32 = 5;

/// One category and its value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

/// Smallest 1/2/5 x 10^n value not below `max`, so axis ticks land on round numbers.
fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

impl BarChart {
    /// Largest bar value, or zero for an empty chart. Negative values draw as zero height.
    fn max_value(&self) -> f64 {
        self.bars
            .iter()
            .map(|bar| bar.value)
            .fold(0.0, f64::max)
    }

    /// Renders the chart as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let plot_width = f64::from(WIDTH) - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = f64::from(HEIGHT) - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline = MARGIN_TOP + plot_height;
        let axis_max = nice_ceiling(self.max_value());

        let mut out = String::new();
        open_document(&mut out, WIDTH, HEIGHT);
        text(
            &mut out,
            f64::from(WIDTH) / 2.0,
            MARGIN_TOP / 2.0 + 6.0,
            "middle",
            18,
            "",
            &self.title,
        );

        for tick in 0..=Y_TICKS {
            let value = axis_max * f64::from(tick) / f64::from(Y_TICKS);
            let y = baseline - plot_height * f64::from(tick) / f64::from(Y_TICKS);
            let _ = write!(
                out,
                "<line x1=\"{MARGIN_LEFT:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#e5e5e5\"/>",
                MARGIN_LEFT + plot_width
            );
            text(&mut out, MARGIN_LEFT - 8.0, y + 4.0, "end", 12, "", &format_value(value));
        }

        if !self.bars.is_empty() {
            let slot = plot_width / self.bars.len() as f64;
            let bar_width = slot * 0.8;
            for (index, bar) in self.bars.iter().enumerate() {
                let height = (bar.value.max(0.0) / axis_max) * plot_height;
                let x = MARGIN_LEFT + slot * index as f64 + (slot - bar_width) / 2.0;
                let _ = write!(
                    out,
                    "<rect x=\"{x:.1}\" y=\"{:.1}\" width=\"{bar_width:.1}\" height=\"{height:.1}\" fill=\"{}\"><title>{}: {}</title></rect>",
                    baseline - height,
                    colour(index),
                    escape_xml(&bar.label),
                    format_value(bar.value)
                );
                let centre = x + bar_width / 2.0;
                text(&mut out, centre, baseline + 20.0, "middle", 13, "", &bar.label);
                text(
                    &mut out,
                    centre,
                    baseline - height - 6.0,
                    "middle",
                    12,
                    "",
                    &format_value(bar.value),
                );
            }
        }

        let _ = write!(
            out,
            "<line x1=\"{MARGIN_LEFT:.1}\" y1=\"{MARGIN_TOP:.1}\" x2=\"{MARGIN_LEFT:.1}\" y2=\"{baseline:.1}\" stroke=\"black\"/><line x1=\"{MARGIN_LEFT:.1}\" y1=\"{baseline:.1}\" x2=\"{:.1}\" y2=\"{baseline:.1}\" stroke=\"black\"/>",
            MARGIN_LEFT + plot_width
        );
        text(
            &mut out,
            MARGIN_LEFT + plot_width / 2.0,
            f64::from(HEIGHT) - 20.0,
            "middle",
            14,
            "",
            &self.x_label,
        );
        let y_centre = MARGIN_TOP + plot_height / 2.0;
        text(
            &mut out,
            24.0,
            y_centre,
            "middle",
            14,
            &format!(" transform=\"rotate(-90 24 {y_centre:.1})\""),
            &self.y_label,
        );
        out.push_str("</svg>");
        out
    }

    /// Renders horizontal bars of `#` for a terminal, scaled so the largest bar is `width` wide.
    ///
    /// Returns one line per bar, or nothing when `width` is zero.
    pub fn to_ascii(&self, width: usize) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }

        let max = self.max_value();
        let label_width = self
            .bars
            .iter()
            .map(|bar| bar.label.chars().count())
            .max()
            .unwrap_or(0);

        self.bars
            .iter()
            .map(|bar| {
                let len = if max > 0.0 {
                    ((bar.value.max(0.0) / max) * width as f64).round() as usize
                } else {
                    0
                };
                format!(
                    "{:<label_width$} | {} {}",
                    bar.label,
                    "#".repeat(len),
                    format_value(bar.value)
                )
            })
            .collect()
    }
}
