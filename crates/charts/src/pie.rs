//! Proportion pie chart.

use crate::svg::{colour, escape_xml, open_document, text};
use serde::Serialize;
use std::fmt::Write as _;

const SIZE: u32 = 500;
const RADIUS: f64 = 160.0;
const CENTRE_X: f64 = 250.0;
const CENTRE_Y: f64 = 265.0;

/// One slice, sized by its count relative to the chart total.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    /// Angle in degrees, counter-clockwise from the positive x axis, where the first slice
    /// starts.
    pub start_angle: f64,
    pub slices: Vec<PieSlice>,
}

/// Formats a fraction in `[0, 1]` as a percentage with one decimal, e.g. `"25.0%"`.
pub fn percentage_label(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn point(angle_degrees: f64, radius: f64) -> (f64, f64) {
    let radians = angle_degrees.to_radians();
    (
        CENTRE_X + radius * radians.cos(),
        CENTRE_Y - radius * radians.sin(),
    )
}

impl PieChart {
    fn total(&self) -> usize {
        self.slices.iter().map(|slice| slice.count).sum()
    }

    /// Each slice's share of the total, in slice order. All zero when the total is zero.
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        self.slices
            .iter()
            .map(|slice| {
                if total == 0 {
                    0.0
                } else {
                    slice.count as f64 / total as f64
                }
            })
            .collect()
    }

    /// Renders the chart as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        open_document(&mut out, SIZE, SIZE);
        text(
            &mut out,
            f64::from(SIZE) / 2.0,
            36.0,
            "middle",
            18,
            "",
            &self.title,
        );

        let mut start = self.start_angle;
        for (index, (slice, fraction)) in self.slices.iter().zip(self.fractions()).enumerate() {
            if fraction <= 0.0 {
                continue;
            }
            let sweep = fraction * 360.0;
            let end = start + sweep;
            let fill = colour(index);
            let title = format!(
                "<title>{}: {}</title>",
                escape_xml(&slice.label),
                percentage_label(fraction)
            );

            if fraction >= 1.0 {
                let _ = write!(
                    out,
                    "<circle cx=\"{CENTRE_X:.1}\" cy=\"{CENTRE_Y:.1}\" r=\"{RADIUS:.1}\" fill=\"{fill}\">{title}</circle>"
                );
            } else {
                let (x0, y0) = point(start, RADIUS);
                let (x1, y1) = point(end, RADIUS);
                let large_arc = u8::from(sweep > 180.0);
                let _ = write!(
                    out,
                    "<path d=\"M {CENTRE_X:.1} {CENTRE_Y:.1} L {x0:.3} {y0:.3} A {RADIUS:.1} {RADIUS:.1} 0 {large_arc} 0 {x1:.3} {y1:.3} Z\" fill=\"{fill}\" stroke=\"white\">{title}</path>"
                );
            }

            let middle = start + sweep / 2.0;
            let (lx, ly) = point(middle, RADIUS * 1.15);
            let anchor = if lx >= CENTRE_X { "start" } else { "end" };
            text(&mut out, lx, ly + 4.0, anchor, 13, "", &slice.label);
            let (px, py) = point(middle, RADIUS * 0.6);
            text(
                &mut out,
                px,
                py + 4.0,
                "middle",
                12,
                "",
                &percentage_label(fraction),
            );

            start = end;
        }

        out.push_str("</svg>");
        out
    }

    /// Renders one `label  share` line per slice for a terminal, with a `#` bar up to `width`
    /// wide. Returns nothing when `width` is zero.
    pub fn to_ascii(&self, width: usize) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }

        let label_width = self
            .slices
            .iter()
            .map(|slice| slice.label.chars().count())
            .max()
            .unwrap_or(0);

        self.slices
            .iter()
            .zip(self.fractions())
            .map(|(slice, fraction)| {
                let len = (fraction * width as f64).round() as usize;
                format!(
                    "{:<label_width$} | {:>6} {}",
                    slice.label,
                    percentage_label(fraction),
                    "#".repeat(len)
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(labels: &[&str]) -> PieChart {
        PieChart {
            title: "Share".into(),
            start_angle: 140.0,
            slices: labels
                .iter()
                .map(|label| PieSlice {
                    label: label.to_string(),
                    count: 1,
                })
                .collect(),
        }
    }

    #[test]
    fn percentages_use_one_decimal() {
        assert_eq!(percentage_label(0.25), "25.0%");
        assert_eq!(percentage_label(1.0 / 3.0), "33.3%");
        assert_eq!(percentage_label(1.0), "100.0%");
    }

    #[test]
    fn uniform_counts_give_uniform_fractions() {
        let fractions = chart(&["A", "B", "C", "D"]).fractions();
        assert_eq!(fractions, vec![0.25; 4]);
    }

    #[test]
    fn single_slice_is_a_full_circle() {
        let svg = chart(&["Only"]).to_svg();
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches("<path").count(), 0);
        assert!(svg.contains("<title>Only: 100.0%</title>"));
    }

    #[test]
    fn several_slices_are_paths() {
        let svg = chart(&["A", "B", "C"]).to_svg();
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.contains(">33.3%</text>"));
    }

    #[test]
    fn first_slice_starts_at_start_angle() {
        let (x, y) = point(140.0, RADIUS);
        let expected = format!("L {x:.3} {y:.3} A");
        let svg = chart(&["A", "B"]).to_svg();
        assert!(svg.contains(&expected));
    }

    #[test]
    fn ascii_lists_shares() {
        let lines = chart(&["Fever", "Cough"]).to_ascii(10);
        assert_eq!(lines, vec!["Fever |  50.0% #####", "Cough |  50.0% #####"]);
    }

    #[test]
    fn labels_are_escaped() {
        let svg = chart(&["<b>", "c&d"]).to_svg();
        assert!(svg.contains("&lt;b&gt;"));
        assert!(svg.contains("c&amp;d"));
        assert!(!svg.contains("<b>"));
    }
}
