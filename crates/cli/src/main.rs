use std::io::Write;
use std::path::{Path, PathBuf};

use cardio_charts::ChartRenderer;
use cardio_core::constants::{
    DEFAULT_AGE, DEFAULT_CHOLESTEROL, DEFAULT_MAX_HEART_RATE, DEFAULT_RESTING_BP,
    DEFAULT_ST_DEPRESSION,
};
use cardio_core::{
    AssessmentService, ConditionList, PatientForm, PatientInput, RiskAssessment, Symptom,
    SymptomSelection,
};
use clap::{Args, Parser, Subcommand};

/// Width of the ASCII charts in characters.
const ASCII_WIDTH: usize = 40;

const RISK_FACTORS_FILE: &str = "risk_factors.svg";
const SYMPTOM_DISTRIBUTION_FILE: &str = "symptom_distribution.svg";

#[derive(Parser)]
#[command(name = "cardio")]
#[command(about = "Heart disease risk prediction and symptom checker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// The five risk measurements; unset values take the form defaults.
#[derive(Args, Debug)]
struct MeasurementArgs {
    /// Age in years
    #[arg(long, default_value_t = DEFAULT_AGE)]
    age: i32,
    /// Resting blood pressure (mm Hg)
    #[arg(long, default_value_t = DEFAULT_RESTING_BP)]
    resting_bp: i32,
    /// Serum cholesterol (mg/dl)
    #[arg(long, default_value_t = DEFAULT_CHOLESTEROL)]
    cholesterol: i32,
    /// Maximum heart rate achieved
    #[arg(long, default_value_t = DEFAULT_MAX_HEART_RATE)]
    max_heart_rate: i32,
    /// ST depression induced by exercise
    #[arg(long, default_value_t = DEFAULT_ST_DEPRESSION, allow_negative_numbers = true)]
    st_depression: f64,
}

impl MeasurementArgs {
    fn to_input(&self) -> PatientInput {
        PatientInput::new(
            self.age,
            self.resting_bp,
            self.cholesterol,
            self.max_heart_rate,
            self.st_depression,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Predict heart disease risk from the five measurements
    Risk {
        #[command(flatten)]
        measurements: MeasurementArgs,
    },
    /// Check selected symptoms for possible conditions
    Symptoms {
        /// Symptom labels, e.g. "Chest Pain" Fever
        symptoms: Vec<String>,
    },
    /// List the symptom vocabulary
    ListSymptoms,
    /// Draw the risk factor and symptom distribution charts
    Chart {
        #[command(flatten)]
        measurements: MeasurementArgs,
        /// Selected symptoms (repeatable)
        #[arg(long = "symptom")]
        symptoms: Vec<String>,
        /// Write SVG files into this directory instead of printing ASCII charts
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Assess a whole form read from YAML
    Assess {
        /// Path to the form YAML file
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cardio_core=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli.command, &mut stdout.lock())
}

fn run(command: Option<Commands>, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let service = AssessmentService::new();

    match command {
        Some(Commands::Risk { measurements }) => {
            let risk = service.predict_risk(&measurements.to_input());
            write_risk(out, &risk)?;
        }
        Some(Commands::Symptoms { symptoms }) => {
            let selection = SymptomSelection::from_labels(&symptoms)?;
            write_conditions(out, &service.check_symptoms(&selection))?;
        }
        Some(Commands::ListSymptoms) => {
            for symptom in Symptom::ALL {
                writeln!(out, "{}", symptom)?;
            }
        }
        Some(Commands::Chart {
            measurements,
            symptoms,
            out_dir,
        }) => {
            let selection = SymptomSelection::from_labels(&symptoms)?;
            let input = measurements.to_input();
            match out_dir {
                Some(dir) => {
                    for path in write_svg_charts(&dir, &input, &selection)? {
                        writeln!(out, "Wrote {}", path.display())?;
                    }
                }
                None => write_ascii_charts(out, &input, &selection)?,
            }
        }
        Some(Commands::Assess { input }) => {
            let yaml = std::fs::read_to_string(&input)
                .map_err(|e| format!("cannot read {}: {}", input.display(), e))?;
            let form = PatientForm::from_yaml(&yaml)?;
            let assessment = service.assess(&form);

            if let Some(name) = &assessment.name {
                writeln!(out, "Name: {}", name)?;
            }
            writeln!(out, "Date of Check: {}", assessment.date_of_check)?;
            write_risk(out, &assessment.risk)?;
            write_conditions(out, &assessment.conditions)?;
        }
        None => {
            writeln!(out, "Use 'cardio --help' for commands")?;
        }
    }

    Ok(())
}

fn write_risk(out: &mut impl Write, risk: &RiskAssessment) -> std::io::Result<()> {
    writeln!(out, "{}", risk.level.message())?;
    writeln!(out, "Score: {}/5", risk.score)?;
    if !risk.triggered.is_empty() {
        let factors: Vec<&str> = risk.triggered.iter().map(|f| f.label()).collect();
        writeln!(out, "Raised factors: {}", factors.join(", "))?;
    }
    Ok(())
}

fn write_conditions(out: &mut impl Write, conditions: &ConditionList) -> std::io::Result<()> {
    if conditions.is_match() {
        writeln!(out, "Possible conditions:")?;
        for message in conditions.messages() {
            writeln!(out, "- {}", message)?;
        }
    } else {
        for message in conditions.messages() {
            writeln!(out, "{}", message)?;
        }
    }
    Ok(())
}

fn write_ascii_charts(
    out: &mut impl Write,
    input: &PatientInput,
    selection: &SymptomSelection,
) -> std::io::Result<()> {
    let bars = ChartRenderer::risk_factors(input);
    writeln!(out, "{}", bars.title)?;
    for line in bars.to_ascii(ASCII_WIDTH) {
        writeln!(out, "{}", line)?;
    }

    if let Some(pie) = ChartRenderer::symptom_distribution(selection) {
        writeln!(out)?;
        writeln!(out, "{}", pie.title)?;
        for line in pie.to_ascii(ASCII_WIDTH) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

/// Writes the charts as SVG files into `dir`, creating it if needed.
///
/// The symptom distribution file is only written when symptoms are selected.
fn write_svg_charts(
    dir: &Path,
    input: &PatientInput,
    selection: &SymptomSelection,
) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let bar_path = dir.join(RISK_FACTORS_FILE);
    std::fs::write(&bar_path, ChartRenderer::risk_factors(input).to_svg())?;
    written.push(bar_path);

    if let Some(pie) = ChartRenderer::symptom_distribution(selection) {
        let pie_path = dir.join(SYMPTOM_DISTRIBUTION_FILE);
        std::fs::write(&pie_path, pie.to_svg())?;
        written.push(pie_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli.command, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn risk_uses_form_defaults() {
        let output = run_args(&["cardio", "risk"]).unwrap();
        assert!(output.starts_with("Low risk of heart disease."));
        assert!(output.contains("Score: 0/5"));
    }

    #[test]
    fn risk_reports_raised_factors() {
        let output = run_args(&[
            "cardio",
            "risk",
            "--age",
            "55",
            "--resting-bp",
            "140",
            "--cholesterol",
            "250",
        ])
        .unwrap();
        assert!(output.starts_with("High risk of heart disease detected."));
        assert!(output.contains("Raised factors: Age, Resting Blood Pressure, Cholesterol"));
    }

    #[test]
    fn symptoms_lists_conditions_in_rule_order() {
        let output = run_args(&[
            "cardio",
            "symptoms",
            "Dizziness",
            "Swelling in Legs",
            "Headache",
            "Fatigue",
        ])
        .unwrap();
        assert_eq!(
            output,
            "Possible conditions:\n\
             - Possible Heart Failure\n\
             - Possible Hypertension or Neurological Issue\n"
        );
    }

    #[test]
    fn no_symptoms_prints_fallback() {
        let output = run_args(&["cardio", "symptoms"]).unwrap();
        assert_eq!(
            output,
            "No specific condition detected. Please consult a doctor for a detailed diagnosis.\n"
        );
    }

    #[test]
    fn unknown_symptom_is_an_error() {
        let err = run_args(&["cardio", "symptoms", "Hiccups"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown symptom: Hiccups");
    }

    #[test]
    fn list_symptoms_prints_vocabulary() {
        let output = run_args(&["cardio", "list-symptoms"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Fever");
        assert_eq!(lines[9], "Palpitations");
    }

    #[test]
    fn chart_prints_ascii_by_default() {
        let output = run_args(&["cardio", "chart", "--symptom", "Fever", "--symptom", "Cough"])
            .unwrap();
        assert!(output.contains("Heart Disease Risk Factors"));
        assert!(output.contains("Symptom Distribution"));
        assert!(output.contains("50.0%"));
    }

    #[test]
    fn chart_writes_svg_files() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("charts");
        let output = run_args(&[
            "cardio",
            "chart",
            "--symptom",
            "Nausea",
            "--out-dir",
            out_dir.to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(output.lines().count(), 2);
        let bar = std::fs::read_to_string(out_dir.join(RISK_FACTORS_FILE)).unwrap();
        assert!(bar.starts_with("<svg"));
        let pie = std::fs::read_to_string(out_dir.join(SYMPTOM_DISTRIBUTION_FILE)).unwrap();
        assert!(pie.contains("Nausea"));
    }

    #[test]
    fn chart_skips_pie_file_without_symptoms() {
        let dir = tempfile::tempdir().unwrap();
        run_args(&["cardio", "chart", "--out-dir", dir.path().to_str().unwrap()]).unwrap();
        assert!(dir.path().join(RISK_FACTORS_FILE).exists());
        assert!(!dir.path().join(SYMPTOM_DISTRIBUTION_FILE).exists());
    }

    #[test]
    fn assess_reads_yaml_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.yaml");
        std::fs::write(
            &path,
            "name: Sam\n\
             date_of_check: 2026-10-19\n\
             age: 62\n\
             cholesterol: 260\n\
             symptoms: [Chest Pain, Shortness of Breath]\n",
        )
        .unwrap();

        let output = run_args(&["cardio", "assess", "--input", path.to_str().unwrap()]).unwrap();
        assert!(output.contains("Name: Sam"));
        assert!(output.contains("Date of Check: 2026-10-19"));
        assert!(output.contains("Moderate risk of heart disease."));
        assert!(output.contains("- Possible Heart Condition (e.g., Angina, Heart Attack)"));
    }

    #[test]
    fn assess_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.yaml");
        std::fs::write(&path, "age: 40\nweight: 80\n").unwrap();

        let err = run_args(&["cardio", "assess", "--input", path.to_str().unwrap()]).unwrap_err();
        assert!(err.to_string().contains("weight"));
    }

    #[test]
    fn assess_reports_missing_file() {
        let err = run_args(&["cardio", "assess", "--input", "/nonexistent/form.yaml"]).unwrap_err();
        assert!(err.to_string().starts_with("cannot read /nonexistent/form.yaml"));
    }
}
