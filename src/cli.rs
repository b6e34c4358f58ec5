use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::errors::Result;
use crate::inputs::{FamilyHistory, GlucoseCategory, RawInputs, SkinfoldInput};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "diabetes-risk")]
#[command(about = "Early diabetes risk detector", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

/// Health metrics for one scoring request. Defaults match the input form.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Age in years (10-100)
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub age: i32,

    /// Body mass index (10-60)
    #[arg(long, default_value_t = 22.0, allow_negative_numbers = true)]
    pub bmi: f64,

    /// Insulin level in mu U/ml (1-500)
    #[arg(long, default_value_t = 85.0, allow_negative_numbers = true)]
    pub insulin: f64,

    /// Blood pressure in mm Hg (40-180)
    #[arg(
        long = "blood-pressure",
        visible_alias = "bp",
        default_value_t = 70.0,
        allow_negative_numbers = true
    )]
    pub blood_pressure: f64,

    /// Skin thickness in mm (1-100); omit if unknown to use 20 mm
    #[arg(long, allow_negative_numbers = true)]
    pub skinfold: Option<f64>,

    /// Number of pregnancies (0-20)
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub pregnancies: i32,

    /// Family history: none, one-relative, multiple-relatives, strong
    #[arg(long = "family-history", default_value = "none")]
    pub family_history: String,

    /// Fasting glucose: normal, elevated, high, unknown
    #[arg(long, default_value = "unknown")]
    pub glucose: String,
}

impl InputArgs {
    pub fn to_raw_inputs(&self) -> Result<RawInputs> {
        Ok(RawInputs {
            age: self.age,
            bmi: self.bmi,
            insulin: self.insulin,
            blood_pressure: self.blood_pressure,
            skinfold: SkinfoldInput::from_option(self.skinfold),
            pregnancies: self.pregnancies,
            family_history: self.family_history.parse::<FamilyHistory>()?,
            glucose: self.glucose.parse::<GlucoseCategory>()?,
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one profile and explain the result
    Score {
        #[command(flatten)]
        inputs: InputArgs,

        /// Classifier artifact (JSON); overrides model.path from the config
        #[arg(short, long, env = "DIABETES_RISK_MODEL")]
        model: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .diabetes-risk.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Plain output (no colors, no emoji)
        #[arg(long)]
        plain: bool,
    },

    /// Print the engineered feature vector without scoring it
    Features {
        #[command(flatten)]
        inputs: InputArgs,

        /// Configuration file (defaults to the nearest .diabetes-risk.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Plain output (no colors, no emoji)
        #[arg(long)]
        plain: bool,
    },

    /// Show the risk interpretation scale of the active threshold scheme
    Legend {
        /// Configuration file (defaults to the nearest .diabetes-risk.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Plain output (no colors, no emoji)
        #[arg(long)]
        plain: bool,
    },

    /// Write a default .diabetes-risk.toml
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_score_defaults_match_form() {
        let cli = Cli::parse_from(["diabetes-risk", "score"]);
        match cli.command {
            Commands::Score { inputs, format, .. } => {
                assert_eq!(inputs.to_raw_inputs().unwrap(), RawInputs::default());
                assert_eq!(format, OutputFormat::Terminal);
            }
            other => panic!("Expected score command, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = Cli::parse_from(["diabetes-risk", "features", "--pregnancies", "-1"]);
        match cli.command {
            Commands::Features { inputs, .. } => {
                let err = inputs.to_raw_inputs().unwrap().validate().unwrap_err();
                assert_eq!(err.violated_fields(), vec!["pregnancies"]);
            }
            other => panic!("Expected features command, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_family_history_is_rejected() {
        let cli = Cli::parse_from(["diabetes-risk", "score", "--family-history", "aunt"]);
        match cli.command {
            Commands::Score { inputs, .. } => assert!(inputs.to_raw_inputs().is_err()),
            other => panic!("Expected score command, got {other:?}"),
        }
    }
}
