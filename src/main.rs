use anyhow::Result;
use clap::Parser;
use diabetes_risk::cli::{Cli, Commands};
use diabetes_risk::commands::{self, features::FeaturesConfig, score::ScoreConfig};
use diabetes_risk::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Score {
            inputs,
            model,
            config,
            format,
            plain,
        } => commands::score::handle_score(ScoreConfig {
            inputs: inputs.to_raw_inputs()?,
            model,
            config,
            format,
            formatting: commands::formatting_for(plain),
        }),
        Commands::Features {
            inputs,
            config,
            format,
            plain,
        } => commands::features::handle_features(FeaturesConfig {
            inputs: inputs.to_raw_inputs()?,
            config,
            format,
            formatting: commands::formatting_for(plain),
        }),
        Commands::Legend {
            config,
            format,
            plain,
        } => commands::legend::handle_legend(
            config.as_deref(),
            format,
            commands::formatting_for(plain),
        ),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
