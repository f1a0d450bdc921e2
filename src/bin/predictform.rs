//! predictform — submit a form to a prediction endpoint from the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use serde_json::Value;

use predictform::{Config, FormFields, RenderStyle, ResultDisplay, SubmitEvent, coerce_field_value};

/// Prediction form client
#[derive(Parser)]
#[command(name = "predictform")]
#[command(about = "Submit form fields to a prediction endpoint")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prediction endpoint URL (overrides the config file)
    #[arg(short, long, env = "PREDICTFORM_ENDPOINT")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit form fields and print the result
    Submit {
        /// Form field as NAME=VALUE (repeatable, applied in order)
        #[arg(short, long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
        /// JSON object of field values, applied before --field
        #[arg(long)]
        fields_file: Option<PathBuf>,
        /// Output markup: "html" or "plain" (overrides the config file)
        #[arg(long, value_name = "STYLE")]
        style: Option<RenderStyle>,
    },

    /// Show the prediction service's description
    Info,

    /// Show the JSON each raw value is sent as
    Coerce {
        /// Raw form values
        #[arg(required = true)]
        values: Vec<String>,
    },
}

/// Clap command with the build version attached.
fn command() -> clap::Command {
    Args::command().version(predictform::version_string())
}

/// Settings used when no config file is found: terminals get plain text.
fn cli_defaults() -> Config {
    let mut config = Config::default();
    config.render.style = RenderStyle::Plain;
    config
}

/// Prints every display update on its own line.
struct StdoutDisplay;

impl ResultDisplay for StdoutDisplay {
    fn set_content(&self, content: &str) {
        println!("{content}");
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::from_arg_matches(&command().get_matches()).unwrap_or_else(|e| e.exit());

    if let Command::Coerce { values } = &args.command {
        for raw in values {
            let value: Value = coerce_field_value(raw).into();
            println!("{raw:?} -> {value}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::load_or(args.config.as_deref(), cli_defaults)?;
    if let Some(endpoint) = args.endpoint {
        config.endpoint.url = endpoint;
    }
    tracing::debug!(version = predictform::version_string(), endpoint = %config.endpoint.url, "predictform starting");

    match args.command {
        Command::Submit {
            fields,
            fields_file,
            style,
        } => {
            let form = FormFields::from_sources(fields_file.as_deref(), &fields)?;
            if let Some(style) = style {
                config.render.style = style;
            }

            let handler = config.handler(form, StdoutDisplay)?;
            let outcome = handler.submit(&mut SubmitEvent::new()).await;
            Ok(ExitCode::from(outcome.exit_status()))
        }

        Command::Info => {
            let info = config.client()?.service_info().await?;
            println!("{}", info.message);
            if !info.usage.is_empty() {
                println!("{}", info.usage);
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Coerce { .. } => Ok(ExitCode::SUCCESS),
    }
}
