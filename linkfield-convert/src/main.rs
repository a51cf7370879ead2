//! linkfield-convert entry point
//!
//! Converts typed link fields to the host's native link field. `convert`
//! rewrites the field definitions; `migrate` then moves the stored links into
//! element content. Both passes can be re-run safely.

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use linkfield_convert::{Config, ConvertError, Dependencies};
use std::env;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "linkfield-convert")]
#[command(about = "Converts typed link fields and their content to native link fields")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Command {
    /// Rewrite legacy link field definitions to the native link field
    #[default]
    Convert,
    /// Move legacy link content into native element content
    Migrate,
}

/// Initialize tracing/logging.
fn init_tracing() -> Result<(), ConvertError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("linkfield_convert=info,linkfield_convert_pipeline=info,linkfield_convert_repository=info")
    });

    let json = env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()
    };

    result.map_err(|e| ConvertError::Logging(e.to_string()))
}

async fn run(command: Command) -> Result<(), ConvertError> {
    let config = Config::from_env()?;
    let deps = Dependencies::new(&config).await?;

    match command {
        Command::Convert => {
            let report = deps.schema_rewriter.run().await?;
            info!(fields = report.fields_converted, "Field settings conversion complete");
        }
        Command::Migrate => {
            let report = deps.content_mapper.run().await?;
            info!(
                fields = report.fields_visited,
                fields_without_content = report.fields_without_content,
                fields_out_of_scope = report.fields_out_of_scope,
                migrated = report.rows_migrated,
                skipped = report.rows_skipped(),
                invalid = report.rows_invalid,
                missing_elements = report.rows_missing_element,
                unreadable_content = report.rows_unreadable_content,
                "Field content migration complete"
            );
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ConvertError> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenv().ok();

    init_tracing()?;

    let command = cli.command.unwrap_or_default();
    info!(?command, "Starting linkfield-convert");

    if let Err(e) = run(command).await {
        error!(error = %e, "linkfield-convert failed");
        return Err(e);
    }

    Ok(())
}
