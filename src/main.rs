use analytics::{ChartRecord, ChartSeries, ComparisonResult, MetricsEngine, chart_series, comparison_chart_data};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{Config, ConfigArgs};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the service impact report.
fn main() {
    // Logs go to stderr so that `chart` and `metrics` output stays pipeable.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install the log subscriber: {e}");
    }

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    let outcome = match cli.command {
        Commands::Report(args) => handle_report(args),
        Commands::Chart(args) => handle_chart(args),
        Commands::Metrics(args) => handle_metrics(args),
    };

    if let Err(e) = outcome {
        tracing::error!(error = ?e, "Command failed.");
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Compares engine oil consumption before and after a service.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the period cards, improvement panel, chart table and impact timeline.
    Report(ConfigArgs),
    /// Print the bar-chart records and series as JSON.
    Chart(ChartArgs),
    /// Print the full comparison result as JSON.
    Metrics(ConfigArgs),
}

#[derive(Parser)]
struct ChartArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

/// What the `chart` command hands to a bar-chart renderer.
#[derive(Serialize)]
struct ChartPayload {
    series: [ChartSeries; 2],
    data: Vec<ChartRecord>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Loads the configured periods and compares them.
fn compare(args: &ConfigArgs) -> Result<(Config, ComparisonResult)> {
    let config = args.load().context("Failed to load the observation periods")?;
    let result = MetricsEngine::new()
        .compare_metrics(&config.before, &config.after)
        .with_context(|| {
            format!(
                "Failed to compare '{}' with '{}'",
                config.before.label, config.after.label
            )
        })?;

    tracing::info!(
        before = %config.before.label,
        after = %config.after.label,
        efficiency_improvement_pct = %result.efficiency_improvement_pct.round_dp(1),
        "Comparison complete."
    );
    Ok((config, result))
}

fn handle_report(args: ConfigArgs) -> Result<()> {
    let (config, result) = compare(&args)?;
    println!("{}", dashboard::render_report(&result, config.display.timeline_width));
    Ok(())
}

fn handle_chart(args: ChartArgs) -> Result<()> {
    let (_, result) = compare(&args.config)?;
    let payload = ChartPayload {
        series: chart_series(),
        data: comparison_chart_data(&result),
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    println!("{json}");
    Ok(())
}

fn handle_metrics(args: ConfigArgs) -> Result<()> {
    let (_, result) = compare(&args)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use core_types::ObservationPeriod;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn chart_command_parses_flags() {
        let cli = Cli::try_parse_from(["service-impact", "chart", "--config", "periods.toml", "--pretty"])
            .unwrap();
        match cli.command {
            Commands::Chart(args) => {
                assert!(args.pretty);
                assert_eq!(args.config.config.as_deref(), Some(std::path::Path::new("periods.toml")));
            }
            _ => panic!("expected the chart command"),
        }
    }

    #[test]
    fn chart_payload_shape() {
        let result = MetricsEngine::new()
            .compare_metrics(
                &ObservationPeriod::baseline_pre_service(),
                &ObservationPeriod::baseline_post_service(),
            )
            .unwrap();
        let payload = ChartPayload {
            series: chart_series(),
            data: comparison_chart_data(&result),
        };
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["series"][0]["name"], "Pre-Service");
        assert_eq!(json["series"][1]["fill"], "#4caf50");
        assert_eq!(json["data"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["data"][0]["metric"], "Oil Consumption");
        assert_eq!(json["data"][1]["after"], 732.0);
    }
}
