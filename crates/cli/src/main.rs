// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use mesc_roster_api::{
    CalendarResponse, InMemorySource, ScheduleResponse, SlotListResponse,
    describe_year, generate_schedule, list_slots,
};
use mesc_roster_domain::SlotConfig;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.run() {
        Ok(output) => {
            println!("{output}");
        }
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// MESC Roster - monthly schedules for extraordinary ministers of Holy Communion
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON document holding the roster, families, named days, slot
    /// configuration and surveys
    #[arg(short, long, global = true)]
    fixture: Option<PathBuf>,

    /// JSON slot configuration replacing the one in the fixture
    #[arg(long, global = true)]
    slot_config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Generate the schedule of a month
    #[command(visible_alias = "g")]
    Generate {
        year: i32,
        month: u8,
        /// Build a preview from a survey that is still open
        #[arg(long)]
        preview: bool,
    },

    /// List the mass slots of a month
    #[command(visible_alias = "s")]
    Slots { year: i32, month: u8 },

    /// Describe the liturgical year: Easter, movable feasts, seasons, novena
    #[command(visible_alias = "c")]
    Calendar { year: i32 },
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn run(&self) -> Result<String> {
        let source: InMemorySource = self.load_source()?;

        match &self.command {
            Command::Generate {
                year,
                month,
                preview,
            } => {
                let response: ScheduleResponse =
                    generate_schedule(*year, *month, *preview, &source.providers())?;
                info!(
                    slots = response.summary.total_slots,
                    incomplete = response.summary.incomplete_slots,
                    "Schedule ready"
                );
                self.render(&response)
            }
            Command::Slots { year, month } => {
                let response: SlotListResponse = list_slots(*year, *month, &source.providers())?;
                self.render(&response)
            }
            Command::Calendar { year } => {
                let config: SlotConfig = source.slot_config.clone().unwrap_or_default();
                let response: CalendarResponse = describe_year(*year, &config)?;
                self.render(&response)
            }
        }
    }

    /// Builds the in-memory providers from the fixture and the optional
    /// slot configuration override.
    fn load_source(&self) -> Result<InMemorySource> {
        let mut source: InMemorySource = match &self.fixture {
            Some(path) => {
                let document: String = read_file(path)?;
                InMemorySource::from_json_str(&document)
                    .wrap_err_with(|| format!("Failed to load fixture {}", path.display()))?
            }
            None => InMemorySource::default(),
        };

        if let Some(path) = &self.slot_config {
            let document: String = read_file(path)?;
            let config: SlotConfig = serde_json::from_str(&document)
                .wrap_err_with(|| format!("Invalid slot configuration in {}", path.display()))?;
            info!(path = %path.display(), "Using slot configuration override");
            source.slot_config = Some(config);
        }

        Ok(source)
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let output: String = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(output)
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_generate_arguments() {
        let args: Args = Args::try_parse_from([
            "mesc-roster",
            "generate",
            "2026",
            "3",
            "--preview",
            "--fixture",
            "parish.json",
        ])
        .unwrap();

        assert_eq!(args.fixture, Some(PathBuf::from("parish.json")));
        assert!(matches!(
            args.command,
            Command::Generate {
                year: 2026,
                month: 3,
                preview: true
            }
        ));
    }

    #[test]
    fn test_calendar_without_fixture_uses_default_configuration() {
        let args: Args = Args::try_parse_from(["mesc-roster", "calendar", "2026"]).unwrap();

        let output: String = args.run().unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["easter"], serde_json::json!("2026-04-05"));
        assert_eq!(json["feast_date"], serde_json::json!("2026-10-28"));
    }

    #[test]
    fn test_slots_without_configuration_fails() {
        let args: Args = Args::try_parse_from(["mesc-roster", "slots", "2026", "3"]).unwrap();

        let err: color_eyre::Report = args.run().unwrap_err();

        assert!(err.to_string().contains("slot_configuration"));
    }
}
