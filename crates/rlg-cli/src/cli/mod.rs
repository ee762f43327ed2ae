//! CLI for the RLG redirect list generator.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rlg_core::config::{self, RlgConfig};
use rlg_core::table::ColumnSpec;
use std::path::PathBuf;

use commands::{run_convert, run_inspect};

/// Top-level CLI for the RLG redirect list generator.
#[derive(Debug, Parser)]
#[command(name = "rlg")]
#[command(about = "RLG: convert URL mapping tables into per-host redirect lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Column selection flags shared by commands; config supplies defaults.
#[derive(Debug, Args, Default)]
pub struct ColumnArgs {
    /// Name of the source URL column (default: first column).
    #[arg(long, value_name = "NAME")]
    pub source_col: Option<String>,

    /// Name of the target URL column (default: second column).
    #[arg(long, value_name = "NAME")]
    pub target_col: Option<String>,

    /// Name of the status column (default: third column, if present).
    #[arg(long, value_name = "NAME")]
    pub status_col: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert a mapping table into per-host redirect list files.
    Convert {
        /// Path to the input .csv or workbook file.
        input: PathBuf,

        /// Directory for the output text files.
        output_dir: PathBuf,

        #[command(flatten)]
        columns: ColumnArgs,
    },

    /// Show resolved columns and per-host line counts without writing files.
    Inspect {
        /// Path to the input .csv or workbook file.
        input: PathBuf,

        #[command(flatten)]
        columns: ColumnArgs,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Convert {
                input,
                output_dir,
                columns,
            } => {
                let spec = columns.into_spec(&cfg);
                run_convert(&cfg, &input, &output_dir, spec)?;
            }
            CliCommand::Inspect { input, columns } => {
                let spec = columns.into_spec(&cfg);
                run_inspect(&cfg, &input, spec)?;
            }
        }

        Ok(())
    }
}

impl ColumnArgs {
    /// Flags take precedence over config defaults.
    fn into_spec(self, cfg: &RlgConfig) -> ColumnSpec {
        ColumnSpec {
            source: self.source_col.or_else(|| cfg.source_column.clone()),
            target: self.target_col.or_else(|| cfg.target_column.clone()),
            status: self.status_col.or_else(|| cfg.status_column.clone()),
        }
    }
}
