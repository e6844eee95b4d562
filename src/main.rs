// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `curves`: search for irreducible closed curves without a simple arc.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::{debug, info};

use exceptional_curves::context::{ArcCriterion, SearchConfig};
use exceptional_curves::logging::init_logger;
use exceptional_curves::report::write_report;
use exceptional_curves::search::find_exceptional_curves;

#[derive(Debug, Parser)]
#[command(name = "curves")]
#[command(about = "Search for irreducible plane curves lacking a simple arc")]
struct Cli {
    /// Allow flypes before looking for the simple arc.
    #[arg(long)]
    flypes: bool,

    /// Length of the simple arc (default: 6 plain, 8 with flypes).
    #[arg(long)]
    arc_length: Option<usize>,

    /// Largest number of marked points added in one step (default: arc length - 1).
    #[arg(long)]
    max_extension: Option<u32>,

    /// Write the report here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig> {
        let criterion = if self.flypes {
            ArcCriterion::WithFlypes
        } else {
            ArcCriterion::Plain
        };
        let mut config = SearchConfig::new(criterion);
        if let Some(arc_length) = self.arc_length {
            ensure!(arc_length > 0, "--arc-length must be positive");
            config = config.with_arc_length(arc_length);
        }
        if let Some(max_extension) = self.max_extension {
            ensure!(max_extension > 0, "--max-extension must be positive");
            config = config.with_max_extension(max_extension);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    debug!("CLI arguments: {:?}", cli);

    let config = cli.search_config()?;
    let outcome = find_exceptional_curves(&config);

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create report file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_report(&mut writer, &outcome)?;
            writer.flush()?;
            info!("report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_report(&mut writer, &outcome).context("cannot write report")?;
        }
    }
    Ok(())
}
