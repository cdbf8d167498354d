// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

use abiprobe::build_id;
use abiprobe::catalogue;
use abiprobe::report;
use abiprobe::Group;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use log::debug;
use std::io::BufWriter;
use std::io::Write;

const PROBE_NAME: &str = "abiprobe";

#[derive(Default, Debug, Clone, Copy, clap::ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

/// abiprobe: report ABI facts of the build platform
///
/// Prints the sizes of C types, field offsets of kernel and libc
/// structures and the values of symbolic constants as compiled into this
/// binary, grouped by subsystem.
#[derive(Debug, Parser)]
#[command(
    name = "abiprobe",
    version,
    disable_version_flag = true,
    verbatim_doc_comment
)]
struct Opts {
    /// Output format. The text report is the canonical one.
    #[clap(short = 'f', long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Only report the given subsystem. Specify multiple times to select
    /// several; the catalogue order is kept.
    #[clap(short = 's', long = "section", value_enum)]
    sections: Vec<Group>,

    /// Enable verbose output on stderr. Specify multiple times to increase
    /// verbosity.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print version and exit.
    #[clap(short = 'V', long, action = clap::ArgAction::SetTrue)]
    version: bool,
}

fn init_log(verbose: u8) -> Result<()> {
    let llv = match verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };

    let mut lcfg = simplelog::ConfigBuilder::new();
    // Local offset can't be determined in some environments, UTC is fine.
    let lcfg = match lcfg.set_time_offset_to_local() {
        Ok(lcfg) | Err(lcfg) => lcfg,
    };
    lcfg.set_time_level(simplelog::LevelFilter::Error)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);

    simplelog::TermLogger::init(
        llv,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    if opts.version {
        println!(
            "{} {}",
            PROBE_NAME,
            build_id::full_version(env!("CARGO_PKG_VERSION"))
        );
        return Ok(());
    }

    init_log(opts.verbose)?;
    debug!("opts={:?}", &opts);
    debug!("probing {}", *build_id::TARGET_TRIPLE);

    let entries = if opts.sections.is_empty() {
        catalogue::collect()
    } else {
        catalogue::collect_groups(&opts.sections)
    };
    debug!("collected {} report lines", entries.len());

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match opts.format {
        Format::Text => report::render_text(&entries, &mut out),
        Format::Json => report::render_json(&entries, &mut out),
    }
    .context("Failed to write report")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
