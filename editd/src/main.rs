mod cli;
mod report;
mod run;
mod util;

use std::io::{stdout, Write};

use cli::{Cli, SubCommands};
use run::{run_pair, run_par, run_seq};
use util::init_logging;

use clap::Parser;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();

    let command = Cli::parse().command;
    let common_args = command.common_args().clone();
    init_logging(common_args.verbosity);

    let report = match command {
        SubCommands::Seq(args) => run_seq(&args)?,
        SubCommands::Par(args) => run_par(&args)?,
        SubCommands::Pair(args) => run_pair(&args)?,
    };

    let mut out = stdout().lock();
    report.write(common_args.json, &mut out)?;
    out.flush()?;

    Ok(())
}
