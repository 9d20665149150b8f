use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, error, info};

use kmod_icons::{logger, Config, Error, Result};

/// Merge kernel module icons into the icon table and print it to stdout
#[derive(Debug, Parser)]
#[command(name = "update-kernel-module-icons", version)]
struct Args {
    /// Existing icon table (JSON object of module name to icon name)
    #[arg(long, value_name = "PATH")]
    icon_table: Option<PathBuf>,

    /// Module list, one `kernel/...` path per line
    #[arg(long, value_name = "PATH")]
    module_list: Option<PathBuf>,

    /// Configuration file to read instead of the default one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?.with_overrides(args.icon_table, args.module_list);
    debug!("Using {:?}", config);

    let (table, summary) = kmod_icons::update(&config)?;
    info!(
        "{} module paths: {} matched ({} changed), {} without a rule, {} without the kernel/ prefix",
        summary.lines, summary.matched, summary.changed, summary.unmatched, summary.unprefixed
    );
    for (module, icon) in table.unknown_icons() {
        debug!("{} uses icon {:?} which no rule produces", module, icon);
    }

    let json = table.to_json()?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)
        .and_then(|()| stdout.flush())
        .map_err(Error::Write)?;
    Ok(())
}

fn main() {
    logger::init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        process::exit(1);
    }
}
