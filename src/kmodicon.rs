//! Companion CLI: query the icon table and the prefix rules

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::error;

use kmod_icons::table::FALLBACK_ICON;
use kmod_icons::{classify, logger, rules, Config, IconTable, Result};

#[derive(Debug, Parser)]
#[command(name = "kmodicon", version, about = "Look up kernel module icons")]
struct Args {
    /// Configuration file to read instead of the default one
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the icon the hardware view shows for each loaded module
    Lookup {
        /// Icon table to read
        #[arg(long, value_name = "PATH")]
        icon_table: Option<PathBuf>,

        #[arg(required = true)]
        modules: Vec<String>,
    },
    /// Print how each `kernel/...` module path is classified
    Classify {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the prefix rules in match order
    Rules,
}

fn lookup_line(table: &IconTable, module: &str) -> String {
    format!("{}\t{}", module, table.lookup(module).unwrap_or(FALLBACK_ICON))
}

fn classify_line(path: &str) -> String {
    match classify(path) {
        Some(found) => format!("{}\t{}", found.module, found.icon),
        None => format!("{}\t-", path),
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Lookup { icon_table, modules } => {
            let config = Config::load(args.config.as_deref())?.with_overrides(icon_table, None);
            let table = IconTable::load(&config.icon_table_path)?;
            for module in &modules {
                println!("{}", lookup_line(&table, module));
            }
        }

        Command::Classify { paths } => {
            for path in &paths {
                println!("{}", classify_line(path));
            }
        }

        Command::Rules => {
            for (prefix, icon) in rules::rules() {
                println!("{}\t{}", prefix, icon);
            }
        }
    }
    Ok(())
}

fn main() {
    logger::init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_lookup_line() {
        let table = IconTable::from_json(r#"{"snd-hda-intel": "audio"}"#).unwrap();
        assert_eq!(lookup_line(&table, "snd_hda_intel"), "snd_hda_intel\taudio");
        assert_eq!(lookup_line(&table, "i915"), "i915\tmodule");
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line("kernel/drivers/usb/core/usbcore.ko.xz"), "usbcore\tusb");
        assert_eq!(classify_line("kernel/lib/crc32.ko"), "kernel/lib/crc32.ko\t-");
    }

    #[test]
    fn test_parse_lookup() {
        let args = Args::try_parse_from(["kmodicon", "lookup", "--icon-table", "t.json", "ext4", "btusb"]).unwrap();
        match args.command {
            Command::Lookup { icon_table, modules } => {
                assert_eq!(icon_table, Some(PathBuf::from("t.json")));
                assert_eq!(modules, vec!["ext4", "btusb"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_lookup_requires_modules() {
        assert!(Args::try_parse_from(["kmodicon", "lookup"]).is_err());
    }
}
