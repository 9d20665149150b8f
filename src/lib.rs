//! Maintains the kernel module → icon table of the hardware information view.
//!
//! Module paths such as `kernel/drivers/net/wireless/ath/ath9k/ath9k.ko` are
//! matched against an ordered list of path prefixes. The first prefix that
//! matches decides the icon, and the module name (`ath9k`) is upserted into the
//! existing table. Entries for modules not in the list are left untouched.

pub mod classifier;
pub mod config;
pub mod error;
pub mod logger;
pub mod rules;
pub mod table;

use std::fs::File;
use std::io::BufReader;

use log::debug;

pub use classifier::{classify, Classification, Classifier, Summary};
pub use config::Config;
pub use error::{Error, Result};
pub use table::IconTable;

/// Load the icon table and merge in every module from the module list
pub fn update(config: &Config) -> Result<(IconTable, Summary)> {
    let mut table = IconTable::load(&config.icon_table_path)?;
    debug!("Loaded {} entries from {:?}", table.len(), config.icon_table_path);

    let read_error = |source| Error::Read {
        path: config.module_list_path.clone(),
        source,
    };
    let file = File::open(&config.module_list_path).map_err(read_error)?;
    let summary = Classifier::new()
        .process(&mut table, BufReader::new(file))
        .map_err(read_error)?;

    Ok((table, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    struct TempFiles {
        config: Config,
    }

    impl TempFiles {
        fn new(name: &str, table: &str, modules: &str) -> Self {
            let dir = std::env::temp_dir();
            let prefix = format!("kmod-icons-{}-{}", std::process::id(), name);
            let config = Config {
                icon_table_path: dir.join(format!("{}.json", prefix)),
                module_list_path: dir.join(format!("{}.list", prefix)),
            };
            fs::write(&config.icon_table_path, table).unwrap();
            fs::write(&config.module_list_path, modules).unwrap();
            Self { config }
        }
    }

    impl Drop for TempFiles {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.config.icon_table_path);
            let _ = fs::remove_file(&self.config.module_list_path);
        }
    }

    #[test]
    fn test_update() {
        let files = TempFiles::new(
            "update",
            r#"{"foo": "other"}"#,
            "kernel/fs/ext4/ext4.ko\nkernel/drivers/usb/core/usbcore.ko.xz\nkernel/lib/crc32.ko\n",
        );

        let (table, summary) = update(&files.config).unwrap();
        assert_eq!(
            table.to_json().unwrap(),
            "{\n    \"ext4\": \"filesystem\",\n    \"foo\": \"other\",\n    \"usbcore\": \"usb\"\n}"
        );
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.unmatched, 1);
    }

    #[test]
    fn test_update_fixed_point() {
        let modules = "kernel/drivers/net/wireless/intel/iwlwifi/iwlwifi.ko\nkernel/sound/pci/hda/snd-hda-intel.ko\n";
        let first = TempFiles::new("fixed-first", "{}", modules);
        let (table, _) = update(&first.config).unwrap();
        let output = table.to_json().unwrap();

        let second = TempFiles::new("fixed-second", &output, modules);
        let (table, _) = update(&second.config).unwrap();
        assert_eq!(table.to_json().unwrap(), output);
    }

    #[test]
    fn test_update_missing_module_list() {
        let files = TempFiles::new("missing-list", "{}", "");
        let config = Config {
            module_list_path: PathBuf::from("/nonexistent/kmod-icons/module_list"),
            ..files.config.clone()
        };
        assert!(matches!(update(&config), Err(Error::Read { path, .. }) if path == config.module_list_path));
    }

    #[test]
    fn test_update_malformed_table() {
        let files = TempFiles::new("malformed", "{\"foo\": ", "kernel/fs/ext4/ext4.ko\n");
        assert!(matches!(update(&files.config), Err(Error::Parse { .. })));
    }
}
