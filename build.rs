use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Deserialize)]
struct RuleEntry {
    prefix: String,
    #[serde(rename = "iconName")]
    icon_name: String,
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("kernel_module_rules.rs");

    // Tell Cargo to rerun if the rule table changes
    println!("cargo:rerun-if-changed=src/kernel_module_rules.json");

    let json_path = Path::new("src/kernel_module_rules.json");
    let file = File::open(json_path).expect("Failed to open kernel_module_rules.json");
    let reader = BufReader::new(file);
    let entries: Vec<RuleEntry> =
        serde_json::from_reader(reader).expect("Failed to parse kernel_module_rules.json");

    // A repeated prefix could never match, the earlier one always wins
    let mut seen_prefixes: HashSet<&str> = HashSet::new();
    for entry in &entries {
        if !seen_prefixes.insert(&entry.prefix) {
            panic!("Duplicate rule prefix in kernel_module_rules.json: {}", entry.prefix);
        }
        if entry.prefix.is_empty() || entry.icon_name.is_empty() {
            panic!("Empty prefix or icon name in kernel_module_rules.json");
        }
    }

    let mut out_file = BufWriter::new(File::create(&dest_path).unwrap());

    // Rules keep their declared order, first match wins
    writeln!(
        out_file,
        "static PREFIX_RULES: &[(&str, &str)] = &["
    )
    .unwrap();
    for entry in &entries {
        writeln!(out_file, "    ({:?}, {:?}),", entry.prefix, entry.icon_name).unwrap();
    }
    writeln!(out_file, "];").unwrap();

    // Every icon some rule can produce
    writeln!(out_file).unwrap();
    writeln!(out_file, "static KNOWN_ICONS: phf::Set<&'static str> = ").unwrap();
    let mut seen_icons: HashSet<&str> = HashSet::new();
    let mut builder = phf_codegen::Set::new();
    for entry in &entries {
        if seen_icons.insert(&entry.icon_name) {
            builder.entry(entry.icon_name.as_str());
        }
    }
    writeln!(out_file, "{};", builder.build()).unwrap();
}
