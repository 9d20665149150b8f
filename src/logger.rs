use std::io::Write;

use env_logger::{Builder, Env};

/// Log to stderr, stdout carries the table
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let now = chrono::Local::now();
            writeln!(
                buf,
                "[{}] {}: {}",
                now.format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}
