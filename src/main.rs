use anyhow::Result;
use std::path::PathBuf;
use taskboard::config::Config;
use taskboard::{logger, ui};

const USAGE: &str = "Usage: taskboard <snapshot.json>\n       taskboard --generate-config [path]";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--generate-config") => {
            let path = match args.get(1) {
                Some(path) => PathBuf::from(path),
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(path)
        }
        Some("-h" | "--help") | None => {
            eprintln!("{USAGE}");
            Ok(())
        }
        Some(snapshot_path) => {
            let config = Config::load()?;
            if let Some(log_path) = logger::init(&config.logging)? {
                eprintln!("Logging to {}", log_path.display());
            }

            // Run the TUI application
            ui::run_app(config, &PathBuf::from(snapshot_path))
        }
    }
}
