use clap::Parser;
use sdc_core::{CompletionAnalyzer, Console, PathResolver, SaveError};

#[derive(Parser, Debug)]
#[command(
    name = "sdc",
    about = "Find a Stardew Valley save and summarise its progress",
    version
)]
struct Cli {
    /// Print debug logging to stderr (RUST_LOG overrides)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut console = Console::stdio();
    let resolver = PathResolver::default();
    let analyzer = CompletionAnalyzer::default();
    log::debug!("completion rules: {:?}", analyzer.rule_names());

    match sdc_core::session::run(&mut console, &resolver, &analyzer) {
        Ok(Some(report)) => {
            if cli.json {
                match serde_json::to_string_pretty(&report.to_json()) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("error: {}", e);
                        std::process::exit(2);
                    }
                }
            } else {
                println!();
                print!("{}", report);
            }
        }
        Ok(None) => std::process::exit(1),
        Err(e) => {
            if is_read_failure(&e) {
                eprintln!("Could not read save file.");
            }
            eprintln!("error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

fn is_read_failure(e: &SaveError) -> bool {
    matches!(e, SaveError::NotFound { .. } | SaveError::Io { .. })
}

fn exit_code(e: &SaveError) -> i32 {
    match e {
        SaveError::NoSaves => 1,
        SaveError::InputClosed => 4,
        e if e.is_malformed_document() => 3,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn read_failures_get_the_save_file_message() {
        let io = SaveError::io(
            "Alice_1/SaveGameInfo",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        assert!(is_read_failure(&io));
        assert_eq!(exit_code(&io), 2);
        let gone = SaveError::NotFound { what: "save directory", path: PathBuf::from("Alice_1") };
        assert!(is_read_failure(&gone));
        assert!(!is_read_failure(&SaveError::MissingField("Farmer".into())));
        assert_eq!(exit_code(&SaveError::MissingField("Farmer".into())), 3);
        assert_eq!(exit_code(&SaveError::NoSaves), 1);
    }
}
