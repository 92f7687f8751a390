use std::path::PathBuf;

use anyhow::Context;
use lined::command::help;
use lined::logging::{self, LogLevel, Logger};
use lined::ui::{CrosstermTerminal, StdConsole};
use lined::{error, App, EditorConfig};

fn main() -> anyhow::Result<()> {
    error::setup_panic_handler();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (files, debug_log) = parse_args(&args);

    let config = match EditorConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("WARNING: {}, using defaults", e);
            EditorConfig::default()
        }
    };
    init_logging(&config, debug_log);

    if config.show_banner {
        eprintln!("{}", help::banner());
    }

    let [filename] = files.as_slice() else {
        eprintln!("{}", help::HELP);
        return Ok(());
    };

    let console = StdConsole::new(CrosstermTerminal::new(config.line_width));
    let mut app = App::open(filename, console)
        .with_context(|| format!("failed to open {}", filename))?
        .with_prompt(config.prompt.clone());
    app.run().context("editor session failed")?;

    Ok(())
}

fn init_logging(config: &EditorConfig, debug_log: Option<PathBuf>) {
    let level = config.effective_log_level().unwrap_or_else(|e| {
        eprintln!("WARNING: {}", e);
        LogLevel::Info
    });

    let mut logger = Logger::new(level);
    if let Some(path) = debug_log.or_else(|| config.log_file.clone()) {
        logger = logger.with_file_output(path);
    }
    logging::init(logger);
}

/// ファイル名と `--debug-log <path>` を取り出す
fn parse_args(args: &[String]) -> (Vec<String>, Option<PathBuf>) {
    let mut files = Vec::new();
    let mut debug_log = None;

    let mut iter = args.iter().peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug-log" => {
                let path = iter
                    .next_if(|next| !next.starts_with('-'))
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("lined.log"));
                debug_log = Some(path);
            }
            _ => files.push(arg.clone()),
        }
    }

    (files, debug_log)
}
