//! Soundboard CLI - search through audio file metadata.
//!
//! Builds (or loads) the tag index of one directory and prints the path of
//! the file that best matches `--search`. Only the result line goes to
//! stdout; logs and error messages go to stderr.

mod runner;

use anyhow::{Context, Result};
use clap::Parser;
use soundboard_core::{IndexBuilder, IndexStore};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "soundboard")]
#[command(about = "Soundboard CLI usage.")]
#[command(version)]
pub(crate) struct Args {
    /// Update index file.
    #[arg(long = "rebuild-index-file")]
    pub rebuild_index: bool,

    /// Search the persisted index file instead of re-reading the directory.
    #[arg(long = "use-index-file")]
    pub use_index: bool,

    /// Directory of soundboard files. The exact string keys the index file.
    #[arg(long)]
    pub path: String,

    /// String to look for in file metadata.
    #[arg(long = "search")]
    pub to_find: Option<String>,

    /// Directory holding index files (defaults to $SOUNDBOARD_INDEX_DIR, then the temp dir)
    #[arg(long)]
    pub index_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

fn init_logging(debug: bool) -> Result<()> {
    let default_level = if debug { Level::DEBUG } else { Level::ERROR };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to install logger")
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.debug) {
        eprintln!("soundboard: {:#}", e);
        return ExitCode::FAILURE;
    }

    let store = match &args.index_dir {
        Some(dir) => IndexStore::new(dir),
        None => IndexStore::from_env(),
    };

    match runner::run(&args, &IndexBuilder::new(), &store) {
        Ok(Some(line)) => {
            // Intentional stdout: the result line is the program's output.
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("soundboard: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_required() {
        let result = Args::try_parse_from(["soundboard", "--search", "horn"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_default_off() {
        let args = Args::try_parse_from(["soundboard", "--path", "/sfx/"]).unwrap();
        assert!(!args.rebuild_index);
        assert!(!args.use_index);
        assert!(!args.debug);
        assert_eq!(args.to_find, None);
        assert_eq!(args.index_dir, None);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "soundboard",
            "--path",
            "/sfx/",
            "--rebuild-index-file",
            "--use-index-file",
            "--search",
            "air horn",
            "--index-dir",
            "/var/cache/soundboard",
        ])
        .unwrap();
        assert!(args.rebuild_index);
        assert!(args.use_index);
        assert_eq!(args.path, "/sfx/");
        assert_eq!(args.to_find.as_deref(), Some("air horn"));
        assert_eq!(args.index_dir, Some(PathBuf::from("/var/cache/soundboard")));
    }

    #[test]
    fn test_path_string_is_kept_verbatim() {
        let args = Args::try_parse_from(["soundboard", "--path", "sfx//"]).unwrap();
        assert_eq!(args.path, "sfx//");
    }
}
