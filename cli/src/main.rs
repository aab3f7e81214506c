//! bcp - Byte Copy
//!
//! Copy files as raw byte streams, and read or write small text files,
//! powered by bytecopy.

use bytecopy::{
    CopyOptions, CopyStats, Error as BytecopyError, ErrorCode, copy_file,
    copy_file_with_progress, create_progress_bar, progress_bar_callback, read_text, write_text,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

/// Greeting written by `bcp demo`.
const DEMO_MESSAGE: &str = "Dear Rust Developers, \nWelcome to the world of Streams!\n";
const DEMO_FILE: &str = "message.txt";
const DEMO_COPY_FILE: &str = "message_copy.txt";

/// bcp - Byte-stream file copy
///
/// Copies files byte for byte through a small fixed buffer, so binary
/// content is never decoded or altered.
///
/// Usage:
///   bcp copy SOURCE DEST
///   bcp write PATH TEXT
///   bcp read PATH
///   bcp demo [--dir DIR]
#[derive(Parser, Debug)]
#[command(name = "bcp", version, about, long_about = None)]
struct Args {
    /// Verbose output (debug logging on stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Copy SOURCE to DEST byte for byte, replacing DEST if it exists
    Copy {
        /// File to read
        source: PathBuf,

        /// File to create or overwrite
        dest: PathBuf,

        /// Do not call fsync on the destination (faster but less safe)
        #[arg(long)]
        no_sync: bool,

        /// Disable progress bar
        #[arg(short = 'q', long)]
        quiet: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        output: OutputMode,
    },

    /// Write TEXT to PATH, replacing any existing content
    Write {
        /// File to create or overwrite
        path: PathBuf,

        /// Text to write
        text: String,
    },

    /// Print the text content of PATH
    Read {
        /// File to read
        path: PathBuf,
    },

    /// Write a greeting file, read it back, and copy it
    Demo {
        /// Directory to create the demo files in
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to copy {} -> {}: {source}", .src.display(), .dst.display())]
    CopyFile {
        src: PathBuf,
        dst: PathBuf,
        source: BytecopyError,
    },

    #[error("Failed to write text: {source}")]
    WriteText { source: BytecopyError },

    #[error("Failed to read text: {source}")]
    ReadText { source: BytecopyError },

    #[error("Demo directory does not exist: {path}")]
    DemoDirectory { path: PathBuf },

    #[error("Failed to serialize JSON output: {source}")]
    JsonSerialize { source: serde_json::Error },
}

impl CliError {
    fn code(&self) -> ErrorCode {
        match self {
            CliError::CopyFile { source, .. }
            | CliError::WriteText { source }
            | CliError::ReadText { source } => source.code(),
            CliError::DemoDirectory { .. } => ErrorCode::InvalidInput,
            CliError::JsonSerialize { .. } => ErrorCode::IoFailure,
        }
    }
}

fn exit_code_for(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::InvalidInput => 2,
        _ => 1,
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(error) = run(args.command) {
        tracing::debug!(?error, "command failed");
        eprintln!("error[{}]: {}", error.code(), error);
        std::process::exit(exit_code_for(error.code()));
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    // A subscriber may already be installed when embedded; keep that one
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(command: Command) -> CliResult<()> {
    match command {
        Command::Copy {
            source,
            dest,
            no_sync,
            quiet,
            output,
        } => {
            let mut options = CopyOptions::default();
            if no_sync {
                options = options.without_fsync();
            }
            let show_progress = !quiet && output == OutputMode::Human;
            let stats = run_copy(&source, &dest, &options, show_progress)?;
            match output {
                OutputMode::Human => {
                    print_stats(&stats, &dest);
                    Ok(())
                }
                OutputMode::Json => print_json_value(&stats_json(&stats, &source, &dest)),
            }
        }
        Command::Write { path, text } => {
            write_text(&path, &text).map_err(|source| CliError::WriteText { source })?;
            println!("Wrote {} to {}", format_bytes(text.len() as u64), path.display());
            Ok(())
        }
        Command::Read { path } => {
            let content = read_text(&path).map_err(|source| CliError::ReadText { source })?;
            print!("{content}");
            Ok(())
        }
        Command::Demo { dir } => run_demo(&dir),
    }
}

fn run_copy(
    source: &Path,
    dest: &Path,
    options: &CopyOptions,
    show_progress: bool,
) -> CliResult<CopyStats> {
    let result = if show_progress {
        let pb = create_progress_bar(0);
        let callback = progress_bar_callback(&pb);
        let result = copy_file_with_progress(source, dest, options, |copied, total| {
            callback(copied, total)
        });
        pb.finish_and_clear();
        result
    } else {
        copy_file(source, dest, options)
    };

    result.map_err(|err| CliError::CopyFile {
        src: source.to_path_buf(),
        dst: dest.to_path_buf(),
        source: err,
    })
}

fn run_demo(dir: &Path) -> CliResult<()> {
    if !dir.is_dir() {
        return Err(CliError::DemoDirectory {
            path: dir.to_path_buf(),
        });
    }
    let file_path = dir.join(DEMO_FILE);
    let copy_path = dir.join(DEMO_COPY_FILE);

    println!("Writing message to file...");
    write_text(&file_path, DEMO_MESSAGE).map_err(|source| CliError::WriteText { source })?;

    println!("Reading message from file...");
    let content = read_text(&file_path).map_err(|source| CliError::ReadText { source })?;
    println!("Content read:\n{content}");

    println!("Copying the file using byte stream...");
    run_copy(&file_path, &copy_path, &CopyOptions::default(), false)?;
    println!("File copied successfully to: {}", copy_path.display());

    Ok(())
}

fn stats_json(stats: &CopyStats, source: &Path, dest: &Path) -> Value {
    json!({
        "status": "copied",
        "source": display_path(source),
        "destination": display_path(dest),
        "bytes_copied": stats.bytes_copied,
        "chunks": stats.chunks,
        "duration_ms": stats.duration.as_millis() as u64,
    })
}

fn print_stats(stats: &CopyStats, dest: &Path) {
    println!(
        "Copied {} to {} in {:?}",
        format_bytes(stats.bytes_copied),
        dest.display(),
        stats.duration
    );
    tracing::debug!(chunks = stats.chunks, "transfer finished");
}

fn print_json_value(value: &Value) -> CliResult<()> {
    let serialized =
        serde_json::to_string(value).map_err(|source| CliError::JsonSerialize { source })?;
    println!("{serialized}");
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
