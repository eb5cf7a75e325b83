//! eclipse-edit entrypoint: loads a file into the edit box, replays an input
//! script against it, and prints the resulting frame.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{MemoryClipboard, dispatch};
use core_config::load_from;
use core_model::{CellMeasure, DEFAULT_LINE_HEIGHT, EditorModel, offset_to_line_col};
use core_render::{CaretBlink, TextSink, render};
use core_text::Buffer;
use core_text::line_ending::normalize_line_endings;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

mod script;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "eclipse-edit", version, about = "Headless multi-line edit box")]
struct Args {
    /// UTF-8 text file to load. If omitted the box starts empty.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `eclipse-edit.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Edit box width in pixels.
    #[arg(long, default_value_t = 640)]
    pub width: u32,
    /// Edit box height in pixels.
    #[arg(long, default_value_t = 480)]
    pub height: u32,
    /// Advance of one terminal cell in pixels for the built-in measurer.
    #[arg(long = "cell-width", default_value_t = 8)]
    pub cell_width: u32,
    /// Input script to replay (see `script` module for the syntax).
    #[arg(long)]
    pub script: Option<PathBuf>,
    /// Directory for `eclipse-edit.log`.
    #[arg(long = "log-dir", default_value = ".")]
    pub log_dir: PathBuf,
}

fn configure_logging(log_dir: &Path) -> Option<WorkerGuard> {
    let log_path = log_dir.join("eclipse-edit.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "eclipse-edit.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .try_init()
        .ok()
        .map(|_| guard)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

/// Read `path` into a buffer. A missing or unreadable file yields an empty
/// buffer and `open_failed = true`.
fn load_buffer(path: Option<&Path>) -> (Buffer, bool) {
    let Some(path) = path else {
        return (Buffer::new(), false);
    };
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let norm = normalize_line_endings(&content);
            info!(
                target: "runtime.startup",
                path = %path.display(),
                original = ?norm.original,
                mixed = norm.mixed,
                "file_loaded"
            );
            (Buffer::from_text(&norm.normalized), false)
        }
        Err(err) => {
            warn!(target: "runtime.startup", path = %path.display(), error = %err, "open_failed");
            (Buffer::new(), true)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging(&args.log_dir);
    install_panic_hook();
    info!(target: "runtime", "startup");

    let config = load_from(args.config.clone());
    let (buffer, open_failed) = load_buffer(args.path.as_deref());
    let measure = CellMeasure::new(args.cell_width.max(1), DEFAULT_LINE_HEIGHT);
    let mut model = EditorModel::from_config(buffer, &config.file, args.width, args.height)
        .with_measure(measure);
    info!(
        target: "runtime.startup",
        open_failed,
        config_override = args.config.is_some(),
        width = args.width,
        height = args.height,
        "bootstrap_complete"
    );

    let mut clipboard = MemoryClipboard::new();
    let mut blink = CaretBlink::new(model.options().blink_ms);
    if let Some(script_path) = args.script.as_ref() {
        let src = std::fs::read_to_string(script_path)
            .with_context(|| format!("reading script {}", script_path.display()))?;
        let commands = script::parse_script(&src)?;
        let total = commands.len();
        let mut text_changes = 0usize;
        for cmd in commands {
            let result = dispatch(cmd, &mut model, &mut clipboard);
            if result.dirty {
                blink.reset();
            }
            if result.text_changed {
                text_changes += 1;
            }
        }
        info!(target: "runtime", commands = total, text_changes, "script_replayed");
    }

    let mut sink = TextSink::new();
    render(&mut model, &blink, &mut sink);
    print!("{}", sink.output());

    let state = model.state();
    let (line, col) = offset_to_line_col(state.buffer(), state.caret());
    println!("caret: {} (line {}, col {})", state.caret(), line + 1, col + 1);
    let (a, b) = state.selection().range();
    if a < b {
        println!("selection: {a}..{b}");
    }
    println!(
        "undo: {} redo: {}",
        state.undo_engine().undo_depth(),
        state.undo_engine().redo_depth()
    );
    info!(target: "runtime", "shutdown");
    Ok(())
}
