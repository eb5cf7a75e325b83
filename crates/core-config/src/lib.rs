//! Configuration loading for the edit box (`eclipse-edit.toml`).
//!
//! Every key is optional; missing sections take their defaults and unknown
//! fields are ignored so older files keep loading. A file that cannot be read
//! or parsed yields the defaults with a `warn` on the `config` target, never
//! an error: the engine has no failing operations and neither does loading.
//!
//! Values the engine cannot work with (`undo_limit = 0`,
//! `min_content_width = 0`) are raised to 1 in `Config::normalize`, which
//! logs the adjustment at `info`.

use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "eclipse-edit.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_undo_limit")]
    pub undo_limit: usize,
    /// Max interval between presses that still counts as a double/triple click.
    #[serde(default = "EditorConfig::default_multi_click_ms")]
    pub multi_click_ms: u64,
    #[serde(default = "EditorConfig::default_tab_spaces")]
    pub tab_spaces: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            undo_limit: Self::default_undo_limit(),
            multi_click_ms: Self::default_multi_click_ms(),
            tab_spaces: Self::default_tab_spaces(),
        }
    }
}

impl EditorConfig {
    const fn default_undo_limit() -> usize {
        200
    }
    const fn default_multi_click_ms() -> u64 {
        400
    }
    const fn default_tab_spaces() -> usize {
        4
    }
}

/// Edit box geometry in pixels.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    #[serde(default = "LayoutConfig::default_padding")]
    pub padding: u32,
    #[serde(default = "LayoutConfig::default_gutter_width")]
    pub gutter_width: u32,
    #[serde(default = "LayoutConfig::default_line_spacing")]
    pub line_spacing: u32,
    #[serde(default = "LayoutConfig::default_min_content_width")]
    pub min_content_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: Self::default_padding(),
            gutter_width: Self::default_gutter_width(),
            line_spacing: Self::default_line_spacing(),
            min_content_width: Self::default_min_content_width(),
        }
    }
}

impl LayoutConfig {
    const fn default_padding() -> u32 {
        8
    }
    const fn default_gutter_width() -> u32 {
        48
    }
    const fn default_line_spacing() -> u32 {
        4
    }
    const fn default_min_content_width() -> u32 {
        10
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CaretConfig {
    #[serde(default = "CaretConfig::default_blink_ms")]
    pub blink_ms: u64,
    #[serde(default = "CaretConfig::default_width")]
    pub width: u32,
}

impl Default for CaretConfig {
    fn default() -> Self {
        Self {
            blink_ms: Self::default_blink_ms(),
            width: Self::default_width(),
        }
    }
}

impl CaretConfig {
    const fn default_blink_ms() -> u64 {
        530
    }
    const fn default_width() -> u32 {
        2
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ScrollConfig {
    /// Rows scrolled per wheel notch.
    #[serde(default = "ScrollConfig::default_wheel_lines")]
    pub wheel_lines: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            wheel_lines: Self::default_wheel_lines(),
        }
    }
}

impl ScrollConfig {
    const fn default_wheel_lines() -> u32 {
        3
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub caret: CaretConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub source: Option<PathBuf>,
    pub file: ConfigFile,
}

/// Local `eclipse-edit.toml` first, then the platform config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("eclipse-edit").join(CONFIG_FILE_NAME);
    }
    local
}

/// Parse TOML text; `path` only labels the error.
pub fn parse_str(content: &str, path: &Path) -> Result<ConfigFile, ConfigError> {
    toml::from_str::<ConfigFile>(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse one file without any fallback.
pub fn read_file(path: &Path) -> Result<(String, ConfigFile), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file = parse_str(&content, path)?;
    Ok((content, file))
}

/// Load the config at `path` (or the discovered location).
///
/// Never fails: a missing file, an unreadable file, or malformed TOML all
/// yield the defaults, logged under the `config` target.
pub fn load_from(path: Option<PathBuf>) -> Config {
    let path = path.unwrap_or_else(discover);
    let mut cfg = match read_file(&path) {
        Ok((content, file)) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Config {
                raw: Some(content),
                source: Some(path),
                file,
            }
        }
        Err(ConfigError::Read { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            info!(target: "config", path = %path.display(), "config_missing_using_defaults");
            Config::default()
        }
        Err(e) => {
            warn!(target: "config", error = %e, "config_unusable_using_defaults");
            Config::default()
        }
    };
    cfg.normalize();
    cfg
}

impl Config {
    /// Raise zero values the engine cannot honor. Returns true when anything changed.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;
        let undo_limit = self.file.editor.undo_limit;
        if undo_limit == 0 {
            self.file.editor.undo_limit = 1;
            info!(target: "config", raw = undo_limit, clamped = 1, "undo_limit_clamped");
            changed = true;
        }
        let min_width = self.file.layout.min_content_width;
        if min_width == 0 {
            self.file.layout.min_content_width = 1;
            info!(target: "config", raw = min_width, clamped = 1, "min_content_width_clamped");
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl<'a> Write for LockedWriter<'a> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    fn capture<F: FnOnce()>(f: F) -> String {
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();
        with_default(subscriber, f);
        let bytes = buffer.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn default_config_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml")));
        assert_eq!(cfg.file, ConfigFile::default());
        assert_eq!(cfg.file.editor.undo_limit, 200);
        assert_eq!(cfg.file.editor.multi_click_ms, 400);
        assert_eq!(cfg.file.layout.padding, 8);
        assert_eq!(cfg.file.layout.gutter_width, 48);
        assert_eq!(cfg.file.layout.min_content_width, 10);
        assert_eq!(cfg.file.caret.blink_ms, 530);
        assert_eq!(cfg.file.scroll.wheel_lines, 3);
        assert!(cfg.raw.is_none());
    }

    #[test]
    fn parses_partial_sections() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            tmp.path(),
            "[editor]\nundo_limit = 50\n[layout]\ngutter_width = 0\nline_spacing = 2\n",
        )
        .unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf()));
        assert_eq!(cfg.file.editor.undo_limit, 50);
        assert_eq!(cfg.file.editor.tab_spaces, 4);
        assert_eq!(cfg.file.layout.gutter_width, 0);
        assert_eq!(cfg.file.layout.line_spacing, 2);
        assert_eq!(cfg.file.layout.padding, 8);
        assert_eq!(cfg.source.as_deref(), Some(tmp.path()));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let file = parse_str(
            "[editor]\nfuture_knob = true\n[theme]\nname = \"dark\"\n",
            Path::new("inline"),
        )
        .unwrap();
        assert_eq!(file, ConfigFile::default());
    }

    #[test]
    fn parse_error_reports_path() {
        let err = parse_str("[editor\nundo_limit = 1", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn malformed_file_falls_back_with_warning() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[caret]\nblink_ms = \"fast\"\n").unwrap();
        let mut cfg = None;
        let out = capture(|| {
            cfg = Some(load_from(Some(tmp.path().to_path_buf())));
        });
        assert_eq!(cfg.unwrap().file, ConfigFile::default());
        assert!(out.contains("WARN config:"));
        assert!(out.contains("config_unusable_using_defaults"));
    }

    #[test]
    fn unreadable_path_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = None;
        let out = capture(|| {
            cfg = Some(load_from(Some(dir.path().to_path_buf())));
        });
        let cfg = cfg.unwrap();
        assert_eq!(cfg.file, ConfigFile::default());
        assert!(cfg.source.is_none());
        assert!(out.contains("config_unusable_using_defaults"));
    }

    #[test]
    fn clamp_logging_uses_config_target() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            tmp.path(),
            "[editor]\nundo_limit = 0\n[layout]\nmin_content_width = 0\n",
        )
        .unwrap();
        let mut cfg = None;
        let out = capture(|| {
            cfg = Some(load_from(Some(tmp.path().to_path_buf())));
        });
        let cfg = cfg.unwrap();
        assert_eq!(cfg.file.editor.undo_limit, 1);
        assert_eq!(cfg.file.layout.min_content_width, 1);
        assert!(out.contains("INFO config:"));
        assert!(out.contains("undo_limit_clamped"));
        assert!(out.contains("min_content_width_clamped"));
    }

    #[test]
    fn normalize_is_noop_on_defaults() {
        let mut cfg = Config::default();
        assert!(!cfg.normalize());
    }
}
