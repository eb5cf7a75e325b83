//! Line-oriented input scripts for driving the editor headlessly.
//!
//! One command per line; blank lines and `#` comments are skipped.
//!
//! ```text
//! type hello world
//! shift+ctrl+left
//! click 40 10
//! click 40 10 150     # explicit timestamp in ms
//! drag 90 30
//! release
//! wheel -1
//! ```
//!
//! Clicks without a timestamp are spaced one second after the previous
//! click so they never combine into a multi-click.

use core_actions::{Command, Modifiers, Motion};
use thiserror::Error;

const CLICK_SPACING_MS: u64 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("script line {line}: {message}")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

pub fn parse_script(src: &str) -> Result<Vec<Command>, ScriptError> {
    let mut clock = 0u64;
    let mut out = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let line = idx + 1;
        // `type` keeps its payload verbatim, comments included.
        let trimmed = raw.trim_start();
        if let Some(text) = trimmed.strip_prefix("type ") {
            out.push(Command::InsertText(text.to_string()));
            continue;
        }
        let body = raw.split('#').next().unwrap_or_default().trim();
        if body.is_empty() {
            continue;
        }
        let cmd = parse_line(body, &mut clock).map_err(|message| ScriptError { line, message })?;
        out.push(cmd);
    }
    Ok(out)
}

fn parse_line(body: &str, clock: &mut u64) -> Result<Command, String> {
    let mut words = body.split_whitespace();
    let head = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();
    let cmd = match head {
        "newline" => Command::Newline,
        "tab" => Command::Tab,
        "select-all" => Command::SelectAll,
        "copy" => Command::Copy,
        "cut" => Command::Cut,
        "paste" => Command::Paste,
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "release" => Command::MouseRelease,
        "pageup" => Command::PageUp,
        "pagedown" => Command::PageDown,
        "escape" => Command::Escape,
        "blur" => Command::Blur,
        "focus" => Command::Focus,
        "delete-range" => {
            let [start, end] = numbers::<usize, 2>(&args)?;
            Command::DeleteRange { start, end }
        }
        "wheel" => {
            let [delta] = numbers::<i32, 1>(&args)?;
            Command::Wheel { delta }
        }
        "drag" => {
            let [x, y] = numbers::<i32, 2>(&args)?;
            Command::MouseDrag { x, y }
        }
        "click" | "shift+click" => {
            let (x, y, time_ms) = match args.len() {
                2 => {
                    let [x, y] = numbers::<i32, 2>(&args)?;
                    (x, y, *clock + CLICK_SPACING_MS)
                }
                3 => {
                    let [x, y] = numbers::<i32, 2>(&args[..2])?;
                    let [t] = numbers::<u64, 1>(&args[2..])?;
                    (x, y, t)
                }
                n => return Err(format!("click takes 2 or 3 arguments, got {n}")),
            };
            *clock = time_ms;
            let mods = if head == "shift+click" {
                Modifiers::SHIFT
            } else {
                Modifiers::empty()
            };
            Command::MousePress {
                x,
                y,
                time_ms,
                mods,
            }
        }
        chord => {
            if !args.is_empty() {
                return Err(format!("`{chord}` takes no arguments"));
            }
            parse_chord(chord)?
        }
    };
    Ok(cmd)
}

/// `[ctrl+][shift+]key` in any modifier order.
fn parse_chord(chord: &str) -> Result<Command, String> {
    let mut mods = Modifiers::empty();
    let mut key = chord;
    loop {
        if let Some(rest) = key.strip_prefix("ctrl+") {
            mods |= Modifiers::CTRL;
            key = rest;
        } else if let Some(rest) = key.strip_prefix("shift+") {
            mods |= Modifiers::SHIFT;
            key = rest;
        } else {
            break;
        }
    }
    let motion = match key {
        "left" => Motion::Left,
        "right" => Motion::Right,
        "up" => Motion::Up,
        "down" => Motion::Down,
        "home" => Motion::Home,
        "end" => Motion::End,
        "backspace" if !mods.shift() => return Ok(Command::Backspace { word: mods.ctrl() }),
        "delete" if !mods.shift() => {
            return Ok(Command::DeleteForward { word: mods.ctrl() });
        }
        _ => return Err(format!("unknown command `{chord}`")),
    };
    Ok(Command::Move { motion, mods })
}

fn numbers<T: std::str::FromStr, const N: usize>(args: &[&str]) -> Result<[T; N], String> {
    if args.len() != N {
        return Err(format!("expected {N} numeric arguments, got {}", args.len()));
    }
    let parsed: Vec<T> = args
        .iter()
        .map(|a| a.parse::<T>().map_err(|_| format!("invalid number `{a}`")))
        .collect::<Result<_, _>>()?;
    parsed
        .try_into()
        .map_err(|_| format!("expected {N} numeric arguments"))
}
