// SPDX-License-Identifier: MPL-2.0
//! Command-line driver: argument parsing and event script replay.
//!
//! The script format is one event per line:
//!
//! ```text
//! click 1          # thumbnail clicked
//! focus 0          # thumbnail focused
//! key ArrowRight   # key pressed (DOM key name)
//! touch-start 300
//! touch-end 220
//! backdrop         # overlay background clicked
//! close            # close control clicked
//! blur             # focus left the thumbnails
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use crate::config::{self, Config};
use crate::infrastructure::render::RecordingOverlay;
use crate::ui::lightbox::{Key, Lightbox, Message};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const HELP: &str = "\
folio_lens - replay lightbox events against a portfolio page

USAGE:
    folio_lens [OPTIONS] <PAGE.html>
    folio_lens [--config <PATH> | --config-dir <DIR>] --write-default-config

OPTIONS:
    --config <PATH>       Load settings from this file
    --config-dir <DIR>    Look for settings.toml in this directory
    --script <PATH>       Read events from a file instead of stdin
    --create-overlay      Assume the overlay is created by script
    --write-default-config
                          Write a settings file with the defaults and exit
    -h, --help            Print this help
";

/// Parsed command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub config: Option<String>,
    pub config_dir: Option<String>,
    pub script: Option<String>,
    pub create_overlay: bool,
    pub write_default_config: bool,
    pub help: bool,
    pub page: Option<String>,
}

impl Flags {
    /// Parses flags from `pico_args`.
    ///
    /// # Errors
    ///
    /// Returns an error if an option value is missing or an argument is unknown.
    pub fn parse(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        let flags = Flags {
            help: args.contains(["-h", "--help"]),
            create_overlay: args.contains("--create-overlay"),
            write_default_config: args.contains("--write-default-config"),
            config: args.opt_value_from_str("--config")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
            script: args.opt_value_from_str("--script")?,
            page: args.opt_free_from_str()?,
        };

        let remaining = args.finish();
        if let Some(extra) = remaining.first() {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unexpected argument: {}", extra.to_string_lossy()),
            });
        }
        Ok(flags)
    }
}

/// Writes a settings file holding the default configuration.
///
/// The target is `--config` when given, otherwise `settings.toml` in the
/// directory resolved from `--config-dir`. Returns the path written.
///
/// # Errors
///
/// Returns an error if no config directory can be determined or the file
/// cannot be written.
pub fn write_default_config(flags: &Flags) -> crate::error::Result<PathBuf> {
    let defaults = Config::default();
    match &flags.config {
        Some(path) => {
            let path = PathBuf::from(path);
            config::save_to_path(&defaults, &path)?;
            Ok(path)
        }
        None => {
            config::save_with_override(&defaults, flags.config_dir.as_ref().map(PathBuf::from))
        }
    }
}

/// Error for a script line that cannot be turned into an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptError {}

/// Parses one script line. Returns `Ok(None)` for blanks and comments.
///
/// # Errors
///
/// Returns a message describing why the line is not a valid event.
pub fn parse_event(line: &str) -> Result<Option<Message>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let argument = parts.next();

    let message = match command {
        "click" => Message::ThumbnailClicked(parse_index(argument)?),
        "focus" => Message::ThumbnailFocused(parse_index(argument)?),
        "blur" => Message::FocusLeft,
        "key" => {
            let name = argument.ok_or_else(|| "key needs a key name".to_string())?;
            Message::KeyPressed(Key::from_name(name))
        }
        "touch-start" => Message::TouchStarted {
            x: parse_coordinate(argument)?,
        },
        "touch-end" => Message::TouchEnded {
            x: parse_coordinate(argument)?,
        },
        "backdrop" => Message::BackdropClicked,
        "close" => Message::CloseClicked,
        other => return Err(format!("unknown event '{other}'")),
    };
    Ok(Some(message))
}

/// One-line description of the overlay, e.g. `open 2/3 b.jpg "Lab"`.
#[must_use]
pub fn describe(lightbox: &Lightbox<RecordingOverlay>) -> String {
    let navigator = lightbox.navigator();
    match (navigator.current_index(), navigator.current_entry()) {
        (Some(index), Some(entry)) => format!(
            "open {}/{} {} {:?}",
            index + 1,
            navigator.len(),
            entry.source_url(),
            navigator.renderer().caption()
        ),
        _ => "closed".to_string(),
    }
}

/// Replays every event from `input`, writing the overlay state after each.
///
/// Invalid lines and out-of-range thumbnails are reported on `output` and
/// skipped. Returns the number of events dispatched.
///
/// # Errors
///
/// Returns an I/O error if reading the script or writing the report fails.
pub fn run_script<R: BufRead, W: Write>(
    lightbox: &mut Lightbox<RecordingOverlay>,
    input: R,
    mut output: W,
) -> io::Result<usize> {
    let mut dispatched = 0;
    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let message = match parse_event(&line) {
            Ok(Some(message)) => message,
            Ok(None) => continue,
            Err(message) => {
                let err = ScriptError {
                    line: number + 1,
                    message,
                };
                tracing::warn!(%err, "skipping script line");
                writeln!(output, "error: {err}")?;
                continue;
            }
        };

        match lightbox.dispatch(message) {
            Ok(_) => {
                dispatched += 1;
                writeln!(output, "{}", describe(lightbox))?;
            }
            Err(err) => {
                tracing::warn!(line = number + 1, %err, "event rejected");
                writeln!(output, "error: line {}: {err}", number + 1)?;
            }
        }
    }
    Ok(dispatched)
}

fn parse_index(argument: Option<&str>) -> Result<usize, String> {
    let raw = argument.ok_or_else(|| "missing thumbnail index".to_string())?;
    raw.parse()
        .map_err(|_| format!("'{raw}' is not a thumbnail index"))
}

fn parse_coordinate(argument: Option<&str>) -> Result<f32, String> {
    let raw = argument.ok_or_else(|| "missing x coordinate".to_string())?;
    raw.parse::<f32>()
        .ok()
        .filter(|x| x.is_finite())
        .ok_or_else(|| format!("'{raw}' is not a coordinate"))
}
