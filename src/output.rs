// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Timestamped, colored level lines in normal/quiet mode and JSON lines for scripting.

use chrono::{DateTime, Local};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Only successes, warnings, errors, and prompts
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Severity tag printed in front of each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
    Question,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Question => "?",
        }
    }
}

/// Render a line as `[HH:MM:SS] - [TAG] message`, without color.
pub fn format_line(level: Level, message: &str, at: DateTime<Local>) -> String {
    format!("[{}] - [{}] {}", at.format("%H:%M:%S"), level.tag(), message)
}

/// Handles CLI output based on the configured mode.
#[derive(Debug, Clone)]
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Start timing the run.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Print a progress message (suppressed in quiet mode).
    pub fn info(&self, message: &str) {
        if self.mode != OutputMode::Quiet {
            self.emit(Level::Info, message);
        }
    }

    pub fn success(&self, message: &str) {
        self.emit(Level::Success, message);
    }

    pub fn warning(&self, message: &str) {
        self.emit(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    /// Print tool output verbatim (e.g. a repository table).
    pub fn block(&self, text: &str) {
        match self.mode {
            OutputMode::Normal => println!("{}", text.trim_end()),
            OutputMode::Quiet => {}
            OutputMode::Json => self.emit(Level::Info, text.trim_end()),
        }
    }

    /// Render a question prompt; the caller writes it and reads the answer.
    ///
    /// In JSON mode the prompt is a complete `question` event line.
    pub fn question(&self, prompt: &str) -> String {
        let line = format_line(Level::Question, prompt, Local::now());
        match self.mode {
            OutputMode::Json => {
                let event = JsonEvent {
                    event: Level::Question,
                    message: prompt,
                    duration_secs: None,
                };
                match serde_json::to_string(&event) {
                    Ok(json) => format!("{json}\n"),
                    Err(_) => format!("{line}\n"),
                }
            }
            _ => line.yellow().to_string(),
        }
    }

    fn emit(&self, level: Level, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                let line = format_line(level, message, Local::now());
                match level {
                    Level::Info => println!("{}", line.cyan()),
                    Level::Success => match self.start_time {
                        Some(_) => println!("{} ({:.1}s)", line.green(), self.elapsed_secs()),
                        None => println!("{}", line.green()),
                    },
                    Level::Warning => eprintln!("{}", line.yellow()),
                    Level::Error => eprintln!("{}", line.red()),
                    Level::Question => println!("{}", line.yellow()),
                }
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: level,
                    message,
                    duration_secs: self.start_time.map(|_| self.elapsed_secs()),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    match level {
                        Level::Warning | Level::Error => eprintln!("{json}"),
                        _ => println!("{json}"),
                    }
                }
            }
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: Level,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn line_has_timestamp_and_tag() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 7, 3).unwrap();
        assert_eq!(
            format_line(Level::Success, "Image pushed", at),
            "[09:07:03] - [SUCCESS] Image pushed"
        );
    }

    #[test]
    fn json_event_uses_lowercase_level() {
        let event = JsonEvent {
            event: Level::Warning,
            message: "registry login failed",
            duration_secs: None,
        };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"event":"warning","message":"registry login failed"}"#
        );
    }

    #[test]
    fn json_question_is_an_event_line() {
        let output = Output::new(OutputMode::Json);
        let prompt = output.question("Continue? (y/n): ");
        assert_eq!(
            prompt,
            "{\"event\":\"question\",\"message\":\"Continue? (y/n): \"}\n"
        );
    }
}
