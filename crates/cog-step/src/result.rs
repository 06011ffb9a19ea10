//! Step outcome protocol.
//!
//! A step reports back to the host runtime with a [`RunStepResult`]: a
//! tagged [`Outcome`] plus a printf-style message format and positional
//! args. The host renders and displays the message; keeping format and
//! args separate lets it also structure its reporting.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of one step invocation.
///
/// A failed validation is `Failed`; `Errored` is reserved for invocations
/// that could not run to a verdict at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    /// The step ran and its assertion held.
    Passed,
    /// The step ran and its assertion did not hold.
    Failed,
    /// The step could not produce a verdict.
    Errored,
}

/// Result record handed back to the host runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStepResult {
    /// Tagged outcome.
    pub outcome: Outcome,
    /// Message format with `%s` / `%d` placeholders.
    pub message_format: String,
    /// Positional args substituted into the format.
    pub message_args: Vec<Value>,
}

impl RunStepResult {
    fn new(outcome: Outcome, format: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            outcome,
            message_format: format.into(),
            message_args: args,
        }
    }

    /// A passing result.
    pub fn pass(format: impl Into<String>, args: Vec<Value>) -> Self {
        Self::new(Outcome::Passed, format, args)
    }

    /// A failing result (the assertion did not hold).
    pub fn fail(format: impl Into<String>, args: Vec<Value>) -> Self {
        Self::new(Outcome::Failed, format, args)
    }

    /// An error result (the step could not run to a verdict).
    pub fn error(format: impl Into<String>, args: Vec<Value>) -> Self {
        Self::new(Outcome::Errored, format, args)
    }

    /// Render the human-readable message.
    ///
    /// Each `%s` / `%d` consumes the next positional arg; `%%` renders a
    /// literal percent sign. Placeholders beyond the supplied args stay
    /// literal, and surplus args are appended space-separated.
    pub fn message(&self) -> String {
        let mut out = String::with_capacity(self.message_format.len());
        let mut args = self.message_args.iter();
        let mut chars = self.message_format.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                Some(&spec) if spec == 's' || spec == 'd' => match args.next() {
                    Some(arg) => {
                        chars.next();
                        out.push_str(&render_arg(arg, spec));
                    }
                    None => out.push('%'),
                },
                _ => out.push('%'),
            }
        }

        for arg in args {
            out.push(' ');
            out.push_str(&render_string(arg));
        }
        out
    }
}

impl fmt::Display for RunStepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

fn render_arg(arg: &Value, spec: char) -> String {
    match spec {
        'd' => render_number(arg),
        _ => render_string(arg),
    }
}

/// `%s` rendering: strings bare, everything else as compact JSON.
fn render_string(arg: &Value) -> String {
    match arg {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `%d` rendering: numbers and numeric strings pass through, anything
/// else renders as `NaN`.
fn render_number(arg: &Value) -> String {
    match arg {
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.trim().parse::<f64>().is_ok() => s.trim().to_string(),
        _ => "NaN".into(),
    }
}
