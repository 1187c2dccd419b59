// ABOUTME: Structured command lines passed to the process runner.
// ABOUTME: Arguments are never joined into a shell string; secrets are redacted on display.

use nonempty::NonEmpty;
use std::fmt;

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stdio {
    /// Pipe stdout and stderr back to the caller.
    #[default]
    Capture,
    /// Share the operator's terminal (progress output, interactive login).
    Inherit,
}

/// A program plus its arguments.
///
/// The argument vector is non-empty by construction, so a zero-length
/// command cannot be expressed.
#[derive(Clone, PartialEq, Eq)]
pub struct CommandLine {
    argv: NonEmpty<String>,
    secret: Vec<usize>,
    stdio: Stdio,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            argv: NonEmpty::new(program.into()),
            secret: Vec::new(),
            stdio: Stdio::Capture,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.argv.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for arg in args {
            self.argv.push(arg.into());
        }
        self
    }

    /// Append an argument that must never appear in logs or error messages.
    pub fn secret_arg(mut self, arg: impl Into<String>) -> Self {
        self.secret.push(self.argv.len());
        self.argv.push(arg.into());
        self
    }

    pub fn inherit_stdio(mut self) -> Self {
        self.stdio = Stdio::Inherit;
        self
    }

    pub fn program(&self) -> &str {
        self.argv.first()
    }

    pub fn arguments(&self) -> &[String] {
        &self.argv.tail
    }

    pub fn stdio(&self) -> Stdio {
        self.stdio
    }

    /// Whether the command line starts with the given words.
    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        prefix.len() <= self.argv.len() && self.argv.iter().zip(prefix).all(|(a, p)| a == p)
    }

    /// Value following `flag`, if the flag is present.
    pub fn flag_value(&self, flag: &str) -> Option<&str> {
        let args = self.arguments();
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .map(String::as_str)
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.argv.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if self.secret.contains(&i) {
                f.write_str("****")?;
            } else {
                f.write_str(word)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandLine")
            .field("argv", &self.to_string())
            .field("stdio", &self.stdio)
            .finish()
    }
}
