// ABOUTME: Operator interaction port: yes/no confirmations and free-text prompts.
// ABOUTME: The terminal implementation writes the prompt and blocks on one line of stdin.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};
use tokio::sync::Mutex;

use crate::error::Result;
use crate::output::Output;

/// The single answer accepted as "yes".
pub const AFFIRMATIVE: &str = "y";

/// Whether an answer is affirmative. Anything else, including an empty line,
/// is a "no".
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(AFFIRMATIVE)
}

/// Blocking operator input.
#[async_trait]
pub trait Interaction: Send + Sync {
    /// Show `prompt` and return the line the operator typed, without the
    /// trailing newline.
    async fn prompt(&self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question. One read, one decision.
    async fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{prompt} ({AFFIRMATIVE}/n): ")).await?;
        Ok(is_affirmative(&answer))
    }
}

/// Reads answers from the controlling terminal.
///
/// One buffered reader lives for the whole run so piped answers are not
/// lost between prompts.
pub struct TerminalInteraction {
    output: Output,
    stdin: Mutex<BufReader<Stdin>>,
}

impl TerminalInteraction {
    pub fn new(output: Output) -> Self {
        Self {
            output,
            stdin: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }
}

#[async_trait]
impl Interaction for TerminalInteraction {
    async fn prompt(&self, prompt: &str) -> Result<String> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(self.output.question(prompt).as_bytes()).await?;
        stdout.flush().await?;

        // EOF reads as an empty answer.
        let mut line = String::new();
        self.stdin.lock().await.read_line(&mut line).await?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
