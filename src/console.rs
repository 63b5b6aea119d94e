//! Interactive console loop
//!
//! Reads one line per turn and answers with `Chatbot: <reply>`. Exit words end
//! the loop with a farewell; end of input ends it quietly.

use crate::chatbot::TriageBot;
use crate::nlp::{PosTagger, SentimentScorer};
use crate::tables::{FAREWELL, WELCOME_LINES, is_exit_word};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "You: ";

/// Run the conversation over arbitrary reader/writer pairs
pub fn run_console<T, S, R, W>(bot: &TriageBot<T, S>, mut input: R, mut output: W) -> io::Result<()>
where
    T: PosTagger,
    S: SentimentScorer,
    R: BufRead,
    W: Write,
{
    for line in WELCOME_LINES {
        writeln!(output, "{line}")?;
    }

    let mut turns = 0usize;
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!(turns, "console input closed");
            writeln!(output)?;
            return Ok(());
        }

        let message = line.trim_end_matches(['\r', '\n']);
        if is_exit_word(message) {
            writeln!(output, "{FAREWELL}")?;
            tracing::debug!(turns, "console session ended");
            return Ok(());
        }

        writeln!(output, "Chatbot: {}", bot.full_reply(message))?;
        turns += 1;
    }
}

/// Run the conversation on the process's stdin/stdout
pub fn run_stdio<T: PosTagger, S: SentimentScorer>(bot: &TriageBot<T, S>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(bot, stdin.lock(), stdout.lock())
}
