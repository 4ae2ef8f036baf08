use std::io::{self, BufRead, Write};

use festpal::Responder;
use tracing::info;

pub const GOODBYE: &str = "Sampai jumpa! 🎶";

fn is_exit_command(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "exit" | "bye")
}

/// Interactive loop over `input`, writing the conversation to `out`.
///
/// Returns the number of messages answered.
pub fn run<R: BufRead, W: Write>(bot: &Responder, mut input: R, out: &mut W) -> io::Result<usize> {
    writeln!(out, "{} Bot CLI - Ketik 'quit' untuk keluar\n", bot.bot_name())?;
    info!(bot = bot.bot_name(), "REPL session started");

    let mut answered = 0;
    let mut line = String::new();
    loop {
        write!(out, "You: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "\n\nBot: {GOODBYE}")?;
            info!(answered, "REPL session ended at end of input");
            return Ok(answered);
        }

        let message = line.trim();
        if is_exit_command(message) {
            writeln!(out, "Bot: {GOODBYE}")?;
            info!(answered, "REPL session ended by user");
            return Ok(answered);
        }
        if message.is_empty() {
            continue;
        }

        info!(query = message, "user query");
        let reply = bot.reply(message);
        writeln!(out, "Bot: {reply}\n")?;
        answered += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> (String, usize) {
        let bot = Responder::new().unwrap();
        let mut out = Vec::new();
        let answered = run(&bot, Cursor::new(script), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), answered)
    }

    #[test]
    fn answers_until_quit() {
        let (out, answered) = session("halo\nharga tiket\nquit\nlineup\n");
        assert_eq!(answered, 2);
        assert!(out.starts_with("FestPal Bot CLI - Ketik 'quit' untuk keluar\n"));
        assert!(out.contains("You: Bot: Halo! Saya FestPal"));
        assert!(out.contains("Rp350.000"));
        assert!(out.trim_end().ends_with(&format!("Bot: {GOODBYE}")));
        assert!(!out.contains("Lineup acara"));
    }

    #[test]
    fn exit_words_ignore_case() {
        for word in ["QUIT", "Exit", "bye", "  bye  "] {
            let (out, answered) = session(&format!("{word}\n"));
            assert_eq!(answered, 0, "word {word:?}");
            assert!(out.contains(GOODBYE));
        }
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (out, answered) = session("\n   \nhalo\n");
        assert_eq!(answered, 1);
        assert!(!out.contains("tidak mengerti"));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let (out, answered) = session("qwertyuiop");
        assert_eq!(answered, 1);
        assert!(out.contains("tidak mengerti"));
        assert!(out.trim_end().ends_with(GOODBYE));
    }
}
