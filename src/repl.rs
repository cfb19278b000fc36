//! Interactive terminal surface
//!
//! A bare line is a prompt submission; lines starting with `/` are commands.
//! Requests run one at a time: the next line is read only after the current
//! submission resolves, so submissions can never overlap.

use std::io::{self, Write};

use tracing::warn;

use crate::core::{HistoryRecord, IdMatch, Session, SessionError};
use crate::providers::ChatProvider;

const FAILURE_NOTICE: &str =
    "Request failed. Check your API key and network connection, then try again.";

/// One line of user input, classified.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Prompt(&'a str),
    History,
    Search(&'a str),
    Delete(&'a str),
    Clear,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Input<'_> {
    let line = line.trim();
    if !line.starts_with('/') {
        return Input::Prompt(line);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "/history" => Input::History,
        "/search" => Input::Search(rest),
        "/delete" => Input::Delete(rest),
        "/clear" => Input::Clear,
        "/help" => Input::Help,
        "/quit" | "/exit" => Input::Quit,
        other => Input::Unknown(other),
    }
}

fn print_help() {
    println!("Type a prompt and press Enter to submit it.");
    println!();
    println!("Commands:");
    println!("  /history          show all records");
    println!("  /search <query>   show records matching the query");
    println!("  /delete <id>      delete a record by id or id prefix");
    println!("  /clear            delete all records");
    println!("  /help             show this help");
    println!("  /quit             exit");
}

fn print_records<'a>(records: impl Iterator<Item = &'a HistoryRecord>) {
    let mut any = false;
    for record in records {
        any = true;
        let short_id = &record.id.to_string()[..8];
        println!(
            "[{}] {}  You: {}",
            short_id,
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.prompt
        );
        println!("           AI: {}", record.response);
        println!();
    }
    if !any {
        println!("(no records)");
    }
}

/// Run the interactive loop until `/quit` or end of input.
pub async fn run<P: ChatProvider>(session: &mut Session<P>) -> anyhow::Result<()> {
    println!("quill - AI writing assistant. Type /help for commands.");

    let stdin = io::stdin();
    loop {
        print!("quill> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        match parse_line(&line) {
            Input::Prompt(prompt) => {
                if prompt.is_empty() {
                    continue;
                }
                println!("Generating...");
                match session.submit(prompt).await {
                    Ok(Some(record)) => {
                        println!();
                        println!("{}", record.response);
                        println!();
                    }
                    Ok(None) => {}
                    Err(SessionError::Provider(e)) => {
                        warn!(error = %e, "chat completion failed");
                        println!("{}", FAILURE_NOTICE);
                    }
                    Err(SessionError::Store(e)) => {
                        // The response made it into memory; only the write
                        // failed.
                        warn!(error = %e, "failed to persist history");
                        if let Some(record) = session.history().iter().next() {
                            println!();
                            println!("{}", record.response);
                            println!();
                        }
                        println!("Warning: saving history failed; this record lives in memory only.");
                    }
                }
            }
            Input::History => print_records(session.history().iter()),
            Input::Search(query) => print_records(session.search(query)),
            Input::Delete(prefix) => {
                if prefix.is_empty() {
                    println!("Usage: /delete <id>");
                    continue;
                }
                match session.resolve_id(prefix) {
                    IdMatch::One(id) => match session.delete(id).await {
                        Ok(_) => println!("Deleted."),
                        Err(e) => {
                            warn!(error = %e, "delete failed");
                            println!("Warning: saving history failed; the deletion may not stick.");
                        }
                    },
                    IdMatch::None => println!("No record matches '{}'.", prefix),
                    IdMatch::Ambiguous => {
                        println!("More than one record matches '{}'; use a longer prefix.", prefix)
                    }
                }
            }
            Input::Clear => match session.clear().await {
                Ok(()) => println!("History cleared."),
                Err(e) => {
                    warn!(error = %e, "clear failed");
                    println!("Warning: saving history failed; the clear may not stick.");
                }
            },
            Input::Help => print_help(),
            Input::Quit => break,
            Input::Unknown(command) => {
                println!("Unknown command '{}'. Type /help for commands.", command)
            }
        }
    }

    Ok(())
}
