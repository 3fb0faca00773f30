//! Line-oriented bridge standing in for the overlay's message channel.
//!
//! Lines starting with `{` or `"` are host messages; anything else is a
//! reader input such as `next`, `jump crime` or `open 3`.

use std::{
    io::{self, BufRead},
    thread,
};

use crossbeam_channel::Sender;
use serde_json::Value;
use shared::{
    domain::Category,
    protocol::{decode_message, decode_text},
};
use tracing::warn;

use crate::controller::events::UiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeLine {
    Event(UiEvent),
    Quit,
    Blank,
}

pub fn parse_line(line: &str) -> Result<BridgeLine, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(BridgeLine::Blank);
    }

    if line.starts_with('{') || line.starts_with('"') {
        let decoded = match serde_json::from_str::<Value>(line) {
            Ok(value) => decode_message(&value),
            Err(_) => decode_text(line),
        };
        return Ok(BridgeLine::Event(UiEvent::Host(decoded)));
    }

    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default().to_ascii_lowercase();
    let argument = words.next();
    let event = match (command.as_str(), argument) {
        ("next", None) => UiEvent::NextPage,
        ("prev", None) => UiEvent::PrevPage,
        ("home", None) => UiEvent::Home,
        ("close", None) => UiEvent::CloseModal,
        ("backdrop", None) => UiEvent::BackdropClick,
        ("escape" | "esc", None) => UiEvent::Escape,
        ("quit" | "exit", None) => return Ok(BridgeLine::Quit),
        ("jump", Some(key)) => match Category::from_key(key) {
            Some(category) => UiEvent::SelectCategory(category),
            None => return Err(format!("unknown category '{key}'")),
        },
        ("open", Some(index)) => match index.parse::<usize>() {
            Ok(index) => UiEvent::OpenArticle(index),
            Err(_) => return Err(format!("invalid article index '{index}'")),
        },
        _ => return Err(format!("unrecognized input '{line}'")),
    };
    Ok(BridgeLine::Event(event))
}

/// Reads stdin on its own thread and forwards events until EOF or `quit`.
pub fn spawn_stdin_reader(tx: Sender<UiEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!(error = %err, "stdin read failed");
                    break;
                }
            };
            match parse_line(&line) {
                Ok(BridgeLine::Event(event)) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Ok(BridgeLine::Quit) => break,
                Ok(BridgeLine::Blank) => {}
                Err(reason) => warn!(%reason, "skipping input line"),
            }
        }
    })
}
