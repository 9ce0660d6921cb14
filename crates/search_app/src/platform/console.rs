//! Line-oriented stand-in for the search bar, suggestion list and web view.
//!
//! Each input line is one UI event. Outputs are rendered after every event,
//! once any fetch it started has settled or `settle` has elapsed.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use search_engine::SuggestionClient;

use crate::{SearchCoordinator, SearchOutput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The search field now contains this text.
    Type(String),
    Submit(String),
    /// 1-based row in the last rendered suggestion list.
    Pick(usize),
    Clear,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Type(line.to_string());
    };
    let (name, arg) = match rest.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest.trim(), ""),
    };
    match name {
        "go" => Command::Submit(arg.to_string()),
        "pick" => arg
            .parse()
            .map(Command::Pick)
            .unwrap_or_else(|_| Command::Unknown(line.to_string())),
        "clear" => Command::Clear,
        "quit" | "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

pub fn run<C, R, W>(
    coordinator: &mut SearchCoordinator<C, Vec<SearchOutput>>,
    input: R,
    mut output: W,
    settle: Duration,
) -> io::Result<()>
where
    C: SuggestionClient,
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "Type to search. :go <text> submits, :pick <n> opens a suggestion, :clear empties the field, :quit exits."
    )?;

    let mut shown: Vec<String> = Vec::new();
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Type(text) => {
                let fetching = !text.is_empty();
                coordinator.on_text_changed(text);
                if fetching {
                    coordinator.wait_until_settled(settle);
                }
            }
            Command::Submit(text) => coordinator.on_submit(text),
            Command::Pick(row) => match row.checked_sub(1).and_then(|index| shown.get(index)) {
                Some(text) => coordinator.on_suggestion_row_selected(text.clone()),
                None => writeln!(output, "no suggestion #{row}")?,
            },
            Command::Clear => coordinator.on_text_changed(String::new()),
            Command::Quit => break,
            Command::Unknown(line) => writeln!(output, "unknown command: {line}")?,
        }

        let outputs: Vec<SearchOutput> = coordinator.sink_mut().drain(..).collect();
        render(&mut output, outputs, &mut shown)?;
    }
    Ok(())
}

fn render<W: Write>(
    output: &mut W,
    outputs: Vec<SearchOutput>,
    shown: &mut Vec<String>,
) -> io::Result<()> {
    for item in outputs {
        match item {
            SearchOutput::Error(message) => writeln!(output, "error: {message}")?,
            SearchOutput::SuggestionsUpdated(suggestions) => {
                for (index, suggestion) in suggestions.iter().enumerate() {
                    writeln!(output, "  {}. {}", index + 1, suggestion)?;
                }
                *shown = suggestions;
            }
            SearchOutput::SuggestionPanelVisibility(false) => {
                writeln!(output, "(suggestions hidden)")?;
            }
            SearchOutput::SuggestionPanelVisibility(true) => {}
            SearchOutput::SearchFieldTextSet(text) => writeln!(output, "search: {text}")?,
            SearchOutput::Navigate(url) => writeln!(output, "open {url}")?,
        }
    }
    output.flush()
}
