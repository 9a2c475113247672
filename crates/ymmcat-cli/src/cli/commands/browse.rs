//! `ymmcat browse` – interactive session over stdin.
//!
//! Plain lines are search input and go through the session's debouncer, so a
//! burst of pasted lines only triggers one re-render for the last of them.

use anyhow::{Context, Result};
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use ymmcat_core::config::CatalogConfig;
use ymmcat_core::viewer::render::text;
use ymmcat_core::viewer::{Session, SortOrder};

use super::open_session;

const HELP: &str = "\
text            search (debounced)
:cat <id>       category filter (all, video-effect, audio-effect, voice-synthesis,
                shape, text, video-output, utility, other)
:sort <order>   name-asc | name-desc | stars-desc | updated-desc | updated-asc
:clear          clear the search
:reset          default search, category and sort
:open <id>      detail view
:close          back to the grid
:quit           exit";

/// One parsed line of browse input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowseInput {
    Search(String),
    Category(String),
    Sort(SortOrder),
    Clear,
    Reset,
    Open(String),
    Close,
    Help,
    Quit,
    Invalid(String),
}

pub(crate) fn parse_line(line: &str) -> BrowseInput {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return BrowseInput::Search(trimmed.to_string());
    };
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    match (name, arg) {
        ("cat" | "category", id) if !id.is_empty() => BrowseInput::Category(id.to_string()),
        ("sort", order) => match order.parse::<SortOrder>() {
            Ok(sort) => BrowseInput::Sort(sort),
            Err(e) => BrowseInput::Invalid(e.to_string()),
        },
        ("clear", _) => BrowseInput::Clear,
        ("reset", _) => BrowseInput::Reset,
        ("open", id) if !id.is_empty() => BrowseInput::Open(id.to_string()),
        ("close", _) => BrowseInput::Close,
        ("help" | "h", _) => BrowseInput::Help,
        ("quit" | "q" | "exit", _) => BrowseInput::Quit,
        _ => BrowseInput::Invalid(format!("unknown command: {trimmed} (try :help)")),
    }
}

fn print_grid(session: &Session) {
    if let Some(message) = session.results_message() {
        println!("{message}");
    }
    let visible = session.visible();
    if visible.is_empty() {
        println!("該当するプラグインが見つかりませんでした");
    } else {
        print!("{}", text::render_table(&visible));
    }
}

/// Applies one input; returns false when the session should end.
fn handle_input(session: &mut Session, input: BrowseInput) -> bool {
    let rerendered = match input {
        BrowseInput::Search(term) => {
            session.input_search(&term, Instant::now());
            false
        }
        BrowseInput::Category(id) => session.set_category(&id),
        BrowseInput::Sort(sort) => session.set_sort(sort),
        BrowseInput::Clear => session.clear_search(),
        BrowseInput::Reset => session.reset(),
        BrowseInput::Open(id) => {
            match session.select(&id) {
                Some(plugin) => print!("{}", text::render_detail(plugin)),
                None => println!("no plugin with id {id}"),
            }
            false
        }
        BrowseInput::Close => {
            session.close_detail();
            print_grid(session);
            false
        }
        BrowseInput::Help => {
            println!("{HELP}");
            false
        }
        BrowseInput::Quit => return false,
        BrowseInput::Invalid(message) => {
            println!("{message}");
            false
        }
    };
    if rerendered {
        print_grid(session);
    }
    true
}

pub async fn run_browse(cfg: &CatalogConfig, data: Option<&str>) -> Result<()> {
    let mut session = open_session(cfg, data).await?;
    print_grid(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let deadline = session.search_deadline();
        let sleep_until = deadline
            .map(tokio::time::Instant::from_std)
            .unwrap_or_else(tokio::time::Instant::now);

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("read stdin")? else {
                    break;
                };
                if !handle_input(&mut session, parse_line(&line)) {
                    break;
                }
            }
            _ = tokio::time::sleep_until(sleep_until), if deadline.is_some() => {
                if session.poll(Instant::now()) {
                    print_grid(&session);
                }
            }
        }
    }
    Ok(())
}
