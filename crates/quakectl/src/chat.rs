//! Interactive advisory session and one-shot queries.
//!
//! Transcript discipline: the user message is appended before dispatch,
//! the assistant message after the result resolves, so the session
//! follows completion order.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use quake_common::catalog::{protocol, render};
use quake_common::dispatcher::{AdvisoryDispatcher, DispatchResult, Origin};
use quake_common::{AdvisoryConfig, ConversationSession, Role, CATEGORY_ORDER};

/// Build the dispatcher from on-disk configuration
fn dispatcher() -> Result<AdvisoryDispatcher> {
    let config = AdvisoryConfig::load()?;
    AdvisoryDispatcher::from_config(&config)
}

fn triage_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("TRIAGE_SYNTHESIS...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Render a dispatch result: colored origin marker, plain body
fn print_result(result: &DispatchResult) {
    let mut lines = result.text.lines();
    if let Some(marker) = lines.next() {
        match result.origin {
            Origin::Remote => println!("{}", marker.bright_cyan().bold()),
            Origin::Offline => println!("{}", marker.yellow().bold()),
        }
    }
    for line in lines {
        println!("{line}");
    }
    println!();
}

/// One-shot query: dispatch, print, done
pub async fn ask(query: &str) -> Result<()> {
    let dispatcher = dispatcher()?;

    let spinner = triage_spinner();
    let result = dispatcher.handle(query).await;
    spinner.finish_and_clear();

    print_result(&result);
    Ok(())
}

/// Interactive session owning the conversation transcript
pub async fn run() -> Result<()> {
    let dispatcher = dispatcher()?;
    let mut session = ConversationSession::new();

    println!("{}", "QUAKELENS // TACTICAL_HUB_ACTIVE".bright_cyan().bold());
    println!("{}", "Describe the emergency. Ctrl-D ends the session.".dimmed());
    println!();

    let stdin = io::stdin();
    loop {
        print!("{} ", "you>".bright_white().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        session.push(Role::User, query);

        let spinner = triage_spinner();
        let result = dispatcher.handle(query).await;
        spinner.finish_and_clear();

        print_result(&result);
        session.push(Role::Assistant, result.text);
    }

    println!();
    println!(
        "{} {} messages logged",
        "session closed:".dimmed(),
        session.len()
    );
    Ok(())
}

/// Dump the entire offline catalog, category by category
pub fn print_protocols() {
    for category in CATEGORY_ORDER {
        println!(
            "{}",
            format!("[{}]", category.label()).bright_cyan().bold()
        );
        for line in render(protocol(*category)).lines() {
            println!("  {line}");
        }
        println!();
    }
}
