//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskcard_core` linkage.
//! - Print card text deterministically for quick local sanity checks.

use std::process::ExitCode;
use taskcard_core::{TaskListState, TaskTemplate};

fn main() -> ExitCode {
    println!("taskcard_core version={}", taskcard_core::core_version());

    let mut screen = TaskListState::mount(TaskTemplate::default());
    let first = screen.add_from_template();
    screen.add_from_template();
    screen.toggle_expanded(first);

    let cards = match screen.cards() {
        Ok(cards) => cards,
        Err(err) => {
            eprintln!("taskcard_cli render failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    for card in cards {
        println!("[{}] {}", card.toggle_label, card.title);
        for line in card.summary_lines.iter().chain(card.detail_lines.iter()) {
            println!("    {line}");
        }
    }

    screen.unmount();
    ExitCode::SUCCESS
}
