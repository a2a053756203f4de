use crate::filter::StatusBoard;
use crate::model::{RoadmapItem, Status};
use crate::suggest::PendingCandidate;
use colored::Colorize;

/// Tags shown per row in the list view.
const LIST_TAG_LIMIT: usize = 3;

/// Tags shown per card on the board.
const CARD_TAG_LIMIT: usize = 2;

/// Format status with color coding
pub fn format_status(status: Status) -> colored::ColoredString {
    match status {
        Status::Planned => status.label().blue(),
        Status::InProgress => status.label().yellow(),
        Status::Released => status.label().green(),
        Status::Backlog => status.label().dimmed(),
    }
}

/// Format a progress percentage, highlighting finished work
pub fn format_progress(progress: u8) -> colored::ColoredString {
    let text = format!("{:>3}%", progress);
    match progress {
        100 => text.green(),
        0 => text.dimmed(),
        _ => text.normal(),
    }
}

fn format_tags(tags: &[String], limit: usize) -> String {
    tags.iter()
        .take(limit)
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print items as a table
pub fn print_item_list(items: &[&RoadmapItem]) {
    if items.is_empty() {
        println!("No items match your filters.");
        return;
    }

    for item in items {
        println!(
            "{} {} {:<14} [{}] {} {}",
            item.id.cyan(),
            format_status(item.status),
            item.date_label(),
            item.category.to_string().magenta(),
            item.title.bold(),
            format_progress(item.progress),
        );
        if !item.tags.is_empty() {
            println!("    {}", format_tags(&item.tags, LIST_TAG_LIMIT).yellow());
        }
    }
}

/// Print the four status columns one after another
pub fn print_board(board: &StatusBoard<'_>) {
    for (index, (status, bucket)) in board.columns().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{} ({})", format_status(status).bold(), bucket.len());
        if bucket.is_empty() {
            println!("  {}", "No items yet".dimmed());
            continue;
        }
        for item in bucket {
            println!(
                "  {} {} [{}] {}",
                item.id.cyan(),
                item.title.bold(),
                item.category.to_string().magenta(),
                format_progress(item.progress),
            );
            if !item.tags.is_empty() {
                println!("    {}", format_tags(&item.tags, CARD_TAG_LIMIT).yellow());
            }
        }
    }
}

/// Print pending suggestions numbered from 1
pub fn print_candidates(pending: &[PendingCandidate]) {
    if pending.is_empty() {
        println!("No suggestions returned.");
        return;
    }

    for (index, entry) in pending.iter().enumerate() {
        let candidate = &entry.candidate;
        println!(
            "{} {} [{} / {}]",
            format!("{}.", index + 1).cyan(),
            candidate.title.bold(),
            candidate.category_label().magenta(),
            candidate.status_label().blue(),
        );
        println!("   {}", candidate.description);
    }
}
