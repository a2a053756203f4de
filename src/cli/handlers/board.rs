use crate::cli::commands::FilterArgs;
use crate::filter::{FilterCriteria, group_by_status, visible};
use anyhow::Result;
use serde_json::json;

use super::CommandContext;
use super::utils::print_board;

pub fn handle_board(ctx: &CommandContext, filter: FilterArgs, json: bool) -> Result<()> {
    let criteria = FilterCriteria::from(filter);
    let items = visible(ctx.roadmap.items(), &criteria);
    let board = group_by_status(items.iter().copied());

    if json {
        let columns: Vec<_> = board
            .columns()
            .map(|(status, bucket)| {
                json!({
                    "status": status,
                    "label": status.label(),
                    "count": bucket.len(),
                    "items": bucket,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&columns)?);
    } else {
        print_board(&board);
    }
    Ok(())
}
