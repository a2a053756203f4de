use crate::filter::available_dates;
use anyhow::Result;

use super::CommandContext;

pub fn handle_dates(ctx: &CommandContext, json: bool) -> Result<()> {
    let dates = available_dates(ctx.roadmap.items());

    if json {
        println!("{}", serde_json::to_string_pretty(&dates)?);
    } else if dates.is_empty() {
        println!("No dates found.");
    } else {
        for date in dates {
            println!("{}", date);
        }
    }
    Ok(())
}
