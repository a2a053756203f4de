use crate::cli::commands::FilterArgs;
use crate::filter::{FilterCriteria, visible};
use anyhow::Result;

use super::CommandContext;
use super::utils::print_item_list;

pub fn handle_list(ctx: &CommandContext, filter: FilterArgs, json: bool) -> Result<()> {
    let criteria = FilterCriteria::from(filter);
    let items = visible(ctx.roadmap.items(), &criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_item_list(&items);
    }
    Ok(())
}
