use crate::suggest::{CandidateTicket, GeminiProvider, SuggestionIngestor};
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;

use super::CommandContext;
use super::utils::{print_candidates, print_item_list};

/// Parameters for suggest operation
pub struct SuggestParams {
    pub context: String,
    /// 1-based positions into the returned suggestions
    pub accept: Vec<usize>,
    pub accept_all: bool,
    pub json: bool,
}

pub fn handle_suggest(mut ctx: CommandContext, params: SuggestParams) -> Result<()> {
    let settings = &ctx.config.suggest;
    let provider = GeminiProvider::from_settings(settings)?;
    let mut ingestor = SuggestionIngestor::new();

    let submitted = tokio::runtime::Runtime::new()
        .context("Failed to start async runtime")?
        .block_on(ingestor.submit(&provider, &params.context));
    if !submitted {
        anyhow::bail!("Context cannot be empty");
    }
    if let Some(failure) = ingestor.failure() {
        anyhow::bail!("{}", failure.message());
    }

    let candidates: Vec<_> = ingestor
        .pending()
        .iter()
        .map(|p| p.candidate.clone())
        .collect();
    let tickets = select_tickets(&ingestor, &params)?;

    if !params.json {
        print_candidates(ingestor.pending());
    }

    let mut accepted = Vec::with_capacity(tickets.len());
    for ticket in tickets {
        let item = ingestor.accept(ticket, &mut ctx.roadmap)?;
        accepted.push(item.clone());
    }
    ingestor.discard_all();

    if params.json {
        let output = json!({
            "suggestions": candidates,
            "accepted": accepted,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !accepted.is_empty() {
        println!();
        println!("{} {} suggestion(s)", "Accepted".green(), accepted.len());
        println!();
        let items: Vec<_> = ctx.roadmap.items().iter().collect();
        print_item_list(&items);
    }
    Ok(())
}

/// Resolve the requested positions to tickets before anything is accepted.
fn select_tickets(
    ingestor: &SuggestionIngestor,
    params: &SuggestParams,
) -> Result<Vec<CandidateTicket>> {
    let pending = ingestor.pending();
    if params.accept_all {
        return Ok(pending.iter().map(|p| p.ticket).collect());
    }

    let mut tickets = Vec::with_capacity(params.accept.len());
    for &position in &params.accept {
        let entry = position
            .checked_sub(1)
            .and_then(|index| pending.get(index))
            .with_context(|| {
                format!(
                    "No suggestion at position {} ({} returned)",
                    position,
                    pending.len()
                )
            })?;
        if !tickets.contains(&entry.ticket) {
            tickets.push(entry.ticket);
        }
    }
    Ok(tickets)
}
