//! AI-assisted feature suggestions.
//!
//! A submission renders a fixed prompt around the user's product context,
//! sends it to a [`SuggestionProvider`], and parses the reply into pending
//! [`Candidate`]s. Candidates only reach the [`Roadmap`](crate::storage::Roadmap)
//! when accepted one by one through the [`SuggestionIngestor`].
//!
//! ```text
//! Idle ──submit──▶ Requesting ──ok──▶ Succeeded ──submit──▶ Requesting ...
//!                       └──────err──▶ Failed    ──submit──▶ Requesting ...
//! ```

mod candidate;
mod gemini;
mod ingestor;
mod prompt;
mod provider;

pub use candidate::{Candidate, parse_candidates};
pub use gemini::{FALLBACK_API_KEY_ENV, GeminiProvider};
pub use ingestor::{
    CandidateTicket, IngestState, PendingCandidate, SuggestionFailure, SuggestionIngestor,
};
pub use prompt::{SUGGESTION_COUNT, build_prompt, response_schema};
pub use provider::SuggestionProvider;
