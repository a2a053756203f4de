use crate::error::{NexusError, Result};
use crate::model::RoadmapItem;
use crate::storage::Roadmap;
use std::fmt;
use tracing::{debug, info, warn};

use super::candidate::{Candidate, parse_candidates};
use super::prompt::{SUGGESTION_COUNT, build_prompt, response_schema};
use super::provider::SuggestionProvider;

/// Where the suggestion dialog currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngestState {
    #[default]
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

impl IngestState {
    pub fn label(&self) -> &'static str {
        match self {
            IngestState::Idle => "Idle",
            IngestState::Requesting => "Thinking...",
            IngestState::Succeeded => "Suggestions ready",
            IngestState::Failed => "Failed",
        }
    }
}

/// Opaque handle for one pending candidate.
///
/// Tickets are never reused, so two candidates with identical content remain
/// distinct and a ticket stops resolving once its candidate leaves the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateTicket(u64);

impl fmt::Display for CandidateTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingCandidate {
    pub ticket: CandidateTicket,
    pub candidate: Candidate,
}

/// The single user-facing error indicator of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionFailure {
    /// The API key environment variable was not set at startup.
    MissingCredential { var: String },
    /// Network, HTTP, or response-shape failure.
    Request,
}

impl SuggestionFailure {
    pub fn message(&self) -> String {
        match self {
            SuggestionFailure::MissingCredential { var } => {
                format!("API key is missing. Set {} and restart.", var)
            }
            SuggestionFailure::Request => {
                "Failed to generate suggestions. Please check your API key and try again."
                    .to_string()
            }
        }
    }
}

impl fmt::Display for SuggestionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<&NexusError> for SuggestionFailure {
    fn from(err: &NexusError) -> Self {
        match err {
            NexusError::MissingCredential { var } => {
                SuggestionFailure::MissingCredential { var: var.clone() }
            }
            _ => SuggestionFailure::Request,
        }
    }
}

/// Drives one suggestion dialog: request, pending candidates, accept/discard.
#[derive(Debug, Clone)]
pub struct SuggestionIngestor {
    state: IngestState,
    pending: Vec<PendingCandidate>,
    failure: Option<SuggestionFailure>,
    next_ticket: u64,
}

impl SuggestionIngestor {
    pub fn new() -> Self {
        Self {
            state: IngestState::Idle,
            pending: Vec::new(),
            failure: None,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> IngestState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == IngestState::Requesting
    }

    pub fn pending(&self) -> &[PendingCandidate] {
        &self.pending
    }

    pub fn failure(&self) -> Option<&SuggestionFailure> {
        self.failure.as_ref()
    }

    /// Whether a submission with `context` would be accepted right now.
    pub fn can_submit(&self, context: &str) -> bool {
        !self.is_busy() && !context.trim().is_empty()
    }

    /// Start a request. Returns the prompt to send, or `None` when the
    /// submission is rejected (blank context, or a request already in flight).
    pub fn begin(&mut self, context: &str) -> Option<String> {
        if context.trim().is_empty() {
            debug!("Ignoring blank suggestion context");
            return None;
        }
        if self.is_busy() {
            warn!("Suggestion request already in flight; ignoring submit");
            return None;
        }

        self.pending.clear();
        self.failure = None;
        self.state = IngestState::Requesting;
        info!(count = SUGGESTION_COUNT, "Requesting roadmap suggestions");
        Some(build_prompt(context))
    }

    /// Deliver the provider outcome for the request started by [`begin`](Self::begin).
    pub fn resolve(&mut self, response: Result<String>) {
        if !self.is_busy() {
            warn!("Received a suggestion response with no request in flight");
            return;
        }

        match response.and_then(|body| parse_candidates(&body)) {
            Ok(candidates) => {
                info!(received = candidates.len(), "Suggestions received");
                self.pending = candidates
                    .into_iter()
                    .map(|candidate| {
                        let ticket = CandidateTicket(self.next_ticket);
                        self.next_ticket += 1;
                        PendingCandidate { ticket, candidate }
                    })
                    .collect();
                self.state = IngestState::Succeeded;
            }
            Err(err) => {
                warn!(error = %err, "Suggestion request failed");
                self.pending.clear();
                self.failure = Some(SuggestionFailure::from(&err));
                self.state = IngestState::Failed;
            }
        }
    }

    /// Run a full request against `provider`.
    ///
    /// Returns `false` when the submission was rejected without any transition.
    pub async fn submit<P>(&mut self, provider: &P, context: &str) -> bool
    where
        P: SuggestionProvider + ?Sized,
    {
        let Some(prompt) = self.begin(context) else {
            return false;
        };
        let response = match provider.ensure_ready() {
            Ok(()) => {
                debug!(provider = provider.name(), "Dispatching suggestion prompt");
                provider.generate(&prompt, &response_schema()).await
            }
            Err(err) => Err(err),
        };
        self.resolve(response);
        true
    }

    fn position(&self, ticket: CandidateTicket) -> Result<usize> {
        self.pending
            .iter()
            .position(|p| p.ticket == ticket)
            .ok_or(NexusError::CandidateNotPending(ticket.0))
    }

    /// Normalize a pending candidate and append it to `roadmap`.
    ///
    /// The candidate leaves the pending list, so a second accept of the same
    /// ticket fails with [`NexusError::CandidateNotPending`].
    pub fn accept<'r>(
        &mut self,
        ticket: CandidateTicket,
        roadmap: &'r mut Roadmap,
    ) -> Result<&'r RoadmapItem> {
        let position = self.position(ticket)?;
        let item = self.pending[position]
            .candidate
            .normalize(roadmap.generate_id()?);
        let stored = roadmap.append(item)?;
        self.pending.remove(position);
        info!(id = %stored.id, title = %stored.title, "Accepted suggestion");
        Ok(stored)
    }

    /// Drop a pending candidate without touching the roadmap.
    pub fn discard(&mut self, ticket: CandidateTicket) -> Result<()> {
        let position = self.position(ticket)?;
        self.pending.remove(position);
        debug!(%ticket, "Discarded suggestion");
        Ok(())
    }

    /// Close the dialog: discard every pending candidate and clear the error.
    ///
    /// A request still in flight keeps the state at `Requesting`.
    pub fn discard_all(&mut self) {
        self.pending.clear();
        self.failure = None;
        if !self.is_busy() {
            self.state = IngestState::Idle;
        }
    }
}

impl Default for SuggestionIngestor {
    fn default() -> Self {
        Self::new()
    }
}
