//! State behind the data-fetch hooks.
//!
//! Every fetch takes a [`Ticket`]; a response is only applied when its ticket
//! is still the newest one, so a slow early response can never overwrite a
//! later one.

use crate::error::{ApiError, ApiResult};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// `{ data, loading, error }` triple of one view.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchState<T> {
    /// Views start out loading.
    pub fn new() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
            generation: 0,
        }
    }

    /// For disabled hooks: nothing to wait for.
    pub fn idle() -> Self {
        Self {
            loading: false,
            ..Self::new()
        }
    }

    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Applies a result. Returns `false` when the ticket is stale and the
    /// result was dropped. Failures keep whatever data was there.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, String>) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.generation, "dropping stale response");
            return false;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
        true
    }

    pub fn resolve_api(&mut self, ticket: Ticket, result: ApiResult<T>, text: ErrorText) -> bool {
        let result = result.map_err(|e| {
            warn!(error = %e, "fetch failed");
            text.render(&e)
        });
        self.resolve(ticket, result)
    }

    /// Bumps the generation without starting a fetch, so anything in flight
    /// is ignored.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.loading = false;
    }
}

/// What a view shows when its fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorText {
    /// Always the same text.
    Fixed(&'static str),
    /// The backend `message` if any, else the text.
    PreferBackend(&'static str),
}

impl ErrorText {
    pub fn render(&self, error: &ApiError) -> String {
        match self {
            ErrorText::Fixed(text) => text.to_string(),
            ErrorText::PreferBackend(fallback) => error.user_message(fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_stops_loading_and_keeps_data() {
        let mut state: FetchState<Vec<i64>> = FetchState::new();
        let first = state.begin();
        assert!(state.resolve(first, Ok(vec![1, 2])));

        let second = state.begin();
        assert!(state.loading);
        assert_eq!(state.error, None);

        let failed = Err(ApiError::transport("offline"));
        state.resolve_api(second, failed, ErrorText::Fixed("Could not load projects"));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Could not load projects"));
        assert_eq!(state.data, Some(vec![1, 2]));
    }

    #[test]
    fn stale_response_never_overwrites_newer_one() {
        let mut state: FetchState<&str> = FetchState::new();
        let slow = state.begin();
        let fast = state.begin();

        assert!(state.resolve(fast, Ok("search=eco")));
        assert!(!state.resolve(slow, Ok("search=e")));
        assert_eq!(state.data, Some("search=eco"));
        assert!(!state.loading);
    }

    #[test]
    fn stale_failure_does_not_end_loading() {
        let mut state: FetchState<u8> = FetchState::new();
        let old = state.begin();
        let _new = state.begin();
        assert!(!state.resolve(old, Err("boom".into())));
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn backend_message_passthrough() {
        let err = ApiError::from_response(404, r#"{"message":"Proyecto no encontrado"}"#);
        assert_eq!(
            ErrorText::PreferBackend("Could not load the project").render(&err),
            "Proyecto no encontrado"
        );
        assert_eq!(ErrorText::Fixed("Could not load the project").render(&err), "Could not load the project");
    }

    #[test]
    fn cancel_discards_in_flight_results() {
        let mut state: FetchState<u8> = FetchState::new();
        let ticket = state.begin();
        state.cancel();
        assert!(!state.resolve(ticket, Ok(1)));
        assert!(!state.loading);
        assert!(!FetchState::<u8>::idle().loading);
    }
}
