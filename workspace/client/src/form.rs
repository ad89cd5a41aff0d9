//! State machine behind the ad spend form.
//!
//! The form owns the raw input, the current [`UiState`] and any inline
//! validation notice. A submission moves the form to `Loading` and hands the
//! caller a [`PendingSubmission`]; the caller performs the request and reports
//! back through [`ForecastForm::complete`]. While a submission is pending every
//! further submit is refused, whatever triggered it.

use common::{ForecastRequest, ForecastResult};
use tracing::{debug, info, trace, warn};

use crate::error::{RequestError, ValidationError};
use crate::validation::validate;

/// Identifies one dispatched submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Visible state of the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    /// A request is in flight; only the owning ticket may complete it.
    Loading(Ticket),
    Success(ForecastResult),
    Failure(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    pub fn result(&self) -> Option<&ForecastResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// What started a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Button,
    EnterKey,
}

impl Trigger {
    /// Maps a key name from a keyboard event to a trigger.
    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Enter").then_some(Self::EnterKey)
    }
}

/// A submission that passed validation and awaits its network round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingSubmission {
    ticket: Ticket,
    request: ForecastRequest,
}

impl PendingSubmission {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn ad_spend(&self) -> f64 {
        self.request.ad_spend
    }
}

/// Result of [`ForecastForm::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Input accepted; the caller must issue the request.
    Dispatched(PendingSubmission),
    /// Input rejected; no request may be issued.
    Invalid(ValidationError),
    /// Another submission is still in flight.
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct ForecastForm {
    input: String,
    state: UiState,
    notice: Option<ValidationError>,
    issued: u64,
}

impl ForecastForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Inline validation message from the last rejected submit, if any.
    pub fn notice(&self) -> Option<&ValidationError> {
        self.notice.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.is_loading()
    }

    /// Validates the current input and, when valid, enters `Loading`.
    ///
    /// Any previous result or failure is cleared before the pending request
    /// is returned. An invalid input leaves the state untouched and records a
    /// notice instead.
    pub fn submit(&mut self, trigger: Trigger) -> SubmitOutcome {
        trace!(?trigger, "Submit requested");
        if self.is_in_flight() {
            debug!(?trigger, "Submit ignored: request already in flight");
            return SubmitOutcome::Busy;
        }

        match validate(&self.input) {
            Err(err) => {
                debug!(?trigger, reason = ?err, "Submit rejected by validation");
                self.notice = Some(err.clone());
                SubmitOutcome::Invalid(err)
            }
            Ok(ad_spend) => {
                self.issued += 1;
                let ticket = Ticket(self.issued);
                self.notice = None;
                self.state = UiState::Loading(ticket);
                info!(?trigger, ad_spend, ticket = ticket.0, "Forecast submission dispatched");
                SubmitOutcome::Dispatched(PendingSubmission {
                    ticket,
                    request: ForecastRequest::new(ad_spend),
                })
            }
        }
    }

    /// Applies the outcome of a dispatched request.
    ///
    /// Returns `false` and changes nothing when `ticket` no longer owns the
    /// loading state, e.g. after [`ForecastForm::cancel`].
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<ForecastResult, RequestError>,
    ) -> bool {
        if self.state != UiState::Loading(ticket) {
            warn!(ticket = ticket.0, "Dropping stale forecast response");
            return false;
        }

        self.state = match outcome {
            Ok(result) => {
                debug!(ticket = ticket.0, "Forecast submission succeeded");
                UiState::Success(result)
            }
            Err(err) => {
                debug!(ticket = ticket.0, error = %err, "Forecast submission failed");
                UiState::Failure(err.to_string())
            }
        };
        true
    }

    /// Abandons the in-flight submission, if any, and returns to `Idle`.
    ///
    /// A response arriving later for the abandoned ticket is dropped.
    pub fn cancel(&mut self) -> Option<Ticket> {
        match self.state {
            UiState::Loading(ticket) => {
                info!(ticket = ticket.0, "Forecast submission cancelled");
                self.state = UiState::Idle;
                Some(ticket)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatched(outcome: SubmitOutcome) -> PendingSubmission {
        match outcome {
            SubmitOutcome::Dispatched(pending) => pending,
            other => panic!("Expected dispatch, got {:?}", other),
        }
    }

    fn form_with(input: &str) -> ForecastForm {
        let mut form = ForecastForm::new();
        form.set_input(input);
        form
    }

    #[test]
    fn test_starts_idle() {
        let form = ForecastForm::new();
        assert_eq!(form.state(), &UiState::Idle);
        assert!(form.notice().is_none());
        assert!(!form.is_in_flight());
    }

    #[test]
    fn test_invalid_input_stays_idle_with_notice() {
        for input in ["", "abc", "0", "-3"] {
            let mut form = form_with(input);

            let outcome = form.submit(Trigger::Button);

            assert!(matches!(outcome, SubmitOutcome::Invalid(_)), "input {:?}", input);
            assert_eq!(form.state(), &UiState::Idle);
            assert!(form.notice().is_some());
        }
    }

    #[test]
    fn test_valid_input_enters_loading() {
        let mut form = form_with("1500");

        let pending = dispatched(form.submit(Trigger::Button));

        assert_eq!(pending.ad_spend(), 1500.0);
        assert_eq!(form.state(), &UiState::Loading(pending.ticket()));
        assert!(form.notice().is_none());
    }

    #[test]
    fn test_completion_success_and_failure() {
        let mut form = form_with("100");
        let pending = dispatched(form.submit(Trigger::Button));
        assert!(form.complete(pending.ticket(), Ok(ForecastResult::new(250.0, 0.9))));
        assert_eq!(form.state(), &UiState::Success(ForecastResult::new(250.0, 0.9)));

        let pending = dispatched(form.submit(Trigger::Button));
        assert!(form.complete(pending.ticket(), Err(RequestError::status(500))));
        assert_eq!(form.state(), &UiState::Failure("Failed to get prediction".to_string()));
        assert!(!form.is_in_flight());
    }

    #[test]
    fn test_new_submission_clears_previous_result_before_resolving() {
        let mut form = form_with("100");
        let first = dispatched(form.submit(Trigger::Button));
        form.complete(first.ticket(), Ok(ForecastResult::new(250.0, 0.9)));

        let second = dispatched(form.submit(Trigger::EnterKey));

        assert_eq!(form.state(), &UiState::Loading(second.ticket()));
        assert!(form.state().result().is_none());
        assert!(form.state().error().is_none());
    }

    #[test]
    fn test_new_submission_clears_previous_failure_before_resolving() {
        let mut form = form_with("100");
        let first = dispatched(form.submit(Trigger::Button));
        form.complete(first.ticket(), Err(RequestError::transport("connection refused")));

        dispatched(form.submit(Trigger::Button));

        assert!(form.state().error().is_none());
        assert!(form.is_in_flight());
    }

    #[test]
    fn test_invalid_submit_after_success_keeps_result() {
        let mut form = form_with("100");
        let pending = dispatched(form.submit(Trigger::Button));
        form.complete(pending.ticket(), Ok(ForecastResult::new(250.0, 0.9)));

        form.set_input("nope");
        let outcome = form.submit(Trigger::Button);

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::NotANumber));
        assert!(form.state().result().is_some());
        assert_eq!(form.notice(), Some(&ValidationError::NotANumber));
    }

    #[test]
    fn test_submit_is_refused_while_in_flight_from_any_trigger() {
        let mut form = form_with("100");
        let pending = dispatched(form.submit(Trigger::Button));

        assert_eq!(form.submit(Trigger::Button), SubmitOutcome::Busy);
        assert_eq!(form.submit(Trigger::EnterKey), SubmitOutcome::Busy);
        assert_eq!(form.state(), &UiState::Loading(pending.ticket()));
    }

    #[test]
    fn test_enter_key_and_button_are_equivalent() {
        let mut by_button = form_with("42.5");
        let mut by_enter = form_with("42.5");

        let a = dispatched(by_button.submit(Trigger::Button));
        let b = dispatched(by_enter.submit(Trigger::from_key("Enter").unwrap()));
        assert_eq!(a.ad_spend(), b.ad_spend());

        by_button.complete(a.ticket(), Ok(ForecastResult::new(106.25, 0.8)));
        by_enter.complete(b.ticket(), Ok(ForecastResult::new(106.25, 0.8)));
        assert_eq!(by_button.state(), by_enter.state());
    }

    #[test]
    fn test_only_enter_maps_to_trigger() {
        assert_eq!(Trigger::from_key("Enter"), Some(Trigger::EnterKey));
        assert_eq!(Trigger::from_key("a"), None);
        assert_eq!(Trigger::from_key("Tab"), None);
    }

    #[test]
    fn test_cancel_drops_late_response() {
        let mut form = form_with("100");
        let pending = dispatched(form.submit(Trigger::Button));

        assert_eq!(form.cancel(), Some(pending.ticket()));
        assert_eq!(form.state(), &UiState::Idle);
        assert!(!form.complete(pending.ticket(), Ok(ForecastResult::new(1.0, 0.5))));
        assert_eq!(form.state(), &UiState::Idle);
    }

    #[test]
    fn test_stale_ticket_cannot_complete_newer_submission() {
        let mut form = form_with("100");
        let first = dispatched(form.submit(Trigger::Button));
        form.cancel();
        let second = dispatched(form.submit(Trigger::Button));

        assert!(!form.complete(first.ticket(), Err(RequestError::status(500))));
        assert_eq!(form.state(), &UiState::Loading(second.ticket()));
        assert!(form.complete(second.ticket(), Ok(ForecastResult::new(2.0, 0.7))));
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let mut form = ForecastForm::new();
        assert_eq!(form.cancel(), None);
        assert_eq!(form.state(), &UiState::Idle);
    }
}
