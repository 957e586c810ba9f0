use std::rc::Rc;

use yew::prelude::*;

use super::request::{ContactRequest, Field};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactAction {
    Open,
    Close,
    Toggle,
    Edit(Field, String),
    Submit,
    Delivered,
    Failed,
    AutoClose,
}

/// State of the floating contact modal and the request it collects.
///
/// Network delivery lives outside: every accepted submit bumps `dispatched`
/// and parks a snapshot in `in_flight`, and whoever watches `dispatched`
/// performs exactly one send and answers with `Delivered` or `Failed`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFlow {
    pub open: bool,
    pub status: SubmissionStatus,
    pub request: ContactRequest,
    pub in_flight: Option<ContactRequest>,
    pub dispatched: u32,
}

impl ContactFlow {
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Open => self.open = true,
            ContactAction::Close => self.close(),
            ContactAction::Toggle => {
                if self.is_submitting() {
                    return;
                }
                if self.open {
                    self.close();
                } else {
                    self.open = true;
                }
            }
            ContactAction::Edit(field, value) => {
                if !self.is_submitting() {
                    self.request.set(field, value);
                }
            }
            ContactAction::Submit => self.submit(),
            ContactAction::Delivered => {
                if self.is_submitting() {
                    self.status = SubmissionStatus::Success;
                    self.request.clear();
                    self.in_flight = None;
                }
            }
            ContactAction::Failed => {
                if self.is_submitting() {
                    self.status = SubmissionStatus::Error;
                    self.in_flight = None;
                }
            }
            ContactAction::AutoClose => {
                if self.status == SubmissionStatus::Success {
                    self.open = false;
                    self.status = SubmissionStatus::Idle;
                }
            }
        }
    }

    // An outstanding request survives the close; its result still lands here.
    fn close(&mut self) {
        self.open = false;
        if !self.is_submitting() {
            self.status = SubmissionStatus::Idle;
        }
    }

    fn submit(&mut self) {
        if !self.open || self.is_submitting() {
            return;
        }
        if !self.request.is_complete() {
            self.status = SubmissionStatus::Error;
            return;
        }
        self.status = SubmissionStatus::Submitting;
        self.in_flight = Some(self.request.clone());
        self.dispatched += 1;
    }
}

impl Reducible for ContactFlow {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened_with(fields: [&str; 5]) -> ContactFlow {
        let mut flow = ContactFlow::default();
        flow.apply(ContactAction::Open);
        for (field, value) in Field::ALL.into_iter().zip(fields) {
            flow.apply(ContactAction::Edit(field, value.to_string()));
        }
        flow
    }

    fn jane() -> ContactFlow {
        opened_with(["Jane", "Acme", "jane@acme.com", "+1 555 0100", "Hello"])
    }

    #[test]
    fn starts_closed_and_idle() {
        let flow = ContactFlow::default();
        assert!(!flow.open);
        assert_eq!(flow.status, SubmissionStatus::Idle);
        assert_eq!(flow.dispatched, 0);
    }

    #[test]
    fn empty_field_fails_without_dispatch() {
        let mut flow = opened_with(["", "Acme", "jane@acme.com", "+1 555 0100", "Hello"]);
        flow.apply(ContactAction::Submit);
        assert_eq!(flow.status, SubmissionStatus::Error);
        assert_eq!(flow.dispatched, 0);
        assert!(flow.in_flight.is_none());
        assert!(flow.open);
    }

    #[test]
    fn valid_submit_dispatches_once() {
        let mut flow = jane();
        flow.apply(ContactAction::Submit);
        assert_eq!(flow.status, SubmissionStatus::Submitting);
        assert_eq!(flow.dispatched, 1);
        assert_eq!(flow.in_flight.as_ref().map(|r| r.email.as_str()), Some("jane@acme.com"));

        // the submit control is disabled while a request is out
        flow.apply(ContactAction::Submit);
        assert_eq!(flow.dispatched, 1);
    }

    #[test]
    fn delivery_clears_fields_then_auto_closes() {
        let mut flow = jane();
        flow.apply(ContactAction::Submit);
        flow.apply(ContactAction::Delivered);
        assert_eq!(flow.status, SubmissionStatus::Success);
        assert_eq!(flow.request, ContactRequest::default());
        assert!(flow.in_flight.is_none());
        assert!(flow.open);

        flow.apply(ContactAction::AutoClose);
        assert!(!flow.open);
        assert_eq!(flow.status, SubmissionStatus::Idle);
    }

    #[test]
    fn failure_keeps_fields_and_allows_retry() {
        let mut flow = jane();
        flow.apply(ContactAction::Submit);
        flow.apply(ContactAction::Failed);
        assert_eq!(flow.status, SubmissionStatus::Error);
        assert_eq!(flow.request.name, "Jane");
        assert!(flow.open);

        flow.apply(ContactAction::Submit);
        assert_eq!(flow.status, SubmissionStatus::Submitting);
        assert_eq!(flow.dispatched, 2);
    }

    #[test]
    fn repeated_open_is_idempotent() {
        let mut flow = jane();
        let before = flow.clone();
        flow.apply(ContactAction::Open);
        flow.apply(ContactAction::Open);
        assert_eq!(flow, before);
    }

    #[test]
    fn closing_mid_flight_leaves_request_outstanding() {
        let mut flow = jane();
        flow.apply(ContactAction::Submit);
        flow.apply(ContactAction::Close);
        assert!(!flow.open);
        assert_eq!(flow.status, SubmissionStatus::Submitting);
        assert!(flow.in_flight.is_some());

        flow.apply(ContactAction::Delivered);
        assert_eq!(flow.status, SubmissionStatus::Success);
        flow.apply(ContactAction::AutoClose);
        assert_eq!(flow.status, SubmissionStatus::Idle);
    }

    #[test]
    fn toggle_is_ignored_while_submitting() {
        let mut flow = jane();
        flow.apply(ContactAction::Submit);
        flow.apply(ContactAction::Toggle);
        assert!(flow.open);
    }

    #[test]
    fn toggle_and_close_reset_error() {
        let mut flow = opened_with(["", "", "", "", ""]);
        flow.apply(ContactAction::Submit);
        assert_eq!(flow.status, SubmissionStatus::Error);
        flow.apply(ContactAction::Toggle);
        assert!(!flow.open);
        assert_eq!(flow.status, SubmissionStatus::Idle);
        flow.apply(ContactAction::Toggle);
        assert!(flow.open);
    }

    #[test]
    fn submit_on_closed_modal_is_ignored() {
        let mut flow = jane();
        flow.apply(ContactAction::Close);
        flow.apply(ContactAction::Submit);
        assert_eq!(flow.dispatched, 0);
        assert_eq!(flow.status, SubmissionStatus::Idle);
    }

    #[test]
    fn edits_are_frozen_while_submitting() {
        let mut flow = jane();
        flow.apply(ContactAction::Submit);
        flow.apply(ContactAction::Edit(Field::Name, "John".to_string()));
        assert_eq!(flow.request.name, "Jane");
    }

    #[test]
    fn stray_results_are_ignored() {
        let mut flow = jane();
        flow.apply(ContactAction::Delivered);
        assert_eq!(flow.status, SubmissionStatus::Idle);
        assert_eq!(flow.request.name, "Jane");
        flow.apply(ContactAction::Failed);
        assert_eq!(flow.status, SubmissionStatus::Idle);
        flow.apply(ContactAction::AutoClose);
        assert!(flow.open);
    }

    #[test]
    fn reducer_matches_apply() {
        let flow = Rc::new(jane());
        let next = flow.clone().reduce(ContactAction::Submit);
        assert_eq!(next.dispatched, 1);
        assert_eq!(flow.dispatched, 0);
    }
}
