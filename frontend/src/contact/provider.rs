use std::ops::Deref;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::flow::{ContactAction, ContactFlow, SubmissionStatus};
use super::relay;
use super::request::ContactRequest;
use crate::config;
use crate::dom;

/// Shared handle on the contact modal. Any component under
/// [`ContactProvider`] can open it without knowing where it is mounted.
#[derive(Clone, PartialEq)]
pub struct ContactHandle(UseReducerHandle<ContactFlow>);

impl ContactHandle {
    pub fn open(&self) {
        self.0.dispatch(ContactAction::Open);
    }

    pub fn dispatch(&self, action: ContactAction) {
        self.0.dispatch(action);
    }
}

impl Deref for ContactHandle {
    type Target = ContactFlow;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[hook]
pub fn use_contact() -> Option<ContactHandle> {
    use_context::<ContactHandle>()
}

/// The request to hand to the relay for the submit that bumped
/// `dispatched`, if it is still waiting for an answer.
fn delivery_for(flow: &ContactFlow) -> Option<ContactRequest> {
    if flow.is_submitting() {
        flow.in_flight.clone()
    } else {
        None
    }
}

fn auto_close_after(status: SubmissionStatus) -> Option<u32> {
    (status == SubmissionStatus::Success).then_some(config::CONTACT_AUTO_CLOSE_MS)
}

#[derive(Properties, PartialEq)]
pub struct ContactProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ContactProvider)]
pub fn contact_provider(props: &ContactProviderProps) -> Html {
    let flow = use_reducer(ContactFlow::default);

    // One delivery per accepted submit. Dropping the provider aborts it,
    // closing the modal does not.
    {
        let dispatched = flow.dispatched;
        let flow = flow.clone();
        use_effect_with_deps(
            move |_| {
                let controller = match delivery_for(&flow) {
                    Some(request) => {
                        let controller = AbortController::new().ok();
                        let signal = controller.as_ref().map(|c| c.signal());
                        let flow = flow.clone();
                        spawn_local(async move {
                            match relay::send(&request, signal.as_ref()).await {
                                Ok(()) => {
                                    info!("Contact request from {} delivered", request.email);
                                    flow.dispatch(ContactAction::Delivered);
                                }
                                Err(err) => {
                                    relay::report(&err);
                                    flow.dispatch(ContactAction::Failed);
                                }
                            }
                        });
                        controller
                    }
                    None => None,
                };
                move || {
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                }
            },
            dispatched,
        );
    }

    {
        let status = flow.status;
        let flow = flow.clone();
        use_effect_with_deps(
            move |status| {
                let timeout = auto_close_after(*status).map(|delay| {
                    Timeout::new(delay, move || {
                        flow.dispatch(ContactAction::AutoClose);
                    })
                });
                move || drop(timeout)
            },
            status,
        );
    }

    let open = flow.open;
    use_effect_with_deps(
        move |open| {
            dom::set_body_scroll_locked(*open);
            || dom::set_body_scroll_locked(false)
        },
        open,
    );

    {
        let flow = flow.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && flow.open {
                if flow.is_submitting() {
                    warn!("Contact modal closed while a request is still outstanding");
                }
                flow.dispatch(ContactAction::Close);
            }
        });
    }

    html! {
        <ContextProvider<ContactHandle> context={ContactHandle(flow)}>
            { props.children.clone() }
        </ContextProvider<ContactHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::request::Field;

    fn filled() -> ContactFlow {
        let mut flow = ContactFlow::default();
        flow.apply(ContactAction::Open);
        for (field, value) in Field::ALL.into_iter().zip(["Jane", "Acme", "jane@acme.com", "+1 555 0100", "Hello"]) {
            flow.apply(ContactAction::Edit(field, value.to_string()));
        }
        flow
    }

    #[test]
    fn success_arms_a_two_second_close() {
        assert_eq!(config::CONTACT_AUTO_CLOSE_MS, 2_000);
        assert_eq!(auto_close_after(SubmissionStatus::Success), Some(2_000));
        for status in [SubmissionStatus::Idle, SubmissionStatus::Submitting, SubmissionStatus::Error] {
            assert_eq!(auto_close_after(status), None);
        }
    }

    #[test]
    fn each_accepted_submit_hands_over_one_delivery() {
        let mut flow = filled();
        assert_eq!(delivery_for(&flow), None);

        flow.apply(ContactAction::Submit);
        assert_eq!(flow.dispatched, 1);
        let delivery = delivery_for(&flow);
        assert_eq!(delivery.as_ref().map(|r| r.email.as_str()), Some("jane@acme.com"));

        // Resubmitting while in flight neither bumps nor queues another send.
        flow.apply(ContactAction::Submit);
        assert_eq!(flow.dispatched, 1);

        flow.apply(ContactAction::Delivered);
        assert_eq!(delivery_for(&flow), None);
    }

    #[test]
    fn rejected_submit_hands_over_nothing() {
        let mut flow = filled();
        flow.apply(ContactAction::Edit(Field::Name, String::new()));
        flow.apply(ContactAction::Submit);
        assert_eq!(flow.dispatched, 0);
        assert_eq!(flow.status, SubmissionStatus::Error);
        assert_eq!(delivery_for(&flow), None);
    }
}
