use stylist::yew::styled_component;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::flow::{ContactAction, SubmissionStatus};
use crate::contact::provider::use_contact;
use crate::contact::request::Field;

const SPINNER_PATH: &str = "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z";
const CLOSE_PATH: &str = "M6 18L18 6M6 6l12 12";
const CHAT_PATH: &str = "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z";

fn spinner(class: &'static str) -> Html {
    html! {
        <svg class={class} fill="none" viewBox="0 0 24 24">
            <circle class="faint" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" />
            <path fill="currentColor" d={SPINNER_PATH} />
        </svg>
    }
}

/// Floating contact button and the modal it opens. Must sit under a
/// `ContactProvider`.
#[styled_component]
pub fn ContactForm() -> Html {
    let contact = use_contact();
    let Some(contact) = contact else {
        log::error!("ContactForm rendered outside of ContactProvider");
        return html! {};
    };

    let style = css!(
        r#"
        .contact-fab {
            position: fixed;
            bottom: 1.5rem;
            right: 1.5rem;
            z-index: 50;
            width: 3.5rem;
            height: 3.5rem;
            border: none;
            border-radius: 9999px;
            background: linear-gradient(to right, #0a5ba8, #05347e);
            color: #fff;
            display: flex;
            align-items: center;
            justify-content: center;
            box-shadow: 0 4px 20px rgba(0, 0, 0, 0.4), 0 0 30px rgba(255, 255, 255, 0.3);
            animation: contactBlink 2s ease-in-out infinite;
            transition: transform 0.3s;
            cursor: pointer;
        }
        .contact-fab:hover { transform: scale(1.1); }
        .contact-fab:disabled { cursor: not-allowed; opacity: 0.75; }
        .contact-fab svg { width: 1.5rem; height: 1.5rem; transition: transform 0.3s; }
        .contact-fab svg.turned { transform: rotate(180deg); }
        .contact-backdrop {
            position: fixed;
            inset: 0;
            z-index: 50;
            display: flex;
            align-items: center;
            justify-content: center;
            background: rgba(0, 0, 0, 0.5);
            animation: fadeIn 0.2s ease-out;
        }
        .contact-dialog {
            position: relative;
            background: #05347e;
            border-radius: 0.5rem;
            width: 100%;
            max-width: 28rem;
            margin: 0 1rem;
            padding: 1.5rem;
            max-height: 90vh;
            overflow-y: auto;
            cursor: default;
            animation: slideUp 0.3s ease-out;
        }
        .contact-dialog h2 { color: #fff; font-size: 1.5rem; font-weight: 700; margin-bottom: 1.5rem; }
        .contact-close {
            position: absolute;
            top: 1rem;
            right: 1rem;
            background: none;
            border: none;
            color: #fff;
            cursor: pointer;
        }
        .contact-close svg { width: 1.5rem; height: 1.5rem; }
        .contact-overlay {
            position: absolute;
            inset: 0;
            z-index: 10;
            display: flex;
            align-items: center;
            justify-content: center;
            text-align: center;
            background: rgba(5, 52, 126, 0.9);
            border-radius: 0.5rem;
            color: #fff;
            font-size: 1.125rem;
        }
        .contact-overlay svg { width: 3rem; height: 3rem; margin: 0 auto 1rem; }
        .contact-overlay svg.done { color: #4ade80; width: 4rem; height: 4rem; }
        .spin { animation: spin 1s linear infinite; }
        .faint { opacity: 0.25; }
        .contact-field { margin-bottom: 1rem; }
        .contact-field label { display: block; color: #e5e7eb; font-size: 0.875rem; margin-bottom: 0.5rem; }
        .contact-field label span { color: #f87171; }
        .contact-field input, .contact-field textarea {
            width: 100%;
            padding: 0.5rem 1rem;
            background: #1f2937;
            color: #fff;
            border: 1px solid #374151;
            border-radius: 0.5rem;
            cursor: text;
            resize: none;
        }
        .contact-error {
            background: #ef4444;
            color: #fff;
            padding: 0.5rem 1rem;
            border-radius: 0.5rem;
            font-size: 0.875rem;
            margin-bottom: 1rem;
        }
        .contact-submit {
            width: 100%;
            border: none;
            border-radius: 0.5rem;
            padding: 0.75rem 1.5rem;
            color: #fff;
            font-weight: 500;
            background: linear-gradient(to right, #0a5ba8, #05347e);
            cursor: pointer;
        }
        .contact-submit:disabled { opacity: 0.5; cursor: not-allowed; }
        "#
    );

    let submitting = contact.is_submitting();

    let toggle = {
        let contact = contact.clone();
        Callback::from(move |_: MouseEvent| contact.dispatch(ContactAction::Toggle))
    };
    let close = {
        let contact = contact.clone();
        Callback::from(move |_: MouseEvent| contact.dispatch(ContactAction::Close))
    };
    // Clicks inside the dialog never reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let onsubmit = {
        let contact = contact.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            contact.dispatch(ContactAction::Submit);
        })
    };

    let render_field = |field: Field| -> Html {
        let value = contact.request.get(field).to_string();
        let control = match field.input_type() {
            Some(kind) => {
                let contact = contact.clone();
                let oninput = Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    contact.dispatch(ContactAction::Edit(field, input.value()));
                });
                html! {
                    <input type={kind} id={field.id()} name={field.id()} {value} {oninput}
                        required=true placeholder={field.placeholder()} />
                }
            }
            None => {
                let contact = contact.clone();
                let oninput = Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    contact.dispatch(ContactAction::Edit(field, input.value()));
                });
                html! {
                    <textarea id={field.id()} name={field.id()} {value} {oninput} rows="1"
                        required=true placeholder={field.placeholder()} />
                }
            }
        };
        html! {
            <div class="contact-field" key={field.id()}>
                <label for={field.id()}>{ field.label() }{" "}<span>{"*"}</span></label>
                { control }
            </div>
        }
    };

    let overlay = match contact.status {
        SubmissionStatus::Submitting => html! {
            <div class="contact-overlay">
                <div>
                    { spinner("spin") }
                    <p>{"Sending..."}</p>
                </div>
            </div>
        },
        SubmissionStatus::Success => html! {
            <div class="contact-overlay">
                <div>
                    <svg class="done" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="3" d="M5 13l4 4L19 7" />
                    </svg>
                    <p>{"✓ Message sent successfully! We'll get back to you soon."}</p>
                </div>
            </div>
        },
        SubmissionStatus::Idle | SubmissionStatus::Error => html! {},
    };

    html! {
        <div class={style}>
            <button class="contact-fab" onclick={toggle} disabled={submitting}
                aria-label="Contact Us" type="button">
                if submitting {
                    { spinner("spin") }
                } else {
                    <svg class={classes!(contact.open.then_some("turned"))} fill="none"
                        stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                            d={if contact.open { CLOSE_PATH } else { CHAT_PATH }} />
                    </svg>
                }
            </button>

            if contact.open {
                <div class="contact-backdrop" onclick={close.clone()}>
                    <div class="contact-dialog" onclick={keep_open}>
                        <button class="contact-close" onclick={close} aria-label="Close" type="button">
                            <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={CLOSE_PATH} />
                            </svg>
                        </button>
                        <h2>{"Let's Connect & Transform Your Business"}</h2>
                        { overlay }
                        <form {onsubmit} novalidate=true>
                            { for Field::ALL.into_iter().map(render_field) }
                            if contact.status == SubmissionStatus::Error {
                                <div class="contact-error">
                                    {"✗ Failed to send message. Please try again or contact us directly."}
                                </div>
                            }
                            <button type="submit" class="contact-submit" disabled={submitting}>
                                { if submitting { "Sending..." } else { "Send Message" } }
                            </button>
                        </form>
                    </div>
                </div>
            }
        </div>
    }
}
