use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::use_toaster;
use crate::config;
use crate::state::form::{ContactDraft, Submission, CONFIRMATION};

/// Demo form: nothing leaves the browser, submitting only simulates latency.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let submission = use_mut_ref(Submission::default);
    let sending = use_state(|| false);
    let toaster = use_toaster();

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                email: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                message: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !submission.borrow_mut().begin() {
                return;
            }
            info!("Demo contact form submitted, simulating delivery");
            sending.set(true);

            let draft = draft.clone();
            let sending = sending.clone();
            let submission = submission.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::site().form_delay_ms).await;
                draft.set(submission.borrow_mut().finish());
                sending.set(false);
                toaster.show(CONFIRMATION);
            });
        })
    };

    html! {
        <form id="contact-form" class="contact-form" {onsubmit}>
            <input
                type="text"
                name="name"
                placeholder="Your name"
                value={draft.name.clone()}
                oninput={on_name}
                required=true
            />
            <input
                type="email"
                name="email"
                placeholder="you@example.com"
                value={draft.email.clone()}
                oninput={on_email}
                required=true
            />
            <textarea
                name="message"
                placeholder="How can we help?"
                value={draft.message.clone()}
                oninput={on_message}
                required=true
            />
            <button type="submit" disabled={*sending}>
                { if *sending { "Sending..." } else { "Send message" } }
            </button>
            <div id="form-loader" class={classes!("loader", (!*sending).then_some("hidden"))}></div>
        </form>
    }
}
