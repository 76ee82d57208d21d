use gloo_timers::callback::Timeout;
use log::{debug, warn};
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::bridge;
use crate::config;
use crate::state::toast::ToastState;

/// Handle for raising a toast from anywhere under `ToastHost`.
#[derive(Clone, PartialEq)]
pub struct Toaster(Callback<String>);

impl Toaster {
    pub fn show(&self, message: impl Into<String>) {
        self.0.emit(message.into());
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    let toaster = use_context::<Toaster>();
    toaster.unwrap_or_else(|| {
        Toaster(Callback::from(|message: String| {
            warn!("No toast host mounted, dropping: {}", message);
        }))
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub children: Children,
}

#[styled_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let snapshot = use_state(ToastState::default);
    let model = use_mut_ref(ToastState::default);
    let timer = use_mut_ref(|| None::<Timeout>);

    let toaster = {
        let snapshot = snapshot.clone();
        use_memo(
            move |_| {
                Toaster(Callback::from(move |message: String| {
                    debug!("Toast: {}", message);
                    let ticket = model.borrow_mut().show(message);
                    snapshot.set(model.borrow().clone());

                    let model = model.clone();
                    let snapshot = snapshot.clone();
                    let hide = Timeout::new(config::site().toast_duration_ms, move || {
                        if model.borrow_mut().expire(ticket) {
                            snapshot.set(model.borrow().clone());
                        }
                    });
                    // dropping the previous handle clears its timeout
                    *timer.borrow_mut() = Some(hide);
                }))
            },
            (),
        )
    };

    {
        let toaster = (*toaster).clone();
        use_effect_with_deps(
            move |_| {
                bridge::register(toaster);
                bridge::unregister
            },
            (),
        );
    }

    let style = css!(
        r#"
        position: fixed;
        bottom: 2rem;
        left: 50%;
        transform: translate(-50%, 1rem);
        padding: 0.85rem 1.5rem;
        border-radius: 0.75rem;
        background: #1f2937;
        color: #f9fafb;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.25);
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease, transform 0.3s ease;
        z-index: 60;

        &.show {
            opacity: 1;
            transform: translate(-50%, 0);
        }
    "#
    );

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { for props.children.iter() }
            <div id="toast" class={classes!(style, snapshot.visible.then_some("show"))} role="status">
                <span id="toast-message">{ &snapshot.message }</span>
            </div>
        </ContextProvider<Toaster>>
    }
}
