use stylist::yew::styled_component;
use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub progress: f64,
}

#[styled_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let style = css!(
        r#"
        position: fixed;
        top: 0;
        left: 0;
        height: 3px;
        background: linear-gradient(90deg, #6366f1, #ec4899);
        z-index: 70;
        transition: width 0.1s linear;
    "#
    );

    html! {
        <div
            id="progress-bar"
            class={style}
            style={format!("width: {:.2}%;", props.progress)}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

#[styled_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_top();
    });

    let style = css!(
        r#"
        position: fixed;
        right: 2rem;
        bottom: 2rem;
        width: 3rem;
        height: 3rem;
        border: none;
        border-radius: 50%;
        background: #6366f1;
        color: white;
        font-size: 1.25rem;
        cursor: pointer;
        z-index: 50;

        &.hidden {
            display: none;
        }
    "#
    );

    html! {
        <button
            id="backToTop"
            class={classes!(style, (!props.visible).then_some("hidden"))}
            title="Back to top"
            {onclick}
        >
            {"↑"}
        </button>
    }
}
