use yew::prelude::*;

use crate::config;
use crate::hooks::{use_first_sight, SightOptions};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its content in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = config::site();
    let node = use_node_ref();
    let seen = use_first_sight(
        node.clone(),
        SightOptions {
            threshold: config.reveal_threshold,
            root_margin: config.reveal_root_margin.clone(),
        },
    );

    html! {
        <div ref={node} class={classes!(props.class.clone(), seen.then_some("animate-fadeInUp"))}>
            { for props.children.iter() }
        </div>
    }
}
