use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::state::particles::scatter;

#[function_component(Particles)]
pub fn particles() -> Html {
    let particles = use_memo(|_| scatter(config::site().particle_count, dom::random), ());

    html! {
        <div id="particles" class="particles" aria-hidden="true">
            { for particles.iter().map(|p| html! {
                <span class="particle" style={p.style()}></span>
            }) }
        </div>
    }
}
