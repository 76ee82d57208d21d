use yew::prelude::*;

use crate::components::theme::ThemeToggle;
use crate::state::menu::MenuState;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("features", "Features"),
    ("stats", "Numbers"),
    ("services", "Services"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

fn link_class(base: &'static str, id: &str, active: Option<&str>) -> Classes {
    if active == Some(id) {
        classes!(base, "active")
    } else {
        classes!(base, "inactive")
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Option<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_state(MenuState::default);
    let active = props.active.as_deref();

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    // not prevented, so the anchor still jumps to its section
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"Brightside"}</a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(id, label)| html! {
                        <a href={format!("#{}", id)} class={link_class("nav-link", id, active)}>
                            {*label}
                        </a>
                    }) }
                    <ThemeToggle id="theme-toggle" />
                </div>

                <button id="mobile-menu-button" class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div id="mobile-menu" class={classes!("mobile-menu", (!menu.open).then_some("hidden"))}>
                { for NAV_LINKS.iter().map(|(id, label)| html! {
                    <a
                        href={format!("#{}", id)}
                        class={link_class("mobile-nav-link", id, active)}
                        onclick={close_menu.clone()}
                    >
                        {*label}
                    </a>
                }) }
                <ThemeToggle id="theme-toggle-mobile" />
            </div>
        </nav>
    }
}
