use log::info;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, DocumentSurface};
use crate::state::theme::{Theme, ThemeManager};
use crate::storage::LocalStore;

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let manager = use_mut_ref(|| {
        let mut manager =
            ThemeManager::new(LocalStore, DocumentSurface, &config::site().theme_storage_key);
        let theme = manager.init_theme(dom::prefers_dark());
        info!("Initial theme: {}", theme.as_str());
        manager
    });
    let theme = use_state(|| manager.borrow().current());

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = manager.borrow_mut().toggle_theme();
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

fn toggle_title(theme: Theme) -> String {
    format!("Switch to {} theme", theme.toggled().as_str())
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ctx = use_context::<ThemeContext>();
    let Some(ctx) = ctx else {
        return html! {};
    };

    let onclick = {
        let toggle = ctx.toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            toggle.emit(());
        })
    };

    html! {
        <button
            id={props.id.clone()}
            class="theme-toggle"
            title={toggle_title(ctx.theme)}
            {onclick}
        >
            { ctx.theme.icon() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_title_names_the_other_theme() {
        assert_eq!(toggle_title(Theme::Light), "Switch to dark theme");
        assert_eq!(toggle_title(Theme::Dark), "Switch to light theme");
    }
}
