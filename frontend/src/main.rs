use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod bridge;
mod config;
mod dom;
mod hooks;
mod state;
mod storage;
mod components {
    pub mod contact;
    pub mod counter;
    pub mod nav;
    pub mod particles;
    pub mod reveal;
    pub mod scroll;
    pub mod theme;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use components::{theme::ThemeProvider, toast::ToastHost};
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the homepage"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <ToastHost>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastHost>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
