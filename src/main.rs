use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod quote;
mod interactions {
    pub mod coordinator;
    pub mod counter;
    pub mod error;
    pub mod registry;
    pub mod scheduler;
    pub mod teardown;
    pub mod triggers;
    pub mod visibility;
    #[cfg(test)]
    pub mod virtual_clock;
}
mod dom {
    pub mod counters;
    pub mod discovery;
    pub mod events;
    pub mod mount;
    pub mod navigation;
    pub mod observer;
    pub mod page_events;
    pub mod quote_form;
    pub mod render;
    pub mod reveal;
    pub mod slider;
    pub mod tabs;
    pub mod timers;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
    }
}

const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#services", "Services"),
    ("#portfolio", "Portfolio"),
    ("#testimonials", "Testimonials"),
    ("#pricing", "Pricing"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="navbar">
            <div class="nav-content">
                <a class="nav-logo" href="#home">{"TOUGH"}</a>
                <button class="navbar-toggler" type="button">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class="navbar-collapse">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a class="nav-link" href={*href}>{*label}</a>
                    }) }
                    <button class="nav-quote-button" data-open-modal="quoteModal">
                        {"Get a Quote"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
