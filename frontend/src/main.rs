use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod lead {
    pub mod phone;
    pub mod query;
    pub mod record;
    pub mod score;
    pub mod steps;
    pub mod submit;
    pub mod tracking;
}
mod components {
    pub mod hero_carousel;
    pub mod scroll_reveal;
}
mod pages {
    pub mod apply;
    pub mod booking;
    pub mod home;
}

use pages::{
    apply::QualifyForm,
    booking::Booking,
    home::Home,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/apply")]
    Apply,
    #[at("/booking")]
    Booking,
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
        Route::Apply => {
            info!("Rendering Apply page");
            html! { <QualifyForm /> }
        },
        Route::Booking => {
            info!("Rendering Booking page");
            html! { <Booking /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; color: white;">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the start"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    // Must run before the first render: the form reads the cache in `create`
    lead::tracking::remember_landing();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
