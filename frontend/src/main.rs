use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod contact {
    pub mod flow;
    pub mod provider;
    pub mod relay;
    pub mod request;
}
mod animation {
    pub mod hooks;
    pub mod marquee;
    pub mod physics;
    pub mod timeline;
    pub mod trigger;
    pub mod typewriter;
}
mod components {
    pub mod about_quotes;
    pub mod collaboration;
    pub mod contact_form;
    pub mod cursor;
    pub mod division_hero;
    pub mod footer;
    pub mod header;
    pub mod page_loader;
    pub mod physics_playground;
    pub mod progress_indicator;
    pub mod reveal;
    pub mod site_link;
}
mod pages {
    pub mod educate;
    pub mod educate_gallery;
    pub mod elevate;
    pub mod home;
    pub mod innovate;
}

use components::{
    contact_form::ContactForm, cursor::Cursor, header::Header, page_loader::PageLoader,
    progress_indicator::ProgressIndicator,
};
use contact::provider::ContactProvider;
use pages::{
    educate::Educate, educate_gallery::EducateGallery, elevate::Elevate, home::Home,
    innovate::Innovate,
};

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/innovate")]
    Innovate,
    #[at("/educate")]
    Educate,
    #[at("/elevate")]
    Elevate,
    #[at("/educate-gallery")]
    EducateGallery,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Innovate => {
            info!("Rendering Innovate page");
            html! { <Innovate /> }
        }
        Route::Educate => {
            info!("Rendering Educate page");
            html! { <Educate /> }
        }
        Route::Elevate => {
            info!("Rendering Elevate page");
            html! { <Elevate /> }
        }
        Route::EducateGallery => {
            info!("Rendering Educate gallery page");
            html! { <EducateGallery /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ContactProvider>
                <Header />
                <PageLoader />
                <Cursor />
                <ProgressIndicator />
                <Switch<Route> render={switch} />
                <ContactForm />
            </ContactProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", err.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
