use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

fn shows_loader(route: &Route) -> bool {
    matches!(route, Route::Home | Route::Innovate | Route::Educate | Route::Elevate)
}

/// Full-screen spinner shown briefly while switching between the main
/// pages. Never shown on first load.
#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    let loading = use_state_eq(|| false);
    let first_render = use_mut_ref(|| true);
    let route = use_route::<Route>();

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |route| {
                let initial = std::mem::replace(&mut *first_render.borrow_mut(), false);
                let hold = match route {
                    Some(route) if !initial && shows_loader(route) => {
                        loading.set(true);
                        let loading = loading.clone();
                        Some(Timeout::new(config::PAGE_LOADER_HOLD_MS, move || loading.set(false)))
                    }
                    _ => {
                        loading.set(false);
                        None
                    }
                };
                move || drop(hold)
            },
            route,
        );
    }

    if !*loading {
        return html! {};
    }

    html! {
        <div class="page-loader">
            <div>
                <div class="page-loader-spinner"></div>
                <p>{"Loading..."}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_main_pages_show_the_loader() {
        assert!(shows_loader(&Route::Home));
        assert!(shows_loader(&Route::Educate));
        assert!(!shows_loader(&Route::EducateGallery));
        assert!(!shows_loader(&Route::NotFound));
    }
}
