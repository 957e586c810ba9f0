use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{Destination, MenuLink, Navigation, Site};
use crate::dom;
use crate::Route;

fn href(destination: &Destination, current: Option<&Route>) -> String {
    match (destination.anchor, current == Some(&destination.route)) {
        (Some(id), true) => format!("#{id}"),
        (Some(id), false) => format!("{}#{id}", destination.route.to_path()),
        (None, _) => destination.route.to_path(),
    }
}

pub fn follow(destination: &Destination, current: Option<&Route>, navigator: Option<&Navigator>) {
    let plan = match current {
        Some(current) => destination.plan(current),
        None => Navigation::Push { route: destination.route.clone(), anchor: destination.anchor },
    };
    match plan {
        Navigation::Scroll(id) => {
            dom::scroll_to_anchor(id);
        }
        Navigation::Push { route, anchor } => {
            let Some(navigator) = navigator else {
                log::error!("No router to navigate to {}", route.to_path());
                return;
            };
            navigator.push(&route);
            if let Some(id) = anchor {
                Timeout::new(config::ANCHOR_SCROLL_DELAY_MS, move || {
                    dom::scroll_to_anchor(id);
                })
                .forget();
            }
        }
        Navigation::Stay => {}
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteLinkProps {
    pub link: MenuLink,
    /// Page the link list belongs to.
    pub owner: Site,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onfollow: Callback<()>,
}

/// A menu or footer entry. Same-page anchors scroll smoothly; anything else
/// goes through the router and scrolls once the page is there.
#[function_component(SiteLink)]
pub fn site_link(props: &SiteLinkProps) -> Html {
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let destination = props.link.destination(props.owner);
    let href = href(&destination, current.as_ref());

    let onclick = {
        let onfollow = props.onfollow.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            follow(&destination, current.as_ref(), navigator.as_ref());
            onfollow.emit(());
        })
    };

    html! {
        <a class={classes!("link", props.class.clone())} {href} {onclick}>
            { props.link.name }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_stay_local_when_possible() {
        let services = Destination { route: Route::Innovate, anchor: Some("services") };
        assert_eq!(href(&services, Some(&Route::Innovate)), "#services");
        assert_eq!(href(&services, Some(&Route::Home)), "/innovate#services");
        assert_eq!(href(&services, None), "/innovate#services");

        let home = Destination { route: Route::Home, anchor: None };
        assert_eq!(href(&home, Some(&Route::Elevate)), "/");
    }
}
