use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::site_link::SiteLink;
use crate::content::Site;
use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let site = Site::of(&route);

    // A new page always starts with the menu closed.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            route.clone(),
        );
    }

    let toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let logo = html! { <img src="/favicon.png" alt="DURKKAS Logo" width="40" height="40" /> };

    html! {
        <header class="site-header">
            <div class="section-container header-row">
                if route == Route::Home {
                    <a href="#home" class="link">{ logo }</a>
                } else {
                    <Link<Route> to={Route::Home} classes="link">{ logo }</Link<Route>>
                }
                <nav class={classes!("outer-menu", menu_open.then_some("menu-visible"))}>
                    <button class="hamburger link" onclick={toggle} aria-label="Menu" type="button">
                        <div></div>
                    </button>
                    <section class="menu">
                        <ul role="menu">
                            { for site.menu().iter().map(|link| html! {
                                <li key={link.name} role="menuitem">
                                    <SiteLink link={*link} owner={site} class="menu-link"
                                        onfollow={close.clone()} />
                                </li>
                            }) }
                        </ul>
                    </section>
                </nav>
            </div>
        </header>
    }
}
