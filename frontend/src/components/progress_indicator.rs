use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::trigger::{Edge, Rect, ScrollTrigger, TriggerPoint};
use crate::dom::{self, WindowListener};

/// From the page top meeting the viewport top to the page bottom meeting
/// the viewport bottom.
const WHOLE_PAGE: ScrollTrigger = ScrollTrigger {
    start: TriggerPoint::new(Edge::Top, Edge::Top),
    end: TriggerPoint::new(Edge::Bottom, Edge::Bottom),
};

/// Share of the page scrolled past. A page that fits the viewport has
/// nothing to scroll and reads as zero.
fn page_progress(page: Rect, viewport_height: f64) -> f64 {
    if page.height <= viewport_height {
        return 0.0;
    }
    WHOLE_PAGE.progress(page, viewport_height)
}

fn paint(bar: &HtmlElement) {
    let Some(page) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let bounds = page.get_bounding_client_rect();
    let progress = page_progress(Rect { top: bounds.top(), height: bounds.height() }, dom::viewport_height());
    dom::set_style(bar, "transform", &format!("scaleX({progress})"));
}

/// Thin bar across the top of the window that fills as the page scrolls.
#[function_component(ProgressIndicator)]
pub fn progress_indicator() -> Html {
    let bar = use_node_ref();

    {
        let bar = bar.clone();
        use_effect_with_deps(
            move |_| {
                let listeners: Vec<WindowListener> = bar
                    .cast::<HtmlElement>()
                    .map(|bar| {
                        paint(&bar);
                        ["scroll", "resize"]
                            .into_iter()
                            .filter_map(|event| {
                                let bar = bar.clone();
                                WindowListener::new(event, move |_| paint(&bar))
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                move || drop(listeners)
            },
            (),
        );
    }

    html! { <div ref={bar} class="progress-indicator" aria-hidden="true"></div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_scroll_position() {
        let vh = 1000.0;
        assert_eq!(page_progress(Rect { top: 0.0, height: 5000.0 }, vh), 0.0);
        assert!((page_progress(Rect { top: -2000.0, height: 5000.0 }, vh) - 0.5).abs() < 1e-9);
        assert_eq!(page_progress(Rect { top: -4000.0, height: 5000.0 }, vh), 1.0);
    }

    #[test]
    fn short_pages_stay_empty() {
        assert_eq!(page_progress(Rect { top: 0.0, height: 800.0 }, 1000.0), 0.0);
    }
}
