use yew::prelude::*;

use crate::components::about_quotes::AboutQuotesSection;
use crate::components::collaboration::CollaborationBand;
use crate::components::division_hero::DivisionHero;
use crate::components::footer::Footer;
use crate::components::physics_playground::TechPlayground;
use crate::content::{self, Site};

/// Card order after `selected` is clicked, or `None` when it is already in
/// front.
fn bring_to_front(order: &[usize], selected: usize) -> Option<Vec<usize>> {
    if order.first() == Some(&selected) {
        return None;
    }
    let mut next = Vec::with_capacity(order.len());
    next.push(selected);
    next.extend(order.iter().copied().filter(|&i| i != selected));
    Some(next)
}

#[function_component(ServiceStack)]
fn service_stack() -> Html {
    let services = content::INNOVATE_SERVICES;
    let order = use_state(|| (0..services.len()).collect::<Vec<_>>());
    let front = order.first().copied().unwrap_or_default();

    let select = {
        let order = order.clone();
        Callback::from(move |index: usize| {
            if let Some(next) = bring_to_front(&order, index) {
                order.set(next);
            }
        })
    };

    html! {
        <section id="services" class="services-stack">
            <div class="section-container">
                <h2 class="section-title">{"Our Services"}</h2>
                <div class="service-tabs" role="tablist">
                    { for services.iter().enumerate().map(|(index, service)| {
                        let select = select.clone();
                        html! {
                            <button key={service.title} type="button" role="tab"
                                class={classes!("link", "service-tab", (index == front).then_some("active"))}
                                aria-selected={(index == front).to_string()}
                                onclick={move |_: MouseEvent| select.emit(index)}>
                                { service.title }
                            </button>
                        }
                    }) }
                </div>
                <div class="service-cards">
                    { for order.iter().enumerate().map(|(depth, &index)| {
                        let service = &services[index];
                        html! {
                            <article key={service.title} class="service-card"
                                style={format!(
                                    "z-index: {}; transform: translateY({}px) scale({});",
                                    services.len() - depth,
                                    depth * 14,
                                    1.0 - depth as f64 * 0.04,
                                )}>
                                <h3>{ service.title }</h3>
                                <p>{ service.description }</p>
                            </article>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Innovate)]
pub fn innovate() -> Html {
    let Some(division) = content::division(Site::Innovate) else {
        return html! {};
    };
    html! {
        <main class="page innovate-page">
            <DivisionHero {division} />
            <AboutQuotesSection id="about" quotes={content::INNOVATE_ABOUT} />
            <ServiceStack />
            <TechPlayground />
            <CollaborationBand copy={content::INNOVATE_COLLABORATION} />
            <Footer />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicked_card_moves_to_the_front() {
        assert_eq!(bring_to_front(&[0, 1, 2, 3], 2), Some(vec![2, 0, 1, 3]));
        assert_eq!(bring_to_front(&[2, 0, 1, 3], 3), Some(vec![3, 2, 0, 1]));
    }

    #[test]
    fn clicking_the_front_card_changes_nothing() {
        assert_eq!(bring_to_front(&[1, 0, 2], 1), None);
    }
}
