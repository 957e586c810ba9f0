use wasm_bindgen::JsCast;
use web_sys::{Element, WheelEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::about_quotes::AboutQuotesSection;
use crate::components::collaboration::CollaborationBand;
use crate::components::division_hero::DivisionHero;
use crate::components::footer::Footer;
use crate::components::reveal::ScrollReveal;
use crate::content::{self, School, Site};
use crate::dom::BlockingListener;
use crate::Route;

/// How a school card sits in the fan.
#[derive(Clone, Copy, Debug, PartialEq)]
struct CardPose {
    rotation: f64,
    z_index: i32,
    opacity: f64,
    scale: f64,
}

impl CardPose {
    fn of(index: usize, active: usize) -> Self {
        let distance = index.abs_diff(active) as i32;
        let rotation = if index < active {
            -5.0 - f64::from(distance) * 2.0
        } else if index > active {
            10.0 + f64::from(distance) * 2.0
        } else {
            0.0
        };
        let active = index == active;
        Self {
            rotation,
            z_index: 4 - distance,
            opacity: if active { 1.0 } else { 0.7 },
            scale: if active { 1.0 } else { 0.95 },
        }
    }

    fn style(&self) -> String {
        format!(
            "transform: translate(-50%, -50%) rotate({}deg) scale({}); z-index: {}; opacity: {};",
            self.rotation, self.scale, self.z_index, self.opacity
        )
    }
}

fn wrap(index: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + step).rem_euclid(len as isize) as usize
}

/// New `scrollLeft` for a vertical wheel delta, or `None` once the strip
/// is at its end and the page should scroll instead.
fn wheel_scroll(current: f64, max: f64, delta_y: f64) -> Option<f64> {
    (current < max - 1.0).then(|| current + delta_y * 0.5)
}

fn school_card(school: &School, pose: CardPose, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <article key={school.name} class="school-card link" style={pose.style()} {onclick}>
            <h3>{ school.name }</h3>
            <p>{ school.description }</p>
            <ul>
                { for school.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
            </ul>
        </article>
    }
}

#[function_component(SchoolFan)]
fn school_fan() -> Html {
    let active = use_state(|| 0usize);
    let len = content::SCHOOLS.len();

    let shift = |step: isize| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(wrap(*active, step, len)))
    };

    html! {
        <ScrollReveal id="division" class="school-section">
            <div class="section-container">
                <p class="section-title-sm seq">{"Our Division"}</p>
                <h2 class="section-heading seq">{"Explore our divisions"}</h2>
                <div class="school-fan seq">
                    { for content::SCHOOLS.iter().enumerate().map(|(index, school)| {
                        let pose = CardPose::of(index, *active);
                        let active = active.clone();
                        let select = Callback::from(move |_: MouseEvent| {
                            if *active != index {
                                active.set(index);
                            }
                        });
                        school_card(school, pose, select)
                    }) }
                </div>
                <div class="school-controls seq">
                    <button type="button" class="link" aria-label="Previous" onclick={shift(-1)}>{"‹"}</button>
                    <button type="button" class="link" aria-label="Next" onclick={shift(1)}>{"›"}</button>
                </div>
            </div>
        </ScrollReveal>
    }
}

#[function_component(GalleryStrip)]
fn gallery_strip() -> Html {
    let strip = use_node_ref();
    let images = use_memo(|_| content::gallery_images(), ());

    {
        let strip = strip.clone();
        use_effect_with_deps(
            move |_| {
                let listener = strip.cast::<Element>().and_then(|element| {
                    let target = element.clone();
                    BlockingListener::new(element, "wheel", move |event| {
                        let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                            return;
                        };
                        let max = f64::from(target.scroll_width() - target.client_width());
                        if let Some(left) = wheel_scroll(f64::from(target.scroll_left()), max, wheel.delta_y()) {
                            wheel.prevent_default();
                            target.set_scroll_left(left.round() as i32);
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <ScrollReveal id="gallery" class="gallery-section">
            <div class="section-container">
                <h2 class="section-heading seq">{"Our Gallery"}</h2>
            </div>
            <div ref={strip} class="gallery-strip seq">
                { for images.iter().map(|src| html! {
                    <img key={src.clone()} src={src.clone()} alt="EDUCATE gallery" loading="lazy" />
                }) }
            </div>
            <div class="section-container">
                <Link<Route> to={Route::EducateGallery} classes="link gallery-more seq">{"View full gallery"}</Link<Route>>
            </div>
        </ScrollReveal>
    }
}

#[function_component(Educate)]
pub fn educate() -> Html {
    let Some(division) = content::division(Site::Educate) else {
        return html! {};
    };
    html! {
        <main class="page educate-page">
            <DivisionHero {division} />
            <AboutQuotesSection id="about" quotes={content::EDUCATE_ABOUT} />
            <SchoolFan />
            <GalleryStrip />
            <CollaborationBand copy={content::EDUCATE_COLLABORATION} />
            <Footer />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_card_is_upright_and_on_top() {
        let pose = CardPose::of(2, 2);
        assert_eq!(pose, CardPose { rotation: 0.0, z_index: 4, opacity: 1.0, scale: 1.0 });
    }

    #[test]
    fn cards_fan_out_around_the_active_one() {
        assert_eq!(CardPose::of(0, 2).rotation, -9.0);
        assert_eq!(CardPose::of(1, 2).rotation, -7.0);
        assert_eq!(CardPose::of(3, 2).rotation, 12.0);
        assert_eq!(CardPose::of(0, 2).z_index, 2);
        assert_eq!(CardPose::of(3, 2).opacity, 0.7);
    }

    #[test]
    fn prev_and_next_wrap() {
        assert_eq!(wrap(0, -1, 4), 3);
        assert_eq!(wrap(3, 1, 4), 0);
        assert_eq!(wrap(1, 1, 4), 2);
        assert_eq!(wrap(0, 1, 0), 0);
    }

    #[test]
    fn wheel_scrolls_until_the_end() {
        assert_eq!(wheel_scroll(0.0, 500.0, 100.0), Some(50.0));
        assert_eq!(wheel_scroll(499.5, 500.0, 100.0), None);
        assert_eq!(wheel_scroll(0.0, 0.0, 100.0), None);
    }
}
