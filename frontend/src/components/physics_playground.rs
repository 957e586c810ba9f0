use std::cell::RefCell;
use std::rc::Rc;

use web_sys::js_sys::Math;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::animation::hooks::{use_scroll_reveal, FrameLoop};
use crate::animation::physics::{grid, rain, tile_size, Vec2, World};
use crate::content::TECH_STACK;
use crate::dom;

const HEIGHT: f64 = 500.0;
const STEP_MS: f64 = 1000.0 / 60.0;
/// Steps allowed per frame after a stall, e.g. a background tab.
const MAX_CATCH_UP: u32 = 4;

fn steps_due(backlog_ms: f64) -> (u32, f64) {
    let due = (backlog_ms / STEP_MS).floor().max(0.0);
    let steps = (due as u32).min(MAX_CATCH_UP);
    let left = if due as u32 > MAX_CATCH_UP { 0.0 } else { backlog_ms - due * STEP_MS };
    (steps, left)
}

fn paint(world: &World, tiles: &[HtmlElement]) {
    for (body, tile) in world.bodies.iter().zip(tiles) {
        let corner = body.pos - Vec2::new(body.size / 2.0, body.size / 2.0);
        dom::set_style(
            tile,
            "transform",
            &format!("translate({}px, {}px) rotate({}rad)", corner.x, corner.y, body.angle),
        );
        dom::set_style(tile, "width", &format!("{}px", body.size));
        dom::set_style(tile, "height", &format!("{}px", body.size));
    }
}

fn local_point(container: &NodeRef, x: i32, y: i32) -> Option<Vec2> {
    let bounds = container.cast::<Element>()?.get_bounding_client_rect();
    Some(Vec2::new(f64::from(x) - bounds.left(), f64::from(y) - bounds.top()))
}

/// Box of technology tiles that fall under gravity and can be thrown
/// around with the pointer. Runs only while on screen.
#[function_component(TechPlayground)]
pub fn tech_playground() -> Html {
    let container = use_node_ref();
    let world: Rc<RefCell<Option<World>>> = use_mut_ref(|| None);
    let shown_before = use_mut_ref(|| false);
    let visible = use_scroll_reveal(container.clone(), "top bottom", "bottom top").active;

    {
        let container = container.clone();
        let world = world.clone();
        use_effect_with_deps(
            move |visible| {
                let running = container.cast::<HtmlElement>().filter(|_| *visible).and_then(|root| {
                    let width = f64::from(root.client_width());
                    let size = tile_size(width);
                    let bodies = if std::mem::replace(&mut *shown_before.borrow_mut(), true) {
                        grid(TECH_STACK.len(), width, HEIGHT, size)
                    } else {
                        rain(TECH_STACK.len(), width, size, Math::random)
                    };
                    *world.borrow_mut() = Some(World::new(width, HEIGHT, bodies));
                    let tiles = dom::query_all(&root, ".tech-icon");
                    let mut last = None;
                    let mut backlog = 0.0;
                    FrameLoop::start(move |now| {
                        backlog += now - last.replace(now).unwrap_or(now);
                        let (steps, left) = steps_due(backlog);
                        backlog = left;
                        if let Some(world) = world.borrow_mut().as_mut() {
                            for _ in 0..steps {
                                world.step();
                            }
                            paint(world, &tiles);
                        }
                        true
                    })
                });
                move || drop(running)
            },
            visible,
        );
    }

    let onpointerdown = {
        let (container, world) = (container.clone(), world.clone());
        Callback::from(move |e: PointerEvent| {
            let Some(point) = local_point(&container, e.client_x(), e.client_y()) else {
                return;
            };
            if let Some(world) = world.borrow_mut().as_mut() {
                if world.grab_at(point) {
                    e.prevent_default();
                }
            }
        })
    };
    let onpointermove = {
        let (container, world) = (container.clone(), world.clone());
        Callback::from(move |e: PointerEvent| {
            let Some(point) = local_point(&container, e.client_x(), e.client_y()) else {
                return;
            };
            if let Some(world) = world.borrow_mut().as_mut().filter(|w| w.is_dragging()) {
                world.drag_to(point);
            }
        })
    };
    let release = {
        let world = world.clone();
        Callback::from(move |_: PointerEvent| {
            if let Some(world) = world.borrow_mut().as_mut() {
                world.release();
            }
        })
    };

    html! {
        <section id="tech" class="tech-section">
            <div class="section-container">
                <h2 class="section-title">{"Our Technology"}</h2>
                <p class="tech-hint">{"Drag the tech icons to interact"}</p>
                <div
                    ref={container}
                    class="tech-box"
                    style={format!("height: {HEIGHT}px")}
                    {onpointerdown}
                    {onpointermove}
                    onpointerup={release.clone()}
                    onpointerleave={release}
                >
                    { for TECH_STACK.iter().map(|tech| html! {
                        <div key={tech.name} class="tech-icon" style={format!("border-color: {}", tech.color)}>
                            <span style={format!("color: {}", tech.color)}>{ tech.name }</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_step_at_a_fixed_rate() {
        assert_eq!(steps_due(0.0), (0, 0.0));
        let (steps, left) = steps_due(40.0);
        assert_eq!(steps, 2);
        assert!((left - (40.0 - 2.0 * STEP_MS)).abs() < 1e-9);
    }

    #[test]
    fn long_stalls_are_dropped() {
        assert_eq!(steps_due(5_000.0), (MAX_CATCH_UP, 0.0));
    }
}
