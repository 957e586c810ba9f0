use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent as DomMouseEvent};
use yew::prelude::*;

use crate::animation::hooks::{use_is_desktop, FrameLoop};
use crate::dom::{self, WindowListener};

/// Share of the remaining distance the follower covers each frame.
const FOLLOW: f64 = 0.2;
/// Per-frame easing of the hover scale.
const SCALE_EASE: f64 = 0.25;
/// Closer than this to the pointer, in px, the ring counts as arrived.
const REST_DISTANCE: f64 = 0.1;
const REST_SCALE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Pointer {
    x: f64,
    y: f64,
    over_link: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Follower {
    x: f64,
    y: f64,
    dot_scale: f64,
    ring_scale: f64,
}

impl Default for Follower {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, dot_scale: 1.0, ring_scale: 1.0 }
    }
}

impl Follower {
    /// Dot and ring scales the follower eases toward.
    fn scales(pointer: Pointer) -> (f64, f64) {
        if pointer.over_link {
            (0.5, 3.0)
        } else {
            (1.0, 1.0)
        }
    }

    fn chase(&mut self, pointer: Pointer) {
        self.x += (pointer.x - self.x) * FOLLOW;
        self.y += (pointer.y - self.y) * FOLLOW;
        let (dot, ring) = Self::scales(pointer);
        self.dot_scale += (dot - self.dot_scale) * SCALE_EASE;
        self.ring_scale += (ring - self.ring_scale) * SCALE_EASE;
    }

    /// Nothing left to animate until the pointer moves again.
    fn settled(&self, pointer: Pointer) -> bool {
        let (dot, ring) = Self::scales(pointer);
        (pointer.x - self.x).abs() < REST_DISTANCE
            && (pointer.y - self.y).abs() < REST_DISTANCE
            && (dot - self.dot_scale).abs() < REST_SCALE
            && (ring - self.ring_scale).abs() < REST_SCALE
    }
}

fn over_link(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(".link").ok().flatten())
        .is_some()
}

/// Dot and trailing ring that replace the pointer on desktop. Links grow
/// the ring and shrink the dot.
#[function_component(Cursor)]
pub fn cursor() -> Html {
    let desktop = use_is_desktop();
    let dot = use_node_ref();
    let ring = use_node_ref();

    {
        let (dot, ring) = (dot.clone(), ring.clone());
        use_effect_with_deps(
            move |desktop| {
                let enabled = *desktop && !dom::is_small_screen();
                let running = match (enabled, dot.cast::<HtmlElement>(), ring.cast::<HtmlElement>()) {
                    (true, Some(dot), Some(ring)) => {
                        let pointer = Rc::new(Cell::new(Pointer::default()));
                        let follower = Rc::new(Cell::new(Follower::default()));
                        let frames: Rc<RefCell<Option<FrameLoop>>> = Rc::default();
                        let follow = {
                            let (pointer, follower) = (pointer.clone(), follower.clone());
                            let (dot, ring) = (dot.clone(), ring.clone());
                            move || {
                                let (pointer, follower) = (pointer.clone(), follower.clone());
                                let (dot, ring) = (dot.clone(), ring.clone());
                                FrameLoop::start(move |_| {
                                    let now = pointer.get();
                                    let mut next = follower.get();
                                    next.chase(now);
                                    follower.set(next);
                                    dom::set_style(
                                        &dot,
                                        "transform",
                                        &format!("translate({}px, {}px) scale({})", now.x, now.y, next.dot_scale),
                                    );
                                    dom::set_style(
                                        &ring,
                                        "transform",
                                        &format!("translate({}px, {}px) scale({})", next.x, next.y, next.ring_scale),
                                    );
                                    !next.settled(now)
                                })
                            }
                        };
                        // The loop parks once the ring catches up; the next move wakes it.
                        let moves = {
                            let frames = frames.clone();
                            WindowListener::new("mousemove", move |event| {
                                if let Some(mouse) = event.dyn_ref::<DomMouseEvent>() {
                                    pointer.set(Pointer {
                                        x: f64::from(mouse.client_x()),
                                        y: f64::from(mouse.client_y()),
                                        over_link: over_link(&event),
                                    });
                                }
                                let mut frames = frames.borrow_mut();
                                if !frames.as_ref().is_some_and(FrameLoop::is_running) {
                                    *frames = follow();
                                }
                            })
                        };
                        dom::set_style(&dot, "display", "block");
                        dom::set_style(&ring, "display", "block");
                        Some((moves, frames, (dot, ring)))
                    }
                    _ => None,
                };
                move || {
                    if let Some((moves, frames, (dot, ring))) = running {
                        drop(moves);
                        frames.borrow_mut().take();
                        dom::set_style(&dot, "display", "none");
                        dom::set_style(&ring, "display", "none");
                    }
                }
            },
            desktop,
        );
    }

    html! {
        <>
            <div ref={dot} class="cursor-dot"></div>
            <div ref={ring} class="cursor-follower"></div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follower_closes_in_on_the_pointer() {
        let mut follower = Follower::default();
        let pointer = Pointer { x: 100.0, y: 50.0, over_link: false };
        follower.chase(pointer);
        assert!((follower.x - 20.0).abs() < 1e-9);
        for _ in 0..100 {
            follower.chase(pointer);
        }
        assert!((follower.x - 100.0).abs() < 1e-6);
        assert!((follower.y - 50.0).abs() < 1e-6);
    }

    #[test]
    fn follower_settles_once_caught_up() {
        let mut follower = Follower::default();
        let pointer = Pointer { x: 300.0, y: 120.0, over_link: false };
        assert!(!follower.settled(pointer));
        let mut frames = 0;
        while !follower.settled(pointer) {
            follower.chase(pointer);
            frames += 1;
            assert!(frames < 200, "follower never settled");
        }
        assert!(follower.settled(pointer));

        let hover = Pointer { over_link: true, ..pointer };
        assert!(!follower.settled(hover));
    }

    #[test]
    fn hovering_a_link_swaps_scales() {
        let mut follower = Follower::default();
        let pointer = Pointer { over_link: true, ..Pointer::default() };
        for _ in 0..100 {
            follower.chase(pointer);
        }
        assert!((follower.dot_scale - 0.5).abs() < 1e-6);
        assert!((follower.ring_scale - 3.0).abs() < 1e-6);
    }
}
