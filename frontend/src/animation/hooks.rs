use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement};
use yew::prelude::*;

use super::marquee::Marquee;
use super::timeline::{Ease, Timeline, Tween};
use super::trigger::{Rect, ScrollTrigger};
use crate::config;
use crate::dom::{self, WindowListener};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A `requestAnimationFrame` loop. `tick` gets the frame timestamp and
/// returns whether to keep going. Dropping the loop cancels the pending
/// frame.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = window()?;
        let handle = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let next = {
            let handle = handle.clone();
            let slot = Rc::downgrade(&callback);
            Closure::wrap(Box::new(move |timestamp: f64| {
                handle.set(None);
                if !tick(timestamp) {
                    return;
                }
                let (Some(slot), Some(window)) = (slot.upgrade(), web_sys::window()) else {
                    return;
                };
                let pending = slot
                    .borrow()
                    .as_ref()
                    .and_then(|callback| window.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
                handle.set(pending);
            }) as Box<dyn FnMut(f64)>)
        };

        handle.set(window.request_animation_frame(next.as_ref().unchecked_ref()).ok());
        *callback.borrow_mut() = Some(next);
        Some(Self { handle, callback })
    }

    /// False once `tick` has asked to stop.
    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.handle.take(), window()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub progress: f64,
    pub active: bool,
}

fn measure(node: &NodeRef, trigger: &ScrollTrigger) -> Option<ScrollState> {
    let element = node.cast::<Element>()?;
    let bounds = element.get_bounding_client_rect();
    let rect = Rect { top: bounds.top(), height: bounds.height() };
    let viewport = dom::viewport_height();
    Some(ScrollState {
        // Coarse enough that sub-pixel scrolls don't re-render.
        progress: (trigger.progress(rect, viewport) * 1000.0).round() / 1000.0,
        active: trigger.is_active(rect, viewport),
    })
}

/// Tracks where the element behind `node` sits between the trigger's start
/// and end while the page scrolls or resizes.
#[hook]
pub fn use_scroll_trigger(node: NodeRef, trigger: ScrollTrigger) -> ScrollState {
    let state = use_state_eq(ScrollState::default);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |trigger| {
                let trigger = *trigger;
                let update = Rc::new(move || {
                    if let Some(next) = measure(&node, &trigger) {
                        state.set(next);
                    }
                });
                update();
                let listeners: Vec<WindowListener> = ["scroll", "resize"]
                    .into_iter()
                    .filter_map(|event| {
                        let update = update.clone();
                        WindowListener::new(event, move |_| update())
                    })
                    .collect();
                move || drop(listeners)
            },
            trigger,
        );
    }
    *state
}

pub fn parse_trigger(start: &str, end: &str) -> ScrollTrigger {
    ScrollTrigger::parse(start, end).unwrap_or_else(|err| {
        warn!("Scroll trigger {start:?} -> {end:?} ignored: {err}");
        ScrollTrigger::default()
    })
}

/// [`use_scroll_trigger`] with positions written as `"top 80%"`.
#[hook]
pub fn use_scroll_reveal(node: NodeRef, start: &'static str, end: &'static str) -> ScrollState {
    let trigger = use_memo(|(start, end)| parse_trigger(start, end), (start, end));
    use_scroll_trigger(node, *trigger)
}

/// Fades the `.seq` descendants of `node` in one after the other as
/// `progress` goes from 0 to 1.
#[hook]
pub fn use_seq_stagger(node: NodeRef, state: ScrollState) {
    use_effect_with_deps(
        move |state| {
            if let Some(root) = node.cast::<Element>() {
                let items = dom::query_all(&root, ".seq");
                let timeline = Timeline::stagger(items.len(), 0.0, 1.0, 0.5, 0.5, Ease::Linear);
                for (index, item) in items.iter().enumerate() {
                    let opacity = timeline.sample_progress(index, state.progress).unwrap_or(1.0);
                    dom::set_style(item, "opacity", &opacity.to_string());
                    dom::set_style(item, "will-change", if state.active { "opacity" } else { "auto" });
                }
            }
            || ()
        },
        state,
    );
}

/// Timing for a page-load reveal: the section fades in over
/// `section_secs` while its `.seq` items rise into place one by one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroReveal {
    pub section_secs: f64,
    pub item_secs: f64,
    pub each_secs: f64,
    pub rise_px: f64,
}

impl IntroReveal {
    pub const HERO: IntroReveal = IntroReveal { section_secs: 2.0, item_secs: 0.5, each_secs: 0.5, rise_px: 0.0 };
    pub const DIVISION_HERO: IntroReveal = IntroReveal { section_secs: 2.0, item_secs: 0.6, each_secs: 0.2, rise_px: 20.0 };

    fn apply(&self, section: &HtmlElement, items: &[HtmlElement], secs: f64) -> bool {
        let fade = Tween::new(0.0, 1.0, 0.0, self.section_secs);
        dom::set_style(section, "opacity", &fade.sample(secs).to_string());
        let items_timeline = Timeline::stagger(items.len(), 0.0, 1.0, self.item_secs, self.each_secs, Ease::Linear);
        for (index, item) in items.iter().enumerate() {
            let t = items_timeline.sample(index, secs).unwrap_or(1.0);
            dom::set_style(item, "opacity", &t.to_string());
            if self.rise_px > 0.0 {
                dom::set_style(item, "transform", &format!("translateY({}px)", (1.0 - t) * self.rise_px));
            }
        }
        secs < fade.end().max(items_timeline.duration())
    }
}

#[hook]
pub fn use_intro_reveal(node: NodeRef, reveal: IntroReveal) {
    use_effect_with_deps(
        move |_| {
            let frames = node.cast::<HtmlElement>().and_then(|section| {
                let items = dom::query_all(&section, ".seq");
                let mut started = None;
                FrameLoop::start(move |now| {
                    let start = *started.get_or_insert(now);
                    reveal.apply(&section, &items, (now - start) / 1000.0)
                })
            });
            move || drop(frames)
        },
        (),
    );
}

/// Scrolls the text inside `node` forever.
#[hook]
pub fn use_marquee(node: NodeRef, marquee: Marquee) {
    use_effect_with_deps(
        move |marquee| {
            let marquee = *marquee;
            let frames = node.cast::<HtmlElement>().and_then(|strip| {
                let mut started = None;
                FrameLoop::start(move |now| {
                    let start = *started.get_or_insert(now);
                    let offset = marquee.offset(now - start);
                    dom::set_style(&strip, "transform", &format!("translateX({offset}%)"));
                    true
                })
            });
            move || drop(frames)
        },
        marquee,
    );
}

/// Whether the pointer-driven extras (cursor follower) should run.
/// Recomputed 100 ms after the last resize.
#[hook]
pub fn use_is_desktop() -> bool {
    let desktop = use_state_eq(|| true);
    let pending = use_mut_ref(|| None::<Timeout>);
    {
        let desktop = desktop.clone();
        use_effect_with_deps(
            move |_| {
                let recompute = {
                    let pending = pending.clone();
                    Rc::new(move || {
                        let desktop = desktop.clone();
                        *pending.borrow_mut() = Some(Timeout::new(config::RESIZE_DEBOUNCE_MS, move || {
                            dom::disable_scroll_restoration();
                            desktop.set(dom::is_desktop());
                        }));
                    })
                };
                recompute();
                let listener = WindowListener::new("resize", move |_| recompute());
                move || {
                    drop(listener);
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }
    *desktop
}
