use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, AddEventListenerOptions, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::config;

/// A closure registered on `window` for one event type, removed on drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
        window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// A non-passive listener on one element, so the callback may cancel the
/// default action. Removed on drop.
pub struct BlockingListener {
    target: Element,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl BlockingListener {
    pub fn new<F>(target: Element, event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        Some(Self { target, event, callback })
    }
}

impl Drop for BlockingListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn is_small_screen() -> bool {
    viewport_width() < config::SMALL_SCREEN_WIDTH
}

/// Desktop means no orientation API and not an IE mobile agent.
pub fn is_desktop() -> bool {
    let Some(window) = window() else {
        return true;
    };
    let has_orientation = js_has_property(window.as_ref(), "orientation");
    let ie_mobile = window
        .navigator()
        .user_agent()
        .map(|ua| ua.contains("IEMobile"))
        .unwrap_or(false);
    !has_orientation && !ie_mobile
}

fn js_has_property(target: &wasm_bindgen::JsValue, name: &str) -> bool {
    web_sys::js_sys::Reflect::has(target, &wasm_bindgen::JsValue::from_str(name)).unwrap_or(false)
}

pub fn set_body_scroll_locked(locked: bool) {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn disable_scroll_restoration() {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
    }
}

pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

/// Smoothly scrolls the element with `id` to the top of the viewport.
pub fn scroll_to_anchor(id: &str) -> bool {
    match element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            log::warn!("No section with id {id} to scroll to");
            false
        }
    }
}

/// Descendants of `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("Invalid selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}
