//! Thin wrappers over `web_sys` for the few browser calls the page needs.
//! A missing window, document or element means the caller's feature is
//! skipped, never a panic.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::polish::{anchor_scroll_top, anchor_target_id};
use crate::timers::{Debouncer, GlooScheduler};

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

/// Distance of the element from the top of the document.
pub fn offset_top(node: &NodeRef) -> Option<f64> {
    node.cast::<HtmlElement>().map(|el| f64::from(el.offset_top()))
}

/// Distance of the element's top edge from the top of the viewport.
pub fn viewport_top(node: &NodeRef) -> Option<f64> {
    node.cast::<Element>()
        .map(|el| el.get_bounding_client_rect().top())
}

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// Stops the page behind an overlay from scrolling.
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = body() else {
        log::debug!("No <body>, skipping scroll lock");
        return;
    };
    let overflow = if locked { "hidden" } else { "auto" };
    if let Err(e) = body.style().set_property("overflow", overflow) {
        log::warn!("Failed to set body overflow: {:?}", e);
    }
}

pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = body() else {
        return;
    };
    let result = if enabled {
        body.class_list().add_1(class)
    } else {
        body.class_list().remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("Failed to update body class {}: {:?}", class, e);
    }
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Window-level click handler for in-page links: cancels the jump and
/// glides to the target instead, leaving room for the fixed navbar.
pub fn handle_anchor_click(event: &MouseEvent, header_offset: f64) {
    let anchor = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten());
    let Some(anchor) = anchor else {
        return;
    };
    event.prevent_default();

    let href = anchor.get_attribute("href").unwrap_or_default();
    let Some(id) = anchor_target_id(&href) else {
        return;
    };
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    match target {
        Some(target) => {
            let top = anchor_scroll_top(f64::from(target.offset_top()), header_offset);
            smooth_scroll_to(top);
        }
        None => log::debug!("Anchor #{} has no target on this page", id),
    }
}

/// Calls `on_scroll` with the window's scroll offset once on mount and then
/// after every burst of scroll events has been quiet for `wait_ms`.
#[hook]
pub fn use_debounced_scroll<F>(wait_ms: u32, on_scroll: F)
where
    F: Fn(f64) + 'static,
{
    let latest = use_mut_ref(|| -> Rc<dyn Fn(f64)> { Rc::new(|_: f64| ()) });
    let handler: Rc<dyn Fn(f64)> = Rc::new(on_scroll);
    *latest.borrow_mut() = handler;

    use_effect_with_deps(
        move |wait_ms| {
            let emit = {
                let latest = latest.clone();
                move |window: &web_sys::Window| {
                    if let Ok(scroll_y) = window.scroll_y() {
                        let handler = latest.borrow().clone();
                        handler(scroll_y);
                    }
                }
            };

            let listener = web_sys::window().map(|window| {
                emit(&window);

                let debouncer = Debouncer::new(GlooScheduler, *wait_ms);
                let target = window.clone();
                let callback = Closure::<dyn Fn()>::new(move || {
                    let emit = emit.clone();
                    let target = target.clone();
                    debouncer.call(move || emit(&target));
                });
                if let Err(e) = window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                {
                    log::warn!("Failed to attach scroll listener: {:?}", e);
                }
                (window, callback)
            });

            move || {
                if let Some((window, callback)) = listener {
                    if let Err(e) = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("Failed to detach scroll listener: {:?}", e);
                    }
                }
            }
        },
        wait_ms,
    );
}
