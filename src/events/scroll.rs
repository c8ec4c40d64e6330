use crate::constants::{ANCHOR_SELECTOR, HEADER_SELECTOR, REVEALED_CLASS, REVEAL_SELECTOR};
use crate::core::{is_in_page_anchor, plan_anchor_scroll, AnchorTarget, REVEAL_THRESHOLD};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn header_height(document: &web::Document) -> f64 {
    document
        .query_selector(HEADER_SELECTOR)
        .ok()
        .flatten()
        .map(|h| h.get_bounding_client_rect().height())
        .unwrap_or(0.0)
}

fn lookup_target(document: &web::Document, selector: &str) -> AnchorTarget {
    match document.query_selector(selector) {
        Ok(Some(el)) => AnchorTarget::Found {
            top: el.get_bounding_client_rect().top(),
        },
        Ok(None) => AnchorTarget::Missing,
        Err(_) => AnchorTarget::InvalidSelector,
    }
}

/// Smooth-scroll so `fragment`'s element sits just below the header, then
/// record the fragment in history. Unparsable fragments are ignored.
pub fn follow_anchor(window: &web::Window, document: &web::Document, fragment: &str) {
    let target = lookup_target(document, fragment);
    let plan = plan_anchor_scroll(
        target,
        window.scroll_y().unwrap_or(0.0),
        header_height(document),
    );
    match plan.scroll_to {
        Some(top) => {
            let opts = web::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
        None => log::debug!("[scroll] no target for {} ({:?})", fragment, target),
    }
    if plan.push_fragment {
        if let Ok(history) = window.history() {
            _ = history.push_state_with_url(&JsValue::NULL, "", Some(fragment));
        }
    }
}

pub fn wire_anchor_scroll(document: &web::Document) {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR);
    for a in &anchors {
        let anchor = a.clone();
        let doc = document.clone();
        dom::listen(a, "click", move |ev: web::MouseEvent| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if !is_in_page_anchor(&href) {
                return;
            }
            ev.prevent_default();
            if let Some(window) = web::window() {
                follow_anchor(&window, &doc, &href);
            }
        });
    }
    log::info!("[scroll] {} in-page anchors", anchors.len());
}

/// Toggle the revealed class on `.reveal` elements as they enter and leave view.
pub fn wire_reveal(document: &web::Document) {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let classes = entry.target().class_list();
                if entry.is_intersecting() {
                    _ = classes.add_1(REVEALED_CLASS);
                } else {
                    _ = classes.remove_1(REVEALED_CLASS);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[reveal] IntersectionObserver error: {:?}", e);
                return;
            }
        };
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
}
