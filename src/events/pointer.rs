use crate::constants::{
    COARSE_POINTER_QUERY, CURSOR_ACTIVE_CLASS, CURSOR_DOT_SELECTOR, CURSOR_HOVER_SELECTORS,
    CURSOR_RING_SELECTOR, MAGNETIC_SELECTOR, TILT_SELECTOR,
};
use crate::core::{
    ease_toward, magnetic_offset, tilt_angles, tilt_css, tilt_reset_css, translate_css,
    TRANSLATE_RESET,
};
use crate::dom;
use crate::frame::{self, LoopHandle};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

fn place(el: &web::HtmlElement, pos: Vec2) {
    dom::set_style(el, "left", &format!("{}px", pos.x));
    dom::set_style(el, "top", &format!("{}px", pos.y));
}

/// Custom cursor: the dot snaps to the pointer, the ring eases after it.
///
/// Touch-first devices get neither; the elements are hidden and no loop runs.
pub fn wire_cursor(document: &web::Document) -> Option<LoopHandle> {
    let dot = dom::query_html(document, CURSOR_DOT_SELECTOR);
    let ring = dom::query_html(document, CURSOR_RING_SELECTOR);
    let (Some(dot), Some(ring)) = (dot, ring) else {
        log::info!("[cursor] no cursor elements, skipping");
        return None;
    };

    if dom::media_matches(COARSE_POINTER_QUERY) {
        dom::set_style(&dot, "display", "none");
        dom::set_style(&ring, "display", "none");
        return None;
    }

    let pointer = Rc::new(Cell::new(Vec2::ZERO));
    {
        let pointer = pointer.clone();
        dom::listen(document, "pointermove", move |ev: web::PointerEvent| {
            let pos = dom::pointer_client(&ev);
            pointer.set(pos);
            place(&dot, pos);
        });
    }

    for selector in CURSOR_HOVER_SELECTORS {
        for el in dom::query_all(document, selector) {
            let ring_enter = ring.clone();
            dom::listen(&el, "mouseenter", move |_: web::MouseEvent| {
                _ = ring_enter.class_list().add_1(CURSOR_ACTIVE_CLASS);
            });
            let ring_leave = ring.clone();
            dom::listen(&el, "mouseleave", move |_: web::MouseEvent| {
                _ = ring_leave.class_list().remove_1(CURSOR_ACTIVE_CLASS);
            });
        }
    }

    let mut ring_pos = Vec2::ZERO;
    Some(frame::start_loop(move || {
        ring_pos = ease_toward(ring_pos, pointer.get());
        place(&ring, ring_pos);
    }))
}

pub fn wire_magnetic(document: &web::Document) {
    let elements = dom::query_all(document, MAGNETIC_SELECTOR);
    for el in &elements {
        let target = el.clone();
        dom::listen(el, "mousemove", move |ev: web::MouseEvent| {
            let (min, size) = dom::client_rect(&target);
            let offset = magnetic_offset(dom::pointer_client(&ev), min, size);
            dom::set_style(&target, "transform", &translate_css(offset));
        });
        let target = el.clone();
        dom::listen(el, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&target, "transform", TRANSLATE_RESET);
        });
    }
    log::info!("[pointer] {} magnetic elements", elements.len());
}

pub fn wire_tilt(document: &web::Document) {
    let cards = dom::query_all(document, TILT_SELECTOR);
    for card in &cards {
        let target = card.clone();
        dom::listen(card, "pointermove", move |ev: web::PointerEvent| {
            let (min, size) = dom::client_rect(&target);
            if let Some((rx, ry)) = tilt_angles(dom::pointer_client(&ev), min, size) {
                dom::set_style(&target, "transform", &tilt_css(rx, ry));
            }
        });
        let target = card.clone();
        dom::listen(card, "pointerleave", move |_: web::PointerEvent| {
            dom::set_style(&target, "transform", &tilt_reset_css());
        });
    }
    log::info!("[pointer] {} tilt cards", cards.len());
}
