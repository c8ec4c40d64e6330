use crate::canvas::{window_viewport, CanvasSurface};
use crate::constants::{CANVAS_ID, REDUCED_MOTION_QUERY};
use crate::core::Animator;
use crate::dom;
use crate::frame::{self, LoopHandle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type BackgroundAnimator = Animator<CanvasSurface, StdRng>;

/// Start the particle-network background on `#neural-canvas`.
///
/// Returns `None` (and draws nothing) when the canvas or its 2D context is
/// missing.
pub fn start(window: &web::Window, document: &web::Document) -> Option<LoopHandle> {
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let Some(canvas) = canvas else {
        log::warn!("[background] missing #{}", CANVAS_ID);
        return None;
    };
    let surface = match CanvasSurface::new(canvas) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[background] {:?}", e);
            return None;
        }
    };

    let reduced_motion = dom::media_matches(REDUCED_MOTION_QUERY);
    let animator: BackgroundAnimator = Animator::new(
        surface,
        StdRng::from_entropy(),
        window_viewport(window),
        reduced_motion,
    );
    log::info!(
        "[background] {} particles, reduced_motion={}",
        animator.field().len(),
        reduced_motion
    );
    let animator = Rc::new(RefCell::new(animator));

    // Every resize event reseeds the full field.
    let animator_resize = animator.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        if let Some(w) = web::window() {
            animator_resize.borrow_mut().resize(window_viewport(&w));
        }
    });

    Some(frame::start_loop(move || animator.borrow_mut().step()))
}
