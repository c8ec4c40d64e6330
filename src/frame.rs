use crate::core::{LoopState, StopAction, TickEnd};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Stops a loop started with [`start_loop`].
#[derive(Clone)]
pub struct LoopHandle {
    state: Rc<RefCell<LoopState>>,
    tick: TickSlot,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.state.borrow().is_running()
    }

    /// Cancel the pending frame and stop rescheduling. Idempotent.
    pub fn stop(&self) {
        let action = self.state.borrow_mut().stop();
        match action {
            StopAction::CancelAndRelease(id) => {
                if let Some(w) = web::window() {
                    _ = w.cancel_animation_frame(id);
                }
                self.tick.borrow_mut().take();
            }
            StopAction::Release => {
                self.tick.borrow_mut().take();
            }
            StopAction::ReleaseAfterTick | StopAction::None => {}
        }
    }
}

fn request_frame(tick: &TickSlot, state: &RefCell<LoopState>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let id = w.request_animation_frame(cb.as_ref().unchecked_ref()).ok();
        state.borrow_mut().set_pending(id);
    }
}

/// Call `frame` once per display refresh until the returned handle is stopped.
pub fn start_loop(mut frame: impl FnMut() + 'static) -> LoopHandle {
    let state = Rc::new(RefCell::new(LoopState::default()));
    let tick: TickSlot = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let state_tick = state.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !state_tick.borrow_mut().begin_tick() {
            return;
        }
        frame();
        let end = state_tick.borrow_mut().end_tick();
        match end {
            TickEnd::Reschedule => request_frame(&tick_clone, &state_tick),
            TickEnd::Release => {
                // Stopped from inside `frame`; drop ourselves once this call returns.
                if let Some(cb) = tick_clone.borrow_mut().take() {
                    spawn_local(async move { drop(cb) });
                }
            }
        }
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &state);
    LoopHandle { state, tick }
}
