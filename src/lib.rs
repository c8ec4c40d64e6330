#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod canvas;
mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod frame;
mod theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neural-site starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Theme first so the page never paints in the wrong palette.
    theme::wire(&document);

    let cursor_loop = events::pointer::wire_cursor(&document);
    events::pointer::wire_magnetic(&document);
    events::scroll::wire_anchor_scroll(&document);
    events::pointer::wire_tilt(&document);
    events::scroll::wire_reveal(&document);
    let background_loop = background::start(&window, &document);
    contact::wire(&document);

    log::info!(
        "[init] cursor loop={} background loop={}",
        cursor_loop.as_ref().is_some_and(|h| h.is_running()),
        background_loop.as_ref().is_some_and(|h| h.is_running())
    );

    // Pages kept in the back/forward cache resume, so only a real unload stops the loops.
    let loops: Vec<frame::LoopHandle> = cursor_loop.into_iter().chain(background_loop).collect();
    dom::listen(&window, "pagehide", move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            return;
        }
        for handle in &loops {
            handle.stop();
        }
        log::info!("[init] animation loops stopped");
    });
    Ok(())
}
