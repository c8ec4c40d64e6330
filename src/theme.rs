use crate::constants::MODE_TOGGLE_ID;
use crate::core::{Theme, LIGHT_THEME_CLASS, THEME_STORAGE_KEY};
use crate::dom;
use web_sys as web;

fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

fn current(body: &web::HtmlElement) -> Theme {
    Theme::from_light_class(body.class_list().contains(LIGHT_THEME_CLASS))
}

fn update_toggle_icon(document: &web::Document, theme: Theme) {
    if let Some(el) = document.get_element_by_id(MODE_TOGGLE_ID) {
        el.set_text_content(Some(theme.icon()));
    }
}

/// Apply the stored theme and wire `#modeToggle`.
pub fn wire(document: &web::Document) {
    let Some(body) = document.body() else {
        log::warn!("[theme] document has no body");
        return;
    };

    let stored = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    if Theme::from_stored(stored.as_deref()) == Theme::Light {
        _ = body.class_list().add_1(LIGHT_THEME_CLASS);
    }
    update_toggle_icon(document, current(&body));

    let doc = document.clone();
    dom::add_click_listener(document, MODE_TOGGLE_ID, move || {
        let next = current(&body).toggled();
        _ = body
            .class_list()
            .toggle_with_force(LIGHT_THEME_CLASS, next == Theme::Light);
        match storage() {
            Some(s) => {
                if let Err(e) = s.set_item(THEME_STORAGE_KEY, next.as_str()) {
                    log::warn!("[theme] could not persist theme: {:?}", e);
                }
            }
            None => log::warn!("[theme] localStorage unavailable"),
        }
        update_toggle_icon(&doc, next);
        log::info!("[theme] {}", next.as_str());
    });
}
