use crate::constants::{CONTACT_FORM_ID, FORM_STATUS_ID};
use crate::core::{check_response, FormStatus, SubmitError};
use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn network(e: JsValue) -> SubmitError {
    SubmitError::Network(format!("{:?}", e))
}

/// POST the form's fields to its `action`, asking for a JSON reply.
pub async fn submit(form: &web::HtmlFormElement) -> Result<(), SubmitError> {
    let window = web::window().ok_or_else(|| SubmitError::Network("no window".into()))?;
    let body = web::FormData::new_with_form(form).map_err(network)?;
    let headers = web::Headers::new().map_err(network)?;
    headers
        .set("Accept", "application/json")
        .map_err(network)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&body);
    init.set_headers(&headers);
    let request = web::Request::new_with_str_and_init(&form.action(), &init).map_err(network)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?
        .dyn_into::<web::Response>()
        .map_err(network)?;
    check_response(response.ok(), response.status())
}

fn show_status(status_el: &Option<web::Element>, status: FormStatus) {
    if let Some(el) = status_el {
        el.set_text_content(Some(status.message()));
    }
}

/// Intercept `#contact-form` submissions and report progress in `#form-status`.
pub fn wire(document: &web::Document) {
    let form = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok());
    let Some(form) = form else {
        log::info!("[contact] no #{} on this page", CONTACT_FORM_ID);
        return;
    };
    let status_el = document.get_element_by_id(FORM_STATUS_ID);

    let target = form.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        show_status(&status_el, FormStatus::Sending);
        let form = target.clone();
        let status_el = status_el.clone();
        spawn_local(async move {
            let result = submit(&form).await;
            if let Err(e) = &result {
                log::warn!("[contact] submit failed: {}", e);
            }
            let status = FormStatus::from_result(&result);
            show_status(&status_el, status);
            if status.resets_form() {
                form.reset();
            }
        });
    });
    log::info!("[contact] form wired");
}
