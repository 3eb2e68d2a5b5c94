//! Event-listener registration for the live page.

use crate::common::{AppConfig, SetupError, api::HttpClient, build_info, telemetry};
use crate::features::login::{LoginController, SubmitDecision};
use crate::features::password_reset::PasswordResetController;
use crate::page::{ElementIds, PageElements, dom::WebDom};
use std::rc::Rc;
use tracing::{debug, error, info};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget};

/// Loads configuration, installs logging and wires both forms once the
/// document has been parsed.
pub fn start() {
    let config = Rc::new(AppConfig::load());
    if let Err(err) = telemetry::init(&config.log_level) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }

    if let Err(err) = schedule_mount(config) {
        error!(error = %err, "login page wiring aborted");
    }
}

fn schedule_mount(config: Rc<AppConfig>) -> Result<(), SetupError> {
    let dom = WebDom::current()?;
    if dom.document().ready_state() != "loading" {
        return mount(&dom, config);
    }

    let target: EventTarget = dom.document().clone().into();
    let on_ready = Closure::once(move |_: Event| {
        if let Err(err) = mount(&dom, config) {
            error!(error = %err, "login page wiring aborted");
        }
    });
    target
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|err| listener_error("DOMContentLoaded", &err))?;
    on_ready.forget();
    Ok(())
}

fn mount(dom: &WebDom, config: Rc<AppConfig>) -> Result<(), SetupError> {
    let elements = PageElements::resolve(dom, &ElementIds::default(), &config.password_reset_url)?;
    let client = HttpClient::new(Rc::clone(&config));

    let login_form: EventTarget = elements.login.form.clone().into();
    let reset_link: EventTarget = elements.reset.link.clone().into();
    let reset_form: EventTarget = elements.reset.form.clone().into();

    let login = Rc::new(LoginController::new(elements.login, client.clone()));
    let reset = Rc::new(PasswordResetController::new(
        elements.reset,
        client,
        config.csrf_cookie_name.clone(),
    ));

    listen(&login_form, "submit", move |event| {
        let decision = login.begin_submit();
        if decision.prevents_default() {
            event.prevent_default();
        }
        if let SubmitDecision::Check(input, token) = decision {
            let login = Rc::clone(&login);
            spawn_local(async move {
                let outcome = login.finish_submit(input, token).await;
                debug!(?outcome, "login submit handled");
            });
        }
    })?;

    let reveal = Rc::clone(&reset);
    listen(&reset_link, "click", move |event| {
        event.prevent_default();
        reveal.reveal();
    })?;

    listen(&reset_form, "submit", move |event| {
        event.prevent_default();
        let reset = Rc::clone(&reset);
        spawn_local(async move {
            let outcome = reset.submit().await;
            debug!(?outcome, "password reset submit handled");
        });
    })?;

    info!(
        version = build_info::version(),
        commit = build_info::git_commit_hash(),
        "login page wiring attached"
    );
    Ok(())
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SetupError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| listener_error(event, &err))?;
    closure.forget();
    Ok(())
}

fn listener_error(event: &str, err: &JsValue) -> SetupError {
    SetupError::Listener {
        event: event.to_string(),
        message: format!("{err:?}"),
    }
}
