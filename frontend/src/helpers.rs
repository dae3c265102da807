//! Browser-side effects shared by both screens.
//!
//! The state machines in `common` describe what should happen (`Effect`);
//! the functions here make it happen: toasts appended to the document body,
//! timers via `gloo_timers`, and navigation either through the host router's
//! callback or, when the screen is mounted without one, the window location.

use common::effects::Effect;
use common::routes::Route;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::Callback;

/// How long a toast stays on screen, in milliseconds.
const TOAST_MILLIS: u32 = 3000;

const TOAST_CSS: &str = "position:fixed;bottom:24px;left:50%;transform:translateX(-50%);\
    max-width:90vw;padding:12px 18px;border-radius:6px;background:#1f2937;color:#f9fafb;\
    font-size:14px;box-shadow:0 4px 12px rgba(0,0,0,0.25);z-index:1000;";

/// Runs the effects returned by a state transition.
pub fn perform(effects: Vec<Effect>, on_navigate: Option<&Callback<Route>>) {
    for effect in effects {
        match effect {
            Effect::Notify(message) => show_toast(&message),
            Effect::Navigate(route) => navigate(route, on_navigate),
            Effect::Redirect { route, after } => {
                let on_navigate = on_navigate.cloned();
                let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(millis).await;
                    navigate(route, on_navigate.as_ref());
                });
            }
        }
    }
}

/// Hands `route` to the host router, or falls back to a full page load.
pub fn navigate(route: Route, on_navigate: Option<&Callback<Route>>) {
    if let Some(callback) = on_navigate {
        callback.emit(route);
        return;
    }
    let path = route.path();
    match web_sys::window() {
        Some(window) => {
            if window.location().set_href(&path).is_err() {
                gloo_console::error!(format!("navigation to {path} was refused"));
            }
        }
        None => gloo_console::error!(format!("no window to navigate to {path}")),
    }
}

/// Shows a transient notification at the bottom of the screen that removes
/// itself after a few seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_attribute("role", "status").ok();
    let html_toast: HtmlElement = toast.unchecked_into();
    html_toast.style().set_css_text(TOAST_CSS);

    if body.append_child(&html_toast).is_ok() {
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
