//! Thin wrappers over the `window` APIs the pages use.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No browser window available".to_string())
}

/// Page origin, e.g. `http://localhost:8080`.
pub fn origin() -> Result<String, String> {
    window()?.location().origin().map_err(js_error)
}

/// Blocking yes/no prompt. A failed prompt counts as "no".
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).map_err(js_error))
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Ok(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// A pending one-shot timer. Dropping it cancels the timer and frees the
/// callback.
pub struct Timeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for Timeout {
    fn drop(&mut self) {
        clear_timeout(self.handle);
    }
}

/// Run `f` once after `millis`. Keep the returned [`Timeout`] alive until it
/// fires.
pub fn set_timeout(f: impl FnOnce() + 'static, millis: i32) -> Result<Timeout, String> {
    let callback: Closure<dyn FnMut()> = Closure::once(f);
    let handle = window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis,
        )
        .map_err(js_error)?;
    Ok(Timeout {
        handle,
        _callback: callback,
    })
}

fn clear_timeout(handle: i32) {
    if let Ok(w) = window() {
        w.clear_timeout_with_handle(handle);
    }
}

pub fn local_storage() -> Option<web_sys::Storage> {
    window().ok()?.local_storage().ok().flatten()
}
