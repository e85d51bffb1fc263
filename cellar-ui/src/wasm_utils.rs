//! WASM utilities for browser interop
//!
//! # Cleanup Pattern
//!
//! Browser side effects are tied to Rust values that undo them on `Drop`:
//!
//! - [`EventListener`] removes its listener when dropped, instead of
//!   `closure.forget()` leaking it and leaving it attached forever.
//! - [`BodyScrollGuard`] restores `document.body.style.overflow` when dropped.
//!
//! ```ignore
//! let listener = EventListener::new(window, "keydown", callback);
//! // Listener is removed here
//! drop(listener);
//! ```
//!
//! Store these in a `Signal<Option<_>>` and set it to `None` to undo the effect.
//! During component teardown, hand them to `spawn` instead of dropping them in
//! place: on the native webview backend a synchronous JS call inside the diff
//! cycle panics.

use cellar_common::ScrollLock;
use wasm_bindgen_x::prelude::*;

/// An event listener on any DOM target that removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl EventListener {
    /// Attach `callback` to `target` (window, document, or an element).
    pub fn new(
        target: impl Into<web_sys_x::EventTarget>,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let target = target.into();
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        if target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach '{event_name}' listener");
        }

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Read `KeyboardEvent.key` from a raw event value
pub fn event_key(event: &wasm_bindgen_x::JsValue) -> Option<String> {
    js_sys_x::Reflect::get(event, &"key".into())
        .ok()
        .and_then(|key| key.as_string())
}

fn document_body() -> Option<web_sys_x::HtmlElement> {
    web_sys_x::window()?.document()?.body()
}

/// Suspends page scrolling by setting `overflow: hidden` on `<body>`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyScrollLock;

/// Restores the body's previous inline `overflow` when dropped.
pub struct BodyScrollGuard {
    body: Option<web_sys_x::HtmlElement>,
    previous: String,
}

impl ScrollLock for BodyScrollLock {
    type Guard = BodyScrollGuard;

    fn acquire(&self) -> BodyScrollGuard {
        let Some(body) = document_body() else {
            tracing::warn!("No document body, scroll lock not applied");
            return BodyScrollGuard {
                body: None,
                previous: String::new(),
            };
        };

        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        let _ = style.set_property("overflow", "hidden");

        BodyScrollGuard {
            body: Some(body),
            previous,
        }
    }
}

impl Drop for BodyScrollGuard {
    fn drop(&mut self) {
        let Some(body) = self.body.take() else {
            return;
        };
        let style = body.style();
        if self.previous.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", &self.previous);
        }
    }
}
