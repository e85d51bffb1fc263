//! Lightbox hook
//!
//! `use_lightbox()` owns the [`Viewer`] for one mounted gallery and wires the
//! two page-level side effects to the component's lifetime:
//!
//! - **Key listener**: one window `keydown` listener, attached after mount and
//!   removed on unmount. The handler reads the viewer signal at event time, so
//!   re-renders never leave it holding stale state.
//! - **Scroll lock**: held by the viewer while open. On unmount the viewer is
//!   closed and its guard released, so scrolling comes back even if the
//!   gallery disappears with the lightbox open.

use cellar_common::{Direction, ImageSet, Viewer, ViewerCommand, ViewerState};
use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use tracing::debug;

use crate::wasm_utils::{event_key, BodyScrollLock, EventListener};

/// Handle for driving the lightbox of one gallery instance.
#[derive(Clone, Copy, PartialEq)]
pub struct LightboxHandle {
    viewer: Signal<Viewer<BodyScrollLock>>,
}

impl LightboxHandle {
    /// Current state (subscribes the caller to changes)
    pub fn state(&self) -> ViewerState {
        self.viewer.read().state()
    }

    pub fn open(&self, index: usize) {
        let mut viewer = self.viewer;
        // Out-of-range indices are logged and rejected by the viewer
        let _ = viewer.write().open(index);
    }

    pub fn close(&self) {
        let mut viewer = self.viewer;
        viewer.write().close();
    }

    pub fn navigate(&self, direction: Direction) {
        let mut viewer = self.viewer;
        viewer.write().navigate(direction);
    }

    pub fn handle_key(&self, key: &str) -> Option<ViewerCommand> {
        let mut signal = self.viewer;
        let mut viewer = signal.try_write().ok()?;
        viewer.handle_key(key)
    }
}

/// Create the lightbox state for `images`.
///
/// Re-rendering with a different image set re-syncs the viewer; if the open
/// image is gone, the viewer closes.
pub fn use_lightbox(images: &ImageSet) -> LightboxHandle {
    let mut viewer = use_signal(|| Viewer::new(images, BodyScrollLock));
    let mut key_listener: Signal<Option<EventListener>> = use_signal(|| None);
    let handle = LightboxHandle { viewer };

    // Sync with the images prop when the parent passes a different set
    if viewer.peek().image_count() != images.len() {
        viewer.write().set_images(images);
    }

    // Reads no signals, so this runs once after mount
    use_effect(move || {
        if key_listener.peek().is_some() {
            return;
        }
        let Some(window) = web_sys_x::window() else {
            return;
        };

        // The listener fires from wasm-bindgen, outside the Dioxus runtime
        let runtime = Runtime::current();

        let listener = EventListener::new(window, "keydown", move |event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let Some(key) = event_key(&event) else {
                return;
            };
            if let Some(command) = handle.handle_key(&key) {
                debug!("Lightbox key {key:?} -> {command:?}");
            }
        });

        key_listener.set(Some(listener));
    });

    use_drop(move || {
        // WORKAROUND: take the JS-backed values out and drop them in a task.
        // Dropping them during scope teardown makes synchronous webview IPC
        // calls inside the diff cycle, which panics on the native backend.
        let scroll_guard = viewer
            .try_write()
            .ok()
            .and_then(|mut viewer| viewer.detach_lock());
        let listener = key_listener
            .try_write()
            .ok()
            .and_then(|mut listener| listener.take());

        if scroll_guard.is_some() || listener.is_some() {
            spawn(async move {
                drop(listener);
                drop(scroll_guard);
            });
        }
    });

    handle
}
