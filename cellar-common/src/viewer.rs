//! Full-screen viewer state machine
//!
//! Two states: `Closed` and `Open(index)`. The open state owns the scroll
//! lock guard, so "viewer open" and "page scroll suspended" cannot drift
//! apart:
//!
//! - `open(i)` acquires the lock (once) and shows image `i`
//! - `close()` drops the guard
//! - dropping the `Viewer` drops the guard too, which covers unmount
//! - swapping in a shorter image set closes the viewer if its index falls off

use tracing::{debug, warn};

use crate::keys::ViewerCommand;
use crate::scroll_lock::ScrollLock;
use crate::{GalleryError, ImageSet};

/// Navigation step through the image sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Index reached by stepping once from `index` in a ring of `len` items.
    ///
    /// `len` must be non-zero.
    pub fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        }
    }
}

/// Snapshot of the viewer, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    pub is_open: bool,
    pub current_index: usize,
}

/// Viewer over the images of an [`ImageSet`].
pub struct Viewer<L: ScrollLock> {
    len: usize,
    current_index: usize,
    lock: L,
    /// Held exactly while the viewer is open
    guard: Option<L::Guard>,
}

impl<L: ScrollLock> Viewer<L> {
    /// Create a closed viewer at index 0.
    pub fn new(images: &ImageSet, lock: L) -> Self {
        Self {
            len: images.len(),
            current_index: 0,
            lock,
            guard: None,
        }
    }

    pub fn state(&self) -> ViewerState {
        ViewerState {
            is_open: self.is_open(),
            current_index: self.current_index,
        }
    }

    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn image_count(&self) -> usize {
        self.len
    }

    /// Follow a change of image set.
    ///
    /// The index is clamped to the new last image. If that moved it, the
    /// image on screen no longer exists, so the viewer closes.
    pub fn set_images(&mut self, images: &ImageSet) {
        let len = images.len();
        if len == self.len {
            return;
        }
        self.len = len;
        if self.current_index >= len {
            self.current_index = len - 1;
            if self.guard.take().is_some() {
                debug!("Viewer closed: image set shrank to {len}");
            }
        }
    }

    /// Close the viewer without releasing the scroll lock yet.
    ///
    /// The caller drops the returned guard when it is safe to touch the page,
    /// e.g. outside a component teardown.
    pub fn detach_lock(&mut self) -> Option<L::Guard> {
        self.guard.take()
    }

    /// Show image `index`, suspending page scroll if not already suspended.
    pub fn open(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.len {
            warn!("Ignoring open({index}): gallery has {} images", self.len);
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        self.current_index = index;
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
        debug!("Viewer opened at {index}");
        Ok(())
    }

    /// Hide the viewer and release the scroll lock. No-op when closed.
    pub fn close(&mut self) {
        if self.guard.take().is_some() {
            debug!("Viewer closed at {}", self.current_index);
        }
    }

    /// Step to the neighbouring image, wrapping at both ends. No-op when closed.
    pub fn navigate(&mut self, direction: Direction) {
        if !self.is_open() {
            return;
        }
        self.current_index = direction.step(self.current_index, self.len);
        debug!("Viewer moved {:?} to {}", direction, self.current_index);
    }

    pub fn apply(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::Close => self.close(),
            ViewerCommand::Navigate(direction) => self.navigate(direction),
        }
    }

    /// Handle a `KeyboardEvent.key` value.
    ///
    /// Returns the command that was applied, or `None` if the viewer is
    /// closed or the key is unbound.
    pub fn handle_key(&mut self, key: &str) -> Option<ViewerCommand> {
        if !self.is_open() {
            return None;
        }
        let command = ViewerCommand::from_key(key)?;
        self.apply(command);
        Some(command)
    }
}
