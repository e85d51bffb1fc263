use std::cell::Cell;
use std::rc::Rc;

use cellar_common::ScrollLock;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Scroll lock that records how many guards are alive
#[derive(Clone, Default)]
pub struct RecordingLock {
    held: Rc<Cell<usize>>,
}

impl RecordingLock {
    pub fn is_held(&self) -> bool {
        self.held.get() > 0
    }

    pub fn held(&self) -> usize {
        self.held.get()
    }
}

pub struct RecordingGuard(Rc<Cell<usize>>);

impl Drop for RecordingGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

impl ScrollLock for RecordingLock {
    type Guard = RecordingGuard;

    fn acquire(&self) -> RecordingGuard {
        self.held.set(self.held.get() + 1);
        RecordingGuard(self.held.clone())
    }
}
