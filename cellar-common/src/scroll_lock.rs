/// Page-level "suspend scrolling" capability.
///
/// `acquire` suspends scrolling and hands back a guard; dropping the guard
/// restores it. [`crate::Viewer`] holds the guard exactly while it is open, so
/// closing the viewer and dropping it both release the lock.
pub trait ScrollLock {
    type Guard;

    fn acquire(&self) -> Self::Guard;
}
