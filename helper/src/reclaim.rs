//! Deferred memory reclamation.
//!
//! Values handed to [`retire`] are normally dropped on the spot. While a
//! [`ReclamationPause`] is alive anywhere in the process, they are queued
//! instead, and the whole queue is dropped in one go when the last pause ends.
//!
//! This is used to keep deallocation work out of tight timing loops.
//!
//! The queue holds at most [`DEFERRED_LIMIT`] values, anything
//! retired past that is dropped on the spot even while paused.
//!
//! Requires `std`.

//---------------------------------------------------------------------------------------------------- Use
use std::{
    any::Any,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
};

//---------------------------------------------------------------------------------------------------- Constants
/// Maximum number of values held in the deferred queue.
pub const DEFERRED_LIMIT: usize = 1024;

//---------------------------------------------------------------------------------------------------- Statics
/// How many [`ReclamationPause`]s are currently alive.
///
/// Reclamation is enabled iff this is `0`.
static PAUSE_DEPTH: AtomicUsize = AtomicUsize::new(0);

/// Values retired while reclamation was paused.
static DEFERRED: Mutex<Vec<Box<dyn Any + Send>>> = Mutex::new(Vec::new());

/// Lock [`DEFERRED`], ignoring poison.
///
/// The queue only ever holds owned values waiting to be dropped,
/// a panic while holding the lock cannot leave it half-updated.
fn deferred() -> MutexGuard<'static, Vec<Box<dyn Any + Send>>> {
    DEFERRED.lock().unwrap_or_else(PoisonError::into_inner)
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Returns `true` if retired values are currently dropped immediately.
///
/// ```rust
/// # use diffbench_helper::reclaim::*;
/// assert!(is_enabled());
///
/// let pause = ReclamationPause::new();
/// assert!(!is_enabled());
///
/// drop(pause);
/// assert!(is_enabled());
/// ```
pub fn is_enabled() -> bool {
    PAUSE_DEPTH.load(Ordering::Acquire) == 0
}

/// Hand `value` over to be reclaimed.
///
/// If reclamation is enabled `value` is dropped now,
/// otherwise it is queued until the last [`ReclamationPause`] ends.
///
/// A full queue ([`DEFERRED_LIMIT`]) drops `value` now.
pub fn retire<T: Send + 'static>(value: T) {
    if is_enabled() {
        drop(value);
        return;
    }

    let mut queue = deferred();
    if queue.len() >= DEFERRED_LIMIT {
        drop(queue);
        drop(value);
        return;
    }
    queue.push(Box::new(value));
    drop(queue);

    // The last pause may have ended between the check and the push.
    if is_enabled() {
        collect();
    }
}

/// How many values are waiting to be reclaimed.
pub fn deferred_len() -> usize {
    deferred().len()
}

/// Drop every queued value, returning how many there were.
///
/// This is a no-op returning `0` while reclamation is paused.
pub fn collect() -> usize {
    if !is_enabled() {
        return 0;
    }

    // Swap the queue out first so values are dropped outside the lock.
    let queued = std::mem::take(&mut *deferred());
    queued.len()
}

//---------------------------------------------------------------------------------------------------- ReclamationPause
/// Scoped suspension of memory reclamation.
///
/// Reclamation is paused when this is created and resumed when it is
/// dropped, including on early returns and unwinding panics.
///
/// Pauses nest: reclamation resumes when the outermost pause is dropped.
///
/// ```rust
/// # use diffbench_helper::reclaim::*;
/// {
///     let _outer = ReclamationPause::new();
///     {
///         let _inner = ReclamationPause::new();
///         retire(vec![0_u8; 64]);
///     }
///     assert!(!is_enabled());
///     assert_eq!(deferred_len(), 1);
/// }
///
/// assert!(is_enabled());
/// assert_eq!(deferred_len(), 0);
/// ```
#[derive(Debug)]
#[must_use = "reclamation resumes as soon as the pause is dropped"]
pub struct ReclamationPause {
    /// Prevents construction outside of [`ReclamationPause::new`].
    _private: (),
}

impl ReclamationPause {
    /// Pause reclamation until the returned value is dropped.
    pub fn new() -> Self {
        PAUSE_DEPTH.fetch_add(1, Ordering::AcqRel);
        Self { _private: () }
    }
}

impl Default for ReclamationPause {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ReclamationPause {
    fn drop(&mut self) {
        if PAUSE_DEPTH.fetch_sub(1, Ordering::AcqRel) == 1 {
            collect();
        }
    }
}
