//! SIGINT Handling
//!
//! Interactive mode installs a handler that kills every live child tracked
//! by the pipeline executor and lets the REPL regain control, per §5's
//! cancellation contract. The handler itself only touches a fixed array of
//! atomics and calls `kill(2)`, both async-signal-safe; no allocation, no
//! locking.

use std::sync::atomic::{AtomicI32, Ordering};

const MAX_TRACKED_CHILDREN: usize = 16;
const EMPTY: i32 = -1;

static TRACKED: [AtomicI32; MAX_TRACKED_CHILDREN] = [
    AtomicI32::new(EMPTY), AtomicI32::new(EMPTY), AtomicI32::new(EMPTY), AtomicI32::new(EMPTY),
    AtomicI32::new(EMPTY), AtomicI32::new(EMPTY), AtomicI32::new(EMPTY), AtomicI32::new(EMPTY),
    AtomicI32::new(EMPTY), AtomicI32::new(EMPTY), AtomicI32::new(EMPTY), AtomicI32::new(EMPTY),
    AtomicI32::new(EMPTY), AtomicI32::new(EMPTY), AtomicI32::new(EMPTY), AtomicI32::new(EMPTY),
];

/// A handle to a slot claimed by `track`; dropping it is not enough, the
/// pipeline executor must call `untrack` explicitly once the child is
/// reaped (no `Drop` impl here since the slot index alone carries no
/// information about whether the reap already happened).
pub struct Slot(usize);

/// Record `pid` as a live child for the duration of this pipeline. Returns
/// `None` if every slot is taken (more than `MAX_TRACKED_CHILDREN`
/// concurrent stages are running) — a documented capacity limit for this
/// small shell; such a pipeline simply isn't covered by the SIGINT sweep.
pub fn track(pid: i32) -> Option<Slot> {
    for (i, slot) in TRACKED.iter().enumerate() {
        if slot.compare_exchange(EMPTY, pid, Ordering::SeqCst, Ordering::SeqCst).is_ok() {
            return Some(Slot(i));
        }
    }
    None
}

/// Release a previously claimed slot once its child has been reaped.
pub fn untrack(slot: Slot) {
    TRACKED[slot.0].store(EMPTY, Ordering::SeqCst);
}

/// Kill every currently tracked child. Called directly from the signal
/// handler, and safe to call there: only atomic loads and `kill(2)`.
fn sweep() {
    for slot in TRACKED.iter() {
        let pid = slot.load(Ordering::SeqCst);
        if pid != EMPTY {
            unsafe {
                libc::kill(pid, libc::SIGKILL);
            }
        }
    }
}

/// Install the interactive-mode SIGINT handler. Must be called at most
/// once, before entering the REPL.
pub fn install() {
    unsafe {
        let _ = signal_hook::low_level::register(signal_hook::consts::SIGINT, sweep);
    }
}
