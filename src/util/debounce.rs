//! Trailing-edge debounce.
//!
//! Each call arms a new generation; a scheduled invocation only runs if its
//! generation is still the latest when its timer fires.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::rc::Rc;

/// Generation counter shared between a debounced callable and its timers.
#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    generation: Rc<Cell<u64>>,
}

impl DebounceGate {
    /// Invalidate every pending invocation and return the new token.
    pub fn arm(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    /// Whether `token` is from the most recent `arm`.
    pub fn is_current(&self, token: u64) -> bool {
        self.generation.get() == token
    }
}

/// Deferred task handed to a scheduler.
pub type Task = Box<dyn FnOnce()>;

/// Wrap `f` so it runs once, with the latest argument, after `delay_ms` of
/// quiet.
///
/// Outside the browser there is no timer loop and `f` runs immediately.
pub fn debounce<A, F>(delay_ms: u32, f: F) -> impl Fn(A)
where
    A: 'static,
    F: Fn(A) + 'static,
{
    #[cfg(feature = "hydrate")]
    let schedule = |delay_ms: u32, task: Task| {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    };
    #[cfg(not(feature = "hydrate"))]
    let schedule = |_delay_ms: u32, task: Task| task();

    debounce_with(schedule, delay_ms, f)
}

/// `debounce` over an explicit scheduler.
///
/// `schedule(delay_ms, task)` must run `task` once, after `delay_ms`. Every
/// call schedules a task; only the task from the latest call invokes `f`.
pub fn debounce_with<A, F, S>(schedule: S, delay_ms: u32, f: F) -> impl Fn(A)
where
    A: 'static,
    F: Fn(A) + 'static,
    S: Fn(u32, Task) + 'static,
{
    let gate = DebounceGate::default();
    let f = Rc::new(f);
    move |arg: A| {
        let token = gate.arm();
        let gate = gate.clone();
        let f = Rc::clone(&f);
        schedule(
            delay_ms,
            Box::new(move || {
                if gate.is_current(token) {
                    f(arg);
                }
            }),
        );
    }
}
