//! Binding in-flight requests to the lifetime of whoever issued them.
//!
//! A component owns one [`RequestScope`]. Every request takes a
//! [`ScopeToken`] before it starts and checks [`ScopeToken::is_current`]
//! before applying its result. Invalidating the scope (on unmount, or when
//! the component's key input changes) turns every outstanding token stale,
//! so late responses are dropped instead of written into state nobody owns
//! anymore.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    generation: Rc<Cell<u64>>,
}

#[derive(Debug, Clone)]
pub struct ScopeToken {
    issued_at: u64,
    generation: Rc<Cell<u64>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> ScopeToken {
        ScopeToken {
            issued_at: self.generation.get(),
            generation: self.generation.clone(),
        }
    }

    /// Make every token issued so far stale.
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

impl PartialEq for RequestScope {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.generation, &other.generation)
    }
}

impl ScopeToken {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued_at
    }

    /// Run `apply` with `value` only if the scope is still current.
    /// Returns whether it ran.
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_current() {
            apply(value);
            true
        } else {
            tracing::debug!("Discarding response for an invalidated scope");
            false
        }
    }
}
