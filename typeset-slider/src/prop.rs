//! Observer handles for slider arguments.
//!
//! Argument structs are rebuilt on every configuration pass, so the
//! observers they carry must be cheap to clone and comparable. Two handles
//! are equal when they share the same closure allocation.

use std::{fmt, sync::Arc};

/// Shared `Fn(T) -> R` observer, compared by identity.
///
/// Used for the touch-start, touch-end and value-changed observers.
pub struct CallbackWith<T, R = ()> {
    handler: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Wraps `handler`.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invokes the observer.
    pub fn call(&self, value: T) -> R {
        (self.handler)(value)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn clones_share_one_observer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let observer = CallbackWith::new(move |n: usize| {
            counter.fetch_add(n, Ordering::SeqCst);
        });
        let copy = observer.clone();

        assert_eq!(observer, copy);
        observer.call(2);
        copy.call(3);
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn separate_closures_differ() {
        let a = CallbackWith::new(|_: f32| {});
        let b = CallbackWith::new(|_: f32| {});
        assert_ne!(a, b);
    }
}
