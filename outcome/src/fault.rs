//! Failure causes carried by [`Outcome`](crate::Outcome).
//!
//! A [`Fault`] is a shared-ownership handle over an immutable failure
//! record. Cloning a `Fault` is allocation-free and preserves identity:
//! a cause that travels through a chain of fallible steps arrives at the
//! caller as the same object that entered it, observable via
//! [`Fault::ptr_eq`].

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Classification of a failure cause.
#[derive(Debug, Error)]
enum FaultKind {
    /// A cause built from a plain message.
    #[error("{0}")]
    Message(String),
    /// The on-demand default for a failure whose cause was never supplied.
    #[error("unspecified failure of `{0}`")]
    Unspecified(&'static str),
    /// A panic captured by the [`catch`](fn@crate::catch) adapter.
    #[error("panic: {0}")]
    Panic(String),
    /// A wrapped source error from ordinary fallible code.
    #[error("{0}")]
    Wrapped(Box<dyn std::error::Error + Send + Sync>),
}

/// The failure cause carried by a failed [`Outcome`](crate::Outcome).
///
/// `Fault` is a cheap handle: clones share the same underlying record, so
/// moving a cause through combinators and propagation steps never copies
/// or re-wraps it.
#[derive(Clone)]
pub struct Fault {
    inner: Arc<FaultKind>,
}

impl Fault {
    /// Create a cause from a plain message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(FaultKind::Message(message.into()))
    }

    /// Wrap an ordinary error as a cause, keeping it reachable through
    /// [`std::error::Error::source`].
    pub fn caused_by<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::from_kind(FaultKind::Wrapped(Box::new(error)))
    }

    /// The generic cause synthesized when a failure carrying no cause is
    /// observed. Named after the success payload type it stands in for.
    pub(crate) fn unspecified(type_name: &'static str) -> Self {
        Self::from_kind(FaultKind::Unspecified(type_name))
    }

    /// A cause capturing a panic message.
    pub(crate) fn panicked(message: impl Into<String>) -> Self {
        Self::from_kind(FaultKind::Panic(message.into()))
    }

    fn from_kind(kind: FaultKind) -> Self {
        Self {
            inner: Arc::new(kind),
        }
    }

    /// Whether `self` and `other` are the same cause object, not merely
    /// causes with equal messages.
    pub fn ptr_eq(&self, other: &Fault) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Whether this is a synthesized default cause rather than one that
    /// was deliberately supplied.
    pub fn is_unspecified(&self) -> bool {
        matches!(*self.inner, FaultKind::Unspecified(_))
    }

    /// Whether this cause was captured from a panic.
    pub fn is_panic(&self) -> bool {
        matches!(*self.inner, FaultKind::Panic(_))
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.inner {
            FaultKind::Wrapped(source) => {
                let source: &(dyn std::error::Error + 'static) = &**source;
                Some(source)
            }
            _ => None,
        }
    }
}
