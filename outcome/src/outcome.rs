//! The success-or-failure value at the center of the crate.
//!
//! [`Outcome`] is a two-variant sum: a success carrying a payload, or a
//! failure carrying an *optional* [`Fault`]. Making the cause optional is
//! deliberate: the zero-value of the type is a failure with no cause at
//! all, and the generic default cause is synthesized only at the moment
//! something observes it, never stored back into the value.

use std::any;
use std::panic;

use crate::fault::Fault;

/// A success-with-a-value or failure-with-a-cause.
///
/// Failure causes are compared by identity (see [`Fault::ptr_eq`]) and
/// never by the equality of this type: two failed `Outcome`s are always
/// equal to each other, whatever their causes.
///
/// # Examples
///
/// ```
/// use outcome::{Fault, Outcome};
///
/// let ok = Outcome::Ok(3);
/// assert!(ok.is_ok());
/// assert_eq!(ok, 3);
///
/// let failed: Outcome<i32> = Outcome::from_fault(Fault::new("no threes left"));
/// assert!(failed.is_fail());
/// assert_eq!(failed.unwrap_or(0), 0);
/// ```
#[must_use = "an `Outcome` may carry a failure, which should be observed or propagated"]
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// Success, carrying the payload.
    Ok(T),
    /// Failure. `None` means the cause was never supplied; observing it
    /// synthesizes a generic cause naming the payload type.
    Fail(Option<Fault>),
}

impl<T> Outcome<T> {
    /// A failure carrying the given cause.
    pub fn from_fault(fault: Fault) -> Self {
        Outcome::Fail(Some(fault))
    }

    /// Bring an ordinary fallible computation's result into the failure
    /// channel, wrapping its error as a [`Fault`].
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Fail(Some(Fault::caused_by(error))),
        }
    }

    /// Leave the failure channel, surfacing the (possibly synthesized)
    /// cause as an ordinary error value.
    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Fail(cause) => Err(cause.unwrap_or_else(Self::default_fault)),
        }
    }

    /// Whether this is a success.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Whether this is a failure.
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    /// Borrow the success payload, if any.
    pub fn as_ok(&self) -> Option<&T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Fail(_) => None,
        }
    }

    /// The failure cause, if this is a failure.
    ///
    /// A failure always yields `Some`: when no cause was supplied, a
    /// generic cause naming `T` is synthesized for this call. Synthesized
    /// causes are not retained, so repeated calls on the same cause-less
    /// failure return equal-looking but distinct objects.
    pub fn fault(&self) -> Option<Fault> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Fail(Some(fault)) => Some(fault.clone()),
            Outcome::Fail(None) => Some(Self::default_fault()),
        }
    }

    /// Return the payload, or re-raise the cause as a panic whose payload
    /// is the [`Fault`] itself.
    ///
    /// The raised cause keeps its identity: [`catch`](fn@crate::catch) around
    /// a chain that ends in `unwrap` recovers the exact cause object. The
    /// default panic hook renders such payloads opaquely; prefer
    /// [`Outcome::map_or_else`] or [`Outcome::into_result`] at the edge of
    /// the program.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(cause) => raise(cause.unwrap_or_else(Self::default_fault)),
        }
    }

    /// Like [`Outcome::unwrap`], panicking with `message` and the rendered
    /// cause instead of the cause object.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(cause) => {
                let fault = cause.unwrap_or_else(Self::default_fault);
                panic!("{message}: {fault}")
            }
        }
    }

    /// Return the payload, or `fallback` on failure. Never panics.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(_) => fallback,
        }
    }

    /// Return the payload, or compute a fallback from the (possibly
    /// synthesized) cause. Never panics.
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(cause) => fallback(cause.unwrap_or_else(Self::default_fault)),
        }
    }

    /// Fail-fast guard: does nothing on success, re-raises the cause on
    /// failure. The raised cause shares identity with the stored one.
    #[track_caller]
    pub fn ensure_ok(&self) {
        if let Outcome::Fail(cause) = self {
            raise(cause.clone().unwrap_or_else(Self::default_fault));
        }
    }

    /// Downgrade to a plain optional, discarding the cause.
    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Fail(_) => None,
        }
    }

    /// Apply `f` to the payload, passing a failure through untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Fail(cause) => Outcome::Fail(cause),
        }
    }

    /// Chain a dependent fallible step. On failure, `f` is never invoked
    /// and the cause passes through untouched.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Fail(cause) => Outcome::Fail(cause),
        }
    }

    /// Two-step chain: run `step` against the payload, then combine the
    /// original payload with the intermediate value. Fails if either step
    /// fails, without invoking anything downstream of the failure.
    pub fn and_then_with<U, R, S, C>(self, step: S, combine: C) -> Outcome<R>
    where
        S: FnOnce(&T) -> Outcome<U>,
        C: FnOnce(T, U) -> R,
    {
        match self {
            Outcome::Ok(value) => match step(&value) {
                Outcome::Ok(mid) => Outcome::Ok(combine(value, mid)),
                Outcome::Fail(cause) => Outcome::Fail(cause),
            },
            Outcome::Fail(cause) => Outcome::Fail(cause),
        }
    }

    /// Total case analysis: exactly one of the two closures runs, and its
    /// value is returned. The failure arm receives the (possibly
    /// synthesized) cause. This is the one exit from the failure channel
    /// that can never re-raise.
    pub fn map_or_else<R, D, F>(self, on_fail: D, on_ok: F) -> R
    where
        D: FnOnce(Fault) -> R,
        F: FnOnce(T) -> R,
    {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Fail(cause) => on_fail(cause.unwrap_or_else(Self::default_fault)),
        }
    }

    /// Apply `f` to the cause of a failure, passing a success through.
    /// A cause-less failure is observed here, so `f` receives the
    /// synthesized default.
    pub fn map_fault<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(Fault) -> Fault,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Fail(cause) => {
                Outcome::Fail(Some(f(cause.unwrap_or_else(Self::default_fault))))
            }
        }
    }

    /// Recover from a failure with an alternative fallible computation.
    pub fn or_else<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(Fault) -> Outcome<T>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Fail(cause) => f(cause.unwrap_or_else(Self::default_fault)),
        }
    }

    pub(crate) fn default_fault() -> Fault {
        Fault::unspecified(any::type_name::<T>())
    }
}

/// The zero-value of `Outcome` is a failure with no cause materialized.
impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Outcome::Fail(None)
    }
}

impl<T> From<Fault> for Outcome<T> {
    fn from(fault: Fault) -> Self {
        Outcome::Fail(Some(fault))
    }
}

/// Two successes compare by payload; two failures are always equal,
/// whatever their causes.
impl<T: PartialEq> PartialEq for Outcome<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Outcome::Ok(a), Outcome::Ok(b)) => a == b,
            (Outcome::Fail(_), Outcome::Fail(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Outcome<T> {}

/// An `Outcome` equals a bare payload exactly when it is a success
/// holding an equal payload, so call sites can compare without
/// unwrapping.
impl<T: PartialEq> PartialEq<T> for Outcome<T> {
    fn eq(&self, other: &T) -> bool {
        matches!(self, Outcome::Ok(value) if value == other)
    }
}

#[track_caller]
fn raise(fault: Fault) -> ! {
    panic::panic_any(fault)
}
