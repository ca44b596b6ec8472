//! Adapter between panicking code and the failure channel.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::fault::Fault;
use crate::outcome::Outcome;

/// Run `f`, capturing any panic as a failed [`Outcome`] instead of
/// letting it unwind further. On success the return value is wrapped as
/// a success; `catch` itself never panics.
///
/// A panic whose payload is a [`Fault`] (the deliberate re-raise from
/// [`Outcome::unwrap`] or [`Outcome::ensure_ok`]) is captured as that
/// exact cause object, identity intact. String panics keep their message;
/// any other payload becomes an opaque panic cause.
///
/// The global panic hook still runs before the unwind is captured, so the
/// process may print a panic report even though `catch` absorbs it.
///
/// ```
/// use outcome::catch;
///
/// let captured = catch(|| -> u32 { panic!("no luck") });
/// assert!(captured.is_fail());
/// assert!(captured.fault().unwrap().is_panic());
/// ```
pub fn catch<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => {
            let fault = fault_from_panic(payload);
            debug!(cause = %fault, "captured unwind as failure");
            Outcome::Fail(Some(fault))
        }
    }
}

fn fault_from_panic(payload: Box<dyn Any + Send>) -> Fault {
    let payload = match payload.downcast::<Fault>() {
        Ok(fault) => return *fault,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<String>() {
        Ok(message) => return Fault::panicked(*message),
        Err(payload) => payload,
    };
    match payload.downcast::<&'static str>() {
        Ok(message) => Fault::panicked(*message),
        Err(_) => Fault::panicked("opaque panic payload"),
    }
}
