//! The short-circuit propagation protocol.
//!
//! A fallible step is always already resolved by the time anything looks
//! at it, so "waiting" on one reduces to a single branch: continue with
//! the payload, or hand the cause to the enclosing function. [`Propagate`]
//! is that two-operation contract, and [`propagate!`](macro@crate::propagate)
//! is the statement form that drives it. A chain of `propagate!` steps
//! executes as plain sequential calls with no yielded control, no
//! scheduling, and no unwinding between steps.

use std::any;
use std::ops::ControlFlow;

use crate::fault::Fault;
use crate::outcome::Outcome;

/// Types a [`propagate!`](macro@crate::propagate) step can branch on and an
/// enclosing function can absorb a cause into.
pub trait Propagate: Sized {
    /// The payload handed to straight-line code on the success path.
    type Output;

    /// Resolve into either the payload or the cause to carry out.
    /// A failure with no stored cause produces the synthesized default
    /// here, at the moment of observation.
    fn branch(self) -> ControlFlow<Fault, Self::Output>;

    /// Build the enclosing function's own failure from a cause carried
    /// out of an inner step. The cause is stored as-is, identity intact.
    fn absorb(fault: Fault) -> Self;
}

impl<T> Propagate for Outcome<T> {
    type Output = T;

    fn branch(self) -> ControlFlow<Fault, T> {
        match self {
            Outcome::Ok(value) => ControlFlow::Continue(value),
            Outcome::Fail(cause) => ControlFlow::Break(
                cause.unwrap_or_else(|| Fault::unspecified(any::type_name::<T>())),
            ),
        }
    }

    fn absorb(fault: Fault) -> Self {
        Outcome::Fail(Some(fault))
    }
}

/// Evaluate a fallible step, yielding its payload or returning its cause
/// from the enclosing function.
///
/// The enclosing function's return type decides how the cause is
/// absorbed, so the macro only works inside functions returning a
/// [`Propagate`] type.
///
/// ```
/// use outcome::{propagate, Fault, Outcome};
///
/// fn read_port(raw: &str) -> Outcome<u16> {
///     let port = propagate!(Outcome::from_result(raw.parse::<u16>()));
///     Outcome::Ok(port)
/// }
///
/// assert_eq!(read_port("8080"), Outcome::Ok(8080));
/// assert!(read_port("none").is_fail());
/// ```
#[macro_export]
macro_rules! propagate {
    ($step:expr) => {
        match $crate::Propagate::branch($step) {
            ::core::ops::ControlFlow::Continue(value) => value,
            ::core::ops::ControlFlow::Break(fault) => {
                return $crate::Propagate::absorb(fault);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_continues_with_payload() {
        match Outcome::Ok(5).branch() {
            ControlFlow::Continue(value) => assert_eq!(value, 5),
            ControlFlow::Break(_) => panic!("success must not break"),
        }
    }

    #[test]
    fn test_branch_carries_cause_out_by_identity() {
        let cause = Fault::new("stop");
        let failed: Outcome<i32> = Outcome::from_fault(cause.clone());
        match failed.branch() {
            ControlFlow::Break(fault) => assert!(fault.ptr_eq(&cause)),
            ControlFlow::Continue(_) => panic!("failure must not continue"),
        }
    }

    #[test]
    fn test_branch_synthesizes_missing_cause() {
        let bare: Outcome<String> = Outcome::Fail(None);
        match bare.branch() {
            ControlFlow::Break(fault) => {
                assert!(fault.is_unspecified());
                assert!(fault.to_string().contains("String"));
            }
            ControlFlow::Continue(_) => panic!("failure must not continue"),
        }
    }

    #[test]
    fn test_absorb_stores_cause() {
        let cause = Fault::new("carried");
        let absorbed: Outcome<i32> = Outcome::absorb(cause.clone());
        assert!(absorbed.fault().unwrap().ptr_eq(&cause));
    }

    #[test]
    fn test_chain_stops_at_first_failure() {
        use std::cell::Cell;

        let reached_last = Cell::new(false);
        let cause = Fault::new("middle step refused");

        let first = || Outcome::Ok(1);
        let second = |_: i32| -> Outcome<i32> { Outcome::from_fault(cause.clone()) };
        let third = |v: i32| {
            reached_last.set(true);
            Outcome::Ok(v)
        };

        let run = || -> Outcome<i32> {
            let a = propagate!(first());
            let b = propagate!(second(a));
            let c = propagate!(third(b));
            Outcome::Ok(c)
        };

        let result = run();
        assert!(!reached_last.get());
        assert!(result.fault().unwrap().ptr_eq(&cause));
    }
}
