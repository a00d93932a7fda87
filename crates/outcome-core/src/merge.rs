//! Merge module - folding many outcomes into one
//!
//! Both folds inspect every input; nothing short-circuits on the first
//! failure, so every error is collected in input order.

use crate::{Error, ErrorList, Fallible, Outcome, ValueOutcome};
use tracing::trace;

/// Merge outcomes into a single [`Outcome`]
///
/// - no inputs, or only successes: [`Outcome::ok`]
/// - otherwise: a failure whose errors are every input's errors
///   concatenated in input order
///
/// Inputs may be owned, borrowed, or mixed through `&dyn Fallible`.
///
/// # Examples
///
/// ```
/// use outcome_core::{merge_results, Fallible, Outcome, ValueOutcome};
///
/// let saved = Outcome::fail_message("a");
/// let counted = ValueOutcome::ok(3);
/// let indexed = Outcome::fail_message("b");
///
/// let merged = merge_results([&saved as &dyn Fallible, &counted, &indexed]);
/// assert_eq!(merged.failure().unwrap().messages(), vec!["a", "b"]);
/// ```
pub fn merge_results<I>(outcomes: I) -> Outcome
where
    I: IntoIterator,
    I::Item: Fallible,
{
    let mut errors = Vec::new();
    let inspected = collect_errors(&mut errors, outcomes);

    trace!(inspected, errors = errors.len(), "Merged outcomes");
    Outcome::from_collected(errors)
}

/// Merge value outcomes, keeping the last value convertible into `R`
///
/// - any failure among the inputs: a failure carrying every input's
///   errors in input order
/// - all successes: the last payload that converts into `R` (through
///   `TryFrom`) is kept. If none converted, or the kept value equals
///   `R::default()`, the merge is a failure. All inputs succeeded, so there
///   are no errors to report and the failure carries only the canonical
///   empty error.
///
/// The second rule means a merge cannot tell "no value was seen" apart from
/// "the default value was seen": merging successes of `0i32` into `i32`
/// fails.
///
/// Convertibility is decided per value, not per type. With a fallible
/// `TryFrom` a payload that does not fit is skipped: merging `9i64` then
/// `300i64` into `u8` keeps `9`. Pick an `R` with an infallible `From<T>`
/// to keep strictly the last payload.
///
/// # Examples
///
/// ```
/// use outcome_core::{merge_values, Error, ValueOutcome};
///
/// let kept: ValueOutcome<i64> = merge_values([ValueOutcome::ok(1i32), ValueOutcome::ok(2)]);
/// assert_eq!(kept.into_value(), 2);
///
/// let zero: ValueOutcome<i32> = merge_values([ValueOutcome::ok(0i32)]);
/// assert_eq!(zero.errors(), &[Error::EMPTY]);
/// ```
pub fn merge_values<T, R, I>(outcomes: I) -> ValueOutcome<R>
where
    I: IntoIterator<Item = ValueOutcome<T>>,
    R: TryFrom<T> + Default + PartialEq,
{
    let mut errors = Vec::new();
    let mut kept: Option<R> = None;
    let mut inspected = 0usize;

    for outcome in outcomes {
        inspected += 1;
        match outcome {
            ValueOutcome::Success(value) => {
                if let Ok(value) = R::try_from(value) {
                    kept = Some(value);
                }
            }
            ValueOutcome::Failure(list) => errors.extend(list),
        }
    }

    trace!(
        inspected,
        errors = errors.len(),
        kept = kept.is_some(),
        "Merged value outcomes"
    );

    if let Some(list) = ErrorList::new(errors) {
        return ValueOutcome::Failure(list);
    }

    match kept {
        Some(value) if value != R::default() => ValueOutcome::Success(value),
        _ => ValueOutcome::fail(),
    }
}

/// Append every error of `outcomes` to `errors`; returns how many were inspected
pub(crate) fn collect_errors<I>(errors: &mut Vec<Error>, outcomes: I) -> usize
where
    I: IntoIterator,
    I::Item: Fallible,
{
    let mut inspected = 0;
    for outcome in outcomes {
        inspected += 1;
        errors.extend_from_slice(outcome.errors());
    }
    inspected
}
