//! Banker's offer pricing.
//!
//! The offer is a fitted polynomial in the mean remaining value, the number of
//! cases left and the largest amount still in play. Whenever the polynomial
//! falls outside `(0, max]` the banker offers the plain mean instead, so the
//! result always lies between zero and the largest remaining value.

use crate::*;

const INTERCEPT: f64 = 12275.30;
const MEAN_COEF: f64 = 0.748;
const COUNT_COEF: f64 = -2714.74;
const MAX_COEF: f64 = -0.040;
const MEAN_SQ_COEF: f64 = 0.0000006986;
const COUNT_SQ_COEF: f64 = 32.623;

/// Offer for a pool of `count` cases holding `total` between them, `max` being
/// the largest single value among them. `count` must be non-zero.
pub fn banker_offer(total: Cash, count: usize, max: Cash) -> Cash {
    debug_assert!(count > 0, "offer requires at least one case in play");

    let mean = total / count as f64;
    let count = count as f64;
    let raw = INTERCEPT
        + MEAN_COEF * mean
        + COUNT_COEF * count
        + MAX_COEF * max
        + MEAN_SQ_COEF * mean * mean
        + COUNT_SQ_COEF * count * count;

    // a rounded mean of equal values can land one ulp above them
    let offer = if raw > 0.0 && raw <= max { raw } else { mean.min(max) };
    log::trace!("offer: mean={mean}, count={count}, max={max}, raw={raw} -> {offer}");
    offer
}

/// Offer for the given values still in play, `None` when the pool is empty.
pub fn offer_for_values<I>(values: I) -> Option<Cash>
where
    I: IntoIterator<Item = Cash>,
{
    let (total, count, max) = values
        .into_iter()
        .fold((0.0, 0usize, 0.0_f64), |(total, count, max), value| {
            (total + value, count + 1, max.max(value))
        });
    (count > 0).then(|| banker_offer(total, count, max))
}
