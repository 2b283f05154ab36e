//! Bracketing and bisection for monotone scalar functions.
//!
//! Both work on the sign of `f` only; a zero counts as positive.

use log::{debug, trace};

use crate::error::TableError;

#[inline]
fn negative(y: f64) -> bool {
    y < 0.0
}

/// Bisect `[min, max]` until `stop(lo, hi)` holds.
///
/// `f(min)` and `f(max)` must differ in sign; nothing checks this, and the
/// result is meaningless otherwise.
pub fn bisect<F, S>(mut f: F, mut min: f64, mut max: f64, mut stop: S) -> (f64, f64)
where
    F: FnMut(f64) -> f64,
    S: FnMut(f64, f64) -> bool,
{
    let mut fmin = f(min);
    let mut steps = 0usize;

    while !stop(min, max) {
        let mid = (min + max) / 2.0;
        let fmid = f(mid);

        if negative(fmid) != negative(fmin) {
            max = mid;
        } else {
            min = mid;
            fmin = fmid;
        }
        steps += 1;
        trace!("bisect step {}: [{:e}, {:e}]", steps, min, max);
    }

    debug!("bisection stopped after {} steps at [{}, {}]", steps, min, max);
    (min, max)
}

/// Stop condition: no double lies strictly between `lo` and `hi`
#[inline]
pub fn adjacent(lo: f64, hi: f64) -> bool {
    libm::nextafter(lo, hi) >= hi
}

/// Grow `[seed, seed]` geometrically until `f` changes sign across it.
///
/// Each round maps `min -> (min - delta) / scale` and
/// `max -> (max + delta) * scale`. Gives up after `max_expansions` rounds.
pub fn find_bracket<F>(
    mut f: F,
    seed: f64,
    delta: f64,
    scale: f64,
    max_expansions: usize,
) -> Result<(f64, f64), TableError>
where
    F: FnMut(f64) -> f64,
{
    if scale.is_nan() || scale <= 1.0 {
        return Err(TableError::InvalidScale(scale));
    }

    let mut min = seed;
    let mut max = seed;

    for expansion in 1..=max_expansions {
        min = (min - delta) / scale;
        max = (max + delta) * scale;

        let (fmin, fmax) = (f(min), f(max));
        trace!("expansion {}: f({}) = {}, f({}) = {}", expansion, min, fmin, max, fmax);

        if negative(fmin) != negative(fmax) {
            debug!("bracket [{}, {}] after {} expansions", min, max, expansion);
            return Ok((min, max));
        }
    }

    Err(TableError::NoBracket {
        seed,
        expansions: max_expansions,
    })
}
