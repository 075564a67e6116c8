//! Newton searches for a bracket on unbounded intervals.
//!
//! All three searches require `p` to be strictly monotonic on the searched
//! interval, so `p'` keeps a constant sign and Newton steps always move
//! towards the root (or past it, which gives a bracket).

use anyhow::anyhow;
use num::Zero;

use super::{bisection::bisect, Config};
use crate::{
    scalar::StrictSign, util::iterator::saturating_counter, Error, Poly, RealScalar, Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The first probe, one unit away from `start`
    fn unit_step<T: RealScalar>(self, start: T) -> T {
        match self {
            Self::Left => start - T::one(),
            Self::Right => start + T::one(),
        }
    }

    /// Order the current point and the probe into a bracket
    fn bracket<T: RealScalar>(self, current: T, probe: T) -> (T, T) {
        match self {
            Self::Left => (probe, current),
            Self::Right => (current, probe),
        }
    }
}

/// Whether `p` can still reach zero going from `start` towards infinity in
/// the given direction, given that `p` is monotonic there.
///
/// Towards `+inf`, `p` tends to the sign of the leading coefficient. Towards
/// `-inf`, it does so for even degrees and to the opposite sign for odd
/// degrees.
fn root_possible<T: RealScalar>(poly: &Poly<T>, start_value: T, direction: Direction) -> bool {
    let signs_match = start_value.same_sign(&poly.leading_coefficient());
    let degree_is_even = poly.degree() % 2 == 0;
    match direction {
        Direction::Right => !signs_match,
        Direction::Left => match (signs_match, degree_is_even) {
            (true, true) | (false, false) => false,
            (true, false) | (false, true) => true,
        },
    }
}

/// Search the whole real line, starting from zero. `p'` must have no real
/// roots.
pub(super) fn unbounded<T: RealScalar>(poly: &Poly<T>, config: &Config) -> Result<Option<T>> {
    log::trace!("searching (-inf, inf) {{poly: \"{poly}\"}}");

    let mut current = T::zero();
    let mut current_value = poly.eval(current);
    if current_value.is_zero() {
        return Ok(Some(current));
    }

    let diff = poly.diff();
    for i in saturating_counter() {
        check_max_iter(config, i)?;
        let probe = newton_step(&diff, current, current_value)?;
        if probe == current {
            log::trace!("stopping because newton step vanished {{x: {current:?}}}");
            return Ok(Some(current));
        }

        let (probe, probe_value) = pull_back_finite(poly, current, probe)?;
        if probe_value.is_zero() {
            return Ok(Some(probe));
        }
        if current_value.opposite_sign(&probe_value) {
            log::trace!("bracketed a root between {current:?} and {probe:?}");
            return if current < probe {
                bisect(poly, current, probe)
            } else {
                bisect(poly, probe, current)
            };
        }

        current = probe;
        current_value = probe_value;
    }
    unreachable!()
}

/// Search `[start, +inf)`, `start` is usually the largest critical point.
pub(super) fn rightward<T: RealScalar>(
    poly: &Poly<T>,
    start: T,
    config: &Config,
) -> Result<Option<T>> {
    one_sided(poly, start, Direction::Right, config)
}

/// Search `(-inf, start]`, `start` is usually the smallest critical point.
pub(super) fn leftward<T: RealScalar>(
    poly: &Poly<T>,
    start: T,
    config: &Config,
) -> Result<Option<T>> {
    one_sided(poly, start, Direction::Left, config)
}

fn one_sided<T: RealScalar>(
    poly: &Poly<T>,
    start: T,
    direction: Direction,
    config: &Config,
) -> Result<Option<T>> {
    log::trace!("searching {direction:?} of {start:?} {{poly: \"{poly}\"}}");

    let start_value = poly.eval(start);
    if start_value.is_zero() {
        return Ok(Some(start));
    }

    if !root_possible(poly, start_value, direction) {
        log::trace!("stopping because end behaviour rules out a root {{start_value: {start_value:?}}}");
        return Ok(None);
    }

    let diff = poly.diff();
    let mut current = start;
    let mut current_value = start_value;
    // p'(start) is usually zero, so the first probe is not a newton step
    let mut probe = direction.unit_step(start);
    for i in saturating_counter() {
        let probe_value;
        (probe, probe_value) = pull_back_finite(poly, current, probe)?;
        if probe_value.is_zero() {
            return Ok(Some(probe));
        }
        if current_value.opposite_sign(&probe_value) {
            log::trace!("bracketed a root between {current:?} and {probe:?}");
            let (left, right) = direction.bracket(current, probe);
            return bisect(poly, left, right);
        }

        current = probe;
        current_value = probe_value;

        check_max_iter(config, i)?;
        probe = newton_step(&diff, current, current_value)?;
        if probe == current {
            log::trace!("stopping because newton step vanished {{x: {current:?}}}");
            return Ok(Some(current));
        }
    }
    unreachable!()
}

fn check_max_iter(config: &Config, iterations: usize) -> Result<()> {
    if config.max_iter.is_some_and(|max| iterations >= max) {
        log::trace!("did not converge {{iterations: {iterations}}}");
        return Err(Error::NoConverge { iterations });
    }
    Ok(())
}

/// Pull `probe` back towards `current` until `p(probe)` is finite.
///
/// A long Newton jump can land where the powers of `x` overflow, even though
/// the root itself is well inside the finite range.
fn pull_back_finite<T: RealScalar>(poly: &Poly<T>, current: T, mut probe: T) -> Result<(T, T)> {
    let two = T::one() + T::one();
    loop {
        let probe_value = poly.eval(probe);
        if probe_value.is_finite() {
            return Ok((probe, probe_value));
        }
        // halve each side first, `probe - current` may overflow
        let halved = current / two + probe / two;
        if halved == probe || halved == current {
            return Err(anyhow!("polynomial is not finite near {current:?}").into());
        }
        log::trace!("pulling back non-finite probe {{probe: {probe:?}, halved: {halved:?}}}");
        probe = halved;
    }
}

/// `x - p(x) / p'(x)`
fn newton_step<T: RealScalar>(diff: &Poly<T>, x: T, px: T) -> Result<T> {
    let pdx = diff.eval(x);
    if pdx.is_zero() {
        // p' has a constant sign on every searched interval
        return Err(anyhow!("derivative vanished at {x:?}, polynomial is not monotonic here").into());
    }
    let next = x - px / pdx;
    if !next.is_finite() {
        return Err(anyhow!("newton step from {x:?} left the finite range").into());
    }
    Ok(next)
}
