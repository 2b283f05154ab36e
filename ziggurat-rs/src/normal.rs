//! Standard normal variates by the ziggurat method.
//!
//! A draw picks one of the horizontal strips and a signed position across it
//! from a single engine word. Points under the rectangle shared with the strip
//! above are returned straight away, which covers nearly every draw. The rest
//! go through the tail (base strip) or an exact wedge test, and a rejected
//! wedge restarts from a fresh strip.

use rand::Rng;
use rand::distr::Distribution;

use crate::float::ZigguratFloat;

/// Standard normal distribution (mean 0, stddev 1)
///
/// Works for `f32` and `f64`, each with its own table:
///
/// ```
/// use rand::distr::Distribution;
/// use ziggurat_rs::{Jsf64, StandardNormal};
///
/// let mut rng = Jsf64::new(1);
/// let x: f64 = StandardNormal.sample(&mut rng);
/// let y: f32 = StandardNormal.sample(&mut rng);
/// assert!(x.is_finite() && y.is_finite());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardNormal;

impl<F: ZigguratFloat> Distribution<F> for StandardNormal {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        sample_standard(rng)
    }
}

/// Draw one standard normal variate
#[inline]
pub fn sample_standard<F: ZigguratFloat, R: Rng + ?Sized>(rng: &mut R) -> F {
    let table = F::table();
    let (strip, fraction) = F::draw_strip(rng);
    let x = fraction * table[strip];

    // About 97% of f64 draws return here on first try
    if x.abs() < table[strip + 1] {
        return x;
    }

    sample_slow(rng, strip, x)
}

/// Slow path for the normal distribution (tail and wedge rejection)
#[cold]
fn sample_slow<F: ZigguratFloat, R: Rng + ?Sized>(rng: &mut R, mut strip: usize, mut x: F) -> F {
    let table = F::table();

    loop {
        if x.abs() < table[strip + 1] {
            return x;
        }

        if strip == 0 {
            let tail = sample_tail(table[1], rng);
            return if x < F::zero() { -tail } else { tail };
        }

        let bottom = table[strip].gauss_kernel();
        let top = table[strip + 1].gauss_kernel();
        if bottom + F::draw_uniform(rng) * (top - bottom) < x.gauss_kernel() {
            return x;
        }

        let (next, fraction) = F::draw_strip(rng);
        strip = next;
        x = fraction * table[strip];
    }
}

/// Draw from the normal tail beyond `edge` (Marsaglia's method)
///
/// Generate `x = -ln(U_1) / edge`, `y = -ln(U_2)` until `y + y >= x * x`.
pub fn sample_tail<F: ZigguratFloat, R: Rng + ?Sized>(edge: F, rng: &mut R) -> F {
    loop {
        let x = F::draw_exp1(rng) / edge;
        let y = F::draw_exp1(rng);
        if y + y >= x * x {
            return edge + x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Jsf64;
    use crate::gauss::{cdf, tail_mass};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Two-sided Kolmogorov-Smirnov statistic against the standard normal
    fn ks_statistic(mut samples: Vec<f64>) -> f64 {
        samples.sort_by(f64::total_cmp);
        let n = samples.len() as f64;
        samples
            .iter()
            .enumerate()
            .map(|(rank, &x)| {
                let reference = cdf(x);
                let above = ((rank + 1) as f64 / n - reference).abs();
                let below = (reference - rank as f64 / n).abs();
                above.max(below)
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_valid_numbers() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..1000 {
            let x: f64 = StandardNormal.sample(&mut rng);
            let y: f32 = StandardNormal.sample(&mut rng);
            assert!(x.is_finite(), "f64 sample {} not finite", x);
            assert!(y.is_finite(), "f32 sample {} not finite", y);
        }
    }

    #[test]
    fn test_normal_f64_moments() {
        let mut rng = Jsf64::new(42);
        let n = 10000;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;

        for _ in 0..n {
            let x: f64 = sample_standard(&mut rng);
            sum += x;
            sum_sq += x * x;
        }

        let mean = sum / n as f64;
        let variance = sum_sq / n as f64 - mean * mean;

        assert!(mean.abs() < 0.1, "Mean should be close to 0, got {}", mean);
        assert!(
            (variance - 1.0).abs() < 0.1,
            "Variance should be close to 1, got {}",
            variance
        );
    }

    #[test]
    fn test_normal_f32_moments() {
        let mut rng = Jsf64::new(42);
        let n = 10000;
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;

        for _ in 0..n {
            let x = f64::from(sample_standard::<f32, _>(&mut rng));
            sum += x;
            sum_sq += x * x;
        }

        let mean = sum / n as f64;
        let variance = sum_sq / n as f64 - mean * mean;

        assert!(mean.abs() < 0.1, "Mean should be close to 0, got {}", mean);
        assert!(
            (variance - 1.0).abs() < 0.1,
            "Variance should be close to 1, got {}",
            variance
        );
    }

    #[test]
    fn test_positive_and_negative() {
        let mut rng = Jsf64::new(3);
        let n = 1000;
        let positive = (0..n)
            .filter(|_| sample_standard::<f64, _>(&mut rng) >= 0.0)
            .count();
        let ratio = positive as f64 / n as f64;
        assert!((ratio - 0.5).abs() < 0.05, "Positive ratio {}", ratio);
    }

    #[test]
    fn test_ks_f64() {
        let mut rng = Jsf64::new(2024);
        let n = 5000;
        let samples: Vec<f64> = (0..n).map(|_| sample_standard(&mut rng)).collect();
        let d = ks_statistic(samples);
        assert!(d < 1.63 / (n as f64).sqrt(), "KS statistic {}", d);
    }

    #[test]
    fn test_ks_f32() {
        let mut rng = Jsf64::new(2024);
        let n = 5000;
        let samples: Vec<f64> = (0..n)
            .map(|_| f64::from(sample_standard::<f32, _>(&mut rng)))
            .collect();
        let d = ks_statistic(samples);
        assert!(d < 1.63 / (n as f64).sqrt(), "KS statistic {}", d);
    }

    #[test]
    fn test_tail_frequency() {
        // Beyond the f64 tail edge with probability about 5.8e-4
        let edge = f64::table()[1];
        let mut rng = Jsf64::new(99);
        let n = 200_000;
        let beyond = (0..n)
            .filter(|_| sample_standard::<f64, _>(&mut rng).abs() > edge)
            .count();
        let expected = 2.0 * tail_mass(edge) * n as f64;
        assert!(
            (beyond as f64 - expected).abs() < 5.0 * expected.sqrt(),
            "expected about {} tail draws, got {}",
            expected,
            beyond
        );
    }

    #[test]
    fn test_sample_tail() {
        let mut rng = Jsf64::new(5);
        let edge = f64::table()[1];
        let n = 10000;
        let mut sum = 0.0;
        for _ in 0..n {
            let x = sample_tail(edge, &mut rng);
            assert!(x >= edge, "tail sample {} below edge {}", x, edge);
            sum += x - edge;
        }
        // Mills ratio at the edge, less the edge
        let excess = sum / n as f64;
        assert!((excess - 0.255).abs() < 0.02, "mean excess {}", excess);
    }
}
