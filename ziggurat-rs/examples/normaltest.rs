//! Histogram of ziggurat normal samples against the expected bin counts.
//!
//! Prints `center observed expected` per bin, ready for gnuplot.

use gpoint::GPoint;
use rand::distr::Distribution;
use std::f64::consts::FRAC_1_SQRT_2;
use ziggurat_rs::{Jsf64, Normal};

const NV: usize = 10000000;
const NB: usize = 100;
const MEAN: f64 = 0.0;
const SD: f64 = 1.0;

fn main() {
    let mut rng = Jsf64::default();
    let dist = Normal::new(MEAN, SD);

    // Heap-allocated buffers
    let variate: Vec<f64> = (0..NV).map(|_| dist.sample(&mut rng)).collect();
    let mut bin = vec![0usize; NB];

    let minv = variate.iter().copied().fold(f64::INFINITY, f64::min);
    let maxv = variate.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let binwidth = (maxv - minv) / NB as f64;

    // Normalization constant
    let a = NV as f64 * libm::erf(binwidth * 0.5 * FRAC_1_SQRT_2 / SD);

    let b = -0.5 / (SD * SD);

    // Histogram
    for &v in &variate {
        let mut j = ((v - minv) / binwidth).floor() as usize;
        if j >= NB {
            j = NB - 1; // guard against max edge
        }
        bin[j] += 1;
    }

    // Output
    (0..NB).for_each(|i| {
        let x = binwidth * (i as f64 + 0.5) + minv;
        let expected = a * ((x - MEAN) * (x - MEAN) * b).exp();
        println!("{} {} {}", GPoint(x), bin[i], GPoint(expected));
    });
}
