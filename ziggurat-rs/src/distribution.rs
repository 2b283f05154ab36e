//! Normal distribution with arbitrary mean and standard deviation.
//!
//! [`Normal`] holds nothing but its [`Param`]; every draw is an affine map of
//! a [`sample_standard`] variate. Parameters are not validated, a non-positive
//! stddev simply produces nonsense samples.

use core::fmt;
use core::str::FromStr;

use rand::Rng;
use rand::distr::Distribution;

use crate::error::ParseParamError;
use crate::float::ZigguratFloat;
use crate::normal::sample_standard;

/// Mean and standard deviation of a [`Normal`]
///
/// The text form is `"mean stddev"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param<F> {
    mean: F,
    stddev: F,
}

impl<F: ZigguratFloat> Param<F> {
    pub fn new(mean: F, stddev: F) -> Self {
        Self { mean, stddev }
    }

    /// Unit stddev around `mean`
    pub fn with_mean(mean: F) -> Self {
        Self::new(mean, F::one())
    }

    #[inline]
    pub fn mean(&self) -> F {
        self.mean
    }

    #[inline]
    pub fn stddev(&self) -> F {
        self.stddev
    }
}

impl<F: ZigguratFloat> Default for Param<F> {
    fn default() -> Self {
        Self::new(F::zero(), F::one())
    }
}

impl<F: ZigguratFloat> fmt::Display for Param<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mean, self.stddev)
    }
}

impl<F: ZigguratFloat> FromStr for Param<F> {
    type Err = ParseParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let mean = parse_field(tokens.next(), "mean")?;
        let stddev = parse_field(tokens.next(), "stddev")?;
        if let Some(extra) = tokens.next() {
            return Err(ParseParamError::Trailing(extra.to_owned()));
        }
        Ok(Self::new(mean, stddev))
    }
}

fn parse_field<F: FromStr>(token: Option<&str>, field: &'static str) -> Result<F, ParseParamError> {
    let token = token.ok_or(ParseParamError::Missing(field))?;
    token.parse().map_err(|_| ParseParamError::Invalid {
        field,
        token: token.to_owned(),
    })
}

/// Normal distribution sampled with the ziggurat method
///
/// ```
/// use rand::distr::Distribution;
/// use ziggurat_rs::{Jsf64, Normal, Param};
///
/// let mut rng = Jsf64::new(17);
/// let dist = Normal::new(10.0f64, 2.0);
/// let x = dist.sample(&mut rng);
/// let y = dist.sample_with(&mut rng, &Param::new(-10.0, 0.5));
/// assert!(x.is_finite() && y.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal<F> {
    param: Param<F>,
}

impl<F: ZigguratFloat> Normal<F> {
    pub fn new(mean: F, stddev: F) -> Self {
        Self::from_param(Param::new(mean, stddev))
    }

    /// Unit stddev around `mean`
    pub fn with_mean(mean: F) -> Self {
        Self::from_param(Param::with_mean(mean))
    }

    pub fn from_param(param: Param<F>) -> Self {
        Self { param }
    }

    #[inline]
    pub fn mean(&self) -> F {
        self.param.mean
    }

    #[inline]
    pub fn stddev(&self) -> F {
        self.param.stddev
    }

    #[inline]
    pub fn param(&self) -> Param<F> {
        self.param
    }

    pub fn set_param(&mut self, param: Param<F>) {
        self.param = param;
    }

    /// No-op, there is no cached state between draws
    pub fn reset(&mut self) {}

    /// Smallest value a draw can take
    pub fn min(&self) -> F {
        F::neg_infinity()
    }

    /// Largest value a draw can take
    pub fn max(&self) -> F {
        F::infinity()
    }

    /// Draw with `param` in place of the stored parameters
    #[inline]
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Param<F>) -> F {
        param.mean + param.stddev * sample_standard::<F, R>(rng)
    }

    /// Replace the parameters with the ones read from `input`.
    ///
    /// On error `self` is left as it was.
    pub fn read_from(&mut self, input: &str) -> Result<(), ParseParamError> {
        let param = input.parse()?;
        self.param = param;
        Ok(())
    }
}

impl<F: ZigguratFloat> Default for Normal<F> {
    fn default() -> Self {
        Self::from_param(Param::default())
    }
}

impl<F: ZigguratFloat> Distribution<F> for Normal<F> {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        self.sample_with(rng, &self.param)
    }
}

impl<F: ZigguratFloat> fmt::Display for Normal<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.param, f)
    }
}

impl<F: ZigguratFloat> FromStr for Normal<F> {
    type Err = ParseParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::from_param)
    }
}
