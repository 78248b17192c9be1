//! Distance-dependent fits of the Fourier coefficients.
//!
//! Every coefficient is an exponentially modified Gaussian multiplied by a polynomial that
//! vanishes at the reference distance `2^(1/6)`. The five variants differ only in how many
//! further roots (or a quadratic factor) they carry.

use crate::error::PairDistError;
use crate::math::constants::REFERENCE_DISTANCE;
use libm::erfc;
use std::f64::consts::SQRT_2;

/// Exponentially modified Gaussian distribution.
#[inline]
pub fn emg(r: f64, mu: f64, sigma: f64, lambda: f64) -> f64 {
    let shifted = r - mu;
    let spread = lambda * sigma * sigma;
    lambda / 2.0
        * (lambda / 2.0 * (spread - 2.0 * shifted)).exp()
        * erfc((spread - shifted) / (SQRT_2 * sigma))
}

/// The kernel arguments shared by every variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmgParams {
    /// Overall scale `a` of the coefficient.
    pub amplitude: f64,
    /// Mean of the Gaussian component.
    pub mu: f64,
    /// Width of the Gaussian component.
    pub sigma: f64,
    /// Rate of the exponential component.
    pub lambda: f64,
}

impl EmgParams {
    /// Kernel with the fixed root at the reference distance.
    #[inline]
    fn fixed_root(&self, r: f64) -> f64 {
        self.amplitude * emg(r, self.mu, self.sigma, self.lambda) * (REFERENCE_DISTANCE - r)
    }
}

/// The five fit-function shapes, in the order of their argument count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitVariant {
    /// `a, mu, sigma, lambda`
    FixedRoot,
    /// `+ b`: one variable root.
    OneRoot,
    /// `+ b, c`: two variable roots.
    TwoRoots,
    /// `+ b, c`: quadratic factor `r^2 + b r + c`.
    Quadratic,
    /// `+ b, c, d`: quadratic factor and one variable root.
    QuadraticRoot,
}

impl FitVariant {
    /// Number of scalar arguments, each produced by one parameter row.
    pub const fn arity(self) -> usize {
        match self {
            FitVariant::FixedRoot => 4,
            FitVariant::OneRoot => 5,
            FitVariant::TwoRoots | FitVariant::Quadratic => 6,
            FitVariant::QuadraticRoot => 7,
        }
    }

    /// Binds evaluated arguments to this variant.
    ///
    /// # Errors
    ///
    /// Returns `PairDistError::ArgumentCount` unless `args` holds exactly `self.arity()` values.
    pub fn bind(self, args: &[f64]) -> Result<FourierFit, PairDistError> {
        if args.len() != self.arity() {
            return Err(PairDistError::ArgumentCount {
                variant: self,
                expected: self.arity(),
                found: args.len(),
            });
        }

        let kernel = EmgParams {
            amplitude: args[0],
            mu: args[1],
            sigma: args[2],
            lambda: args[3],
        };
        let fit = match self {
            FitVariant::FixedRoot => FourierFit::FixedRoot(kernel),
            FitVariant::OneRoot => FourierFit::OneRoot { kernel, b: args[4] },
            FitVariant::TwoRoots => FourierFit::TwoRoots {
                kernel,
                b: args[4],
                c: args[5],
            },
            FitVariant::Quadratic => FourierFit::Quadratic {
                kernel,
                b: args[4],
                c: args[5],
            },
            FitVariant::QuadraticRoot => FourierFit::QuadraticRoot {
                kernel,
                b: args[4],
                c: args[5],
                d: args[6],
            },
        };
        Ok(fit)
    }
}

/// A fit function with all of its arguments fixed, ready to be evaluated over distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FourierFit {
    /// `a * EMG(r) * (2^(1/6) - r)`
    FixedRoot(EmgParams),
    /// `... * (b - r)`
    OneRoot { kernel: EmgParams, b: f64 },
    /// `... * (b - r) * (c - r)`
    TwoRoots { kernel: EmgParams, b: f64, c: f64 },
    /// `... * (r^2 + b r + c)`
    Quadratic { kernel: EmgParams, b: f64, c: f64 },
    /// `... * (r^2 + b r + c) * (d - r)`
    QuadraticRoot {
        kernel: EmgParams,
        b: f64,
        c: f64,
        d: f64,
    },
}

impl FourierFit {
    /// Evaluates the Fourier coefficient at particle distance `r`.
    #[inline]
    pub fn evaluate(&self, r: f64) -> f64 {
        match *self {
            FourierFit::FixedRoot(kernel) => kernel.fixed_root(r),
            FourierFit::OneRoot { kernel, b } => kernel.fixed_root(r) * (b - r),
            FourierFit::TwoRoots { kernel, b, c } => kernel.fixed_root(r) * (b - r) * (c - r),
            FourierFit::Quadratic { kernel, b, c } => kernel.fixed_root(r) * (r * r + b * r + c),
            FourierFit::QuadraticRoot { kernel, b, c, d } => {
                kernel.fixed_root(r) * (r * r + b * r + c) * (d - r)
            }
        }
    }

    /// The fit function this coefficient was bound to.
    pub fn variant(&self) -> FitVariant {
        match self {
            FourierFit::FixedRoot(_) => FitVariant::FixedRoot,
            FourierFit::OneRoot { .. } => FitVariant::OneRoot,
            FourierFit::TwoRoots { .. } => FitVariant::TwoRoots,
            FourierFit::Quadratic { .. } => FitVariant::Quadratic,
            FourierFit::QuadraticRoot { .. } => FitVariant::QuadraticRoot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const KERNEL: [f64; 4] = [1.7, 1.0, 0.05, 20.0];

    fn bind(variant: FitVariant, extra: &[f64]) -> FourierFit {
        let mut args = KERNEL.to_vec();
        args.extend_from_slice(extra);
        variant.bind(&args).unwrap()
    }

    #[test]
    fn test_emg_reference_value() {
        // lambda/2 * exp(lambda/2 * lambda sigma^2) * erfc(lambda sigma / sqrt 2) at r = mu
        let (sigma, lambda) = (0.5, 2.0);
        let expected = 1.0 * (0.5f64).exp() * erfc(1.0 / SQRT_2 * 0.5 * 2.0);
        assert_relative_eq!(emg(1.0, 1.0, sigma, lambda), expected, epsilon = 1e-14);
    }

    #[test]
    fn test_emg_integrates_to_one() {
        let (mu, sigma, lambda) = (1.0, 0.1, 5.0);
        let (lo, hi, n) = (-2.0, 6.0, 80_000);
        let step = (hi - lo) / n as f64;
        let integral: f64 = (0..n)
            .map(|i| emg(lo + (i as f64 + 0.5) * step, mu, sigma, lambda) * step)
            .sum();
        assert_relative_eq!(integral, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_every_variant_vanishes_at_reference_distance() {
        let fits = [
            bind(FitVariant::FixedRoot, &[]),
            bind(FitVariant::OneRoot, &[0.9]),
            bind(FitVariant::TwoRoots, &[0.9, 1.05]),
            bind(FitVariant::Quadratic, &[0.3, 0.4]),
            bind(FitVariant::QuadraticRoot, &[0.3, 0.4, 0.95]),
        ];
        for fit in fits {
            assert_relative_eq!(fit.evaluate(REFERENCE_DISTANCE), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_variable_roots() {
        assert_eq!(bind(FitVariant::OneRoot, &[0.9]).evaluate(0.9), 0.0);
        assert_eq!(bind(FitVariant::TwoRoots, &[0.9, 0.95]).evaluate(0.95), 0.0);
        assert_eq!(
            bind(FitVariant::QuadraticRoot, &[0.3, 0.4, 0.85]).evaluate(0.85),
            0.0
        );
    }

    #[test]
    fn test_variants_nest_multiplicatively() {
        let r = 0.93;
        let base = bind(FitVariant::FixedRoot, &[]).evaluate(r);
        assert_relative_eq!(
            bind(FitVariant::OneRoot, &[1.05]).evaluate(r),
            base * (1.05 - r)
        );
        assert_relative_eq!(
            bind(FitVariant::TwoRoots, &[1.05, 0.8]).evaluate(r),
            base * (1.05 - r) * (0.8 - r)
        );
        assert_relative_eq!(
            bind(FitVariant::Quadratic, &[0.3, 0.4]).evaluate(r),
            base * (r * r + 0.3 * r + 0.4)
        );
        assert_relative_eq!(
            bind(FitVariant::QuadraticRoot, &[0.3, 0.4, 1.1]).evaluate(r),
            base * (r * r + 0.3 * r + 0.4) * (1.1 - r)
        );
    }

    #[test]
    fn test_arity_and_bind_round_trip() {
        let variants = [
            FitVariant::FixedRoot,
            FitVariant::OneRoot,
            FitVariant::TwoRoots,
            FitVariant::Quadratic,
            FitVariant::QuadraticRoot,
        ];
        for variant in variants {
            let args = vec![0.5; variant.arity()];
            assert_eq!(variant.bind(&args).unwrap().variant(), variant);
        }
    }

    #[test]
    fn test_bind_rejects_wrong_argument_count() {
        let short = FitVariant::OneRoot.bind(&[1.0, 1.0, 0.1]);
        assert!(matches!(
            short,
            Err(PairDistError::ArgumentCount {
                variant: FitVariant::OneRoot,
                expected: 5,
                found: 3,
            })
        ));

        let long = FitVariant::FixedRoot.bind(&[0.5; 5]);
        assert!(matches!(
            long,
            Err(PairDistError::ArgumentCount {
                expected: 4,
                found: 5,
                ..
            })
        ));
        assert!(FitVariant::QuadraticRoot.bind(&[]).is_err());
    }
}
