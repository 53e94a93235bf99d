//! The numeric kernel: primitive arithmetic plus a power function for
//! arbitrary real exponents built without the host `powf`. Whole
//! exponents are repeated multiplication; fractional exponents decompose
//! into a fraction and extract the denominator-th root with a bisection
//! search.

use crate::error::EvalError;

/// Iteration ceiling for the common-factor scan. A safety valve for
/// ratios with no small common factor, not a mathematically derived
/// bound.
pub const GCF_ITERATION_LIMIT: i64 = 1000;

/// Absolute tolerance for accepting a bisection midpoint as the root.
pub const ROOT_TOLERANCE: f64 = 1e-5;

/// A decimal decomposed into `whole + numerator / denominator`, reduced
/// to lowest terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fraction {
    pub whole: i64,
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    /// Decompose a decimal by scaling it to an integer ratio over a power
    /// of ten, reducing by the greatest common factor, and extracting the
    /// whole part once the numerator exceeds the denominator.
    pub fn from_decimal(decimal: f64) -> Result<Fraction, EvalError> {
        let scale = fractional_digits(decimal);
        let times = raise(10.0, scale as f64);
        let mut numerator = (decimal * times) as i64;
        let mut denominator = times as i64;

        let factor = gcf(numerator, denominator);
        numerator = divide(numerator as f64, factor as f64)? as i64;
        denominator = divide(denominator as f64, factor as f64)? as i64;

        let mut whole = 0;
        if numerator > denominator {
            whole = numerator / denominator;
            numerator -= denominator * whole;
        }
        Ok(Fraction {
            whole,
            numerator,
            denominator,
        })
    }

    /// The decimal value this fraction decomposes.
    pub fn to_decimal(&self) -> f64 {
        self.whole as f64 + self.numerator as f64 / self.denominator as f64
    }
}

/// Number of significant fractional digits in the shortest decimal
/// rendering of `decimal`.
fn fractional_digits(decimal: f64) -> usize {
    let text = decimal.to_string();
    match text.find('.') {
        Some(dot) => text.len() - dot - 1,
        None => 0,
    }
}

pub fn divide(x: f64, y: f64) -> Result<f64, EvalError> {
    if y == 0.0 {
        return Err(EvalError::DivideByZero);
    }
    Ok(x / y)
}

/// Raise `base` to an arbitrary real exponent. A negative exponent is the
/// reciprocal of the power with the exponent's absolute value.
pub fn pow(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if exponent < 0.0 {
        let positive = raise_real(base, -exponent)?;
        return divide(1.0, positive);
    }
    raise_real(base, exponent)
}

fn raise_real(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if exponent % 1.0 == 0.0 {
        return Ok(raise(base, exponent));
    }

    // x^(w + n/d) = x^w * (d-th root of x)^n, computed on |x| with the
    // sign restored afterwards.
    let fraction = Fraction::from_decimal(exponent)?;
    let negative = base < 0.0;
    let magnitude = if negative { -base } else { base };

    let root = nth_root(magnitude, fraction.denominator)?;
    let fractional = raise(root, fraction.numerator as f64);
    let whole = raise(magnitude, fraction.whole as f64);

    let result = whole * fractional;
    Ok(if negative { -result } else { result })
}

/// Whole-exponent power by repeated multiplication. `exponent` must be a
/// non-negative whole number; zero yields one for every base.
fn raise(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        return 1.0;
    }
    let mut result = base;
    let mut remaining = exponent;
    while remaining > 1.0 {
        result *= base;
        remaining -= 1.0;
    }
    result
}

/// Greatest common factor by iterative scan, capped at
/// `GCF_ITERATION_LIMIT`. Hitting the cap returns the largest factor
/// found so far rather than failing.
pub fn gcf(x: i64, y: i64) -> i64 {
    let mut factor = 0;
    let mut i = 1;
    while i <= x && i <= y {
        if i > GCF_ITERATION_LIMIT {
            return factor;
        }
        if x % i == 0 && y % i == 0 {
            factor = i;
        }
        i += 1;
    }
    factor
}

/// Find the `degree`-th root of `radicand`: scan whole-number candidates
/// upward until the root is bracketed between two of them, then bisect
/// the bracket until the midpoint's power is within `ROOT_TOLERANCE` of
/// the radicand.
pub fn nth_root(radicand: f64, degree: i64) -> Result<f64, EvalError> {
    if radicand < 0.0 {
        return Err(EvalError::NegativeRoot(radicand));
    }

    let mut candidate = 1.0;
    loop {
        let power = raise(candidate, degree as f64);
        if power == radicand {
            return Ok(candidate);
        }
        if power > radicand {
            break;
        }
        candidate += 1.0;
    }
    bisect(radicand, candidate - 1.0, candidate, degree)
}

fn bisect(
    radicand: f64,
    low: f64,
    high: f64,
    degree: i64,
) -> Result<f64, EvalError> {
    let mut low = low;
    let mut high = high;
    loop {
        let mid = (low + high) / 2.0;
        let power = raise(mid, degree as f64);
        if (radicand - power).abs() < ROOT_TOLERANCE {
            return Ok(mid);
        }
        if power == 0.0 {
            return Err(EvalError::RootCollapsed);
        }
        if power < radicand {
            low = mid;
        } else {
            high = mid;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64, tolerance: f64) -> bool {
        (actual - expected).abs() < tolerance
    }

    #[test]
    fn power_of_zero_is_one() {
        for &base in &[0.0, 1.0, -2.0, 3.67, 1000.0] {
            assert_eq!(pow(base, 0.0), Ok(1.0));
        }
    }

    #[test]
    fn power_of_one_is_identity() {
        for &base in &[0.0, 1.0, -2.0, 3.67, 1000.0] {
            assert_eq!(pow(base, 1.0), Ok(base));
        }
    }

    #[test]
    fn whole_exponents_multiply_out() {
        assert_eq!(pow(2.0, 5.0), Ok(32.0));
        assert_eq!(pow(-2.0, 3.0), Ok(-8.0));
        assert_eq!(pow(29.0, 10.0), Ok(420707233300201.0));
    }

    #[test]
    fn negative_exponents_take_the_reciprocal() {
        assert_eq!(pow(2.0, -3.0), Ok(0.125));
        let tiny = pow(30.0, -78.0).unwrap();
        assert!(close(tiny / 6.088946131066839e-116, 1.0, 1e-9));
    }

    #[test]
    fn fractional_exponents_via_roots() {
        assert!(close(pow(4.0, 0.5).unwrap(), 2.0, 1e-4));
        assert!(close(pow(4.0, -0.5).unwrap(), 0.5, 1e-4));
        assert!(close(pow(3.67, 7.5).unwrap(), 17178.916827722234, 0.05));
        assert!(close(pow(3.5, -7.5).unwrap(), 8.307869e-5, 1e-7));
        assert!(close(pow(2.0, -5.675).unwrap(), 0.01957288185, 1e-5));
    }

    #[test]
    fn fractional_exponent_keeps_base_sign() {
        assert!(close(pow(-4.0, 0.5).unwrap(), -2.0, 1e-4));
        assert!(close(pow(-4.0, -0.5).unwrap(), -0.5, 1e-4));
    }

    #[test]
    fn divide_rejects_zero_divisor() {
        assert_eq!(divide(1.0, 0.0), Err(EvalError::DivideByZero));
        assert_eq!(divide(0.0, 1.0), Ok(0.0));
    }

    #[test]
    fn decimals_decompose_to_lowest_terms() {
        let cases = [
            (2.3, 2, 3, 10),
            (3.6, 3, 3, 5),
            (7.88, 7, 22, 25),
            (3.67, 3, 67, 100),
            (0.5, 0, 1, 2),
        ];
        for &(decimal, whole, numerator, denominator) in &cases {
            let fraction = Fraction::from_decimal(decimal).unwrap();
            assert_eq!(
                fraction,
                Fraction {
                    whole,
                    numerator,
                    denominator,
                },
                "decomposing {}",
                decimal
            );
        }
    }

    #[test]
    fn decomposition_round_trips() {
        for &decimal in &[2.3, 3.6, 7.88, 3.67, 0.5, 5.675, 7.5] {
            let fraction = Fraction::from_decimal(decimal).unwrap();
            assert!(
                close(fraction.to_decimal(), decimal, 1e-9),
                "round-tripping {}",
                decimal
            );
            assert_eq!(gcf(fraction.numerator, fraction.denominator), 1);
        }
    }

    #[test]
    fn common_factors() {
        assert_eq!(gcf(10, 4), 2);
        assert_eq!(gcf(7, 13), 1);
        assert_eq!(gcf(5675, 1000), 25);
    }

    #[test]
    fn common_factor_scan_stops_at_the_cap() {
        // The true factor 2048 lies beyond the scan ceiling; the largest
        // one found below it is returned instead.
        assert_eq!(gcf(2048, 4096), 512);
    }

    #[test]
    fn exact_roots_are_found_by_the_scan() {
        assert_eq!(nth_root(4.0, 2), Ok(2.0));
        assert_eq!(nth_root(32.0, 5), Ok(2.0));
        assert_eq!(nth_root(1.0, 7), Ok(1.0));
    }

    #[test]
    fn inexact_roots_are_found_by_bisection() {
        assert!(close(nth_root(2.0, 5).unwrap(), 1.148698354997035, 1e-3));
        assert!(close(nth_root(29.0, 10).unwrap(), 1.400360345840454, 1e-3));
        assert!(close(nth_root(0.5, 2).unwrap(), 0.7071067811865476, 1e-3));
        assert!(close(nth_root(3.67, 2).unwrap(), 1.9157244060668017, 1e-3));
    }

    #[test]
    fn negative_radicands_have_no_real_root() {
        assert_eq!(nth_root(-1.0, 2), Err(EvalError::NegativeRoot(-1.0)));
    }
}
