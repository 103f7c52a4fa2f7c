//! Arithmetic helpers: addition, guarded division, and Fibonacci terms.

use std::ops::Add;

use crate::error::ArithmeticError;

/// Largest index whose Fibonacci term fits in a `u64`.
pub const FIBONACCI_MAX_INDEX: i64 = 93;

/// Returns `a + b`.
///
/// # Panics
///
/// Follows the operand type's `+`: bounded integers panic on overflow when
/// overflow checks are enabled. Use [`crate::Calculator`] for checked
/// integer arithmetic.
///
/// # Examples
///
/// ```
/// use sample_kit::add;
///
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(-1, 1), 0);
/// ```
#[must_use]
pub fn add<T>(a: T, b: T) -> T
where
    T: Add<Output = T>,
{
    a + b
}

/// Divides `a` by `b`.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `b` is zero.
///
/// # Examples
///
/// ```
/// use sample_kit::{ArithmeticError, divide};
///
/// assert_eq!(divide(10.0, 4.0), Ok(2.5));
/// assert_eq!(divide(10.0, 0.0), Err(ArithmeticError::DivisionByZero));
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// Returns the `n`-th Fibonacci number, with `fibonacci(0) == 0` and
/// `fibonacci(1) == 1`.
///
/// The sequence is walked iteratively, so the cost is linear in `n`.
///
/// # Errors
///
/// Returns [`ArithmeticError::InvalidArgument`] when `n` is negative and
/// [`ArithmeticError::Overflow`] when `n` exceeds [`FIBONACCI_MAX_INDEX`].
///
/// # Examples
///
/// ```
/// use sample_kit::fibonacci;
///
/// assert_eq!(fibonacci(10), Ok(55));
/// assert!(fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<u64, ArithmeticError> {
    if n < 0 {
        return Err(ArithmeticError::InvalidArgument { n });
    }

    // Seeded with fib(-1) = 1 so the loop never computes past fib(n).
    let mut previous: u64 = 1;
    let mut current: u64 = 0;
    for _ in 0..n {
        let following = previous
            .checked_add(current)
            .ok_or(ArithmeticError::Overflow { n })?;
        previous = current;
        current = following;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    //! Covers addition, division guards, and Fibonacci terms.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 2, 3)]
    #[case(0, 0, 0)]
    #[case(-1, 1, 0)]
    fn add_returns_sum(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
        assert_eq!(add(a, b), expected);
    }

    #[test]
    fn add_reaches_max_boundary() {
        assert_eq!(add(i64::MAX - 1, 1), i64::MAX);
        assert_eq!(add(i64::MIN, i64::MAX), -1);
    }

    #[test]
    fn add_works_for_floats() {
        let sum = add(0.5_f64, 0.25);
        assert!((sum - 0.75).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(10.0, 2.0, 5.0)]
    #[case(-9.0, 3.0, -3.0)]
    #[case(7.0, 2.0, 3.5)]
    fn divide_returns_quotient(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        let quotient = divide(a, b).expect("non-zero divisor");
        assert!((quotient - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn divide_inexact_quotient_is_within_tolerance() {
        let quotient = divide(1.0, 3.0).expect("non-zero divisor");
        let relative = ((quotient - 0.333_333) / 0.333_333).abs();
        assert!(relative < 1e-5, "relative error {relative} too large");
    }

    #[rstest]
    #[case(10.0)]
    #[case(0.0)]
    #[case(-3.5)]
    fn divide_by_zero_is_rejected(#[case] a: f64) {
        assert_eq!(divide(a, 0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn divide_by_negative_zero_is_rejected() {
        assert_eq!(divide(1.0, -0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 1)]
    #[case(3, 2)]
    #[case(4, 3)]
    #[case(5, 5)]
    #[case(6, 8)]
    #[case(7, 13)]
    #[case(8, 21)]
    #[case(9, 34)]
    #[case(10, 55)]
    fn fibonacci_matches_sequence(#[case] n: i64, #[case] expected: u64) {
        assert_eq!(fibonacci(n), Ok(expected));
    }

    #[test]
    fn fibonacci_rejects_negative_index() {
        assert_eq!(
            fibonacci(-1),
            Err(ArithmeticError::InvalidArgument { n: -1 })
        );
    }

    #[test]
    fn fibonacci_reaches_largest_representable_term() {
        assert_eq!(fibonacci(FIBONACCI_MAX_INDEX), Ok(12_200_160_415_121_876_738));
    }

    #[test]
    fn fibonacci_reports_overflow_past_limit() {
        let n = FIBONACCI_MAX_INDEX + 1;
        assert_eq!(fibonacci(n), Err(ArithmeticError::Overflow { n }));
    }
}
