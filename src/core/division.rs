use crate::utils::error::{LessonError, Result};

/// Integer division that reports a zero divisor as a [`LessonError::DomainError`]
/// instead of panicking.
///
/// The quotient truncates toward zero. `i64::MIN / -1` wraps to `i64::MIN`.
pub fn divide(dividend: i64, divisor: i64) -> Result<i64> {
    if divisor == 0 {
        return Err(LessonError::divide_by_zero());
    }
    Ok(dividend.wrapping_div(divisor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10, 2, 5)]
    #[case(7, 2, 3)]
    #[case(-7, 2, -3)]
    #[case(7, -2, -3)]
    #[case(-7, -2, 3)]
    #[case(0, 5, 0)]
    #[case(1, 3, 0)]
    fn test_divide_truncates_toward_zero(
        #[case] dividend: i64,
        #[case] divisor: i64,
        #[case] expected: i64,
    ) {
        assert_eq!(divide(dividend, divisor).unwrap(), expected);
    }

    #[test]
    fn test_divide_by_zero_is_domain_error() {
        for dividend in [10, 0, -3, i64::MAX, i64::MIN] {
            match divide(dividend, 0) {
                Err(LessonError::DomainError { message }) => {
                    assert_eq!(message, "divisor must not be zero")
                }
                other => panic!("expected domain error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_divide_min_by_minus_one_wraps() {
        assert_eq!(divide(i64::MIN, -1).unwrap(), i64::MIN);
    }

    #[test]
    fn test_divide_matches_native_division() {
        for a in -20..=20 {
            for b in (-6..=6).filter(|b| *b != 0) {
                assert_eq!(divide(a, b).unwrap(), a / b, "{} / {}", a, b);
            }
        }
    }
}
