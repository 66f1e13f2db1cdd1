/// Divides by 16, rounding halves away from zero.
///
/// Uses only truncating division and remainder. The remainder carries the
/// sign of `v`, so `r / 8` is `±1` exactly when `|r| >= 8`. An arithmetic
/// shift would round negative values toward negative infinity instead.
///
/// ```
/// use hadamard_inverse::div_round16;
///
/// assert_eq!(div_round16(8), 1);
/// assert_eq!(div_round16(-8), -1);
/// assert_eq!(div_round16(-20), -1);
/// assert_eq!(div_round16(-28), -2);
/// ```
#[inline]
#[must_use]
pub const fn div_round16(v: i16) -> i16 {
    v / 16 + (v % 16) / 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_halves_away_from_zero() {
        let cases: [(i16, i16); 10] = [
            (0, 0),
            (7, 0),
            (8, 1),
            (-8, -1),
            (9, 1),
            (-9, -1),
            (20, 1),
            (-20, -1),
            (28, 2),
            (-28, -2),
        ];
        for (v, expected) in cases {
            assert_eq!(div_round16(v), expected, "div_round16({v})");
        }
    }

    #[test]
    fn matches_exact_rounding_over_full_range() {
        for v in i16::MIN..=i16::MAX {
            let v = i32::from(v);
            // round(v / 16) with ties away from zero: (2|v| + 16) / 32.
            let magnitude = (2 * v.abs() + 16) / 32;
            let expected = if v < 0 { -magnitude } else { magnitude };
            assert_eq!(i32::from(div_round16(v as i16)), expected, "v = {v}");
        }
    }

    #[test]
    fn shift_based_rounding_differs_for_negatives() {
        let shifted = |v: i16| (v >> 4) + ((v & 8) >> 3);
        assert_eq!(shifted(-8), 0);
        assert_eq!(div_round16(-8), -1);
    }
}
