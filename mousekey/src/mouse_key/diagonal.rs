//! Diagonal movement compensation.

/// Multiply by 181/256, close to 1/sqrt(2) (0.70703 vs 0.70711).
///
/// The shift is arithmetic, so negative values round towards negative infinity.
pub(crate) fn times_inv_sqrt2(v: i8) -> i8 {
    ((v as i16 * 181) >> 8) as i8
}

/// Scale a pair of axes when both are moving, so diagonal speed matches straight speed.
///
/// A component that rounds down to 0 is bumped to 1, diagonal movement never stalls.
pub(crate) fn normalize(a: i8, b: i8) -> (i8, i8) {
    if a == 0 || b == 0 {
        return (a, b);
    }
    (compensate(a), compensate(b))
}

fn compensate(v: i8) -> i8 {
    match times_inv_sqrt2(v) {
        0 => 1,
        scaled => scaled,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn expected(v: i8) -> i8 {
        let scaled = (v as i16 * 181) >> 8;
        (v.signum() as i16 * scaled.abs().max(1)) as i8
    }

    #[test]
    fn diagonal_reduces_magnitude() {
        assert_eq!(normalize(10, 10), (7, 7));
        assert_eq!(normalize(127, -127), (89, -90));
    }

    #[test]
    fn single_axis_unchanged() {
        assert_eq!(normalize(10, 0), (10, 0));
        assert_eq!(normalize(0, -3), (0, -3));
        assert_eq!(normalize(0, 0), (0, 0));
    }

    #[test]
    fn small_values_never_zero() {
        assert_eq!(normalize(1, 1), (1, 1));
        assert_eq!(normalize(-1, 1), (-1, 1));
    }

    #[test]
    fn matches_closed_form_for_all_diagonals() {
        for x in -127i8..=127 {
            for y in [-127i8, -50, -1, 1, 2, 99, 127] {
                if x == 0 {
                    continue;
                }
                let (nx, ny) = normalize(x, y);
                assert_eq!(nx, expected(x), "x = {x}");
                assert_eq!(ny, expected(y), "y = {y}");
                assert_ne!(nx, 0);
                assert_ne!(ny, 0);
                assert_eq!(nx.signum(), x.signum());
                assert_eq!(ny.signum(), y.signum());
            }
        }
    }
}
