pub fn min_of_2<T: PartialOrd + Copy>(first: T, second: T) -> T {
    if first < second {
        first
    } else {
        second
    }
}

pub fn max_of_2<T: PartialOrd + Copy>(first: T, second: T) -> T {
    if first > second {
        first
    } else {
        second
    }
}

/// Clamp a value into an inclusive `(lower, upper)` band.
pub(crate) fn clamp_to_band<T: PartialOrd + Copy>(value: T, (lower, upper): (T, T)) -> T {
    min_of_2(max_of_2(value, lower), upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(12., 16., 12.)]
    #[case(16., 12., 12.)]
    #[case(24., 24., 24.)]
    fn test_min_of_2(#[case] first: f64, #[case] second: f64, #[case] expected: f64) {
        assert_eq!(min_of_2(first, second), expected);
    }

    #[rstest]
    #[case(30, 24, 30)]
    #[case(18, 24, 24)]
    fn test_max_of_2(#[case] first: u32, #[case] second: u32, #[case] expected: u32) {
        assert_eq!(max_of_2(first, second), expected);
    }

    #[rstest]
    #[case(20., 24.)]
    #[case(25.5, 25.5)]
    #[case(31., 27.)]
    fn test_clamp_to_band(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(clamp_to_band(value, (24., 27.)), expected);
    }
}
