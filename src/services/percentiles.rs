//! Percentile lookup over slices sorted in ascending order.
//!
//! The position `p / 100 * (len - 1)` is rounded to the nearest index, and
//! percentiles outside `[0, 100]` clamp to the first or last element.

pub fn value_sorted<T: Copy>(sorted_values: &[T], percentile: f64) -> Option<T> {
    let last = sorted_values.len().checked_sub(1)?;
    let index = if percentile <= 0.0 {
        0
    } else if percentile >= 100.0 {
        last
    } else {
        ((percentile / 100.0) * last as f64).round() as usize
    };
    sorted_values.get(index).copied()
}

pub fn value_f64_sorted(sorted_values: &[f64], percentile: f64) -> f64 {
    value_sorted(sorted_values, percentile).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_percentile() {
        let values: [u32; 0] = [];
        assert_eq!(value_sorted(&values, 50.0), None);
        assert_eq!(value_f64_sorted(&[], 85.0), 0.0);
    }

    #[test]
    fn out_of_range_percentiles_clamp() {
        let values = [3.0, 7.5, 9.0];
        assert_eq!(value_f64_sorted(&values, -5.0), 3.0);
        assert_eq!(value_f64_sorted(&values, 250.0), 9.0);
    }

    #[test]
    fn position_rounds_to_nearest_index() {
        // len=4 => p50 sits at 1.5 and rounds up to index 2
        let values = [1, 2, 3, 4];
        assert_eq!(value_sorted(&values, 50.0), Some(3));
        assert_eq!(value_sorted(&values, 30.0), Some(2));
    }
}
