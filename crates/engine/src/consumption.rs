//! Pooled consumption and the range estimate built on it.
use crate::segments::Segment;

/// Average consumption in litres per 100 km, pooled over the segments.
///
/// Pooling sums volumes and distances before dividing, so long segments
/// weigh in proportionally and one short hop cannot skew the figure the way
/// a mean of per-segment ratios would. Rounded to one decimal. `None` when
/// nothing is measurable, which is not the same thing as `Some(0.0)`.
pub fn average_consumption(segments: &[Segment]) -> Option<f64> {
    if segments.is_empty() {
        return None;
    }
    let total_volume: f64 = segments.iter().map(|s| s.volume_l).sum();
    let total_distance: i64 = segments.iter().map(|s| s.distance_km).sum();
    if total_distance <= 0 {
        return None;
    }
    Some(round1(total_volume / total_distance as f64 * 100.0))
}

/// Estimated range on a full tank, in km.
///
/// Works from the one-decimal consumption figure as displayed, so the range
/// card always agrees with the consumption card next to it.
pub fn estimated_range_km(consumption: Option<f64>, tank_capacity_l: Option<f64>) -> Option<i64> {
    let consumption = consumption?;
    let capacity = tank_capacity_l?;
    if consumption <= 0.0 || capacity <= 0.0 {
        return None;
    }
    Some((capacity / consumption * 100.0).round() as i64)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_segments_instead_of_averaging_ratios() {
        let segments = vec![
            Segment { distance_km: 850, volume_l: 52.2 },
            Segment { distance_km: 550, volume_l: 33.0 },
        ];

        // 100 * 85.2 / 1400, not the mean of 6.14 and 6.0.
        assert_eq!(average_consumption(&segments), Some(6.1));
    }

    #[test]
    fn no_segments_means_no_figure() {
        assert_eq!(average_consumption(&[]), None);
    }

    #[test]
    fn single_segment_is_its_own_pool() {
        let segments = vec![Segment { distance_km: 500, volume_l: 40.0 }];
        assert_eq!(average_consumption(&segments), Some(8.0));
    }

    #[test]
    fn range_follows_the_displayed_consumption() {
        assert_eq!(estimated_range_km(Some(6.1), Some(53.0)), Some(869));
    }

    #[test]
    fn range_undefined_without_consumption_or_capacity() {
        assert_eq!(estimated_range_km(None, Some(53.0)), None);
        assert_eq!(estimated_range_km(Some(6.1), None), None);
        assert_eq!(estimated_range_km(Some(6.1), Some(0.0)), None);
    }
}
