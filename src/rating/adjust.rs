use crate::config::settings::AdjustSettings;
use crate::domain::Rating;

/// Confidence-adjusted rating.
///
/// A rating backed by few votes is a noisy estimate of the "true" rating, so
/// it is pulled toward a global baseline with a strength that decays as the
/// vote count grows:
///
///   uncertainty = halving_factor ^ ( -log_b(votes + 1) )
///   adjusted    = rating - (rating - baseline) * uncertainty
///
/// At 0 votes `log_b(1) = 0`, uncertainty is exactly 1, and the result is the
/// baseline itself. Returns `None` when the episode has no usable rating or
/// no vote count, in which case callers fall back to the raw rating.
pub fn adjusted_rating(
    rating: &Rating,
    votes: Option<u32>,
    settings: &AdjustSettings,
) -> Option<f64> {
    let value = rating.value()?;
    let votes = votes?;

    Some(adjust_value(value, votes, settings))
}

fn adjust_value(value: f64, votes: u32, settings: &AdjustSettings) -> f64 {
    let uncertainty = uncertainty_factor(votes, settings);
    let adjusted = value - (value - settings.baseline) * uncertainty;
    adjusted.clamp(0.0, 10.0)
}

fn uncertainty_factor(votes: u32, settings: &AdjustSettings) -> f64 {
    let log_votes = ((votes as f64) + 1.0).ln() / settings.log_base.ln();
    settings.halving_factor.powf(-log_votes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AdjustSettings {
        AdjustSettings::default()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_zero_votes_pulls_fully_to_baseline() {
        let adjusted = adjusted_rating(&Rating::Rated(9.0), Some(0), &settings()).unwrap();
        assert_close(adjusted, 7.0);
    }

    #[test]
    fn test_adjustment_approaches_raw_rating_with_votes() {
        let few = adjusted_rating(&Rating::Rated(9.0), Some(10), &settings()).unwrap();
        let some = adjusted_rating(&Rating::Rated(9.0), Some(1_000), &settings()).unwrap();
        let many = adjusted_rating(&Rating::Rated(9.0), Some(100_000), &settings()).unwrap();

        assert!(few < some);
        assert!(some < many);
        assert!(many < 9.0);
        assert!(few > 7.0);
    }

    #[test]
    fn test_ratings_below_baseline_are_pulled_up() {
        let adjusted = adjusted_rating(&Rating::Rated(4.0), Some(10), &settings()).unwrap();
        assert!(adjusted > 4.0);
        assert!(adjusted < 7.0);
    }

    #[test]
    fn test_result_stays_in_rating_range() {
        for votes in [0, 1, 10, 1_000, 10_000_000] {
            for raw in [0.1, 5.0, 9.9, 10.0] {
                let adjusted =
                    adjusted_rating(&Rating::Rated(raw), Some(votes), &settings()).unwrap();
                assert!((0.0..=10.0).contains(&adjusted));
            }
        }
    }

    #[test]
    fn test_missing_inputs_yield_none() {
        assert_eq!(adjusted_rating(&Rating::Missing, Some(100), &settings()), None);
        assert_eq!(adjusted_rating(&Rating::Placeholder, Some(100), &settings()), None);
        assert_eq!(adjusted_rating(&Rating::Rated(8.0), None, &settings()), None);
    }

    #[test]
    fn test_baseline_is_configurable() {
        let custom = AdjustSettings {
            baseline: 5.0,
            ..AdjustSettings::default()
        };

        let adjusted = adjusted_rating(&Rating::Rated(9.0), Some(0), &custom).unwrap();
        assert_close(adjusted, 5.0);
    }
}
