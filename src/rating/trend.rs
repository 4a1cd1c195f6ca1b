use crate::domain::Episode;

/// Least-squares fit of rating against episode number for one season,
/// backing the dashed trend overlay in the chart view.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn value_at(&self, episode_number: f64) -> f64 {
        self.slope * episode_number + self.intercept
    }
}

/// Fit over the rated (> 0) episodes. Needs at least two points with
/// distinct episode numbers, otherwise there is no line to draw.
pub fn season_trend(episodes: &[Episode]) -> Option<TrendLine> {
    let points: Vec<(f64, f64)> = episodes
        .iter()
        .filter_map(|episode| {
            episode
                .rating
                .value()
                .filter(|&value| value > 0.0)
                .map(|value| (episode.number as f64, value))
        })
        .collect();

    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
    let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();
    let sum_x2: f64 = points.iter().map(|(x, _)| x * x).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    Some(TrendLine { slope, intercept })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rating;

    fn episode(number: u32, rating: Option<f64>) -> Episode {
        Episode {
            number,
            rating: Rating::from_raw(rating),
            votes: None,
            external_id: None,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_perfectly_linear_season() {
        let episodes = vec![
            episode(1, Some(7.0)),
            episode(2, Some(7.5)),
            episode(3, Some(8.0)),
        ];

        let trend = season_trend(&episodes).unwrap();
        assert_close(trend.slope, 0.5);
        assert_close(trend.intercept, 6.5);
        assert_close(trend.value_at(4.0), 8.5);
    }

    #[test]
    fn test_unrated_episodes_do_not_anchor_the_fit() {
        let with_gaps = vec![
            episode(1, Some(7.0)),
            episode(2, None),
            episode(3, Some(0.0)),
            episode(4, Some(8.5)),
        ];

        let trend = season_trend(&with_gaps).unwrap();
        assert_close(trend.slope, 0.5);
    }

    #[test]
    fn test_too_few_points_yield_no_line() {
        assert_eq!(season_trend(&[]), None);
        assert_eq!(season_trend(&[episode(1, Some(8.0))]), None);
        assert_eq!(
            season_trend(&[episode(1, Some(8.0)), episode(2, None)]),
            None
        );
    }
}
