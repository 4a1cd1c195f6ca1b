use crate::domain::Episode;

/// Aggregate statistics for one season.
///
/// `rated_count` is the explicit "has data" signal: the numeric fields fall
/// back to 0.0 when the rated subset is empty, and callers must not read
/// meaning into that floor value.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonStats {
    pub mean: f64,
    pub weighted_mean: f64,
    pub median: f64,
    pub stddev: f64,
    pub total_votes: u64,
    pub rated_count: usize,
}

impl SeasonStats {
    pub fn has_data(&self) -> bool {
        self.rated_count > 0
    }
}

pub fn season_stats(episodes: &[Episode]) -> SeasonStats {
    let values = rated_values(episodes);

    SeasonStats {
        mean: mean(&values),
        weighted_mean: weighted_mean(episodes),
        median: median(&values),
        stddev: stddev(&values),
        total_votes: total_votes(episodes),
        rated_count: values.len(),
    }
}

/// Arithmetic mean of all values strictly greater than 0.
/// Missing and placeholder ratings contribute nothing; empty input yields 0.
pub fn mean(values: &[f64]) -> f64 {
    let valid = filter_valid(values);
    if valid.is_empty() {
        return 0.0;
    }

    valid.iter().sum::<f64>() / valid.len() as f64
}

/// Median over the valid (> 0) subset; even-length inputs average the two
/// middle values. Empty input yields 0.
pub fn median(values: &[f64]) -> f64 {
    let mut valid = filter_valid(values);
    if valid.is_empty() {
        return 0.0;
    }

    valid.sort_by(|a, b| a.total_cmp(b));
    let mid = valid.len() / 2;

    if valid.len() % 2 == 0 {
        (valid[mid - 1] + valid[mid]) / 2.0
    } else {
        valid[mid]
    }
}

/// Population standard deviation (divide by N) over the valid (> 0) subset.
/// Empty and singleton inputs yield 0.
pub fn stddev(values: &[f64]) -> f64 {
    let valid = filter_valid(values);
    if valid.is_empty() {
        return 0.0;
    }

    let mean = valid.iter().sum::<f64>() / valid.len() as f64;
    let variance = valid
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / valid.len() as f64;

    variance.sqrt()
}

/// Vote-weighted mean over the rated subset; episodes without a vote count
/// weigh 0. Yields 0 when nothing is rated or the total weight is 0.
pub fn weighted_mean(episodes: &[Episode]) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for episode in episodes {
        if let Some(value) = episode.rating.value() {
            let weight = episode.votes.unwrap_or(0) as f64;
            weighted_sum += value * weight;
            total_weight += weight;
        }
    }

    if total_weight == 0.0 {
        return 0.0;
    }

    weighted_sum / total_weight
}

/// Vote total across all episodes. No rating filter here: an episode that
/// carries votes but no rating still contributes.
pub fn total_votes(episodes: &[Episode]) -> u64 {
    episodes
        .iter()
        .map(|episode| episode.votes.unwrap_or(0) as u64)
        .sum()
}

/// Map a value into [0,1] relative to a min/max range.
/// A degenerate range (all seasons tied, or a single season) maps to the
/// neutral midpoint 0.5 rather than dividing by zero.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max - min == 0.0 {
        return 0.5;
    }

    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Normalize every season's vote total against the show-wide range, for the
/// comparative vote-heat coloring.
pub fn vote_heat_scale(totals: &[u64]) -> Vec<f64> {
    let min = totals.iter().min().copied().unwrap_or(0) as f64;
    let max = totals.iter().max().copied().unwrap_or(0) as f64;

    totals
        .iter()
        .map(|&total| normalize(total as f64, min, max))
        .collect()
}

fn rated_values(episodes: &[Episode]) -> Vec<f64> {
    episodes
        .iter()
        .filter_map(|episode| episode.rating.value())
        .filter(|&value| value > 0.0)
        .collect()
}

fn filter_valid(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|&value| value > 0.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rating;

    fn episode(number: u32, rating: Option<f64>, votes: Option<u32>) -> Episode {
        Episode {
            number,
            rating: Rating::from_raw(rating),
            votes,
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
    fn test_mean_excludes_placeholder_zeros() {
        assert_close(mean(&[8.0, 0.0, 9.0]), 8.5);
        assert_close(mean(&[8.0, 9.0]), 8.5);
    }

    #[test]
    fn test_empty_and_all_placeholder_inputs_yield_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(median(&[]), 0.0);
        assert_eq!(stddev(&[]), 0.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_close(median(&[6.0, 8.0, 10.0]), 8.0);
        assert_close(median(&[6.0, 8.0]), 7.0);
    }

    #[test]
    fn test_median_sorts_its_input() {
        assert_close(median(&[10.0, 6.0, 8.0]), 8.0);
    }

    #[test]
    fn test_stddev_is_zero_for_constant_input() {
        assert_eq!(stddev(&[7.0, 7.0, 7.0]), 0.0);
    }

    #[test]
    fn test_stddev_is_population_form() {
        // Population stddev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2
        assert_close(stddev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0);
    }

    #[test]
    fn test_weighted_mean_uses_vote_weights() {
        let episodes = vec![
            episode(1, Some(8.0), Some(10)),
            episode(2, Some(4.0), Some(90)),
        ];
        assert_close(weighted_mean(&episodes), 4.4);
    }

    #[test]
    fn test_weighted_mean_with_zero_total_weight() {
        let episodes = vec![episode(1, Some(8.0), None), episode(2, Some(4.0), Some(0))];
        assert_eq!(weighted_mean(&episodes), 0.0);
    }

    #[test]
    fn test_total_votes_counts_unrated_episodes() {
        let episodes = vec![
            episode(1, Some(8.0), Some(100)),
            episode(2, None, Some(40)),
            episode(3, Some(0.0), Some(5)),
            episode(4, Some(7.0), None),
        ];
        assert_eq!(total_votes(&episodes), 145);
    }

    #[test]
    fn test_normalize_degenerate_range_is_midpoint() {
        assert_eq!(normalize(42.0, 7.0, 7.0), 0.5);
        assert_eq!(normalize(0.0, 0.0, 0.0), 0.5);
    }

    #[test]
    fn test_normalize_clamps_and_scales() {
        assert_close(normalize(5.0, 0.0, 10.0), 0.5);
        assert_eq!(normalize(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(normalize(15.0, 0.0, 10.0), 1.0);
    }

    #[test]
    fn test_vote_heat_scale_across_seasons() {
        let scaled = vote_heat_scale(&[100, 300, 200]);
        assert_close(scaled[0], 0.0);
        assert_close(scaled[1], 1.0);
        assert_close(scaled[2], 0.5);
    }

    #[test]
    fn test_vote_heat_scale_single_season_is_neutral() {
        assert_eq!(vote_heat_scale(&[500]), vec![0.5]);
    }

    #[test]
    fn test_season_of_missing_episodes_aggregates_to_floor() {
        let episodes: Vec<Episode> = (1..=5).map(Episode::missing).collect();
        let stats = season_stats(&episodes);

        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.weighted_mean, 0.0);
        assert_eq!(stats.median, 0.0);
        assert_eq!(stats.stddev, 0.0);
        assert_eq!(stats.total_votes, 0);
        assert!(!stats.has_data());
    }

    #[test]
    fn test_season_stats_composes_the_aggregates() {
        let episodes = vec![
            episode(1, Some(8.0), Some(10)),
            episode(2, Some(9.0), Some(30)),
            episode(3, None, Some(5)),
            episode(4, Some(0.0), None),
        ];
        let stats = season_stats(&episodes);

        assert_close(stats.mean, 8.5);
        assert_close(stats.median, 8.5);
        assert_close(stats.weighted_mean, (8.0 * 10.0 + 9.0 * 30.0) / 40.0);
        assert_eq!(stats.total_votes, 45);
        assert_eq!(stats.rated_count, 2);
        assert!(stats.has_data());
    }
}
