use serde::Serialize;

use crate::config::settings::ColorSettings;
use crate::domain::Rating;

const VOTE_HEAT_HUE: f64 = 190.0;

/// Background/text pair for one heatmap cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorResult {
    pub background_color: String,
    pub text_color: String,
}

impl ColorResult {
    fn sentinel() -> Self {
        Self {
            background_color: "transparent".to_string(),
            text_color: "white".to_string(),
        }
    }
}

pub fn color_for_rating(rating: &Rating, settings: &ColorSettings) -> ColorResult {
    match rating.value() {
        Some(value) => color_for_value(value, settings),
        None => ColorResult::sentinel(),
    }
}

/// Calculates the HSL color for a rating value.
/// Ratings 0-6: dark red to red gradient (HSL: 0°, 100%, 0-50% lightness)
/// Ratings 6-10: red → orange → yellow → green gradient (HSL: 0-120°, 100%, 50%)
pub fn color_for_value(value: f64, settings: &ColorSettings) -> ColorResult {
    // The sentinel check precedes clamping: only an exact floor value renders
    // as an empty cell, an out-of-range input clamps and gets a real color.
    if value == settings.min_rating {
        return ColorResult::sentinel();
    }

    let clamped = value.clamp(settings.min_rating, settings.max_rating);

    if clamped > settings.rating_cutoff {
        let hue = (clamped - settings.rating_cutoff)
            / (settings.max_rating - settings.rating_cutoff)
            * 120.0;
        return ColorResult {
            background_color: format!("hsl({hue}, 100%, 50%)"),
            text_color: "black".to_string(),
        };
    }

    let lightness = clamped / settings.rating_cutoff * 50.0;
    ColorResult {
        background_color: format!("hsl(0, 100%, {lightness}%)"),
        text_color: "white".to_string(),
    }
}

/// Color for a vote-count heat cell.
///
/// Input is a season's vote total normalized to [0,1] across all seasons of
/// the show. The sweep runs from a muted dark cyan up to a bright saturated
/// one; text flips to white once the background passes the halfway point.
pub fn vote_heat_color(normalized: f64) -> ColorResult {
    let t = normalized.clamp(0.0, 1.0);

    let saturation = 20.0 + t * 65.0;
    let lightness = 18.0 + t * 37.0;
    let text = if t > 0.5 { "white" } else { "black" };

    ColorResult {
        background_color: format!("hsl({VOTE_HEAT_HUE}, {saturation}%, {lightness}%)"),
        text_color: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ColorSettings {
        ColorSettings::default()
    }

    #[test]
    fn test_missing_and_placeholder_share_the_sentinel_color() {
        let missing = color_for_rating(&Rating::Missing, &settings());
        let placeholder = color_for_rating(&Rating::Placeholder, &settings());

        assert_eq!(missing, placeholder);
        assert_eq!(missing.background_color, "transparent");
        assert_eq!(missing.text_color, "white");
    }

    #[test]
    fn test_zero_value_is_the_sentinel() {
        let result = color_for_value(0.0, &settings());
        assert_eq!(result.background_color, "transparent");
    }

    #[test]
    fn test_top_rating_is_pure_green() {
        let result = color_for_value(10.0, &settings());
        assert_eq!(result.background_color, "hsl(120, 100%, 50%)");
        assert_eq!(result.text_color, "black");
    }

    #[test]
    fn test_midpoint_of_upper_band_is_yellow() {
        let result = color_for_value(8.0, &settings());
        assert_eq!(result.background_color, "hsl(60, 100%, 50%)");
    }

    #[test]
    fn test_cutoff_value_is_full_red() {
        let result = color_for_value(6.0, &settings());
        assert_eq!(result.background_color, "hsl(0, 100%, 50%)");
        assert_eq!(result.text_color, "white");
    }

    #[test]
    fn test_lower_band_darkens_toward_zero() {
        let result = color_for_value(3.0, &settings());
        assert_eq!(result.background_color, "hsl(0, 100%, 25%)");
    }

    #[test]
    fn test_out_of_range_inputs_clamp() {
        let high = color_for_value(14.0, &settings());
        assert_eq!(high.background_color, "hsl(120, 100%, 50%)");

        // Negative clamps to the floor after the sentinel check, so it
        // renders as the darkest red rather than an empty cell.
        let low = color_for_value(-2.0, &settings());
        assert_eq!(low.background_color, "hsl(0, 100%, 0%)");
    }

    #[test]
    fn test_gradient_is_continuous_at_the_cutoff() {
        // Just above the cutoff the hue sweep starts at red again, so the
        // two branches meet at hsl(0, 100%, 50%).
        let below = color_for_value(6.0, &settings());
        let above = color_for_value(6.25, &settings());

        assert_eq!(below.background_color, "hsl(0, 100%, 50%)");
        assert_eq!(above.background_color, "hsl(7.5, 100%, 50%)");
    }

    #[test]
    fn test_vote_heat_text_contrast_flips_at_half() {
        assert_eq!(vote_heat_color(0.2).text_color, "black");
        assert_eq!(vote_heat_color(0.8).text_color, "white");
    }

    #[test]
    fn test_vote_heat_clamps_out_of_range_input() {
        assert_eq!(vote_heat_color(-1.0), vote_heat_color(0.0));
        assert_eq!(vote_heat_color(2.0), vote_heat_color(1.0));
    }
}
