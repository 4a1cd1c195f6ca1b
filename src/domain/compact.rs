use serde::Deserialize;

use super::models::{Episode, Rating, Season, ShowData};

/// One episode slot in the published wire format.
///
/// Current files carry `[episode, rating, votes, id]`; older files carry
/// `[rating, votes, id]` with the episode number implied by position.
/// A missing episode is a plain `null` in its slot.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CompactEpisode {
    Numbered(u32, Option<f64>, Option<u32>, Option<String>),
    Positional(Option<f64>, Option<u32>, Option<String>),
}

pub type CompactSeason = Vec<Option<CompactEpisode>>;
pub type CompactShowData = Vec<CompactSeason>;

/// Expand the compact encoding into the domain model.
///
/// The absent-vs-zero distinction must survive this step: a `null` slot
/// becomes a `Missing` episode, a 0 rating becomes a `Placeholder`.
pub fn decode_show(compact: CompactShowData) -> ShowData {
    compact.into_iter().map(decode_season).collect()
}

fn decode_season(season: CompactSeason) -> Season {
    season
        .into_iter()
        .enumerate()
        .map(|(index, slot)| decode_slot(index, slot))
        .collect()
}

fn decode_slot(index: usize, slot: Option<CompactEpisode>) -> Episode {
    let implied_number = (index + 1) as u32;

    match slot {
        None => Episode::missing(implied_number),
        Some(CompactEpisode::Numbered(number, rating, votes, id)) => Episode {
            number,
            rating: Rating::from_raw(rating),
            votes,
            external_id: id,
        },
        Some(CompactEpisode::Positional(rating, votes, id)) => Episode {
            number: implied_number,
            rating: Rating::from_raw(rating),
            votes,
            external_id: id,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ShowData {
        let compact: CompactShowData = serde_json::from_str(json).unwrap();
        decode_show(compact)
    }

    #[test]
    fn test_decode_numbered_tuples() {
        let show = parse(r#"[[[1, 8.5, 1200, "tt0001"], [2, 9.1, 900, "tt0002"]]]"#);

        assert_eq!(show.len(), 1);
        assert_eq!(show[0][0].number, 1);
        assert_eq!(show[0][0].rating, Rating::Rated(8.5));
        assert_eq!(show[0][0].votes, Some(1200));
        assert_eq!(show[0][1].external_id.as_deref(), Some("tt0002"));
    }

    #[test]
    fn test_decode_legacy_positional_tuples() {
        let show = parse(r#"[[[8.5, 1200, "tt0001"], null, [7.0, 300, "tt0003"]]]"#);

        assert_eq!(show[0][0].number, 1);
        assert_eq!(show[0][2].number, 3);
        assert_eq!(show[0][2].rating, Rating::Rated(7.0));
    }

    #[test]
    fn test_null_slot_is_missing_not_placeholder() {
        let show = parse(r#"[[null, [2, 0, 15, "tt0002"]]]"#);

        assert_eq!(show[0][0].rating, Rating::Missing);
        assert_eq!(show[0][1].rating, Rating::Placeholder);
        assert_eq!(show[0][1].votes, Some(15));
    }

    #[test]
    fn test_numbered_tuple_number_wins_over_position() {
        // Gap in the season: slot 0 holds episode 4
        let show = parse(r#"[[[4, 6.2, 50, "tt0004"]]]"#);

        assert_eq!(show[0][0].number, 4);
    }

    #[test]
    fn test_absent_votes_and_id_decode_as_none() {
        let show = parse(r#"[[[1, 8.0, null, null]]]"#);

        assert_eq!(show[0][0].votes, None);
        assert_eq!(show[0][0].external_id, None);
        assert!(show[0][0].rating.is_rated());
    }
}
