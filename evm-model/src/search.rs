//! Client-side fallback search.
//!
//! Used when the server-side search endpoint is unreachable or answers with
//! an unusable shape. Matching always re-derives from the last successfully
//! loaded collection; nothing is persisted between calls.

use crate::event::{EventCollection, EventFeature};

/// Case-insensitive substring match against `name` OR `city`.
///
/// Records missing both fields never match.
pub fn filter_by_name_or_city(collection: &[EventFeature], query: &str) -> EventCollection {
    let needle = query.to_lowercase();
    collection
        .iter()
        .filter(|feature| {
            let properties = &feature.properties;
            contains(&properties.name, &needle) || contains(&properties.city, &needle)
        })
        .cloned()
        .collect()
}

fn contains(field: &Option<String>, needle: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|value| value.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventFeature, EventProperties};

    fn named(name: &str, city: &str) -> EventFeature {
        EventFeature::point(
            0.0,
            0.0,
            EventProperties {
                name: Some(name.to_owned()),
                city: Some(city.to_owned()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn matches_name_case_insensitively() {
        let collection = vec![
            named("Dublin Fest", "Dublin"),
            named("Paris Nights", "Paris"),
            named("Berlin Beats", "Berlin"),
        ];
        for query in ["dublin", "DUBLIN", "Dublin", "dUbLiN"] {
            let hits = filter_by_name_or_city(&collection, query);
            assert_eq!(hits.len(), 1, "query {query:?}");
            assert_eq!(hits[0].properties.display_name(), "Dublin Fest");
        }
    }

    #[test]
    fn matches_city_when_name_does_not() {
        let collection = vec![named("Summer Gig", "Cork"), named("Winter Gig", "Galway")];
        let hits = filter_by_name_or_city(&collection, "cork");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].properties.display_city(), "Cork");
    }

    #[test]
    fn records_missing_fields_do_not_match_or_panic() {
        let bare = EventFeature::point(0.0, 0.0, EventProperties::default());
        let hits = filter_by_name_or_city(&[bare], "anything");
        assert!(hits.is_empty());
    }

    #[test]
    fn no_match_returns_empty() {
        let collection = vec![named("Dublin Fest", "Dublin")];
        assert!(filter_by_name_or_city(&collection, "lisbon").is_empty());
    }
}
