//! Catalog filtering and the storefront sections derived from it
//!
//! Every function here is pure and total: an empty catalog or a query that
//! matches nothing yields empty lists, never an error. Results borrow from the
//! catalog and always keep catalog order.

use serde::{Deserialize, Serialize};

use super::catalog::{Category, Song};

/// Songs whose title, artist or album contains `query`, case-insensitively.
///
/// An empty query returns every song unchanged.
pub fn filter<'a>(songs: &'a [Song], query: &str) -> Vec<&'a Song> {
    if query.is_empty() {
        return songs.iter().collect();
    }

    let needle = query.to_lowercase();
    songs
        .iter()
        .filter(|song| matches(song, &needle))
        .collect()
}

fn matches(song: &Song, needle: &str) -> bool {
    song.title.to_lowercase().contains(needle)
        || song.artist.to_lowercase().contains(needle)
        || song.album.to_lowercase().contains(needle)
}

pub fn by_category<'a, I>(songs: I, category: Category) -> Vec<&'a Song>
where
    I: IntoIterator<Item = &'a Song>,
{
    songs
        .into_iter()
        .filter(|song| song.category == category)
        .collect()
}

/// Popular songs of the full catalog. Does not depend on the search query.
pub fn trending(catalog: &[Song]) -> Vec<&Song> {
    catalog.iter().filter(|song| song.is_popular).collect()
}

/// First `n` songs of the catalog; catalog order stands in for recency.
pub fn latest(catalog: &[Song], n: usize) -> Vec<&Song> {
    catalog.iter().take(n).collect()
}

pub fn top<'a>(songs: &[&'a Song], n: usize) -> Vec<&'a Song> {
    songs.iter().take(n).copied().collect()
}

/// First `n` of `first` followed by the first `n` of `second`, not interleaved.
pub fn mood_playlist<'a>(first: &[&'a Song], second: &[&'a Song], n: usize) -> Vec<&'a Song> {
    let mut playlist = top(first, n);
    playlist.extend(top(second, n));
    playlist
}

/// Sizes of the capped storefront sections
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionLimits {
    pub latest_hits: usize,
    pub top_count: usize,
    pub mood_count: usize,
}

impl Default for SectionLimits {
    fn default() -> Self {
        Self {
            latest_hits: 6,
            top_count: 6,
            mood_count: 3,
        }
    }
}

/// A titled row of songs in the main content area
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySection<'a> {
    pub title: String,
    pub songs: Vec<&'a Song>,
}

impl<'a> CategorySection<'a> {
    fn new(title: impl Into<String>, songs: Vec<&'a Song>) -> Self {
        Self {
            title: title.into(),
            songs,
        }
    }
}

/// Sections shown in the main content area for the given query.
///
/// A non-empty query collapses the storefront into a single results section.
pub fn compose_sections<'a>(catalog: &'a [Song], query: &str, limits: &SectionLimits) -> Vec<CategorySection<'a>> {
    let filtered = filter(catalog, query);

    if !query.is_empty() {
        return vec![CategorySection::new(
            format!("Search Results for \"{}\"", query),
            filtered,
        )];
    }

    let tamil = by_category(filtered.iter().copied(), Category::Tamil);
    let english = by_category(filtered.iter().copied(), Category::English);

    vec![
        CategorySection::new("Latest Hits", latest(catalog, limits.latest_hits)),
        CategorySection::new("Tamil Songs", tamil.clone()),
        CategorySection::new("English Songs", english.clone()),
        CategorySection::new("Top Tamil", top(&tamil, limits.top_count)),
        CategorySection::new("Top English", top(&english, limits.top_count)),
        CategorySection::new("Mood Playlists", mood_playlist(&tamil, &english, limits.mood_count)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::abcd_catalog;

    fn ids(songs: &[&Song]) -> Vec<u32> {
        songs.iter().map(|s| s.id).collect()
    }

    #[test]
    fn empty_query_returns_whole_catalog() {
        let catalog = abcd_catalog();
        assert_eq!(ids(&filter(catalog.songs(), "")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn partitions_of_unfiltered_catalog() {
        let catalog = abcd_catalog();
        let filtered = filter(catalog.songs(), "");

        assert_eq!(ids(&by_category(filtered.iter().copied(), Category::Tamil)), vec![1, 3]);
        assert_eq!(ids(&by_category(filtered.iter().copied(), Category::English)), vec![2, 4]);
        assert_eq!(ids(&trending(catalog.songs())), vec![1, 4]);
        assert_eq!(ids(&latest(catalog.songs(), 2)), vec![1, 2]);
    }

    #[test]
    fn query_matches_title_artist_or_album_case_insensitively() {
        let catalog = abcd_catalog();
        assert_eq!(ids(&filter(catalog.songs(), "BLOOM")), vec![2]);
        assert_eq!(ids(&filter(catalog.songs(), "rahman")), vec![3]);
        assert_eq!(ids(&filter(catalog.songs(), "tide")), vec![4]);
        // "a" appears in songs 1, 2 (Gardens), 3 and 4, order preserved
        assert_eq!(ids(&filter(catalog.songs(), "a")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn unmatched_query_empties_partitions_but_not_trending() {
        let catalog = abcd_catalog();
        let filtered = filter(catalog.songs(), "zz");

        assert!(filtered.is_empty());
        assert!(by_category(filtered.iter().copied(), Category::Tamil).is_empty());
        assert!(top(&filtered, 6).is_empty());
        assert_eq!(ids(&trending(catalog.songs())), vec![1, 4]);
    }

    #[test]
    fn latest_and_top_tolerate_short_inputs() {
        let catalog = abcd_catalog();
        assert_eq!(latest(catalog.songs(), 10).len(), 4);
        assert!(latest(catalog.songs(), 0).is_empty());
        assert!(latest(&[], 3).is_empty());
    }

    #[test]
    fn mood_playlist_concatenates_without_interleaving() {
        let catalog = abcd_catalog();
        let all = filter(catalog.songs(), "");
        let tamil = by_category(all.iter().copied(), Category::Tamil);
        let english = by_category(all.iter().copied(), Category::English);

        assert_eq!(ids(&mood_playlist(&tamil, &english, 3)), vec![1, 3, 2, 4]);
        assert_eq!(ids(&mood_playlist(&tamil, &english, 1)), vec![1, 2]);
    }

    #[test]
    fn storefront_sections_without_query() {
        let catalog = abcd_catalog();
        let sections = compose_sections(catalog.songs(), "", &SectionLimits::default());

        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Latest Hits", "Tamil Songs", "English Songs", "Top Tamil", "Top English", "Mood Playlists"]
        );
        assert_eq!(ids(&sections[0].songs), vec![1, 2, 3, 4]);
        assert_eq!(ids(&sections[1].songs), vec![1, 3]);
        assert_eq!(ids(&sections[5].songs), vec![1, 3, 2, 4]);
    }

    #[test]
    fn storefront_respects_limits() {
        let catalog = abcd_catalog();
        let limits = SectionLimits {
            latest_hits: 2,
            top_count: 1,
            mood_count: 1,
        };
        let sections = compose_sections(catalog.songs(), "", &limits);

        assert_eq!(ids(&sections[0].songs), vec![1, 2]);
        assert_eq!(ids(&sections[3].songs), vec![1]);
        assert_eq!(ids(&sections[4].songs), vec![2]);
        assert_eq!(ids(&sections[5].songs), vec![1, 2]);
    }

    #[test]
    fn search_collapses_to_single_results_section() {
        let catalog = abcd_catalog();
        let sections = compose_sections(catalog.songs(), "day", &SectionLimits::default());

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Search Results for \"day\"");
        assert_eq!(ids(&sections[0].songs), vec![4]);
    }
}

#[cfg(test)]
mod proptests {
    use std::sync::Arc;

    use super::*;
    use crate::model::{AppModel, Catalog};
    use crate::test_utils::song;
    use proptest::prelude::*;

    fn arb_song(id: u32) -> impl Strategy<Value = Song> {
        (
            "[a-zA-Z ]{0,12}",
            "[a-zA-Z ]{0,12}",
            "[a-zA-Z ]{0,12}",
            prop::bool::ANY,
            prop::bool::ANY,
        )
            .prop_map(move |(title, artist, album, tamil, popular)| {
                let category = if tamil { Category::Tamil } else { Category::English };
                song(id, &title, &artist, &album, category, popular)
            })
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<Song>> {
        (0usize..12).prop_flat_map(|len| {
            (0..len as u32)
                .map(arb_song)
                .collect::<Vec<_>>()
        })
    }

    proptest! {
        /// Filtering keeps exactly the songs that contain the query somewhere
        #[test]
        fn filter_is_exact_substring_selection(songs in arb_catalog(), query in "[a-zA-Z]{1,3}") {
            let result = filter(&songs, &query);
            let needle = query.to_lowercase();

            for song in &songs {
                let hit = song.title.to_lowercase().contains(&needle)
                    || song.artist.to_lowercase().contains(&needle)
                    || song.album.to_lowercase().contains(&needle);
                prop_assert_eq!(hit, result.iter().any(|s| s.id == song.id));
            }
        }

        /// Filtering never reorders the catalog
        #[test]
        fn filter_preserves_catalog_order(songs in arb_catalog(), query in "[a-z]{0,2}") {
            let result: Vec<u32> = filter(&songs, &query).iter().map(|s| s.id).collect();
            let mut sorted = result.clone();
            sorted.sort_unstable();
            prop_assert_eq!(result, sorted);
        }

        #[test]
        fn by_category_only_returns_requested_tag(songs in arb_catalog(), tamil in prop::bool::ANY) {
            let category = if tamil { Category::Tamil } else { Category::English };
            prop_assert!(by_category(songs.iter(), category).iter().all(|s| s.category == category));
        }

        /// Trending is computed from the catalog alone, whatever is being searched
        #[test]
        fn trending_ignores_search(songs in arb_catalog(), query in "[a-z]{1,3}") {
            let catalog = Catalog::new(songs).unwrap();
            let mut model = AppModel::new(Arc::new(catalog), SectionLimits::default());

            let before: Vec<u32> = model.trending().iter().map(|s| s.id).collect();
            model.update_search_query(query.clone());
            prop_assert_eq!(&model.get_ui_state().search_query, &query);
            let after: Vec<u32> = model.trending().iter().map(|s| s.id).collect();

            prop_assert_eq!(before, after);
        }
    }
}
