//! Test fixtures shared across the model, controller and view tests.

use crate::model::{Catalog, Category, Song};

/// Build a song with empty display fields.
pub fn song(id: u32, title: &str, artist: &str, album: &str, category: Category, is_popular: bool) -> Song {
    Song {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        duration: "3:30".to_string(),
        cover: String::new(),
        category,
        is_popular,
    }
}

/// Four-song catalog: A(tamil, popular), B(english), C(tamil), D(english, popular).
pub fn abcd_catalog() -> Catalog {
    Catalog::new(vec![
        song(1, "Aalaporan", "Anirudh", "Vikram", Category::Tamil, true),
        song(2, "Bloom", "Lumen", "Gardens", Category::English, false),
        song(3, "Chinna Chinna", "Rahman", "Roja", Category::Tamil, false),
        song(4, "Daylight", "Harbor", "Morning Tide", Category::English, true),
    ])
    .expect("fixture ids are unique")
}
