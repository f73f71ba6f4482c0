//! Page content model. All copy (names, dates, gallery entries, music track)
//! lives in `content.json` so the page can be re-worded without touching
//! component code.

use serde::Deserialize;
use yew::AttrValue;

const CONTENT_JSON: &str = include_str!("../content.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    pub couple: String,
    pub date: String,
    pub venue: String,
    pub tagline: String,
    pub gallery: Vec<GalleryImage>,
    pub details: Vec<DetailItem>,
    pub about: Vec<String>,
    pub music: MusicTrack,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DetailItem {
    pub title: String,
    pub time: String,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MusicTrack {
    pub src: String,
    /// Shown when a user-initiated play attempt is blocked by the browser.
    pub autoplay_tip: String,
}

impl SiteContent {
    pub fn load() -> Result<Self, serde_json::Error> {
        serde_json::from_str(CONTENT_JSON)
    }
}

/// The image currently enlarged in the lightbox. A single `Option` of this
/// in `App` is what guarantees at most one overlay exists.
#[derive(Clone, Debug, PartialEq)]
pub struct LightboxImage {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::load().expect("content.json should deserialize");
        assert!(!content.couple.is_empty());
        assert!(!content.gallery.is_empty());
        assert!(!content.details.is_empty());
        assert!(!content.about.is_empty());
    }

    #[test]
    fn gallery_entries_have_sources_and_alt_text() {
        let content = SiteContent::load().expect("content.json should deserialize");
        for image in &content.gallery {
            assert!(!image.src.is_empty(), "gallery entry missing src");
            assert!(!image.alt.is_empty(), "gallery entry {} missing alt", image.src);
        }
    }

    #[test]
    fn music_track_and_tip_are_present() {
        let content = SiteContent::load().expect("content.json should deserialize");
        assert!(!content.music.src.is_empty());
        assert!(!content.music.autoplay_tip.is_empty());
    }
}
