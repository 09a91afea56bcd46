//! Chapter catalog domain model.
//!
//! The catalog is a fixed, ordered list of the 18 chapters of the Bhagavad
//! Gita. It is defined once at process start and never mutated.

mod chapters;

pub use chapters::CHAPTERS;

use serde::Serialize;

/// Local path of the bundled full-text PDF shown on the resources view.
pub const GITA_PDF_URL: &str = "./gita-hindi.pdf";

/// One chapter of the Bhagavad Gita.
///
/// Records are immutable; `id` is unique within the catalog and the catalog
/// order is the canonical chapter order (1 through 18).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterRecord {
    /// Chapter number, 1 through 18.
    pub id: u8,
    /// Romanized Sanskrit chapter title.
    pub sanskrit_name: String,
    /// English chapter title.
    pub english_name: String,
    /// Devanagari rendering of the chapter title.
    pub transliteration: String,
    /// One-paragraph chapter summary.
    pub summary: String,
    /// External chapter-by-chapter explanation, opened by the resources and
    /// chapter-detail views.
    pub external_url: String,
}

/// Returns the full catalog in canonical chapter order.
pub fn all() -> &'static [ChapterRecord] {
    &CHAPTERS
}

/// Looks up a chapter by its number.
///
/// Returns `None` for any id outside the catalog; callers render an empty
/// result in that case rather than failing.
pub fn find_by_id(id: u8) -> Option<&'static ChapterRecord> {
    CHAPTERS.iter().find(|chapter| chapter.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eighteen_chapters() {
        assert_eq!(all().len(), 18);
    }

    #[test]
    fn test_catalog_ids_are_canonical_order() {
        for (index, chapter) in all().iter().enumerate() {
            assert_eq!(chapter.id as usize, index + 1);
        }
    }

    #[test]
    fn test_find_by_id_returns_matching_chapter() {
        let chapter = find_by_id(7).expect("chapter 7 should exist");
        assert_eq!(chapter.id, 7);
        assert_eq!(chapter.sanskrit_name, "Jnana Vijnana Yoga");
    }

    #[test]
    fn test_find_by_id_is_idempotent() {
        // Catalog navigation to the same id must render identical content.
        let first = find_by_id(7).unwrap();
        let second = find_by_id(7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_by_id_out_of_range_is_none() {
        assert!(find_by_id(0).is_none());
        assert!(find_by_id(19).is_none());
        assert!(find_by_id(42).is_none());
    }

    #[test]
    fn test_external_urls_are_well_formed() {
        for chapter in all() {
            assert!(
                chapter.external_url.starts_with("https://"),
                "chapter {} has a malformed url: {}",
                chapter.id,
                chapter.external_url
            );
        }
    }

    #[test]
    fn test_chapter_fields_are_populated() {
        for chapter in all() {
            assert!(!chapter.sanskrit_name.is_empty());
            assert!(!chapter.english_name.is_empty());
            assert!(!chapter.transliteration.is_empty());
            assert!(!chapter.summary.is_empty());
        }
    }
}
