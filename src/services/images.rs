//! Default product imagery for feeds that ship no image URLs.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Keyword-matched image sets, checked in order against category names.
const CATEGORY_IMAGE_SETS: &[(&str, &[&str])] = &[
    (
        "skin",
        &[
            "/assets/defaults/skin-care-1.jpg",
            "/assets/defaults/skin-care-2.jpg",
            "/assets/defaults/skin-care-3.jpg",
        ],
    ),
    (
        "hair",
        &[
            "/assets/defaults/hair-care-1.jpg",
            "/assets/defaults/hair-care-2.jpg",
            "/assets/defaults/hair-care-3.jpg",
        ],
    ),
    (
        "makeup",
        &[
            "/assets/defaults/makeup-1.jpg",
            "/assets/defaults/makeup-2.jpg",
        ],
    ),
    (
        "fragrance",
        &[
            "/assets/defaults/fragrance-1.jpg",
            "/assets/defaults/fragrance-2.jpg",
        ],
    ),
    (
        "baby",
        &[
            "/assets/defaults/baby-care-1.jpg",
            "/assets/defaults/baby-care-2.jpg",
        ],
    ),
    (
        "grocery",
        &[
            "/assets/defaults/grocery-1.jpg",
            "/assets/defaults/grocery-2.jpg",
            "/assets/defaults/grocery-3.jpg",
        ],
    ),
];

/// Fallback pair used when no category keyword matches.
const DEFAULT_IMAGE_PAIR: [&str; 2] = [
    "/assets/defaults/product-1.jpg",
    "/assets/defaults/product-2.jpg",
];

/// Pick default images for a product without feed-supplied imagery.
///
/// The category match is a case-insensitive substring test. Selection within
/// a set is pseudo-random but keyed on the product slug, so re-imports of
/// the same product resolve to the same images.
pub fn default_images(slug: &str, category_names: &[String]) -> Vec<String> {
    for name in category_names {
        let lowered = name.to_lowercase();
        for (keyword, set) in CATEGORY_IMAGE_SETS {
            if lowered.contains(keyword) {
                return pick_images(slug, set);
            }
        }
    }

    DEFAULT_IMAGE_PAIR.iter().map(|url| url.to_string()).collect()
}

fn pick_images(slug: &str, set: &[&str]) -> Vec<String> {
    let mut hasher = DefaultHasher::new();
    slug.hash(&mut hasher);
    let seed = hasher.finish();

    let count = (1 + seed % 2) as usize;
    let start = ((seed >> 1) as usize) % set.len();

    (0..count.min(set.len()))
        .map(|offset| set[(start + offset) % set.len()].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        let images = default_images("x", &["Organic Skin Care".to_string()]);
        assert!(images.iter().all(|url| url.contains("skin-care")));
        assert!(!images.is_empty() && images.len() <= 2);
    }

    #[test]
    fn unmatched_categories_fall_back_to_default_pair() {
        let images = default_images("x", &["Electronics".to_string()]);
        assert_eq!(
            images,
            vec![
                "/assets/defaults/product-1.jpg".to_string(),
                "/assets/defaults/product-2.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn selection_is_deterministic_per_slug() {
        let categories = vec!["Hair Care".to_string()];
        assert_eq!(
            default_images("shampoo", &categories),
            default_images("shampoo", &categories)
        );
    }

    #[test]
    fn no_categories_fall_back_to_default_pair() {
        let images = default_images("x", &[]);
        assert_eq!(images.len(), 2);
    }
}
