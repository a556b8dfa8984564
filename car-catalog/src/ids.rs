//! Stable identifier generation for brands and models.

use std::collections::{HashMap, HashSet};

use crate::slug::slugify;
use crate::types::{Brand, Model};

/// Generate a stable brand ID from the English brand name.
pub fn brand_id(brand_en: &str) -> String {
    slugify(brand_en)
}

/// Generate a model ID namespaced by its brand: `<brandId>:<slug>`.
pub fn model_id(brand_id: &str, model_en: &str) -> String {
    let slug = slugify(model_en);
    format!("{brand_id}:{slug}")
}

/// Make model IDs unique within one brand by appending numeric suffixes.
///
/// The first occurrence of an ID is left untouched. Each repeat of the same
/// original ID gets `-<n>`, where `n` starts one past the last counter used
/// for that original and climbs until the result has not been assigned yet
/// in this brand. Order is preserved and no model is dropped.
///
/// With three models all slugging to `vw:golf` the result is `vw:golf`,
/// `vw:golf-1`, `vw:golf-2`.
pub fn ensure_unique_model_ids(models: &mut [Model]) {
    // Every ID assigned so far, mapped to the last suffix counter used for it.
    let mut seen: HashMap<String, u32> = HashMap::with_capacity(models.len());

    for model in models.iter_mut() {
        let original = std::mem::take(&mut model.model_id);

        let previous = seen.get(&original).copied();
        let assigned = match previous {
            Some(last) => {
                let mut counter = last + 1;
                let mut candidate = format!("{original}-{counter}");
                while seen.contains_key(&candidate) {
                    counter += 1;
                    candidate = format!("{original}-{counter}");
                }
                log::debug!("Duplicate model ID {original} renamed to {candidate}");
                seen.insert(original, counter);
                candidate
            }
            None => {
                seen.insert(original.clone(), 0);
                original
            }
        };

        seen.entry(assigned.clone()).or_insert(0);
        model.model_id = assigned;
    }
}

/// Brand IDs that occur more than once, in order of first repeat.
///
/// Duplicates are reported, not renamed: brand IDs are derived one-to-one
/// from the English name and consumers key on them directly.
pub fn find_duplicate_brand_ids(brands: &[Brand]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for brand in brands {
        if !seen.insert(brand.brand_id.as_str()) && reported.insert(brand.brand_id.as_str()) {
            duplicates.push(brand.brand_id.clone());
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn models(ids: &[&str]) -> Vec<Model> {
        ids.iter()
            .map(|id| Model {
                model_id: id.to_string(),
                model_en: String::new(),
                model_he: String::new(),
            })
            .collect()
    }

    fn ids(models: &[Model]) -> Vec<&str> {
        models.iter().map(|m| m.model_id.as_str()).collect()
    }

    #[test]
    fn unique_ids_are_untouched() {
        let mut m = models(&["bmw:x5", "bmw:x6", "bmw:m3"]);
        ensure_unique_model_ids(&mut m);
        assert_eq!(ids(&m), ["bmw:x5", "bmw:x6", "bmw:m3"]);
    }

    #[test]
    fn repeats_are_numbered_from_one() {
        let mut m = models(&["vw:golf", "vw:golf", "vw:golf"]);
        ensure_unique_model_ids(&mut m);
        assert_eq!(ids(&m), ["vw:golf", "vw:golf-1", "vw:golf-2"]);
    }

    #[test]
    fn suffix_skips_ids_taken_by_other_originals() {
        let mut m = models(&["vw:golf", "vw:golf-1", "vw:golf"]);
        ensure_unique_model_ids(&mut m);
        assert_eq!(ids(&m), ["vw:golf", "vw:golf-1", "vw:golf-2"]);
    }

    #[test]
    fn natural_id_colliding_with_suffixed_id_is_itself_suffixed() {
        let mut m = models(&["vw:golf", "vw:golf", "vw:golf-1"]);
        ensure_unique_model_ids(&mut m);
        assert_eq!(ids(&m), ["vw:golf", "vw:golf-1", "vw:golf-1-1"]);
    }

    #[test]
    fn duplicate_brand_ids_reported_once() {
        let brand = |id: &str| Brand {
            brand_id: id.to_string(),
            brand_en: String::new(),
            brand_he: String::new(),
        };
        let brands = [brand("kia"), brand("mini"), brand("kia"), brand("kia")];
        assert_eq!(find_duplicate_brand_ids(&brands), ["kia"]);
        assert!(find_duplicate_brand_ids(&brands[..2]).is_empty());
    }
}
