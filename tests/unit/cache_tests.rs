/*!
 * Tests for the translation cache
 */

use bibscan::translation::{CacheEntry, TranslationCache};

#[test]
fn test_put_then_get_withDifferentCaseAndSpacing_shouldHit() {
    let cache = TranslationCache::new();
    cache.put("Deep Learning", CacheEntry::translated("Aprendizado profundo"));

    let entry = cache.get("  deep LEARNING ").unwrap();
    assert_eq!(entry.translated_text, "Aprendizado profundo");
    assert!(entry.was_translated);
}

#[test]
fn test_get_shouldCountHitsAndMisses() {
    let cache = TranslationCache::new();
    cache.put("Deep Learning", CacheEntry::untranslated("Deep Learning — Smith"));

    assert!(cache.get("Unknown title").is_none());
    assert!(cache.get("Deep Learning").is_some());
    assert!(cache.get("Deep Learning").is_some());

    let (hits, misses, hit_rate) = cache.stats();
    assert_eq!(hits, 2);
    assert_eq!(misses, 1);
    assert!((hit_rate - 2.0 / 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_put_withSameKey_shouldReplaceEntry() {
    let cache = TranslationCache::new();
    cache.put("Deep Learning", CacheEntry::untranslated("Deep Learning"));
    cache.put("deep learning", CacheEntry::translated("Aprendizado profundo"));

    assert_eq!(cache.len(), 1);
    assert!(cache.get("Deep Learning").unwrap().was_translated);
}

#[test]
fn test_clone_shouldShareStorage() {
    let cache = TranslationCache::new();
    let shared = cache.clone();
    shared.put("Deep Learning", CacheEntry::translated("Aprendizado profundo"));

    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(shared.is_empty());
    assert_eq!(shared.stats().0, 0);
}

#[test]
fn test_concurrent_puts_shouldAllBeStored() {
    let cache = TranslationCache::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cache = cache.clone();
            std::thread::spawn(move || {
                for j in 0..25 {
                    cache.put(&format!("title {} {}", i, j), CacheEntry::translated("x"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 200);
}
