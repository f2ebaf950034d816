//! Fuzzy lookup over dataset descriptions.
//!
//! This is a browsing aid for finding the exact phrase to feed the text→emoji
//! direction. Translation itself never uses fuzzy matches.

use std::sync::Arc;

use nucleo::{Config, Nucleo};

use crate::indexer::TranslationIndex;
use crate::models::DatasetEntry;

// Upper bound on ticks spent waiting for the matcher to finish
const MAX_TICKS: usize = 100;

/// Return up to `limit` entries whose translation, aliases or keywords fuzzy-match `query`,
/// best match first
pub fn search_entries<'a>(index: &'a TranslationIndex, query: &str, limit: usize) -> Vec<&'a DatasetEntry> {
    let mut nucleo: Nucleo<usize> = Nucleo::new(Config::DEFAULT, Arc::new(|| {}), None, 1);

    let injector = nucleo.injector();
    for (id, entry) in index.entries().iter().enumerate() {
        let haystack = entry
            .phrases()
            .chain(entry.keywords.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        injector.push(id, move |_id, cols| {
            cols[0] = haystack.as_str().into();
        });
    }

    nucleo.pattern.reparse(
        0,
        query,
        nucleo::pattern::CaseMatching::Smart,
        nucleo::pattern::Normalization::Smart,
        false,
    );

    // Tick until matching has caught up with the injected items
    for _ in 0..MAX_TICKS {
        if !nucleo.tick(10).running {
            break;
        }
    }

    let snapshot = nucleo.snapshot();
    let count = snapshot.matched_item_count().min(u32::try_from(limit).unwrap_or(u32::MAX));
    snapshot.matched_items(..count).map(|item| &index.entries()[*item.data]).collect()
}
