use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A captured text fragment: the original untrimmed text and the tag of the
/// immediate owning element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    pub tag: String,
}

/// Result of one extraction pass: truncated content hash -> fragment.
///
/// Identical text always keys the same entry; when the same hash is captured
/// more than once, `fragments` and `raw_text` keep the LAST occurrence in
/// traversal order while `captures` counts every capture event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentMap {
    pub fragments: BTreeMap<String, Fragment>,
    /// Parallel store of the most recent raw text per hash.
    pub raw_text: BTreeMap<String, String>,
    pub captures: usize,
}

impl FragmentMap {
    /// Record one capture event.
    pub fn record(&mut self, hash: String, text: String, tag: String) {
        self.raw_text.insert(hash.clone(), text.clone());
        self.fragments.insert(hash, Fragment { text, tag });
        self.captures += 1;
    }

    /// Number of distinct hashes captured.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn get(&self, hash: &str) -> Option<&Fragment> {
        self.fragments.get(hash)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Fragment)> {
        self.fragments.iter()
    }
}
