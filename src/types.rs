use std::{fmt, hash::BuildHasherDefault};

use indexmap::{IndexMap, IndexSet};
use xxhash_rust::xxh3::Xxh3;

pub type Xxh3Builder = BuildHasherDefault<Xxh3>;
pub type StringHashMap = IndexMap<String, String, Xxh3Builder>;
pub type StringHashSet = IndexSet<String, Xxh3Builder>;

/// Which of the three loaded sources a text value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    En,
    Cn,
    /// The reference (fallback) localization, usually the previous release's output.
    Ref,
}

/// Ordered guesses at how one game item is spelled in the text corpus.
///
/// Earlier candidates are tried first. A set always holds at least one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateIdSet(Vec<String>);

impl CandidateIdSet {
    /// Returns `None` when `candidates` is empty.
    pub fn new<I, S>(candidates: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();

        if candidates.is_empty() {
            None
        } else {
            Some(Self(candidates))
        }
    }

    pub fn single(id: impl Into<String>) -> Self {
        Self(vec![id.into()])
    }

    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for CandidateIdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

impl From<&str> for CandidateIdSet {
    fn from(id: &str) -> Self {
        Self::single(id)
    }
}

impl From<String> for CandidateIdSet {
    fn from(id: String) -> Self {
        Self::single(id)
    }
}
