use super::IdSetCollection;
use crate::{
    error::{Error, Result},
    CandidateIdSet,
};

/// Starting point for a new category: covers no ids and keeps the English text as it is.
#[derive(Debug, Default)]
pub struct Template {
    sets: IdSetCollection,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sets(&self) -> &IdSetCollection {
        &self.sets
    }

    pub fn translate(&self, ids: &CandidateIdSet, en: Option<&str>) -> Result<String> {
        en.map(str::to_owned)
            .ok_or_else(|| Error::MissingText { id: ids.to_string() })
    }
}
