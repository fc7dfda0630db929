// src/models/frontmatter.rs
use serde::Deserialize;

/// `tags` may be written either as a YAML list or as a single string.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TagList {
    One(String),
    Many(Vec<String>),
}

impl TagList {
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(tag) => vec![tag],
            Self::Many(tags) => tags,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct Frontmatter {
    pub tags: Option<TagList>,
}

impl Frontmatter {
    #[inline]
    #[must_use]
    pub fn tags(self) -> Vec<String> {
        self.tags.map(TagList::into_vec).unwrap_or_default()
    }
}
