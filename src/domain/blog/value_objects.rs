use crate::domain::entity::entity_id;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

entity_id!(BlogId, "blog");

const MAX_TITLE_LEN: usize = 255;
const MAX_CONTENT_LEN: usize = 10_000;
const MAX_KEYWORDS_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogTitle(String);

impl BlogTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {MAX_TITLE_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlogTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BlogTitle> for String {
    fn from(value: BlogTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogContent(String);

impl BlogContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        if value.chars().count() > MAX_CONTENT_LEN {
            return Err(DomainError::Validation(format!(
                "content must be at most {MAX_CONTENT_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<BlogContent> for String {
    fn from(value: BlogContent) -> Self {
        value.0
    }
}

/// Comma separated keywords; blank input is stored as no keywords.
pub fn normalize_keywords(value: Option<String>) -> DomainResult<Option<String>> {
    let Some(value) = value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if value.chars().count() > MAX_KEYWORDS_LEN {
        return Err(DomainError::Validation(format!(
            "keywords must be at most {MAX_KEYWORDS_LEN} characters"
        )));
    }
    Ok(Some(value))
}
