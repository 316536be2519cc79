use crate::domain::audit::AuditStamp;
use crate::domain::blog::value_objects::{BlogContent, BlogId, BlogTitle};
use crate::domain::entity::Entity;

#[derive(Debug, Clone)]
pub struct Blog {
    pub id: BlogId,
    pub title: BlogTitle,
    pub content: BlogContent,
    pub keywords: Option<String>,
    /// Display name of the creator at creation time.
    pub author: String,
    pub audit: AuditStamp,
}

impl Entity for Blog {
    type Id = BlogId;
    const NAME: &'static str = "Blog";

    fn id(&self) -> BlogId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: BlogTitle,
    pub content: BlogContent,
    pub keywords: Option<String>,
    pub author: String,
    pub audit: AuditStamp,
}
