use crate::domain::blog::entity::{Blog, NewBlog};
use crate::domain::blog::value_objects::BlogId;
use crate::domain::entity::FieldValue;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::repository::FilteredRepository;
use async_trait::async_trait;

#[async_trait]
pub trait BlogRepository: FilteredRepository<Blog> {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog>;

    /// Write back title, content, keywords and the update audit of `blog`.
    async fn update(&self, blog: &Blog) -> DomainResult<Blog>;
}

/// Narrow capability for aggregates that hang off a blog: they only need to
/// know the blog is there, not the rest of the blog service.
#[async_trait]
pub trait BlogPresence: Send + Sync {
    async fn ensure_blog_exists(&self, id: BlogId) -> DomainResult<Blog>;
}

#[async_trait]
impl<R> BlogPresence for R
where
    R: BlogRepository + ?Sized,
{
    async fn ensure_blog_exists(&self, id: BlogId) -> DomainResult<Blog> {
        self.validate_presence("id", &[FieldValue::from(id)], Some("blog_id"), None)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::not_found("blog_id", format!("Blog with id {id} not found.")))
    }
}
