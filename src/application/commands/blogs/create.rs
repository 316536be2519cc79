// src/application/commands/blogs/create.rs
use super::BlogCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::AuditStamp,
        blog::{BlogContent, BlogTitle, NewBlog, value_objects::normalize_keywords},
        entity::FieldValue,
        filter::Filter,
    },
};

pub struct CreateBlogCommand {
    pub title: String,
    pub content: String,
    pub keywords: Option<String>,
}

impl CreateBlogCommand {
    pub fn builder() -> CreateBlogCommandBuilder {
        CreateBlogCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateBlogCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    keywords: Option<String>,
}

impl CreateBlogCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn build(self) -> Result<CreateBlogCommand, &'static str> {
        Ok(CreateBlogCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            keywords: self.keywords,
        })
    }
}

impl BlogCommandService {
    pub async fn create_blog(
        &self,
        actor: &AuthenticatedUser,
        command: CreateBlogCommand,
    ) -> ApplicationResult<BlogDto> {
        let title = BlogTitle::new(command.title.trim())?;
        let content = BlogContent::new(command.content)?;
        let keywords = normalize_keywords(command.keywords)?;

        let same_title = Filter::new().with("title", [FieldValue::from(title.as_str())]);
        if !self.blog_repo.get_by_filter(&same_title, None).await?.is_empty() {
            return Err(ApplicationError::conflict_on(
                "title",
                format!("Blog with title {title} already exists."),
            ));
        }

        let new_blog = NewBlog {
            title,
            content,
            keywords,
            author: actor.name.clone(),
            audit: AuditStamp::new(actor.id, self.clock.now()),
        };
        let created = self.blog_repo.insert(new_blog).await?;
        tracing::info!(blog_id = %created.id, author = %actor.id, "created blog");
        Ok(created.into())
    }
}
