// src/application/commands/blogs/update.rs
use super::BlogCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::{
            Blog, BlogContent, BlogId, BlogTitle, specifications::CanUpdateBlogSpec,
            value_objects::normalize_keywords,
        },
        entity::FieldValue,
        filter::Filter,
        specification::Specification,
    },
};

/// Fields left `None` keep their stored value.
#[derive(Debug, Default)]
pub struct UpdateBlogCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub keywords: Option<String>,
}

/// Edit of the blog currently titled `title`. The title itself stays.
#[derive(Debug, Default)]
pub struct UpdateBlogByTitleCommand {
    pub title: String,
    pub content: Option<String>,
    pub keywords: Option<String>,
}

impl BlogCommandService {
    pub async fn update_blog(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateBlogCommand,
    ) -> ApplicationResult<BlogDto> {
        let id = BlogId::new(command.id)?;
        let blog = self
            .blog_repo
            .validate_presence("id", &[FieldValue::from(id)], Some("blog_id"), None)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::not_found(format!("Blog with id {id} not found.")))?;
        self.apply_update(actor, blog, command.title, command.content, command.keywords)
            .await
    }

    pub async fn update_blog_by_title(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateBlogByTitleCommand,
    ) -> ApplicationResult<BlogDto> {
        let title = command.title.trim();
        let blog = self
            .blog_repo
            .validate_presence("title", &[FieldValue::from(title)], Some("blog_title"), None)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::not_found(format!("Blog with title {title} not found.")))?;
        self.apply_update(actor, blog, None, command.content, command.keywords)
            .await
    }

    async fn apply_update(
        &self,
        actor: &AuthenticatedUser,
        mut blog: Blog,
        title: Option<String>,
        content: Option<String>,
        keywords: Option<String>,
    ) -> ApplicationResult<BlogDto> {
        if !CanUpdateBlogSpec::new(&blog, actor.id, actor.role).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "Only the author or an administrator can update this blog",
            ));
        }

        if let Some(title) = title {
            let title = BlogTitle::new(title.trim())?;
            let same_title = Filter::new().with("title", [FieldValue::from(title.as_str())]);
            let taken = self
                .blog_repo
                .get_by_filter(&same_title, None)
                .await?
                .iter()
                .any(|other| other.id != blog.id);
            if taken {
                return Err(ApplicationError::conflict_on(
                    "title",
                    format!("Blog with title {title} already exists."),
                ));
            }
            blog.title = title;
        }
        if let Some(content) = content {
            blog.content = BlogContent::new(content)?;
        }
        if keywords.is_some() {
            blog.keywords = normalize_keywords(keywords)?;
        }
        blog.audit.updated_on = self.clock.now();
        blog.audit.updated_by = actor.id;

        let updated = self.blog_repo.update(&blog).await?;
        tracing::info!(blog_id = %updated.id, editor = %actor.id, "updated blog");
        Ok(updated.into())
    }
}
