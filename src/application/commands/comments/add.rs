use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::AuditStamp,
        blog::BlogId,
        comment::{CommentId, CommentText, NewComment, specifications::ReplyStaysOnBlogSpec},
        specification::Specification,
    },
};

pub struct AddCommentCommand {
    pub blog_id: i64,
    pub text: String,
    pub reply_comment_id: Option<i64>,
}

impl CommentCommandService {
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let text = CommentText::new(command.text)?;
        let blog_id = BlogId::new(command.blog_id)?;
        self.blogs.ensure_blog_exists(blog_id).await?;

        let reply_comment_id = match command.reply_comment_id {
            Some(raw) => {
                let parent_id = CommentId::new(raw)?;
                let parent = self
                    .comment_repo
                    .validate_presence("id", &[parent_id.into()], Some("reply_comment_id"), None)
                    .await?
                    .into_iter()
                    .next()
                    .ok_or_else(|| {
                        ApplicationError::not_found(format!("Comment with id {parent_id} not found."))
                    })?;
                if !ReplyStaysOnBlogSpec::new(&parent, blog_id).is_satisfied() {
                    return Err(ApplicationError::validation(format!(
                        "comment {parent_id} belongs to another blog"
                    )));
                }
                Some(parent_id)
            }
            None => None,
        };

        let created = self
            .comment_repo
            .insert(NewComment {
                text,
                author_id: actor.id,
                blog_id,
                reply_comment_id,
                audit: AuditStamp::new(actor.id, self.clock.now()),
            })
            .await?;
        tracing::debug!(comment_id = %created.id, blog_id = %blog_id, "added comment");
        Ok(created.into())
    }
}
