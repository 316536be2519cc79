use super::BlogQueryService;
use crate::{
    application::{
        dto::{CommentDto, CommentThreadDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::BlogId,
        comment::{Comment, CommentId},
        filter::Filter,
    },
};

pub struct GetCommentThreadQuery {
    pub comment_id: i64,
}

impl BlogQueryService {
    /// Every comment on any of `blog_ids`, replies included.
    pub async fn find_comments_by_blog_ids(&self, blog_ids: &[BlogId]) -> ApplicationResult<Vec<Comment>> {
        let filter = Filter::new().with("blog_id", blog_ids.iter().copied());
        Ok(self.comment_repo.get_by_filter(&filter, None).await?)
    }

    pub async fn comment_thread(&self, query: GetCommentThreadQuery) -> ApplicationResult<CommentThreadDto> {
        let id = CommentId::new(query.comment_id)?;
        let root = self
            .comment_repo
            .validate_presence("id", &[id.into()], Some("comment_id"), None)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::not_found(format!("Comment with id {id} not found.")))?;

        let replies = self
            .resolver
            .resolve_replies(id)
            .await?
            .into_iter()
            .map(CommentDto::from)
            .collect();

        Ok(CommentThreadDto {
            root: root.into(),
            replies,
        })
    }
}
