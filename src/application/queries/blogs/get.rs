use super::BlogQueryService;
use crate::{
    application::{
        dto::{BlogDetailDto, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{blog::BlogId, reaction::ReactionStatus},
};

pub struct GetBlogQuery {
    pub id: i64,
}

impl BlogQueryService {
    pub async fn get_blog(&self, query: GetBlogQuery) -> ApplicationResult<BlogDetailDto> {
        let id = BlogId::new(query.id)?;
        let blog = self
            .blog_repo
            .validate_presence("id", &[id.into()], Some("blog_id"), None)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::not_found(format!("Blog with id {id} not found.")))?;

        let comments = self
            .find_comments_by_blog_ids(&[id])
            .await?
            .into_iter()
            .map(CommentDto::from)
            .collect();

        let reactions = self.reactions_for_blog(id).await?;
        let likes = reactions
            .iter()
            .filter(|r| r.liked_status == ReactionStatus::Liked)
            .count() as u64;
        let dislikes = reactions.len() as u64 - likes;

        Ok(BlogDetailDto {
            blog: blog.into(),
            comments,
            likes,
            dislikes,
        })
    }
}
