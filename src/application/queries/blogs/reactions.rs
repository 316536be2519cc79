use super::BlogQueryService;
use crate::{
    application::{dto::ReactionDto, error::ApplicationResult},
    domain::{blog::BlogId, filter::Filter},
};

impl BlogQueryService {
    pub async fn reactions_for_blog(&self, blog_id: BlogId) -> ApplicationResult<Vec<ReactionDto>> {
        let filter = Filter::new().with("blog_id", [blog_id]);
        Ok(self
            .reaction_repo
            .get_by_filter(&filter, None)
            .await?
            .into_iter()
            .map(ReactionDto::from)
            .collect())
    }
}
