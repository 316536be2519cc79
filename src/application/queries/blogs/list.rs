use super::BlogQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::filter::Filter,
};

impl BlogQueryService {
    /// Every blog, oldest id first. Reserved for elevated principals.
    pub async fn list_blogs(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<BlogDto>> {
        if !actor.role.is_elevated() {
            return Err(ApplicationError::forbidden(
                "Only an administrator can list every blog",
            ));
        }
        let blogs = self.blog_repo.get_by_filter(&Filter::new(), None).await?;
        Ok(blogs.into_iter().map(BlogDto::from).collect())
    }
}
