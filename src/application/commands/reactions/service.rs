use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::ApplicationResult,
        ports::{time::Clock, unit_of_work::UnitOfWorkFactory},
    },
    domain::{
        blog::{BlogId, BlogPresence},
        filter::Filter,
        reaction::{Reaction, ReactionRepository},
    },
};

pub struct ReactionCommandService {
    pub(super) reaction_repo: Arc<dyn ReactionRepository>,
    pub(super) blogs: Arc<dyn BlogPresence>,
    pub(super) units: Arc<dyn UnitOfWorkFactory>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ReactionCommandService {
    pub fn new(
        reaction_repo: Arc<dyn ReactionRepository>,
        blogs: Arc<dyn BlogPresence>,
        units: Arc<dyn UnitOfWorkFactory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reaction_repo,
            blogs,
            units,
            clock,
        }
    }

    /// The actor's reaction on a blog, if any. At most one exists per pair.
    pub(super) async fn find_own(
        &self,
        actor: &AuthenticatedUser,
        blog_id: BlogId,
    ) -> ApplicationResult<Option<Reaction>> {
        let filter = Filter::new()
            .with("blog_id", [blog_id])
            .with("created_by", [actor.id]);
        Ok(self
            .reaction_repo
            .get_by_filter(&filter, None)
            .await?
            .into_iter()
            .next())
    }
}
