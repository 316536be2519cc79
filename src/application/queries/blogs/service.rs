use std::sync::Arc;

use crate::{
    application::cascade::CommentThreadResolver,
    domain::{blog::BlogRepository, comment::CommentRepository, reaction::ReactionRepository},
};

/// Read paths for blogs and the comments and reactions shown with them.
pub struct BlogQueryService {
    pub(super) blog_repo: Arc<dyn BlogRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) reaction_repo: Arc<dyn ReactionRepository>,
    pub(super) resolver: CommentThreadResolver,
}

impl BlogQueryService {
    pub fn new(
        blog_repo: Arc<dyn BlogRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
    ) -> Self {
        let resolver = CommentThreadResolver::new(Arc::clone(&comment_repo));
        Self {
            blog_repo,
            comment_repo,
            reaction_repo,
            resolver,
        }
    }
}
