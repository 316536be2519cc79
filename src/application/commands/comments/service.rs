use std::sync::Arc;

use crate::{
    application::{
        cascade::{CascadePlanner, TransactionCoordinator},
        ports::time::Clock,
    },
    domain::{blog::BlogPresence, comment::CommentRepository},
};

/// Writes comments. Depends on blog presence only, never on the blog service.
pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) blogs: Arc<dyn BlogPresence>,
    pub(super) planner: Arc<CascadePlanner>,
    pub(super) coordinator: Arc<TransactionCoordinator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        blogs: Arc<dyn BlogPresence>,
        planner: Arc<CascadePlanner>,
        coordinator: Arc<TransactionCoordinator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            blogs,
            planner,
            coordinator,
            clock,
        }
    }
}
