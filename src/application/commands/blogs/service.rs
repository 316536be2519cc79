// src/application/commands/blogs/service.rs
use std::sync::Arc;

use crate::{
    application::{
        cascade::{CascadePlanner, TransactionCoordinator},
        ports::time::Clock,
    },
    domain::blog::BlogRepository,
};

pub struct BlogCommandService {
    pub(super) blog_repo: Arc<dyn BlogRepository>,
    pub(super) planner: Arc<CascadePlanner>,
    pub(super) coordinator: Arc<TransactionCoordinator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BlogCommandService {
    pub fn new(
        blog_repo: Arc<dyn BlogRepository>,
        planner: Arc<CascadePlanner>,
        coordinator: Arc<TransactionCoordinator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            blog_repo,
            planner,
            coordinator,
            clock,
        }
    }
}
