// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        cascade::{CascadePlanner, TransactionCoordinator},
        commands::{
            blogs::BlogCommandService, comments::CommentCommandService,
            reactions::ReactionCommandService, users::UserCommandService,
        },
        ports::{security::PasswordHasher, time::Clock, unit_of_work::UnitOfWorkFactory},
        queries::{blogs::BlogQueryService, users::UserQueryService},
    },
    domain::{
        blog::{BlogPresence, BlogRepository},
        comment::CommentRepository,
        reaction::ReactionRepository,
        user::UserRepository,
    },
};

/// Repositories and ports the services are assembled from.
pub struct ServiceDeps {
    pub users: Arc<dyn UserRepository>,
    pub blogs: Arc<dyn BlogRepository>,
    /// Usually the same object as `blogs`, handed out under the narrow
    /// capability comment and reaction writes depend on.
    pub blog_presence: Arc<dyn BlogPresence>,
    pub comments: Arc<dyn CommentRepository>,
    pub reactions: Arc<dyn ReactionRepository>,
    pub units: Arc<dyn UnitOfWorkFactory>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub blog_commands: Arc<BlogCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub reaction_commands: Arc<ReactionCommandService>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDeps) -> Self {
        let planner = Arc::new(CascadePlanner::new(
            Arc::clone(&deps.users),
            Arc::clone(&deps.blogs),
            Arc::clone(&deps.comments),
            Arc::clone(&deps.reactions),
        ));
        let coordinator = Arc::new(TransactionCoordinator::new(
            Arc::clone(&deps.units),
            Arc::clone(&deps.users),
            Arc::clone(&deps.blogs),
            Arc::clone(&deps.comments),
            Arc::clone(&deps.reactions),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&deps.users),
            Arc::clone(&deps.units),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.clock),
            Arc::clone(&planner),
            Arc::clone(&coordinator),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&deps.users)));

        let blog_commands = Arc::new(BlogCommandService::new(
            Arc::clone(&deps.blogs),
            Arc::clone(&planner),
            Arc::clone(&coordinator),
            Arc::clone(&deps.clock),
        ));
        let blog_queries = Arc::new(BlogQueryService::new(
            Arc::clone(&deps.blogs),
            Arc::clone(&deps.comments),
            Arc::clone(&deps.reactions),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&deps.comments),
            Arc::clone(&deps.blog_presence),
            Arc::clone(&planner),
            Arc::clone(&coordinator),
            Arc::clone(&deps.clock),
        ));
        let reaction_commands = Arc::new(ReactionCommandService::new(
            Arc::clone(&deps.reactions),
            Arc::clone(&deps.blog_presence),
            Arc::clone(&deps.units),
            Arc::clone(&deps.clock),
        ));

        Self {
            user_commands,
            user_queries,
            blog_commands,
            blog_queries,
            comment_commands,
            reaction_commands,
        }
    }
}
