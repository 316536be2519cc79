// src/application/cascade/resolver.rs
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{
    comment::{Comment, CommentId, CommentRepository},
    errors::DomainResult,
    filter::Filter,
};

/// Walks the reply graph below one or more comments.
///
/// Expansion is breadth first with one query per level. Every discovered id
/// goes into a visited set before it is expanded, so a cyclic reply graph
/// terminates and no comment is reported twice.
pub struct CommentThreadResolver {
    comments: Arc<dyn CommentRepository>,
}

impl CommentThreadResolver {
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }

    /// Ids of all comments replying to `root`, directly or transitively.
    /// The root itself is never part of the result.
    pub async fn resolve_reply_ids(&self, root: CommentId) -> DomainResult<Vec<CommentId>> {
        self.resolve_reply_ids_of(&[root]).await
    }

    /// Like [`Self::resolve_reply_ids`] for several roots at once. None of
    /// the roots is reported, even when one replies to another.
    pub async fn resolve_reply_ids_of(&self, roots: &[CommentId]) -> DomainResult<Vec<CommentId>> {
        Ok(self
            .walk(roots)
            .await?
            .into_iter()
            .map(|comment| comment.id)
            .collect())
    }

    /// The reply comments themselves, level by level.
    pub async fn resolve_replies(&self, root: CommentId) -> DomainResult<Vec<Comment>> {
        self.walk(&[root]).await
    }

    async fn walk(&self, roots: &[CommentId]) -> DomainResult<Vec<Comment>> {
        let mut visited: HashSet<CommentId> = HashSet::with_capacity(roots.len());
        let mut frontier: Vec<CommentId> = roots.iter().copied().filter(|id| visited.insert(*id)).collect();
        let mut discovered = Vec::new();

        while !frontier.is_empty() {
            let filter = Filter::new().with("reply_comment_id", frontier.iter().copied());
            let children = self.comments.get_by_filter(&filter, None).await?;

            frontier.clear();
            for child in children {
                if visited.insert(child.id) {
                    frontier.push(child.id);
                    discovered.push(child);
                }
            }
        }

        tracing::debug!(roots = roots.len(), replies = discovered.len(), "resolved reply tree");
        Ok(discovered)
    }
}
