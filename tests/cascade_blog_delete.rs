mod support;

use std::sync::Arc;

use blog_core::application::{
    ApplicationError,
    commands::blogs::DeleteBlogCommand,
    dto::AuthenticatedUser,
};
use blog_core::domain::{reaction::ReactionStatus, user::Role};
use support::{FaultyReactions, ReactionFault, Seed, TestApp, existing_ids, row_exists};

struct Scenario {
    owner: AuthenticatedUser,
    reader: AuthenticatedUser,
    admin: AuthenticatedUser,
}

/// Blog 7 with comments 10 <- 11 <- 12 and reactions 50, 51. Blog 8 is
/// unrelated and must survive every delete of blog 7.
async fn seed_blog_seven(app: &TestApp) -> Scenario {
    let seed = Seed::new(&app.pool);
    let admin = seed.user(1, Role::Toaa).await;
    let owner = seed.user(2, Role::Member).await;
    let reader = seed.user(3, Role::Member).await;

    seed.blog(7, &owner).await;
    seed.comment(10, 7, &reader, None).await;
    seed.comment(11, 7, &owner, Some(10)).await;
    seed.comment(12, 7, &reader, Some(11)).await;
    seed.reaction(50, 7, &reader, ReactionStatus::Liked).await;
    seed.reaction(51, 7, &admin, ReactionStatus::Disliked).await;

    seed.blog(8, &reader).await;
    seed.comment(20, 8, &owner, None).await;
    seed.reaction(60, 8, &owner, ReactionStatus::Liked).await;

    Scenario { owner, reader, admin }
}

async fn assert_blog_seven_intact(app: &TestApp) {
    assert!(row_exists(&app.pool, "blogs", 7).await);
    assert_eq!(existing_ids(&app.pool, "comments", &[10, 11, 12]).await, vec![10, 11, 12]);
    assert_eq!(existing_ids(&app.pool, "blog_reactions", &[50, 51]).await, vec![50, 51]);
}

async fn assert_blog_eight_intact(app: &TestApp) {
    assert!(row_exists(&app.pool, "blogs", 8).await);
    assert!(row_exists(&app.pool, "comments", 20).await);
    assert!(row_exists(&app.pool, "blog_reactions", 60).await);
}

#[tokio::test]
async fn owner_deletes_blog_with_comments_and_reactions() {
    let app = TestApp::new().await;
    let scenario = seed_blog_seven(&app).await;

    let deleted = app
        .services
        .blog_commands
        .delete_blog(&scenario.owner, DeleteBlogCommand { id: 7 })
        .await
        .unwrap();

    assert!(deleted);
    assert!(!row_exists(&app.pool, "blogs", 7).await);
    assert!(existing_ids(&app.pool, "comments", &[10, 11, 12]).await.is_empty());
    assert!(existing_ids(&app.pool, "blog_reactions", &[50, 51]).await.is_empty());
    assert_blog_eight_intact(&app).await;
}

#[tokio::test]
async fn elevated_user_may_delete_someone_elses_blog() {
    let app = TestApp::new().await;
    let scenario = seed_blog_seven(&app).await;

    let deleted = app
        .services
        .blog_commands
        .delete_blog(&scenario.admin, DeleteBlogCommand { id: 7 })
        .await
        .unwrap();
    assert!(deleted);
    assert!(!row_exists(&app.pool, "blogs", 7).await);
}

#[tokio::test]
async fn non_owner_is_forbidden_and_nothing_changes() {
    let app = TestApp::new().await;
    let scenario = seed_blog_seven(&app).await;

    let err = app
        .services
        .blog_commands
        .delete_blog(&scenario.reader, DeleteBlogCommand { id: 7 })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert_eq!(err.key(), "forbidden");
    assert_blog_seven_intact(&app).await;
}

#[tokio::test]
async fn second_delete_reports_not_found() {
    let app = TestApp::new().await;
    let scenario = seed_blog_seven(&app).await;
    let commands = &app.services.blog_commands;

    commands
        .delete_blog(&scenario.owner, DeleteBlogCommand { id: 7 })
        .await
        .unwrap();
    let err = commands
        .delete_blog(&scenario.owner, DeleteBlogCommand { id: 7 })
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.key(), "blog_id");
    assert_blog_eight_intact(&app).await;
}

#[tokio::test]
async fn failing_reaction_step_rolls_everything_back() {
    let app = TestApp::with_deps(|deps, pool| {
        deps.reactions = Arc::new(FaultyReactions::new(pool.clone(), ReactionFault::BulkDelete));
    })
    .await;
    let scenario = seed_blog_seven(&app).await;

    let err = app
        .services
        .blog_commands
        .delete_blog(&scenario.owner, DeleteBlogCommand { id: 7 })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Transaction(_)));
    let body = err.to_body();
    assert_eq!(body.key, "transaction_error");
    assert_eq!(body.message, "Error during Delete Blog transaction");
    assert!(!body.message.contains("injected"));

    // Comments were deleted before the failing step; the rollback restores them.
    assert_blog_seven_intact(&app).await;
    assert_blog_eight_intact(&app).await;
}

#[tokio::test]
async fn replies_stored_under_another_blog_go_with_their_thread() {
    let app = TestApp::new().await;
    let scenario = seed_blog_seven(&app).await;
    let seed = Seed::new(&app.pool);
    seed.comment(13, 8, &scenario.reader, Some(12)).await;

    app.services
        .blog_commands
        .delete_blog(&scenario.owner, DeleteBlogCommand { id: 7 })
        .await
        .unwrap();

    assert!(!row_exists(&app.pool, "comments", 13).await);
    assert_blog_eight_intact(&app).await;
}

#[tokio::test]
async fn missing_blog_fails_before_any_transaction() {
    let app = TestApp::new().await;
    let scenario = seed_blog_seven(&app).await;

    let err = app
        .services
        .blog_commands
        .delete_blog(&scenario.admin, DeleteBlogCommand { id: 99 })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.message().contains("99"));
    assert_blog_seven_intact(&app).await;
}
