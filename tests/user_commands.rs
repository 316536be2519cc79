mod support;

use std::sync::{Arc, Mutex};

use blog_core::application::{
    ApplicationError, commands::users::UpdateUserCommand, queries::users::GetUserQuery,
};
use blog_core::domain::user::Role;
use support::{CountingUnits, RecordingUsers, RegisterUserBuilder, TestApp, UnitTally, count_rows};

#[tokio::test]
async fn first_user_becomes_elevated_and_later_ones_members() {
    let app = TestApp::new().await;
    let users = &app.services.user_commands;

    let first = users
        .register(None, RegisterUserBuilder::new("alice").build())
        .await
        .unwrap();
    assert_eq!(first.role, Role::Toaa);

    let second = users
        .register(None, RegisterUserBuilder::new("bobby").build())
        .await
        .unwrap();
    assert_eq!(second.role, Role::Member);
}

#[tokio::test]
async fn duplicates_conflict_on_the_clashing_field() {
    let app = TestApp::new().await;
    let users = &app.services.user_commands;
    users
        .register(None, RegisterUserBuilder::new("alice").contact_no("555-0100").build())
        .await
        .unwrap();

    let same_email = users
        .register(None, RegisterUserBuilder::new("other").email("alice@example.com").build())
        .await
        .unwrap_err();
    assert_eq!(same_email.key(), "email_id");

    let same_username = users
        .register(None, RegisterUserBuilder::new("alice").email("a2@example.com").build())
        .await
        .unwrap_err();
    assert_eq!(same_username.key(), "username");

    let same_contact = users
        .register(None, RegisterUserBuilder::new("carol").contact_no("555-0100").build())
        .await
        .unwrap_err();
    assert!(matches!(same_contact, ApplicationError::Conflict { .. }));
    assert_eq!(same_contact.key(), "contact_no");
}

#[tokio::test]
async fn only_elevated_users_hand_out_the_elevated_role() {
    let app = TestApp::new().await;
    let users = &app.services.user_commands;
    let admin = users
        .register(None, RegisterUserBuilder::new("alice").build())
        .await
        .unwrap();
    let member = users
        .register(None, RegisterUserBuilder::new("bobby").build())
        .await
        .unwrap();

    let member_actor = app.services.user_queries.principal(member.id).await.unwrap();
    let err = users
        .register(Some(&member_actor), RegisterUserBuilder::new("carol").role(Role::Toaa).build())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let admin_actor = app.services.user_queries.principal(admin.id).await.unwrap();
    let promoted = users
        .register(Some(&admin_actor), RegisterUserBuilder::new("carol").role(Role::Toaa).build())
        .await
        .unwrap();
    assert_eq!(promoted.role, Role::Toaa);
}

#[tokio::test]
async fn weak_passwords_and_bad_emails_are_rejected() {
    let app = TestApp::new().await;
    let users = &app.services.user_commands;

    let weak = users
        .register(None, RegisterUserBuilder::new("alice").password("short").build())
        .await
        .unwrap_err();
    assert_eq!(weak.key(), "validation");

    let bad_email = users
        .register(None, RegisterUserBuilder::new("alice").email("nope").build())
        .await
        .unwrap_err();
    assert_eq!(bad_email.key(), "validation");
}

#[tokio::test]
async fn get_user_returns_the_public_view() {
    let app = TestApp::new().await;
    let created = app
        .services
        .user_commands
        .register(None, RegisterUserBuilder::new("alice").build())
        .await
        .unwrap();

    let fetched = app
        .services
        .user_queries
        .get_user(GetUserQuery { id: created.id })
        .await
        .unwrap();
    assert_eq!(fetched.username, "alice");
    assert_eq!(fetched.email_id, "alice@example.com");

    let json = serde_json::to_value(&fetched).unwrap();
    assert!(json.get("password_hash").is_none());

    let missing = app
        .services
        .user_queries
        .get_user(GetUserQuery { id: 999 })
        .await
        .unwrap_err();
    assert_eq!(missing.key(), "user_id");
}

#[tokio::test]
async fn registration_counts_checks_and_inserts_in_one_unit() {
    let tally = Arc::new(UnitTally::default());
    let calls = Arc::new(Mutex::new(Vec::new()));
    let app = TestApp::with_deps(|deps, pool| {
        deps.units = Arc::new(CountingUnits::new(pool.clone(), Arc::clone(&tally)));
        deps.users = Arc::new(RecordingUsers::new(pool.clone(), Arc::clone(&calls)));
    })
    .await;
    let users = &app.services.user_commands;

    let first = users
        .register(None, RegisterUserBuilder::new("alice").contact_no("555-0100").build())
        .await
        .unwrap();
    assert_eq!(first.role, Role::Toaa);
    assert_eq!(tally.snapshot(), (1, 1, 0));

    let recorded = calls.lock().unwrap().clone();
    let names: Vec<&str> = recorded.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        ["count", "get_by_filter", "get_by_filter", "get_by_filter", "insert"]
    );
    assert!(recorded.iter().all(|(_, in_unit)| *in_unit), "{recorded:?}");

    let clash = users
        .register(None, RegisterUserBuilder::new("bobby").email("alice@example.com").build())
        .await
        .unwrap_err();
    assert_eq!(clash.key(), "email_id");
    assert_eq!(tally.snapshot(), (2, 1, 1));
    assert_eq!(count_rows(&app.pool, "users").await, 1);
}

#[tokio::test]
async fn owners_update_their_profile_and_keep_their_own_values() {
    let app = TestApp::new().await;
    let users = &app.services.user_commands;
    users
        .register(None, RegisterUserBuilder::new("alice").build())
        .await
        .unwrap();
    let bob = users
        .register(None, RegisterUserBuilder::new("bobby").contact_no("555-0101").build())
        .await
        .unwrap();
    let bob_actor = app.services.user_queries.principal(bob.id).await.unwrap();

    let updated = users
        .update_user(
            &bob_actor,
            UpdateUserCommand {
                id: bob.id,
                name: Some("  Robert  ".into()),
                username: Some("robert".into()),
                email_id: Some("bobby@example.com".into()),
                password: Some("fresh pass 77".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Robert");
    assert_eq!(updated.username, "robert");
    assert_eq!(updated.email_id, "bobby@example.com");
    assert_eq!(updated.contact_no.as_deref(), Some("555-0101"));
    assert_eq!(updated.role, Role::Member);

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE id = ?")
        .bind(bob.id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(stored, "plain$fresh pass 77");
    let updated_by: Option<i64> = sqlx::query_scalar("SELECT updated_by FROM users WHERE id = ?")
        .bind(bob.id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(updated_by, Some(bob.id));

    let cleared = users
        .update_user(
            &bob_actor,
            UpdateUserCommand {
                id: bob.id,
                contact_no: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.contact_no, None);
    assert_eq!(cleared.username, "robert");
}

#[tokio::test]
async fn profile_updates_conflict_and_respect_ownership() {
    let app = TestApp::new().await;
    let users = &app.services.user_commands;
    let admin = users
        .register(None, RegisterUserBuilder::new("alice").build())
        .await
        .unwrap();
    let bob = users
        .register(None, RegisterUserBuilder::new("bobby").build())
        .await
        .unwrap();
    let carol = users
        .register(None, RegisterUserBuilder::new("carol").build())
        .await
        .unwrap();
    let bob_actor = app.services.user_queries.principal(bob.id).await.unwrap();
    let admin_actor = app.services.user_queries.principal(admin.id).await.unwrap();

    let taken = users
        .update_user(
            &bob_actor,
            UpdateUserCommand {
                id: bob.id,
                username: Some("carol".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(taken.key(), "username");

    let someone_else = users
        .update_user(
            &bob_actor,
            UpdateUserCommand {
                id: carol.id,
                name: Some("Hacked".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(someone_else, ApplicationError::Forbidden(_)));

    let weak = users
        .update_user(
            &bob_actor,
            UpdateUserCommand {
                id: bob.id,
                password: Some("short".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(weak.key(), "validation");

    let by_admin = users
        .update_user(
            &admin_actor,
            UpdateUserCommand {
                id: carol.id,
                name: Some("Caroline".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(by_admin.name, "Caroline");

    let missing = users
        .update_user(
            &admin_actor,
            UpdateUserCommand {
                id: 404,
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(missing.key(), "user_id");
}

#[tokio::test]
async fn users_can_be_listed_and_found_by_username() {
    let app = TestApp::new().await;
    let users = &app.services.user_commands;
    users
        .register(None, RegisterUserBuilder::new("alice").build())
        .await
        .unwrap();
    users
        .register(None, RegisterUserBuilder::new("bobby").build())
        .await
        .unwrap();
    let queries = &app.services.user_queries;

    let all: Vec<String> = queries
        .list_users()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(all, ["alice", "bobby"]);

    let found = queries.find_user_by_username("bobby").await.unwrap();
    assert_eq!(found.map(|u| u.email_id).as_deref(), Some("bobby@example.com"));
    assert!(queries.find_user_by_username("nobody").await.unwrap().is_none());
}
