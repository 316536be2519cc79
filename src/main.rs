use blog_core::{
    application::{
        ApplicationError, ApplicationResult,
        commands::{
            blogs::{CreateBlogCommand, DeleteBlogCommand, UpdateBlogByTitleCommand, UpdateBlogCommand},
            comments::{AddCommentCommand, RemoveCommentCommand},
            reactions::{ReactCommand, WithdrawReactionCommand},
            users::{DeleteUserCommand, RegisterUserCommand, UpdateUserCommand},
        },
        dto::AuthenticatedUser,
        queries::{
            blogs::{GetBlogQuery, GetCommentThreadQuery},
            users::GetUserQuery,
        },
        services::ApplicationServices,
    },
    bootstrap as wiring,
    config::AppConfig,
    domain::{
        blog::BlogId,
        reaction::ReactionStatus,
        user::{Gender, Role},
    },
    infrastructure::database,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use std::io::BufRead;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Passwords never travel as arguments. They come from this variable or,
/// when it is unset, from the first line of standard input.
const PASSWORD_ENV: &str = "BLOG_USER_PASSWORD";

#[derive(Parser, Debug)]
#[command(name = "blog_core", about = "Operate the blog store from the command line")]
struct Cli {
    /// Database URL, overrides DATABASE_URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply pending migrations and exit
    Migrate,
    /// Password is read from BLOG_USER_PASSWORD or standard input
    RegisterUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        contact_no: Option<String>,
        #[arg(long)]
        profile_picture_url: Option<String>,
        #[arg(long, default_value = "PREFER_NOT_TO_SAY")]
        gender: Gender,
        #[arg(long)]
        role: Option<Role>,
        /// Acting user id; omit for self sign-up
        #[arg(long)]
        actor: Option<i64>,
    },
    ShowUser {
        id: i64,
    },
    ListUsers,
    FindUser {
        username: String,
    },
    UpdateUser {
        id: i64,
        #[arg(long)]
        actor: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        contact_no: Option<String>,
        #[arg(long)]
        profile_picture_url: Option<String>,
        /// Read a new password from BLOG_USER_PASSWORD or standard input
        #[arg(long)]
        change_password: bool,
    },
    DeleteUser {
        id: i64,
        #[arg(long)]
        actor: i64,
    },
    CreateBlog {
        #[arg(long)]
        actor: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        keywords: Option<String>,
    },
    ShowBlog {
        id: i64,
    },
    ListBlogs {
        #[arg(long)]
        actor: i64,
    },
    UpdateBlog {
        id: i64,
        #[arg(long)]
        actor: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        keywords: Option<String>,
    },
    /// Edit the blog with this exact title
    UpdateBlogByTitle {
        title: String,
        #[arg(long)]
        actor: i64,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        keywords: Option<String>,
    },
    DeleteBlog {
        id: i64,
        #[arg(long)]
        actor: i64,
    },
    Comment {
        #[arg(long)]
        actor: i64,
        #[arg(long)]
        blog_id: i64,
        #[arg(long)]
        text: String,
        #[arg(long)]
        reply_to: Option<i64>,
    },
    /// Show a comment with every reply below it
    Thread {
        comment_id: i64,
    },
    DeleteComment {
        id: i64,
        #[arg(long)]
        actor: i64,
    },
    React {
        #[arg(long)]
        actor: i64,
        #[arg(long)]
        blog_id: i64,
        /// LIKED or DISLIKED
        #[arg(long)]
        status: ReactionStatus,
    },
    WithdrawReaction {
        #[arg(long)]
        actor: i64,
        #[arg(long)]
        blog_id: i64,
    },
    Reactions {
        blog_id: i64,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url {
        config = config.with_database_url(url);
    }

    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    database::run_migrations(&pool).await?;
    if matches!(cli.command, Command::Migrate) {
        tracing::info!("migrations applied");
        return Ok(());
    }

    let services = wiring::services(&pool);
    match run(&services, cli.command).await {
        Ok(output) => println!("{}", serde_json::to_string_pretty(&output)?),
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            eprintln!("{}", serde_json::to_string_pretty(&err.to_body())?);
            pool.close().await;
            std::process::exit(2);
        }
    }

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

fn read_password() -> ApplicationResult<String> {
    password_from(std::env::var(PASSWORD_ENV).ok(), std::io::stdin().lock())
}

fn password_from(env_value: Option<String>, mut input: impl BufRead) -> ApplicationResult<String> {
    if let Some(password) = env_value.filter(|p| !p.is_empty()) {
        return Ok(password);
    }
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|err| ApplicationError::infrastructure(format!("could not read password: {err}")))?;
    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err(ApplicationError::validation(format!(
            "no password given: set {PASSWORD_ENV} or pipe it on standard input"
        )));
    }
    Ok(password.to_owned())
}

fn json(value: impl Serialize) -> ApplicationResult<Value> {
    serde_json::to_value(value).map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

async fn principal(services: &ApplicationServices, id: i64) -> ApplicationResult<AuthenticatedUser> {
    services.user_queries.principal(id).await
}

async fn run(services: &ApplicationServices, command: Command) -> ApplicationResult<Value> {
    match command {
        Command::Migrate => json(true),
        Command::RegisterUser {
            name,
            username,
            email,
            contact_no,
            profile_picture_url,
            gender,
            role,
            actor,
        } => {
            let actor = match actor {
                Some(id) => Some(principal(services, id).await?),
                None => None,
            };
            let password = read_password()?;
            let user = services
                .user_commands
                .register(
                    actor.as_ref(),
                    RegisterUserCommand {
                        name,
                        username,
                        password,
                        email_id: email,
                        contact_no,
                        profile_picture_url,
                        gender,
                        role,
                    },
                )
                .await?;
            json(user)
        }
        Command::ShowUser { id } => json(services.user_queries.get_user(GetUserQuery { id }).await?),
        Command::ListUsers => json(services.user_queries.list_users().await?),
        Command::FindUser { username } => {
            json(services.user_queries.find_user_by_username(&username).await?)
        }
        Command::UpdateUser {
            id,
            actor,
            name,
            username,
            email,
            contact_no,
            profile_picture_url,
            change_password,
        } => {
            let actor = principal(services, actor).await?;
            let password = if change_password {
                Some(read_password()?)
            } else {
                None
            };
            let user = services
                .user_commands
                .update_user(
                    &actor,
                    UpdateUserCommand {
                        id,
                        name,
                        username,
                        password,
                        email_id: email,
                        contact_no,
                        profile_picture_url,
                    },
                )
                .await?;
            json(user)
        }
        Command::DeleteUser { id, actor } => {
            let actor = principal(services, actor).await?;
            json(
                services
                    .user_commands
                    .delete_user(&actor, DeleteUserCommand { id })
                    .await?,
            )
        }
        Command::CreateBlog {
            actor,
            title,
            content,
            keywords,
        } => {
            let actor = principal(services, actor).await?;
            let blog = services
                .blog_commands
                .create_blog(
                    &actor,
                    CreateBlogCommand {
                        title,
                        content,
                        keywords,
                    },
                )
                .await?;
            json(blog)
        }
        Command::ShowBlog { id } => json(services.blog_queries.get_blog(GetBlogQuery { id }).await?),
        Command::ListBlogs { actor } => {
            let actor = principal(services, actor).await?;
            json(services.blog_queries.list_blogs(&actor).await?)
        }
        Command::UpdateBlog {
            id,
            actor,
            title,
            content,
            keywords,
        } => {
            let actor = principal(services, actor).await?;
            let blog = services
                .blog_commands
                .update_blog(
                    &actor,
                    UpdateBlogCommand {
                        id,
                        title,
                        content,
                        keywords,
                    },
                )
                .await?;
            json(blog)
        }
        Command::UpdateBlogByTitle {
            title,
            actor,
            content,
            keywords,
        } => {
            let actor = principal(services, actor).await?;
            let blog = services
                .blog_commands
                .update_blog_by_title(
                    &actor,
                    UpdateBlogByTitleCommand {
                        title,
                        content,
                        keywords,
                    },
                )
                .await?;
            json(blog)
        }
        Command::DeleteBlog { id, actor } => {
            let actor = principal(services, actor).await?;
            json(
                services
                    .blog_commands
                    .delete_blog(&actor, DeleteBlogCommand { id })
                    .await?,
            )
        }
        Command::Comment {
            actor,
            blog_id,
            text,
            reply_to,
        } => {
            let actor = principal(services, actor).await?;
            let comment = services
                .comment_commands
                .add_comment(
                    &actor,
                    AddCommentCommand {
                        blog_id,
                        text,
                        reply_comment_id: reply_to,
                    },
                )
                .await?;
            json(comment)
        }
        Command::Thread { comment_id } => json(
            services
                .blog_queries
                .comment_thread(GetCommentThreadQuery { comment_id })
                .await?,
        ),
        Command::DeleteComment { id, actor } => {
            let actor = principal(services, actor).await?;
            json(
                services
                    .comment_commands
                    .remove_comment(&actor, RemoveCommentCommand { id })
                    .await?,
            )
        }
        Command::React {
            actor,
            blog_id,
            status,
        } => {
            let actor = principal(services, actor).await?;
            json(
                services
                    .reaction_commands
                    .react(&actor, ReactCommand { blog_id, status })
                    .await?,
            )
        }
        Command::WithdrawReaction { actor, blog_id } => {
            let actor = principal(services, actor).await?;
            services
                .reaction_commands
                .withdraw_reaction(&actor, WithdrawReactionCommand { blog_id })
                .await?;
            json(true)
        }
        Command::Reactions { blog_id } => json(
            services
                .blog_queries
                .reactions_for_blog(BlogId::new(blog_id)?)
                .await?,
        ),
    }
}
