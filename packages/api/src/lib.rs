//! # API crate — shared fullstack server functions for Masthead
//!
//! This crate is the gateway between the Masthead frontend and its backend.
//! It defines every Dioxus server function the web frontend calls, along with
//! the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Password hashing (Argon2id) and session key constants |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`media`] | — | Object names and on-disk storage for uploaded post images |
//! | [`models`] | — | Database rows (`User`, `Post`) and their client-safe projections |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login`, `logout`
//! - **Posts**: `list_posts`, `get_post`, `create_post`, `update_post`, `delete_post`
//! - **Media**: `upload_image`
//!
//! Post writes derive the author from the session rather than trusting the
//! client, and update/delete are scoped by owner in the `WHERE` clause, so a
//! stale client can never write somebody else's rows.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod media;
pub mod models;

pub use models::{PostInfo, UserInfo};

/// Number of posts per archive page. The list query and the frontend's
/// pagination window both use this.
pub const POSTS_PER_PAGE: usize = 3;

/// Resolve the session to an authenticated user id, or fail.
#[cfg(feature = "server")]
async fn session_user_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new user with email and password and start their session.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if user already exists
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Same message for unknown email and bad password.
    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Fetch one archive page: newest first, offset `page * 3`, limit 3.
#[cfg(feature = "server")]
#[get("/api/posts")]
pub async fn list_posts(page: u32) -> Result<Vec<PostInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Post;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let limit = POSTS_PER_PAGE as i64;
    let offset = page as i64 * limit;

    let posts: Vec<Post> = sqlx::query_as(
        "SELECT * FROM posts ORDER BY created_at DESC OFFSET $1 LIMIT $2",
    )
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(posts.iter().map(|p| p.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/posts")]
pub async fn list_posts(page: u32) -> Result<Vec<PostInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch a single post by id.
#[cfg(feature = "server")]
#[get("/api/posts/:id")]
pub async fn get_post(id: i64) -> Result<PostInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Post;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let post: Option<Post> = sqlx::query_as("SELECT * FROM posts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    post.map(|p| p.to_info())
        .ok_or_else(|| ServerFnError::new("Post not found"))
}

#[cfg(not(feature = "server"))]
#[get("/api/posts/:id")]
pub async fn get_post(id: i64) -> Result<PostInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a post owned by the session user.
#[cfg(feature = "server")]
#[post("/api/posts", session: tower_sessions::Session)]
pub async fn create_post(
    title: String,
    content: String,
    image_url: Option<String>,
) -> Result<PostInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Post;

    let user_id = session_user_id(&session).await?;

    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ServerFnError::new("Title is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let post: Post = sqlx::query_as(
        "INSERT INTO posts (title, content, user_id, image_url) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&title)
    .bind(&content)
    .bind(user_id)
    .bind(&image_url)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(post_id = post.id, "post created");

    Ok(post.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/posts")]
pub async fn create_post(
    title: String,
    content: String,
    image_url: Option<String>,
) -> Result<PostInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a post. Scoped to the session user: updating a row you do not own
/// fails as "not found".
#[cfg(feature = "server")]
#[post("/api/posts/update", session: tower_sessions::Session)]
pub async fn update_post(
    id: i64,
    title: String,
    content: String,
    image_url: Option<String>,
) -> Result<PostInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Post;

    let user_id = session_user_id(&session).await?;

    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ServerFnError::new("Title is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let post: Option<Post> = sqlx::query_as(
        "UPDATE posts SET title = $1, content = $2, image_url = $3 WHERE id = $4 AND user_id = $5 RETURNING *",
    )
    .bind(&title)
    .bind(&content)
    .bind(&image_url)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    post.map(|p| p.to_info())
        .ok_or_else(|| ServerFnError::new("Post not found"))
}

#[cfg(not(feature = "server"))]
#[post("/api/posts/update")]
pub async fn update_post(
    id: i64,
    title: String,
    content: String,
    image_url: Option<String>,
) -> Result<PostInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a post. Scoped to the session user like [`update_post`].
#[cfg(feature = "server")]
#[post("/api/posts/delete", session: tower_sessions::Session)]
pub async fn delete_post(id: i64) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_id = session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Post not found"));
    }

    tracing::info!(post_id = id, "post deleted");

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/posts/delete")]
pub async fn delete_post(id: i64) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Store an uploaded image and return its public URL.
///
/// The stored name is the submission timestamp in milliseconds plus the
/// original extension — see [`media::object_name`]. If the row write that
/// usually follows this call fails, the object stays behind; there is no
/// compensating delete.
#[cfg(feature = "server")]
#[post("/api/media", session: tower_sessions::Session)]
pub async fn upload_image(file_name: String, data: Vec<u8>) -> Result<String, ServerFnError> {
    // Uploads are a privileged write like the row operations.
    let _user_id = session_user_id(&session).await?;

    let name = media::object_name(&file_name, chrono::Utc::now().timestamp_millis());
    let url = media::store_object(&name, &data)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(object = %name, bytes = data.len(), "image stored");

    Ok(url)
}

#[cfg(not(feature = "server"))]
#[post("/api/media")]
pub async fn upload_image(file_name: String, data: Vec<u8>) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
