use dioxus::prelude::*;

use ui::{route_decision, use_session, AuthProvider, GuardDecision, Navbar, PostFeed};
use views::{CreatePost, EditPost, Home, Login, NotFound, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[layout(RequireAuth)]
            #[route("/create")]
            CreatePost {},
            #[route("/edit/:id")]
            EditPost { id: i64 },
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_http::services::ServeDir;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to migrate session store");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    // Build the Dioxus app: uploaded images first, then the application
    let router = axum::Router::new()
        .nest_service(
            api::media::MEDIA_URL_PREFIX,
            ServeDir::new(api::media::media_root()),
        )
        .serve_dioxus_application(ServeConfig::new(), App)
        // Add session layer to all routes
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Page chrome shared by every route: the masthead bar and the post feed
/// store, provided via context so the create/edit flows can mutate the same
/// collection the archive renders from.
#[component]
fn Shell() -> Element {
    use_context_provider(|| Signal::new(PostFeed::default()));
    // Where the guard sends visitors back to after they authenticate.
    use_context_provider(|| Signal::new(Option::<Route>::None));

    rsx! {
        Navbar {}
        main {
            Outlet::<Route> {}
        }
    }
}

/// Gate for the editorial suite. Pure function of the session store: a pending
/// identity check renders a placeholder and never admits; a resolved check
/// without an identity redirects to login, recording the requested route so
/// Login can return there.
#[component]
fn RequireAuth() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut return_to = use_context::<Signal<Option<Route>>>();
    let requested: Route = use_route();

    match route_decision(&session()) {
        GuardDecision::Verifying => rsx! {
            div {
                class: "verifying",
                p { "Verifying Identity..." }
            }
        },
        GuardDecision::RedirectToLogin => {
            return_to.set(Some(requested));
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardDecision::Admit => rsx! {
            Outlet::<Route> {}
        },
    }
}
