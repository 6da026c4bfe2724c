use backend::{
    build_rocket,
    config::ServerConfig,
    cors::CORS,
    queries::PgCompetitorStore,
    routes::AppState,
    session::SessionRegistry,
};
use rocket::{routes, fs::NamedFile};
use shuttle_runtime::CustomError;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::{info, debug};
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

async fn run_session_cleanup(sessions: Arc<SessionRegistry>) {
    let mut interval = interval(Duration::from_secs(60));
    info!("🧹 Session cleanup started");

    loop {
        interval.tick().await;
        let purged = sessions.purge_expired();
        if purged > 0 {
            info!("🗑️ Removed {} expired sessions", purged);
        } else {
            debug!("No expired sessions, {} active", sessions.len());
        }
    }
}

#[rocket::get("/<path..>")]
async fn spa_handler(path: std::path::PathBuf, temp_dir: &rocket::State<std::path::PathBuf>) -> Option<NamedFile> {
    let file_path = temp_dir.join(&path);
    if file_path.exists() && file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(temp_dir.join("index.html")).await.ok()
    }
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🍪 Starting Cookie Competition server");

    let config = ServerConfig::from_lookup(|key| secret_store.get(key));
    match &config.allowed_origin {
        Some(origin) => info!("CORS allows {} and localhost", origin),
        None => info!("ALLOWED_ORIGIN not set - CORS allows localhost only"),
    }

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(CustomError::new)?;

    info!("📋 Migrations complete");

    let temp_dir = std::env::temp_dir().join(format!("cookie_competition_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&temp_dir).map_err(CustomError::new)?;
    STATIC_DIR.extract(&temp_dir).map_err(CustomError::new)?;

    let app_state = AppState::new(PgCompetitorStore::new(pool), config.session_ttl_minutes);
    tokio::spawn(run_session_cleanup(app_state.sessions.clone()));

    let rocket = build_rocket(app_state, CORS::new(config.allowed_origin))
        .manage(temp_dir)
        .mount("/", routes![spa_handler]);

    Ok(rocket.into())
}
