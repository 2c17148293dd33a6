//! # API REST
//!
//! REST API implementation for KalpSağlık.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - Mounted screen instances, each with its own narration state and notice queue
//! - Eviction of mounted screens that clients stop polling
//!
//! Uses `api-shared` for wire types and `kalp-core` for screens and narration.

#![warn(rust_2018_idioms)]

pub mod registry;

use api_shared::{
    BlockRes, HealthRes, HealthService, HomeRes, MountHomeRes, MountTopicRes, NarrationRes,
    NavLinkRes, NoticeRes, ScreenKindRes, ScreenStatusRes, StepRes, TopicCardRes, TopicRes,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use kalp_core::content::{catalog, Catalog, Notice};
use kalp_core::{
    CoreConfig, HomeScreen, LogNotifier, NarrationController, NoticeQueue, SpeechEngine,
    TopicScreen,
};
use registry::{MountedScreen, Screen, ScreenRegistry};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

type ApiError = (StatusCode, &'static str);

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    catalog: &'static Catalog,
    engine: Arc<dyn SpeechEngine>,
    screens: Arc<ScreenRegistry>,
    screen_ttl: Duration,
}

impl AppState {
    /// Builds state around the engine and screen time-to-live selected by `cfg`.
    pub fn new(cfg: &CoreConfig) -> Self {
        Self::with_engine(cfg.build_speech_engine()).with_screen_ttl(cfg.screen_ttl())
    }

    pub fn with_engine(engine: Arc<dyn SpeechEngine>) -> Self {
        Self {
            catalog: catalog(),
            engine,
            screens: Arc::new(ScreenRegistry::new()),
            screen_ttl: CoreConfig::default().screen_ttl(),
        }
    }

    pub fn with_screen_ttl(mut self, screen_ttl: Duration) -> Self {
        self.screen_ttl = screen_ttl;
        self
    }

    pub fn screens(&self) -> &ScreenRegistry {
        &self.screens
    }

    /// Spawns the task that tears down screens nobody has requested for a whole screen TTL.
    ///
    /// Runs until the returned handle is aborted or the runtime shuts down.
    pub fn spawn_screen_sweeper(&self) -> JoinHandle<()> {
        let screens = Arc::clone(&self.screens);
        let ttl = self.screen_ttl;
        let period = (ttl / 2).max(Duration::from_secs(1));

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let evicted = screens.unmount_idle(ttl).await;
                if evicted > 0 {
                    tracing::debug!("{evicted} idle screen(s) evicted, {} mounted", screens.len());
                }
            }
        })
    }

    /// Controller for a one-off view that never narrates.
    fn view_narration(&self) -> NarrationController {
        NarrationController::new(Arc::clone(&self.engine), Arc::new(LogNotifier))
    }

    fn screen_narration(&self, notices: &NoticeQueue) -> NarrationController {
        NarrationController::new(Arc::clone(&self.engine), Arc::new(notices.clone()))
    }

    /// Looks up a mounted screen and marks it as in use.
    fn mounted(&self, screen_id: &str) -> Result<Arc<MountedScreen>, ApiError> {
        let mounted = Uuid::parse_str(screen_id)
            .ok()
            .and_then(|id| self.screens.get(&id))
            .ok_or((StatusCode::NOT_FOUND, "Unknown screen"))?;
        mounted.touch();
        Ok(mounted)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        home,
        topic,
        profile_notice,
        reminders_notice,
        mount_home,
        mount_topic,
        screen_status,
        toggle_page_narration,
        toggle_card_narration,
        unmount_screen,
    ),
    components(schemas(
        HealthRes,
        HomeRes,
        TopicCardRes,
        TopicRes,
        BlockRes,
        StepRes,
        NavLinkRes,
        NoticeRes,
        NarrationRes,
        ScreenKindRes,
        MountHomeRes,
        MountTopicRes,
        ScreenStatusRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router, Swagger UI included.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(home))
        .route("/topic/:id", get(topic))
        .route("/notices/profile", get(profile_notice))
        .route("/notices/reminders", get(reminders_notice))
        .route("/screens/home", post(mount_home))
        .route("/screens/topic/:id", post(mount_topic))
        .route(
            "/screens/:screen_id",
            get(screen_status).delete(unmount_screen),
        )
        .route("/screens/:screen_id/narration", post(toggle_page_narration))
        .route(
            "/screens/:screen_id/cards/:id/narration",
            post(toggle_card_narration),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Home screen with one card per topic", body = HomeRes)
    )
)]
#[axum::debug_handler]
async fn home(State(state): State<AppState>) -> Json<HomeRes> {
    let screen = HomeScreen::new(state.catalog, state.view_narration());
    Json(screen.view().into())
}

#[utoipa::path(
    get,
    path = "/topic/{id}",
    params(("id" = String, Path, description = "Topic id; unknown ids show the default topic")),
    responses(
        (status = 200, description = "Topic page", body = TopicRes)
    )
)]
#[axum::debug_handler]
async fn topic(State(state): State<AppState>, Path(id): Path<String>) -> Json<TopicRes> {
    let screen = TopicScreen::open(state.catalog, Some(&id), state.view_narration());
    Json(screen.view().into())
}

#[utoipa::path(
    get,
    path = "/notices/profile",
    responses(
        (status = 200, description = "Patient profile notice", body = NoticeRes)
    )
)]
#[axum::debug_handler]
async fn profile_notice() -> Json<NoticeRes> {
    Json(Notice::profile().into())
}

#[utoipa::path(
    get,
    path = "/notices/reminders",
    responses(
        (status = 200, description = "Pending reminders notice", body = NoticeRes)
    )
)]
#[axum::debug_handler]
async fn reminders_notice() -> Json<NoticeRes> {
    Json(Notice::reminders().into())
}

#[utoipa::path(
    post,
    path = "/screens/home",
    responses(
        (status = 201, description = "Home screen mounted", body = MountHomeRes)
    )
)]
#[axum::debug_handler]
async fn mount_home(State(state): State<AppState>) -> (StatusCode, Json<MountHomeRes>) {
    let notices = NoticeQueue::new();
    let screen = HomeScreen::new(state.catalog, state.screen_narration(&notices));
    let view = screen.view();
    let mounted = state.screens.mount(Screen::Home(screen), notices);

    (
        StatusCode::CREATED,
        Json(MountHomeRes {
            screen_id: mounted.id.to_string(),
            view: view.into(),
        }),
    )
}

#[utoipa::path(
    post,
    path = "/screens/topic/{id}",
    params(("id" = String, Path, description = "Topic id; unknown ids mount the default topic")),
    responses(
        (status = 201, description = "Topic screen mounted", body = MountTopicRes)
    )
)]
#[axum::debug_handler]
async fn mount_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<MountTopicRes>) {
    let notices = NoticeQueue::new();
    let screen = TopicScreen::open(state.catalog, Some(&id), state.screen_narration(&notices));
    let view = screen.view();
    let mounted = state.screens.mount(Screen::Topic(screen), notices);

    (
        StatusCode::CREATED,
        Json(MountTopicRes {
            screen_id: mounted.id.to_string(),
            view: view.into(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/screens/{screen_id}",
    params(("screen_id" = String, Path, description = "Mounted screen id")),
    responses(
        (
            status = 200,
            description = "Narration status and notices raised since the last poll",
            body = ScreenStatusRes
        ),
        (status = 404, description = "Unknown screen")
    )
)]
#[axum::debug_handler]
async fn screen_status(
    State(state): State<AppState>,
    Path(screen_id): Path<String>,
) -> Result<Json<ScreenStatusRes>, ApiError> {
    let mounted = state.mounted(&screen_id)?;
    let kind = match mounted.screen {
        Screen::Home(_) => ScreenKindRes::Home,
        Screen::Topic(_) => ScreenKindRes::Topic,
    };

    Ok(Json(ScreenStatusRes {
        screen_id: mounted.id.to_string(),
        kind,
        narration: mounted.narration_state().into(),
        notices: mounted.notices.drain().into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/screens/{screen_id}/narration",
    params(("screen_id" = String, Path, description = "Mounted topic screen id")),
    responses(
        (status = 200, description = "Narration state after the toggle", body = NarrationRes),
        (status = 400, description = "Screen is not a topic screen"),
        (status = 404, description = "Unknown screen")
    )
)]
#[axum::debug_handler]
async fn toggle_page_narration(
    State(state): State<AppState>,
    Path(screen_id): Path<String>,
) -> Result<Json<NarrationRes>, ApiError> {
    let mounted = state.mounted(&screen_id)?;
    let Screen::Topic(topic) = &mounted.screen else {
        return Err((StatusCode::BAD_REQUEST, "Page narration needs a topic screen"));
    };

    topic.toggle_narration().await;
    Ok(Json(mounted.narration_state().into()))
}

#[utoipa::path(
    post,
    path = "/screens/{screen_id}/cards/{id}/narration",
    params(
        ("screen_id" = String, Path, description = "Mounted home screen id"),
        ("id" = String, Path, description = "Topic id of the card")
    ),
    responses(
        (status = 200, description = "Narration state after the toggle", body = NarrationRes),
        (status = 400, description = "Screen is not a home screen"),
        (status = 404, description = "Unknown screen or card")
    )
)]
#[axum::debug_handler]
async fn toggle_card_narration(
    State(state): State<AppState>,
    Path((screen_id, id)): Path<(String, String)>,
) -> Result<Json<NarrationRes>, ApiError> {
    let mounted = state.mounted(&screen_id)?;
    let Screen::Home(home) = &mounted.screen else {
        return Err((StatusCode::BAD_REQUEST, "Card narration needs a home screen"));
    };

    if let Err(e) = home.toggle_card(&id).await {
        tracing::warn!("card narration rejected: {e}");
        return Err((StatusCode::NOT_FOUND, "Unknown card"));
    }
    Ok(Json(mounted.narration_state().into()))
}

#[utoipa::path(
    delete,
    path = "/screens/{screen_id}",
    params(("screen_id" = String, Path, description = "Mounted screen id")),
    responses(
        (status = 204, description = "Screen torn down; narration stopped"),
        (status = 404, description = "Unknown screen")
    )
)]
#[axum::debug_handler]
async fn unmount_screen(
    State(state): State<AppState>,
    Path(screen_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = Uuid::parse_str(&screen_id).map_err(|_| (StatusCode::NOT_FOUND, "Unknown screen"))?;
    if state.screens.unmount(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Unknown screen"))
    }
}
