//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum router with the fixed route table
//! - Apply fixed per-request bounds (timeout, header buffer, body cap)
//! - Log every request before its handler runs
//! - Serve handlers over the shared, read-mostly `ApiState`
//!
//! # Design Decisions
//! - Connections are served through hyper-util's connection builder so the
//!   header-buffer bound is an explicit constant, not a library default
//! - Handlers never close the pool; they hold a non-owning clone
//! - A failed `/tables` query or a failed envelope encoding is reported to
//!   the lifecycle coordinator, which decides fatality centrally; the
//!   handler's own response is best-effort since the process is exiting

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, DefaultBodyLimit, State},
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnectionBuilder;
use sqlx::AnyPool;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::{Service, ServiceExt};
use tower_http::timeout::TimeoutLayer;

use crate::db::catalog;
use crate::error::AppError;
use crate::http::response::{self, Envelope};

/// Fixed per-request timeout. A constant, not an operator surface.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fixed cap on the HTTP/1 read buffer, bounding header size.
const MAX_HEADER_BYTES: usize = 1 << 20;

/// Fixed cap on request body bytes.
const MAX_REQUEST_BYTES: usize = 1 << 20;

/// Shared state injected into handlers.
///
/// Read-mostly: every field is set once before the listener starts and
/// never mutated afterwards.
#[derive(Clone)]
pub struct ApiState {
    /// Wall-clock start, integer nanoseconds since epoch. Set once.
    pub started_unix_nanos: i64,

    /// Monotonic start, the uptime baseline.
    pub started: Instant,

    /// Debug flag from configuration.
    pub debug: bool,

    /// Build version reported by `/status`.
    pub version: &'static str,

    /// Non-owning handle for queries; the coordinator owns closing.
    pub pool: AnyPool,

    /// Channel to the lifecycle coordinator for errors it must classify.
    pub fatal: mpsc::UnboundedSender<AppError>,
}

impl ApiState {
    /// Report an error to the coordinator for classification.
    ///
    /// Dropped sends are tolerated: they only happen once shutdown has
    /// already begun.
    fn report(&self, err: AppError) {
        let _ = self.fatal.send(err);
    }
}

/// HTTP server for the status API.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Create a new server over the given shared state.
    pub fn new(state: ApiState) -> Self {
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with the fixed route table and middleware.
    fn build_router(state: ApiState) -> Router {
        Router::new()
            .route("/", get(root_handler))
            .route("/status", get(status_handler))
            .route("/tables", get(tables_handler))
            .with_state(state)
            .layer(middleware::from_fn(log_request))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                REQUEST_TIMEOUT,
            ))
            .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
    }

    /// Accept connections until the shutdown signal fires.
    ///
    /// Each connection is served on its own task with the fixed header
    /// bound applied. An accept error is returned as `ListenFailed`; the
    /// caller treats it as fatal.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), AppError> {
        let addr = listener.local_addr().map_err(AppError::ListenFailed)?;
        tracing::info!(address = %addr, "API: HTTP server starting");

        let mut make_service = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        loop {
            let (socket, remote) = tokio::select! {
                accepted = listener.accept() => accepted.map_err(AppError::ListenFailed)?,
                _ = shutdown.recv() => break,
            };

            let tower_service = match make_service.call(remote).await {
                Ok(service) => service,
                Err(never) => match never {},
            };

            tokio::spawn(async move {
                let socket = TokioIo::new(socket);
                let hyper_service = service_fn(move |request: Request<Incoming>| {
                    tower_service.clone().oneshot(request)
                });

                let mut builder = ConnectionBuilder::new(TokioExecutor::new());
                builder.http1().max_buf_size(MAX_HEADER_BYTES);

                if let Err(e) = builder.serve_connection(socket, hyper_service).await {
                    tracing::debug!(remote = %remote, error = %e, "API: connection error");
                }
            });
        }

        tracing::info!("API: HTTP server stopped");
        Ok(())
    }
}

/// Log every request before its handler runs. Logging never gates the
/// response.
async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Response {
    tracing::info!(
        method = %request.method(),
        version = ?request.version(),
        remote = %addr,
        path = %request.uri().path(),
        "API: handling request"
    );

    if tracing::enabled!(tracing::Level::DEBUG) {
        tracing::debug!(headers = ?request.headers(), "API: request detail");
    }

    next.run(request).await
}

/// Serialize and write an envelope as raw JSON bytes.
///
/// An encoding failure is reported to the coordinator as `EncodingFailed`;
/// the empty 500 below rarely reaches the client because the process is
/// already exiting.
fn transmit(state: &ApiState, envelope: &Envelope) -> Response {
    match serde_json::to_vec(envelope) {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "API: error encoding JSON response");
            state.report(AppError::EncodingFailed(e));
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /` - liveness probe with no backend dependency.
async fn root_handler(State(state): State<ApiState>) -> Response {
    transmit(&state, &Envelope::success_empty("It Works!"))
}

/// `GET /status` - debug flag, start time, uptime, and version.
async fn status_handler(State(state): State<ApiState>) -> Response {
    let uptime_nanos = u64::try_from(state.started.elapsed().as_nanos()).unwrap_or(u64::MAX);

    let mut data = BTreeMap::new();
    data.insert("debug".to_string(), state.debug.to_string());
    data.insert("started".to_string(), state.started_unix_nanos.to_string());
    data.insert("uptime".to_string(), uptime_nanos.to_string());
    data.insert("version".to_string(), state.version.to_string());

    transmit(&state, &Envelope::success("System functional", data))
}

/// `GET /tables` - distinct table names keyed by stringified index.
///
/// A failed catalog query is reported to the coordinator, preserving the
/// no-degraded-mode policy of the sanity check.
async fn tables_handler(State(state): State<ApiState>) -> Response {
    match catalog::list_tables(&state.pool).await {
        Ok(names) => transmit(&state, &Envelope::success("", response::indexed(&names))),
        Err(e) => {
            tracing::error!(error = %e, "API: tables query failed");
            state.report(e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
