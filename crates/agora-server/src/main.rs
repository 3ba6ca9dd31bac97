use std::net::SocketAddr;
use std::sync::Arc;

use agora_catalog::{CatalogHandle, CatalogSource, JsonFileSource, SeedSource};
use agora_core::{community_tags, slug, Criteria, QueryEngine, ResultOrder, VerifiedFilter};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use opentelemetry_otlp::WithExportConfig;
use prometheus::{Encoder, TextEncoder};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::prelude::*;

mod metrics;

const RECENT_WINDOW: usize = 6;
const FEATURED_WINDOW: usize = 4;
const FEATURED_CATEGORY: &str = "Services";
const SUGGEST_WINDOW: usize = 5;

#[derive(Clone)]
struct AppState {
    catalog: CatalogHandle,
    // Same taxonomy, different bucket vocabularies per surface.
    browse: Arc<QueryEngine>,
    search: Arc<QueryEngine>,
    source: Arc<dyn CatalogSource>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Tracing + optional OTLP
    let otlp = std::env::var("OTLP_ENDPOINT").ok();
    if let Some(endpoint) = otlp {
        let tracer = opentelemetry_otlp::new_pipeline()
            .tracing()
            .with_exporter(
                opentelemetry_otlp::new_exporter()
                    .tonic()
                    .with_endpoint(endpoint),
            )
            .install_batch(opentelemetry_sdk::runtime::Tokio)
            .ok();
        if let Some(tracer) = tracer {
            let telemetry = tracing_opentelemetry::layer().with_tracer(tracer);
            let subscriber = tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer())
                .with(telemetry);
            tracing::subscriber::set_global_default(subscriber).ok();
        } else {
            tracing_subscriber::fmt()
                .with_max_level(Level::INFO)
                .with_env_filter("info")
                .init();
        }
    } else {
        tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_env_filter("info")
            .init();
    }

    let source: Arc<dyn CatalogSource> = match std::env::var("CATALOG_PATH") {
        Ok(path) => Arc::new(JsonFileSource::new(path)),
        Err(_) => Arc::new(SeedSource),
    };
    let catalog = match source.load() {
        Ok(c) => c,
        Err(e) => {
            warn!("loading {} failed: {} — falling back to seed", source.describe(), e);
            SeedSource.load()?
        }
    };
    metrics::CATALOG_LISTINGS.set(catalog.len() as f64);
    info!(listings = catalog.len(), source = %source.describe(), "catalog ready");

    let state = AppState {
        catalog: CatalogHandle::new(catalog),
        browse: Arc::new(QueryEngine::browse()),
        search: Arc::new(QueryEngine::search()),
        source,
    };

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    info!("http listening on {}", addr);

    let app = router(state);
    let use_tls = std::env::var("TLS_CERT_PATH").is_ok() && std::env::var("TLS_KEY_PATH").is_ok();
    if use_tls {
        let cert = std::fs::read(std::env::var("TLS_CERT_PATH")?)?;
        let key = std::fs::read(std::env::var("TLS_KEY_PATH")?)?;
        let config = axum_server::tls_rustls::RustlsConfig::from_pem(cert, key).await?;
        axum_server::bind_rustls(addr, config)
            .serve(app.into_make_service())
            .await?;
    } else {
        axum_server::bind(addr).serve(app.into_make_service()).await?;
    }
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/home", get(home))
        .route("/v1/listings", get(listings))
        .route("/v1/listings/:id", get(listing_detail))
        .route("/v1/categories", get(categories))
        .route("/v1/categories/:slug/listings", get(category_listings))
        .route("/v1/community", get(community))
        .route("/v1/search", get(search))
        .route("/v1/suggest", get(suggest))
        .route("/admin/reload", post(admin_reload))
        .route("/metrics", get(metrics_text))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn observe(surface: &str, results: usize) {
    metrics::QUERIES_TOTAL.with_label_values(&[surface]).inc();
    metrics::QUERY_RESULTS
        .with_label_values(&[surface])
        .observe(results as f64);
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

#[derive(serde::Deserialize, Default)]
struct HomeParams {
    price: Option<String>,
    verified: Option<String>,
}

async fn home(State(app): State<AppState>, Query(p): Query<HomeParams>) -> impl IntoResponse {
    let _timer = metrics::QUERY_DURATION_SECONDS
        .with_label_values(&["home"])
        .start_timer();
    let catalog = app.catalog.snapshot();
    let verified = p.verified.as_deref().map(VerifiedFilter::parse).unwrap_or_default();

    let recent = app.browse.filter(
        &catalog,
        &Criteria {
            price: p.price.clone(),
            verified,
            limit: Some(RECENT_WINDOW),
            ..Criteria::default()
        },
    );
    let featured = app.browse.filter(
        &catalog,
        &Criteria {
            category: Some(FEATURED_CATEGORY.to_string()),
            price: p.price,
            verified,
            limit: Some(FEATURED_WINDOW),
            ..Criteria::default()
        },
    );
    observe("home", recent.len() + featured.len());
    Json(json!({ "recent": recent, "featured": featured }))
}

#[derive(serde::Deserialize, Default)]
struct BrowseParams {
    category: Option<String>,
    price: Option<String>,
    verified: Option<String>,
    tag: Option<String>,
    order: Option<String>,
    limit: Option<usize>,
}

impl BrowseParams {
    fn criteria(&self) -> Criteria {
        Criteria {
            category: self.category.clone(),
            price: self.price.clone(),
            verified: self
                .verified
                .as_deref()
                .map(VerifiedFilter::parse)
                .unwrap_or_default(),
            tag: self.tag.clone(),
            order: match self.order.as_deref() {
                Some("newest") => ResultOrder::Newest,
                _ => ResultOrder::Catalog,
            },
            limit: self.limit,
            ..Criteria::default()
        }
    }
}

async fn listings(State(app): State<AppState>, Query(p): Query<BrowseParams>) -> impl IntoResponse {
    let _timer = metrics::QUERY_DURATION_SECONDS
        .with_label_values(&["listings"])
        .start_timer();
    let out = app.browse.filter(&app.catalog.snapshot(), &p.criteria());
    observe("listings", out.len());
    Json(out)
}

async fn listing_detail(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match app.catalog.snapshot().get(&id) {
        Some(listing) => (StatusCode::OK, Json(json!(listing))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "listing not found"})),
        )
            .into_response(),
    }
}

async fn categories(State(app): State<AppState>) -> impl IntoResponse {
    let taxonomy = app.browse.taxonomy();
    let slugs: Vec<serde_json::Value> = taxonomy
        .names()
        .map(|name| json!({ "name": name, "slug": slug(name) }))
        .collect();
    Json(json!({
        "primary": taxonomy.primary(),
        "additional": taxonomy.additional(),
        "slugs": slugs,
        "community_tags": community_tags(),
    }))
}

#[derive(serde::Deserialize, Default)]
struct CategoryParams {
    price: Option<String>,
    verified: Option<String>,
    tag: Option<String>,
}

async fn category_listings(
    State(app): State<AppState>,
    Path(raw): Path<String>,
    Query(p): Query<CategoryParams>,
) -> impl IntoResponse {
    let _timer = metrics::QUERY_DURATION_SECONDS
        .with_label_values(&["category"])
        .start_timer();
    let taxonomy = app.browse.taxonomy();
    let category = taxonomy.resolve(&raw);
    // Tag sub-filtering belongs to the community feed alone.
    let tag = if taxonomy.is_community(&category) {
        p.tag
    } else {
        None
    };
    let out = app.browse.filter(
        &app.catalog.snapshot(),
        &Criteria {
            category: Some(category.clone()),
            price: p.price,
            verified: p
                .verified
                .as_deref()
                .map(VerifiedFilter::parse)
                .unwrap_or_default(),
            tag,
            ..Criteria::default()
        },
    );
    observe("category", out.len());
    Json(json!({ "category": category, "listings": out }))
}

#[derive(serde::Deserialize, Default)]
struct CommunityParams {
    tag: Option<String>,
}

async fn community(
    State(app): State<AppState>,
    Query(p): Query<CommunityParams>,
) -> impl IntoResponse {
    let _timer = metrics::QUERY_DURATION_SECONDS
        .with_label_values(&["community"])
        .start_timer();
    let out = app.browse.filter(
        &app.catalog.snapshot(),
        &Criteria {
            category: Some(agora_core::COMMUNITY.to_string()),
            tag: p.tag,
            ..Criteria::default()
        },
    );
    observe("community", out.len());
    Json(json!({ "tags": community_tags(), "listings": out }))
}

#[derive(serde::Deserialize, Default)]
struct SearchParams {
    q: Option<String>,
    category: Option<String>,
    location: Option<String>,
    price: Option<String>,
    limit: Option<usize>,
}

async fn search(State(app): State<AppState>, Query(p): Query<SearchParams>) -> impl IntoResponse {
    let _timer = metrics::QUERY_DURATION_SECONDS
        .with_label_values(&["search"])
        .start_timer();
    let out = app.search.filter(
        &app.catalog.snapshot(),
        &Criteria {
            text: p.q,
            category: p.category,
            location: p.location,
            price: p.price,
            limit: p.limit,
            ..Criteria::default()
        },
    );
    observe("search", out.len());
    Json(out)
}

#[derive(serde::Deserialize, Default)]
struct SuggestParams {
    q: Option<String>,
}

async fn suggest(State(app): State<AppState>, Query(p): Query<SuggestParams>) -> impl IntoResponse {
    let _timer = metrics::QUERY_DURATION_SECONDS
        .with_label_values(&["suggest"])
        .start_timer();
    let query = p.q.unwrap_or_default();
    if query.trim().is_empty() {
        observe("suggest", 0);
        return Json(Vec::new());
    }
    let out = app.search.filter(
        &app.catalog.snapshot(),
        &Criteria {
            text: Some(query),
            limit: Some(SUGGEST_WINDOW),
            ..Criteria::default()
        },
    );
    observe("suggest", out.len());
    Json(out)
}

async fn admin_reload(State(app): State<AppState>) -> impl IntoResponse {
    match app.source.load() {
        Ok(catalog) => {
            let listings = catalog.len();
            app.catalog.replace(catalog);
            metrics::CATALOG_LISTINGS.set(listings as f64);
            metrics::CATALOG_RELOADS_TOTAL
                .with_label_values(&["ok"])
                .inc();
            (StatusCode::OK, Json(json!({ "listings": listings }))).into_response()
        }
        Err(e) => {
            metrics::CATALOG_RELOADS_TOTAL
                .with_label_values(&["error"])
                .inc();
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn metrics_text() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buf = Vec::new();
    let _ = encoder.encode(&metric_families, &mut buf);
    (StatusCode::OK, String::from_utf8(buf).unwrap_or_default())
}
