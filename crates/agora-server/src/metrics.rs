use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_gauge, register_histogram_vec, CounterVec, Gauge, HistogramVec,
};

pub static QUERIES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!("agora_queries_total", "Queries by surface", &["surface"]).unwrap()
});

pub static QUERY_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "agora_query_duration_seconds",
        "Filter evaluation latency by surface",
        &["surface"]
    )
    .unwrap()
});

pub static QUERY_RESULTS: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "agora_query_results",
        "Result-set size by surface",
        &["surface"],
        vec![0.0, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0]
    )
    .unwrap()
});

pub static CATALOG_LISTINGS: Lazy<Gauge> = Lazy::new(|| {
    register_gauge!("agora_catalog_listings", "Listings in the live catalog").unwrap()
});

pub static CATALOG_RELOADS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "agora_catalog_reloads_total",
        "Catalog reloads by result",
        &["result"]
    )
    .unwrap()
});
