// Library for both binaries and the integration tests

pub mod clock;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod measurement_repo;
pub mod models;
pub mod publisher;
pub mod report;
pub mod routes;
pub mod version;
pub mod weather;
