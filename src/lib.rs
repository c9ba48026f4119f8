pub mod advisor;
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod normalize;
pub mod profile;
pub mod scoring;
pub mod shortlist;
pub mod telemetry;
