//! Domain services: derived scoring, reporting rollups, bootstrap seeding

pub mod reporting;
pub mod scoring;
pub mod seed;

pub use reporting::ReportingService;
pub use scoring::{compute_score, score_for};
pub use seed::Seeder;
