pub mod types;
pub mod templates;
pub mod generator;
pub mod export;

pub use types::{AstrologyReport, GenderReference, ReportType, gender_reference};
pub use templates::{recommendations, summary};
pub use generator::{ReportGenerator, generate_report_id};
