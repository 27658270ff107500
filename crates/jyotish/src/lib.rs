//! Gender-aware Vedic astrology report engine.
//!
//! Birth data goes in, a structured report comes out: synthetic planet
//! positions, a gender-specific analysis and the templated summary and
//! recommendations for the requested report type.

pub mod birth;
pub mod chart;
pub mod analysis;
pub mod report;

pub use birth::{BirthData, BirthDataError, Gender};
pub use chart::{Planet, PlanetPosition, ZodiacSign, generate_positions};
pub use analysis::{GenderAnalysisEngine, GenderSpecificAnalysis};
pub use report::{AstrologyReport, GenderReference, ReportGenerator, ReportType, gender_reference};
pub use report::export::{ExportError, ReportFormat, render_json, render_text, save_report};
