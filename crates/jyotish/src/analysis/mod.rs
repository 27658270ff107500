pub mod types;
pub mod engine;

pub use types::{
    CareerAnalysis, GenderSpecificAnalysis, HealthAnalysis, PersonalityAnalysis,
    RelationshipAnalysis, SpiritualAnalysis,
};
pub use engine::{GenderAnalysisEngine, MARRIAGE_TIMING};
