//! Gender-specific analysis sections.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityAnalysis {
    pub core_traits: Vec<String>,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leadership_style: Option<String>,
    pub communication_style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipAnalysis {
    pub compatibility_factors: Vec<String>,
    pub relationship_patterns: Vec<String>,
    /// Absent for the non-binary branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_timing: Option<String>,
    pub ideal_partner_traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerAnalysis {
    pub suitable_fields: Vec<String>,
    pub professional_strengths: Vec<String>,
    pub leadership_potential: String,
    pub work_environment_preferences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthAnalysis {
    pub vulnerable_areas: Vec<String>,
    pub preventive_measures: Vec<String>,
    pub mental_health_focus: Vec<String>,
    /// Female branch only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reproductive_health: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiritualAnalysis {
    pub spiritual_inclinations: Vec<String>,
    pub meditation_practices: Vec<String>,
    pub growth_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderSpecificAnalysis {
    pub personality: PersonalityAnalysis,
    pub relationships: RelationshipAnalysis,
    pub career: CareerAnalysis,
    pub health: HealthAnalysis,
    pub spiritual: SpiritualAnalysis,
}
