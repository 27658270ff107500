use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analysis::GenderSpecificAnalysis;
use crate::birth::{BirthData, Gender};

/// Category of report content.
///
/// `Unrecognized` stands in for any category the engine has no template
/// for; such reports get the generic summary and no recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportType {
    Personality,
    Compatibility,
    Career,
    Health,
    Spirituality,
    Marriage,
    FullReading,
    Unrecognized,
}

impl ReportType {
    pub const ALL: [ReportType; 7] = [
        ReportType::Personality,
        ReportType::Compatibility,
        ReportType::Career,
        ReportType::Health,
        ReportType::Spirituality,
        ReportType::Marriage,
        ReportType::FullReading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Personality => "PERSONALITY",
            ReportType::Compatibility => "COMPATIBILITY",
            ReportType::Career => "CAREER",
            ReportType::Health => "HEALTH",
            ReportType::Spirituality => "SPIRITUALITY",
            ReportType::Marriage => "MARRIAGE",
            ReportType::FullReading => "FULL_READING",
            ReportType::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportType::Personality => "Personality Analysis",
            ReportType::Compatibility => "Compatibility Analysis",
            ReportType::Career => "Career Guidance",
            ReportType::Health => "Health Analysis",
            ReportType::Spirituality => "Spiritual Guidance",
            ReportType::Marriage => "Marriage Prospects",
            ReportType::FullReading => "Complete Astrological Reading",
            ReportType::Unrecognized => "Astrological Analysis",
        }
    }
}

impl FromStr for ReportType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_uppercase().replace('-', "_");
        Ok(ReportType::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .unwrap_or(ReportType::Unrecognized))
    }
}

impl From<String> for ReportType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(report_type) => report_type,
            Err(never) => match never {},
        }
    }
}

impl From<ReportType> for String {
    fn from(value: ReportType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject/possessive/object pronouns for templated sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenderReference {
    pub subject: &'static str,
    pub possessive: &'static str,
    pub object: &'static str,
}

pub fn gender_reference(gender: Gender) -> GenderReference {
    match gender {
        Gender::Male => GenderReference { subject: "he", possessive: "his", object: "him" },
        Gender::Female => GenderReference { subject: "she", possessive: "her", object: "her" },
        Gender::Other => GenderReference { subject: "they", possessive: "their", object: "them" },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstrologyReport {
    pub id: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub birth_data: BirthData,
    pub analysis: GenderSpecificAnalysis,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_type_from_str() {
        assert_eq!("personality".parse::<ReportType>().unwrap(), ReportType::Personality);
        assert_eq!("full-reading".parse::<ReportType>().unwrap(), ReportType::FullReading);
        assert_eq!("FULL_READING".parse::<ReportType>().unwrap(), ReportType::FullReading);
        assert_eq!("love".parse::<ReportType>().unwrap(), ReportType::Unrecognized);
        assert_eq!("comprehensive".parse::<ReportType>().unwrap(), ReportType::Unrecognized);
    }

    #[test]
    fn test_report_type_serde() {
        assert_eq!(serde_json::to_string(&ReportType::Marriage).unwrap(), "\"MARRIAGE\"");
        let t: ReportType = serde_json::from_str("\"finance\"").unwrap();
        assert_eq!(t, ReportType::Unrecognized);
    }

    #[test]
    fn test_gender_reference() {
        assert_eq!(
            gender_reference(Gender::Male),
            GenderReference { subject: "he", possessive: "his", object: "him" }
        );
        assert_eq!(
            gender_reference(Gender::Female),
            GenderReference { subject: "she", possessive: "her", object: "her" }
        );
        assert_eq!(
            gender_reference(Gender::Other),
            GenderReference { subject: "they", possessive: "their", object: "them" }
        );
    }
}
