//! Summary and recommendation templates per report type.
//!
//! Templates read analysis lists by position (first item, first two, ...),
//! so the order of the analysis tables is part of the output contract.

use crate::analysis::GenderSpecificAnalysis;
use crate::birth::Gender;
use crate::report::types::{gender_reference, ReportType};

/// Join the first `n` items with `sep`.
fn head(items: &[String], n: usize, sep: &str) -> String {
    items.iter().take(n).map(String::as_str).collect::<Vec<_>>().join(sep)
}

fn first(items: &[String]) -> &str {
    items.first().map(String::as_str).unwrap_or_default()
}

pub fn summary(report_type: ReportType, analysis: &GenderSpecificAnalysis, gender: Gender) -> String {
    let r = gender_reference(gender);
    let personality = &analysis.personality;
    let relationships = &analysis.relationships;
    let career = &analysis.career;
    let health = &analysis.health;
    let spiritual = &analysis.spiritual;

    match report_type {
        ReportType::Personality => format!(
            "This comprehensive personality analysis reveals {} as someone with {}. {} natural strengths include {}, while {} may need to work on {}. {} communication style is {}.",
            r.subject,
            head(&personality.core_traits, 3, ", "),
            r.possessive,
            head(&personality.strengths, 2, " and "),
            r.subject,
            first(&personality.challenges),
            r.possessive,
            personality.communication_style.to_lowercase(),
        ),
        ReportType::Compatibility => format!(
            "In relationships, {} seeks {}. {} relationship patterns show {}. The ideal partner would be {}.",
            r.subject,
            head(&relationships.compatibility_factors, 2, " and "),
            r.possessive,
            first(&relationships.relationship_patterns),
            head(&relationships.ideal_partner_traits, 2, " and "),
        ),
        ReportType::Career => format!(
            "Career-wise, {} shows strong potential in {}. {} professional strengths include {}. {}",
            r.subject,
            head(&career.suitable_fields, 3, ", "),
            r.possessive,
            head(&career.professional_strengths, 2, " and "),
            career.leadership_potential,
        ),
        ReportType::Health => format!(
            "Health considerations include attention to {}. Key preventive measures involve {}. Mental health focus should be on {}.",
            head(&health.vulnerable_areas, 2, " and "),
            head(&health.preventive_measures, 2, " and "),
            first(&health.mental_health_focus),
        ),
        ReportType::Spirituality => format!(
            "Spiritually, {} is drawn to {}. Recommended practices include {}. Key growth areas are {}.",
            r.subject,
            head(&spiritual.spiritual_inclinations, 2, " and "),
            head(&spiritual.meditation_practices, 2, " and "),
            head(&spiritual.growth_areas, 2, " and "),
        ),
        ReportType::Marriage => format!(
            "Marriage prospects show {}. {} seeks {} in a life partner. The ideal relationship would feature {}.",
            relationships.marriage_timing.as_deref().unwrap_or_default(),
            r.subject,
            head(&relationships.compatibility_factors, 2, " and "),
            head(&relationships.ideal_partner_traits, 2, " and "),
        ),
        ReportType::FullReading => format!(
            "This complete astrological profile reveals a multi-faceted individual with {}. In career, {} excels in {}, while relationships are marked by {}. Health focus should be on {}, and spiritual growth through {}.",
            head(&personality.core_traits, 2, " and "),
            r.subject,
            first(&career.suitable_fields),
            first(&relationships.relationship_patterns),
            first(&health.vulnerable_areas),
            first(&spiritual.spiritual_inclinations),
        ),
        ReportType::Unrecognized => format!(
            "This astrological analysis provides insights into {} unique personality and life path.",
            r.possessive,
        ),
    }
}

pub fn recommendations(
    report_type: ReportType,
    analysis: &GenderSpecificAnalysis,
    gender: Gender,
) -> Vec<String> {
    let r = gender_reference(gender);
    let personality = &analysis.personality;
    let relationships = &analysis.relationships;
    let career = &analysis.career;
    let health = &analysis.health;
    let spiritual = &analysis.spiritual;

    match report_type {
        ReportType::Personality => vec![
            format!(
                "Focus on developing {} natural strengths: {}",
                r.possessive,
                head(&personality.strengths, 2, " and ")
            ),
            format!("Work on overcoming challenges with {}", first(&personality.challenges)),
            format!(
                "Embrace {} {} communication style",
                r.possessive,
                personality.communication_style.to_lowercase()
            ),
            format!(
                "Consider leadership roles that utilize {} {}",
                r.possessive,
                personality.leadership_style.as_deref().unwrap_or_default().to_lowercase()
            ),
        ],
        ReportType::Career => vec![
            format!("Explore opportunities in {}", head(&career.suitable_fields, 3, ", ")),
            format!(
                "Leverage professional strengths: {}",
                head(&career.professional_strengths, 2, " and ")
            ),
            format!(
                "Seek work environments that offer {}",
                head(&career.work_environment_preferences, 2, " and ")
            ),
            format!("Develop leadership skills aligned with {} natural style", r.possessive),
        ],
        ReportType::Health => {
            let mut items: Vec<String> = health.preventive_measures.iter().take(3).cloned().collect();
            items.push(format!(
                "Pay special attention to {}",
                head(&health.vulnerable_areas, 2, " and ")
            ));
            items.push(format!(
                "Focus on mental health through {}",
                head(&health.mental_health_focus, 2, " and ")
            ));
            if let Some(reproductive) = &health.reproductive_health {
                items.extend(reproductive.iter().take(2).cloned());
            }
            items
        }
        ReportType::Compatibility | ReportType::Marriage => vec![
            format!(
                "Look for partners who offer {}",
                head(&relationships.compatibility_factors, 2, " and ")
            ),
            format!(
                "Seek someone with these traits: {}",
                head(&relationships.ideal_partner_traits, 3, ", ")
            ),
            format!(
                "Be aware of {} relationship patterns: {}",
                r.possessive,
                first(&relationships.relationship_patterns)
            ),
            format!(
                "Consider timing: {}",
                relationships.marriage_timing.as_deref().unwrap_or_default()
            ),
        ],
        ReportType::Spirituality => {
            let mut items: Vec<String> = spiritual.meditation_practices.iter().take(3).cloned().collect();
            items.push(format!(
                "Focus on spiritual growth in {}",
                head(&spiritual.growth_areas, 2, " and ")
            ));
            items.push(format!(
                "Explore {} natural inclination toward {}",
                r.possessive,
                first(&spiritual.spiritual_inclinations)
            ));
            items
        }
        ReportType::FullReading => vec![
            format!("Career: Focus on {}", head(&career.suitable_fields, 2, " or ")),
            format!("Relationships: Seek {}", first(&relationships.compatibility_factors)),
            format!("Health: Prioritize {}", first(&health.preventive_measures)),
            format!("Spirituality: Practice {}", first(&spiritual.meditation_practices)),
            format!("Personal Growth: Work on {}", first(&personality.challenges)),
        ],
        ReportType::Unrecognized => Vec::new(),
    }
}
