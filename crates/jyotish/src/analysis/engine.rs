//! Gender-aware analysis builder.
//!
//! Every section is chosen by gender alone. Planet positions are looked
//! up for the sections that traditionally depend on them, but their sign,
//! degree and house do not change the returned text. Item order in the
//! tables below matters: report templates slice them by position.

use std::collections::HashMap;

use crate::analysis::types::{
    CareerAnalysis, GenderSpecificAnalysis, HealthAnalysis, PersonalityAnalysis,
    RelationshipAnalysis, SpiritualAnalysis,
};
use crate::birth::Gender;
use crate::chart::{find_position, Planet, PlanetPosition};

pub const MARRIAGE_TIMING: &str =
    "Favorable periods for marriage: Ages 25-30, with strongest indicators around age 27-28";

const BASE_PERSONALITY_TRAITS: &[&str] = &[
    "Naturally curious and learning-oriented",
    "Values personal growth and development",
    "Seeks meaning and purpose in life",
    "Appreciates beauty and harmony",
];

const BASE_CAREER_FIELDS: &[&str] = &[
    "Consulting and advisory services",
    "Research and analysis",
    "Communication and media",
    "Management and administration",
];

// Planets consulted per section
const PERSONALITY_PLANETS: &[Planet] = &[Planet::Sun, Planet::Moon];
const RELATIONSHIP_PLANETS: &[Planet] = &[Planet::Venus, Planet::Mars, Planet::Moon, Planet::Jupiter];
const CAREER_PLANETS: &[Planet] = &[Planet::Sun, Planet::Mars, Planet::Mercury, Planet::Saturn];
const HEALTH_PLANETS: &[Planet] = &[Planet::Moon, Planet::Mars, Planet::Saturn];
const SPIRITUAL_PLANETS: &[Planet] = &[Planet::Ketu, Planet::Jupiter, Planet::Moon];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn prefixed(base: &[&str], items: &[&str]) -> Vec<String> {
    base.iter().chain(items.iter()).map(|s| s.to_string()).collect()
}

fn personality_for(gender: Gender) -> PersonalityAnalysis {
    match gender {
        Gender::Female => PersonalityAnalysis {
            core_traits: prefixed(BASE_PERSONALITY_TRAITS, &[
                "Intuitive decision-making",
                "Emotional intelligence",
                "Nurturing leadership style",
                "Collaborative approach to challenges",
            ]),
            strengths: strings(&[
                "Strong emotional resilience",
                "Excellent interpersonal skills",
                "Natural counseling abilities",
                "Intuitive problem-solving",
                "Multitasking capabilities",
            ]),
            challenges: strings(&[
                "Tendency to over-analyze emotions",
                "Difficulty setting boundaries",
                "Self-doubt in leadership roles",
                "Perfectionist tendencies",
            ]),
            leadership_style: Some(
                "Collaborative and empathetic leadership with focus on team harmony".to_string(),
            ),
            communication_style: "Diplomatic, emotionally aware, and relationship-focused".to_string(),
        },
        Gender::Male => PersonalityAnalysis {
            core_traits: prefixed(BASE_PERSONALITY_TRAITS, &[
                "Goal-oriented mindset",
                "Logical problem-solving",
                "Independent decision-making",
                "Competitive spirit",
            ]),
            strengths: strings(&[
                "Strong analytical abilities",
                "Natural leadership qualities",
                "Decisive action-taking",
                "Strategic thinking",
                "Risk-taking capability",
            ]),
            challenges: strings(&[
                "Difficulty expressing emotions",
                "Tendency toward impatience",
                "Over-reliance on logic",
                "Potential for work-life imbalance",
            ]),
            leadership_style: Some(
                "Direct and results-oriented leadership with clear hierarchies".to_string(),
            ),
            communication_style: "Direct, factual, and achievement-focused".to_string(),
        },
        Gender::Other => PersonalityAnalysis {
            core_traits: prefixed(BASE_PERSONALITY_TRAITS, &[
                "Balanced perspective",
                "Fluid thinking patterns",
                "Adaptable approach",
                "Inclusive mindset",
            ]),
            strengths: strings(&[
                "Balanced emotional and logical processing",
                "Adaptable leadership style",
                "Creative problem-solving",
                "Bridge-building abilities",
                "Inclusive communication",
            ]),
            challenges: strings(&[
                "Identity-related internal conflicts",
                "Societal acceptance challenges",
                "Decision-making complexity",
                "Boundary definition difficulties",
            ]),
            leadership_style: Some(
                "Inclusive and adaptive leadership balancing multiple perspectives".to_string(),
            ),
            communication_style: "Flexible, empathetic, and inclusive communication".to_string(),
        },
    }
}

fn relationships_for(gender: Gender) -> RelationshipAnalysis {
    match gender {
        Gender::Female => RelationshipAnalysis {
            compatibility_factors: strings(&[
                "Emotional security and stability",
                "Intellectual compatibility",
                "Shared values and life goals",
                "Mutual respect and understanding",
                "Communication styles alignment",
            ]),
            relationship_patterns: strings(&[
                "Seeks deep emotional connections",
                "Values long-term commitment",
                "Nurturing and supportive partner",
                "May sacrifice personal needs for relationship harmony",
            ]),
            marriage_timing: Some(MARRIAGE_TIMING.to_string()),
            ideal_partner_traits: strings(&[
                "Emotionally mature and stable",
                "Good communicator",
                "Respectful and supportive",
                "Shares similar life values",
                "Financially responsible",
            ]),
        },
        Gender::Male => RelationshipAnalysis {
            compatibility_factors: strings(&[
                "Shared ambitions and goals",
                "Mutual respect for independence",
                "Physical and emotional attraction",
                "Complementary skills and interests",
                "Family values alignment",
            ]),
            relationship_patterns: strings(&[
                "May prioritize career over relationships initially",
                "Values loyalty and commitment",
                "Provider and protector role",
                "Needs personal space and independence",
            ]),
            marriage_timing: Some(MARRIAGE_TIMING.to_string()),
            ideal_partner_traits: strings(&[
                "Independent yet supportive",
                "Understanding of career priorities",
                "Emotionally intelligent",
                "Shares life vision",
                "Good family values",
            ]),
        },
        Gender::Other => RelationshipAnalysis {
            compatibility_factors: strings(&[
                "Acceptance and understanding",
                "Open communication",
                "Shared values about identity",
                "Mutual growth and support",
                "Flexible relationship dynamics",
            ]),
            relationship_patterns: strings(&[
                "Values authentic self-expression",
                "Seeks understanding and acceptance",
                "Flexible in relationship roles",
                "May face unique societal challenges",
            ]),
            marriage_timing: None,
            ideal_partner_traits: strings(&[
                "Open-minded and accepting",
                "Excellent communicator",
                "Supportive of identity journey",
                "Emotionally mature",
                "Values authenticity",
            ]),
        },
    }
}

fn career_for(gender: Gender) -> CareerAnalysis {
    match gender {
        Gender::Female => CareerAnalysis {
            suitable_fields: prefixed(BASE_CAREER_FIELDS, &[
                "Healthcare and wellness",
                "Education and training",
                "Psychology and counseling",
                "Human resources",
                "Social work and NGOs",
                "Creative arts and design",
                "Public relations and communications",
            ]),
            professional_strengths: strings(&[
                "Excellent team collaboration",
                "Strong communication skills",
                "Emotional intelligence in workplace",
                "Detail-oriented approach",
                "Relationship building abilities",
            ]),
            leadership_potential: "High potential for transformational leadership with focus on team development and inclusive decision-making".to_string(),
            work_environment_preferences: strings(&[
                "Collaborative team settings",
                "Flexible work arrangements",
                "Purpose-driven organizations",
                "Supportive and inclusive culture",
            ]),
        },
        Gender::Male => CareerAnalysis {
            suitable_fields: prefixed(BASE_CAREER_FIELDS, &[
                "Engineering and technology",
                "Business and entrepreneurship",
                "Finance and investments",
                "Sales and marketing",
                "Construction and manufacturing",
                "Sports and fitness",
                "Military and security services",
            ]),
            professional_strengths: strings(&[
                "Strategic planning abilities",
                "Competitive advantage seeking",
                "Risk-taking in business decisions",
                "Technical problem-solving",
                "Results-oriented approach",
            ]),
            leadership_potential: "Strong potential for executive leadership with focus on results and organizational growth".to_string(),
            work_environment_preferences: strings(&[
                "Competitive and challenging environments",
                "Clear hierarchies and structures",
                "Performance-based recognition",
                "Growth and advancement opportunities",
            ]),
        },
        Gender::Other => CareerAnalysis {
            suitable_fields: prefixed(BASE_CAREER_FIELDS, &[
                "Diversity and inclusion consulting",
                "Creative industries",
                "Mental health and counseling",
                "Research and academia",
                "Social advocacy and activism",
                "Art therapy and healing arts",
            ]),
            professional_strengths: strings(&[
                "Unique perspective and creativity",
                "Bridge-building between different groups",
                "Adaptable problem-solving approach",
                "Inclusive leadership style",
                "Innovation and out-of-box thinking",
            ]),
            leadership_potential: "Potential for innovative leadership that brings fresh perspectives and inclusive approaches".to_string(),
            work_environment_preferences: strings(&[
                "Inclusive and diverse workplaces",
                "Creative and flexible environments",
                "Organizations with social mission",
                "Supportive and understanding culture",
            ]),
        },
    }
}

fn health_for(gender: Gender) -> HealthAnalysis {
    match gender {
        Gender::Female => HealthAnalysis {
            vulnerable_areas: strings(&[
                "Reproductive health issues",
                "Hormonal imbalances",
                "Emotional stress-related conditions",
                "Digestive sensitivities",
                "Joint and bone health",
            ]),
            preventive_measures: strings(&[
                "Regular gynecological check-ups",
                "Stress management through meditation",
                "Balanced nutrition with iron and calcium",
                "Regular exercise including yoga",
                "Hormonal health monitoring",
            ]),
            mental_health_focus: strings(&[
                "Emotional balance and mood regulation",
                "Stress management techniques",
                "Self-care and boundary setting",
                "Support system development",
            ]),
            reproductive_health: Some(strings(&[
                "Regular hormonal health monitoring",
                "Fertility awareness and planning",
                "Menstrual health management",
                "Pregnancy and childbirth considerations",
            ])),
        },
        Gender::Male => HealthAnalysis {
            vulnerable_areas: strings(&[
                "Cardiovascular health",
                "Stress-related hypertension",
                "Digestive issues from irregular eating",
                "Musculoskeletal problems",
                "Mental health and emotional expression",
            ]),
            preventive_measures: strings(&[
                "Regular cardiovascular exercise",
                "Stress management and relaxation",
                "Regular health screenings",
                "Balanced work-life schedule",
                "Emotional expression and communication",
            ]),
            mental_health_focus: strings(&[
                "Stress management and pressure handling",
                "Emotional expression development",
                "Work-life balance maintenance",
                "Relationship and communication skills",
            ]),
            reproductive_health: None,
        },
        Gender::Other => HealthAnalysis {
            vulnerable_areas: strings(&[
                "Identity-related stress and anxiety",
                "Social acceptance challenges",
                "Hormonal health considerations",
                "Mental health and depression",
                "General wellness and self-care",
            ]),
            preventive_measures: strings(&[
                "Regular mental health support",
                "Inclusive healthcare provider selection",
                "Stress management and self-care",
                "Community support and connection",
                "Holistic wellness approach",
            ]),
            mental_health_focus: strings(&[
                "Identity acceptance and self-love",
                "Stress management for social challenges",
                "Community support and belonging",
                "Authentic self-expression development",
            ]),
            reproductive_health: None,
        },
    }
}

/// Same block for every gender.
fn spiritual_section() -> SpiritualAnalysis {
    SpiritualAnalysis {
        spiritual_inclinations: strings(&[
            "Meditation and mindfulness practices",
            "Service to others and community",
            "Nature connection and earth-based spirituality",
            "Wisdom traditions and philosophical study",
            "Healing arts and energy work",
        ]),
        meditation_practices: strings(&[
            "Loving-kindness meditation",
            "Chakra balancing and energy work",
            "Mantra chanting and sound healing",
            "Walking meditation in nature",
            "Gratitude and appreciation practices",
        ]),
        growth_areas: strings(&[
            "Self-acceptance and inner peace",
            "Compassion for self and others",
            "Intuitive development and trust",
            "Service and contribution to community",
            "Balance between material and spiritual life",
        ]),
    }
}

fn build_analysis(gender: Gender) -> GenderSpecificAnalysis {
    GenderSpecificAnalysis {
        personality: personality_for(gender),
        relationships: relationships_for(gender),
        career: career_for(gender),
        health: health_for(gender),
        spiritual: spiritual_section(),
    }
}

lazy_static::lazy_static! {
    static ref ANALYSIS_TABLE: HashMap<Gender, GenderSpecificAnalysis> = [Gender::Male, Gender::Female, Gender::Other]
        .into_iter()
        .map(|gender| (gender, build_analysis(gender)))
        .collect();
}

/// Stateless analysis service.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenderAnalysisEngine;

impl GenderAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build the five-section analysis for `gender`.
    pub fn analyze(&self, positions: &[PlanetPosition], gender: Gender) -> GenderSpecificAnalysis {
        for (section, planets) in [
            ("personality", PERSONALITY_PLANETS),
            ("relationships", RELATIONSHIP_PLANETS),
            ("career", CAREER_PLANETS),
            ("health", HEALTH_PLANETS),
            ("spiritual", SPIRITUAL_PLANETS),
        ] {
            let found = planets
                .iter()
                .filter(|planet| find_position(positions, **planet).is_some())
                .count();
            log::debug!("{section}: {found}/{} planets placed", planets.len());
        }

        match ANALYSIS_TABLE.get(&gender) {
            Some(analysis) => analysis.clone(),
            None => build_analysis(gender),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_traits_prefix_core_traits() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            let analysis = build_analysis(gender);
            assert_eq!(analysis.personality.core_traits.len(), 8);
            assert_eq!(analysis.personality.core_traits[0], BASE_PERSONALITY_TRAITS[0]);
            assert_eq!(analysis.personality.core_traits[3], BASE_PERSONALITY_TRAITS[3]);
            assert_eq!(analysis.career.suitable_fields[..4], strings(BASE_CAREER_FIELDS)[..]);
        }
    }

    #[test]
    fn test_optional_fields_by_gender() {
        let female = build_analysis(Gender::Female);
        let male = build_analysis(Gender::Male);
        let other = build_analysis(Gender::Other);

        assert_eq!(female.health.reproductive_health.as_ref().map(Vec::len), Some(4));
        assert!(male.health.reproductive_health.is_none());
        assert!(other.health.reproductive_health.is_none());

        assert_eq!(male.relationships.marriage_timing.as_deref(), Some(MARRIAGE_TIMING));
        assert_eq!(female.relationships.marriage_timing.as_deref(), Some(MARRIAGE_TIMING));
        assert!(other.relationships.marriage_timing.is_none());

        assert!(male.personality.leadership_style.is_some());
        assert!(other.personality.leadership_style.is_some());
    }

    #[test]
    fn test_spiritual_is_shared() {
        assert_eq!(build_analysis(Gender::Male).spiritual, build_analysis(Gender::Other).spiritual);
    }

    #[test]
    fn test_positions_do_not_change_content() {
        let engine = GenderAnalysisEngine::new();
        let with_none = engine.analyze(&[], Gender::Female);
        let chart = vec![PlanetPosition {
            planet: Planet::Venus,
            sign: crate::chart::ZodiacSign::Taurus,
            degree: 12.5,
            house: 7,
            retrograde: true,
        }];
        assert_eq!(engine.analyze(&chart, Gender::Female), with_none);
    }
}
