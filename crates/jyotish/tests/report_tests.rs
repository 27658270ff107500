use chrono::NaiveDate;
use jyotish::analysis::MARRIAGE_TIMING;
use jyotish::{AstrologyReport, BirthData, Gender, ReportGenerator, ReportType};

fn birth(gender: Gender) -> BirthData {
    BirthData::new(NaiveDate::from_ymd_opt(1992, 7, 21).unwrap(), "09:45", "Varanasi", gender)
}

#[test]
fn test_personality_report_male_pronouns() {
    let report = ReportGenerator::new().generate_report(ReportType::Personality, &birth(Gender::Male));

    let words: Vec<&str> = report.summary.split(|c: char| !c.is_alphabetic()).collect();
    assert!(words.contains(&"he"));
    assert!(words.contains(&"his"));
    assert!(!words.contains(&"she"));
    assert!(!words.contains(&"they"));
    assert_eq!(report.recommendations.len(), 4);
}

#[test]
fn test_report_carries_input_and_type() {
    let input = birth(Gender::Female);
    let report = ReportGenerator::new().generate_report(ReportType::Health, &input);

    assert_eq!(report.report_type, ReportType::Health);
    assert_eq!(report.birth_data, input);
    assert!(report.id.starts_with("report_"));
    assert!(report.analysis.health.reproductive_health.as_ref().is_some_and(|r| !r.is_empty()));
    assert_eq!(report.recommendations.len(), 7);
}

#[test]
fn test_optional_sections_by_gender() {
    let generator = ReportGenerator::new();
    for gender in [Gender::Male, Gender::Female, Gender::Other] {
        let report = generator.generate_report(ReportType::FullReading, &birth(gender));
        let relationships = &report.analysis.relationships;
        match gender {
            Gender::Other => assert!(relationships.marriage_timing.is_none()),
            _ => assert_eq!(relationships.marriage_timing.as_deref(), Some(MARRIAGE_TIMING)),
        }
        assert_eq!(
            report.analysis.health.reproductive_health.is_some(),
            gender == Gender::Female
        );
    }
}

#[test]
fn test_ids_differ_between_calls() {
    let generator = ReportGenerator::new();
    let input = birth(Gender::Other);
    let a = generator.generate_report(ReportType::Career, &input);
    let b = generator.generate_report(ReportType::Career, &input);

    assert_ne!(a.id, b.id);
    assert_eq!(a.summary, b.summary);
    assert_eq!(a.recommendations, b.recommendations);
    assert_eq!(a.analysis, b.analysis);
}

#[test]
fn test_seeded_reports_share_id_suffix() {
    let generator = ReportGenerator::new();
    let input = birth(Gender::Male);
    let a = generator.generate_report_seeded(ReportType::Marriage, &input, 99);
    let b = generator.generate_report_seeded(ReportType::Marriage, &input, 99);

    assert_eq!(a.id.rsplit('_').next(), b.id.rsplit('_').next());
    assert!(a.summary.starts_with(&format!("Marriage prospects show {MARRIAGE_TIMING}. he seeks")));
}

#[test]
fn test_unknown_report_type_falls_through() {
    let report_type: ReportType = "comprehensive".parse().unwrap();
    let report = ReportGenerator::new().generate_report(report_type, &birth(Gender::Other));

    assert_eq!(
        report.summary,
        "This astrological analysis provides insights into their unique personality and life path."
    );
    assert!(report.recommendations.is_empty());
}

#[test]
fn test_every_report_type_has_content() {
    let generator = ReportGenerator::new();
    for report_type in ReportType::ALL {
        let report = generator.generate_report(report_type, &birth(Gender::Female));
        assert!(!report.summary.is_empty());
        assert!((4..=7).contains(&report.recommendations.len()), "{report_type}");
    }
}

#[test]
fn test_report_json_shape() {
    let report = ReportGenerator::new().generate_report(ReportType::Spirituality, &birth(Gender::Other));
    let value = serde_json::to_value(&report).unwrap();

    for key in ["id", "type", "birthData", "analysis", "summary", "recommendations", "generatedAt"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["type"], "SPIRITUALITY");
    assert_eq!(value["birthData"]["gender"], "OTHER");
    assert_eq!(value["birthData"]["date"], "1992-07-21");
    assert!(value["analysis"]["relationships"].get("marriage_timing").is_none());
    assert!(value["analysis"]["health"].get("reproductive_health").is_none());

    let back: AstrologyReport = serde_json::from_value(value).unwrap();
    assert_eq!(back, report);
}
