use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::analysis::GenderAnalysisEngine;
use crate::birth::BirthData;
use crate::chart::generate_positions;
use crate::report::templates::{recommendations, summary};
use crate::report::types::{AstrologyReport, ReportType};

const ID_PREFIX: &str = "report_";
const ID_SUFFIX_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `report_<unix millis>_<7 base-36 chars>`. Not checked for uniqueness.
pub fn generate_report_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}{}_{}", ID_PREFIX, now.timestamp_millis(), suffix)
}

/// Orchestrates positions, analysis and text assembly into a report.
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    engine: GenderAnalysisEngine,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self { engine: GenderAnalysisEngine::new() }
    }

    pub fn generate_report(&self, report_type: ReportType, birth: &BirthData) -> AstrologyReport {
        self.generate_report_with_rng(report_type, birth, &mut rand::thread_rng())
    }

    /// Reproducible positions and id suffix for a given seed.
    pub fn generate_report_seeded(&self, report_type: ReportType, birth: &BirthData, seed: u64) -> AstrologyReport {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.generate_report_with_rng(report_type, birth, &mut rng)
    }

    pub fn generate_report_with_rng<R: Rng + ?Sized>(
        &self,
        report_type: ReportType,
        birth: &BirthData,
        rng: &mut R,
    ) -> AstrologyReport {
        let positions = generate_positions(birth, rng);
        let analysis = self.engine.analyze(&positions, birth.gender);
        let now = Utc::now();

        if report_type == ReportType::Unrecognized {
            log::debug!("No template for report type, using generic summary");
        }

        AstrologyReport {
            id: generate_report_id(now, rng),
            report_type,
            birth_data: birth.clone(),
            summary: summary(report_type, &analysis, birth.gender),
            recommendations: recommendations(report_type, &analysis, birth.gender),
            analysis,
            generated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_report_id_format() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let id = generate_report_id(now, &mut ChaCha20Rng::seed_from_u64(3));
        let rest = id.strip_prefix("report_").unwrap();
        let (millis, suffix) = rest.split_once('_').unwrap();
        assert_eq!(millis, now.timestamp_millis().to_string());
        assert_eq!(suffix.len(), 7);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
