//! Synthetic planetary positions.
//!
//! No ephemeris is consulted. Sign and house follow the planet's index in
//! [`Planet::ALL`]; only the degree and the retrograde flag are random.

use rand::Rng;

use crate::birth::BirthData;
use crate::chart::types::{Planet, PlanetPosition, ZodiacSign};

/// Chance threshold above which a planet is marked retrograde (20%).
const RETROGRADE_THRESHOLD: f64 = 0.8;

/// Generate one position per planet, in [`Planet::ALL`] order.
///
/// The birth data is accepted for interface stability but is not read.
pub fn generate_positions<R: Rng + ?Sized>(_birth: &BirthData, rng: &mut R) -> Vec<PlanetPosition> {
    Planet::ALL
        .iter()
        .enumerate()
        .map(|(index, planet)| PlanetPosition {
            planet: *planet,
            sign: ZodiacSign::from_index(index),
            degree: rng.gen_range(0.0..30.0),
            house: ((index % 12) + 1) as u8,
            retrograde: rng.gen::<f64>() > RETROGRADE_THRESHOLD,
        })
        .collect()
}

/// Look up the position of `planet`, if present.
pub fn find_position(positions: &[PlanetPosition], planet: Planet) -> Option<&PlanetPosition> {
    positions.iter().find(|p| p.planet == planet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth::Gender;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn birth() -> BirthData {
        BirthData::new(NaiveDate::from_ymd_opt(1988, 11, 3).unwrap(), "14:05", "Chennai", Gender::Male)
    }

    #[test]
    fn test_positions_follow_planet_index() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let positions = generate_positions(&birth(), &mut rng);

        assert_eq!(positions.len(), 9);
        for (index, pos) in positions.iter().enumerate() {
            assert_eq!(pos.planet, Planet::ALL[index]);
            assert_eq!(pos.sign, ZodiacSign::ALL[index % 12]);
            assert_eq!(pos.house as usize, index % 12 + 1);
            assert!(pos.degree >= 0.0 && pos.degree < 30.0);
        }
        assert_eq!(positions[8].sign, ZodiacSign::Sagittarius);
    }

    #[test]
    fn test_same_seed_same_positions() {
        let a = generate_positions(&birth(), &mut ChaCha20Rng::seed_from_u64(42));
        let b = generate_positions(&birth(), &mut ChaCha20Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_find_position() {
        let positions = generate_positions(&birth(), &mut ChaCha20Rng::seed_from_u64(1));
        let venus = find_position(&positions, Planet::Venus).unwrap();
        assert_eq!(venus.sign, ZodiacSign::Virgo);
        assert_eq!(venus.house, 6);
        assert!(find_position(&positions[..2], Planet::Ketu).is_none());
    }
}
