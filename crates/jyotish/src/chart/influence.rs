//! Masculine/feminine influence weights per planet.
//!
//! Reference data only. Report content does not depend on these values.

use serde::{Deserialize, Serialize};

use crate::chart::types::Planet;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryInfluence {
    pub masculine: f64,
    pub feminine: f64,
}

// (planet, masculine, feminine)
const INFLUENCES: &[(Planet, f64, f64)] = &[
    (Planet::Sun, 0.8, 0.6),
    (Planet::Moon, 0.4, 0.9),
    (Planet::Mars, 0.9, 0.7),
    (Planet::Mercury, 0.6, 0.6),
    (Planet::Jupiter, 0.8, 0.7),
    (Planet::Venus, 0.5, 0.9),
    (Planet::Saturn, 0.7, 0.6),
    (Planet::Rahu, 0.6, 0.5),
    (Planet::Ketu, 0.5, 0.6),
];

pub fn planetary_influence(planet: Planet) -> PlanetaryInfluence {
    INFLUENCES
        .iter()
        .find(|(p, _, _)| *p == planet)
        .map(|(_, masculine, feminine)| PlanetaryInfluence {
            masculine: *masculine,
            feminine: *feminine,
        })
        .unwrap_or(PlanetaryInfluence { masculine: 0.5, feminine: 0.5 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_planet_has_weights() {
        for planet in Planet::ALL {
            assert!(INFLUENCES.iter().any(|(p, _, _)| *p == planet), "{planet} missing");
        }
    }

    #[test]
    fn test_planetary_influence() {
        let moon = planetary_influence(Planet::Moon);
        assert_eq!(moon.masculine, 0.4);
        assert_eq!(moon.feminine, 0.9);
        assert_eq!(planetary_influence(Planet::Mars).masculine, 0.9);
    }
}
