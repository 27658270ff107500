pub mod types;
pub mod positions;
pub mod influence;

pub use types::{Planet, PlanetPosition, ZodiacSign};
pub use positions::{find_position, generate_positions};
pub use influence::{PlanetaryInfluence, planetary_influence};
