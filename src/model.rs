//! Core data for the planet wheel: the ordered body catalog and the weight calculator.
//! Catalog order is wheel order, so index 0 is the body the wheel starts on.

use crate::error::WeightError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialBody {
    pub name: &'static str,
    /// Surface gravity relative to Earth.
    pub gravity: f64,
    /// Image path served next to index.html.
    pub sprite: &'static str,
}

pub const CATALOG: &[CelestialBody] = &[
    CelestialBody { name: "Pluto", gravity: 0.06, sprite: "planet-assets/pluto.png" },
    CelestialBody { name: "Neptune", gravity: 1.148, sprite: "planet-assets/neptune.png" },
    CelestialBody { name: "Uranus", gravity: 0.917, sprite: "planet-assets/uranus.png" },
    CelestialBody { name: "Saturn", gravity: 1.139, sprite: "planet-assets/saturn.png" },
    CelestialBody { name: "Jupiter", gravity: 2.640, sprite: "planet-assets/jupiter.png" },
    CelestialBody { name: "Mars", gravity: 0.3895, sprite: "planet-assets/mars.png" },
    CelestialBody { name: "Moon", gravity: 0.1655, sprite: "planet-assets/moon.png" },
    CelestialBody { name: "Earth", gravity: 1.0, sprite: "planet-assets/earth.png" },
    CelestialBody { name: "Venus", gravity: 0.9032, sprite: "planet-assets/venus.png" },
    CelestialBody { name: "Mercury", gravity: 0.377, sprite: "planet-assets/mercury.png" },
    CelestialBody { name: "Sun", gravity: 27.9, sprite: "planet-assets/sun.png" },
];

pub fn find_body(name: &str) -> Option<&'static CelestialBody> {
    CATALOG.iter().find(|b| b.name == name)
}

pub fn sprite_for(name: &str) -> Option<&'static str> {
    find_body(name).map(|b| b.sprite)
}

/// Scales an Earth weight by the named body's gravity. The result is not rounded.
pub fn compute_weight(earth_weight: f64, name: &str) -> Result<f64, WeightError> {
    let body = find_body(name).ok_or_else(|| WeightError::UnknownBody(name.to_string()))?;
    Ok(earth_weight * body.gravity)
}
