use crate::error::SimError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::Serialize;

/// Material properties for the simulated ball
///
/// Fields are private so every value in circulation has passed the range
/// checks in [`Material::new`]. Presets are built from known-good constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct Material {
    /// Display name of the material
    name: &'static str,

    /// Coefficient of restitution (bounciness), 0-1.2
    restitution: f32,

    /// Coefficient of friction, non-negative
    friction: f32,

    /// Mass of the ball when made of this material
    mass: f32,
}

impl Material {
    /// Creates a new material with the specified properties
    ///
    /// Restitution must lie within `[0, 1.2]`; values above 1.0 make the
    /// ball gain speed on impact. Friction must be non-negative and mass
    /// strictly positive.
    pub fn new(name: &'static str, restitution: f32, friction: f32, mass: f32) -> Result<Self> {
        if !restitution.is_finite() || !(0.0..=1.2).contains(&restitution) {
            return Err(SimError::InvalidParameter(format!(
                "restitution must be within [0, 1.2], got {}",
                restitution
            )));
        }
        if !friction.is_finite() || friction < 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "friction must be non-negative, got {}",
                friction
            )));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "mass must be positive, got {}",
                mass
            )));
        }

        Ok(Self {
            name,
            restitution,
            friction,
            mass,
        })
    }

    /// Creates the metal preset (heavy, moderate bounce)
    pub fn metal() -> Self {
        Self {
            name: "Metal",
            restitution: 0.5,
            friction: 0.05,
            mass: 7.5,
        }
    }

    /// Creates the rubber preset (light, gains speed on impact)
    pub fn rubber() -> Self {
        Self {
            name: "Rubber",
            restitution: 1.1,
            friction: 0.1,
            mass: 1.3,
        }
    }

    /// Creates the ice preset (nearly frictionless, lively bounce)
    pub fn ice() -> Self {
        Self {
            name: "Ice",
            restitution: 0.7,
            friction: 0.001,
            mass: 0.9,
        }
    }

    /// Creates the stone preset (heavy, dull bounce)
    pub fn stone() -> Self {
        Self {
            name: "Stone",
            restitution: 0.4,
            friction: 0.09,
            mass: 2.5,
        }
    }

    /// Creates the plastic preset (the default material)
    pub fn plastic() -> Self {
        Self {
            name: "Plastic",
            restitution: 0.6,
            friction: 0.08,
            mass: 1.07,
        }
    }

    /// Returns all built-in materials in display order
    pub fn presets() -> [Self; 5] {
        [
            Self::metal(),
            Self::rubber(),
            Self::ice(),
            Self::stone(),
            Self::plastic(),
        ]
    }

    /// Display name of the material
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Coefficient of restitution
    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    /// Coefficient of friction
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Mass of a ball made of this material
    pub fn mass(&self) -> f32 {
        self.mass
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::plastic()
    }
}
