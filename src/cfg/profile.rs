use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rover, receiver or user [Profile], which is application dependent.
/// The [Profile] bounds the velocity we consider physically plausible.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Profile {
    /// Receiver held in static.
    #[cfg_attr(feature = "serde", serde(alias = "static"))]
    Static,
    /// [Profile::Pedestrian]: < 18 km/h very low velocity
    #[cfg_attr(feature = "serde", serde(alias = "pedestrian"))]
    Pedestrian,
    /// [Profile::Car]: < 250 km/h
    #[cfg_attr(feature = "serde", serde(alias = "car"))]
    Car,
    /// [Profile::Drone]: < 300 m/s
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "drone"))]
    Drone,
    /// [Profile::Airplane]: < 1000 m/s high velocity
    #[cfg_attr(feature = "serde", serde(alias = "airplane"))]
    Airplane,
    /// [Profile::Rocket]: ultra high velocity
    #[cfg_attr(feature = "serde", serde(alias = "rocket"))]
    Rocket,
}

impl Profile {
    /// Maximal velocity (m/s) this [Profile] may physically reach.
    pub fn max_speed_m_s(&self) -> f64 {
        match self {
            Self::Static => 1.0,
            Self::Pedestrian => 5.0,
            Self::Car => 70.0,
            Self::Drone => 300.0,
            Self::Airplane => 1000.0,
            Self::Rocket => 8000.0,
        }
    }
}

impl std::str::FromStr for Profile {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        let trimmed = s.trim();
        match trimmed {
            "static" => Ok(Self::Static),
            "pedestrian" => Ok(Self::Pedestrian),
            "car" => Ok(Self::Car),
            "drone" => Ok(Self::Drone),
            "airplane" => Ok(Self::Airplane),
            "rocket" => Ok(Self::Rocket),
            _ => Err(Error::InvalidConfig("unknown profile")),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Pedestrian => write!(f, "pedestrian"),
            Self::Car => write!(f, "car"),
            Self::Drone => write!(f, "drone"),
            Self::Airplane => write!(f, "airplane"),
            Self::Rocket => write!(f, "rocket"),
        }
    }
}
