/// Speed of light in m.s⁻¹
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Earth gravitational constant (m^3 s-2)
pub const EARTH_GRAVITATION_MU_M3_S2: f64 = 3.986004418E14;

/// Minimal number of observations to resolve (x, y, z, clock bias)
pub const MIN_OBSERVATIONS: usize = 4;
