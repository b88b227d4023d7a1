/// Tunables for the anvil/forge proximity detector.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectorConfig {
    /// Box radius searched around the crafter when blacksmithing.
    pub check_range: u32,
    /// Maximum elevation difference, in either direction, to a facility.
    pub z_tolerance: i32,
    /// Static tile height is divided by this and the same amount is added
    /// on top when aiming the line-of-sight probe at a static facility.
    pub tile_height_divisor: i32,
}

impl DetectorConfig {
    pub const DEFAULT_CHECK_RANGE: u32 = 2;
    pub const DEFAULT_Z_TOLERANCE: i32 = 16;
    pub const DEFAULT_TILE_HEIGHT_DIVISOR: i32 = 1;

    pub const fn new() -> Self {
        Self {
            check_range: Self::DEFAULT_CHECK_RANGE,
            z_tolerance: Self::DEFAULT_Z_TOLERANCE,
            tile_height_divisor: Self::DEFAULT_TILE_HEIGHT_DIVISOR,
        }
    }

    pub fn with_check_range(mut self, check_range: u32) -> Self {
        self.check_range = check_range;
        self
    }

    pub fn with_z_tolerance(mut self, z_tolerance: i32) -> Self {
        self.z_tolerance = z_tolerance;
        self
    }

    /// Divisor actually used for tile heights; never zero or negative.
    pub fn effective_tile_divisor(&self) -> i32 {
        self.tile_height_divisor.max(1)
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new()
    }
}
