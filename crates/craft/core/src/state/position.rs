use std::fmt;

/// World plane an actor or object lives on.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum MapPlane {
    Felucca,
    Trammel,
    Ilshenar,
    Malas,
    Tokuno,
    TerMur,
}

/// Discrete world coordinate: tile grid in X/Y plus elevation in Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Box (Chebyshev) distance on the horizontal plane; elevation is ignored.
    pub fn box_distance(self, other: Point3) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }

    pub fn in_box_range(self, other: Point3, range: u32) -> bool {
        self.box_distance(other) <= range
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Where an actor stands. A missing plane means the actor is not in any world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorLocation {
    pub position: Point3,
    pub map: Option<MapPlane>,
}

impl ActorLocation {
    pub const fn new(position: Point3, map: MapPlane) -> Self {
        Self {
            position,
            map: Some(map),
        }
    }

    pub const fn nowhere(position: Point3) -> Self {
        Self {
            position,
            map: None,
        }
    }
}

/// Axis-aligned rectangle on the tile grid with bounds on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Rect {
    pub const fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Bounds count as inside.
    pub fn contains_inclusive(&self, x: i32, y: i32) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Bounds count as outside.
    pub fn contains_exclusive(&self, x: i32, y: i32) -> bool {
        x > self.x_min && x < self.x_max && y > self.y_min && y < self.y_max
    }

    pub fn is_well_formed(&self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max
    }
}
