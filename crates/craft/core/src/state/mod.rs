//! Plain value types shared by the detector, oracles and craft hooks.
//!
//! None of these types own world data; they describe the actor and the
//! objects the oracles hand back for the duration of one permission check.
mod common;
mod position;

pub use common::{ArtId, ItemTypeId, Serial};
pub use position::{ActorLocation, MapPlane, Point3, Rect};
