pub mod datum;
pub mod point;

pub use datum::{DatumCoefficients, DatumRegion, LegacyDatum};
pub use point::{Axis, GeoPoint, Hemisphere};
