mod location;

pub use location::{AddressFields, Coordinate, LocationRecord, LocationRow};
