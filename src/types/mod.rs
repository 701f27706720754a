pub mod location;
pub mod sensor_reading;

pub use location::LocationFix;
pub use sensor_reading::{SensorKind, SensorReading, SensorUpdate};
