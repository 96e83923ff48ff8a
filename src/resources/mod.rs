pub mod constants;

pub use constants::FlightConstants;
