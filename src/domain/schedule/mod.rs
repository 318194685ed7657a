//! Delivery scheduling value objects

mod delay;
mod delivery_time;

pub use delay::Delay;
pub use delivery_time::parse_delivery_time;
