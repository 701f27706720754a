pub mod client;

pub use client::run_sensor_feed;
