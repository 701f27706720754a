pub mod client;

pub use client::run_geocode_worker;
