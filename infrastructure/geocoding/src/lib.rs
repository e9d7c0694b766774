pub mod client;
pub mod reverse_geocoder;
