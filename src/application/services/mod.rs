/// Data and channel endpoints implemented for the session
pub mod data_service;
/// Device endpoints implemented for the session
pub mod device_service;

pub use crate::application::interfaces::data::*;
pub use crate::application::interfaces::device::*;
