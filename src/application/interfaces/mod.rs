/// Data and channel service interface
pub mod data;
/// Device service interface
pub mod device;
