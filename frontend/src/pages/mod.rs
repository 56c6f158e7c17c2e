pub mod browse;
pub mod home;
pub mod list_bike;
pub mod profile;
