pub mod banner;
pub mod project;
pub mod uploads;
