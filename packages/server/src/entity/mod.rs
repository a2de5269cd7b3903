pub mod banner;
pub mod project;
