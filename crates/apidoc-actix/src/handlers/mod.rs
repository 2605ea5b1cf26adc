pub mod admin;
pub mod swagger;
