pub mod pages;
pub mod projects;
pub mod system;
