pub mod application;
pub mod facet;
pub mod person;
pub mod status;
