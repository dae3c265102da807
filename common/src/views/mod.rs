pub mod applications;
pub mod roster;
