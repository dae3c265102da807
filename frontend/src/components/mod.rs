pub mod applications;
pub mod card_grid;
pub mod global_loader;
pub mod image_loader;
pub mod roster;
