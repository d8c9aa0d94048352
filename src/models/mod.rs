// Module exports for models
// Plain data carried between the grid mapper, the selection machine and the host

pub mod bound;
pub mod event;
pub mod grid;
pub mod selection;
pub mod settings;
