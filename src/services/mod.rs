// Service module exports

pub mod calendar;
pub mod grid;
pub mod picker;
pub mod selection;
pub mod settings;
