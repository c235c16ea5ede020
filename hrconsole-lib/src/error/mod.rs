//! Error types

mod action;
mod descriptor;
mod grid;
mod repository;

pub use action::*;
pub use descriptor::*;
pub use grid::*;
pub use repository::*;
