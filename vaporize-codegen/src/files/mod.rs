//! Files written into a Vapor project.

mod controller;
mod model;
mod view;

pub use controller::{ControllerFile, ControllerKind};
pub use model::ModelFile;
pub use view::ViewFile;
