pub mod context;
pub mod data_utils;
pub mod error;
pub mod registry;

mod abilities;
mod adventurers;
mod dragons;
mod emblems;
mod facilities;
mod materials;
mod missions;
mod quests;
mod skills;
mod weapons;
mod wyrmprints;

pub use context::{Scratch, TransformContext};
pub use data_utils::EDIT_THIS;
pub use error::{Result, TransformError};
pub use registry::{CATEGORIES, CategorySpec, PassFn};
