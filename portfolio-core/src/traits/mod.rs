//! Host abstraction trait definition

mod document;
mod navigator;

pub use document::{Document, Element, InMemoryDocument};
pub use navigator::{InMemoryNavigator, Navigator};
