pub mod types;
pub mod map;
pub mod navigation;
pub mod setup;
pub mod engine;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use types::*;
pub use map::PLACES;
pub use visibility::{dracula_view, DraculaView, GameView};
