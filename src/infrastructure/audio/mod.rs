pub mod cache;
pub mod player;
#[cfg(feature = "rodio")]
pub mod rodio_player;

pub use cache::AudioCache;
pub use player::{AudioPlayer, CommandPlayer};
#[cfg(feature = "rodio")]
pub use rodio_player::RodioPlayer;
