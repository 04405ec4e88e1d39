pub mod language;
pub mod speech;
pub mod translation;
