pub mod cli;
pub mod languages;
pub mod translate;

pub use cli::{Cli, Command, TranslateCommand};
pub use languages::LanguagesController;
pub use translate::TranslateController;
