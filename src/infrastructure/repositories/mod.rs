pub mod google_translation_repository;
pub mod linux_synthesizer;
pub mod null_synthesizer;
pub mod speech_synthesizer;
pub mod translation_repository;
pub mod windows_synthesizer;

pub use google_translation_repository::GoogleTranslationRepository;
pub use linux_synthesizer::LinuxSynthesizer;
pub use null_synthesizer::NullSynthesizer;
pub use speech_synthesizer::{synthesizer_for, SpeechSynthesizer};
pub use translation_repository::TranslationRepository;
pub use windows_synthesizer::WindowsSynthesizer;
