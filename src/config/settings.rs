//! Settings sections

mod desktop;
mod history;
mod transcript;
mod voice;

pub use desktop::DesktopSettings;
pub use history::HistorySettings;
pub use transcript::TranscriptSettings;
pub use voice::VoiceSettings;
