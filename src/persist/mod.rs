//! Persistence: saved-game blobs and the storage seam.
//!
//! The engine never touches storage itself. `Session` saves through a
//! `Storage` implementation supplied by the host, under `SESSION_KEY` for
//! progress and `SETTINGS_KEY` for settings (which outlive a new game).

pub mod saved;
pub mod storage;

pub use saved::SavedGame;
pub use storage::{load_settings, save_settings, MemoryStorage, Storage};
