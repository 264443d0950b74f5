pub mod experience;
pub mod preferences;
