// src/utils/io.rs
use std::path::PathBuf;

/// Where CSV exports go when nothing else is configured: the user's documents
/// folder, then home, then the working directory.
pub fn default_export_dir() -> PathBuf {
    if let Some(user_dirs) = directories::UserDirs::new() {
        if let Some(documents) = user_dirs.document_dir() {
            return documents.to_path_buf();
        }
        return user_dirs.home_dir().to_path_buf();
    }

    log::debug!("Could not determine user directories, exporting to current directory");
    PathBuf::from(".")
}
