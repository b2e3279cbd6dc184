use std::path::Path;

/// Base name of a path, as shown in reports (`/var/log/app.log` -> `app.log`).
pub fn base_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// File stem used for derived output names (`app.log` -> `app`).
pub fn file_stem(path: &Path) -> String {
    match path.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => base_name(path),
    }
}
