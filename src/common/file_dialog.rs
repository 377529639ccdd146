use std::path::PathBuf;

/// Ask the user for a CSV file with the native picker.
#[cfg(target_os = "windows")]
pub fn pick_csv_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("CSV", &["csv"])
        .pick_file()
}

/// No native picker outside Windows; the path is typed instead.
#[cfg(not(target_os = "windows"))]
pub fn pick_csv_file() -> Option<PathBuf> {
    None
}

pub fn native_picker_available() -> bool {
    cfg!(target_os = "windows")
}
