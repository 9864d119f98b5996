use std::path::PathBuf;

/// Directory of the running executable, or the working directory if it can't be found.
///
/// Config and log files live here so several copies can run side by side.
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
