//! Small helpers shared by the runtime and the binary.

/// What: Local wall-clock timestamp used in log lines.
///
/// Output:
/// - `YYYY-MM-DD-THH:MM:SS` in local time.
#[must_use]
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T%H:%M:%S").to_string()
}

/// What: Open a URL in the default browser.
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - No return value; a background thread launches the opener and waits for it.
///
/// Details:
/// - On Windows, uses `cmd /c start`.
/// - On Unix-like systems, tries `xdg-open` (Linux) then `open` (macOS).
/// - Empty URLs are ignored. During tests this is a no-op.
#[cfg_attr(test, allow(unused_variables))]
pub fn open_url(url: &str) {
    if url.trim().is_empty() {
        tracing::debug!("no URL to open");
        return;
    }
    #[cfg(not(test))]
    {
        use std::process::Command;

        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            let res = spawn_and_wait(Command::new("cmd").args(["/c", "start", "", &url]));
            #[cfg(not(target_os = "windows"))]
            let res = spawn_and_wait(Command::new("xdg-open").arg(&url))
                .or_else(|_| spawn_and_wait(Command::new("open").arg(&url)));
            match res {
                Ok(status) => tracing::info!(url = %url, %status, "opened URL"),
                Err(e) => tracing::warn!(url = %url, error = %e, "failed to open URL"),
            }
        });
    }
}

/// What: Run a helper process with null stdio and reap it.
///
/// Inputs:
/// - `cmd`: Command to run.
///
/// Output:
/// - Exit status of the child, or the spawn/wait error.
fn spawn_and_wait(cmd: &mut std::process::Command) -> std::io::Result<std::process::ExitStatus> {
    use std::process::Stdio;

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?
        .wait()
}
