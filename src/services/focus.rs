//! Focus Probe
//!
//! Decides whether the simulator is the foreground application.

use crate::constants::SIMULATOR_TITLE_MARKERS;

pub trait FocusProbe: Send {
    fn simulator_focused(&mut self) -> bool;
}

/// Probe for platforms without a foreground-window query; never hides the overlay
#[derive(Debug, Default)]
pub struct AlwaysFocused;

impl FocusProbe for AlwaysFocused {
    fn simulator_focused(&mut self) -> bool {
        true
    }
}

/// Whether a window title belongs to the simulator
pub fn is_simulator_title(title: &str) -> bool {
    SIMULATOR_TITLE_MARKERS
        .iter()
        .any(|marker| title.contains(marker))
}

/// Probe backed by a foreground-window title query.
///
/// A failed query (`None`) keeps the last answer so a transient error does not
/// flicker the overlay. Until the first answer the simulator counts as focused.
pub struct TitleFocusProbe<F> {
    foreground_title: F,
    last: bool,
}

impl<F> TitleFocusProbe<F>
where
    F: FnMut() -> Option<String> + Send,
{
    pub fn new(foreground_title: F) -> Self {
        Self {
            foreground_title,
            last: true,
        }
    }
}

impl<F> FocusProbe for TitleFocusProbe<F>
where
    F: FnMut() -> Option<String> + Send,
{
    fn simulator_focused(&mut self) -> bool {
        if let Some(title) = (self.foreground_title)() {
            let focused = is_simulator_title(&title);
            if focused != self.last {
                tracing::debug!(focused, title = %title, "Simulator focus changed");
            }
            self.last = focused;
        }
        self.last
    }
}

/// Title of the current foreground window, `None` if it cannot be queried
#[cfg(target_os = "windows")]
pub fn foreground_window_title() -> Option<String> {
    use windows_sys::Win32::UI::WindowsAndMessaging::{
        GetForegroundWindow, GetWindowTextLengthW, GetWindowTextW,
    };

    // SAFETY: read-only queries on the foreground window; `buf` outlives the call and
    // its length is passed as the copy limit.
    unsafe {
        let hwnd = GetForegroundWindow();
        if hwnd.is_null() {
            return None;
        }
        let len = GetWindowTextLengthW(hwnd);
        if len <= 0 {
            return Some(String::new());
        }
        let mut buf = vec![0u16; len as usize + 1];
        let copied = GetWindowTextW(hwnd, buf.as_mut_ptr(), buf.len() as i32);
        Some(String::from_utf16_lossy(&buf[..copied.max(0) as usize]))
    }
}

/// Title of the current foreground window via `xdotool` (X11 only)
#[cfg(target_os = "linux")]
pub fn foreground_window_title() -> Option<String> {
    let output = std::process::Command::new("xdotool")
        .args(["getactivewindow", "getwindowname"])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(not(any(target_os = "windows", target_os = "linux")))]
pub fn foreground_window_title() -> Option<String> {
    None
}

/// Best probe for this platform; falls back to [`AlwaysFocused`] when the
/// foreground window cannot be queried
pub fn native_probe() -> Box<dyn FocusProbe> {
    if foreground_window_title().is_some() {
        tracing::info!("Auto-hide follows the foreground window title");
        Box::new(TitleFocusProbe::new(foreground_window_title))
    } else {
        tracing::info!("Foreground window query unavailable, overlay never auto-hides");
        Box::new(AlwaysFocused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_titles() {
        assert!(is_simulator_title("Microsoft Flight Simulator - 1.37.19.0"));
        assert!(is_simulator_title("FlightSimulator2024"));
        assert!(!is_simulator_title("Visual Studio Code"));
        assert!(!is_simulator_title(""));
    }

    #[test]
    fn test_title_probe_keeps_last_answer_on_failure() {
        let mut titles = vec![
            None,
            Some("Notepad".to_string()),
            Some("Microsoft Flight Simulator".to_string()),
        ];
        let mut probe = TitleFocusProbe::new(move || titles.pop().flatten());

        assert!(probe.simulator_focused());
        assert!(!probe.simulator_focused());
        // query failed, previous answer kept
        assert!(!probe.simulator_focused());
    }

    #[test]
    fn test_title_probe_starts_focused() {
        let mut probe = TitleFocusProbe::new(|| None);
        assert!(probe.simulator_focused());
    }
}
