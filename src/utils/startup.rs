//! Startup - OS Startup Registration
//!
//! Creates or removes a launcher for the current executable in the OS startup
//! location. Both operations are idempotent.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::constants::STARTUP_ENTRY_NAME;
use crate::error::{Error, Result};

/// Idempotent create/remove of an OS startup entry
pub trait StartupRegistrar {
    /// Whether the entry currently exists
    fn is_registered(&self) -> bool;

    /// Create (or refresh) the entry
    fn register(&self) -> Result<()>;

    /// Remove the entry if present
    fn unregister(&self) -> Result<()>;

    /// Make the OS state match `enabled`
    fn apply(&self, enabled: bool) -> Result<()> {
        if enabled {
            self.register()
        } else {
            self.unregister()
        }
    }
}

/// Launcher file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFormat {
    /// Windows Startup folder batch launcher
    Cmd,
    /// XDG autostart desktop entry
    Desktop,
    /// macOS LaunchAgent property list
    LaunchAgent,
}

impl EntryFormat {
    /// Format used by the running platform
    pub fn native() -> Self {
        if cfg!(target_os = "windows") {
            EntryFormat::Cmd
        } else if cfg!(target_os = "macos") {
            EntryFormat::LaunchAgent
        } else {
            EntryFormat::Desktop
        }
    }

    fn file_name(&self) -> String {
        match self {
            EntryFormat::Cmd => format!("{STARTUP_ENTRY_NAME}.cmd"),
            EntryFormat::Desktop => format!("{STARTUP_ENTRY_NAME}.desktop"),
            EntryFormat::LaunchAgent => format!("com.{STARTUP_ENTRY_NAME}.plist"),
        }
    }

    fn render(&self, executable: &Path) -> String {
        let exe = executable.display();
        match self {
            EntryFormat::Cmd => format!("@echo off\r\nstart \"\" \"{exe}\"\r\n"),
            EntryFormat::Desktop => format!(
                "[Desktop Entry]\nType=Application\nName=MSFS Sim Rate Monitor\nExec=\"{exe}\"\nX-GNOME-Autostart-enabled=true\n"
            ),
            EntryFormat::LaunchAgent => format!(
                concat!(
                    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                    "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" ",
                    "\"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
                    "<plist version=\"1.0\">\n<dict>\n",
                    "  <key>Label</key>\n  <string>com.{name}</string>\n",
                    "  <key>ProgramArguments</key>\n  <array>\n    <string>{exe}</string>\n  </array>\n",
                    "  <key>RunAtLoad</key>\n  <true/>\n",
                    "</dict>\n</plist>\n"
                ),
                name = STARTUP_ENTRY_NAME,
                exe = exe
            ),
        }
    }
}

/// Startup directory for the running platform
fn native_startup_dir() -> Result<PathBuf> {
    let Some(base_dirs) = BaseDirs::new() else {
        return Err(Error::Startup {
            message: "Could not determine the user's home directory".to_string(),
        });
    };

    let dir = match EntryFormat::native() {
        EntryFormat::Cmd => base_dirs
            .config_dir()
            .join("Microsoft")
            .join("Windows")
            .join("Start Menu")
            .join("Programs")
            .join("Startup"),
        EntryFormat::LaunchAgent => base_dirs.home_dir().join("Library").join("LaunchAgents"),
        EntryFormat::Desktop => base_dirs.config_dir().join("autostart"),
    };
    Ok(dir)
}

/// A launcher file pointing at an executable
#[derive(Debug, Clone)]
pub struct StartupEntry {
    path: PathBuf,
    executable: PathBuf,
    format: EntryFormat,
}

impl StartupEntry {
    pub fn new(dir: impl AsRef<Path>, executable: impl Into<PathBuf>, format: EntryFormat) -> Self {
        Self {
            path: dir.as_ref().join(format.file_name()),
            executable: executable.into(),
            format,
        }
    }

    /// Entry for the running executable in the native startup location
    pub fn for_current_exe() -> Result<Self> {
        let executable = std::env::current_exe()?;
        Ok(Self::new(native_startup_dir()?, executable, EntryFormat::native()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn contents(&self) -> String {
        self.format.render(&self.executable)
    }

    fn startup_error(&self, action: &str, e: std::io::Error) -> Error {
        Error::Startup {
            message: format!("Failed to {action} {}: {e}", self.path.display()),
        }
    }
}

impl StartupRegistrar for StartupEntry {
    fn is_registered(&self) -> bool {
        self.path.is_file()
    }

    fn register(&self) -> Result<()> {
        let contents = self.contents();
        if fs::read_to_string(&self.path).is_ok_and(|existing| existing == contents) {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.startup_error("create", e))?;
        }
        fs::write(&self.path, contents).map_err(|e| self.startup_error("write", e))?;
        tracing::info!(path = %self.path.display(), "Startup entry created");
        Ok(())
    }

    fn unregister(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path).map_err(|e| self.startup_error("remove", e))?;
        tracing::info!(path = %self.path.display(), "Startup entry removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(dir: &Path, format: EntryFormat) -> StartupEntry {
        StartupEntry::new(dir.join("Startup"), "/opt/simrate/simrate-overlay", format)
    }

    #[test]
    fn test_register_and_unregister() {
        let dir = tempfile::tempdir().expect("tempdir");
        let entry = entry(dir.path(), EntryFormat::Desktop);

        assert!(!entry.is_registered());
        entry.register().expect("register");
        assert!(entry.is_registered());

        let contents = fs::read_to_string(entry.path()).expect("read");
        assert!(contents.contains("Exec=\"/opt/simrate/simrate-overlay\""));

        entry.unregister().expect("unregister");
        assert!(!entry.is_registered());
    }

    #[test]
    fn test_operations_are_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let entry = entry(dir.path(), EntryFormat::Cmd);

        entry.apply(true).expect("first register");
        entry.apply(true).expect("second register");
        assert!(entry.is_registered());

        entry.apply(false).expect("first unregister");
        entry.apply(false).expect("second unregister");
        assert!(!entry.is_registered());
    }

    #[test]
    fn test_register_refreshes_stale_entry() {
        let dir = tempfile::tempdir().expect("tempdir");
        let entry = entry(dir.path(), EntryFormat::Cmd);
        fs::create_dir_all(entry.path().parent().expect("parent")).expect("mkdir");
        fs::write(entry.path(), "start old.exe").expect("write");

        entry.register().expect("register");
        let contents = fs::read_to_string(entry.path()).expect("read");
        assert!(contents.contains("simrate-overlay"));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(EntryFormat::Cmd.file_name(), "MSFS-SimRateMonitor.cmd");
        assert_eq!(EntryFormat::Desktop.file_name(), "MSFS-SimRateMonitor.desktop");
        assert!(EntryFormat::LaunchAgent.file_name().ends_with(".plist"));
    }

    #[test]
    fn test_launch_agent_runs_at_load() {
        let rendered = EntryFormat::LaunchAgent.render(Path::new("/Applications/x"));
        assert!(rendered.contains("<string>/Applications/x</string>"));
        assert!(rendered.contains("<key>RunAtLoad</key>"));
    }
}
