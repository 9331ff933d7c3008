// src/system/mod.rs
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SystemError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to execute command: {0}")]
    CommandError(String),

    #[error("No clipboard tool available on this system")]
    ClipboardUnavailable,
}

pub type Result<T> = std::result::Result<T, SystemError>;

/// Host platform capabilities the shell needs: clipboard and file manager.
pub trait Desktop {
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
    fn open_folder(&self, folder: &Path) -> Result<()>;
}

/// A command line tool plus its fixed arguments.
#[derive(Debug, Clone)]
pub struct Tool {
    pub program: String,
    pub args: Vec<String>,
}

impl Tool {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[cfg(target_os = "windows")]
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[("clip", &[])];
#[cfg(target_os = "macos")]
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[("pbcopy", &[])];
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const FILE_MANAGER: &str = "explorer";
#[cfg(target_os = "macos")]
const FILE_MANAGER: &str = "open";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const FILE_MANAGER: &str = "xdg-open";

/// Dispatches to the platform's own command line tools.
pub struct SystemDesktop {
    clipboard_tools: Vec<Tool>,
    file_manager: String,
}

impl SystemDesktop {
    pub fn new() -> Self {
        Self::with_tools(
            CLIPBOARD_TOOLS
                .iter()
                .map(|(program, args)| Tool::new(program, args))
                .collect(),
            FILE_MANAGER,
        )
    }

    /// Clipboard tools are tried in order until one succeeds.
    pub fn with_tools(clipboard_tools: Vec<Tool>, file_manager: &str) -> Self {
        Self {
            clipboard_tools,
            file_manager: file_manager.to_string(),
        }
    }

    fn pipe_into(tool: &Tool, text: &str) -> Result<()> {
        let mut child = Command::new(&tool.program)
            .args(&tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // stdin is dropped before wait so the tool sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait()?;
        if !status.success() {
            // a tool that exits early also breaks the pipe; report the exit
            return Err(SystemError::CommandError(format!("{} exited with {}", tool.program, status)));
        }
        written?;
        Ok(())
    }
}

impl Default for SystemDesktop {
    fn default() -> Self {
        Self::new()
    }
}

impl Desktop for SystemDesktop {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let mut last_error = None;
        for tool in &self.clipboard_tools {
            match Self::pipe_into(tool, text) {
                Ok(()) => {
                    log::debug!("Copied {} bytes via {}", text.len(), tool.program);
                    return Ok(());
                }
                Err(SystemError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                    log::debug!("{} not found, trying next clipboard tool", tool.program);
                }
                Err(e) => {
                    log::debug!("{} failed: {}", tool.program, e);
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or(SystemError::ClipboardUnavailable))
    }

    fn open_folder(&self, folder: &Path) -> Result<()> {
        let program = &self.file_manager;
        let status = Command::new(program)
            .arg(folder)
            .status()
            .map_err(|e| SystemError::CommandError(format!("{} {}: {}", program, folder.display(), e)))?;
        // explorer.exe returns 1 even on success, so only spawn failures count
        if !status.success() {
            log::debug!("{} exited with {}", program, status);
        }
        Ok(())
    }
}
