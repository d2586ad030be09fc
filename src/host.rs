//! File system and user interaction seams
//!
//! Commands only touch the outside world through [`Workspace`] and
//! [`Prompter`], so the whole flow can run against a scripted prompter in
//! tests.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RefactorError, Result};
use crate::fs_utils::write_atomic;
use crate::paths::resolve_path_or_cwd;
use crate::rewrite::FileFilter;

/// Read and write access to files
pub trait Workspace {
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()>;

    /// Size in bytes
    fn size(&self, path: &Path) -> Result<u64>;
}

/// The local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalWorkspace;

impl Workspace for LocalWorkspace {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| RefactorError::io(path, e))
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        write_atomic(path, bytes).map_err(|e| RefactorError::io(path, e))?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote file");
        Ok(())
    }

    fn size(&self, path: &Path) -> Result<u64> {
        fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| RefactorError::io(path, e))
    }
}

/// Questions a command may ask the user
///
/// `None` from a path prompt and `false` from [`Prompter::confirm`] cancel
/// the command.
pub trait Prompter {
    /// Ask where to save new content; `start_dir` anchors relative answers
    fn save_target(
        &self,
        title: &str,
        start_dir: &Path,
        filters: &[FileFilter],
    ) -> Result<Option<PathBuf>>;

    /// Ask for an existing file
    fn open_file(&self, title: &str, start_dir: &Path) -> Result<Option<PathBuf>>;

    fn confirm(&self, message: &str) -> Result<bool>;

    fn inform(&self, message: &str);
}

/// Terminal prompts, with answers optionally preset from flags
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    preset_path: Option<PathBuf>,
    assume_yes: bool,
    interactive: bool,
}

impl TerminalPrompter {
    pub fn new(preset_path: Option<PathBuf>, assume_yes: bool) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            preset_path,
            assume_yes,
            interactive: console::user_attended_stderr(),
        }
    }

    fn ask_path(&self, prompt: &str, start_dir: &Path) -> Result<Option<PathBuf>> {
        if let Some(preset) = &self.preset_path {
            return resolve_path_or_cwd(preset).map(Some);
        }
        if !self.interactive {
            return Err(RefactorError::PromptError {
                message: format!("{} (no terminal attached; pass the path as a flag)", prompt),
            });
        }

        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| RefactorError::PromptError {
                message: format!("Input cancelled: {}", e),
            })?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        let path = Path::new(answer);
        if path.is_absolute() {
            Ok(Some(path.to_path_buf()))
        } else {
            Ok(Some(start_dir.join(path)))
        }
    }
}

/// Append the first filter's extension to a path that has none
pub fn with_default_extension(path: PathBuf, filters: &[FileFilter]) -> PathBuf {
    if path.extension().is_some() {
        return path;
    }
    match filters.first().and_then(FileFilter::default_extension) {
        Some(ext) => path.with_extension(ext),
        None => path,
    }
}

impl Prompter for TerminalPrompter {
    fn save_target(
        &self,
        title: &str,
        start_dir: &Path,
        filters: &[FileFilter],
    ) -> Result<Option<PathBuf>> {
        let kinds: Vec<&str> = filters.iter().map(|f| f.label.as_str()).collect();
        let prompt = if kinds.is_empty() {
            title.to_string()
        } else {
            format!("{} ({})", title, kinds.join(", "))
        };
        Ok(self
            .ask_path(&prompt, start_dir)?
            .map(|path| with_default_extension(path, filters)))
    }

    fn open_file(&self, title: &str, start_dir: &Path) -> Result<Option<PathBuf>> {
        self.ask_path(title, start_dir)
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        if !self.interactive {
            return Err(RefactorError::PromptError {
                message: format!("{} (no terminal attached; pass --yes)", message),
            });
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| RefactorError::PromptError {
                message: format!("Confirmation cancelled: {}", e),
            })
    }

    fn inform(&self, message: &str) {
        eprintln!("{} {}", style("!").yellow(), message);
    }
}
