//! A `Prompter` that answers from a script and records what it was asked

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use refactor_extras::host::Prompter;
use refactor_extras::rewrite::FileFilter;
use refactor_extras::Result;

#[derive(Default)]
pub struct ScriptedPrompter {
    pub path: Option<PathBuf>,
    pub confirm: bool,
    pub informed: RefCell<Vec<String>>,
    pub confirmations: RefCell<Vec<String>>,
    pub offered_filters: RefCell<Vec<FileFilter>>,
}

impl ScriptedPrompter {
    /// Answers every path prompt with `path`
    pub fn answering(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            ..Self::default()
        }
    }

    /// Declines every path prompt
    pub fn declining() -> Self {
        Self::default()
    }

    pub fn confirming(mut self, answer: bool) -> Self {
        self.confirm = answer;
        self
    }

    pub fn filter_labels(&self) -> Vec<String> {
        self.offered_filters
            .borrow()
            .iter()
            .map(|f| f.label.clone())
            .collect()
    }
}

impl Prompter for ScriptedPrompter {
    fn save_target(
        &self,
        _title: &str,
        _start_dir: &Path,
        filters: &[FileFilter],
    ) -> Result<Option<PathBuf>> {
        self.offered_filters.borrow_mut().extend_from_slice(filters);
        Ok(self.path.clone())
    }

    fn open_file(&self, _title: &str, _start_dir: &Path) -> Result<Option<PathBuf>> {
        Ok(self.path.clone())
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        self.confirmations.borrow_mut().push(message.to_string());
        Ok(self.confirm)
    }

    fn inform(&self, message: &str) {
        self.informed.borrow_mut().push(message.to_string());
    }
}
