use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use acfgen::error::Result;
use acfgen::group::GroupSpec;
use acfgen::prompt::{resolve_choice, Prompter};

/// Prompter fed from pre-scripted answers, one queue per question kind.
///
/// Choice answers are raw strings resolved against the offered options, so
/// a script that names an option the wizard never offers fails the test
/// instead of silently picking an index.
pub struct ScriptedPrompter {
    texts: RefCell<VecDeque<String>>,
    choices: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
    recaps: Cell<usize>,
    prompts_seen: Cell<usize>,
}

impl ScriptedPrompter {
    pub fn new(texts: &[&str], choices: &[&str], confirms: &[bool]) -> Self {
        Self {
            texts: RefCell::new(texts.iter().map(|s| s.to_string()).collect()),
            choices: RefCell::new(choices.iter().map(|s| s.to_string()).collect()),
            confirms: RefCell::new(confirms.iter().copied().collect()),
            recaps: Cell::new(0),
            prompts_seen: Cell::new(0),
        }
    }

    /// Number of times the recap was displayed.
    pub fn recap_count(&self) -> usize {
        self.recaps.get()
    }

    /// Number of questions asked so far, recaps excluded.
    pub fn prompts_seen(&self) -> usize {
        self.prompts_seen.get()
    }

    fn bump(&self) {
        self.prompts_seen.set(self.prompts_seen.get() + 1);
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&self, prompt: &str) -> Result<String> {
        self.bump();
        Ok(self
            .texts
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for text prompt '{prompt}'")))
    }

    fn ask_choice(&self, prompt: &str, options: &[&str]) -> Result<usize> {
        self.bump();
        let raw = self
            .choices
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for choice prompt '{prompt}'"));
        resolve_choice(options, &raw)
    }

    fn ask_confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.bump();
        Ok(self
            .confirms
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for confirm prompt '{prompt}'")))
    }

    fn show_recap(&self, _group: &GroupSpec) {
        self.recaps.set(self.recaps.get() + 1);
    }
}
