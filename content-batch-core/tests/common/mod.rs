#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

use content_batch_core::contract::Operator;

/// Operator that answers from a script and records everything shown to it.
pub struct ScriptedOperator {
    folder: Option<PathBuf>,
    texts: Mutex<VecDeque<String>>,
    confirmations: Mutex<VecDeque<String>>,
    shown: Mutex<Vec<String>>,
}

impl ScriptedOperator {
    pub fn new(folder: Option<PathBuf>) -> Self {
        ScriptedOperator {
            folder,
            texts: Mutex::new(VecDeque::new()),
            confirmations: Mutex::new(VecDeque::new()),
            shown: Mutex::new(Vec::new()),
        }
    }

    pub fn with_text(self, answer: &str) -> Self {
        self.texts.lock().unwrap().push_back(answer.to_string());
        self
    }

    pub fn with_confirmation(self, answer: &str) -> Self {
        self.confirmations
            .lock()
            .unwrap()
            .push_back(answer.to_string());
        self
    }

    pub fn output(&self) -> String {
        self.shown.lock().unwrap().join("\n")
    }
}

impl Operator for ScriptedOperator {
    fn choose_directory(&self, _title: &str) -> Option<PathBuf> {
        self.folder.clone()
    }

    fn prompt_text(&self, _prompt: &str) -> String {
        self.texts.lock().unwrap().pop_front().unwrap_or_default()
    }

    fn confirm(&self, _question: &str) -> String {
        self.confirmations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default()
    }

    fn show(&self, line: &str) {
        self.shown.lock().unwrap().push(line.to_string());
    }
}
