//! Terminal implementation of the [`Operator`] seam.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use content_batch_core::contract::Operator;

/// Prompts on stdout and reads answers line by line from stdin.
///
/// There is no graphical folder dialog: the folder is asked for as a typed
/// path, unless one was preset from the command line.
#[derive(Debug, Default)]
pub struct TerminalOperator {
    preset_folder: Option<PathBuf>,
    input_closed: AtomicBool,
}

impl TerminalOperator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folder(folder: Option<PathBuf>) -> Self {
        TerminalOperator {
            preset_folder: folder,
            input_closed: AtomicBool::new(false),
        }
    }

    /// True once stdin has reached end of input.
    pub fn input_closed(&self) -> bool {
        self.input_closed.load(Ordering::Relaxed)
    }

    fn ask(&self, prompt: &str) -> String {
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "{prompt}");
        let _ = stdout.flush();
        drop(stdout);

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => self.input_closed.store(true, Ordering::Relaxed),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = ?e, "Failed to read operator input");
                self.input_closed.store(true, Ordering::Relaxed);
            }
        }
        line.trim_end_matches(['\r', '\n']).to_string()
    }
}

impl Operator for TerminalOperator {
    fn choose_directory(&self, title: &str) -> Option<PathBuf> {
        if let Some(folder) = &self.preset_folder {
            return Some(folder.clone());
        }
        let answer = self.ask(&format!("{title}\nFolder path (leave empty to cancel): "));
        let answer = answer.trim();
        if answer.is_empty() {
            None
        } else {
            Some(PathBuf::from(answer))
        }
    }

    fn prompt_text(&self, prompt: &str) -> String {
        self.ask(prompt)
    }

    fn confirm(&self, question: &str) -> String {
        self.ask(question)
    }

    fn show(&self, line: &str) {
        println!("{line}");
    }
}
