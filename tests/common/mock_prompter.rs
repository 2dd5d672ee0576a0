//! Scripted prompter for testing

use preq::create::{AnswerValidator, Prompter};
use preq::error::{Error, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted response
#[derive(Debug, Clone)]
pub enum Answer {
    /// Type this text
    Text(String),
    /// Pick the option at this index
    Pick(usize),
    /// Press enter on whatever is pre-filled
    AcceptDefault,
    /// Abort the prompt (Esc / Ctrl-C)
    Abort,
}

/// A prompt as it was shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shown {
    pub message: String,
    /// Pre-filled text, or the selected option for selections
    pub default: Option<String>,
}

/// Prompter replaying scripted answers in order
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    shown: Mutex<Vec<Shown>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Accept every default
    pub fn accept_all() -> Self {
        Self::new(std::iter::repeat_n(Answer::AcceptDefault, 5))
    }

    /// Prompts shown so far
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    fn next(&self) -> Result<Answer> {
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Prompt("script exhausted".to_string()))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, message: &str, default: &str, validate: AnswerValidator) -> Result<String> {
        self.shown.lock().unwrap().push(Shown {
            message: message.to_string(),
            default: Some(default.to_string()).filter(|d| !d.is_empty()),
        });

        let answer = match self.next()? {
            Answer::Text(text) => text,
            Answer::AcceptDefault => default.to_string(),
            Answer::Pick(_) => return Err(Error::Prompt("pick on text prompt".to_string())),
            Answer::Abort => return Err(Error::Prompt("interrupted".to_string())),
        };

        // dialoguer re-asks until valid; a script has nothing more to say
        validate(&answer).map_err(Error::Prompt)?;
        Ok(answer)
    }

    fn select(
        &self,
        message: &str,
        options: &[&str],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        self.shown.lock().unwrap().push(Shown {
            message: message.to_string(),
            default: default.map(|i| options[i].to_string()),
        });

        match self.next()? {
            Answer::Pick(index) => Ok(Some(index)),
            Answer::AcceptDefault => Ok(default),
            Answer::Abort => Ok(None),
            Answer::Text(_) => Err(Error::Prompt("text on select prompt".to_string())),
        }
    }
}
