//! Interactive prompts
//!
//! Prompts run in a fixed order, each pre-filled with the current value, and
//! every answer overwrites its field unconditionally.

use crate::create::validate::{check_provider, check_repository};
use crate::create::{Field, ParameterSet};
use crate::error::{Error, Result};
use crate::types::Provider;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Per-answer check; `Err` carries the message shown to the user
pub type AnswerValidator = fn(&str) -> std::result::Result<(), String>;

/// Terminal prompt backend
pub trait Prompter: Send + Sync {
    /// Ask for free text, re-asking until `validate` accepts the answer
    ///
    /// An empty `default` means no default is offered.
    fn input(&self, message: &str, default: &str, validate: AnswerValidator) -> Result<String>;

    /// Ask the user to pick one of `options`
    ///
    /// With `default` of `None` nothing is pre-selected and confirming
    /// without moving to an option is not an answer. Returns `None` when the
    /// user aborts.
    fn select(
        &self,
        message: &str,
        options: &[&str],
        default: Option<usize>,
    ) -> Result<Option<usize>>;
}

/// How a field is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Pick one supported provider
    ProviderSelect,
    /// Free text
    Text,
}

/// One entry of the prompt sequence
#[derive(Debug, Clone, Copy)]
pub struct PromptDescriptor {
    /// Field this prompt fills
    pub field: Field,
    /// Text shown to the user
    pub message: &'static str,
    /// Prompt style
    pub kind: PromptKind,
    /// Answer check
    pub validate: AnswerValidator,
    /// Writes the answer into the parameter set
    pub set: fn(&mut ParameterSet, String),
}

fn required(value: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        Err("Value is required".to_string())
    } else {
        Ok(())
    }
}

fn required_provider(value: &str) -> std::result::Result<(), String> {
    required(value)?;
    check_provider(value).map(|_| ()).map_err(|e| e.to_string())
}

fn required_repository(value: &str) -> std::result::Result<(), String> {
    required(value)?;
    check_repository(value).map_err(|e| e.to_string())
}

/// The prompt sequence, in the order it is asked
pub fn prompt_sequence() -> [PromptDescriptor; 5] {
    [
        PromptDescriptor {
            field: Field::Provider,
            message: "Provider",
            kind: PromptKind::ProviderSelect,
            validate: required_provider,
            set: |p, v| p.provider = v,
        },
        PromptDescriptor {
            field: Field::Repository,
            message: "Repository",
            kind: PromptKind::Text,
            validate: required_repository,
            set: |p, v| p.repository = v,
        },
        PromptDescriptor {
            field: Field::Source,
            message: "Source branch",
            kind: PromptKind::Text,
            validate: required,
            set: |p, v| p.source = v,
        },
        PromptDescriptor {
            field: Field::Destination,
            message: "Destination branch",
            kind: PromptKind::Text,
            validate: required,
            set: |p, v| p.destination = v,
        },
        PromptDescriptor {
            field: Field::Title,
            message: "Title",
            kind: PromptKind::Text,
            validate: required,
            set: |p, v| p.title = v,
        },
    ]
}

/// Run every prompt in order and overwrite the prompted fields
pub fn resolve_interactive(prompter: &dyn Prompter, params: &mut ParameterSet) -> Result<()> {
    for prompt in prompt_sequence() {
        let current = params.get(prompt.field).to_string();

        let answer = match prompt.kind {
            PromptKind::ProviderSelect => {
                let options: Vec<&str> = Provider::ALL.iter().map(|p| p.as_str()).collect();
                let default = options.iter().position(|o| *o == current);
                let index = prompter
                    .select(prompt.message, &options, default)?
                    .ok_or_else(|| Error::Prompt("a provider must be selected".to_string()))?;
                options
                    .get(index)
                    .map(ToString::to_string)
                    .ok_or_else(|| Error::Prompt(format!("no provider at position {index}")))?
            }
            PromptKind::Text => prompter.input(prompt.message, &current, prompt.validate)?,
        };

        (prompt.validate)(&answer)
            .map_err(|msg| Error::Prompt(format!("{}: {msg}", prompt.field)))?;
        (prompt.set)(params, answer);
    }

    Ok(())
}

/// [`Prompter`] rendering to the terminal with dialoguer
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn input(&self, message: &str, default: &str, validate: AnswerValidator) -> Result<String> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme).with_prompt(message);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }

        let answer = input
            .validate_with(|value: &String| validate(value))
            .interact_text()?;
        Ok(answer)
    }

    fn select(
        &self,
        message: &str,
        options: &[&str],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        let theme = ColorfulTheme::default();
        let mut select = Select::with_theme(&theme)
            .with_prompt(message)
            .items(options);
        // Without a default dialoguer ignores Enter until an item is highlighted.
        if let Some(index) = default {
            select = select.default(index);
        }

        Ok(select.interact_opt()?)
    }
}
