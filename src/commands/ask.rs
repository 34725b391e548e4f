//! # Prompt Commands
//!
//! Runs one prompt per invocation and prints the answer to stdout. Frames go to
//! stderr so `answer=$(kprompt text)` captures only the answer.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::{
    config::Config,
    driver::{Driver, DriverOptions, Validation},
    prompts::{Choice, Confirm, MultiChoice, Number, Pin, Prompt, Requirement, Sort, Text, Value},
};

/// Options shared by every prompt command.
#[derive(Debug, Clone, Default)]
pub struct AskArgs {
    /// Overrides the prompt's default question
    pub question: Option<String>,
    /// Key script replacing the keyboard; nothing is drawn
    pub keys: Option<String>,
    /// Lets CTRL+D cancel the prompt
    pub cancelable: bool,
}

impl AskArgs {
    fn options(&self) -> Result<DriverOptions> {
        let mut options = Config::load()?.driver_options();
        options.cancelable |= self.cancelable;
        Ok(options)
    }
}

/// Arguments for the text command
#[derive(Debug, Clone, Default)]
pub struct TextArgs {
    pub hide: bool,
    pub default: Option<String>,
    pub placeholder: Option<String>,
    pub double_enter: bool,
    pub required: bool,
}

/// Arguments for the number command
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberArgs {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub default: Option<i64>,
}

/// Arguments for the choice command
#[derive(Debug, Clone, Default)]
pub struct ChoiceArgs {
    pub labels: Vec<String>,
    pub multiple: bool,
    /// Selected count: `N`, `A..B` or `A..=B`
    pub require: Option<String>,
}

/// Runs `prompt` and prints its answer.
fn execute<V>(args: &AskArgs, default_question: &str, prompt: Prompt, validate: V) -> Result<()>
where
    V: FnMut(&Value) -> Validation,
{
    let question = args.question.as_deref().unwrap_or(default_question);
    let options = args.options()?;

    let value = match &args.keys {
        Some(script) => Driver::scripted(script, options).run_validated(question, prompt, validate),
        None => Driver::terminal(options).run_validated(question, prompt, validate),
    }?;

    println!("{value}");
    Ok(())
}

pub fn confirm(args: &AskArgs, default_no: bool) -> Result<()> {
    let prompt = Confirm::new().with_default(!default_no);
    execute(args, "Continue?", prompt.into(), |_| Validation::Accepted)
}

pub fn text(args: &AskArgs, text: TextArgs) -> Result<()> {
    let mut prompt = Text::new()
        .with_hide(text.hide)
        .with_double_enter(text.double_enter);
    if let Some(default) = text.default {
        prompt = prompt.with_default(default);
    }
    if let Some(placeholder) = text.placeholder {
        prompt = prompt.with_placeholder(placeholder);
    }

    let required = text.required;
    execute(args, "Enter text", prompt.into(), move |value| {
        if required && value.to_string().is_empty() {
            Validation::reject("an answer is required")
        } else {
            Validation::Accepted
        }
    })
}

pub fn number(args: &AskArgs, number: NumberArgs) -> Result<()> {
    let prompt = Number::new(number.min, number.max, number.default)?;
    execute(args, "Enter a number", prompt.into(), |_| Validation::Accepted)
}

pub fn choice(args: &AskArgs, choice: ChoiceArgs) -> Result<()> {
    if !choice.multiple {
        if choice.require.is_some() {
            anyhow::bail!("--require only applies with --multiple");
        }
        let prompt = Choice::new(choice.labels)?;
        return execute(args, "Choose an option", prompt.into(), |_| {
            Validation::Accepted
        });
    }

    let mut prompt = MultiChoice::new(choice.labels)?;
    if let Some(require) = choice.require.as_deref() {
        prompt = prompt.with_require(parse_requirement(require)?);
    }
    execute(args, "Choose options", prompt.into(), |_| Validation::Accepted)
}

pub fn sort(args: &AskArgs, labels: Vec<String>) -> Result<()> {
    let prompt = Sort::new(labels)?;
    execute(args, "Sort the options", prompt.into(), |_| Validation::Accepted)
}

pub fn pin(args: &AskArgs, length: usize, require_enter: bool) -> Result<()> {
    let prompt = Pin::new(length)?.with_require_enter(require_enter);
    execute(args, "Enter the code", prompt.into(), |_| Validation::Accepted)
}

/// Parses `N`, `A..B` or `A..=B` into a selected-count requirement.
pub fn parse_requirement(spec: &str) -> Result<Requirement> {
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .with_context(|| format!("Invalid count in requirement: '{spec}'"))
    };

    if let Some((start, end)) = spec.split_once("..=") {
        return Ok(Requirement::from(parse(start)?..=parse(end)?));
    }
    if let Some((start, end)) = spec.split_once("..") {
        return Ok(Requirement::from(parse(start)?..parse(end)?));
    }
    Ok(Requirement::from(parse(spec)?))
}
