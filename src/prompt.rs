use anyhow::anyhow;
use dialoguer::{Confirm, Input, Select};
use std::collections::VecDeque;

/// A trait to ask the user for input on a terminal or in a test.
pub trait Prompt {
    /// Ask for a line of text. An empty answer returns `default` if given.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String, anyhow::Error>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, anyhow::Error>;

    /// Ask to pick one of `items` and return its index.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, anyhow::Error>;
}

/// Interactive prompts on the terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompt;

impl Prompt for DialoguerPrompt {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String, anyhow::Error> {
        let mut input = Input::<String>::new();
        input.with_prompt(prompt).allow_empty(true);

        if let Some(default) = default {
            input.default(default.to_owned());
        }

        Ok(input.interact_text()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, anyhow::Error> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, anyhow::Error> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }
}

/// A scripted answer of `ScriptedPrompt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Input(String),
    Confirm(bool),
    Select(usize),
}

/// Answers prompts from a script, used in testing.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Answer>,
    /// The prompts asked so far.
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    fn next(&mut self, prompt: &str) -> Result<Answer, anyhow::Error> {
        self.asked.push(prompt.to_owned());
        self.answers
            .pop_front()
            .ok_or(anyhow!("Missing answer for prompt: {prompt}"))
    }
}

impl Prompt for ScriptedPrompt {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String, anyhow::Error> {
        match self.next(prompt)? {
            Answer::Input(answer) if answer.is_empty() => {
                Ok(default.unwrap_or_default().to_owned())
            }
            Answer::Input(answer) => Ok(answer),
            answer => Err(anyhow!("Unexpected answer for `{prompt}`: {answer:?}")),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool, anyhow::Error> {
        match self.next(prompt)? {
            Answer::Confirm(answer) => Ok(answer),
            answer => Err(anyhow!("Unexpected answer for `{prompt}`: {answer:?}")),
        }
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, anyhow::Error> {
        match self.next(prompt)? {
            Answer::Select(index) if index < items.len() => Ok(index),
            answer => Err(anyhow!("Unexpected answer for `{prompt}`: {answer:?}")),
        }
    }
}
