use crate::{CoreError, Prompter, Result as CoreResult};

use std::collections::VecDeque;

/// Prompter that answers from a fixed script and records what it was asked.
///
/// Running out of answers yields `CoreError::InputClosed`, the same error a
/// console prompter reports on end of input.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every message passed to `notify`, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// How many times exactly `prompt` was shown.
    pub fn prompt_count(&self, prompt: &str) -> usize {
        self.prompts.iter().filter(|p| p.as_str() == prompt).count()
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> CoreResult<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| CoreError::input_closed(prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> CoreResult<String> {
        self.next_answer(prompt)
    }

    fn read_masked(&mut self, prompt: &str) -> CoreResult<String> {
        self.next_answer(prompt)
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
