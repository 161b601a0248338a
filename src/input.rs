//! Input capability consumed by the interactive strategies.

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::common::InputClosed;
use crate::ship::Orientation;

/// Source of answers for a human player. Calls block until an answer is available.
pub trait InputSource {
    /// Ask for an integer. Implementations re-ask on unparsable text.
    fn request_int(&mut self, prompt: &str) -> Result<i64, InputClosed>;

    /// Ask for an orientation.
    fn request_orientation(&mut self, prompt: &str) -> Result<Orientation, InputClosed>;

    /// Report feedback (rejected input, attack results) to the user.
    fn notify(&mut self, message: &str);
}

/// Lets the placement and targeting strategies of one player share a single source.
impl<T: InputSource + ?Sized> InputSource for Rc<RefCell<T>> {
    fn request_int(&mut self, prompt: &str) -> Result<i64, InputClosed> {
        self.borrow_mut().request_int(prompt)
    }

    fn request_orientation(&mut self, prompt: &str) -> Result<Orientation, InputClosed> {
        self.borrow_mut().request_orientation(prompt)
    }

    fn notify(&mut self, message: &str) {
        self.borrow_mut().notify(message)
    }
}

/// One queued answer for [`ScriptedInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Int(i64),
    Orientation(Orientation),
}

impl From<i64> for Answer {
    fn from(v: i64) -> Self {
        Answer::Int(v)
    }
}

impl From<Orientation> for Answer {
    fn from(o: Orientation) -> Self {
        Answer::Orientation(o)
    }
}

/// Input source replaying a fixed list of answers, for tests and headless hosts.
/// Runs out (or meets an answer of the wrong type) as [`InputClosed`].
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    answers: VecDeque<Answer>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, A>(answers: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Answer>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, answer: impl Into<Answer>) {
        self.answers.push_back(answer.into());
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Every prompt asked so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every message passed to [`InputSource::notify`].
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl InputSource for ScriptedInput {
    fn request_int(&mut self, prompt: &str) -> Result<i64, InputClosed> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Answer::Int(v)) => Ok(v),
            _ => Err(InputClosed),
        }
    }

    fn request_orientation(&mut self, prompt: &str) -> Result<Orientation, InputClosed> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Answer::Orientation(o)) => Ok(o),
            _ => Err(InputClosed),
        }
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
