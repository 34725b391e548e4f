//! Single and multiple choice prompts.

use std::{
    fmt,
    ops::{Range, RangeInclusive},
};

use crate::{
    cursor::Direction,
    decision::Decision,
    error::PromptError,
    key::Key,
    prompts::{
        list::{join_labels, HoverList},
        PromptMachine, Transition,
    },
    widget::Widget,
};

/// How many options a multiple choice needs before ENTER is accepted.
#[derive(Default)]
pub enum Requirement {
    #[default]
    Any,
    Exactly(usize),
    Range(Range<usize>),
    RangeInclusive(RangeInclusive<usize>),
    OneOf(Vec<usize>),
    Custom(Box<dyn Fn(usize) -> bool>),
}

impl Requirement {
    /// Wraps a custom predicate over the selected count.
    pub fn custom(predicate: impl Fn(usize) -> bool + 'static) -> Self {
        Self::Custom(Box::new(predicate))
    }

    pub fn allows(&self, count: usize) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(n) => count == *n,
            Self::Range(range) => range.contains(&count),
            Self::RangeInclusive(range) => range.contains(&count),
            Self::OneOf(counts) => counts.contains(&count),
            Self::Custom(predicate) => predicate(count),
        }
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Exactly(n) => f.debug_tuple("Exactly").field(n).finish(),
            Self::Range(range) => f.debug_tuple("Range").field(range).finish(),
            Self::RangeInclusive(range) => f.debug_tuple("RangeInclusive").field(range).finish(),
            Self::OneOf(counts) => f.debug_tuple("OneOf").field(counts).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<usize> for Requirement {
    fn from(count: usize) -> Self {
        Self::Exactly(count)
    }
}

impl From<Range<usize>> for Requirement {
    fn from(range: Range<usize>) -> Self {
        Self::Range(range)
    }
}

impl From<RangeInclusive<usize>> for Requirement {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::RangeInclusive(range)
    }
}

impl From<Vec<usize>> for Requirement {
    fn from(counts: Vec<usize>) -> Self {
        Self::OneOf(counts)
    }
}

/// Picks exactly one label: the hovered one at ENTER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    list: HoverList,
}

impl Choice {
    pub fn new<I, S>(labels: I) -> Result<Self, PromptError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            list: HoverList::new(labels)?,
        })
    }
}

impl PromptMachine for Choice {
    type Output = String;

    fn widgets(&self) -> Vec<Widget> {
        vec![Widget::Options(self.list.options().to_vec())]
    }

    fn handle_key(&mut self, key: Key) -> Result<Transition<String>, PromptError> {
        Ok(match key {
            Key::Up => {
                self.list.move_hover(Direction::Up)?;
                Transition::Continue
            }
            Key::Down => {
                self.list.move_hover(Direction::Down)?;
                Transition::Continue
            }
            Key::Enter => {
                let label = self.list.options()[self.list.hovered()?].content.clone();
                Transition::Decide(Decision::new(label))
            }
            // SPACE selects nothing in single mode
            _ => Transition::Alert,
        })
    }
}

/// Picks any number of labels allowed by a [`Requirement`].
#[derive(Debug)]
pub struct MultiChoice {
    list: HoverList,
    require: Requirement,
}

impl MultiChoice {
    pub fn new<I, S>(labels: I) -> Result<Self, PromptError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            list: HoverList::new(labels)?,
            require: Requirement::Any,
        })
    }

    #[must_use]
    pub fn with_require(mut self, require: impl Into<Requirement>) -> Self {
        self.require = require.into();
        self
    }

    pub fn selected(&self) -> Vec<String> {
        self.list.selected_labels()
    }
}

impl PromptMachine for MultiChoice {
    type Output = Vec<String>;

    fn widgets(&self) -> Vec<Widget> {
        vec![Widget::Options(self.list.options().to_vec())]
    }

    fn handle_key(&mut self, key: Key) -> Result<Transition<Vec<String>>, PromptError> {
        Ok(match key {
            Key::Up => {
                self.list.move_hover(Direction::Up)?;
                Transition::Continue
            }
            Key::Down => {
                self.list.move_hover(Direction::Down)?;
                Transition::Continue
            }
            Key::Space => {
                self.list.toggle_hovered()?;
                Transition::Continue
            }
            Key::Enter => {
                let selected = self.list.selected_labels();
                if self.require.allows(selected.len()) {
                    let display = join_labels(&selected);
                    Transition::Decide(Decision::with_display(selected, display))
                } else {
                    Transition::Alert
                }
            }
            _ => Transition::Alert,
        })
    }
}
