//! # Widgets
//!
//! Per-frame descriptors of what a prompt wants on screen. Widgets carry data only;
//! turning them into lines is the formatter's job.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// One selectable line inside an option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub content: String,
    /// Chosen (multi-select) or picked up (sortable list).
    pub select: Option<bool>,
    /// Currently focused.
    pub hover: Option<bool>,
}

impl OptionItem {
    /// Creates an unselected, unhovered option.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            select: None,
            hover: None,
        }
    }

    #[must_use]
    pub fn with_hover(mut self, hover: bool) -> Self {
        self.hover = Some(hover);
        self
    }

    #[must_use]
    pub fn with_select(mut self, select: bool) -> Self {
        self.select = Some(select);
        self
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.unwrap_or(false)
    }

    pub fn is_selected(&self) -> bool {
        self.select.unwrap_or(false)
    }

    pub fn toggle_select(&mut self) {
        self.select = Some(!self.is_selected());
    }
}

/// Builds an option list with hover on the first label.
pub fn option_list<I, S>(labels: I) -> Vec<OptionItem>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| OptionItem::new(label).with_hover(i == 0))
        .collect()
}

/// A key hint: label of the key and what it does.
pub type Hint = (String, String);

/// Everything a frame can be made of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Ring the bell on the next render.
    Alert,
    Question(String),
    Answer(String),
    /// Reason a submitted value was rejected.
    Error(String),
    /// Key hints; order is not significant.
    Navigation(Vec<Hint>),
    Text {
        content: String,
        placeholder: Option<String>,
        hide: bool,
    },
    Options(Vec<OptionItem>),
    SortableOptions(Vec<OptionItem>),
    Confirm { default: bool },
    Integer(i64),
    /// Entered digits followed by `None` for each missing one.
    Code(Vec<Option<u8>>),
}

impl Widget {
    /// Builds a navigation widget from string pairs.
    pub fn navigation<I, K, V>(hints: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Navigation(
            hints
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub const fn is_alert(&self) -> bool {
        matches!(self, Self::Alert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_list_hovers_first() {
        let options = option_list(["a", "b", "c"]);
        let hovered: Vec<bool> = options.iter().map(OptionItem::is_hovered).collect();
        assert_eq!(hovered, vec![true, false, false]);
        assert!(options.iter().all(|o| !o.is_selected()));
    }

    #[test]
    fn test_toggle_select() {
        let mut option = OptionItem::new("a");
        assert_eq!(option.select, None);
        option.toggle_select();
        assert!(option.is_selected());
        option.toggle_select();
        assert_eq!(option.select, Some(false));
    }

    #[test]
    fn test_navigation_builder() {
        let nav = Widget::navigation([("ENTER", "done")]);
        assert_eq!(
            nav,
            Widget::Navigation(vec![("ENTER".to_string(), "done".to_string())])
        );
    }
}
