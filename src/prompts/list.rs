//! Option list with exactly one hovered entry.

use crate::{
    constants::LIST_SEPARATOR,
    cursor::{adjacent, Direction},
    error::PromptError,
    widget::{option_list, OptionItem},
};

/// Owned option list shared by the choice and sort prompts.
///
/// Invariant: exactly one option is hovered. Construction hovers the first
/// option and every move unhovers the old entry before hovering the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverList {
    options: Vec<OptionItem>,
}

impl HoverList {
    pub fn new<I, S>(labels: I) -> Result<Self, PromptError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = option_list(labels);
        if options.is_empty() {
            return Err(PromptError::NoOptions);
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &[OptionItem] {
        &self.options
    }

    /// Index of the hovered option.
    pub fn hovered(&self) -> Result<usize, PromptError> {
        self.options
            .iter()
            .position(OptionItem::is_hovered)
            .ok_or_else(|| PromptError::protocol("no option is hovered"))
    }

    /// Moves the hover flag to the neighbor in `direction`, wrapping around.
    pub fn move_hover(&mut self, direction: Direction) -> Result<(), PromptError> {
        let from = self.hovered()?;
        let to = self.neighbor(from, direction)?;
        self.options[from].hover = Some(false);
        self.options[to].hover = Some(true);
        Ok(())
    }

    /// Swaps the hovered option with its neighbor; its flags travel with it.
    pub fn move_hovered_entry(&mut self, direction: Direction) -> Result<(), PromptError> {
        let from = self.hovered()?;
        let to = self.neighbor(from, direction)?;
        self.options.swap(from, to);
        Ok(())
    }

    pub fn toggle_hovered(&mut self) -> Result<(), PromptError> {
        let index = self.hovered()?;
        self.options[index].toggle_select();
        Ok(())
    }

    pub fn hovered_is_selected(&self) -> Result<bool, PromptError> {
        Ok(self.options[self.hovered()?].is_selected())
    }

    /// Labels in list order.
    pub fn labels(&self) -> Vec<String> {
        self.options.iter().map(|o| o.content.clone()).collect()
    }

    /// Labels of selected options in list order.
    pub fn selected_labels(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.is_selected())
            .map(|o| o.content.clone())
            .collect()
    }

    fn neighbor(&self, index: usize, direction: Direction) -> Result<usize, PromptError> {
        adjacent(&self.options, index, direction)
            .ok_or_else(|| PromptError::protocol("option list is empty"))
    }
}

/// Display text for a list answer.
pub fn join_labels(labels: &[String]) -> String {
    labels.join(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hovered_label(list: &HoverList) -> String {
        list.options()[list.hovered().unwrap()].content.clone()
    }

    #[test]
    fn test_empty_is_rejected() {
        let labels: [&str; 0] = [];
        assert!(matches!(HoverList::new(labels), Err(PromptError::NoOptions)));
    }

    #[test]
    fn test_move_hover_wraps() {
        let mut list = HoverList::new(["a", "b", "c"]).unwrap();
        list.move_hover(Direction::Up).unwrap();
        assert_eq!(hovered_label(&list), "c");
        list.move_hover(Direction::Down).unwrap();
        assert_eq!(hovered_label(&list), "a");
    }

    #[test]
    fn test_exactly_one_hovered() {
        let mut list = HoverList::new(["a", "b", "c", "d"]).unwrap();
        for direction in [Direction::Down, Direction::Down, Direction::Up, Direction::Up, Direction::Up] {
            list.move_hover(direction).unwrap();
            let count = list.options().iter().filter(|o| o.is_hovered()).count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn test_single_option_keeps_hover() {
        let mut list = HoverList::new(["only"]).unwrap();
        list.move_hover(Direction::Down).unwrap();
        assert_eq!(list.hovered().unwrap(), 0);
    }

    #[test]
    fn test_move_hovered_entry_carries_flags() {
        let mut list = HoverList::new(["a", "b", "c"]).unwrap();
        list.toggle_hovered().unwrap();
        list.move_hovered_entry(Direction::Down).unwrap();
        assert_eq!(list.labels(), vec!["b", "a", "c"]);
        assert_eq!(list.hovered().unwrap(), 1);
        assert!(list.hovered_is_selected().unwrap());
    }

    #[test]
    fn test_missing_hover_is_protocol_error() {
        let mut list = HoverList::new(["a"]).unwrap();
        list.options[0].hover = Some(false);
        assert!(matches!(list.hovered(), Err(PromptError::Protocol(_))));
    }

    #[test]
    fn test_join_labels() {
        assert_eq!(join_labels(&["a".into(), "b".into()]), "a, b");
    }
}
