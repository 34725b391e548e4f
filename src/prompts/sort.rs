//! Reorderable list prompt.

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

/// Reorders labels: SPACE picks up the hovered label, arrows then carry it.
///
/// While nothing is picked up the arrows only move the hover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    list: HoverList,
}

impl Sort {
    pub fn new<I, S>(labels: I) -> Result<Self, PromptError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            list: HoverList::new(labels)?,
        })
    }

    /// Labels in their current order.
    pub fn order(&self) -> Vec<String> {
        self.list.labels()
    }

    fn step(&mut self, direction: Direction) -> Result<Transition<Vec<String>>, PromptError> {
        if self.list.hovered_is_selected()? {
            self.list.move_hovered_entry(direction)?;
        } else {
            self.list.move_hover(direction)?;
        }
        Ok(Transition::Continue)
    }
}

impl PromptMachine for Sort {
    type Output = Vec<String>;

    fn widgets(&self) -> Vec<Widget> {
        vec![Widget::SortableOptions(self.list.options().to_vec())]
    }

    fn handle_key(&mut self, key: Key) -> Result<Transition<Vec<String>>, PromptError> {
        match key {
            Key::Up => self.step(Direction::Up),
            Key::Down => self.step(Direction::Down),
            Key::Space => {
                self.list.toggle_hovered()?;
                Ok(Transition::Continue)
            }
            Key::Enter => {
                let order = self.list.labels();
                let display = join_labels(&order);
                Ok(Transition::Decide(Decision::with_display(order, display)))
            }
            _ => Ok(Transition::Alert),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(sort: &mut Sort, keys: &[Key]) {
        for key in keys {
            sort.handle_key(*key).unwrap();
        }
    }

    #[test]
    fn test_hover_moves_without_reordering() {
        let mut sort = Sort::new(["a", "b", "c"]).unwrap();
        press(&mut sort, &[Key::Down, Key::Down, Key::Down]);
        assert_eq!(sort.order(), vec!["a", "b", "c"]);
        assert_eq!(sort.list.hovered().unwrap(), 0);
    }

    #[test]
    fn test_picked_up_entry_moves() {
        let mut sort = Sort::new(["a", "b", "c", "d"]).unwrap();
        press(&mut sort, &[Key::Space, Key::Down, Key::Down]);
        assert_eq!(sort.order(), vec!["b", "c", "a", "d"]);
        assert_eq!(sort.list.hovered().unwrap(), 2);

        // Drop it and move the hover away
        press(&mut sort, &[Key::Space, Key::Down]);
        assert_eq!(sort.order(), vec!["b", "c", "a", "d"]);
        assert_eq!(sort.list.hovered().unwrap(), 3);
    }

    #[test]
    fn test_picked_up_entry_wraps_with_swap() {
        let mut sort = Sort::new(["a", "b", "c"]).unwrap();
        press(&mut sort, &[Key::Space, Key::Up]);
        // Wrapping swaps with the last entry
        assert_eq!(sort.order(), vec!["c", "b", "a"]);
        assert_eq!(sort.list.hovered().unwrap(), 2);
    }

    #[test]
    fn test_moves_equal_direct_swaps() {
        let labels = ["a", "b", "c", "d", "e"];
        let mut sort = Sort::new(labels).unwrap();
        press(&mut sort, &[Key::Down, Key::Space, Key::Down, Key::Down, Key::Down]);

        let mut expected: Vec<&str> = labels.to_vec();
        expected.swap(1, 2);
        expected.swap(2, 3);
        expected.swap(3, 4);
        assert_eq!(sort.order(), expected);
    }

    #[test]
    fn test_enter_decides_current_order() {
        let mut sort = Sort::new(["x", "y"]).unwrap();
        press(&mut sort, &[Key::Space, Key::Down]);
        let Transition::Decide(decision) = sort.handle_key(Key::Enter).unwrap() else {
            panic!("expected a decision");
        };
        assert_eq!(decision.value, vec!["y", "x"]);
        assert_eq!(decision.display, "y, x");
    }

    #[test]
    fn test_other_keys_alert() {
        let mut sort = Sort::new(["x"]).unwrap();
        assert_eq!(sort.handle_key(Key::Char('q')).unwrap(), Transition::Alert);
        assert_eq!(sort.handle_key(Key::PageDown).unwrap(), Transition::Alert);
    }
}
