//! Circular index over a borrowed slice.

/// Position in a non-empty slice that wraps around at both ends.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a cursor at `index`, normalized modulo the slice length.
    ///
    /// Returns `None` for an empty slice.
    pub const fn new(items: &'a [T], index: usize) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            index: index % items.len(),
        })
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn item(&self) -> &'a T {
        &self.items[self.index]
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.items.len() - 1) % self.items.len();
    }
}

/// Direction of a hover move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Index adjacent to `index` in `direction`, wrapping around.
///
/// Returns `None` for an empty slice.
pub fn adjacent<T>(items: &[T], index: usize, direction: Direction) -> Option<usize> {
    let mut cursor = Cursor::new(items, index)?;
    match direction {
        Direction::Up => cursor.prev(),
        Direction::Down => cursor.next(),
    }
    Some(cursor.index())
}
