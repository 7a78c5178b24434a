//! Trail walk: a small tile map the player walks with the arrow keys.

use crate::message::Message;

pub const TREE: char = 'T';
pub const DISCOVERY: char = 'D';
pub const START: (i32, i32) = (2, 2);

// Rows are kept as drawn; a row shorter than its neighbours simply ends early.
pub const TRAIL_MAP: [&str; 15] = [
    "TTTTTTTTTTTTTTTTTTTT",
    "TGGGGGGGGGGGGGGGGGGGT",
    "TGGGGGGGGGGGGGGGGGGGT",
    "TGGGGDTGGGGGGGGGGGGGT",
    "TGGGGGGGGGGGGGGGGGGGT",
    "TGGGGGGGGGGGGGGGGGGGT",
    "TGGGGGGGGGGGGGGGGGGGT",
    "TGGGGGGGGGGGGGGGGGGGT",
    "TGGGGGGGGGGGGGGGGGGGT",
    "TGGGGGGGGGGGGGGGGGGGT",
    "TGGGGGGGGGGGGGGGGGGGT",
    "TGGGGGGGGGGGGGGGGGGGT",
    "TGGGGGGGGGGGGGGGGGGGT",
    "TGGGGGGGGGGGGGGGGGGGT",
    "TTTTTTTTTTTTTTTTTTTT",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Blocking,
    Walkable,
    Special,
}

impl From<char> for Tile {
    fn from(c: char) -> Self {
        match c {
            TREE => Tile::Blocking,
            DISCOVERY => Tile::Special,
            _ => Tile::Walkable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailMap {
    rows: Vec<Vec<Tile>>,
}

impl Default for TrailMap {
    fn default() -> Self {
        Self::parse(&TRAIL_MAP)
    }
}

impl TrailMap {
    pub fn parse(rows: &[&str]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.chars().map(Tile::from).collect())
                .collect(),
        }
    }

    /// `None` when `(x, y)` lies off the map.
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Blocked,
    Moved,
    FoundSpecial,
}

#[derive(Debug, Clone)]
pub struct TrailWalker {
    map: TrailMap,
    position: (i32, i32),
}

impl Default for TrailWalker {
    fn default() -> Self {
        Self::new(TrailMap::default(), START)
    }
}

impl TrailWalker {
    pub fn new(map: TrailMap, position: (i32, i32)) -> Self {
        Self { map, position }
    }

    pub fn map(&self) -> &TrailMap {
        &self.map
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn step(&mut self, direction: Direction) -> Step {
        let (dx, dy) = direction.delta();
        let (x, y) = (self.position.0 + dx, self.position.1 + dy);
        match self.map.tile(x, y) {
            None | Some(Tile::Blocking) => Step::Blocked,
            Some(Tile::Walkable) => {
                self.position = (x, y);
                Step::Moved
            }
            Some(Tile::Special) => {
                self.position = (x, y);
                Step::FoundSpecial
            }
        }
    }
}

impl Step {
    pub fn message(self) -> Option<Message> {
        match self {
            Step::FoundSpecial => Some(Message::success("You found a special spot!")),
            Step::Blocked | Step::Moved => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_end_early() {
        let map = TrailMap::default();
        assert_eq!(map.tile(20, 0), None);
        assert_eq!(map.tile(20, 1), Some(Tile::Blocking));
        assert_eq!(map.width(), 21);
        assert_eq!(map.height(), 15);
    }

    #[test]
    fn negative_coordinates_are_off_map() {
        let map = TrailMap::default();
        assert_eq!(map.tile(-1, 2), None);
        assert_eq!(map.tile(2, -1), None);
    }
}
