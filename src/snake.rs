use std::collections::VecDeque;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::config::{Config, GridSize};

/// Integer grid vector used for both cell positions and unit directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: i32,
    pub y: i32,
}

impl Vector2 {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// Snake body cells, head first and tail last.
///
/// Values are never mutated once built; [`Snake::advanced`] returns the body
/// for the next tick.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snake {
    body: VecDeque<Vector2>,
}

impl Snake {
    /// Builds the starting snake: a horizontal line whose head sits at the
    /// board centre and whose body extends to the left.
    ///
    /// The line is not clipped to the board; see [`Config::validate`].
    #[must_use]
    pub fn initial(config: &Config) -> Self {
        let head = Vector2::new(
            i32::from(config.width / 2),
            i32::from(config.height / 2),
        );

        let body = (0..i32::from(config.start_length))
            .map(|offset| Vector2::new(head.x - offset, head.y))
            .collect();

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Vector2>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the body after the head moves to `next_head`.
    ///
    /// The tail cell is dropped unless `grow` is set, in which case the
    /// length increases by one.
    #[must_use]
    pub fn advanced(&self, next_head: Vector2, grow: bool) -> Self {
        let mut body = self.body.clone();
        body.push_front(next_head);
        if !grow {
            let _ = body.pop_back();
        }
        Self { body }
    }

    /// Returns the head position, or `None` for an empty body.
    #[must_use]
    pub fn head(&self) -> Option<Vector2> {
        self.body.front().copied()
    }

    /// Returns the tail position, or `None` for an empty body.
    #[must_use]
    pub fn tail(&self) -> Option<Vector2> {
        self.body.back().copied()
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Vector2) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if `position` hits the body on the next tick.
    ///
    /// A non-growing snake vacates its tail cell during the move, so the tail
    /// only counts as an obstacle when `growing` is set.
    #[must_use]
    pub fn blocks(&self, position: Vector2, growing: bool) -> bool {
        let checked = if growing {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };

        self.body.iter().take(checked).any(|segment| *segment == position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Vector2> + ExactSizeIterator {
        self.body.iter()
    }
}
