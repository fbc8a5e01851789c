use crate::config::TypewriterConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Character-at-a-time text reveal.
///
/// Forward mode appends one character per step until the full text shows and
/// then idles. Reverse mode erases one character per step and flips back to
/// forward once the text is empty.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    direction: Direction,
    forward_ms: u32,
    reverse_ms: u32,
}

impl Typewriter {
    pub fn new(config: &TypewriterConfig) -> Self {
        Self {
            chars: config.text.chars().collect(),
            shown: 0,
            direction: Direction::Forward,
            forward_ms: config.forward_ms,
            reverse_ms: config.reverse_ms,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_complete(&self) -> bool {
        self.direction == Direction::Forward && self.shown == self.chars.len()
    }

    pub fn text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
    }

    /// One tick; returns the delay before the next one.
    pub fn step(&mut self) -> u32 {
        match self.direction {
            Direction::Forward => {
                if self.shown < self.chars.len() {
                    self.shown += 1;
                }
            }
            Direction::Reverse => {
                if self.shown > 0 {
                    self.shown -= 1;
                } else {
                    self.direction = Direction::Forward;
                }
            }
        }
        match self.direction {
            Direction::Forward => self.forward_ms,
            Direction::Reverse => self.reverse_ms,
        }
    }
}
