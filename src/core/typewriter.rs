use crate::constants::{DELETE_DELAY_MS, HOLD_DELAY_MS, NEXT_PHRASE_DELAY_MS, TYPE_DELAY_MS};

/// Delays between typewriter ticks, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub next_phrase_ms: u32,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            type_ms: TYPE_DELAY_MS,
            delete_ms: DELETE_DELAY_MS,
            hold_ms: HOLD_DELAY_MS,
            next_phrase_ms: NEXT_PHRASE_DELAY_MS,
        }
    }
}

/// Output of one tick: the text to show and how long to wait before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

/// Looping type / hold / delete cycle over an ordered phrase list.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    timings: TypewriterTimings,
    phrase: usize,
    chars: usize,
    deleting: bool,
    delay_ms: u32,
}

impl Typewriter {
    /// Returns `None` for an empty phrase list; there is nothing to cycle.
    pub fn new(phrases: Vec<String>, timings: TypewriterTimings) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            timings,
            phrase: 0,
            chars: 0,
            deleting: false,
            delay_ms: timings.type_ms,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn char_index(&self) -> usize {
        self.chars
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn current_text(&self) -> &str {
        prefix(&self.phrases[self.phrase], self.chars)
    }

    /// Advance one keystroke (or one deletion) and report the new text.
    pub fn tick(&mut self) -> TypeStep {
        let len = self.phrases[self.phrase].chars().count();
        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            self.delay_ms = self.timings.delete_ms;
        } else {
            self.chars = (self.chars + 1).min(len);
            self.delay_ms = self.timings.type_ms;
        }
        let text = self.current_text().to_owned();

        if !self.deleting && self.chars == len {
            self.deleting = true;
            self.delay_ms = self.timings.hold_ms;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            self.delay_ms = self.timings.next_phrase_ms;
        }

        TypeStep {
            text,
            delay_ms: self.delay_ms,
        }
    }
}

/// First `n` characters of `s`, cut on a char boundary.
pub fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Split a `|`-separated attribute value into trimmed, non-empty phrases.
pub fn parse_phrases(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}
