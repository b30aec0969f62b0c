// Typewriter headline: types a word out, holds, deletes it, moves on.

pub const TYPE_DELAY_MS: u32 = 200;
pub const DELETE_DELAY_MS: u32 = 100;
pub const HOLD_DELAY_MS: u32 = 2000;
pub const NEXT_WORD_DELAY_MS: u32 = 500;

pub const HEADLINE_WORDS: [&str; 4] = [
    "AI Explorer <_> ",
    "Flutter Developer { } ",
    "Problem Solver // ",
    "Innovator [~] ",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct TypingEffect {
    words: Vec<String>,
    word_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingEffect {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypingEffect {
            words: words.into_iter().map(Into::into).collect(),
            word_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn headline() -> Self {
        TypingEffect::new(HEADLINE_WORDS.iter().copied())
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Text to show now, and how long to wait before the next step.
    pub fn step(&mut self) -> TypeStep {
        let word = match self.words.get(self.word_index) {
            Some(word) => word,
            None => {
                return TypeStep {
                    text: String::new(),
                    delay_ms: NEXT_WORD_DELAY_MS,
                }
            }
        };
        let len = word.chars().count();
        let text: String = word.chars().take(self.char_index).collect();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index += 1;
        }

        let mut delay_ms = if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };

        if !self.deleting && self.char_index >= len {
            self.deleting = true;
            delay_ms = HOLD_DELAY_MS;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            delay_ms = NEXT_WORD_DELAY_MS;
        }

        TypeStep { text, delay_ms }
    }
}
