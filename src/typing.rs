use std::time::Duration;

use futures::Stream;
use thiserror::Error;


#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeEffectError {
    #[error("typing effect needs at least one string")]
    EmptySequence,
    #[error("typing delay must be positive")]
    ZeroDelay,
}

/// Text fed to the typing effect. Only a `Sequence` advances between strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeText {
    Single(String),
    Sequence(Vec<String>),
}

impl From<&str> for TypeText {
    fn from(value: &str) -> Self {
        TypeText::Single(value.to_string())
    }
}

impl From<String> for TypeText {
    fn from(value: String) -> Self {
        TypeText::Single(value)
    }
}

impl From<Vec<String>> for TypeText {
    fn from(value: Vec<String>) -> Self {
        TypeText::Sequence(value)
    }
}

impl From<&[&str]> for TypeText {
    fn from(value: &[&str]) -> Self {
        TypeText::Sequence(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Reveals a string one character per tick, clears it, then moves on to the
/// next string of the sequence, forever.
///
/// `output` is always the first `counter` characters of `current()`.
#[derive(Debug, Clone)]
pub struct TypeEffect {
    text: TypeText,
    delay: Duration,
    output: String,
    counter: usize,
    index: usize,
}

impl TypeEffect {
    pub fn new(text: impl Into<TypeText>, delay: Duration) -> Result<Self, TypeEffectError> {
        let text = text.into();
        if let TypeText::Sequence(texts) = &text {
            if texts.is_empty() {
                return Err(TypeEffectError::EmptySequence);
            }
        }
        if delay.is_zero() {
            return Err(TypeEffectError::ZeroDelay);
        }

        Ok(TypeEffect {
            text,
            delay,
            output: String::new(),
            counter: 0,
            index: 0,
        })
    }

    /// Visible text.
    pub fn text(&self) -> &str {
        &self.output
    }

    /// String currently being revealed.
    pub fn current(&self) -> &str {
        match &self.text {
            TypeText::Single(text) => text,
            TypeText::Sequence(texts) => &texts[self.index],
        }
    }

    /// Advance by one timer tick and return the visible text.
    pub fn tick(&mut self) -> &str {
        match self.current().chars().nth(self.counter) {
            Some(next) => {
                self.output.push(next);
                self.counter += 1;
            }
            None => {
                self.output.clear();
                self.counter = 0;
                if let TypeText::Sequence(texts) = &self.text {
                    self.index = (self.index + 1) % texts.len();
                }
            }
        }
        &self.output
    }

    /// Infinite stream of visible text frames, starting with the empty frame.
    ///
    /// Each later frame is produced `delay` after the previous one. The pending
    /// timer lives inside the stream, so dropping the stream cancels it.
    pub fn frames(self) -> impl Stream<Item = String> {
        self.frames_with(|_| {})
    }

    /// Like [`TypeEffect::frames`], calling `on_tick` with the visible text
    /// after every tick.
    pub fn frames_with<F>(self, on_tick: F) -> impl Stream<Item = String>
    where
        F: FnMut(&str) + Send + 'static,
    {
        futures::stream::unfold((self, on_tick, true), |(mut effect, mut on_tick, first)| async move {
            if !first {
                tokio::time::sleep(effect.delay).await;
                on_tick(effect.tick());
            }
            let frame = effect.text().to_string();
            Some((frame, (effect, on_tick, false)))
        })
    }
}
