use std::fmt;
use std::sync::Arc;

use crate::properties::LetterCoordinates;

/// A word to search for in a board of letters
#[derive(Debug, Clone)]
pub struct HiddenWord {
    pub board: Arc<LetterCoordinates>,
    pub value: String,
}

impl HiddenWord {
    pub fn new(board: Arc<LetterCoordinates>, value: impl Into<String>) -> Self {
        Self {
            board,
            value: value.into(),
        }
    }
}

impl fmt::Display for HiddenWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Pairs every word of an iterator with the same board
#[derive(Debug)]
pub struct HiddenWords<I> {
    board: Arc<LetterCoordinates>,
    words: I,
}

impl<I> HiddenWords<I>
where
    I: Iterator<Item = String>,
{
    pub fn new<W>(board: Arc<LetterCoordinates>, words: W) -> Self
    where
        W: IntoIterator<IntoIter = I, Item = String>,
    {
        Self {
            board,
            words: words.into_iter(),
        }
    }
}

impl<I> Iterator for HiddenWords<I>
where
    I: Iterator<Item = String>,
{
    type Item = HiddenWord;

    fn next(&mut self) -> Option<HiddenWord> {
        self.words
            .next()
            .map(|word| HiddenWord::new(Arc::clone(&self.board), word))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.words.size_hint()
    }
}
