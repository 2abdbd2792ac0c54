use std::fmt;

/// Set of lowercase ascii letters, one bit per letter
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct LetterSet {
    // bit is one if letter is in it
    accepted: u32,
}

impl LetterSet {
    pub fn empty() -> Self {
        Self { accepted: 0 }
    }

    pub fn contains(&self, letter: char) -> bool {
        letter.is_ascii_lowercase() && self.contains_byte(letter as u8)
    }

    /// Byte variant used when walking the dictionary fst
    pub fn contains_byte(&self, byte: u8) -> bool {
        byte.is_ascii_lowercase() && (self.accepted & (1 << (byte - b'a'))) != 0
    }

    /// Inserts the letter. Anything that isn't a lowercase ascii letter is ignored
    pub fn insert(&mut self, letter: char) {
        if letter.is_ascii_lowercase() {
            self.accepted |= 1 << (letter as u8 - b'a')
        }
    }

    pub fn len(&self) -> usize {
        self.accepted.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.accepted == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        ('a'..='z').filter(move |&l| self.contains(l))
    }
}

impl Default for LetterSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::iter::FromIterator<char> for LetterSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = char>,
    {
        let mut tmp = Self::default();
        iter.into_iter().for_each(|l| tmp.insert(l));
        tmp
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for l in self.iter() {
            write!(f, "{}", l)?;
        }
        write!(f, "]")
    }
}
