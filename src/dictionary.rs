use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File, Metadata};
use std::io::{BufRead, BufReader};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fst::{Automaton, IntoStreamer, Set, Streamer};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::utils::serialization;

/// Word list filtered to an inclusive length range. Words are stored lowercase in
/// an fst set, so they are sorted and deduplicated.
pub struct Dictionary {
    words: Set<Vec<u8>>,
    min_length: usize,
    max_length: usize,
    source: Option<PathBuf>,
    stamp: Option<SourceStamp>,
}

/// Size and modification time of the word list a dictionary was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SourceStamp {
    len: u64,
    modified: Option<SystemTime>,
}

impl SourceStamp {
    fn of(metadata: &Metadata) -> Self {
        Self {
            len: metadata.len(),
            modified: metadata.modified().ok(),
        }
    }
}

/// On disk form of a dictionary used by the word list cache
#[derive(Serialize, Deserialize)]
struct DictionarySnapshot {
    source: Option<PathBuf>,
    stamp: Option<SourceStamp>,
    min_length: usize,
    max_length: usize,
    fst: Vec<u8>,
}

/// Normalises a raw word list line. Returns `None` for lines that can't be a word
pub fn normalize_word(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_lowercase())
}

impl Dictionary {
    pub fn new<I, S>(words: I, min_length: usize, max_length: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(words, min_length, max_length, None, None)
    }

    fn build<I, S>(
        words: I,
        min_length: usize,
        max_length: usize,
        source: Option<PathBuf>,
        stamp: Option<SourceStamp>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if min_length > max_length {
            return Err(Error::InvalidWordLength {
                minimum: min_length,
                maximum: max_length,
            });
        }

        let range = min_length..=max_length;
        let mut skipped = 0;
        let mut sorted = BTreeSet::new();
        for raw in words {
            match normalize_word(raw.as_ref()) {
                Some(word) if range.contains(&word.len()) => {
                    sorted.insert(word);
                }
                Some(_) => {}
                None => {
                    skipped += 1;
                    debug!(line = raw.as_ref(), "skipping invalid word");
                }
            }
        }
        if skipped > 0 {
            debug!(skipped, "skipped invalid word list lines");
        }

        let words = Set::from_iter(sorted)?;
        Ok(Self {
            words,
            min_length,
            max_length,
            source,
            stamp,
        })
    }

    /// Builds a dictionary from words already grouped by length. The length range is
    /// taken from the smallest and largest group keys
    pub fn from_groups(groups: &BTreeMap<usize, BTreeSet<String>>) -> Result<Self> {
        let min_length = groups.keys().next().copied().unwrap_or(0);
        let max_length = groups.keys().next_back().copied().unwrap_or(0);
        Self::new(groups.values().flatten(), min_length, max_length)
    }

    /// Reads one word per line. Blank lines, lines that aren't utf-8 and lines with
    /// anything other than ascii letters are skipped
    pub fn from_file<P: AsRef<Path>>(path: P, min_length: usize, max_length: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(e, path))?;
        let stamp = file.metadata().ok().map(|m| SourceStamp::of(&m));
        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.split(b'\n') {
            let bytes = line.map_err(|e| Error::io(e, path))?;
            // Undecodable bytes become U+FFFD, which the word check rejects
            let line = String::from_utf8(bytes)
                .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
            lines.push(line);
        }

        let total = lines.len();
        let dict = Self::build(
            lines,
            min_length,
            max_length,
            Some(path.to_path_buf()),
            stamp,
        )?;
        info!(
            path = %path.display(),
            total,
            kept = dict.len(),
            min_length,
            max_length,
            "loaded word list"
        );
        Ok(dict)
    }

    /// Loads the dictionary from `cache` when it was built from the same word list and
    /// length range and the word list hasn't changed size or modification time since.
    /// Otherwise reads the word list and refreshes the cache. Failing to write the
    /// cache is logged and doesn't fail the load
    pub fn from_file_cached<P: AsRef<Path>, C: AsRef<Path>>(
        path: P,
        cache: C,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self> {
        let path = path.as_ref();
        let cache = cache.as_ref();
        if cache.exists() {
            let current = fs::metadata(path).ok().map(|m| SourceStamp::of(&m));
            match Self::load(cache) {
                Ok(dict)
                    if dict.source.as_deref() == Some(path)
                        && dict.length_range() == (min_length..=max_length)
                        && current.is_some()
                        && dict.stamp == current =>
                {
                    info!(cache = %cache.display(), words = dict.len(), "dictionary cache hit");
                    return Ok(dict);
                }
                Ok(_) => info!(cache = %cache.display(), "dictionary cache is stale"),
                Err(e) => warn!(cache = %cache.display(), error = %e, "ignoring unreadable dictionary cache"),
            }
        }

        let dict = Self::from_file(path, min_length, max_length)?;
        match dict.save(cache) {
            Ok(()) => info!(cache = %cache.display(), "wrote dictionary cache"),
            Err(e) => warn!(cache = %cache.display(), error = %e, "failed to write dictionary cache"),
        }
        Ok(dict)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let snapshot = DictionarySnapshot {
            source: self.source.clone(),
            stamp: self.stamp,
            min_length: self.min_length,
            max_length: self.max_length,
            fst: self.words.as_fst().as_bytes().to_vec(),
        };
        serialization::save_to_disk(&snapshot, path)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let snapshot: DictionarySnapshot = serialization::load_from_disk(path)?;
        let words = Set::new(snapshot.fst)?;
        Ok(Self {
            words,
            min_length: snapshot.min_length,
            max_length: snapshot.max_length,
            source: snapshot.source,
            stamp: snapshot.stamp,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn length_range(&self) -> RangeInclusive<usize> {
        self.min_length..=self.max_length
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// All words in sorted order
    pub fn words(&self) -> Vec<String> {
        self.search(fst::automaton::AlwaysMatch)
    }

    /// Words accepted by the automaton, in sorted order
    pub fn search<A: Automaton>(&self, matcher: A) -> Vec<String> {
        let mut stream = self.words.search(matcher).into_stream();
        let mut words = Vec::new();
        while let Some(w) = stream.next() {
            // Only ascii letters are ever inserted
            words.push(String::from_utf8_lossy(w).into_owned());
        }
        words
    }

    /// Words grouped by their length
    pub fn groups(&self) -> BTreeMap<usize, BTreeSet<String>> {
        let mut groups: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
        for word in self.words() {
            groups.entry(word.len()).or_default().insert(word);
        }
        groups
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &self.len())
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_length_filter_and_dedupe() {
        let dict = Dictionary::new(["cat", "Cat", "a", "mouse", "toot", "at"], 2, 4).unwrap();
        assert_eq!(dict.words(), vec!["at", "cat", "toot"]);
        assert!(dict.contains("cat"));
        assert!(!dict.contains("mouse"));
    }

    #[test]
    fn test_invalid_lines_skipped() {
        let dict = Dictionary::new(["  art ", "", "don't", "naïve", "x-ray", "rat\r"], 2, 10).unwrap();
        assert_eq!(dict.words(), vec!["art", "rat"]);
    }

    #[test]
    fn test_groups() {
        let dict = Dictionary::new(["cat", "art", "toot", "at"], 2, 4).unwrap();
        let groups = dict.groups();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&3].len(), 2);
        assert!(groups[&4].contains("toot"));

        let rebuilt = Dictionary::from_groups(&groups).unwrap();
        assert_eq!(rebuilt.words(), dict.words());
        assert_eq!(rebuilt.length_range(), 2..=4);
    }

    #[test]
    fn test_bad_range() {
        assert!(matches!(
            Dictionary::new(["cat"], 5, 3),
            Err(Error::InvalidWordLength { minimum: 5, maximum: 3 })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat\nART\n\n#comment\nto\ntoot").unwrap();
        let dict = Dictionary::from_file(file.path(), 3, 4).unwrap();
        assert_eq!(dict.words(), vec!["art", "cat", "toot"]);
    }

    #[test]
    fn test_non_utf8_lines_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"cat\nna\xefve\nart\n\xff\xfe\r\n").unwrap();
        let dict = Dictionary::from_file(file.path(), 2, 10).unwrap();
        assert_eq!(dict.words(), vec!["art", "cat"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Dictionary::from_file(dir.path().join("nope.txt"), 2, 5);
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let words = dir.path().join("words.txt");
        let cache = dir.path().join("words.bin");
        std::fs::write(&words, "cat\nart\nrat\ncar\ntoot\n").unwrap();

        let first = Dictionary::from_file_cached(&words, &cache, 3, 4).unwrap();
        assert!(cache.exists());

        // Unchanged word list and range: served from the cache
        let second = Dictionary::from_file_cached(&words, &cache, 3, 4).unwrap();
        assert_eq!(second.words(), first.words());

        // A different range invalidates it
        let third = Dictionary::from_file_cached(&words, &cache, 3, 3).unwrap();
        assert_eq!(third.words(), vec!["art", "car", "cat", "rat"]);
    }

    #[test]
    fn test_cache_rebuilt_after_word_list_changes() {
        let dir = tempfile::tempdir().unwrap();
        let words = dir.path().join("words.txt");
        let cache = dir.path().join("words.bin");
        std::fs::write(&words, "cat\n").unwrap();

        let first = Dictionary::from_file_cached(&words, &cache, 2, 5).unwrap();
        assert_eq!(first.words(), vec!["cat"]);

        std::fs::write(&words, "cat\ndog\n").unwrap();
        let second = Dictionary::from_file_cached(&words, &cache, 2, 5).unwrap();
        assert_eq!(second.words(), vec!["cat", "dog"]);
        assert!(second.contains("dog"));

        // The refreshed cache holds the new words
        assert_eq!(Dictionary::load(&cache).unwrap().words(), vec!["cat", "dog"]);
    }

    #[test]
    fn test_unwritable_cache_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let words = dir.path().join("words.txt");
        let cache = dir.path().join("no_such_dir").join("words.bin");
        std::fs::write(&words, "cat\nart\n").unwrap();

        let dict = Dictionary::from_file_cached(&words, &cache, 2, 5).unwrap();
        assert_eq!(dict.words(), vec!["art", "cat"]);
        assert!(!cache.exists());
    }

    #[test]
    fn test_corrupt_cache_rebuilt() {
        let dir = tempfile::tempdir().unwrap();
        let words = dir.path().join("words.txt");
        let cache = dir.path().join("words.bin");
        std::fs::write(&words, "cat\n").unwrap();
        std::fs::write(&cache, b"not a cache").unwrap();

        let dict = Dictionary::from_file_cached(&words, &cache, 2, 5).unwrap();
        assert_eq!(dict.words(), vec!["cat"]);
        assert!(Dictionary::load(&cache).is_ok());
    }
}
