use thiserror::Error;

/// Number of child slots per node, one per letter a-z.
pub const ALPHABET_SIZE: usize = 26;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrieError {
    #[error("word contains a character outside a-z: {:?}", .0)]
    InvalidCharacter(char),
}

/// Maps a lowercase ASCII letter to its child slot offset.
pub fn letter_index(c: char) -> Result<usize, TrieError> {
    if c.is_ascii_lowercase() {
        Ok(c as usize - 'a' as usize)
    } else {
        Err(TrieError::InvalidCharacter(c))
    }
}

/// The letter stored at a given child slot offset.
pub fn letter_at(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE);
    (b'a' + index as u8) as char
}

/// Validates a whole word and maps it to child slot offsets. Every operation
/// checks its input up front so a bad word never touches the tree.
pub fn word_offsets(word: &str) -> Result<Vec<usize>, TrieError> {
    word.chars().map(letter_index).collect()
}

/// A node in the trie.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Children indexed by letter offset ('a' -> 0 .. 'z' -> 25).
    pub children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    /// Whether some inserted word terminates at this node.
    pub is_end_of_word: bool,
    /// Assigned by the layout pass; only valid until the next pass.
    pub display_index: Option<usize>,
}

/// The trie data structure. The root is always present and represents the
/// empty prefix.
#[derive(Debug, Default)]
pub struct Trie {
    pub root: TrieNode,
}

impl Trie {
    /// Creates a new, empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word into the trie, creating nodes for any missing prefix
    /// characters. Inserting the same word twice is a no-op the second time.
    ///
    /// The whole word is validated before any node is created, so a rejected
    /// insert leaves the trie untouched.
    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        let offsets = word_offsets(word)?;

        let mut current = &mut self.root;
        for index in offsets {
            current = &mut **current.children[index].get_or_insert_with(Box::default);
        }
        current.is_end_of_word = true;
        Ok(())
    }

    /// Returns whether the exact word was inserted (and not since removed).
    /// Searching for the empty string reports the root's end-of-word flag.
    pub fn search(&self, word: &str) -> Result<bool, TrieError> {
        let offsets = word_offsets(word)?;

        let mut current = &self.root;
        for index in offsets {
            match current.children[index].as_deref() {
                Some(child) => current = child,
                None => return Ok(false),
            }
        }
        Ok(current.is_end_of_word)
    }

    /// Removes a word from the trie. Returns false (and mutates nothing) if
    /// the word is not present.
    ///
    /// Only the end-of-word flag is cleared; interior nodes stay in place
    /// even when nothing below them ends a word anymore. Search results
    /// depend only on the flags, so pruning is skipped.
    pub fn remove(&mut self, word: &str) -> Result<bool, TrieError> {
        if !self.search(word)? {
            return Ok(false);
        }

        let mut current = &mut self.root;
        for index in word_offsets(word)? {
            match current.children[index].as_deref_mut() {
                Some(child) => current = child,
                None => return Ok(false),
            }
        }
        current.is_end_of_word = false;
        Ok(true)
    }

    /// The number of levels in the trie. A fresh trie has height 1 (the
    /// root); inserting a word of length L makes it L + 1.
    pub fn height(&self) -> usize {
        node_height(&self.root)
    }
}

fn node_height(node: &TrieNode) -> usize {
    1 + node
        .children
        .iter()
        .flatten()
        .map(|child| node_height(child))
        .max()
        .unwrap_or(0)
}
