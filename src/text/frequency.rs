use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: usize,
    first_seen: usize,
}

/// Case-sensitive word-frequency tally
///
/// Tokens keep the order they were first added in, so ranking ties break
/// toward the earlier-seen token.
#[derive(Debug, Default)]
pub struct WordTally {
    counts: HashMap<String, Entry>,
    next_index: usize,
}

impl WordTally {
    /// Creates an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one token
    pub fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(entry) => entry.count += 1,
            None => {
                self.counts.insert(
                    token.to_string(),
                    Entry {
                        count: 1,
                        first_seen: self.next_index,
                    },
                );
                self.next_index += 1;
            }
        }
    }

    /// Counts every token in the iterator
    pub fn add_tokens<'a, I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for token in tokens {
            self.add(token);
        }
    }

    /// Number of distinct tokens seen
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no tokens have been added
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent tokens as `(token, count)` pairs
    ///
    /// Ordered by descending count; equal counts keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(&String, &Entry)> = self.counts.iter().collect();
        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries
            .into_iter()
            .take(n)
            .map(|(token, entry)| (token.clone(), entry.count))
            .collect()
    }
}
