use std::collections::HashMap;

/// Header lookup built from a raw CRLF-delimited header block.
///
/// Names are matched exactly (case-sensitive). When a name repeats, the
/// last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBlock {
    entries: HashMap<String, Option<String>>,
}

impl HeaderBlock {
    /// Value of `name`; `None` if absent or if its line had no `": "`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name)?.as_deref()
    }

    /// Whether a line with this name was seen.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no named line was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses a raw header block.
///
/// Lines are split on `\r\n`, then each line on its first `": "`. Lines
/// with an empty name are skipped. A line without the separator is kept
/// with no value, so the request line (`POST /x HTTP/1.1`) shows up as a
/// valueless name.
pub fn parse_header_block(raw: &str) -> HeaderBlock {
    let mut entries = HashMap::new();

    for line in raw.split("\r\n") {
        let (name, value) = match line.split_once(": ") {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (line, None),
        };

        if name.is_empty() {
            continue;
        }

        entries.insert(name.to_string(), value);
    }

    HeaderBlock { entries }
}
