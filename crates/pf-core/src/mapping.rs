use std::borrow::Cow;

use crate::error::CoreError;
use crate::escape::decode_escapes;

/// Built-in substitutions, applied in this order.
///
/// U+2019 (right single quotation mark) is left out on purpose: it doubles
/// as the typographic apostrophe and rewriting it damages prose.
pub const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{2013}", "-"),   // en dash
    ("\u{2014}", "-"),   // em dash
    ("\u{2212}", "-"),   // minus sign
    ("\u{2018}", "'"),   // left single quotation mark
    ("\u{201C}", "\""),  // left double quotation mark
    ("\u{201D}", "\""),  // right double quotation mark
    ("\u{00A0}", " "),   // no-break space
    ("\u{2007}", " "),   // figure space
    ("\u{2009}", " "),   // thin space
    ("\u{200A}", " "),   // hair space
    ("\u{202F}", " "),   // narrow no-break space
    ("\u{200B}", ""),    // zero width space
    ("\u{200C}", ""),    // zero width non-joiner
    ("\u{200D}", ""),    // zero width joiner
    ("\u{2060}", ""),    // word joiner
    ("\u{FEFF}", ""),    // zero width no-break space / BOM
    ("\u{2026}", "..."), // horizontal ellipsis
];

/// One `key=value` override, already escape-decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Override {
    /// Text to search for. Never empty.
    pub key: String,
    /// Replacement text, possibly empty.
    pub value: String,
}

impl Override {
    /// Parse the command-line form `key=value`, splitting on the first `=`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidMapping`] if there is no `=` or the key is
    /// empty, and [`CoreError::InvalidEscape`] if either side holds a
    /// malformed escape.
    ///
    /// # Example
    /// ```
    /// use pf_core::mapping::Override;
    /// let o = Override::parse(r"\u2605=*").unwrap();
    /// assert_eq!(o.key, "\u{2605}");
    /// assert_eq!(o.value, "*");
    /// ```
    pub fn parse(entry: &str) -> Result<Self, CoreError> {
        let Some((raw_key, raw_value)) = entry.split_once('=') else {
            return Err(CoreError::InvalidMapping {
                entry: entry.to_owned(),
                reason: "missing '=' separator",
            });
        };
        let key = decode_escapes(raw_key)?;
        if key.is_empty() {
            return Err(CoreError::InvalidMapping {
                entry: entry.to_owned(),
                reason: "empty key",
            });
        }
        let value = decode_escapes(raw_value)?;
        Ok(Self { key, value })
    }
}

/// Ordered source → replacement table.
///
/// Keys are distinct. Iteration order is insertion order and is the order
/// in which substitutions run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplacementMapping {
    entries: Vec<(String, String)>,
}

impl ReplacementMapping {
    /// The built-in table.
    #[must_use]
    pub fn defaults() -> Self {
        let mut mapping = Self::default();
        for &(src, dst) in DEFAULT_REPLACEMENTS {
            mapping.insert(src, dst);
        }
        mapping
    }

    /// Seed with the defaults (or nothing), then overlay `overrides` in order.
    #[must_use]
    pub fn build(use_defaults: bool, overrides: &[Override]) -> Self {
        let mut mapping = if use_defaults {
            Self::defaults()
        } else {
            Self::default()
        };
        for o in overrides {
            mapping.insert(&o.key, &o.value);
        }
        mapping
    }

    /// Insert or overwrite. An existing key keeps its position.
    pub fn insert(&mut self, src: &str, dst: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == src) {
            Some((_, v)) => dst.clone_into(v),
            None => self.entries.push((src.to_owned(), dst.to_owned())),
        }
    }

    /// Look up the replacement for `src`.
    #[cfg(test)]
    #[must_use]
    pub fn get(&self, src: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == src)
            .map(|(_, v)| v.as_str())
    }

    /// Entries in substitution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every entry over `text`, one after the other.
    ///
    /// Each entry sees the output of the previous ones, so a replacement that
    /// contains a later key gets rewritten again.
    /// Borrows `text` when nothing matched.
    ///
    /// # Example
    /// ```
    /// use pf_core::mapping::ReplacementMapping;
    /// let mapping = ReplacementMapping::defaults();
    /// assert_eq!(mapping.apply("wait\u{2026}"), "wait...");
    /// ```
    #[must_use]
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut out = Cow::Borrowed(text);
        for (src, dst) in self.iter() {
            if out.contains(src) {
                out = Cow::Owned(out.replace(src, dst));
            }
        }
        out
    }
}
