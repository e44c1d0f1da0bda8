// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::*;
use log::trace;
use std::iter::Peekable;
use std::str::Chars;

/// The character which separates tokens in a list.
pub const DELIMITER: char = ',';
/// The character which opens and closes a quoted span.
pub const QUOTE: char = '"';

/// Quote characters which are removed entirely in `Quoting::Strip` mode.
const STRIPPED_QUOTES: &[char] = &['"', '\'', '`'];

/// Quoting selects how quote characters in a raw list are interpreted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Quoting {
    /// Quote characters are only there to protect the list from the shell.
    /// They are dropped, and every comma is a delimiter. Suitable for
    /// element types whose spellings can never contain a comma or a quote.
    Strip,
    /// Double-quoted spans are honored: commas inside them are literal, and
    /// `""` inside them stands for one literal quote.
    Literal,
}

/// Split the given raw flag value into a list of trimmed tokens, according to
/// the given quoting mode. An empty (or all-whitespace) input produces no
/// tokens at all, rather than a single empty token.
pub fn split(raw: &str, quoting: Quoting) -> Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(vec![]);
    }

    let tokens = match quoting {
        Quoting::Strip => split_stripped(raw),
        Quoting::Literal => split_literal(raw)?,
    };
    trace!("Split '{}' into {:?}", raw, tokens);
    Ok(tokens)
}

fn split_stripped(raw: &str) -> Vec<String> {
    let unquoted: String = raw
        .chars()
        .filter(|c| !STRIPPED_QUOTES.contains(c))
        .collect();
    unquoted
        .split(DELIMITER)
        .map(|t| t.trim().to_owned())
        .collect()
}

/// A token being accumulated by `split_literal`. Each character remembers
/// whether it came from inside a quoted span, since only unquoted whitespace
/// is trimmed.
#[derive(Default)]
struct PartialToken {
    chars: Vec<(char, bool)>,
}

impl PartialToken {
    fn push(&mut self, c: char, quoted: bool) {
        self.chars.push((c, quoted));
    }

    fn finish(self) -> String {
        let is_padding = |&(c, quoted): &(char, bool)| !quoted && c.is_whitespace();
        let start = self
            .chars
            .iter()
            .position(|c| !is_padding(c))
            .unwrap_or_else(|| self.chars.len());
        let end = self
            .chars
            .iter()
            .rposition(|c| !is_padding(c))
            .map_or(start, |i| i + 1);
        self.chars[start..end].iter().map(|&(c, _)| c).collect()
    }
}

/// Consume the rest of a quoted span (the opening quote has already been
/// read) into the given token. Returns false if the input ended before the
/// span was closed.
fn read_quoted_span(chars: &mut Peekable<Chars<'_>>, token: &mut PartialToken) -> bool {
    while let Some(c) = chars.next() {
        if c != QUOTE {
            token.push(c, true);
        } else if chars.peek() == Some(&QUOTE) {
            chars.next();
            token.push(QUOTE, true);
        } else {
            return true;
        }
    }
    false
}

fn split_literal(raw: &str) -> Result<Vec<String>> {
    let mut tokens: Vec<String> = vec![];
    let mut token = PartialToken::default();
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            QUOTE => {
                if !read_quoted_span(&mut chars, &mut token) {
                    return Err(Error::UnterminatedQuote(raw.to_owned()));
                }
            }
            DELIMITER => tokens.push(std::mem::take(&mut token).finish()),
            c => token.push(c, false),
        }
    }
    tokens.push(token.finish());
    Ok(tokens)
}

/// Join already-encoded tokens back into one raw list. This is the inverse of
/// `split`, provided each token was encoded so it survives splitting.
pub fn join<I: IntoIterator<Item = String>>(tokens: I) -> String {
    let delimiter = DELIMITER.to_string();
    tokens
        .into_iter()
        .collect::<Vec<String>>()
        .join(delimiter.as_str())
}

/// Encode one string so `split` in `Quoting::Literal` mode returns it
/// unchanged: wrap it in quotes if it contains anything `split` would
/// otherwise interpret or trim.
pub fn quote_if_needed(s: &str) -> String {
    let needs_quotes = s.is_empty()
        || s.contains(DELIMITER)
        || s.contains(QUOTE)
        || s.starts_with(char::is_whitespace)
        || s.ends_with(char::is_whitespace);
    if !needs_quotes {
        return s.to_owned();
    }

    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push(QUOTE);
    for c in s.chars() {
        if c == QUOTE {
            quoted.push(QUOTE);
        }
        quoted.push(c);
    }
    quoted.push(QUOTE);
    quoted
}
