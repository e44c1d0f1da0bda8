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
use crate::flags::split::{self, Quoting};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt::Debug;

/// An Element is a type which can appear in a slice-valued flag. It knows how
/// to decode itself from a single token, and how to encode itself back into
/// a token which `decode` (and the splitter, in this type's quoting mode)
/// will accept unchanged.
pub trait Element: Clone + Debug + PartialEq + 'static {
    /// The type tag for a single value of this type, e.g. "bool".
    const KIND: &'static str;
    /// The type tag for a slice of this type, e.g. "boolSlice".
    const SLICE_KIND: &'static str;
    /// How the splitter should treat quote characters in a list of these.
    const QUOTING: Quoting;
    /// The value a single-valued flag of this type takes when it appears
    /// without one (e.g. "--verbose"), if any.
    const IMPLICIT: Option<&'static str> = None;

    /// Decode one token. The error names the token, but not the flag; the
    /// owning `FlagSet` fills that in.
    fn decode(token: &str) -> Result<Self>;

    /// Encode this value as a single token.
    fn encode(&self) -> String;
}

fn bad_value(kind: &'static str, token: &str) -> Error {
    Error::BadValue {
        kind: kind,
        token: token.to_owned(),
        flag: None,
    }
}

lazy_static! {
    /// Every spelling a boolean token may take. This is an exact list: e.g.
    /// "tRUE" or "yes" are rejected.
    static ref BOOL_SPELLINGS: HashMap<&'static str, bool> = {
        let mut m = HashMap::new();
        for &s in &["1", "t", "T", "true", "True", "TRUE"] {
            m.insert(s, true);
        }
        for &s in &["0", "f", "F", "false", "False", "FALSE"] {
            m.insert(s, false);
        }
        m
    };
}

impl Element for bool {
    const KIND: &'static str = "bool";
    const SLICE_KIND: &'static str = "boolSlice";
    const QUOTING: Quoting = Quoting::Strip;
    const IMPLICIT: Option<&'static str> = Some("true");

    fn decode(token: &str) -> Result<Self> {
        match BOOL_SPELLINGS.get(token.trim()) {
            None => Err(bad_value(Self::KIND, token)),
            Some(b) => Ok(*b),
        }
    }

    fn encode(&self) -> String {
        self.to_string()
    }
}

// Numeric types all follow FromStr / Display, which are already inverses of
// each other (including for f64, whose Display output is the shortest string
// which parses back to the same value).
macro_rules! numeric_element {
    ($t:ty, $kind:expr, $slice_kind:expr) => {
        impl Element for $t {
            const KIND: &'static str = $kind;
            const SLICE_KIND: &'static str = $slice_kind;
            const QUOTING: Quoting = Quoting::Strip;

            fn decode(token: &str) -> Result<Self> {
                token
                    .trim()
                    .parse::<$t>()
                    .map_err(|_| bad_value(Self::KIND, token))
            }

            fn encode(&self) -> String {
                self.to_string()
            }
        }
    };
}

numeric_element!(i32, "int32", "int32Slice");
numeric_element!(i64, "int64", "int64Slice");
numeric_element!(u64, "uint", "uintSlice");
numeric_element!(f64, "float64", "float64Slice");

impl Element for String {
    const KIND: &'static str = "string";
    const SLICE_KIND: &'static str = "stringSlice";
    const QUOTING: Quoting = Quoting::Literal;

    fn decode(token: &str) -> Result<Self> {
        Ok(token.to_owned())
    }

    fn encode(&self) -> String {
        split::quote_if_needed(self)
    }
}

/// Split the given raw list and decode every token in it. Either every token
/// decodes, or an error is returned for the first one which doesn't.
pub fn decode_list<T: Element>(raw: &str) -> Result<Vec<T>> {
    decode_tokens(split::split(raw, T::QUOTING)?.iter().map(|t| t.as_str()))
}

/// Decode each of the given already-split tokens.
pub fn decode_tokens<'a, T: Element, I: IntoIterator<Item = &'a str>>(
    tokens: I,
) -> Result<Vec<T>> {
    tokens.into_iter().map(T::decode).collect()
}

/// Encode the given values into one raw list, which `decode_list` will turn
/// back into the same values.
pub fn encode_list<T: Element>(values: &[T]) -> String {
    split::join(values.iter().map(T::encode))
}
