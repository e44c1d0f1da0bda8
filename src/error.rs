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

use thiserror::Error;

/// Error represents the various errors which can come up while parsing
/// command-line flags and their values.
#[derive(Debug, Error)]
pub enum Error {
    /// A token could not be decoded as an element of the given kind. The flag
    /// name is filled in once the error reaches the owning `FlagSet`.
    #[error("{}", describe_bad_value(.kind, .token, .flag))]
    BadValue {
        /// The element kind we were trying to decode (e.g. "bool").
        kind: &'static str,
        /// The offending token, exactly as it was given to the decoder.
        token: String,
        /// The name of the flag the token was destined for, if known.
        flag: Option<String>,
    },
    /// A flag's value couldn't be modified, because its binding was
    /// borrowed elsewhere at the time.
    #[error("Flag value is borrowed elsewhere: {0}")]
    BindingInUse(#[from] std::cell::BorrowMutError),
    /// A flag with this name or shorthand has already been registered.
    #[error("Flag '{0}' is already defined")]
    DuplicateFlag(String),
    /// The user asked for usage information with -h or --help.
    #[error("Help requested")]
    HelpRequested,
    /// A flag was provided, but applying its value failed.
    #[error("Invalid argument '{value}' for flag '{flag}': {cause}")]
    InvalidFlagValue {
        /// The name of the flag.
        flag: String,
        /// The raw value which was rejected.
        value: String,
        /// The underlying error.
        #[source]
        cause: Box<Error>,
    },
    /// An I/O error, generally encountered when writing usage text.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A flag which requires a value was provided without one.
    #[error("Flag '{0}' provided without any value")]
    MissingValue(String),
    /// No flag with this name has been registered.
    #[error("Flag '{0}' not found")]
    NotFound(String),
    /// An unrecognized flag was provided on the command line.
    #[error("Unknown flag '{0}'")]
    UnknownFlag(String),
    /// A quoted span in a list of strings was never closed.
    #[error("Unterminated quote in '{0}'")]
    UnterminatedQuote(String),
    /// A flag was looked up as one type, but it was registered as another.
    #[error("Flag '{name}' has type '{actual}', not '{expected}'")]
    WrongType {
        /// The name of the flag.
        name: String,
        /// The type tag the caller asked for.
        expected: &'static str,
        /// The type tag the flag was registered with.
        actual: &'static str,
    },
}

fn describe_bad_value(kind: &str, token: &str, flag: &Option<String>) -> String {
    match flag {
        None => format!("Invalid {} value '{}'", kind, token),
        Some(flag) => format!("Invalid {} value '{}' for flag '{}'", kind, token, flag),
    }
}

impl Error {
    /// Attach the given flag name to this error, if it is a decoding error
    /// which doesn't already know which flag it belongs to.
    pub fn with_flag(self, name: &str) -> Self {
        match self {
            Error::BadValue {
                kind,
                token,
                flag: None,
            } => Error::BadValue {
                kind,
                token,
                flag: Some(name.to_owned()),
            },
            e => e,
        }
    }
}

/// A Result type which uses this crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
