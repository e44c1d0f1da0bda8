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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! flaggy-slices implements slice-valued command-line flags: options whose
//! value is a list of typed elements (booleans, integers, strings, ...),
//! given as a comma-separated list and possibly split across several
//! occurrences of the same flag. A small `FlagSet` binds these values to
//! names and parses them out of a program's arguments.

/// error defines the error type shared by every part of this crate.
pub mod error;
/// flags contains the slice value containers, the codecs and splitter they
/// are built on, and the `FlagSet` which binds them to names.
pub mod flags;
/// testing provides utilities which are useful for unit testing code which
/// uses this crate.
#[cfg(feature = "testing")]
pub mod testing;

#[cfg(all(feature = "testing", test))]
mod tests;
