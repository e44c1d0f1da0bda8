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

/// element defines how individual list elements are decoded from and encoded
/// to text.
pub mod element;
/// flag_set binds values to flag names and parses them from argument lists.
pub mod flag_set;
/// slice defines the generic slice value container.
pub mod slice;
/// split turns one raw flag value into a list of tokens.
pub mod split;
/// value defines the polymorphic value handle traits, and scalar values.
pub mod value;

mod help;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use self::element::Element;
pub use self::flag_set::{ErrorHandling, Flag, FlagSet};
pub use self::slice::{Binding, SliceContainer};
pub use self::split::Quoting;
pub use self::value::{ScalarValue, SliceValue, Value};
