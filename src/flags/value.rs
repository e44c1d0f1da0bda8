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
use crate::flags::element::Element;
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Value is the handle a `FlagSet` holds for each registered flag. Its
/// `Display` implementation renders the current value in the same textual
/// form `set` accepts.
pub trait Value: fmt::Display {
    /// Apply one occurrence of this flag, with the given raw value.
    fn set(&mut self, raw: &str) -> Result<()>;

    /// A fixed tag identifying this value's type, e.g. "boolSlice".
    fn type_name(&self) -> &'static str;

    /// Whether or not this value has been explicitly set (by `set` or any
    /// other mutator) since it was created.
    fn is_changed(&self) -> bool;

    /// The value to use when this flag appears without any value at all
    /// (e.g. "--verbose"). If None, such an occurrence is an error.
    fn implicit_value(&self) -> Option<&'static str> {
        None
    }

    /// Whether this value is slice-valued, i.e. `as_slice_value_mut` returns
    /// Some.
    fn is_slice(&self) -> bool {
        false
    }

    /// Access this value's slice capability, if it is slice-valued.
    fn as_slice_value_mut(&mut self) -> Option<&mut dyn SliceValue> {
        None
    }

    /// Access this value's concrete type, for typed lookups.
    fn as_any(&self) -> &dyn Any;
}

/// SliceValue is the additional capability of slice-valued flags: their
/// contents can be overwritten or extended directly, outside of the normal
/// parsing path.
pub trait SliceValue {
    /// Decode each of the given (already split) tokens, and overwrite the
    /// current contents with the result.
    fn replace(&mut self, tokens: &[&str]) -> Result<()>;

    /// Decode one token and add it to the end of the current contents.
    fn append(&mut self, token: &str) -> Result<()>;

    /// Return a copy of the current contents, each element encoded as text.
    fn get_slice(&self) -> Vec<String>;
}

/// A single-valued flag bound to a caller-owned variable. Each `set`
/// overwrites the previous value.
pub struct ScalarValue<T: Element + fmt::Display> {
    target: Rc<RefCell<T>>,
    changed: bool,
}

impl<T: Element + fmt::Display> ScalarValue<T> {
    /// Bind a new value to the given target, which is initialized with the
    /// given default.
    ///
    /// # Panics
    ///
    /// Panics if the target is currently borrowed.
    pub fn new(target: Rc<RefCell<T>>, default_value: T) -> Self {
        *target.borrow_mut() = default_value;
        ScalarValue {
            target: target,
            changed: false,
        }
    }

    /// Return a copy of the current value.
    pub fn get(&self) -> T {
        self.target.borrow().clone()
    }
}

impl<T: Element + fmt::Display> fmt::Display for ScalarValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target.borrow())
    }
}

impl<T: Element + fmt::Display> Value for ScalarValue<T> {
    fn set(&mut self, raw: &str) -> Result<()> {
        let value = T::decode(raw)?;
        *self.target.try_borrow_mut()? = value;
        self.changed = true;
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        T::KIND
    }

    fn is_changed(&self) -> bool {
        self.changed
    }

    fn implicit_value(&self) -> Option<&'static str> {
        T::IMPLICIT
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
