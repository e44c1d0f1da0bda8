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
use crate::flags::element::{self, Element};
use crate::flags::value::{SliceValue, Value};
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A Binding is the caller's view of a slice-valued flag: a shared handle to
/// the list of elements the flag's container writes into.
pub type Binding<T> = Rc<RefCell<Vec<T>>>;

/// Construct a new, empty Binding.
pub fn new_binding<T>() -> Binding<T> {
    Rc::new(RefCell::new(Vec::new()))
}

/// SliceContainer is the value behind a slice-valued flag, for any element
/// type.
///
/// The first time the flag is set, whatever it held before (its default) is
/// discarded. Every later occurrence of the flag appends to what is already
/// there, so "--f=a,b --f=c" results in [a, b, c]. Every mutator either
/// succeeds completely, or leaves the contents untouched. Mutating while the
/// caller holds a borrow of the binding fails with `Error::BindingInUse`.
pub struct SliceContainer<T: Element> {
    target: Binding<T>,
    changed: bool,
}

impl<T: Element> SliceContainer<T> {
    /// Wrap the given binding, overwriting whatever it contains with the
    /// given default values.
    ///
    /// # Panics
    ///
    /// Panics if the binding is currently borrowed.
    pub fn new(target: Binding<T>, default_value: &[T]) -> Self {
        *target.borrow_mut() = default_value.to_vec();
        SliceContainer {
            target: target,
            changed: false,
        }
    }

    /// Return a copy of the current contents. Later changes to this container
    /// are not reflected in the returned copy.
    pub fn values(&self) -> Vec<T> {
        self.target.borrow().clone()
    }

    /// Return a new handle to the binding this container writes into.
    pub fn binding(&self) -> Binding<T> {
        self.target.clone()
    }
}

impl<T: Element> fmt::Display for SliceContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", element::encode_list(&self.target.borrow()))
    }
}

impl<T: Element> Value for SliceContainer<T> {
    fn set(&mut self, raw: &str) -> Result<()> {
        let mut values: Vec<T> = element::decode_list(raw)?;
        let mut target = self.target.try_borrow_mut()?;
        if self.changed {
            target.append(&mut values);
        } else {
            *target = values;
            self.changed = true;
        }
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        T::SLICE_KIND
    }

    fn is_changed(&self) -> bool {
        self.changed
    }

    fn is_slice(&self) -> bool {
        true
    }

    fn as_slice_value_mut(&mut self) -> Option<&mut dyn SliceValue> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Element> SliceValue for SliceContainer<T> {
    fn replace(&mut self, tokens: &[&str]) -> Result<()> {
        let values: Vec<T> = element::decode_tokens(tokens.iter().cloned())?;
        *self.target.try_borrow_mut()? = values;
        self.changed = true;
        Ok(())
    }

    fn append(&mut self, token: &str) -> Result<()> {
        let value = T::decode(token)?;
        self.target.try_borrow_mut()?.push(value);
        self.changed = true;
        Ok(())
    }

    fn get_slice(&self) -> Vec<String> {
        self.target.borrow().iter().map(T::encode).collect()
    }
}
