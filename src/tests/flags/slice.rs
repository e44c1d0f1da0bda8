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
use crate::flags::slice::*;
use crate::flags::value::{SliceValue, Value};
use std::rc::Rc;

fn new_container(default_value: &[bool]) -> (Binding<bool>, SliceContainer<bool>) {
    let target = new_binding();
    let container = SliceContainer::new(target.clone(), default_value);
    (target, container)
}

#[test]
fn test_default_preserved() {
    let (target, container) = new_container(&[false, true]);
    assert_eq!(vec![false, true], container.values());
    assert_eq!(vec![false, true], *target.borrow());
    assert!(!container.is_changed());
}

#[test]
fn test_new_overwrites_binding() {
    let target = new_binding();
    target.borrow_mut().push(true);
    let container = SliceContainer::new(target.clone(), &[]);
    assert!(container.values().is_empty());
    assert!(target.borrow().is_empty());
}

#[test]
fn test_first_set_replaces_default() {
    let (target, mut container) = new_container(&[false, true]);
    container.set("FALSE,1").unwrap();
    assert_eq!(vec![false, true], container.values());
    assert!(container.is_changed());

    let (_, mut container) = new_container(&[false, true]);
    container.set("T").unwrap();
    assert_eq!(vec![true], container.values());
    assert_eq!(vec![false, true], *target.borrow());
}

#[test]
fn test_first_set_with_empty_list() {
    let (_, mut container) = new_container(&[true]);
    container.set("").unwrap();
    assert!(container.values().is_empty());
    assert!(container.is_changed());
}

#[test]
fn test_repeated_set_appends() {
    let (target, mut container) = new_container(&[]);
    container.set("T,F").unwrap();
    container.set("T").unwrap();
    assert_eq!(vec![true, false, true], container.values());
    assert_eq!(vec![true, false, true], *target.borrow());
}

#[test]
fn test_malformed_set_is_atomic() {
    let (_, mut container) = new_container(&[]);
    container.set("false").unwrap();
    match container.set("true,bogus") {
        Err(Error::BadValue { token, .. }) => assert_eq!("bogus", token),
        r => panic!("Expected a decoding error, got {:?}", r),
    }
    assert_eq!(vec![false], container.values());
}

#[test]
fn test_malformed_first_set_leaves_default() {
    let (_, mut container) = new_container(&[true, true]);
    assert!(container.set("f,maybe").is_err());
    assert_eq!(vec![true, true], container.values());
    assert!(!container.is_changed());

    // Since the failed set didn't count, the next one still replaces.
    container.set("f").unwrap();
    assert_eq!(vec![false], container.values());
}

#[test]
fn test_replace_discards_everything() {
    let (target, mut container) = new_container(&[true]);
    container.set("true").unwrap();
    container.set("false").unwrap();
    container.replace(&["false"]).unwrap();
    assert_eq!(vec![false], *target.borrow());

    container.replace(&["1", "1"]).unwrap();
    assert_eq!(vec![true, true], container.values());
}

#[test]
fn test_replace_marks_changed() {
    let (_, mut container) = new_container(&[true]);
    container.replace(&["f"]).unwrap();
    assert!(container.is_changed());

    // Now that we've been set, a set appends.
    container.set("t").unwrap();
    assert_eq!(vec![false, true], container.values());
}

#[test]
fn test_malformed_replace_is_atomic() {
    let (_, mut container) = new_container(&[true, false]);
    assert!(container.replace(&["true", "nope"]).is_err());
    assert_eq!(vec![true, false], container.values());
    assert!(!container.is_changed());
}

#[test]
fn test_append_keeps_default() {
    let (_, mut container) = new_container(&[true]);
    container.append("F").unwrap();
    assert_eq!(vec![true, false], container.values());
    assert!(container.is_changed());

    container.set("1,0").unwrap();
    assert_eq!(vec![true, false, true, false], container.values());

    assert!(container.append("x").is_err());
    assert_eq!(4, container.values().len());
}

#[test]
fn test_get_slice_is_a_copy() {
    let (_, mut container) = new_container(&[true, false]);
    let before = container.get_slice();
    let typed_before = container.values();
    container.set("0,0,0").unwrap();
    assert_eq!(vec!["true", "false"], before);
    assert_eq!(vec![true, false], typed_before);
    assert_eq!(vec!["false", "false", "false"], container.get_slice());
}

#[test]
fn test_to_string_and_type_name() {
    let (_, mut container) = new_container(&[]);
    assert_eq!("", container.to_string());
    container.set("1,F,TRUE,0").unwrap();
    assert_eq!("true,false,true,false", container.to_string());
    assert_eq!("boolSlice", container.type_name());
}

#[test]
fn test_to_string_round_trips_through_set() {
    let (_, mut original) = new_container(&[]);
    original.set(r#""0, False,  T,false  , true,F""#).unwrap();

    let (_, mut copy) = new_container(&[true]);
    copy.set(&original.to_string()).unwrap();
    assert_eq!(original.values(), copy.values());

    let strings = new_binding::<String>();
    let mut strings = SliceContainer::new(strings, &[]);
    strings.set(r#"a,"b,c", d "#).unwrap();
    let mut string_copy = SliceContainer::<String>::new(new_binding(), &[]);
    string_copy.set(&strings.to_string()).unwrap();
    assert_eq!(vec!["a", "b,c", "d"], string_copy.values());
}

#[test]
fn test_slice_capability() {
    let (_, mut container) = new_container(&[]);
    let value: &mut dyn Value = &mut container;
    assert!(value.is_slice());
    value
        .as_slice_value_mut()
        .unwrap()
        .replace(&["true"])
        .unwrap();
    assert_eq!(vec!["true"], value.as_slice_value_mut().unwrap().get_slice());
}

#[test]
fn test_binding_handle() {
    let (target, mut container) = new_container(&[true]);
    let binding = container.binding();
    assert!(Rc::ptr_eq(&target, &binding));
    container.set("0").unwrap();
    assert_eq!(vec![false], *binding.borrow());
}

#[test]
fn test_mutation_while_borrowed_is_atomic() {
    let (target, mut container) = new_container(&[true]);
    {
        let held = target.borrow();
        assert!(matches!(container.set("0"), Err(Error::BindingInUse(_))));
        assert!(matches!(
            container.replace(&["0"]),
            Err(Error::BindingInUse(_))
        ));
        assert!(matches!(
            container.append("0"),
            Err(Error::BindingInUse(_))
        ));
        assert_eq!(vec![true], *held);
    }
    assert!(!container.is_changed());

    container.append("0").unwrap();
    assert_eq!(vec![true, false], *target.borrow());
}
