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

use std::sync::Mutex;

/// This is a structure which records the calls made to an instrumented
/// function. Each call is recorded along with a label (for a flag visitor,
/// the name of the flag it was called with), so tests can check both how many
/// times and in what order the function was called. Because it has internal
/// synchronization, this can be done without retaining a mutable reference.
pub struct FnInstrumentation {
    calls: Mutex<Vec<String>>,
}

impl FnInstrumentation {
    /// Construct a new instrumentation state, with no calls recorded.
    pub fn new() -> FnInstrumentation {
        FnInstrumentation {
            calls: Mutex::new(vec![]),
        }
    }

    /// Record that the function being instrumented was called, with no
    /// particular label.
    pub fn record_call(&self) {
        self.record_labeled_call("");
    }

    /// Record that the function being instrumented was called, labeling the
    /// call with the given string.
    pub fn record_labeled_call(&self, label: &str) {
        let mut calls = self.calls.lock().unwrap();
        calls.push(label.to_owned());
    }

    /// Return the current number of calls recorded.
    pub fn get_call_count(&self) -> u64 {
        self.calls.lock().unwrap().len() as u64
    }

    /// Return the labels of every call recorded so far, in order.
    pub fn get_call_labels(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for FnInstrumentation {
    fn default() -> Self {
        FnInstrumentation::new()
    }
}
