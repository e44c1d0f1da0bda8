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

/// fn_instrumentation provides utilities for instrumenting function calls
/// (e.g. `FlagSet::visit_all` callbacks) during unit tests.
pub mod fn_instrumentation;
/// logging provides a logger suitable for unit tests.
pub mod logging;
