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
use crate::flags::flag_set::Flag;
use std::io::Write;

/// Scalar default values which aren't worth mentioning in usage text.
const ZERO_DEFAULTS: &[&str] = &["", "0", "false"];

/// Returns the "(default ...)" suffix for the given flag, if its default is
/// worth printing. Slice defaults are bracketed, so an empty-looking value
/// can't be mistaken for a missing one.
fn default_suffix(flag: &Flag) -> Option<String> {
    let default_value = flag.get_default_value();
    match flag.value().is_slice() {
        false if ZERO_DEFAULTS.contains(&default_value) => None,
        false => Some(format!(" (default {})", default_value)),
        true if default_value.is_empty() => None,
        true => Some(format!(" (default [{}])", default_value)),
    }
}

/// The left-hand column for the given flag: its names, and its type unless
/// it can be given without a value.
fn flag_names(flag: &Flag) -> String {
    let mut names = match flag.get_shorthand() {
        None => format!("      --{}", flag.get_name()),
        Some(sn) => format!("  -{}, --{}", sn, flag.get_name()),
    };
    if flag.value().implicit_value().is_none() {
        names.push(' ');
        names.push_str(flag.value().type_name());
    }
    names
}

/// Render one line of usage text per flag, with the help text aligned.
pub(crate) fn flag_usages(flags: &[Flag]) -> String {
    let names: Vec<String> = flags.iter().map(flag_names).collect();
    let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);

    let mut usages = String::new();
    for (flag, names) in flags.iter().zip(names.iter()) {
        usages.push_str(&format!(
            "{:width$}   {}{}\n",
            names,
            flag.get_usage(),
            default_suffix(flag).unwrap_or_default(),
            width = width
        ));
    }
    usages
}

pub(crate) fn print_usage<W: Write + ?Sized>(
    f: &mut W,
    program: &str,
    flags: &[Flag],
) -> Result<()> {
    f.write_fmt(format_args!("Usage of {}:\n", program))?;
    f.write_all(flag_usages(flags).as_bytes())?;
    Ok(())
}
