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
use crate::flags::help;
use crate::flags::slice::{self, Binding, SliceContainer};
use crate::flags::value::{ScalarValue, Value};
use log::{debug, error};
use std::cell::RefCell;
use std::fmt::Display;
use std::io::Write;
use std::process;
use std::rc::Rc;

/// The exit code used by `ErrorHandling::ExitOnError` after a parse error.
pub(crate) const EXIT_USAGE: i32 = 2;
/// The exit code used by `ErrorHandling::ExitOnError` after printing help.
pub(crate) const EXIT_SUCCESS: i32 = 0;

/// ErrorHandling defines what `FlagSet::parse` does when parsing fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorHandling {
    /// Return the error to the caller.
    ContinueOnError,
    /// Print the error and usage information, and then exit the process.
    ExitOnError,
    /// Panic with the error's message.
    PanicOnError,
}

/// Flag is a single registered flag: its name and help text, and the value
/// which occurrences of it are applied to.
pub struct Flag {
    name: String,
    shorthand: Option<char>,
    usage: String,
    default_value: String,
    value: Box<dyn Value>,
}

impl Flag {
    /// Returns this flag's full name (i.e., not the shorthand).
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns this flag's one-character shorthand, if it has one.
    pub fn get_shorthand(&self) -> Option<char> {
        self.shorthand
    }

    /// Returns the human-readable help text for this flag.
    pub fn get_usage(&self) -> &str {
        self.usage.as_str()
    }

    /// Returns this flag's default value, in textual form, as it was when
    /// the flag was registered.
    pub fn get_default_value(&self) -> &str {
        self.default_value.as_str()
    }

    /// Whether this flag's value has been explicitly set.
    pub fn is_changed(&self) -> bool {
        self.value.is_changed()
    }

    /// Returns this flag's value.
    pub fn value(&self) -> &dyn Value {
        self.value.as_ref()
    }

    /// Returns this flag's value, for direct modification.
    pub fn value_mut(&mut self) -> &mut dyn Value {
        self.value.as_mut()
    }
}

/// FlagSet is a collection of flags, which are parsed together from a single
/// list of command-line arguments.
pub struct FlagSet {
    name: String,
    error_handling: ErrorHandling,
    flags: Vec<Flag>,
    args: Vec<String>,
    parsed: bool,
    output: Option<Box<dyn Write>>,
}

impl FlagSet {
    /// Construct a new, empty FlagSet. The name is used in usage text.
    pub fn new(name: &str, error_handling: ErrorHandling) -> FlagSet {
        FlagSet {
            name: name.to_owned(),
            error_handling: error_handling,
            flags: vec![],
            args: vec![],
            parsed: false,
            output: None,
        }
    }

    /// Returns this FlagSet's name.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Set where usage text and error messages are written when parsing
    /// fails. By default, nothing is written unless the error handling mode
    /// is `ExitOnError`, in which case standard error is used.
    pub fn set_output(&mut self, output: Box<dyn Write>) {
        self.output = Some(output);
    }

    /// Make sure neither the given name nor shorthand are taken yet. This is
    /// checked before a value is constructed, since constructing one writes
    /// the default into the caller's variable.
    fn check_unique(&self, name: &str, shorthand: Option<char>) -> Result<()> {
        if self.find_flag(name).is_some() {
            return Err(Error::DuplicateFlag(name.to_owned()));
        }
        if let Some(sn) = shorthand {
            if self.find_shorthand(sn).is_some() {
                return Err(Error::DuplicateFlag(sn.to_string()));
            }
        }
        Ok(())
    }

    /// Register a new flag with an arbitrary value implementation. The flag's
    /// default value is recorded as the value's current textual form.
    pub fn add_flag(
        &mut self,
        name: &str,
        shorthand: Option<char>,
        usage: &str,
        value: Box<dyn Value>,
    ) -> Result<()> {
        self.check_unique(name, shorthand)?;
        debug!(
            "Registering {} flag '{}' (default '{}')",
            value.type_name(),
            name,
            value
        );
        self.flags.push(Flag {
            name: name.to_owned(),
            shorthand: shorthand,
            usage: usage.to_owned(),
            default_value: value.to_string(),
            value: value,
        });
        Ok(())
    }

    /// Register a slice-valued flag, which writes into the given binding. The
    /// binding is immediately overwritten with the default values.
    pub fn slice_var<T: Element>(
        &mut self,
        target: Binding<T>,
        name: &str,
        shorthand: Option<char>,
        default_value: &[T],
        usage: &str,
    ) -> Result<()> {
        self.check_unique(name, shorthand)?;
        self.add_flag(
            name,
            shorthand,
            usage,
            Box::new(SliceContainer::new(target, default_value)),
        )
    }

    /// Register a slice-valued flag, returning a new binding it writes into.
    pub fn slice<T: Element>(
        &mut self,
        name: &str,
        shorthand: Option<char>,
        default_value: &[T],
        usage: &str,
    ) -> Result<Binding<T>> {
        let target = slice::new_binding();
        self.slice_var(target.clone(), name, shorthand, default_value, usage)?;
        Ok(target)
    }

    /// Register a list-of-booleans flag, which writes into the given binding.
    pub fn bool_slice_var(
        &mut self,
        target: Binding<bool>,
        name: &str,
        shorthand: Option<char>,
        default_value: &[bool],
        usage: &str,
    ) -> Result<()> {
        self.slice_var(target, name, shorthand, default_value, usage)
    }

    /// Register a list-of-booleans flag, returning a new binding it writes
    /// into.
    pub fn bool_slice(
        &mut self,
        name: &str,
        shorthand: Option<char>,
        default_value: &[bool],
        usage: &str,
    ) -> Result<Binding<bool>> {
        self.slice(name, shorthand, default_value, usage)
    }

    /// Register a single-valued flag, which writes into the given variable.
    pub fn scalar_var<T: Element + Display>(
        &mut self,
        target: Rc<RefCell<T>>,
        name: &str,
        shorthand: Option<char>,
        default_value: T,
        usage: &str,
    ) -> Result<()> {
        self.check_unique(name, shorthand)?;
        self.add_flag(
            name,
            shorthand,
            usage,
            Box::new(ScalarValue::new(target, default_value)),
        )
    }

    /// Register a single-valued flag, returning a new variable it writes
    /// into.
    pub fn scalar<T: Element + Display>(
        &mut self,
        name: &str,
        shorthand: Option<char>,
        default_value: T,
        usage: &str,
    ) -> Result<Rc<RefCell<T>>> {
        let target = Rc::new(RefCell::new(default_value.clone()));
        self.scalar_var(target.clone(), name, shorthand, default_value, usage)?;
        Ok(target)
    }

    fn find_flag(&self, name: &str) -> Option<usize> {
        self.flags.iter().position(|f| f.name == name)
    }

    fn find_shorthand(&self, shorthand: char) -> Option<usize> {
        self.flags
            .iter()
            .position(|f| f.shorthand == Some(shorthand))
    }

    /// Look up a flag by its full name.
    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.find_flag(name).map(|idx| &self.flags[idx])
    }

    /// Look up a flag by its full name, for modification.
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Flag> {
        match self.find_flag(name) {
            None => None,
            Some(idx) => Some(&mut self.flags[idx]),
        }
    }

    /// Return a copy of the current contents of the named slice-valued flag.
    /// This fails if there is no such flag, or if it holds some other type.
    pub fn get_slice<T: Element>(&self, name: &str) -> Result<Vec<T>> {
        let flag = self
            .lookup(name)
            .ok_or_else(|| Error::NotFound(name.to_owned()))?;
        match flag.value().as_any().downcast_ref::<SliceContainer<T>>() {
            None => Err(Error::WrongType {
                name: name.to_owned(),
                expected: T::SLICE_KIND,
                actual: flag.value().type_name(),
            }),
            Some(container) => Ok(container.values()),
        }
    }

    /// Return a copy of the current contents of the named list-of-booleans
    /// flag.
    pub fn get_bool_slice(&self, name: &str) -> Result<Vec<bool>> {
        self.get_slice(name)
    }

    /// Return the current value of the named single-valued flag.
    pub fn get_scalar<T: Element + Display>(&self, name: &str) -> Result<T> {
        let flag = self
            .lookup(name)
            .ok_or_else(|| Error::NotFound(name.to_owned()))?;
        match flag.value().as_any().downcast_ref::<ScalarValue<T>>() {
            None => Err(Error::WrongType {
                name: name.to_owned(),
                expected: T::KIND,
                actual: flag.value().type_name(),
            }),
            Some(value) => Ok(value.get()),
        }
    }

    fn set_flag(&mut self, idx: usize, raw: &str) -> Result<()> {
        let flag = &mut self.flags[idx];
        debug!("Setting flag '{}' to '{}'", flag.name, raw);
        flag.value.set(raw).map_err(|e| Error::InvalidFlagValue {
            flag: flag.name.clone(),
            value: raw.to_owned(),
            cause: Box::new(e.with_flag(&flag.name)),
        })
    }

    /// Apply one occurrence of the named flag with the given raw value, just
    /// as if it had appeared on the command line.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<()> {
        let idx = self
            .find_flag(name)
            .ok_or_else(|| Error::NotFound(name.to_owned()))?;
        self.set_flag(idx, raw)
    }

    /// Whether the named flag has been explicitly set. Unknown flags are
    /// never changed.
    pub fn changed(&self, name: &str) -> bool {
        self.lookup(name).map_or(false, |f| f.is_changed())
    }

    /// Call the given function for every flag, in registration order.
    pub fn visit_all<F: FnMut(&mut Flag)>(&mut self, mut f: F) {
        for flag in self.flags.iter_mut() {
            f(flag);
        }
    }

    /// Call the given function for every flag which has been explicitly set,
    /// in registration order.
    pub fn visit<F: FnMut(&mut Flag)>(&mut self, mut f: F) {
        for flag in self.flags.iter_mut().filter(|f| f.is_changed()) {
            f(flag);
        }
    }

    /// Returns an iterator over every registered flag, in registration order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Flag> {
        self.flags.iter()
    }

    /// The positional (non-flag) arguments left over after parsing.
    pub fn args(&self) -> &[String] {
        self.args.as_slice()
    }

    /// Whether `parse` has been called.
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// Render the usage text for every registered flag, one per line.
    pub fn flag_usages(&self) -> String {
        help::flag_usages(&self.flags)
    }

    /// Write this FlagSet's full usage text to the given writer.
    pub fn print_defaults<W: Write>(&self, f: &mut W) -> Result<()> {
        help::print_usage(f, &self.name, &self.flags)
    }

    /// Figure out the value for the flag at the given index, when no value
    /// was attached to it with "=". Returns None if none could be found.
    fn take_detached_value<'a, I: Iterator<Item = &'a str>>(
        &self,
        idx: usize,
        args: &mut I,
    ) -> Option<String> {
        match self.flags[idx].value.implicit_value() {
            Some(v) => Some(v.to_owned()),
            None => args.next().map(|v| v.to_owned()),
        }
    }

    /// Parse one "--name" or "--name=value" argument (without the leading
    /// hyphens).
    fn parse_long<'a, I: Iterator<Item = &'a str>>(
        &mut self,
        body: &str,
        args: &mut I,
    ) -> Result<()> {
        let (name, value) = match body.find('=') {
            None => (body, None),
            Some(eq) => (&body[..eq], Some(&body[eq + 1..])),
        };
        if name.is_empty() || name.starts_with('-') {
            return Err(Error::UnknownFlag(format!("--{}", body)));
        }

        let idx = match self.find_flag(name) {
            Some(idx) => idx,
            None if name == "help" => return Err(Error::HelpRequested),
            None => return Err(Error::UnknownFlag(name.to_owned())),
        };
        let value = match value {
            Some(v) => v.to_owned(),
            None => self
                .take_detached_value(idx, args)
                .ok_or_else(|| Error::MissingValue(name.to_owned()))?,
        };
        self.set_flag(idx, &value)
    }

    /// Parse one "-abc" style argument (without the leading hyphen). Each
    /// character is a shorthand; the last one (or one which takes a value)
    /// may have a value attached with "=" or directly after it.
    fn parse_shorthands<'a, I: Iterator<Item = &'a str>>(
        &mut self,
        body: &str,
        args: &mut I,
    ) -> Result<()> {
        let mut rest = body;
        while let Some(c) = rest.chars().next() {
            rest = &rest[c.len_utf8()..];
            let idx = match self.find_shorthand(c) {
                Some(idx) => idx,
                None if c == 'h' => return Err(Error::HelpRequested),
                None => return Err(Error::UnknownFlag(c.to_string())),
            };

            let value = if rest.starts_with('=') {
                let v = rest[1..].to_owned();
                rest = "";
                v
            } else if let Some(v) = self.flags[idx].value.implicit_value() {
                v.to_owned()
            } else if !rest.is_empty() {
                let v = rest.to_owned();
                rest = "";
                v
            } else {
                self.take_detached_value(idx, args)
                    .ok_or_else(|| Error::MissingValue(self.flags[idx].name.clone()))?
            };
            self.set_flag(idx, &value)?;
        }
        Ok(())
    }

    fn parse_args<'a, I: Iterator<Item = &'a str>>(&mut self, mut args: I) -> Result<()> {
        while let Some(arg) = args.next() {
            if arg == "--" {
                self.args.extend(args.by_ref().map(|a| a.to_owned()));
                break;
            }

            if arg.len() < 2 || !arg.starts_with('-') {
                self.args.push(arg.to_owned());
            } else if arg.starts_with("--") {
                self.parse_long(&arg[2..], &mut args)?;
            } else {
                self.parse_shorthands(&arg[1..], &mut args)?;
            }
        }
        Ok(())
    }

    fn report_failure(&mut self, e: &Error, default_to_stderr: bool) -> Result<()> {
        let mut output = self.output.take();
        let result = match output.as_mut() {
            Some(f) => self.write_failure(f, e),
            None => match default_to_stderr {
                false => Ok(()),
                true => self.write_failure(&mut std::io::stderr(), e),
            },
        };
        self.output = output;
        result
    }

    fn write_failure<W: Write + ?Sized>(&self, f: &mut W, e: &Error) -> Result<()> {
        match e {
            Error::HelpRequested => {}
            e => writeln!(f, "{}", e)?,
        }
        let mut usage = vec![];
        help::print_usage(&mut usage, &self.name, &self.flags)?;
        f.write_all(&usage)?;
        Ok(())
    }

    /// Parse the given command-line arguments (not including the program
    /// name). Flag occurrences are applied to their values in order, and any
    /// positional arguments are collected, available via `args`.
    ///
    /// What happens if an error is encountered depends on this FlagSet's
    /// `ErrorHandling` mode.
    pub fn parse<S: AsRef<str>>(&mut self, arguments: &[S]) -> Result<()> {
        self.parsed = true;
        let e = match self.parse_args(arguments.iter().map(|a| a.as_ref())) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        match self.error_handling {
            ErrorHandling::ContinueOnError => {
                if let Err(report_err) = self.report_failure(&e, false) {
                    error!("Failed to write usage information: {}", report_err);
                }
                Err(e)
            }
            ErrorHandling::ExitOnError => {
                if let Err(report_err) = self.report_failure(&e, true) {
                    error!("Failed to write usage information: {}", report_err);
                }
                match e {
                    Error::HelpRequested => process::exit(EXIT_SUCCESS),
                    e => {
                        error!("{}", e);
                        process::exit(EXIT_USAGE)
                    }
                }
            }
            ErrorHandling::PanicOnError => panic!("{}", e),
        }
    }
}
