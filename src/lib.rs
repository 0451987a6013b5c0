// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Greeter-Echo
//!
//! The library behind the `greeter-echo` command. It models the arguments a
//! process was started with and renders the program's three-part output:
//!
//! 1. a greeting that embeds the argument list,
//! 2. the version of this library,
//! 3. one `Arg <index>: <value>` line per argument.
//!
//! ```
//! use greeter::{report::Report, ArgumentList, VERSION};
//!
//! let args: ArgumentList = ["a", "b"].into_iter().collect();
//! let output = Report::new(&args, VERSION).to_string();
//!
//! assert!(output.starts_with("Hello from Python! Args: ['a', 'b']\n"));
//! assert!(output.ends_with("Arg 0: a\nArg 1: b\n"));
//! ```

use std::ffi::OsString;
use std::fmt;
use std::ops::Index;
use std::slice;

pub mod display;
pub mod report;

/// Version of this library, reported on the `Requests version:` line.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The ordered arguments a process was invoked with, excluding the program
/// name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentList {
    args: Vec<String>,
}

impl ArgumentList {
    /// Builds a list from OS arguments. Text that is not valid UTF-8 is
    /// converted lossily.
    pub fn from_os<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        args.into_iter()
            .map(|a| a.into().to_string_lossy().into_owned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.args.iter()
    }
}

impl From<Vec<String>> for ArgumentList {
    fn from(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl<S: Into<String>> FromIterator<S> for ArgumentList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            args: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for ArgumentList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.args[index]
    }
}

impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", display::List(self))
    }
}
