// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::fmt::{self, Display, Formatter};
use std::io::Write;

use anyhow::Result;

use crate::display::List;
use crate::ArgumentList;

/// The complete output of one `greeter-echo` run.
///
/// ```text
/// Hello from Python! Args: ['a', 'b']
/// Requests version: 0.1.0
/// Arg 0: a
/// Arg 1: b
/// ```
#[derive(Debug)]
pub struct Report<'a> {
    args: &'a ArgumentList,
    version: &'a str,
}

impl<'a> Report<'a> {
    pub fn new(args: &'a ArgumentList, version: &'a str) -> Self {
        Self { args, version }
    }

    /// Writes every line of the report to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hello from Python! Args: {}", List(self.args))?;
        writeln!(f, "Requests version: {}", self.version)?;
        for (i, arg) in self.args.iter().enumerate() {
            writeln!(f, "Arg {i}: {arg}")?;
        }
        Ok(())
    }
}
