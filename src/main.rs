// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::env;
use std::ffi::OsString;
use std::io;

use anyhow::Result;
use clap::Parser;

use greeter::report::Report;
use greeter::{ArgumentList, VERSION};

/// Print a greeting, the library version, and each argument with its index.
///
/// Every argument is treated as data, including ones that look like flags.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_PKG_NAME"))]
#[command(
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct App {
    /// arguments to echo back
    #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

/// Puts `--` right after the program name so clap hands every user
/// argument, including a literal `--`, to [App::args].
fn as_values<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let mut escaped: Vec<OsString> = argv.next().into_iter().collect();
    escaped.push(OsString::from("--"));
    escaped.extend(argv);
    escaped
}

fn main() -> Result<()> {
    let app = App::parse_from(as_values(env::args_os()));
    let args = ArgumentList::from_os(app.args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Report::new(&args, VERSION).write_to(&mut out)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(argv: &[&str]) -> Vec<OsString> {
        App::try_parse_from(as_values(argv.iter().copied()))
            .expect("parse")
            .args
    }

    #[test]
    fn test_flags_are_data() {
        assert_eq!(
            vec!["--help", "-V", "--version", "-x"],
            parse(&["greeter-echo", "--help", "-V", "--version", "-x"])
        );
    }

    #[test]
    fn test_no_args() {
        assert!(parse(&["greeter-echo"]).is_empty());
    }

    #[test]
    fn test_hyphen_values_after_positionals() {
        assert_eq!(
            vec!["a", "-b", "--c", "d"],
            parse(&["greeter-echo", "a", "-b", "--c", "d"])
        );
    }

    #[test]
    fn test_double_dash_is_data() {
        assert_eq!(vec!["--"], parse(&["greeter-echo", "--"]));
        assert_eq!(vec!["--", "x"], parse(&["greeter-echo", "--", "x"]));
        assert_eq!(vec!["--", "--"], parse(&["greeter-echo", "--", "--"]));
        assert_eq!(vec!["a", "--", "b"], parse(&["greeter-echo", "a", "--", "b"]));
    }
}
