// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use greeter::VERSION;

/// The exact output expected for `args`, given the already rendered list
/// that appears on the greeting line.
pub fn expected_output(rendered: &str, args: &[&str]) -> String {
    let mut expected = format!("Hello from Python! Args: {rendered}\nRequests version: {VERSION}\n");
    for (i, arg) in args.iter().enumerate() {
        expected.push_str(&format!("Arg {i}: {arg}\n"));
    }
    expected
}

/// Collects the `Arg <i>: ...` lines of `output`.
pub fn arg_lines(output: &str) -> Vec<&str> {
    output.lines().filter(|l| l.starts_with("Arg ")).collect()
}
