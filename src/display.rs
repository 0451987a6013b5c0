// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Renders argument text the way a Python list of strings prints,
//! e.g. `['a', "it's", 'tab\there']`.

use std::fmt::{Display, Formatter, Result, Write};

use unicode_general_category::{get_general_category, GeneralCategory};

/// A string rendered as a quoted literal.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quote. Backslashes, the active quote and non-printable characters
/// are escaped; everything else is written as-is.
pub struct Quoted<'a>(pub &'a str);

/// Characters in the Unicode "Other" and "Separator" categories are not
/// printable, except the ASCII space.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

impl Quoted<'_> {
    fn quote(&self) -> char {
        if self.0.contains('\'') && !self.0.contains('"') {
            '"'
        } else {
            '\''
        }
    }
}

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let quote = self.quote();
        f.write_char(quote)?;
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c == quote => {
                    f.write_char('\\')?;
                    f.write_char(c)?;
                }
                c if !is_printable(c) => match c as u32 {
                    cp @ 0..=0xff => write!(f, "\\x{cp:02x}")?,
                    cp @ 0x100..=0xffff => write!(f, "\\u{cp:04x}")?,
                    cp => write!(f, "\\U{cp:08x}")?,
                },
                c => f.write_char(c)?,
            }
        }
        f.write_char(quote)
    }
}

/// A sequence of strings rendered as a bracketed list of [Quoted] items
/// separated by `", "`.
pub struct List<'a, I>(pub &'a I);

impl<'a, I, S> Display for List<'a, I>
where
    &'a I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_char('[')?;
        for (i, s) in self.0.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Quoted(s.as_ref()).fmt(f)?;
        }
        f.write_char(']')
    }
}
