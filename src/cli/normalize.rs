//! Go `flag`-style argument normalization.
//!
//! Go programs accept long options with one dash (`-keyName demo`,
//! `-keyName=demo`). clap would read those as clusters of short flags, so any
//! single-dash argument whose name matches a known long option is rewritten to
//! the double-dash form before parsing.
//!
//! The argument following a value-taking option is its value and is never
//! rewritten, even when it looks like a flag (`-keyName -help`). Rewriting
//! stops at a bare `--` and at the first non-flag argument, where Go stops
//! parsing. Non-UTF-8 arguments are left alone.

use super::{Cli, LongOption};
use std::ffi::OsString;

/// Rewrite single-dash long options into their `--` form.
///
/// The first item is the binary name and is never rewritten.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    normalize_with(args, &Cli::long_options())
}

fn normalize_with<I, T>(args: I, known: &[LongOption]) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut expect_value = false;

    for (idx, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if idx == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if s == "--" || !s.starts_with('-') || s == "-" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        match lookup_long(s, known) {
            Some((opt, has_inline_value)) => {
                expect_value = opt.takes_value && !has_inline_value;
                if s.starts_with("--") {
                    out.push(arg);
                } else {
                    out.push(OsString::from(format!("-{}", s)));
                }
            }
            None => out.push(arg),
        }
    }

    out
}

/// Find the known long option named by `-name`, `--name`, or either form with
/// `=value`. Also reports whether the value was given inline.
fn lookup_long<'a>(arg: &str, known: &'a [LongOption]) -> Option<(&'a LongOption, bool)> {
    let rest = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    let (name, has_inline_value) = match rest.split_once('=') {
        Some((name, _)) => (name, true),
        None => (rest, false),
    };
    // Single letters stay short flags (`-h`, `-V`).
    if name.chars().count() < 2 {
        return None;
    }
    known
        .iter()
        .find(|k| k.name == name)
        .map(|k| (k, has_inline_value))
}
