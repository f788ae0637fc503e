use super::Parser;
use crate::descriptor::{Declaration, Descriptor};
use crate::value::Value;
use itertools::Itertools;
use std::io::{self, Write};

/// Long form of the conventional help switch
pub const HELP_LONG_FORM: &str = "help";

const HELP_SHORT_FORM: char = 'h';

/// Declares `--help` (and `-h`, unless that letter is taken) if the program didn't declare its
/// own help switch
pub(super) fn ensure_help_switch(parser: &mut Parser) {
    if parser.has_long_form(HELP_LONG_FORM) {
        return;
    }

    let mut declaration = Declaration::<bool>::new(HELP_LONG_FORM, "Prints this help message.");
    if !parser.has_short_form(HELP_SHORT_FORM) {
        declaration = declaration.short(HELP_SHORT_FORM);
    }

    tracing::debug!(
        short = !parser.has_short_form(HELP_SHORT_FORM),
        "declaring help switch"
    );
    parser.add(declaration);
}

/// Returns whether the help switch is set after a parse.
///
/// A program-declared `help` switch only counts when it is a boolean.
pub(super) fn requested_help(parser: &Parser) -> bool {
    parser
        .descriptors()
        .find(|d| d.long_form() == Some(HELP_LONG_FORM))
        .map(|d| matches!(d.converted_value(), Ok(Value::Bool(true))))
        .unwrap_or(false)
}

pub fn write_usage(mut w: impl Write, parser: &Parser) -> io::Result<()> {
    writeln!(&mut w, "{}: {}", parser.program(), parser.description())?;
    writeln!(&mut w, "usage: {}", parser.program())?;

    for descriptor in parser.descriptors() {
        write_descriptor(&mut w, descriptor)?;
        writeln!(&mut w)?;
    }

    writeln!(&mut w)?;
    w.flush()
}

fn write_descriptor(mut w: impl Write, descriptor: &Descriptor) -> io::Result<()> {
    write!(&mut w, "    ")?;

    let forms = [
        descriptor.short_form().map(|c| format!("-{c}")),
        descriptor.long_form().map(|l| format!("--{l}")),
    ];
    write!(&mut w, "{}", forms.into_iter().flatten().join(", "))?;

    if descriptor.kind().requires_value() {
        write!(&mut w, "=<{}>", descriptor.kind())?;
    }

    write!(&mut w, "\n\t\t")?;

    if descriptor.is_required() {
        write!(&mut w, "[required] ")?;
    }

    write!(&mut w, "{}", descriptor.description())
}
