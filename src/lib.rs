//! A declarative parser for POSIX-style command line switches
//!
//! Declare the switches a program accepts, parse the command line, then read typed values back:
//! ```
//! use posix_args::{Declaration, Parser};
//!
//! let mut parser = Parser::new("enchilada", "A mix of argument types.");
//! let fast = parser.add(Declaration::<bool>::new("fast", "Run fast.").short('f'));
//! let mass = parser.add(Declaration::<f32>::new("mass", "The mass.").default_value(3.141));
//! let height = parser.add(Declaration::<i32>::new("height", "The height.").make_required());
//!
//! parser.parse(["enchilada", "-f", "--height=8", "file.txt"]).unwrap();
//!
//! assert_eq!(parser.value(fast), Ok(true));
//! assert_eq!(parser.value(mass), Ok(3.141));
//! assert_eq!(parser.value(height), Ok(8));
//! assert_eq!(parser.unlabeled(), ["file.txt"]);
//! ```
//!
//! # Syntax
//!
//! - `--name=value` sets the switch with long form `name`. Without `=value` the switch is only
//! marked present, which is enough for a `bool` switch and an error for every other type.
//! - `-abc` sets the switches with short forms `a`, `b` and `c`. A letter followed by `=` takes
//! the rest of the argument as its value, so `-abc=5` gives `5` to `c`.
//! - `--` on its own ends switch parsing. Everything after it is unlabeled.
//! - Everything else is an unlabeled argument, kept in the order it was given.
//!
//! Values are converted when they are read, so a badly typed switch that is never read never
//! causes an error.

mod cmdline;
mod descriptor;
mod error;
mod parser;
mod registry;
mod value;

pub use cmdline::split_command_line;
pub use descriptor::{Declaration, Descriptor, Requirement, Switch};
pub use error::{Error, RegistrationError};
pub use parser::help::{write_usage, HELP_LONG_FORM};
pub use parser::Parser;
pub use registry::Registry;
pub use value::{SwitchValue, Value, ValueKind};
