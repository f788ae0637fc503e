use crate::cmdline::split_command_line;
use crate::descriptor::{is_valid_short_form, Declaration, Descriptor, Requirement, Switch};
use crate::error::{Error, RegistrationError};
use crate::registry::Registry;
use crate::value::SwitchValue;
use std::io::{self, Write};

pub mod help;

// Switches are recognized until a bare `--` is seen, after which everything is unlabeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Switches,
    UnlabeledOnly,
}

/// A set of switch declarations, and the result of parsing a command line against them
#[derive(Debug, Clone)]
pub struct Parser {
    program: String,
    description: String,
    program_path: String,
    registry: Registry,
    auto_help: bool,
    help_requested: bool,
}

impl Parser {
    /// Creates a parser. `program` and `description` only show up in the usage text.
    pub fn new(program: &str, description: &str) -> Self {
        Parser {
            program: program.to_string(),
            description: description.to_string(),
            program_path: String::new(),
            registry: Registry::new(),
            auto_help: true,
            help_requested: false,
        }
    }

    /// Stops [`parse`](Parser::parse) from declaring a `--help` switch on its own
    pub fn without_help_switch(mut self) -> Self {
        self.auto_help = false;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The first argument of the latest parse, i.e. how the program was invoked
    pub fn program_path(&self) -> &str {
        &self.program_path
    }

    pub fn try_add<T: SwitchValue>(
        &mut self,
        declaration: Declaration<T>,
    ) -> Result<Switch<T>, RegistrationError> {
        self.registry.try_add(declaration)
    }

    /// Declares a switch.
    ///
    /// # Panics
    ///
    /// If the declaration has neither a long nor a short form, has a malformed form, or reuses a
    /// form that is already declared.
    pub fn add<T: SwitchValue>(&mut self, declaration: Declaration<T>) -> Switch<T> {
        self.try_add(declaration)
            .unwrap_or_else(|e| panic!("invalid switch declaration: {e}"))
    }

    /// Declares a switch from its parts. An empty `long` or a `None` short means no such form.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`add`](Parser::add).
    pub fn register<T: SwitchValue + Default>(
        &mut self,
        long: &str,
        description: &str,
        short: Option<char>,
        requirement: Requirement,
        default: T,
    ) -> Switch<T> {
        let mut declaration = Declaration::new(long, description)
            .requirement(requirement)
            .default_value(default);
        if let Some(letter) = short {
            declaration = declaration.short(letter);
        }
        self.add(declaration)
    }

    pub fn has_long_form(&self, long: &str) -> bool {
        self.registry.has_long_form(long)
    }

    pub fn has_short_form(&self, letter: char) -> bool {
        self.registry.has_short_form(letter)
    }

    /// Forgets the values and unlabeled arguments of the previous parse.
    ///
    /// [`parse`](Parser::parse) does this itself before it starts.
    pub fn clear_assignments(&mut self) {
        self.registry.clear_assignments();
        self.help_requested = false;
    }

    /// Parses `args` against the declared switches. The input is expected to be in the same
    /// format that [args()](std::env::args) returns (i.e. the name of the executable is first).
    ///
    /// Values from any previous parse are cleared first. On error, whatever was assigned before
    /// the failing argument stays visible until the next parse.
    pub fn parse<I, T>(&mut self, args: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut iter = args.into_iter().map(|s| s.into());
        let program_path = iter.next().ok_or(Error::InvalidParameters)?;

        if self.auto_help {
            help::ensure_help_switch(self);
        }

        self.clear_assignments();
        self.program_path = program_path;

        let mut scan = Scan::Switches;
        for arg in iter {
            scan = match scan {
                Scan::Switches => self.classify(arg)?,
                Scan::UnlabeledOnly => {
                    self.registry.push_unlabeled(arg);
                    Scan::UnlabeledOnly
                }
            };
        }

        let missing = self.registry.missing_required();
        if !missing.is_empty() {
            return Err(Error::MissingRequiredArguments(missing));
        }

        self.help_requested = help::requested_help(self);

        tracing::debug!(
            assigned = self.descriptors().filter(|d| d.assigned()).count(),
            unlabeled = self.unlabeled().len(),
            help = self.help_requested,
            "parsed command line"
        );
        Ok(())
    }

    /// Splits `line` with [`split_command_line`](crate::split_command_line) and parses the
    /// result, with the program name standing in for the executable
    pub fn parse_line(&mut self, line: &str) -> Result<(), Error> {
        let args = split_command_line(line);
        tracing::debug!(args = args.len(), "parsing command line string");
        self.parse(std::iter::once(self.program.clone()).chain(args))
    }

    fn classify(&mut self, arg: String) -> Result<Scan, Error> {
        if let Some(long) = arg.strip_prefix("--") {
            let (key, value) = long.split_once('=').unwrap_or((long, ""));

            // `--` and `--=...` both end switch parsing
            if key.is_empty() {
                tracing::debug!("end of switches");
                return Ok(Scan::UnlabeledOnly);
            }

            let switch = format!("--{key}");
            let Some(index) = self.registry.find_long(key) else {
                return Err(Error::UnknownArgument { switch });
            };
            self.registry.assign(index, &switch, value.to_string())?;
            return Ok(Scan::Switches);
        }

        if let Some(cluster) = arg.strip_prefix('-') {
            self.parse_cluster(&arg, cluster)?;
            return Ok(Scan::Switches);
        }

        self.registry.push_unlabeled(arg);
        Ok(Scan::Switches)
    }

    // Each letter of `-abc` is its own switch. A letter followed by `=` takes the rest of the
    // argument as its value, e.g. `-abc=5`.
    fn parse_cluster(&mut self, token: &str, cluster: &str) -> Result<(), Error> {
        for (idx, c) in cluster.char_indices() {
            if !is_valid_short_form(c) {
                return Err(Error::InvalidArgumentCharacter {
                    character: c,
                    token: token.to_string(),
                });
            }

            let switch = format!("-{c}");
            let Some(index) = self.registry.find_short(c) else {
                return Err(Error::UnknownArgument { switch });
            };

            let rest = &cluster[idx + c.len_utf8()..];
            if let Some(value) = rest.strip_prefix('=') {
                return self.registry.assign(index, &switch, value.to_string());
            }
            self.registry.assign(index, &switch, String::new())?;
        }
        Ok(())
    }

    /// Whether the latest successful parse saw the help switch
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// Reads the typed value of `switch`, or its default if it wasn't given
    pub fn value<T: SwitchValue>(&self, switch: Switch<T>) -> Result<T, Error> {
        self.registry.value(switch)
    }

    pub fn assigned<T>(&self, switch: Switch<T>) -> bool {
        self.descriptor(switch).assigned()
    }

    pub fn raw_value<T>(&self, switch: Switch<T>) -> &str {
        self.descriptor(switch).raw_value()
    }

    pub fn descriptor<T>(&self, switch: Switch<T>) -> &Descriptor {
        self.registry.descriptor(switch)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &Descriptor> {
        self.registry.descriptors()
    }

    pub fn unlabeled(&self) -> &[String] {
        self.registry.unlabeled()
    }

    pub fn for_each_descriptor(&self, f: impl FnMut(&Descriptor)) {
        self.registry.for_each_descriptor(f);
    }

    pub fn for_each_unlabeled(&self, f: impl FnMut(&str)) {
        self.registry.for_each_unlabeled(f);
    }

    /// Writes the usage text listing every declared switch
    pub fn show_usage(&self, w: impl Write) -> io::Result<()> {
        help::write_usage(w, self)
    }
}
