use crate::descriptor::{Declaration, Descriptor, Switch};
use crate::error::{Error, RegistrationError};
use crate::value::SwitchValue;

/// The declared switches, in declaration order, and the unlabeled arguments of the latest parse
#[derive(Debug, Clone, Default)]
pub struct Registry {
    descriptors: Vec<Descriptor>,
    unlabeled: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a switch, refusing declarations that are malformed or that reuse a form
    pub fn try_add<T: SwitchValue>(
        &mut self,
        declaration: Declaration<T>,
    ) -> Result<Switch<T>, RegistrationError> {
        declaration.validate()?;

        if let Some(long) = declaration.long_form().filter(|l| self.has_long_form(l)) {
            return Err(RegistrationError::DuplicateLongForm(long.to_string()));
        }

        if let Some(letter) = declaration.short_form().filter(|c| self.has_short_form(*c)) {
            return Err(RegistrationError::DuplicateShortForm(letter));
        }

        self.descriptors.push(declaration.into_descriptor());
        Ok(Switch::new(self.descriptors.len() - 1))
    }

    pub fn has_long_form(&self, long: &str) -> bool {
        self.find_long(long).is_some()
    }

    pub fn has_short_form(&self, letter: char) -> bool {
        self.find_short(letter).is_some()
    }

    /// Returns the index of the switch with the given long form
    pub(crate) fn find_long(&self, long: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| d.has_long_form(long))
    }

    /// Returns the index of the switch with the given short form
    pub(crate) fn find_short(&self, letter: char) -> Option<usize> {
        self.descriptors.iter().position(|d| d.has_short_form(letter))
    }

    /// Forgets every value and unlabeled argument from a previous parse
    pub fn clear_assignments(&mut self) {
        self.descriptors.iter_mut().for_each(Descriptor::clear);
        self.unlabeled.clear();
    }

    pub(crate) fn assign(&mut self, index: usize, switch: &str, raw: String) -> Result<(), Error> {
        tracing::trace!(switch, raw = raw.as_str(), "assigning switch");
        self.descriptors[index].assign(switch, raw)
    }

    pub(crate) fn push_unlabeled(&mut self, arg: String) {
        tracing::trace!(arg = arg.as_str(), "unlabeled argument");
        self.unlabeled.push(arg);
    }

    /// Names of required switches that the latest parse did not assign
    pub(crate) fn missing_required(&self) -> Vec<String> {
        self.descriptors
            .iter()
            .filter(|d| d.is_required() && !d.assigned())
            .map(Descriptor::best_name)
            .collect()
    }

    pub fn descriptor<T>(&self, switch: Switch<T>) -> &Descriptor {
        &self.descriptors[switch.index()]
    }

    /// Reads the typed value of `switch`, converting its raw text if it was given
    pub fn value<T: SwitchValue>(&self, switch: Switch<T>) -> Result<T, Error> {
        self.descriptor(switch).read()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.iter()
    }

    pub fn unlabeled(&self) -> &[String] {
        &self.unlabeled
    }

    pub fn for_each_descriptor(&self, f: impl FnMut(&Descriptor)) {
        self.descriptors.iter().for_each(f);
    }

    pub fn for_each_unlabeled(&self, mut f: impl FnMut(&str)) {
        self.unlabeled.iter().for_each(|arg| f(arg));
    }
}
