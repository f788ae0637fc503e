use crate::error::{Error, RegistrationError};
use crate::value::{SwitchValue, Value, ValueKind};
use std::fmt;
use std::marker::PhantomData;

/// Whether a switch must be present for a parse to succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    #[default]
    Optional,
    Required,
}

/// A blueprint for a command line switch (e.g. `--mass=2.5` or `-m=2.5`)
#[derive(Debug, Clone)]
pub struct Declaration<T> {
    long: Option<String>,
    short: Option<char>,
    description: String,
    requirement: Requirement,
    default: T,
}

impl<T: SwitchValue + Default> Declaration<T> {
    /// Declares a switch with a long form, e.g. `mass` for `--mass`.
    ///
    /// An empty `long` declares no long form; give the switch a short form instead.
    pub fn new(long: &str, description: &str) -> Self {
        Declaration {
            long: (!long.is_empty()).then(|| long.to_string()),
            short: None,
            description: description.to_string(),
            requirement: Requirement::Optional,
            default: T::default(),
        }
    }

    /// Declares a switch that only has a short form, e.g. `o` for `-o`
    pub fn short_only(letter: char, description: &str) -> Self {
        Self::new("", description).short(letter)
    }
}

impl<T: SwitchValue> Declaration<T> {
    /// Attaches a short form to this switch
    pub fn short(mut self, letter: char) -> Self {
        self.short = Some(letter);
        self
    }

    /// Makes this switch required
    pub fn make_required(mut self) -> Self {
        self.requirement = Requirement::Required;
        self
    }

    pub fn requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Sets the value read when the switch is absent
    pub fn default_value(mut self, default: T) -> Self {
        self.default = default;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), RegistrationError> {
        if self.long.is_none() && self.short.is_none() {
            return Err(RegistrationError::Nameless);
        }

        if let Some(long) = self.long.as_deref().filter(|l| l.starts_with('-')) {
            return Err(RegistrationError::LongFormStartsWithHyphen(long.to_string()));
        }

        if let Some(letter) = self.short.filter(|c| !is_valid_short_form(*c)) {
            return Err(RegistrationError::InvalidShortForm(letter));
        }

        Ok(())
    }

    pub(crate) fn long_form(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub(crate) fn short_form(&self) -> Option<char> {
        self.short
    }

    pub(crate) fn into_descriptor(self) -> Descriptor {
        Descriptor {
            long: self.long,
            short: self.short,
            description: self.description,
            requirement: self.requirement,
            default: self.default.into_value(),
            assigned: None,
        }
    }
}

/// Only ASCII letters can name a short switch
pub(crate) fn is_valid_short_form(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// The registered definition of one switch plus what the latest parse assigned to it
#[derive(Debug, Clone)]
pub struct Descriptor {
    long: Option<String>,
    short: Option<char>,
    description: String,
    requirement: Requirement,
    default: Value,
    assigned: Option<String>,
}

impl Descriptor {
    pub fn long_form(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn short_form(&self) -> Option<char> {
        self.short
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    pub fn kind(&self) -> ValueKind {
        self.default.kind()
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// The long form if there is one, otherwise the short letter
    pub fn best_name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(c)) => c.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Whether the switch was present on the latest parse
    pub fn assigned(&self) -> bool {
        self.assigned.is_some()
    }

    /// The raw text given to this switch, empty when it was absent or given without `=value`
    pub fn raw_value(&self) -> &str {
        self.assigned.as_deref().unwrap_or_default()
    }

    /// Reads the switch's value without knowing its type up front
    pub fn converted_value(&self) -> Result<Value, Error> {
        self.default.read_like(self.assigned.as_deref())
    }

    pub(crate) fn has_long_form(&self, long: &str) -> bool {
        self.long.as_deref() == Some(long)
    }

    pub(crate) fn has_short_form(&self, letter: char) -> bool {
        self.short == Some(letter)
    }

    /// Records `raw` as this switch's value. `switch` is how the user spelled it, for errors.
    pub(crate) fn assign(&mut self, switch: &str, raw: String) -> Result<(), Error> {
        let missing = raw.is_empty() && self.kind().requires_value();
        self.assigned = Some(raw);

        if missing {
            return Err(Error::MissingValue {
                switch: switch.to_string(),
                kind: self.kind(),
            });
        }
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.assigned = None;
    }

    pub(crate) fn read<T: SwitchValue>(&self) -> Result<T, Error> {
        let default = T::from_value(&self.default)
            .expect("switch handle must come from the parser that declared it");
        T::read(self.assigned.as_deref(), &default)
    }
}

/// A handle to a declared switch, used to read its value back from the parser
pub struct Switch<T> {
    index: usize,
    marker: PhantomData<fn() -> T>,
}

impl<T> Switch<T> {
    pub(crate) fn new(index: usize) -> Self {
        Switch {
            index,
            marker: PhantomData,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for Switch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Switch<T> {}

impl<T> fmt::Debug for Switch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Switch").field(&self.index).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_needs_an_identity() {
        let nameless = Declaration::<bool>::new("", "nothing to call it");
        assert_eq!(nameless.validate(), Err(RegistrationError::Nameless));

        let short = Declaration::<bool>::short_only('o', "odd");
        assert_eq!(short.validate(), Ok(()));
    }

    #[test]
    fn declaration_rejects_bad_forms() {
        let hyphen = Declaration::<bool>::new("-verbose", "");
        assert_eq!(
            hyphen.validate(),
            Err(RegistrationError::LongFormStartsWithHyphen("-verbose".into()))
        );

        let digit = Declaration::<bool>::new("level", "").short('9');
        assert_eq!(digit.validate(), Err(RegistrationError::InvalidShortForm('9')));
    }

    #[test]
    fn best_name_prefers_long_form() {
        let both = Declaration::<i32>::new("height", "").short('h').into_descriptor();
        assert_eq!(both.best_name(), "height");

        let short = Declaration::<i32>::short_only('h', "").into_descriptor();
        assert_eq!(short.best_name(), "h");
    }

    #[test]
    fn empty_value_is_missing_for_value_kinds() {
        let mut mana = Declaration::<f32>::new("mana", "").short('M').into_descriptor();
        let err = mana.assign("-M", String::new()).unwrap_err();
        assert_eq!(
            err,
            Error::MissingValue {
                switch: "-M".into(),
                kind: ValueKind::Float
            }
        );

        let mut flag = Declaration::<bool>::new("fast", "").into_descriptor();
        assert!(flag.assign("--fast", String::new()).is_ok());
        assert!(flag.assigned());
        assert_eq!(flag.raw_value(), "");
    }

    #[test]
    fn cleared_descriptor_reads_its_default() {
        let mut mass = Declaration::<f32>::new("mass", "")
            .default_value(3.141)
            .into_descriptor();
        mass.assign("--mass", "2.5".into()).unwrap();
        assert_eq!(mass.read::<f32>(), Ok(2.5));

        mass.clear();
        assert!(!mass.assigned());
        assert_eq!(mass.read::<f32>(), Ok(3.141));
        assert_eq!(mass.converted_value(), Ok(Value::F32(3.141)));
    }
}
