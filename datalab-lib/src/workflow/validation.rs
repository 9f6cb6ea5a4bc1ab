use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
};

use strum::{Display as StrumDisplay, IntoStaticStr};
use thiserror::Error;

/// Fields of the new campaign form that can carry an error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, StrumDisplay, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum FormField {
    Prefix,
    PlanName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a prefix")]
    MissingPrefix,
    #[error("Plan name is required")]
    MissingPlanName,
}

/// Per-field validation messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// The human readable message for `field`, if it has an error.
    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn insert(&mut self, field: FormField, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, ValidationError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
