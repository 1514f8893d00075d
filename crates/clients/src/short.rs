use serde::Serialize;

use salon_core::{DomainError, DomainResult, ValueObject};

/// Short client record: identity plus visit counter, no discount.
///
/// All four fields are immutable after construction; validation runs in
/// [`ClientShort::new`] and either the whole record exists or none of it
/// does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientShort {
    last_name: String,
    first_name: String,
    father_name: String,
    haircut_counter: u32,
}

impl ClientShort {
    /// Create a validated short record.
    ///
    /// Fields are validated in order: `last_name`, `first_name`,
    /// `father_name`, `haircut_counter`; the first failure wins. Name
    /// fields must trim to at least two characters and contain only
    /// letters and spaces. The counter must be non-negative.
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        father_name: impl Into<String>,
        haircut_counter: i64,
    ) -> DomainResult<Self> {
        let last_name = last_name.into();
        let first_name = first_name.into();
        let father_name = father_name.into();

        validate_name(&last_name, "last_name")?;
        validate_name(&first_name, "first_name")?;
        validate_name(&father_name, "father_name")?;
        let haircut_counter = validate_haircut_counter(haircut_counter)?;

        Ok(Self {
            last_name,
            first_name,
            father_name,
            haircut_counter,
        })
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn father_name(&self) -> &str {
        &self.father_name
    }

    pub fn haircut_counter(&self) -> u32 {
        self.haircut_counter
    }

    /// Canonical abbreviated display string.
    ///
    /// Format: `"{Last name title-cased} {F}.{P}., {counter}"`, where the
    /// first and father names reduce to their uppercased initial.
    /// Example: `("Иванов", "Иван", "Иванович", 5)` renders as
    /// `"Иванов И.И., 5"`.
    pub fn render(&self) -> String {
        format!(
            "{} {}.{}., {}",
            title_case(&self.last_name),
            initial(&self.first_name),
            initial(&self.father_name),
            self.haircut_counter
        )
    }
}

impl core::fmt::Display for ClientShort {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render())
    }
}

impl ValueObject for ClientShort {}

/// Shared rule for the three name fields.
///
/// The trimmed value must be non-empty and at least two characters; every
/// non-space character of the raw value must be alphabetic.
fn validate_name(value: &str, field: &'static str) -> DomainResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, "cannot be empty"));
    }
    if trimmed.chars().count() < 2 {
        return Err(DomainError::validation(
            field,
            "must contain at least 2 characters",
        ));
    }
    if !value.chars().all(|c| c == ' ' || c.is_alphabetic()) {
        return Err(DomainError::validation(
            field,
            "must contain only letters and spaces",
        ));
    }
    Ok(())
}

fn validate_haircut_counter(value: i64) -> DomainResult<u32> {
    if value < 0 {
        return Err(DomainError::validation(
            "haircut_counter",
            "cannot be negative",
        ));
    }
    u32::try_from(value)
        .map_err(|_| DomainError::validation("haircut_counter", "exceeds the supported range"))
}

/// Uppercase the first letter of each space-separated word, lowercase the
/// rest. Handles multi-char case mappings (`char::to_uppercase` may expand).
fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}
