use serde::Serialize;
use serde_json::{Map, Value};

use salon_core::{DomainError, DomainResult, ValueObject};

use crate::short::ClientShort;

/// Keys a mapping-shaped input must carry, checked before any field value
/// is looked at.
const REQUIRED_FIELDS: [&str; 5] = [
    "first_name",
    "last_name",
    "father_name",
    "haircut_counter",
    "discount",
];

/// Full client record: a [`ClientShort`] plus a discount rate.
///
/// Composition instead of inheritance: the shared fields live in an embedded
/// `ClientShort` and their accessors are forwarded. The discount is the only
/// mutable field, guarded by [`Client::set_discount`].
///
/// Serialization emits the five wire keys (`last_name`, `first_name`,
/// `father_name`, `haircut_counter`, `discount`), so a serialized record
/// feeds straight back into [`Client::from_serialized_text`]. `Deserialize`
/// is intentionally not derived: inbound data must pass through the
/// validating constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    #[serde(flatten)]
    short: ClientShort,
    discount: f64,
}

impl Client {
    /// Direct five-value construction.
    ///
    /// The discount is validated first, then the four shared fields are
    /// delegated to [`ClientShort::new`] with its validation order.
    pub fn from_fields(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        father_name: impl Into<String>,
        haircut_counter: i64,
        discount: f64,
    ) -> DomainResult<Self> {
        validate_discount(discount)?;
        let short = ClientShort::new(last_name, first_name, father_name, haircut_counter)?;
        Ok(Self { short, discount })
    }

    /// Construction from a key-value mapping.
    ///
    /// All five required keys are presence-checked up front; when any are
    /// absent the error lists every missing key at once. Unrecognized extra
    /// keys are ignored. Value validation only starts once all keys are
    /// present.
    pub fn from_mapping(data: &Map<String, Value>) -> DomainResult<Self> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|key| !data.contains_key(**key))
            .map(|key| (*key).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::missing_fields(missing));
        }

        let discount = number_field(data, "discount")?;
        validate_discount(discount)?;

        let short = ClientShort::new(
            text_field(data, "last_name")?,
            text_field(data, "first_name")?,
            text_field(data, "father_name")?,
            integer_field(data, "haircut_counter")?,
        )?;

        Ok(Self { short, discount })
    }

    /// Construction from serialized JSON text.
    ///
    /// Text that does not parse, or parses to something other than an
    /// object, fails with [`DomainError::Parse`]; field-level problems in a
    /// well-formed object surface as validation errors via
    /// [`Client::from_mapping`].
    pub fn from_serialized_text(text: &str) -> DomainResult<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DomainError::parse(e.to_string()))?;
        match value {
            Value::Object(map) => Self::from_mapping(&map),
            other => Err(DomainError::parse(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    pub fn last_name(&self) -> &str {
        self.short.last_name()
    }

    pub fn first_name(&self) -> &str {
        self.short.first_name()
    }

    pub fn father_name(&self) -> &str {
        self.short.father_name()
    }

    pub fn haircut_counter(&self) -> u32 {
        self.short.haircut_counter()
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Replace the discount, re-running the range check.
    ///
    /// On failure the previously stored value stays intact; out-of-range
    /// input is rejected, never clamped.
    pub fn set_discount(&mut self, value: f64) -> DomainResult<()> {
        validate_discount(value)?;
        self.discount = value;
        Ok(())
    }

    /// Short render plus the discount.
    ///
    /// Example: `("Петров", "Петр", "Петрович", 10, 5)` renders as
    /// `"Петров П.П., 10, 5"`.
    pub fn render(&self) -> String {
        format!("{}, {}", self.short.render(), self.discount)
    }

    /// Detach an independent short record carrying the shared fields.
    pub fn to_short(&self) -> ClientShort {
        self.short.clone()
    }
}

impl core::fmt::Display for Client {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render())
    }
}

impl ValueObject for Client {}

/// Discount must be a finite number inside the closed range [0, 100].
fn validate_discount(value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation("discount", "must be a finite number"));
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(DomainError::validation(
            "discount",
            "must be between 0 and 100",
        ));
    }
    Ok(())
}

fn text_field<'a>(data: &'a Map<String, Value>, field: &'static str) -> DomainResult<&'a str> {
    data.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| DomainError::validation(field, "must be a string"))
}

fn integer_field(data: &Map<String, Value>, field: &'static str) -> DomainResult<i64> {
    data.get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| DomainError::validation(field, "must be a whole number"))
}

fn number_field(data: &Map<String, Value>, field: &'static str) -> DomainResult<f64> {
    data.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| DomainError::validation(field, "must be a number"))
}
