//! Serialized field layout for outcomes
//!
//! - `Outcome`: `{ "errors": [...], "isSuccess": bool }`
//! - `ValueOutcome<T>`: adds `"valueOrDefault"` (`null` on failure)
//!
//! `isSuccess` is derived. On input it is optional, but when present it
//! must agree with `errors`. The strict value accessor has no serialized
//! form.

use crate::{Error, ErrorList, Outcome, ValueOutcome};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeFields<'a> {
    errors: &'a [Error],
    is_success: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueOutcomeFields<'a, T> {
    errors: &'a [Error],
    is_success: bool,
    value_or_default: Option<&'a T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeInput {
    #[serde(default)]
    errors: Vec<Error>,
    #[serde(default)]
    is_success: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
struct ValueOutcomeInput<T> {
    #[serde(default)]
    errors: Vec<Error>,
    #[serde(default)]
    is_success: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    value_or_default: Option<Payload<T>>,
}

/// A `valueOrDefault` that was sent, `null` included
///
/// `null` is tried as a `T` first, so `()` and `Option::None` payloads
/// read back as values. It only becomes `Null` when `T` rejects it.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Value(T),
    Null,
}

/// Keep "field sent as `null`" apart from "field missing"
fn present<'de, D, T>(deserializer: D) -> Result<Option<Payload<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Payload::deserialize(deserializer).map(Some)
}

fn check_flag(is_success: Option<bool>, errors: &[Error]) -> Result<(), &'static str> {
    match is_success {
        Some(flag) if flag != errors.is_empty() => Err("isSuccess disagrees with errors"),
        _ => Ok(()),
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OutcomeFields {
            errors: self.errors(),
            is_success: self.is_success(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = OutcomeInput::deserialize(deserializer)?;
        check_flag(input.is_success, &input.errors).map_err(D::Error::custom)?;
        Ok(Outcome::from_collected(input.errors))
    }
}

impl<T: Serialize> Serialize for ValueOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ValueOutcomeFields {
            errors: self.errors(),
            is_success: self.is_success(),
            value_or_default: self.value_or_default(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ValueOutcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = ValueOutcomeInput::<T>::deserialize(deserializer)?;
        check_flag(input.is_success, &input.errors).map_err(D::Error::custom)?;

        // A value sent alongside errors is ignored: failures carry no payload
        match (ErrorList::new(input.errors), input.value_or_default) {
            (Some(errors), _) => Ok(ValueOutcome::Failure(errors)),
            (None, Some(Payload::Value(value))) => Ok(ValueOutcome::Success(value)),
            (None, Some(Payload::Null) | None) => {
                Err(D::Error::custom("successful outcome is missing valueOrDefault"))
            }
        }
    }
}

impl Outcome {
    /// Render the serialized field layout as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<T: Serialize> ValueOutcome<T> {
    /// Render the serialized field layout as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
