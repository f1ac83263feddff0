// Closed registry of analytics event names.
//
// Purpose
// - Single source of truth for which strings are legal analytics event names,
//   so emitters and consumers are checked against the set at compile time.
//
// Responsibilities
// - Enumerate every event the web app may report.
// - Convert between the enumeration and its snake_case wire form, exactly and
//   case sensitively, in both directions.
//
// Versioning and evolution
// - Adding an event is additive: add a variant and extend the golden fixture.
// - Renaming or removing a variant breaks every consumer and every recorded
//   event that carries the old wire string.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

// TODO: Add strongly typed payloads per event once the shapes are agreed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventName {
    PageView,
    ScrollDepth,
    AddToCart,
    ViewCart,
    StartCheckout,
    CheckoutSuccess,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown event name: {0}")]
pub struct UnknownEventName(pub String);

impl FromStr for EventName {
    type Err = UnknownEventName;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|name| name.as_ref() == input)
            .ok_or_else(|| UnknownEventName(input.to_string()))
    }
}
