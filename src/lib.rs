// Crate entry point. Re-export modules so consumers and tests can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Anything that emits or consumes analytics events depends on this crate
//   and takes an EventName wherever an event identifier is required.

pub mod event_name;

pub use event_name::{EventName, UnknownEventName};
