//! Domain types for the GO Transit bus feed.
//!
//! This module contains the validated value types handed to and returned
//! from the cleaning and lookup operations. All types enforce their
//! invariants at construction time.

mod color;
mod language;
mod route_key;
mod route_type;
mod stop_id;

pub use color::{ColorCode, InvalidColorCode};
pub use language::{Language, UnsupportedLanguage};
pub use route_key::{InvalidRouteKey, RouteKey};
pub use route_type::RouteType;
pub use stop_id::StopId;
