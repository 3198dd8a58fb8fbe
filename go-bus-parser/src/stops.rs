//! Stop code → stop id lookup.
//!
//! Most stops in the feed carry a numeric code that is their id. Stations
//! and a few terminals carry a mnemonic code instead ("UN" for Union
//! Station); those map to fixed ids through a static table, and anything
//! the table does not know goes to a fallback supplied by the caller.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::domain::StopId;

const fn sid(value: u32) -> StopId {
    match StopId::new(value) {
        Some(id) => id,
        None => panic!("stop ids must be positive"),
    }
}

/// Mnemonic stop codes and their stop ids.
///
/// Updating the agency's coding scheme means editing this table only.
const STOP_CODES: [(&str, StopId); 70] = [
    ("UN", sid(9021)),
    ("EX", sid(9022)),
    ("MI", sid(9031)),
    ("LO", sid(9033)),
    ("DA", sid(9061)),
    ("SC", sid(9062)),
    ("EG", sid(9063)),
    ("GU", sid(9081)),
    ("RO", sid(9091)),
    ("PO", sid(9111)),
    ("CL", sid(9121)),
    ("OA", sid(9131)),
    ("BO", sid(9141)),
    ("AP", sid(9151)),
    ("BU", sid(9161)),
    ("AL", sid(9171)),
    ("PIN", sid(9911)),
    ("AJ", sid(9921)),
    ("WH", sid(9939)),
    ("OS", sid(9941)),
    ("BL", sid(9023)),
    ("KP", sid(9032)),
    ("WE", sid(9041)),
    ("ET", sid(9042)),
    ("OR", sid(9051)),
    ("OL", sid(9052)),
    ("AG", sid(9071)),
    ("DI", sid(9113)),
    ("CO", sid(9114)),
    ("ER", sid(9123)),
    ("HA", sid(9181)),
    ("YO", sid(9191)),
    ("SR", sid(9211)),
    ("ME", sid(9221)),
    ("LS", sid(9231)),
    ("ML", sid(9241)),
    ("KI", sid(9271)),
    ("MA", sid(9311)),
    ("BE", sid(9321)),
    ("BR", sid(9331)),
    ("MO", sid(9341)),
    ("GE", sid(9351)),
    ("AC", sid(9371)),
    ("GL", sid(9391)),
    ("EA", sid(9441)),
    ("LA", sid(9601)),
    ("RI", sid(9612)),
    ("MP", sid(9613)),
    ("RU", sid(9614)),
    ("KC", sid(9621)),
    ("AU", sid(9631)),
    ("NE", sid(9641)),
    ("BD", sid(9651)),
    ("BA", sid(9681)),
    ("AD", sid(9691)),
    ("MK", sid(9701)),
    ("UI", sid(9712)),
    ("MR", sid(9721)),
    ("CE", sid(9722)),
    ("MJ", sid(9731)),
    ("ST", sid(9741)),
    ("LI", sid(9742)),
    ("KE", sid(9771)),
    // Terminals and stops outside the station numbering
    ("JAMES STR", sid(100001)),
    ("USBT", sid(52)),
    ("NI", sid(100003)),
    ("PA", sid(311)),
    ("SCTH", sid(100005)),
    ("DW", sid(100006)),
    ("CF", sid(100011)),
];

static STOP_IDS: LazyLock<HashMap<&'static str, StopId>> =
    LazyLock::new(|| STOP_CODES.into_iter().collect());

/// Look up a mnemonic stop code in the static table.
///
/// Surrounding whitespace is ignored; the match is exact and case-sensitive.
pub fn lookup_stop_code(code: &str) -> Option<StopId> {
    STOP_IDS.get(code.trim()).copied()
}

/// All mnemonic stop codes, in table order.
pub fn known_stop_codes() -> impl Iterator<Item = (&'static str, StopId)> {
    STOP_CODES.into_iter()
}

/// Resolution strategy for stop codes missing from the static table.
pub trait StopCodeFallback {
    /// Resolve a stop code the table does not know. Receives the code as
    /// it appeared in the feed, untrimmed.
    fn stop_id_for(&self, code: &str) -> Option<StopId>;
}

impl<F> StopCodeFallback for F
where
    F: Fn(&str) -> Option<StopId>,
{
    fn stop_id_for(&self, code: &str) -> Option<StopId> {
        self(code)
    }
}

/// Fallback that resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl StopCodeFallback for NoFallback {
    fn stop_id_for(&self, _code: &str) -> Option<StopId> {
        None
    }
}

/// Resolves stop codes through the static table, then the fallback.
#[derive(Debug, Clone, Default)]
pub struct StopCodeResolver<F = NoFallback> {
    fallback: F,
}

impl<F: StopCodeFallback> StopCodeResolver<F> {
    /// Create a resolver delegating unknown codes to `fallback`.
    pub fn new(fallback: F) -> Self {
        Self { fallback }
    }

    /// Resolve a code that is not a plain integer.
    ///
    /// Known codes come from the table; anything else is delegated to the
    /// fallback and its answer returned as-is.
    pub fn resolve(&self, code: &str) -> Option<StopId> {
        let trimmed = code.trim();
        match STOP_IDS.get(trimmed) {
            Some(&stop_id) => {
                debug!(code = trimmed, %stop_id, "stop code found in table");
                Some(stop_id)
            }
            None => {
                debug!(code = trimmed, "stop code not in table, using fallback");
                self.fallback.stop_id_for(code)
            }
        }
    }

    /// Stop id for any stop code: plain positive integers are the id
    /// itself, everything else goes through [`resolve`](Self::resolve).
    pub fn stop_id_from_code(&self, code: &str) -> Option<StopId> {
        match code.trim().parse::<u32>() {
            Ok(value) => StopId::new(value),
            Err(_) => self.resolve(code),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Lower-case codes never hit the table
        #[test]
        fn lower_case_never_matches(code in "[a-z]{2,4}") {
            prop_assert_eq!(lookup_stop_code(&code), None);
        }

        /// Any amount of surrounding whitespace resolves the same id
        #[test]
        fn whitespace_padding_is_ignored(
            index in 0..STOP_CODES.len(),
            left in "[ \t]{0,3}",
            right in "[ \t]{0,3}",
        ) {
            let (code, stop_id) = STOP_CODES[index];
            let padded = format!("{left}{code}{right}");
            prop_assert_eq!(lookup_stop_code(&padded), Some(stop_id));
        }
    }
}
