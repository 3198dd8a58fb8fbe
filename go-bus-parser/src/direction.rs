//! Direction headsign disambiguation.
//!
//! When two trips of the same route and direction disagree on their
//! headsign, one of the two labels is dropped so the direction gets a single
//! name. [`select_droppable_headsign`] decides which one, or declines.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::normalize::TextNormalizer;

/// A single letter and a space at the start: a branch-lettered headsign.
static STARTS_WITH_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z] ").unwrap());

/// The placeholder headsign "special".
static SPECIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^special$").unwrap());

/// Route number, branch letter and dash at the start of a direction label.
static ROUTE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d{2,3}[a-z]?\s+- ").unwrap());

/// Outcome of comparing two candidate headsigns for one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadsignChoice {
    /// Drop the first candidate, keep the second.
    DropFirst,
    /// Drop the second candidate, keep the first.
    DropSecond,
    /// No rule tells the candidates apart; the caller uses its default.
    NoDecision,
}

/// Decide which of two headsigns for the same direction to drop.
///
/// Rules, first match wins:
/// 1. identical labels: no decision;
/// 2. exactly one label starts with a branch letter ("A Downtown"): keep it,
///    drop the other;
/// 3. exactly one label is "special": drop it;
/// 4. otherwise no decision.
///
/// The branch-letter rule always outranks the "special" rule.
///
/// ```
/// use go_bus_parser::direction::{select_droppable_headsign, HeadsignChoice};
///
/// assert_eq!(
///     select_droppable_headsign("A Downtown", "Downtown"),
///     HeadsignChoice::DropSecond,
/// );
/// assert_eq!(
///     select_droppable_headsign("Downtown", "Downtown"),
///     HeadsignChoice::NoDecision,
/// );
/// ```
pub fn select_droppable_headsign(first: &str, second: &str) -> HeadsignChoice {
    if first == second {
        return HeadsignChoice::NoDecision;
    }

    let first_lettered = STARTS_WITH_LETTER.is_match(first);
    let second_lettered = STARTS_WITH_LETTER.is_match(second);
    if first_lettered {
        if !second_lettered {
            return HeadsignChoice::DropSecond;
        }
    } else if second_lettered {
        return HeadsignChoice::DropFirst;
    }

    let first_special = SPECIAL.is_match(first);
    let second_special = SPECIAL.is_match(second);
    if first_special {
        if !second_special {
            return HeadsignChoice::DropFirst;
        }
    } else if second_special {
        return HeadsignChoice::DropSecond;
    }

    HeadsignChoice::NoDecision
}

/// Clean a headsign used as a direction name.
///
/// Unlike trip headsigns, the whole route prefix goes (branch letter
/// included), and a bare "special" label is blanked, before the trip
/// headsign pipeline runs.
pub fn clean_direction_headsign(normalizer: &TextNormalizer, raw: &str) -> String {
    let text = ROUTE_PREFIX.replace(raw, "");
    let text = SPECIAL.replace(&text, "");
    normalizer.normalize_trip_headsign(&text)
}
