//! Decoding of the raw intents bitmask.

use crate::types::{Intent, RAW_INTENT_MEMBERS, RAW_INTENT_PRESENCE};

/// Map a raw intents value to its symbolic [`Intent`].
///
/// Values other than `2` and `256` decode to [`Intent::None`]. The API may
/// grow new bitmask values, and those degrade to `None` instead of failing.
pub fn decode(raw: i64) -> Intent {
    match raw {
        RAW_INTENT_PRESENCE => Intent::Presence,
        RAW_INTENT_MEMBERS => Intent::Members,
        _ => Intent::None,
    }
}
