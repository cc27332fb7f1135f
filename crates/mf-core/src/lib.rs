//! `mf-core`: foundational types for the microchip factory simulator.
//!
//! This crate is a dependency of every other `mf-*` crate.  It has no `mf-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module    | Contents                                         |
//! |-----------|--------------------------------------------------|
//! | [`ids`]   | `BotId`, `OutputId`, the `Chip` value type       |
//! | [`pair`]  | `TargetPair` (unordered pair of chip values)     |
//! | [`error`] | `LookupError`, `LookupResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod pair;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{LookupError, LookupResult};
pub use ids::{BotId, Chip, OutputId};
pub use pair::TargetPair;
