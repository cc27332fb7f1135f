//! `mf-bot`: bot and output-bin storage for the microchip factory.
//!
//! # Crate layout
//!
//! | Module    | Contents                                           |
//! |-----------|----------------------------------------------------|
//! | [`bot`]   | `Bot`, `Destination`, `RoutingRule`                |
//! | [`store`] | `BotStore` (lazy bot registry), `OutputBins`       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types. |

pub mod bot;
pub mod store;

#[cfg(test)]
mod tests;

pub use bot::{Bot, Destination, RoutingRule};
pub use store::{BotStore, OutputBins};
