//! `mf-instructions`: turns instruction text into a routing table.
//!
//! # Instruction format
//!
//! One instruction per line, whitespace separated:
//!
//! ```text
//! value 5 goes to bot 2
//! bot 2 gives low to bot 1 and high to output 0
//! ```
//!
//! Blank lines are ignored.  Lines may appear in any order: every bot is
//! registered the first time any line mentions it.
//!
//! # Crate layout
//!
//! | Module          | Contents                                         |
//! |-----------------|--------------------------------------------------|
//! | [`instruction`] | `Instruction` and the single-line parser         |
//! | [`loader`]      | `build`, `load_layout_path`, `FactoryLayout`     |
//! | [`error`]       | `InstructionError`                               |

pub mod error;
pub mod instruction;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{InstructionError, InstructionResult};
pub use instruction::Instruction;
pub use loader::{FactoryLayout, build, load_layout_path, load_layout_reader};
