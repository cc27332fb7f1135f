//! `mf-sim`: execution engine for the microchip factory.
//!
//! # Fixed-point loop
//!
//! ```text
//! while any bot holds exactly two chips:
//!   for each bot in ascending id order:
//!     if it holds two chips:
//!       ① record it if the pair matches the configured target
//!       ② sort → (low, high)
//!       ③ send low / high to the destinations of its routing rule
//!       ④ empty the bot
//! ```
//!
//! A bot that receives its second chip from a lower-id bot acts later in the
//! same pass; one that receives it from a higher-id bot acts on the next pass.
//! Neither the final output bins nor the identity of the responsible bot
//! depend on this ordering.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mf_core::TargetPair;
//! use mf_sim::{FactoryBuilder, NoopObserver};
//!
//! let layout = mf_instructions::load_layout_path("input.txt".as_ref())?;
//! let mut factory = FactoryBuilder::new(layout)
//!     .target(TargetPair::new(17, 61))
//!     .build()?;
//! factory.run(&mut NoopObserver)?;
//! println!("{}", factory.responsible_bot()?);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod factory;
pub mod observer;
pub mod report;


pub use builder::FactoryBuilder;
pub use config::{FactoryConfig, OutputPolicy};
pub use error::{ReportError, SimError, SimResult};
pub use factory::{Factory, lookup_output, run};
pub use observer::{FactoryObserver, NoopObserver};
pub use report::write_outputs_csv;
