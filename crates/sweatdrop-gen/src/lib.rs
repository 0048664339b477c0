//! Procedural sweat-drop generator on top of `sweatdrop-engine`.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`options`] | `GenerationOptions`, `DropVariant`, validation |
//! | [`generator`] | `generate` entry point |
//! | [`drop`] | `SweatDrop` record, draw-list assembly |
//! | [`recipe`] | fixed shadow/body gradient recipes |
//! | [`ids`] | per-run gradient id allocation |
//! | [`error`] | `GenerateError` |
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sweatdrop_gen::{GenerationOptions, generate};
//!
//! let options = GenerationOptions::teardrop().with_drop_count(3);
//! let drops = generate(&options, &mut StdRng::seed_from_u64(7)).unwrap();
//! assert_eq!(drops.len(), 3);
//! ```

pub mod drop;
pub mod error;
pub mod generator;
pub mod ids;
pub mod options;
pub mod recipe;

pub use drop::{SweatDrop, assemble};
pub use error::GenerateError;
pub use generator::generate;
pub use options::{DropVariant, GenerationOptions};
