#![warn(missing_docs)]
//! Test surfaces for the backport pipeline: an in-memory pack, throwaway on-disk packs, and
//! canned item definitions.

mod fixtures;
mod memory_pack;
mod temp_pack;

pub use fixtures::*;
pub use memory_pack::MemoryPack;
pub use temp_pack::TempPack;
