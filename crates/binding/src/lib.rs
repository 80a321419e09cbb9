//! Contract bindings for the OP Stack predeploys and tooling contracts.
//!
//! The modules under [`contracts`] are generated by `bindgen` from the ABI
//! and bytecode artifacts in `artifacts/`; regenerate them with
//! `cargo run -p bindgen` after changing an artifact. Each module exposes:
//! - the `sol!` interface `I<Name>` with its calls, events, errors and structs
//! - a `<NAME>_META_DATA` static holding the ABI and deploy bytecode
//! - a `<Name>` wrapper bound through [`bind`] backends
//!
//! [`predeploys`] lists the fixed L2 addresses and [`registry`] serves the
//! storage layouts and runtime bytecode shipped for selected L1 contracts.

pub mod contracts;
pub mod predeploys;
pub mod registry;

pub use contracts::*;
