//! Everything a front end needs around the two calculi: configuration,
//! machine description files, the bundled programs and a [`Session`] that
//! runs them under the configured bounds.

pub mod conf;
pub mod err;
pub mod machine;
pub mod session;
pub mod demo;

pub use conf::Conf;
pub use err::*;
pub use machine::{MachineDef, MachineFile, builtin_machine, load_machine, parse_machine};
pub use session::{Run, Session, load_library};

/// The derived arithmetic, as text.
pub const ARITH_MU: &str = include_str!("../../../lib/mu/arith.mu");
