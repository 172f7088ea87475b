//! Machine description files.
//!
//! ```toml
//! name = "flip"
//! start = "scan"
//! states = [{ name = "scan" }, { name = "done", final = true }]
//! instructions = [
//!   ["scan", "a", "scan", "b", "R"],
//!   ["scan", "#", "done", "?", "0"],
//! ]
//! ```

use crate::err::{DriverError, Result};
use calculi_turing::{Move, Program, Read, StateId, Write};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, io, path::Path};

#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct StateDecl {
    pub name: String,
    #[serde(rename = "final", default)]
    pub is_final: bool,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct MachineFile {
    #[serde(default)]
    pub name: Option<String>,
    pub start: String,
    pub states: Vec<StateDecl>,
    /// `[from, read, to, write, move]`
    #[serde(default)]
    pub instructions: Vec<[String; 5]>,
}

/// A program ready to run, and the state it starts in.
#[derive(Clone, Debug)]
pub struct MachineDef {
    pub name: String,
    pub program: Program,
    pub start: StateId,
}

impl MachineFile {
    pub fn elaborate(self, fallback_name: &str) -> Result<MachineDef> {
        let MachineFile { name, start, states, instructions } = self;
        let mut program = Program::new();
        let mut ids = HashMap::new();
        for StateDecl { name, is_final } in states {
            if ids.contains_key(&name) {
                return Err(DriverError::DuplicateState(name));
            }
            let id = if is_final { program.final_state(name.clone()) } else { program.state(name.clone()) };
            ids.insert(name, id);
        }
        let state = |name: &String| ids.get(name).copied().ok_or_else(|| DriverError::UnknownState(name.clone()));
        for [from, read, to, write, movement] in &instructions {
            let (from, to) = (state(from)?, state(to)?);
            let read = Read::parse(single(read)?)?;
            let write = Write::parse(single(write)?)?;
            let movement = Move::parse(single(movement)?)?;
            program.instruction(from, read, to, write, movement);
        }
        let start = state(&start)?;
        let name = name.unwrap_or_else(|| fallback_name.to_owned());
        log::debug!(
            "machine `{}`: {} states, {} instructions",
            name,
            program.states.len(),
            program.instructions.len()
        );
        Ok(MachineDef { name, program, start })
    }
}

fn single(field: &str) -> Result<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        | (Some(c), None) => Ok(c),
        | _ => Err(DriverError::NotASymbol(field.to_owned())),
    }
}

pub fn parse_machine(src: &str, fallback_name: &str) -> Result<MachineDef> {
    let file: MachineFile = toml::from_str(src)?;
    file.elaborate(fallback_name)
}

/// Load a description file; the file stem names the machine unless the file
/// says otherwise.
pub fn load_machine(path: impl AsRef<Path>) -> Result<MachineDef> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        | io::ErrorKind::NotFound => DriverError::FileNotFound(path.to_path_buf()),
        | _ => e.into(),
    })?;
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    parse_machine(&src, &stem)
}

pub const BUILTINS: &[(&str, &str)] = &[
    ("reverse", include_str!("../../../lib/machines/reverse.toml")),
    ("anbncn", include_str!("../../../lib/machines/anbncn.toml")),
];

pub fn builtin_machine(name: &str) -> Result<MachineDef> {
    let (name, src) = BUILTINS
        .iter()
        .find(|(n, _)| *n == name)
        .ok_or_else(|| DriverError::UnknownBuiltin(name.to_owned()))?;
    parse_machine(src, name)
}
