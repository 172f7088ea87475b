#![allow(clippy::style)]

pub mod arena;
pub mod fuel;
