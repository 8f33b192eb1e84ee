//! Use-Cases der Application-Layer-Orchestrierung.

pub mod controls;
pub mod session;
pub mod transform;
