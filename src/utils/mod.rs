//! Utility modules shared across the generator, editor and server.

pub mod date;
pub mod hash;
pub mod html;
pub mod mime;
pub mod path;
pub mod plural;
