//! Shared source-position vocabulary for node construction.
//!
//! Offsets ([`BytePos`]) address bytes of the source text; [`Position`] and
//! [`SourceLocation`] carry the 1-based line / 0-based column form that
//! downstream consumers (source maps, diagnostics, tooling) read.
#![deny(unused)]

pub use self::loc::{Position, SourceLocation, DUMMY_POS};
pub use self::pos::{BytePos, Pos};

mod loc;
mod pos;

/// Interned string, used for node discriminants.
pub type Atom = string_cache::DefaultAtom;
