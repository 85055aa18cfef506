// docsieve-keywords/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod fold;
pub mod scanner;
pub mod text;

pub use scanner::{KeywordError, KeywordScanner};

/// Identifier of a keyword inside a scanner, in insertion order.
pub type KeywordId = usize;
