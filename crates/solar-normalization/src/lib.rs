//! Street address normalization.
//!
//! Reverse geocoders return verbose addresses such as
//! `"81, Calle José María Giles Ontiveros, Pardaleras, Badajoz, 06011, España"`.
//! This crate reduces them to `"Calle José María Giles Ontiveros 81"` through
//! an ordered table of heuristic rules (see [`rules`]).

pub mod address;
pub mod patterns;
pub mod rules;

pub use address::{NormalizedAddress, normalize_address, normalize_address_traced};
pub use patterns::STREET_TYPES;
pub use rules::{AddressRule, ParsedAddress, RULES};
