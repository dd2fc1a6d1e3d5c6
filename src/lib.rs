#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Must come first so the logging macro is visible to every module below
#[macro_use]
mod trace;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod domain;
mod error;
mod helpers;
mod params;
mod path;
mod percent_encode;
mod query;

// Public API
pub use domain::get_domain_name;
pub use error::ParamError;
pub use params::{parse_int_parameter, parse_string_parameter, try_parse_int_parameter};
pub use path::{append_forward_slash, combine};
pub use percent_encode::encode_component;
pub use query::{add_parameter, remove_parameter};

pub type Result<T> = core::result::Result<T, ParamError>;
