#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod annotations;
mod api;

pub use annotations::*;
pub use api::*;
