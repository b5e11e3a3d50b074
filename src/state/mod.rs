//! Application state modules.
//!
//! Each module holds plain data plus the transitions the components drive.
//! Components wrap these in `RwSignal`s provided through Leptos context.

pub mod certs;
pub mod contact;
pub mod nav;
pub mod reveal;
pub mod theme;
