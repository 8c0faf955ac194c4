/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
mod parsers;
pub mod atom;
pub mod album;
pub mod photo;
pub mod file;
pub mod template;
pub mod properties;
pub mod errors;

pub use album::*;
pub use api::*;
pub use atom::*;
pub use client::*;
pub use errors::*;
pub use file::*;
pub use photo::*;
pub use properties::*;
pub use template::*;
