// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(Record)]` implementation.
//!
//! # Architecture
//!
//! ```text
//! record.rs (entry point)
//! ├── parse.rs     - darling attributes → RecordDef
//! └── generate.rs  - RecordDef → Record + Inspect impls
//! ```

mod generate;
mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::RecordDef;

/// Main entry point for the Record derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match RecordDef::from_derive_input(&input) {
        Ok(record) => generate::generate(&record).into(),
        Err(err) => err.write_errors().into()
    }
}
