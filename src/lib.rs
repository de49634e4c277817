//! # Gallery Tools
//!
//! Build-time helpers for a static image-matching gallery. The page itself is
//! plain HTML and JavaScript with no server, so anything it needs to know
//! about the filesystem has to be written out ahead of time:
//!
//! ```text
//! json2js       similarity.json  →  similarity.js      (window.SIMILARITY_DATA)
//! gen-manifest  images/          →  images/manifest.json
//! ```
//!
//! Both tools are single-pass: read, validate, write, report. Outputs are
//! overwritten on every run and are byte-identical for identical inputs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`convert`] | JSON array file → `window.<global> = [...];` script |
//! | [`manifest`] | Image directory → sorted JSON list of filenames |
//! | [`script`] | The global-assignment wrapper shared by both tools |
//! | [`config`] | Optional `gallery-tools.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//! | [`cli`] | Argument parsing, logging setup, and exit status for the binaries |
//!
//! # Design Decisions
//!
//! ## Scripts Over Fetch
//!
//! Browsers block `fetch` for `file://` pages, but `<script src>` still works.
//! Emitting data as a global assignment lets the gallery be opened straight
//! from disk. The manifest keeps a JSON form for servers and can optionally
//! emit the script form too.
//!
//! ## Validate Before Writing
//!
//! The converter parses and checks the whole input before the destination is
//! opened, so a bad input never clobbers a good output. Writes themselves are
//! plain overwrites, not write-and-rename.

pub mod cli;
pub mod config;
pub mod convert;
pub mod manifest;
pub mod output;
pub mod script;

#[cfg(test)]
pub(crate) mod test_helpers;
