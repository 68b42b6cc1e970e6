//! Definitions engine core: extraction, lookup and bulk marking
//!
//! Definitions live in a markdown document (default name `Definitions`), one
//! per line: `Alias, Other Alias: definition text`. Marked terms elsewhere
//! in the vault are inline code spans wrapped in `%`, e.g. `` `%alias%` ``.

pub mod extractor;
pub mod map;
pub mod marker;
pub mod resolver;

pub use extractor::{Document, ScanOutcome, extract_definitions, parse_definition_line, scan};
pub use map::DefinitionMap;
pub use marker::{copy_path, mark_terms, unmark_terms};
pub use resolver::{Lookup, resolve};
