//! # Inga CaboCha
//!
//! Dependency-chunk model for Japanese sentences and the collaborator that
//! produces it.
//!
//! ## Architecture
//!
//! ```text
//! Sentence text
//!     │
//!     ├──> DependencyParser
//!     │      ├─ CabochaCommand (spawns `cabocha -f1`)
//!     │      └─ StaticParser   (pre-parsed lattices)
//!     │
//!     ├──> Lattice reader
//!     │      ├─ `* id linkD head/func score` chunk headers
//!     │      └─ `surface<TAB>features` token lines
//!     │
//!     └──> Chunk[] (index, link, morphemes, surface)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use inga_cabocha::{parse_lattice, depends_on};
//!
//! let lattice = "* 0 1D 0/1 0.0\n円高\t名詞,一般\nの\t助詞,連体化\n\
//!                * 1 -1D 0/1 0.0\nため\t名詞,非自立\n。\t記号,句点\nEOS\n";
//! let chunks = parse_lattice(lattice).unwrap();
//! assert_eq!(chunks[0].surface(), "円高の");
//! assert!(depends_on(&chunks, 0, 1));
//! ```

mod config;
mod error;
mod lattice;
mod parser;
mod types;

pub use config::{CabochaConfig, CABOCHA_ENV};
pub use error::{CabochaError, Result};
pub use lattice::{parse_lattice, parse_lattice_document};
pub use parser::{CabochaCommand, DependencyParser, StaticParser};
pub use types::{depends_on, join_surfaces, pos, Chunk, Morpheme};
