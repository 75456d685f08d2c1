//! # Inga Extractor
//!
//! Rule-based extraction of explicit causal relations ("X because of Y")
//! from Japanese prose.
//!
//! For every causal clue expression found in a sentence ("ため、", "により",
//! "から、", ...) the extractor uses the sentence's dependency chunks to cut
//! out the **basis** (cause), the **result** (effect) and an optional
//! **subject**, and labels the construction with one of five patterns.
//!
//! ## Architecture
//!
//! ```text
//! Document (one sentence per line)
//!     │
//!     ├──> DependencyParser → Chunk[]
//!     │
//!     ├──> Clue Locator (overlap-aware counts)
//!     │      └─ Core Chunk Resolver (chunks ending with the clue)
//!     │
//!     ├──> Classifier
//!     │      ├─ A  basis, clue, result
//!     │      ├─ B  subject, basis, clue, result
//!     │      ├─ C  "…のは、 basis ため。"
//!     │      ├─ D  "basis ためだ。" explaining the context
//!     │      └─ E  "そのため、 result" resolved against the context
//!     │
//!     └──> Causal[] (anaphora context threaded sentence to sentence)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use inga_extractor::{causal_expression, core_ids, Lexicon, Pattern};
//! use inga_cabocha::parse_lattice;
//!
//! let lattice = "\
//! * 0 1D 0/1 0.0\n円高\t名詞,一般\nの\t助詞,連体化\n\
//! * 1 3D 0/1 0.0\nため\t名詞,非自立\n、\t記号,読点\n\
//! * 2 3D 0/1 0.0\n不況\t名詞,一般\nに\t助詞,格助詞,一般\n\
//! * 3 -1D 0/1 0.0\nなっ\t動詞,自立\nた\t助動詞\n。\t記号,句点\nEOS\n";
//! let chunks = parse_lattice(lattice).unwrap();
//! let lexicon = Lexicon::builtin();
//!
//! let core = core_ids(&chunks, "ため、")[0];
//! let candidate = causal_expression(&lexicon, &chunks, "ため、", core, "円高のため、不況になった。", "");
//! assert_eq!(candidate.basis, "円高");
//! assert_eq!(candidate.result, "不況になった。");
//! assert_eq!(candidate.pattern, Some(Pattern::A));
//! ```

mod causal;
mod classifier;
mod config;
mod error;
mod extractor;
mod lexicon;
mod locator;
mod normalize;
mod oracle;
mod span;

pub use causal::{Candidate, Causal, Pattern};
pub use classifier::{causal_expression, pattern_c_flag};
pub use config::{AnaphoraMode, ExtractorConfig};
pub use error::{ExtractError, Result};
pub use extractor::{AnaphoraSlot, Extractor};
pub use lexicon::{ClueEntry, ClueKind, ClueTable, DemonstrativeSet, Lexicon};
pub use locator::including_clues;
pub use normalize::{remove_koto, remove_particle};
pub use oracle::{CandidateKey, ScoringOracle, SvmScores};
pub use span::{basis, core_ids, koto_result, result_np, result_vp, subject};
