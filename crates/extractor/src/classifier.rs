use crate::causal::{Candidate, Pattern};
use crate::lexicon::{ClueKind, Lexicon};
use crate::span::{
    basis_span, is_frame, koto_result, result_np, result_vp, subject_before, BasisSpan,
};
use inga_cabocha::{depends_on, Chunk};

/// Endings of a nominalized topic clause ("…のは、") that a sentence-final
/// clue explains
const KOTO_TOPIC_MARKERS: &[&str] = &["のは、", "のも、", "のは", "のも"];

/// Index of the nominalized topic chunk ("…のは、") nearest before `core`
/// whose dependency path reaches `core`
pub fn pattern_c_flag(chunks: &[Chunk], core: usize) -> Option<usize> {
    (0..core.min(chunks.len())).rev().find(|&idx| {
        KOTO_TOPIC_MARKERS
            .iter()
            .any(|m| chunks[idx].ends_with(m))
            && depends_on(chunks, idx, core)
    })
}

/// Classify one clue occurrence and cut its spans.
///
/// `context` is the text an anaphoric occurrence resolves against: the
/// basis for a leading demonstrative (pattern E) or the result for a
/// sentence-final explanation (pattern D). An occurrence that needs it
/// while it is empty is rejected.
pub fn causal_expression(
    lexicon: &Lexicon,
    chunks: &[Chunk],
    clue: &str,
    core: usize,
    sentence: &str,
    context: &str,
) -> Candidate {
    let Some(chunk) = chunks
        .get(core)
        .filter(|c| !clue.is_empty() && c.ends_with(clue))
    else {
        log::debug!("reject `{clue}`@{core}: chunk does not carry the clue");
        return Candidate::rejected();
    };

    let kind = lexicon.clues.kind(clue);
    if kind == ClueKind::Conjunctive || lexicon.include_demon(clue) {
        return anaphoric(chunks, clue, core, context);
    }

    let sentence_final =
        kind == ClueKind::Nominal || (chunk.is_root() && sentence.trim_end().ends_with(clue));
    if sentence_final {
        return explanation(lexicon, chunks, clue, core, context);
    }

    if is_frame(chunks, core) {
        log::debug!("reject `{clue}`@{core}: topic frame");
        return Candidate::rejected();
    }

    let Some(basis) = basis_span(chunks, clue, core, 0) else {
        return Candidate::rejected();
    };
    let result = match kind {
        ClueKind::Adnominal => result_np(chunks, core),
        _ => result_vp(chunks, clue, core),
    };

    if demonstrative_basis(lexicon, chunks, &basis) {
        if context.is_empty() || result.is_empty() {
            log::debug!("reject `{clue}`@{core}: demonstrative basis without antecedent");
            return Candidate::rejected();
        }
        return Candidate::new(context, result, "", Pattern::E);
    }

    if basis.text.is_empty() || result.is_empty() {
        log::debug!("reject `{clue}`@{core}: empty basis or result");
        return Candidate::rejected();
    }

    let subj = subject_before(chunks, core, basis.start);
    let pattern = if subj.is_empty() {
        Pattern::A
    } else {
        Pattern::B
    };
    Candidate::new(basis.text, result, subj, pattern)
}

/// True when the basis clause opens with a demonstrative word ("この結果")
fn demonstrative_basis(lexicon: &Lexicon, chunks: &[Chunk], basis: &BasisSpan) -> bool {
    !basis.raw.is_empty()
        && chunks
            .get(basis.start)
            .is_some_and(|chunk| lexicon.demonstrative_head(chunk))
}

/// "そのため、…": the basis is the context, the result follows the clue
fn anaphoric(chunks: &[Chunk], clue: &str, core: usize, context: &str) -> Candidate {
    if context.is_empty() {
        log::debug!("reject `{clue}`@{core}: no antecedent for demonstrative clue");
        return Candidate::rejected();
    }
    let result = result_vp(chunks, clue, core);
    if result.is_empty() {
        return Candidate::rejected();
    }
    Candidate::new(context, result, "", Pattern::E)
}

/// "…のは、…ため。" (C) or "…ためだ。" explaining the context (D)
fn explanation(
    lexicon: &Lexicon,
    chunks: &[Chunk],
    clue: &str,
    core: usize,
    context: &str,
) -> Candidate {
    if let Some(koto) = pattern_c_flag(chunks, core) {
        let Some(basis) = basis_span(chunks, clue, core, koto + 1) else {
            return Candidate::rejected();
        };
        if basis.text.is_empty() {
            return Candidate::rejected();
        }
        return Candidate::new(basis.text, koto_result(chunks, koto), "", Pattern::C);
    }

    let Some(basis) = basis_span(chunks, clue, core, 0) else {
        return Candidate::rejected();
    };
    if basis.text.is_empty() || context.is_empty() || demonstrative_basis(lexicon, chunks, &basis)
    {
        log::debug!("reject `{clue}`@{core}: explanation without resolvable result");
        return Candidate::rejected();
    }
    Candidate::new(basis.text, context, "", Pattern::D)
}
