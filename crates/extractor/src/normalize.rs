use inga_cabocha::Chunk;

/// Nominalizing suffixes peeled off the end of a clause
const KOTO_SUFFIXES: &[&str] = &["こと", "など", "等", "の"];

/// Words ending in a suffix character that must stay intact
const KOTO_PROTECTED: &[&str] = &["もの", "その", "この"];

/// Surface of `chunk` without its trailing punctuation and one trailing
/// particle. The sentence-final chunk is returned verbatim.
pub fn remove_particle(chunk: &Chunk) -> String {
    if chunk.is_root() {
        return chunk.surface().to_string();
    }

    let morphemes = &chunk.morphemes;
    let mut end = morphemes.len();
    while end > 0 && morphemes[end - 1].is_symbol() {
        end -= 1;
    }
    if end > 1 && morphemes[end - 1].is_particle() {
        end -= 1;
    }

    morphemes[..end].iter().map(|m| m.surface.as_str()).collect()
}

/// Strip a trailing "…こと" nominalizer cluster ("の", "など", "等", "こと"
/// in any stacking) down to the bare clause
pub fn remove_koto(text: &str) -> String {
    let mut current = text;
    loop {
        if KOTO_PROTECTED.iter().any(|p| current.ends_with(p)) {
            break;
        }
        let Some(stripped) = KOTO_SUFFIXES
            .iter()
            .find_map(|suffix| current.strip_suffix(suffix))
        else {
            break;
        };
        if stripped.is_empty() {
            break;
        }
        current = stripped;
    }
    current.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use inga_cabocha::Morpheme;
    use pretty_assertions::assert_eq;

    fn chunk(link: Option<usize>, parts: &[(&str, &str)]) -> Chunk {
        Chunk::new(
            0,
            link,
            0,
            0,
            parts.iter().map(|(s, f)| Morpheme::new(*s, f)).collect(),
        )
    }

    #[test]
    fn remove_koto_strips_nominalizers() {
        assert_eq!(remove_koto("ほげほげの"), "ほげほげ");
        assert_eq!(remove_koto("ほげほげなどの"), "ほげほげ");
        assert_eq!(remove_koto("ほげほげ"), "ほげほげ");
        assert_eq!(remove_koto("ほげほげことのなど等"), "ほげほげ");
    }

    #[test]
    fn remove_koto_keeps_formal_noun_mono() {
        assert_eq!(remove_koto("確実なもの"), "確実なもの");
        assert_eq!(remove_koto("こと"), "こと");
        assert_eq!(remove_koto("その"), "その");
    }

    #[test]
    fn remove_particle_strips_punctuation_and_one_particle() {
        let c = chunk(Some(1), &[("円高", "名詞,一般"), ("の", "助詞,連体化")]);
        assert_eq!(remove_particle(&c), "円高");

        let c = chunk(Some(3), &[("ため", "名詞,非自立"), ("、", "記号,読点")]);
        assert_eq!(remove_particle(&c), "ため");

        let c = chunk(Some(3), &[("なっ", "動詞,自立"), ("た", "助動詞")]);
        assert_eq!(remove_particle(&c), "なった");

        let c = chunk(
            Some(9),
            &[("関し", "動詞,自立"), ("まし", "助動詞"), ("て", "助詞,接続助詞"), ("は", "助詞,係助詞")],
        );
        assert_eq!(remove_particle(&c), "関しまして");
    }

    #[test]
    fn remove_particle_keeps_sentence_final_chunk() {
        let c = chunk(None, &[("損", "名詞,サ変接続"), ("し", "動詞,自立"), ("た", "助動詞"), ("。", "記号,句点")]);
        assert_eq!(remove_particle(&c), "損した。");
    }

    #[test]
    fn remove_particle_never_empties_a_bare_particle_chunk() {
        let c = chunk(Some(1), &[("も", "助詞,係助詞")]);
        assert_eq!(remove_particle(&c), "も");
    }
}
