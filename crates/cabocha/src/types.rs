/// Coarse part-of-speech labels (IPADIC) the extractor inspects
pub mod pos {
    pub const NOUN: &str = "名詞";
    pub const PARTICLE: &str = "助詞";
    pub const SYMBOL: &str = "記号";
    pub const ADNOMINAL: &str = "連体詞";

    pub const CASE_PARTICLE: &str = "格助詞";
    pub const QUOTATIVE: &str = "引用";
    pub const GENITIVE: &str = "連体化";
    pub const DEPENDENT: &str = "非自立";
    pub const PRONOUN: &str = "代名詞";
}

/// One morpheme of a chunk, as emitted on a lattice token line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// Surface form
    pub surface: String,

    /// Coarse part of speech (first feature column)
    pub pos: String,

    /// POS subcategories (feature columns 2-4, `*` dropped)
    pub pos_detail: Vec<String>,

    /// Dictionary form if known
    pub base: Option<String>,

    /// Katakana reading if known
    pub reading: Option<String>,
}

impl Morpheme {
    /// Build a morpheme from its surface and the comma separated feature column
    pub fn new(surface: impl Into<String>, features: &str) -> Self {
        let fields: Vec<&str> = features.split(',').collect();
        let field = |idx: usize| {
            fields
                .get(idx)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty() && *s != "*")
                .map(str::to_string)
        };

        Self {
            surface: surface.into(),
            pos: field(0).unwrap_or_default(),
            pos_detail: (1..4).filter_map(field).collect(),
            base: field(6),
            reading: field(7),
        }
    }

    #[must_use]
    pub fn has_detail(&self, detail: &str) -> bool {
        self.pos_detail.iter().any(|d| d == detail)
    }

    #[must_use]
    pub fn is_noun(&self) -> bool {
        self.pos == pos::NOUN
    }

    #[must_use]
    pub fn is_particle(&self) -> bool {
        self.pos == pos::PARTICLE
    }

    #[must_use]
    pub fn is_symbol(&self) -> bool {
        self.pos == pos::SYMBOL
    }

    /// Quotative case particle "と" (格助詞,引用)
    #[must_use]
    pub fn is_quotative(&self) -> bool {
        self.is_particle() && self.has_detail(pos::CASE_PARTICLE) && self.has_detail(pos::QUOTATIVE)
    }

    /// Genitive "の" linking a noun to the next noun (連体化)
    #[must_use]
    pub fn is_genitive(&self) -> bool {
        self.is_particle() && self.has_detail(pos::GENITIVE)
    }

    /// Adnominal word such as この, その, こうした (連体詞)
    #[must_use]
    pub fn is_adnominal(&self) -> bool {
        self.pos == pos::ADNOMINAL
    }

    /// Pronoun such as これ, それ (名詞,代名詞)
    #[must_use]
    pub fn is_pronoun(&self) -> bool {
        self.is_noun() && self.has_detail(pos::PRONOUN)
    }

    /// Formal noun such as もの, こと, の, よう
    #[must_use]
    pub fn is_formal_noun(&self) -> bool {
        self.pos == pos::NOUN && self.has_detail(pos::DEPENDENT)
    }
}

/// A dependency unit (bunsetsu) of one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position in the sentence (0-based)
    pub index: usize,

    /// Index of the chunk this one modifies; `None` for the root
    pub link: Option<usize>,

    /// Head morpheme position inside the chunk
    pub head: usize,

    /// Function-word morpheme position inside the chunk
    pub func: usize,

    /// Morphemes in surface order
    pub morphemes: Vec<Morpheme>,

    surface: String,
}

impl Chunk {
    /// Create a chunk; the surface is the concatenation of its morphemes
    #[must_use]
    pub fn new(
        index: usize,
        link: Option<usize>,
        head: usize,
        func: usize,
        morphemes: Vec<Morpheme>,
    ) -> Self {
        let surface = morphemes.iter().map(|m| m.surface.as_str()).collect();
        Self {
            index,
            link,
            head,
            func,
            morphemes,
            surface,
        }
    }

    /// Surface text including trailing particles and punctuation
    #[must_use]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    #[must_use]
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.surface.ends_with(suffix)
    }

    /// True for the sentence-final chunk that modifies nothing
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.link.is_none()
    }

    #[must_use]
    pub fn last_morpheme(&self) -> Option<&Morpheme> {
        self.morphemes.last()
    }

    /// Coarse POS of the head word
    #[must_use]
    pub fn head_pos(&self) -> &str {
        self.morphemes
            .get(self.head)
            .or_else(|| self.morphemes.first())
            .map_or("", |m| m.pos.as_str())
    }
}

/// True if following dependency links from `from` reaches `to`.
///
/// Links always point rightwards in well-formed parses, but the walk is
/// bounded by the sentence length so a malformed cycle cannot hang it.
#[must_use]
pub fn depends_on(chunks: &[Chunk], from: usize, to: usize) -> bool {
    let mut current = from;
    for _ in 0..chunks.len() {
        let Some(next) = chunks.get(current).and_then(|c| c.link) else {
            return false;
        };
        if next == to {
            return true;
        }
        current = next;
    }
    false
}

/// Concatenate the surfaces of a run of chunks
#[must_use]
pub fn join_surfaces(chunks: &[Chunk]) -> String {
    chunks.iter().map(Chunk::surface).collect()
}
