use inga_cabocha::{Chunk, DependencyParser, StaticParser};
use inga_extractor::{
    basis, causal_expression, core_ids, including_clues, koto_result, pattern_c_flag,
    remove_koto, remove_particle, result_np, result_vp, subject, Candidate, ClueTable, Lexicon,
    Pattern,
};
use pretty_assertions::assert_eq;

const FIXTURES: &str = include_str!("fixtures/sentences.cabocha");

const ENDAKA: &str = "円高のため、不況になった。";
const ENDAKA_TWICE: &str = "円高のため、不況になったため、損した。";
const MITSUMORI: &str = "十分なデータの蓄積がなく、合理的な見積もりが困難であるため、権利行使期間の中間点において行使されるものと想定して見積もっております。";
const SHOKUHIN: &str = "食品業界で、景気後退に伴う消費マインドの冷え込みや、生活防衛による購買単価の落ち込みなどにより企業業績の後退を余儀なくされ、企業間競争はますます熾烈さを増してまいりました。";
const SEIKA: &str = "製菓原材料類は、製菓・製パン向けの販売が総じて低調に推移したことから、各種の製菓用食材や糖置換フルーツ、栗製品やその他の仕入商品が販売減となりました。";
const EIKYOU: &str = "円高による不況の影響で、買い物客が激減。";
const FUKYOU: &str = "円高による不況で、買い物客が激減。";
const NAMATAKE: &str = "国内の生茸の販売は、消費全体が収縮する中で茸の需要も低迷し、価格は平年を下回る厳しい相場で推移したことで、販売量、販売価格ともに前年を割り込む結果となりました。";
const BUSH: &str = "ブッシュ大統領が二十九日の一般教書演説で雇用を最重視した経済対策を強調したのも、景気回復を確実なものにするには、雇用悪化に歯止めをかける必要があると判断したためだ。";
const NICHIGIN: &str = "日銀が景気の先行きに慎重なのは、設備投資調整や公共事業の拡大などプラス要因がある半面、雇用調整や円高などマイナス要因も目立ち、「両者がせめぎ合っているのが現状」と見ているためだ。";
const HAITOU: &str = "配当原資が不足するのは、前期末の有価証券評価差額金が十七億円強の含み損となったため。";
const KONO_KEKKA: &str = "この結果による不況の影響で、買い物客が激減。";
const KOUKYOU: &str = "公共工事と住宅建設が高水準を維持、個人消費も堅調なうえ、設備投資が前年度を上回る見通しとなっているためだ。";
const SONOTAME: &str = "そのため、平成２３年３月期第１四半期の経営成績（累計）及び対前年同四半期増減率については記載しておりません。";
const SONOTA: &str = "その他の要因により、売上が減少した。";
const KOREMADE: &str = "これまでの努力により、売上が増加した。";
const SORE_GA: &str = "それが原因で、売上が減少した。";
const SHIMOHANKI: &str = "下半期では、上半期に導入を予定していながら諸事情により計画が遅れた案件の成約が見込めますので、売上高に関しましては上半期の不足を補い、期初の通期予想を達成するものと思われますが、利益に関しましては、利益率が比較的低い低価格ツールの占める割合が増えていることが影響し若干減少する見通しです。";

fn parse(sentence: &str) -> Vec<Chunk> {
    let parser = StaticParser::from_lattice_document(FIXTURES).unwrap();
    parser.parse(sentence).unwrap()
}

fn classify(sentence: &str, clue: &str, context: &str) -> Candidate {
    let chunks = parse(sentence);
    let core = core_ids(&chunks, clue)[0];
    causal_expression(&Lexicon::builtin(), &chunks, clue, core, sentence, context)
}

#[test]
fn fixtures_cover_every_sentence() {
    let parser = StaticParser::from_lattice_document(FIXTURES).unwrap();
    assert_eq!(parser.len(), 19);
    for sentence in [
        ENDAKA, ENDAKA_TWICE, MITSUMORI, SHOKUHIN, SEIKA, EIKYOU, FUKYOU, NAMATAKE, BUSH,
        NICHIGIN, HAITOU, KONO_KEKKA, KOUKYOU, SONOTAME, SHIMOHANKI, SONOTA, KOREMADE, SORE_GA,
    ] {
        assert!(parser.parse(sentence).is_ok(), "missing lattice for {sentence}");
    }
}

#[test]
fn test_remove_koto() {
    assert_eq!(remove_koto("ほげほげの"), "ほげほげ");
    assert_eq!(remove_koto("ほげほげことのなど等"), "ほげほげ");
    assert_eq!(remove_koto("ほげほげ"), "ほげほげ");
    assert_eq!(remove_koto("円高が進んだこと"), "円高が進んだ");
    assert_eq!(remove_koto("円高が進んだことなど"), "円高が進んだ");
    assert_eq!(remove_koto("円高が進んだの"), "円高が進んだ");
    assert_eq!(remove_koto("新製品等"), "新製品");
    assert_eq!(remove_koto("確実なもの"), "確実なもの");
    assert_eq!(remove_koto("円高"), "円高");
    assert_eq!(remove_koto("こと"), "こと");
    assert_eq!(remove_koto(""), "");
}

#[test]
fn test_include_demon() {
    let lexicon = Lexicon::builtin();
    assert!(lexicon.include_demon("そのため"));
    assert!(lexicon.include_demon("それで"));
    assert!(!lexicon.include_demon("私それで"));
    assert!(!lexicon.include_demon("あたなのために"));
    assert!(lexicon.include_demon("その結果"));
    assert!(lexicon.include_demon("これにより"));
    assert!(lexicon.include_demon("こうした状況"));
    assert!(!lexicon.include_demon("円高"));
    assert!(!lexicon.include_demon("結果その"));
    assert!(!lexicon.include_demon(""));
}

#[test]
fn test_core_ids() {
    assert_eq!(core_ids(&parse(ENDAKA), "ため、"), vec![1]);
    assert_eq!(core_ids(&parse(ENDAKA_TWICE), "ため、"), vec![1, 4]);
    assert_eq!(core_ids(&parse(MITSUMORI), "ため、"), vec![7]);
    assert_eq!(core_ids(&parse(SHOKUHIN), "により"), vec![7]);
    assert_eq!(core_ids(&parse(NAMATAKE), "で、"), vec![15]);
    assert_eq!(core_ids(&parse(SHIMOHANKI), "で、"), vec![9]);
    assert!(core_ids(&parse(ENDAKA), "から、").is_empty());
}

#[test]
fn test_remove_particle() {
    let chunks = parse(ENDAKA_TWICE);
    let stripped: Vec<String> = chunks.iter().map(remove_particle).collect();
    assert_eq!(
        stripped,
        vec!["円高", "ため", "不況", "なった", "ため", "損した。"]
    );
}

#[test]
fn test_basis() {
    let chunks = parse(MITSUMORI);
    assert_eq!(
        basis(&chunks, "ため、", 7),
        "十分なデータの蓄積がなく、合理的な見積もりが困難である"
    );
    assert_eq!(basis(&chunks, "ため、", 1), "");

    let chunks = parse(SHIMOHANKI);
    assert_eq!(
        basis(&chunks, "で、", 9),
        "下半期では、上半期に導入を予定していながら諸事情により計画が遅れた案件の成約が見込めます"
    );
}

#[test]
fn test_result_vp() {
    let chunks = parse(MITSUMORI);
    let core = core_ids(&chunks, "ため、")[0];
    assert_eq!(
        result_vp(&chunks, "ため、", core),
        "権利行使期間の中間点において行使される"
    );

    let chunks = parse(SHOKUHIN);
    assert_eq!(
        result_vp(&chunks, "により", 7),
        "企業業績の後退を余儀なくされ"
    );

    let chunks = parse(SHIMOHANKI);
    assert_eq!(
        result_vp(&chunks, "で、", 9),
        "売上高に関しましては上半期の不足を補い、期初の通期予想を達成する"
    );
}

#[test]
fn test_result_np() {
    assert_eq!(result_np(&parse(EIKYOU), 0), "不況の影響");
    assert_eq!(result_np(&parse(FUKYOU), 0), "不況");
}

#[test]
fn test_subject() {
    assert_eq!(subject(&parse(SHOKUHIN), 7), "食品業界で、");
    assert_eq!(subject(&parse(SEIKA), 6), "製菓原材料類は、");
    assert_eq!(subject(&parse(NAMATAKE), 15), "国内の生茸の販売は、");
    assert_eq!(subject(&parse(ENDAKA), 1), "");
}

#[test]
fn test_pattern_c_flag() {
    let chunks = parse(BUSH);
    let core = core_ids(&chunks, "ためだ。")[0];
    assert_eq!(pattern_c_flag(&chunks, core), Some(6));

    let chunks = parse(NICHIGIN);
    let core = core_ids(&chunks, "ためだ。")[0];
    assert_eq!(pattern_c_flag(&chunks, core), Some(3));

    let chunks = parse(KOUKYOU);
    let core = core_ids(&chunks, "ためだ。")[0];
    assert_eq!(pattern_c_flag(&chunks, core), None);
}

#[test]
fn test_koto_result() {
    assert_eq!(
        koto_result(&parse(BUSH), 6),
        "ブッシュ大統領が二十九日の一般教書演説で雇用を最重視した経済対策を強調したのも、"
    );
    assert_eq!(
        koto_result(&parse(NICHIGIN), 3),
        "日銀が景気の先行きに慎重なのは、"
    );
}

#[test]
fn test_including_clues() {
    let table = ClueTable::builtin();

    let counts = including_clues("円高を背景に、景気が悪化した。", &table);
    assert_eq!(counts["を背景に、"], 1);
    assert_eq!(counts["を背景に"], 0);

    let counts = including_clues("円高を背景に景気が悪化した。", &table);
    assert_eq!(counts["を背景に、"], 0);
    assert_eq!(counts["を背景に"], 1);

    let counts = including_clues(SONOTAME, &table);
    assert_eq!(counts["そのため、"], 1);
    assert_eq!(counts["ため、"], 0);

    let counts = including_clues(ENDAKA_TWICE, &table);
    assert_eq!(counts["ため、"], 2);
    assert_eq!(counts.len(), table.len());
}

#[test]
fn pattern_a_with_adnominal_clue() {
    assert_eq!(
        classify(EIKYOU, "による", ""),
        Candidate::new("円高", "不況の影響", "", Pattern::A)
    );
}

#[test]
fn pattern_a_with_connective_clue() {
    assert_eq!(
        classify(MITSUMORI, "ため、", ""),
        Candidate::new(
            "十分なデータの蓄積がなく、合理的な見積もりが困難である",
            "権利行使期間の中間点において行使される",
            "",
            Pattern::A
        )
    );
    assert_eq!(
        classify(SHIMOHANKI, "で、", ""),
        Candidate::new(
            "下半期では、上半期に導入を予定していながら諸事情により計画が遅れた案件の成約が見込めます",
            "売上高に関しましては上半期の不足を補い、期初の通期予想を達成する",
            "",
            Pattern::A
        )
    );
}

#[test]
fn demonstrative_basis_without_context_is_rejected() {
    assert!(classify(KONO_KEKKA, "による", "").is_rejected());
    assert_eq!(
        classify(KONO_KEKKA, "による", "円高が進んだ"),
        Candidate::new("円高が進んだ", "不況の影響", "", Pattern::E)
    );
}

#[test]
fn words_sharing_a_demonstrative_stem_keep_their_basis() {
    let sonota = Candidate::new("その他の要因", "売上が減少した。", "", Pattern::A);
    assert_eq!(classify(SONOTA, "により、", ""), sonota);
    assert_eq!(classify(SONOTA, "により、", "円高が進んだ"), sonota);

    let koremade = Candidate::new("これまでの努力", "売上が増加した。", "", Pattern::A);
    assert_eq!(classify(KOREMADE, "により、", ""), koremade);
    assert_eq!(classify(KOREMADE, "により、", "円高が進んだ"), koremade);
}

#[test]
fn demonstrative_pronoun_basis_resolves_against_the_context() {
    assert!(classify(SORE_GA, "で、", "").is_rejected());
    assert_eq!(
        classify(SORE_GA, "で、", "円高が進んだ"),
        Candidate::new("円高が進んだ", "売上が減少した。", "", Pattern::E)
    );
}

#[test]
fn leading_frame_is_a_topic_not_a_cause() {
    assert!(classify(SHOKUHIN, "で、", "").is_rejected());
    assert!(classify(SHOKUHIN, "で、", "円高が進んだ").is_rejected());
}

#[test]
fn pattern_b_carries_the_topic() {
    assert_eq!(
        classify(SEIKA, "から、", ""),
        Candidate::new(
            "製菓・製パン向けの販売が総じて低調に推移した",
            "各種の製菓用食材や糖置換フルーツ、栗製品やその他の仕入商品が販売減となりました。",
            "製菓原材料類は、",
            Pattern::B
        )
    );
    assert_eq!(
        classify(NAMATAKE, "で、", ""),
        Candidate::new(
            "消費全体が収縮する中で茸の需要も低迷し、価格は平年を下回る厳しい相場で推移した",
            "販売量、販売価格ともに前年を割り込む結果となりました。",
            "国内の生茸の販売は、",
            Pattern::B
        )
    );
    assert_eq!(
        classify(SHOKUHIN, "により", ""),
        Candidate::new(
            "景気後退に伴う消費マインドの冷え込みや、生活防衛による購買単価の落ち込み",
            "企業業績の後退を余儀なくされ",
            "食品業界で、",
            Pattern::B
        )
    );
}

#[test]
fn pattern_c_takes_the_topic_clause_as_result() {
    assert_eq!(
        classify(HAITOU, "ため。", ""),
        Candidate::new(
            "前期末の有価証券評価差額金が十七億円強の含み損となった",
            "配当原資が不足するのは、",
            "",
            Pattern::C
        )
    );
    assert_eq!(
        classify(BUSH, "ためだ。", ""),
        Candidate::new(
            "景気回復を確実なものにするには、雇用悪化に歯止めをかける必要があると判断した",
            "ブッシュ大統領が二十九日の一般教書演説で雇用を最重視した経済対策を強調したのも、",
            "",
            Pattern::C
        )
    );
    assert_eq!(
        classify(NICHIGIN, "ためだ。", ""),
        Candidate::new(
            "設備投資調整や公共事業の拡大などプラス要因がある半面、雇用調整や円高などマイナス要因も目立ち、「両者がせめぎ合っているのが現状」と見ている",
            "日銀が景気の先行きに慎重なのは、",
            "",
            Pattern::C
        )
    );
}

#[test]
fn pattern_d_explains_the_context() {
    assert_eq!(
        classify(KOUKYOU, "ためだ。", "TTT"),
        Candidate::new(
            "公共工事と住宅建設が高水準を維持、個人消費も堅調なうえ、設備投資が前年度を上回る見通しとなっている",
            "TTT",
            "",
            Pattern::D
        )
    );
    assert!(classify(KOUKYOU, "ためだ。", "").is_rejected());
}

#[test]
fn pattern_e_resolves_against_the_context() {
    assert_eq!(
        classify(SONOTAME, "そのため、", "TTT"),
        Candidate::new(
            "TTT",
            "平成２３年３月期第１四半期の経営成績（累計）及び対前年同四半期増減率については記載しておりません。",
            "",
            Pattern::E
        )
    );
    assert!(classify(SONOTAME, "そのため、", "").is_rejected());
}
