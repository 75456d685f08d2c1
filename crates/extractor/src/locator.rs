use crate::lexicon::ClueTable;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct Occurrence {
    start: usize,
    end: usize,
    entry: usize,
}

impl Occurrence {
    const fn len(self) -> usize {
        self.end - self.start
    }

    const fn within(self, other: Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }
}

/// Count the occurrences of every clue in `sentence`.
///
/// Every clue of the table appears in the result, unmatched ones with 0.
/// An occurrence lying entirely inside a longer credited occurrence is not
/// counted, so "を背景に" inside "を背景に、" or "ため、" inside "そのため、"
/// is credited to the longer clue only.
pub fn including_clues(sentence: &str, table: &ClueTable) -> HashMap<String, usize> {
    let entries = table.entries();
    let mut occurrences: Vec<Occurrence> = entries
        .iter()
        .enumerate()
        .flat_map(|(entry, clue)| {
            sentence
                .match_indices(clue.text.as_str())
                .map(move |(start, text)| Occurrence {
                    start,
                    end: start + text.len(),
                    entry,
                })
        })
        .collect();

    occurrences.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| a.start.cmp(&b.start))
            .then_with(|| a.entry.cmp(&b.entry))
    });

    let mut counts = vec![0usize; entries.len()];
    let mut credited: Vec<Occurrence> = Vec::new();
    for occ in occurrences {
        if credited.iter().any(|c| occ.within(*c)) {
            continue;
        }
        counts[occ.entry] += 1;
        credited.push(occ);
    }

    entries
        .iter()
        .zip(counts)
        .map(|(entry, count)| (entry.text.clone(), count))
        .collect()
}
