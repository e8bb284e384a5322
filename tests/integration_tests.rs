//! Integration tests for pangram search.
//!
//! These tests run the full pipeline on the built-in animal list and on small
//! hand-built word sets, checking exact output as well as the properties every
//! result must satisfy.

use std::collections::HashSet;

use pangram_search::analysis::analyze_letters;
use pangram_search::core::{Alphabet, LetterSet, Word};
use pangram_search::search::{
    PangramSearch, Pangrams, PruneMode, SearchConfig, SearchObserver, SearchState, find_pangrams,
};
use pangram_search::wordlists::ANIMALS;
use pangram_search::wordlists::loader::{parse_word_list, words_from_slice};

/// Every pangram the animal list yields at depth 6, in result order
const ANIMAL_PANGRAMS: &[&str] = &[
    "(41) BADGER, CHIPMUNK, JELLYFISH, OX, QUETZAL, WOLVERINE",
    "(42) BADGER, CHIPMUNK, FOX, JELLYFISH, QUETZAL, WOLVERINE",
    "(42) CHIMPANZEE, FROG, JACKRABBIT, LYNX, SQUID, WOLVERINE",
    "(42) CHIMPANZEE, FROG, JACKRABBIT, ORYX, SQUID, WOLVERINE",
    "(43) BADGER, CHIPMUNK, IBEX, JELLYFISH, QUETZAL, WOLVERINE",
    "(43) BADGER, CHIPMUNK, JELLYFISH, LYNX, QUETZAL, WOLVERINE",
    "(43) BADGER, CHIPMUNK, JELLYFISH, ORYX, QUETZAL, WOLVERINE",
    "(43) CHIMPANZEE, FROG, HYRAX, JACKRABBIT, SQUID, WOLVERINE",
    "(44) ADDAX, BADGER, CHIPMUNK, JELLYFISH, QUETZAL, WOLVERINE",
    "(44) BADGER, CHIPMUNK, HYRAX, JELLYFISH, QUETZAL, WOLVERINE",
    "(45) CHIMPANZEE, DRAGONFLY, JACKRABBIT, OX, SQUID, WOLVERINE",
    "(45) CHIMPANZEE, GIRAFFE, JACKRABBIT, LYNX, SQUID, WOLVERINE",
    "(45) CHIMPANZEE, GIRAFFE, JACKRABBIT, ORYX, SQUID, WOLVERINE",
    "(45) CHIPMUNK, HEDGEHOG, IBEX, JELLYFISH, QUETZAL, WOLVERINE",
    "(46) AXOLOTL, BADGER, CHIPMUNK, JELLYFISH, QUETZAL, WOLVERINE",
    "(46) CHIMPANZEE, DRAGONFLY, FOX, JACKRABBIT, SQUID, WOLVERINE",
    "(46) CHIMPANZEE, GIRAFFE, HYRAX, JACKRABBIT, SQUID, WOLVERINE",
    "(46) CHIPMUNK, DRAGONFLY, IBEX, JELLYFISH, QUETZAL, WOLVERINE",
    "(46) KIPUNJI, LYNX, MACAQUE, TARDIGRADE, WOLVERINE, ZEBRAFISH",
    "(46) KIPUNJI, MACAQUE, ORYX, TARDIGRADE, WOLVERINE, ZEBRAFISH",
    "(47) AXOLOTL, BADGER, CHIMPANZEE, JELLYFISH, QUOKKA, WOLVERINE",
    "(47) CHIMPANZEE, DRAGONFLY, IBEX, JACKRABBIT, SQUID, WOLVERINE",
    "(47) CHIMPANZEE, DRAGONFLY, JACKRABBIT, LYNX, SQUID, WOLVERINE",
    "(47) CHIMPANZEE, DRAGONFLY, JACKRABBIT, ORYX, SQUID, WOLVERINE",
    "(47) CHIPMUNK, IBEX, JELLYFISH, QUETZAL, TARDIGRADE, WOLVERINE",
    "(47) DRAGONFLY, HIPPOPOTAMUS, IBEX, JACKAL, QUETZAL, WOLVERINE",
    "(47) HYRAX, KIPUNJI, MACAQUE, TARDIGRADE, WOLVERINE, ZEBRAFISH",
    "(48) AARDVARK, FLATWORM, GRASSHOPPER, JACKRABBIT, LYNX, QUETZAL",
    "(48) ADDAX, CHIMPANZEE, DRAGONFLY, JACKRABBIT, SQUID, WOLVERINE",
    "(48) AXOLOTL, DRAGONFLY, KIPUNJI, MACAQUE, WOLVERINE, ZEBRAFISH",
    "(48) CHIMPANZEE, DRAGONFLY, HYRAX, JACKRABBIT, SQUID, WOLVERINE",
    "(48) CHIMPANZEE, DRAGONFLY, JACKRABBIT, OX, SQUIRREL, WOLVERINE",
    "(48) CHIMPANZEE, IBEX, JELLYFISH, QUOKKA, TARDIGRADE, WOLVERINE",
    "(49) CHIMPANZEE, DRAGONFLY, FOX, JACKRABBIT, SQUIRREL, WOLVERINE",
    "(49) DRAGONFLY, HIPPOPOTAMUS, JACKRABBIT, OX, QUETZAL, WOLVERINE",
    "(50) AXOLOTL, CHIMPANZEE, DRAGONFLY, JACKRABBIT, SQUID, WOLVERINE",
    "(50) CHIMPANZEE, DRAGONFLY, IBEX, JACKRABBIT, SQUIRREL, WOLVERINE",
    "(50) CHIMPANZEE, DRAGONFLY, JACKRABBIT, LYNX, SQUIRREL, WOLVERINE",
    "(50) CHIMPANZEE, DRAGONFLY, JACKRABBIT, ORYX, SQUIRREL, WOLVERINE",
    "(50) DRAGONFLY, FOX, HIPPOPOTAMUS, JACKRABBIT, QUETZAL, WOLVERINE",
    "(51) ADDAX, CHIMPANZEE, DRAGONFLY, JACKRABBIT, SQUIRREL, WOLVERINE",
    "(51) CHIMPANZEE, DRAGONFLY, HYRAX, JACKRABBIT, SQUIRREL, WOLVERINE",
    "(51) DRAGONFLY, HIPPOPOTAMUS, IBEX, JACKRABBIT, QUETZAL, WOLVERINE",
    "(51) DRAGONFLY, HIPPOPOTAMUS, JACKRABBIT, LYNX, QUETZAL, WOLVERINE",
    "(51) DRAGONFLY, HIPPOPOTAMUS, JACKRABBIT, ORYX, QUETZAL, WOLVERINE",
    "(52) ADDAX, DRAGONFLY, HIPPOPOTAMUS, JACKRABBIT, QUETZAL, WOLVERINE",
    "(52) DRAGONFLY, HIPPOPOTAMUS, HYRAX, JACKRABBIT, QUETZAL, WOLVERINE",
    "(53) AXOLOTL, CHIMPANZEE, DRAGONFLY, JACKRABBIT, SQUIRREL, WOLVERINE",
    "(54) AXOLOTL, DRAGONFLY, HIPPOPOTAMUS, JACKRABBIT, QUETZAL, WOLVERINE",
];

fn words(texts: &[&str]) -> Vec<Word> {
    texts.iter().map(|&t| Word::new(t)).collect()
}

fn rendered(pangrams: &Pangrams) -> Vec<String> {
    pangrams.iter().map(ToString::to_string).collect()
}

/// Check the coverage, depth, uniqueness and ordering guarantees
fn assert_well_formed(pangrams: &Pangrams, alphabet: Alphabet, max_depth: usize) {
    let mut seen = HashSet::new();
    for solution in pangrams {
        let covered = solution
            .words()
            .iter()
            .fold(LetterSet::EMPTY, |acc, w| acc.union(LetterSet::from_word(w)));
        assert!(alphabet.is_covered_by(covered), "{solution} misses letters");
        assert!(solution.word_count() <= max_depth, "{solution} is too deep");
        assert!(
            solution.words().windows(2).all(|pair| pair[0] <= pair[1]),
            "{solution} words not sorted"
        );
        assert_eq!(
            solution.letter_count(),
            solution.words().iter().map(String::len).sum::<usize>()
        );
        assert!(seen.insert(solution.words().to_vec()), "{solution} repeated");
    }
    assert!(
        pangrams.as_slice().windows(2).all(|pair| pair[0] <= pair[1]),
        "results not ordered"
    );
}

#[test]
fn animal_fixture_full_listing() {
    let animals = words_from_slice(ANIMALS);
    let pangrams = find_pangrams(&animals, 6);

    assert_eq!(rendered(&pangrams), ANIMAL_PANGRAMS);
    assert_well_formed(&pangrams, Alphabet::english(), 6);
}

#[test]
fn animal_fixture_best() {
    let animals = words_from_slice(ANIMALS);
    let pangrams = find_pangrams(&animals, 6);

    let best = pangrams.best();
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].letter_count(), 41);
    assert_eq!(
        pangrams.as_slice().last().map(ToString::to_string).as_deref(),
        Some("(54) AXOLOTL, DRAGONFLY, HIPPOPOTAMUS, JACKRABBIT, QUETZAL, WOLVERINE")
    );
}

#[test]
fn animal_fixture_needs_six_words() {
    let animals = words_from_slice(ANIMALS);
    for depth in 0..6 {
        assert!(find_pangrams(&animals, depth).is_empty(), "depth {depth}");
    }
}

#[test]
fn animal_fixture_case_insensitive() {
    let upper: Vec<String> = ANIMALS.iter().map(|a| a.to_uppercase()).collect();
    let lower: Vec<String> = ANIMALS.iter().map(|a| a.to_lowercase()).collect();

    let upper_words: Vec<Word> = upper.iter().map(Word::new).collect();
    let lower_words: Vec<Word> = lower.iter().map(Word::new).collect();

    assert_eq!(find_pangrams(&upper_words, 6), find_pangrams(&lower_words, 6));
}

#[test]
fn prune_modes_agree_on_animals() {
    let animals = words_from_slice(ANIMALS);
    let stop = PangramSearch::new(&animals, SearchConfig::new(6).with_prune(PruneMode::Stop));
    let skip = PangramSearch::new(&animals, SearchConfig::new(6).with_prune(PruneMode::Skip));

    assert_eq!(stop.search(), skip.search());
}

#[test]
fn scenario_two_halves() {
    let pool = words(&["ABCDEFGHIJKLM", "NOPQRSTUVWXYZ"]);
    let pangrams = find_pangrams(&pool, 2);

    assert_eq!(rendered(&pangrams), ["(26) ABCDEFGHIJKLM, NOPQRSTUVWXYZ"]);
}

#[test]
fn scenario_missing_z() {
    let pool = words(&["ABCDEFGHIJKLM", "NOPQRSTUVWXY"]);
    assert!(find_pangrams(&pool, 2).is_empty());
}

#[test]
fn scenario_analyzer_ties() {
    let coverage = analyze_letters(&words(&["AB", "BC"]));
    let pairs: Vec<(char, usize)> = coverage.iter().map(|c| (c.letter, c.count)).collect();
    assert_eq!(pairs, [('A', 1), ('C', 1), ('B', 2)]);
}

#[test]
fn scenario_empty_input() {
    for depth in [0, 1, 6] {
        assert!(find_pangrams(&[], depth).is_empty());
    }
    assert!(analyze_letters(&[]).is_empty());
}

#[test]
fn scenario_zero_depth() {
    let animals = words_from_slice(ANIMALS);
    assert!(find_pangrams(&animals, 0).is_empty());
}

#[test]
fn ten_letter_alphabet_exact_results() {
    let alphabet = Alphabet::from_letters("ABCDEFGHIJ").unwrap();
    let pool = words(&[
        "ABE", "CHI", "DJ", "FG", "ACEG", "BDFH", "IJ", "HIJ", "ABCD", "EFGH", "GIJ", "CDEF",
        "AJ", "BCDE", "FGHI",
    ]);
    let pangrams = PangramSearch::new(&pool, SearchConfig::new(3).with_alphabet(alphabet)).search();

    assert_eq!(
        rendered(&pangrams),
        [
            "(10) ABCD, EFGH, IJ",
            "(10) ACEG, BDFH, IJ",
            "(10) AJ, BCDE, FGHI",
            "(11) ABCD, EFGH, GIJ",
            "(11) ABCD, EFGH, HIJ",
            "(11) ACEG, BDFH, GIJ",
            "(11) ACEG, BDFH, HIJ",
        ]
    );
    assert_well_formed(&pangrams, alphabet, 3);
}

/// Records the longest path and confirms coverage only grows along it
#[derive(Default)]
struct PathRecorder {
    nodes: usize,
    deepest: usize,
}

impl SearchObserver for PathRecorder {
    fn on_node(&mut self, state: &SearchState<'_>) {
        self.nodes += 1;
        self.deepest = self.deepest.max(state.chosen().len());

        let mut covered = LetterSet::EMPTY;
        for word in state.chosen() {
            let next = covered.union(word.letters());
            assert!(next.is_superset(covered));
            covered = next;
        }
        assert_eq!(covered, state.coverage());
    }
}

#[test]
fn observer_sees_bounded_paths() {
    let animals = words_from_slice(ANIMALS);
    let mut recorder = PathRecorder::default();
    let outcome =
        PangramSearch::new(&animals, SearchConfig::new(6)).search_with(&mut recorder);

    assert_eq!(outcome.pangrams.len(), ANIMAL_PANGRAMS.len());
    assert_eq!(recorder.deepest, 6);
    assert_eq!(recorder.nodes as u64, outcome.stats.nodes);
}

#[test]
fn word_file_format_round_trip() {
    let content = ANIMALS.join("\n");
    let from_file_format = parse_word_list(&content);
    let from_slice = words_from_slice(ANIMALS);

    assert_eq!(from_file_format, from_slice);
    assert_eq!(
        rendered(&find_pangrams(&from_file_format, 6)),
        ANIMAL_PANGRAMS
    );
}
