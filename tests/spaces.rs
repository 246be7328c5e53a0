//! Facade behavior over the whole query surface: known ranks, wraparound,
//! ranges, sentinels, iteration, random draws and rendering.

use arrangements::{
  text_items, Amalgams, ArrangementSpace, Combinations, Compositions, Compounds, Count, Error,
  Permutations, Rank, Subsets,
};

#[test]
fn known_ranks_over_abcde() {
  let items = text_items("abcde");

  let combinations = Combinations::new(3, items.clone());
  assert_eq!(combinations.len(), &Count::from(10u32));
  assert_eq!(combinations.get(0).unwrap().to_string(), "abc");
  assert_eq!(combinations.index_of(&['c', 'd', 'e']), Rank::from(9));

  let permutations = Permutations::new(3, items.clone());
  assert_eq!(permutations.len(), &Count::from(60u32));
  assert_eq!(permutations.index_of(&['a', 'c', 'b']), Rank::from(1));

  let amalgams = Amalgams::new(3, items.clone());
  assert_eq!(amalgams.len(), &Count::from(125u32));
  assert_eq!(amalgams.get(0).unwrap().to_string(), "aaa");

  let subsets = Subsets::new(items.clone());
  assert_eq!(subsets.len(), &Count::from(32u32));
  assert_eq!(subsets.get(0).unwrap().to_string(), "");

  let compositions = Compositions::new(3, items);
  assert_eq!(compositions.len(), &Count::from(35u32));
  assert_eq!(compositions.get(0).unwrap().to_string(), "aaa");
}

#[test]
fn word_rank_in_the_full_alphabet() {
  let space = Permutations::new(10, text_items("abcdefghijklmnopqrstuvwxyz"));
  let word: Vec<char> = "algorithms".chars().collect();
  assert_eq!(space.index_of(&word), Rank::from(6831894769563i64));
  assert_eq!(
    space.get(6831894769563i64).unwrap().to_string(),
    "algorithms"
  );
}

#[test]
fn wraparound_is_idempotent() {
  let space = Combinations::new(3, text_items("abcde"));
  let len = Rank::from(space.len().clone());

  for k in 0..10i32 {
    assert_eq!(
      space.get(k).unwrap(),
      space.get(Rank::from(k) + &len).unwrap()
    );
  }
  assert_eq!(space.get(-1).unwrap(), space.get(&len - 1).unwrap());
}

#[test]
fn boundary_widths() {
  assert!(Combinations::new(4, text_items("abc")).is_empty());
  assert!(Permutations::new(4, text_items("abc")).is_empty());
  assert_eq!(Subsets::<char>::new(vec![]).len(), &Count::from(1u32));
  assert_eq!(Compounds::<char>::new(vec![]).len(), &Count::from(1u32));
}

#[test]
fn empty_spaces_reject_all_access() {
  let space = Combinations::new(4, text_items("abc"));
  assert_eq!(space.get(0), Err(Error::EmptySpace));
  assert_eq!(space.index_of(&['a', 'b', 'c', 'a']), Rank::from(-1));
  assert!(space.iter().next().is_none());
  assert_eq!(
    space.random(&mut rand::thread_rng()),
    Err(Error::EmptySpace)
  );
}

#[test]
fn ranges_honor_wraparound_and_step() {
  let space = Combinations::new(3, text_items("abcde"));

  let full = space.range(None, None, None).unwrap();
  assert_eq!(full.len(), 10);
  assert_eq!(full[0].to_string(), "abc");
  assert_eq!(full[9].to_string(), "cde");

  let tail = space.range(Some(Rank::from(-3)), None, None).unwrap();
  assert_eq!(tail.len(), 3);
  assert_eq!(tail[0].to_string(), "bce");

  let evens = space.range(None, None, Some(Rank::from(2))).unwrap();
  assert_eq!(evens.len(), 5);

  let backwards = space
    .range(Some(Rank::from(4)), Some(Rank::from(1)), Some(Rank::from(-1)))
    .unwrap();
  assert_eq!(backwards.len(), 3);
  assert_eq!(backwards[0].to_string(), "ace");

  assert_eq!(
    space.range(None, None, Some(Rank::from(0))),
    Err(Error::ZeroStep)
  );
}

#[test]
fn ranges_wrap_the_gap_when_stop_is_behind_start() {
  let space = Combinations::new(3, text_items("abcde"));

  // Forward across the end of the space: ranks 8, 9, 0, 1.
  let wrapped: Vec<String> = space
    .range(Some(Rank::from(8)), Some(Rank::from(2)), Some(Rank::from(1)))
    .unwrap()
    .iter()
    .map(|a| a.to_string())
    .collect();
  assert_eq!(wrapped, ["bde", "cde", "abc", "abd"]);

  // Backwards across the start: ranks 0, 9, 8, 7, 6.
  let wrapped: Vec<String> = space
    .range(Some(Rank::from(0)), Some(Rank::from(5)), Some(Rank::from(-1)))
    .unwrap()
    .iter()
    .map(|a| a.to_string())
    .collect();
  assert_eq!(wrapped, ["abc", "cde", "bde", "bce", "bcd"]);
}

#[test]
fn iteration_is_restartable_and_ordered() {
  let space = Permutations::new(2, text_items("abc"));
  let first: Vec<String> = space.iter().map(|a| a.to_string()).collect();
  let second: Vec<String> = space.iter().map(|a| a.to_string()).collect();
  assert_eq!(first, second);
  assert_eq!(first.len(), 6);
  assert_eq!(first[0], "ab");
}

#[test]
fn random_draws_are_members() {
  let _ = tracing_subscriber::fmt().with_test_writer().try_init();

  let mut rng = rand::thread_rng();
  let space = Permutations::new(4, text_items("abcdefgh"));
  for _ in 0..50 {
    let arrangement = space.random(&mut rng).unwrap();
    assert!(space.contains(&arrangement));
    assert!(space.index_of(&arrangement) >= Rank::from(0));
  }
}

#[test]
fn list_items_render_bracketed() {
  let space = Combinations::new(2, vec![10u32, 20, 30]);
  assert_eq!(space.get(0).unwrap().to_string(), "[10, 20]");
  assert_eq!(space.to_string(), "3 2-combinations of [10, 20, 30]");
}

#[test]
fn summaries_quote_text_universes() {
  assert_eq!(
    Permutations::new(3, text_items("abcde")).to_string(),
    "60 3-permutations of \"abcde\""
  );
  assert_eq!(
    Subsets::new(text_items("ab")).to_string(),
    "4 subsets of \"ab\""
  );
  assert_eq!(
    Compounds::new(text_items("ab")).to_string(),
    "5 compounds of \"ab\""
  );
}
