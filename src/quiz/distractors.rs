//! Wrong-answer selection for multiple-choice questions.

use rand::Rng;

use crate::sheet::{Field, WordRecord};

/// Draws `count` wrong answers for a question from `pool`.
///
/// Candidates are taken uniformly at random and without replacement. A
/// candidate's value qualifies only if it is non-blank, differs from
/// `correct` and has not been picked already. Returns `None` when the pool
/// runs dry first; the caller must skip the question rather than send a
/// short option list.
pub fn select_distractors<R: Rng + ?Sized>(
    correct: &str,
    field: Field,
    pool: &[&WordRecord],
    count: usize,
    rng: &mut R,
) -> Option<Vec<String>> {
    let mut remaining = pool.to_vec();
    let mut picked: Vec<String> = Vec::with_capacity(count);

    while picked.len() < count && !remaining.is_empty() {
        let candidate = remaining.swap_remove(rng.gen_range(0..remaining.len()));
        let value = candidate.field(field);
        if value.is_empty() || value == correct {
            continue;
        }
        if picked.iter().any(|p| p == value) {
            continue;
        }
        picked.push(value.to_string());
    }

    (picked.len() == count).then_some(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(word: &str) -> WordRecord {
        WordRecord {
            word: word.to_string(),
            meaning: format!("{word} meaning"),
            synonyms: format!("{word} synonym"),
            antonyms: format!("{word} antonym"),
        }
    }

    #[test]
    fn picks_the_requested_number_of_distinct_values() {
        let records: Vec<WordRecord> = (0..8).map(|i| record(&format!("w{i}"))).collect();
        let pool: Vec<&WordRecord> = records.iter().collect();

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked =
                select_distractors("the answer", Field::Meaning, &pool, 3, &mut rng).unwrap();

            assert_eq!(picked.len(), 3);
            for value in &picked {
                assert_ne!(value, "the answer");
                assert_eq!(picked.iter().filter(|p| *p == value).count(), 1);
                assert!(pool.iter().any(|w| w.field(Field::Meaning) == value));
            }
        }
    }

    #[test]
    fn draws_come_from_the_requested_field() {
        let records: Vec<WordRecord> = (0..5).map(|i| record(&format!("w{i}"))).collect();
        let pool: Vec<&WordRecord> = records.iter().collect();
        let mut rng = StdRng::seed_from_u64(9);

        let picked =
            select_distractors("the answer", Field::Antonyms, &pool, 3, &mut rng).unwrap();
        for value in &picked {
            assert!(value.ends_with(" antonym"));
        }
    }

    #[test]
    fn refuses_when_the_pool_is_too_small() {
        let records = [record("alpha"), record("beta")];
        let pool: Vec<&WordRecord> = records.iter().collect();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(select_distractors("the answer", Field::Meaning, &pool, 3, &mut rng).is_none());
    }

    #[test]
    fn values_equal_to_the_correct_answer_never_qualify() {
        let mut records = vec![record("a"), record("b"), record("c"), record("d")];
        for r in &mut records {
            r.meaning = "the answer".to_string();
        }
        let pool: Vec<&WordRecord> = records.iter().collect();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(select_distractors("the answer", Field::Meaning, &pool, 3, &mut rng).is_none());
    }

    #[test]
    fn duplicate_values_collapse_into_one_pick() {
        let mut records = vec![record("a"), record("b"), record("c"), record("d")];
        records[0].meaning = "repeated".to_string();
        records[1].meaning = "repeated".to_string();
        records[2].meaning = "repeated".to_string();
        let pool: Vec<&WordRecord> = records.iter().collect();
        let mut rng = StdRng::seed_from_u64(0);

        // Only two distinct values exist, so three can never be drawn.
        assert!(select_distractors("the answer", Field::Meaning, &pool, 3, &mut rng).is_none());
    }

    #[test]
    fn blank_values_never_qualify() {
        let mut records = vec![record("a"), record("b"), record("c"), record("d")];
        records[0].meaning.clear();
        records[1].meaning.clear();
        let pool: Vec<&WordRecord> = records.iter().collect();

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(
                select_distractors("the answer", Field::Meaning, &pool, 3, &mut rng).is_none()
            );
        }
    }
}
