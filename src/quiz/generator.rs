//! Question generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::distractors::select_distractors;
use crate::quiz::{Question, QuestionKind};
use crate::sheet::{Field, WordRecord};

/// Wrong answers per quiz poll; together with the correct answer every
/// option list comes out four entries long.
pub const DISTRACTORS_PER_QUESTION: usize = 3;

/// Builds one randomly-kinded question about `target`.
///
/// `None` means the attempt is skipped: the drawn kind could not be built
/// from the data at hand, either because the answer cell is blank or the
/// rest of the corpus cannot supply enough distinct wrong answers.
pub fn generate_question<R: Rng + ?Sized>(
    target: &WordRecord,
    corpus: &[WordRecord],
    rng: &mut R,
) -> Option<Question> {
    let kind = *QuestionKind::ALL.choose(rng).unwrap();

    let (prompt, field) = match kind {
        QuestionKind::Meaning => (
            format!("What is the meaning of \"{}\"?", target.word),
            Field::Meaning,
        ),
        QuestionKind::Synonym => (
            format!("What is a synonym for \"{}\"?", target.word),
            Field::Synonyms,
        ),
        QuestionKind::Antonym => (
            format!("What is an antonym for \"{}\"?", target.word),
            Field::Antonyms,
        ),
        QuestionKind::Unscramble => {
            let prompt = format!(
                "Unscramble the letters to find the word: {}",
                scramble(&target.word, rng)
            );
            return Some(Question::Unscramble { prompt });
        }
    };

    let correct = target.field(field);
    if correct.is_empty() {
        log::warn!(
            "Word \"{}\" has an empty {:?} cell; skipping this question",
            target.word,
            field
        );
        return None;
    }

    // Any other word in the corpus can donate a wrong answer.
    let pool: Vec<&WordRecord> = corpus.iter().filter(|w| w.word != target.word).collect();
    let Some(distractors) =
        select_distractors(correct, field, &pool, DISTRACTORS_PER_QUESTION, rng)
    else {
        log::warn!("Could not find enough distractors for \"{}\"", target.word);
        return None;
    };

    let mut options = distractors;
    options.push(correct.to_string());
    options.shuffle(rng);
    // Options are pairwise distinct, so the first match is the only one.
    let correct_index = options.iter().position(|option| option == correct).unwrap();

    Some(Question::Quiz {
        kind,
        prompt,
        options,
        correct_index,
    })
}

/// Returns `word` with its letters in uniform random order. The shuffle may
/// reproduce the original spelling; that outcome stands, it is not re-rolled.
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.shuffle(rng);
    letters.into_iter().collect()
}
