use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::Question;
use crate::text;

/// Decode every answer of `question` and put them in a uniformly random order.
///
/// `SliceRandom::shuffle` is a Fisher-Yates shuffle, so each of the `n!`
/// orderings is equally likely.
pub fn shuffled_choices<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Vec<String> {
    let mut choices: Vec<String> = question
        .all_answers()
        .map(|answer| text::decode(answer).into_owned())
        .collect();
    choices.shuffle(rng);
    choices
}
