//! One quiz run: slice the next batch of words and push questions out.

use rand::Rng;
use teloxide::types::ChatId;

use crate::quiz::{self, Question};
use crate::sheet::WordRecord;
use crate::telegram::Messenger;

const STARTING_TEXT: &str = "Bot is starting... preparing questions.";
const ALL_DONE_TEXT: &str = "No more questions, we are done!";

/// Per-run knobs. Everything here comes from configuration; the engine
/// hard-codes none of it.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub recipients: Vec<ChatId>,
    pub words_per_run: usize,
    pub questions_per_word: usize,
}

/// Sends one batch of questions and returns the cursor to persist.
///
/// The cursor moves only when a batch was actually processed. Once the
/// corpus is exhausted every recipient gets a single completion notice and
/// the cursor comes back unchanged, so repeated runs stay quiet-ish instead
/// of wrapping around to the first word.
pub async fn run_batch<M: Messenger, R: Rng + ?Sized>(
    words: &[WordRecord],
    cursor: usize,
    messenger: &M,
    settings: &RunSettings,
    rng: &mut R,
) -> usize {
    if cursor >= words.len() {
        log::info!("All {} words have been sent", words.len());
        broadcast(messenger, &settings.recipients, ALL_DONE_TEXT).await;
        return cursor;
    }

    let end = (cursor + settings.words_per_run).min(words.len());
    log::info!("Sending words from index {} to {}", cursor, end - 1);

    broadcast(messenger, &settings.recipients, STARTING_TEXT).await;

    for word in &words[cursor..end] {
        for _ in 0..settings.questions_per_word {
            // A failed attempt is dropped, not re-rolled; the generator has
            // already logged why.
            if let Some(question) = quiz::generate_question(word, words, rng) {
                dispatch(messenger, &settings.recipients, &question).await;
            }
        }
    }

    end
}

async fn dispatch<M: Messenger>(messenger: &M, recipients: &[ChatId], question: &Question) {
    for &chat in recipients {
        match question {
            Question::Quiz {
                kind,
                prompt,
                options,
                correct_index,
            } => match messenger.send_quiz_poll(chat, prompt, options, *correct_index).await {
                Ok(()) => log::debug!("{:?} poll sent to chat {}", kind, chat.0),
                Err(e) => log::warn!("Failed to send poll to chat {}: {}", chat.0, e),
            },
            Question::Unscramble { prompt } => match messenger.send_text(chat, prompt).await {
                Ok(()) => log::debug!("Message sent to chat {}", chat.0),
                Err(e) => log::warn!("Failed to send message to chat {}: {}", chat.0, e),
            },
        }
    }
}

async fn broadcast<M: Messenger>(messenger: &M, recipients: &[ChatId], text: &str) {
    for &chat in recipients {
        if let Err(e) = messenger.send_text(chat, text).await {
            log::warn!("Failed to send notice to chat {}: {}", chat.0, e);
        }
    }
}
