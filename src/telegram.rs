use teloxide::prelude::*;
use teloxide::types::{ChatId, PollType};

/// Chat transport the quiz run talks through. Both calls are one-shot: a
/// failure comes back to be logged, it is never retried here.
///
/// Everything runs on a single task, so the returned futures carry no
/// `Send` bound.
#[allow(async_fn_in_trait)]
pub trait Messenger {
    type Error: std::fmt::Display;

    async fn send_text(&self, chat: ChatId, text: &str) -> Result<(), Self::Error>;

    async fn send_quiz_poll(
        &self,
        chat: ChatId,
        prompt: &str,
        options: &[String],
        correct_index: usize,
    ) -> Result<(), Self::Error>;
}

pub struct Telegram {
    bot: Bot,
}

impl Telegram {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

impl Messenger for Telegram {
    type Error = teloxide::RequestError;

    async fn send_text(&self, chat: ChatId, text: &str) -> Result<(), Self::Error> {
        self.bot.send_message(chat, text).await?;
        Ok(())
    }

    /// Sends a non-anonymous quiz poll so Telegram itself scores the answer
    /// and reveals the correct option.
    async fn send_quiz_poll(
        &self,
        chat: ChatId,
        prompt: &str,
        options: &[String],
        correct_index: usize,
    ) -> Result<(), Self::Error> {
        self.bot
            .send_poll(chat, prompt, options.to_vec())
            .type_(PollType::Quiz)
            .correct_option_id(correct_index as u8)
            .is_anonymous(false)
            .await?;
        Ok(())
    }
}
