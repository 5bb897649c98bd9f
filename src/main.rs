mod config;
mod progress;
mod quiz;
mod run;
mod sheet;
mod telegram;

use dotenv::dotenv;
use teloxide::Bot;

use config::Config;
use progress::ProgressFile;
use run::RunSettings;
use sheet::SheetClient;
use telegram::Telegram;

#[tokio::main]
async fn main() {
    dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting vocab quiz run...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let sheet = SheetClient::new(config.sheets_api_key.clone(), config.sheet_id.clone());
    let words = match sheet.list_records(&config.sheet_range()).await {
        Ok(words) => words,
        Err(e) => {
            log::error!("Could not load the word sheet: {}", e);
            std::process::exit(1);
        }
    };
    if words.is_empty() {
        log::info!("No words found in the sheet.");
        return;
    }
    log::info!("Loaded {} words from the sheet", words.len());

    let progress = ProgressFile::new(&config.progress_file);
    let cursor = progress.read();

    let messenger = Telegram::new(Bot::new(config.bot_token.clone()));
    let settings = RunSettings {
        recipients: config.chat_ids.clone(),
        words_per_run: config.words_per_run,
        questions_per_word: config.questions_per_word,
    };

    let new_cursor = run::run_batch(
        &words,
        cursor,
        &messenger,
        &settings,
        &mut rand::thread_rng(),
    )
    .await;

    // Persist only after the batch went out, and only if it moved at all.
    if new_cursor != cursor {
        if let Err(e) = progress.write(new_cursor) {
            log::error!(
                "Failed to save progress to {}: {}",
                config.progress_file.display(),
                e
            );
        }
    }
    log::info!("Run finished.");
}
