pub mod config;
pub mod distractors;
pub mod error;
pub mod games;
pub mod loader;
pub mod models;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verse_quiz_core::Corpus;

use crate::config::{Config, QuizSettings};
use crate::distractors::{DistractorSource, LocalOnly};
use crate::loader::JsonCorpusLoader;

/// Shared quiz state: the loaded corpus, the distractor source and settings.
#[derive(Clone)]
pub struct QuizService {
    corpus: Arc<Corpus>,
    distractors: Arc<dyn DistractorSource>,
    settings: QuizSettings,
}

impl QuizService {
    /// Service without an external distractor source.
    pub fn new(corpus: Arc<Corpus>, settings: QuizSettings) -> Self {
        Self {
            corpus,
            distractors: Arc::new(LocalOnly),
            settings,
        }
    }

    pub fn with_distractor_source(mut self, source: Arc<dyn DistractorSource>) -> Self {
        self.distractors = source;
        self
    }

    /// Load every configured corpus file and build the service.
    pub fn from_config(config: &Config) -> error::Result<Self> {
        let loader = JsonCorpusLoader::from_config(config);

        tracing::info!(dir = %config.corpus_dir.display(), "Loading corpus...");
        let corpus = Corpus::load(&loader, &config.languages())?;

        for language in corpus.languages() {
            let loaded = corpus.language(language);
            tracing::info!(
                language,
                verses = loaded.len(),
                books = loaded.books().len(),
                "Corpus language loaded"
            );
            if loaded.duplicates() > 0 {
                tracing::warn!(
                    language,
                    duplicates = loaded.duplicates(),
                    "Duplicate verses ignored, first occurrence kept"
                );
            }
        }

        if !corpus.has_language(&config.default_language) {
            tracing::warn!(
                language = %config.default_language,
                "Default language has no configured corpus file"
            );
        }

        Ok(Self::new(Arc::new(corpus), config.settings()))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn distractor_source(&self) -> &dyn DistractorSource {
        self.distractors.as_ref()
    }
}

/// Install the global tracing subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Read `.env` and the environment, set up logging and load the corpus.
pub fn bootstrap() -> anyhow::Result<QuizService> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let service = QuizService::from_config(&config)?;

    tracing::info!(
        languages = ?service.corpus().languages(),
        default_language = %service.settings().default_language,
        "Quiz service ready"
    );
    Ok(service)
}
