//! Common test utilities for the quiz service integration tests.
//!
//! TestContext writes the fixture corpus files to a temporary directory and
//! loads a service from them through the regular configuration path.

#![allow(dead_code)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use verse_quiz_service::config::Config;
use verse_quiz_service::distractors::DistractorSource;
use verse_quiz_service::QuizService;

pub struct TestContext {
    pub service: QuizService,
    pub config: Config,
    /// Kept alive for the duration of the test.
    pub dir: TempDir,
}

impl TestContext {
    /// Service over the French and English fixture corpora.
    pub fn new() -> Self {
        Self::with_vars(&[])
    }

    /// Same as [`TestContext::new`] with extra configuration variables.
    pub fn with_vars(extra: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("fr.json"), fixtures::french_corpus()).expect("Failed to write fr corpus");
        std::fs::write(dir.path().join("en.json"), fixtures::english_corpus()).expect("Failed to write en corpus");

        let mut vars: HashMap<String, String> = HashMap::from([
            ("QUIZ_CORPUS_DIR".to_string(), dir.path().display().to_string()),
            ("QUIZ_CORPUS_FILES".to_string(), "fr=fr.json,en=en.json".to_string()),
        ]);
        for (key, value) in extra {
            vars.insert(key.to_string(), value.to_string());
        }

        let config = Config::from_lookup(|key| vars.get(key).cloned()).expect("Invalid test config");
        let service = QuizService::from_config(&config).expect("Failed to build service");

        Self { service, config, dir }
    }

    pub fn with_distractor_source(mut self, source: impl DistractorSource + 'static) -> Self {
        self.service = self.service.with_distractor_source(Arc::new(source));
        self
    }
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
