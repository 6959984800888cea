//! Corpus files and distractor sources used by the integration tests.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use verse_quiz_service::distractors::{DistractorError, DistractorRequest, DistractorSource};

/// French corpus in the flat layout. Jean 3:16 appears twice.
pub fn french_corpus() -> String {
    json!({
        "verses": [
            {"book_name": "Genèse", "chapter": 1, "verse": 1, "text": "Au commencement, Dieu créa les cieux et la terre."},
            {"book_name": "Genèse", "chapter": 1, "verse": 2, "text": "La terre était informe et vide: il y avait des ténèbres à la surface de l'abîme."},
            {"book_name": "Genèse", "chapter": 1, "verse": 3, "text": "Dieu dit: Que la lumière soit! Et la lumière fut."},
            {"book_name": "Psaumes", "chapter": 23, "verse": 1, "text": "L'Éternel est mon berger: je ne manquerai de rien."},
            {"book_name": "Psaumes", "chapter": 23, "verse": 2, "text": "Il me fait reposer dans de verts pâturages, Il me dirige près des eaux paisibles."},
            {"book_name": "Psaumes", "chapter": 23, "verse": 3, "text": "Il restaure mon âme, Il me conduit dans les sentiers de la justice."},
            {"book_name": "Psaumes", "chapter": 23, "verse": 4, "text": "Quand je marche dans la vallée de l'ombre de la mort, Je ne crains aucun mal."},
            {"book_name": "Jean", "chapter": 3, "verse": 16, "text": "Car Dieu a tant aimé le monde qu'il a donné son Fils unique."},
            {"book_name": "Jean", "chapter": 3, "verse": 16, "text": "doublon ignoré"},
            {"book_name": "Jean", "chapter": "3", "verse": "17", "text": "Dieu, en effet, n'a pas envoyé son Fils dans le monde pour qu'il juge le monde."},
            {"book_name": "Jean", "chapter": 11, "verse": 35, "text": "Jésus pleura."},
            {"book_name": "Romains", "chapter": 8, "verse": 28, "text": "Nous savons, du reste, que toutes choses concourent au bien de ceux qui aiment Dieu."}
        ]
    })
    .to_string()
}

/// English corpus in the nested layout.
pub fn english_corpus() -> String {
    json!({
        "books": [
            {"name": "Genesis", "chapters": [
                {"chapter": 1, "verses": [
                    {"verse": 1, "text": "In the beginning God created the heaven and the earth."},
                    {"verse": 3, "text": "And God said, Let there be light: and there was light."}
                ]}
            ]},
            {"name": "John", "chapters": [
                {"chapter": 3, "verses": [
                    {"verse": 16, "text": "For God so loved the world, that he gave his only begotten Son."},
                    {"verse": 17, "text": "For God sent not his Son into the world to condemn the world."}
                ]},
                {"chapter": 11, "verses": [
                    {"verse": 35, "text": "Jesus wept."}
                ]}
            ]}
        ]
    })
    .to_string()
}

/// Returns the same words for every request.
pub struct StaticSource(pub Vec<&'static str>);

#[async_trait]
impl DistractorSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn suggest(&self, _request: &DistractorRequest) -> Result<Vec<String>, DistractorError> {
        Ok(self.0.iter().map(|w| w.to_string()).collect())
    }
}

/// Answers after `delay`.
pub struct SlowSource {
    pub delay: Duration,
}

#[async_trait]
impl DistractorSource for SlowSource {
    fn name(&self) -> &str {
        "slow"
    }

    async fn suggest(&self, _request: &DistractorRequest) -> Result<Vec<String>, DistractorError> {
        tokio::time::sleep(self.delay).await;
        Ok(vec!["tardif".to_string(), "lent".to_string(), "retard".to_string()])
    }
}

/// Always fails.
pub struct BrokenSource;

#[async_trait]
impl DistractorSource for BrokenSource {
    fn name(&self) -> &str {
        "broken"
    }

    async fn suggest(&self, _request: &DistractorRequest) -> Result<Vec<String>, DistractorError> {
        Err(DistractorError::InvalidResponse("expected a JSON list".to_string()))
    }
}
