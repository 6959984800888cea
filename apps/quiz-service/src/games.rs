//! Game operations of the quiz service.
//!
//! Every operation takes the random source to use, so callers pick between
//! `rand::rng()` and a seeded generator. The async operation keeps its
//! generator across an await and needs a `Send` one such as `StdRng`.

use rand::Rng;
use verse_quiz_core::corpus::book_key;
use verse_quiz_core::{
    category_of, choice_batch, cloze_batch, draft_open_choice, find_verse, generate_cloze,
    generate_multiple_choice, generate_reference_question, generate_scramble, parse_reference,
    passage, resolve_verses, scramble_batch, verify_answers, ClozePayload, DistractorSampler,
    GenerationError, MultipleChoicePayload, ReferenceQuizPayload, ScramblePayload, VerseRecord,
    VerseSelection,
};

use crate::distractors::{suggest_within, DistractorRequest};
use crate::error::{Result, ServiceError};
use crate::models::{
    BatchRequest, BatchResponse, ClozeRequest, LookupRequest, MultipleChoiceRequest,
    OpenChoiceRequest, PassageResponse, ReferenceQuestionRequest, ScrambleRequest, VerifyRequest,
    VerifyResponse, VerseTextResponse,
};
use crate::QuizService;

/// Primary subtag of a language tag, lowercased: `fr-FR` gives `fr`.
fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

fn log_empty_batch<'a>(
    game: &'static str,
    reference: &'a str,
) -> impl FnOnce(GenerationError) -> ServiceError + 'a {
    move |e| {
        if let GenerationError::EmptyBatch { requested } = e {
            tracing::warn!(game, reference, requested, "No round of the batch could be generated");
        }
        ServiceError::from(e)
    }
}

impl QuizService {
    /// Corpus language for an optional caller tag.
    pub fn resolve_language(&self, tag: Option<&str>) -> String {
        tag.map(primary_subtag)
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| self.settings().default_language.clone())
    }

    fn resolve(&self, reference: &str, language: &str) -> Result<Vec<&VerseRecord>> {
        let range = parse_reference(reference)?;
        let verses = resolve_verses(self.corpus(), &range, language);
        if verses.is_empty() {
            return Err(ServiceError::NotFound(format!("no verse for {range} ({language})")));
        }
        Ok(verses)
    }

    pub fn cloze<R: Rng + ?Sized>(&self, req: &ClozeRequest, rng: &mut R) -> Result<ClozePayload> {
        let language = self.resolve_language(req.language.as_deref());
        let verses = self.resolve(&req.reference, &language)?;
        Ok(generate_cloze(&verses, req.difficulty, rng)?)
    }

    pub fn multiple_choice<R: Rng + ?Sized>(
        &self,
        req: &MultipleChoiceRequest,
        rng: &mut R,
    ) -> Result<MultipleChoicePayload> {
        let language = self.resolve_language(req.language.as_deref());
        let verses = self.resolve(&req.reference, &language)?;
        let sampler = DistractorSampler::new(self.corpus(), &language).with_policy(self.settings().sampler_policy);
        Ok(generate_multiple_choice(
            &verses,
            req.difficulty,
            req.used_words.as_slice(),
            &sampler,
            rng,
        )?)
    }

    pub fn scramble<R: Rng + ?Sized>(&self, req: &ScrambleRequest, rng: &mut R) -> Result<ScramblePayload> {
        let language = self.resolve_language(req.language.as_deref());
        let verses = self.resolve(&req.reference, &language)?;
        Ok(generate_scramble(&verses, rng)?)
    }

    /// Check typed answers pairwise against the expected ones.
    pub fn verify(&self, req: &VerifyRequest) -> Result<VerifyResponse> {
        let tolerance = req.tolerance.unwrap_or(self.settings().fuzzy_tolerance);
        if !(0.0..=1.0).contains(&tolerance) {
            return Err(ServiceError::BadRequest(format!(
                "tolerance must be between 0 and 1, got {tolerance}"
            )));
        }

        let results = verify_answers(req.answers.as_slice(), req.expected.as_slice(), tolerance);
        let correct_count = results.iter().filter(|ok| **ok).count();
        Ok(VerifyResponse {
            all_correct: correct_count == results.len(),
            correct_count,
            results,
        })
    }

    /// Verses of a reference, in order.
    pub fn passage(&self, req: &LookupRequest) -> Result<PassageResponse> {
        let language = self.resolve_language(req.language.as_deref());
        let range = parse_reference(&req.reference)?;
        let verses = passage(self.corpus(), &range, &language);
        if verses.is_empty() {
            return Err(ServiceError::NotFound(format!("no verse for {range} ({language})")));
        }
        Ok(PassageResponse {
            reference: range.to_string(),
            verses,
        })
    }

    /// Text of a single verse.
    pub fn verse_text(&self, req: &LookupRequest) -> Result<VerseTextResponse> {
        let language = self.resolve_language(req.language.as_deref());
        let range = parse_reference(&req.reference)?;
        if !matches!(range.verses, VerseSelection::Single { .. }) {
            return Err(ServiceError::BadRequest(format!(
                "{range} is not a single verse reference"
            )));
        }

        let verse = find_verse(self.corpus(), &range, &language)
            .ok_or_else(|| ServiceError::NotFound(format!("no verse for {range} ({language})")))?;
        Ok(VerseTextResponse {
            reference: verse.reference(),
            text: verse.text.clone(),
            category: category_of(&verse.book_name, &language).map(|g| g.label(&language).to_string()),
        })
    }

    pub fn reference_question<R: Rng + ?Sized>(
        &self,
        req: &ReferenceQuestionRequest,
        rng: &mut R,
    ) -> Result<ReferenceQuizPayload> {
        let language = self.resolve_language(req.language.as_deref());
        let source = req.source()?;
        Ok(generate_reference_question(
            self.corpus(),
            &language,
            &source,
            req.difficulty,
            rng,
        )?)
    }

    /// Multiple-choice question on a random verse whose wrong options come
    /// from the distractor source, topped up from the local word list.
    pub async fn open_multiple_choice<R: Rng + Send + ?Sized>(
        &self,
        req: &OpenChoiceRequest,
        rng: &mut R,
    ) -> Result<MultipleChoicePayload> {
        let language = self.resolve_language(req.language.as_deref());
        let corpus = self.corpus().language(&language);
        let book = req.book.as_deref().map(str::trim).filter(|b| !b.is_empty());

        let pool: Vec<&VerseRecord> = match (book, req.chapter) {
            (Some(book), Some(chapter)) => corpus.chapter(book, chapter),
            (Some(book), None) => {
                let key = book_key(book);
                corpus
                    .verses()
                    .iter()
                    .filter(|v| book_key(&v.book_name) == key)
                    .collect()
            }
            (None, Some(_)) => {
                return Err(ServiceError::BadRequest("chapter given without a book".to_string()));
            }
            (None, None) => corpus.verses().iter().collect(),
        };
        if pool.is_empty() {
            return Err(ServiceError::NotFound(format!("no verse to draw from ({language})")));
        }

        let draft = draft_open_choice(&pool, req.used_words.as_slice(), rng)?;
        let request = DistractorRequest {
            context: draft.context.clone(),
            correct_answer: draft.correct_answer.clone(),
            book: draft.verse.book_name.clone(),
            language: language.clone(),
        };
        let suggestions = suggest_within(
            self.distractor_source(),
            &request,
            self.settings().distractor_timeout,
        )
        .await;

        Ok(draft.complete(suggestions, &language, rng))
    }

    pub fn cloze_batch<R: Rng + ?Sized>(
        &self,
        req: &BatchRequest,
        rng: &mut R,
    ) -> Result<BatchResponse<ClozePayload>> {
        let count = req.validated_count()?;
        let language = self.resolve_language(req.language.as_deref());
        let verses = self.resolve(&req.reference, &language)?;
        let games = cloze_batch(&verses, req.difficulty, count, rng)
            .map_err(log_empty_batch("cloze", &req.reference))?;
        Ok(BatchResponse { requested: count, games })
    }

    /// Multiple-choice rounds that do not repeat an answer until the
    /// verse's words run out.
    pub fn multiple_choice_batch<R: Rng + ?Sized>(
        &self,
        req: &BatchRequest,
        rng: &mut R,
    ) -> Result<BatchResponse<MultipleChoicePayload>> {
        let count = req.validated_count()?;
        let language = self.resolve_language(req.language.as_deref());
        let verses = self.resolve(&req.reference, &language)?;
        let sampler = DistractorSampler::new(self.corpus(), &language).with_policy(self.settings().sampler_policy);
        let games = choice_batch(&verses, req.difficulty, req.used_words.as_slice(), count, &sampler, rng)
            .map_err(log_empty_batch("multiple_choice", &req.reference))?;
        Ok(BatchResponse { requested: count, games })
    }

    pub fn scramble_batch<R: Rng + ?Sized>(
        &self,
        req: &BatchRequest,
        rng: &mut R,
    ) -> Result<BatchResponse<ScramblePayload>> {
        let count = req.validated_count()?;
        let language = self.resolve_language(req.language.as_deref());
        let verses = self.resolve(&req.reference, &language)?;
        let games = scramble_batch(&verses, count, rng).map_err(log_empty_batch("scramble", &req.reference))?;
        Ok(BatchResponse { requested: count, games })
    }
}
