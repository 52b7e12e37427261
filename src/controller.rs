//! The quiz state machine.
//!
//! [`QuizController`] owns the category list, the resolved settings and the
//! running [`Session`]. Every operation is a single transition; anything that
//! does not apply to the current state is ignored, so duplicate or late UI
//! events can never push the controller into an inconsistent state.

use std::mem;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{QuizError, Result};
use crate::models::{Category, Question, Settings, SettingsDraft};
use crate::presenter::{
    ChoiceMark, ChoiceView, Intent, LoadingKind, Phase, Presenter, QuestionView, QuizView,
};
use crate::rank::QuizResult;
use crate::session::Session;
use crate::source::TriviaSource;
use crate::text;

/// Identifies one fetch so that late responses can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(Uuid);

impl FetchTicket {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A fetch the controller wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Categories { ticket: FetchTicket },
    Questions { ticket: FetchTicket, settings: Settings },
}

impl FetchRequest {
    /// Run the fetch against `source`. The result goes back through
    /// [`QuizController::complete`].
    pub async fn execute(self, source: &dyn TriviaSource) -> FetchOutcome {
        match self {
            FetchRequest::Categories { ticket } => FetchOutcome::Categories {
                ticket,
                result: source.fetch_categories().await,
            },
            FetchRequest::Questions { ticket, settings } => FetchOutcome::Questions {
                ticket,
                result: source
                    .fetch_questions(
                        settings.category(),
                        settings.difficulty(),
                        settings.question_count(),
                    )
                    .await,
            },
        }
    }
}

/// Result of a [`FetchRequest`].
#[derive(Debug)]
pub enum FetchOutcome {
    Categories {
        ticket: FetchTicket,
        result: Result<Vec<Category>>,
    },
    Questions {
        ticket: FetchTicket,
        result: Result<Vec<Question>>,
    },
}

enum State {
    Idle,
    LoadingCategories { ticket: FetchTicket },
    Configuring,
    LoadingQuestions { ticket: FetchTicket, settings: Settings },
    Playing(Session),
    Finished { session: Session, result: QuizResult },
}

pub struct QuizController<P> {
    source: Arc<dyn TriviaSource>,
    presenter: P,
    rng: StdRng,
    state: State,
    categories: Option<Vec<Category>>,
    settings: Option<Settings>,
    error: Option<String>,
    confirming_quit: bool,
}

impl<P: Presenter> QuizController<P> {
    pub fn new(source: Arc<dyn TriviaSource>, presenter: P) -> Self {
        Self {
            source,
            presenter,
            rng: StdRng::from_entropy(),
            state: State::Idle,
            categories: None,
            settings: None,
            error: None,
            confirming_quit: false,
        }
    }

    /// Use a specific random source for answer shuffling.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn source(&self) -> Arc<dyn TriviaSource> {
        Arc::clone(&self.source)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn phase(&self) -> Phase {
        match &self.state {
            State::Idle => Phase::Idle,
            State::LoadingCategories { .. } | State::LoadingQuestions { .. } => Phase::Loading,
            State::Configuring => Phase::Configuring,
            State::Playing(session) if session.is_answered() => Phase::Answered,
            State::Playing(_) => Phase::InProgress,
            State::Finished { .. } => Phase::Finished,
        }
    }

    /// Settings of the current or last attempted quiz, cleared by reset.
    pub fn settings(&self) -> Option<&Settings> {
        self.settings.as_ref()
    }

    pub fn categories(&self) -> &[Category] {
        self.categories.as_deref().unwrap_or_default()
    }

    /// Fetch the category list and open the settings form.
    pub async fn load_categories(&mut self) {
        if let Some(request) = self.begin_load_categories() {
            self.run(request).await;
        }
    }

    /// Resolve `draft`, fetch the questions and show the first one.
    pub async fn start_quiz(&mut self, draft: SettingsDraft) {
        if let Some(request) = self.begin_start_quiz(draft) {
            self.run(request).await;
        }
    }

    async fn run(&mut self, request: FetchRequest) {
        let source = Arc::clone(&self.source);
        let outcome = request.execute(source.as_ref()).await;
        self.complete(outcome);
    }

    /// First half of [`QuizController::load_categories`].
    ///
    /// Returns `None` when categories are loaded or already being fetched.
    pub fn begin_load_categories(&mut self) -> Option<FetchRequest> {
        if !matches!(self.state, State::Idle) {
            debug!("category load ignored, not idle");
            return None;
        }

        let ticket = FetchTicket::new();
        self.error = None;
        self.state = State::LoadingCategories { ticket };
        info!("loading categories");
        self.notify();
        Some(FetchRequest::Categories { ticket })
    }

    /// First half of [`QuizController::start_quiz`].
    ///
    /// Returns `None` unless the settings form is active, which also keeps a
    /// second questions fetch from starting while one is in flight.
    pub fn begin_start_quiz(&mut self, draft: SettingsDraft) -> Option<FetchRequest> {
        if !matches!(self.state, State::Configuring) {
            debug!("start ignored, settings form not active");
            return None;
        }

        let settings = Settings::resolve(&draft, self.categories());
        let ticket = FetchTicket::new();
        self.error = None;
        self.settings = Some(settings);
        self.state = State::LoadingQuestions { ticket, settings };
        info!(
            category = ?settings.category(),
            difficulty = %settings.difficulty(),
            count = settings.question_count(),
            "starting quiz"
        );
        self.notify();
        Some(FetchRequest::Questions { ticket, settings })
    }

    /// Apply the result of a fetch. Outcomes for a fetch the controller is no
    /// longer waiting on are dropped.
    pub fn complete(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Categories { ticket, result } => {
                if !matches!(self.state, State::LoadingCategories { ticket: t } if t == ticket) {
                    debug!("stale category response ignored");
                    return;
                }
                match result {
                    Ok(categories) => {
                        info!(count = categories.len(), "categories loaded");
                        self.categories = Some(categories);
                        self.state = State::Configuring;
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to load categories");
                        self.error = Some(err.to_string());
                        self.state = State::Idle;
                    }
                }
            }
            FetchOutcome::Questions { ticket, result } => {
                let settings = match &self.state {
                    State::LoadingQuestions { ticket: t, settings } if *t == ticket => *settings,
                    _ => {
                        debug!("stale question response ignored");
                        return;
                    }
                };
                match self.build_session(settings, result) {
                    Ok(session) => {
                        info!(total = session.total(), "quiz started");
                        self.state = State::Playing(session);
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to start quiz");
                        self.error = Some(err.to_string());
                        self.state = State::Configuring;
                    }
                }
            }
        }
        self.notify();
    }

    fn build_session(
        &mut self,
        settings: Settings,
        result: Result<Vec<Question>>,
    ) -> Result<Session> {
        let mut questions = result?;
        let wanted = settings.question_count() as usize;
        if questions.len() < wanted {
            if !questions.is_empty() {
                warn!(wanted, got = questions.len(), "short question batch");
            }
            return Err(QuizError::NoQuestionsAvailable);
        }
        questions.truncate(wanted);
        Session::new(questions, &mut self.rng).ok_or(QuizError::NoQuestionsAvailable)
    }

    /// Answer the current question with the decoded text of a choice.
    ///
    /// Ignored unless a question is waiting for an answer, so a repeated
    /// click never scores twice.
    pub fn submit_answer(&mut self, choice: &str) {
        if self.confirming_quit {
            return;
        }
        let State::Playing(session) = &mut self.state else {
            debug!("answer ignored, no question shown");
            return;
        };
        match session.answer(choice) {
            Some(correct) => {
                info!(
                    question = session.current_index() + 1,
                    correct,
                    score = session.score(),
                    "answer submitted"
                );
                self.notify();
            }
            None => debug!("question already answered"),
        }
    }

    /// Go to the next question, or to the result after the last one.
    pub fn advance(&mut self) {
        if self.confirming_quit || self.phase() != Phase::Answered {
            return;
        }

        self.state = match mem::replace(&mut self.state, State::Idle) {
            State::Playing(session) if session.is_last() => {
                let result = QuizResult::new(session.score(), session.total());
                info!(
                    score = result.score,
                    total = result.total,
                    percentage = result.percentage,
                    "quiz finished"
                );
                State::Finished { session, result }
            }
            State::Playing(mut session) => {
                session.advance(&mut self.rng);
                State::Playing(session)
            }
            other => other,
        };
        self.notify();
    }

    /// Ask for confirmation before abandoning the quiz.
    pub fn quit(&mut self) {
        if matches!(self.state, State::Playing(_) | State::Finished { .. }) {
            self.confirming_quit = true;
            self.notify();
        }
    }

    /// Close the quit dialog; `true` throws the session away.
    pub fn confirm_quit(&mut self, confirmed: bool) {
        if !self.confirming_quit {
            return;
        }
        if confirmed {
            info!("quiz abandoned");
            self.teardown();
        } else {
            self.confirming_quit = false;
            self.notify();
        }
    }

    /// Drop settings and session and go back to the settings form.
    ///
    /// Ignored while a question is on screen; leaving a running quiz goes
    /// through [`QuizController::quit`] and its confirmation.
    pub fn reset(&mut self) {
        if matches!(self.state, State::Playing(_)) {
            debug!("reset ignored, quiz in progress");
            return;
        }
        self.teardown();
    }

    fn teardown(&mut self) {
        self.settings = None;
        self.error = None;
        self.confirming_quit = false;
        if !matches!(self.state, State::LoadingCategories { .. }) {
            self.state = if self.categories.is_some() {
                State::Configuring
            } else {
                State::Idle
            };
        }
        debug!("reset");
        self.notify();
    }

    /// Retry whatever failed last: the category list, or the quiz start with
    /// the same settings.
    pub fn retry(&mut self) -> Option<FetchRequest> {
        match self.state {
            State::Idle => self.begin_load_categories(),
            State::Configuring if self.error.is_some() => {
                let settings = self.settings?;
                self.begin_start_quiz(SettingsDraft {
                    category: settings.category(),
                    difficulty: Some(settings.difficulty()),
                    question_count: Some(settings.question_count()),
                })
            }
            _ => None,
        }
    }

    pub fn dismiss_error(&mut self) {
        if self.error.take().is_some() {
            self.notify();
        }
    }

    /// Route a presenter intent to its operation. A returned request must be
    /// executed and fed back through [`QuizController::complete`].
    pub fn dispatch(&mut self, intent: Intent) -> Option<FetchRequest> {
        match intent {
            Intent::Start(draft) => return self.begin_start_quiz(draft),
            Intent::Retry => return self.retry(),
            Intent::SelectAnswer(choice) => self.submit_answer(&choice),
            Intent::Next => self.advance(),
            Intent::Reset => self.reset(),
            Intent::RequestQuit => self.quit(),
            Intent::ConfirmQuit(confirmed) => self.confirm_quit(confirmed),
            Intent::DismissError => self.dismiss_error(),
        }
        None
    }

    pub fn view(&self) -> QuizView {
        let (loading, question, score, result, history) = match &self.state {
            State::Idle | State::Configuring => (None, None, 0, None, Vec::new()),
            State::LoadingCategories { .. } => {
                (Some(LoadingKind::Categories), None, 0, None, Vec::new())
            }
            State::LoadingQuestions { .. } => {
                (Some(LoadingKind::Questions), None, 0, None, Vec::new())
            }
            State::Playing(session) => (
                None,
                Some(question_view(session)),
                session.score(),
                None,
                session.history().to_vec(),
            ),
            State::Finished { session, result } => (
                None,
                None,
                session.score(),
                Some(*result),
                session.history().to_vec(),
            ),
        };

        QuizView {
            phase: self.phase(),
            loading,
            categories: self.categories().to_vec(),
            can_start: matches!(self.state, State::Configuring),
            question,
            score,
            result,
            history,
            error: self.error.clone(),
            confirming_quit: self.confirming_quit,
        }
    }

    fn notify(&mut self) {
        let view = self.view();
        self.presenter.present(&view);
    }
}

fn question_view(session: &Session) -> QuestionView {
    let question = session.current_question();
    let answered = session.is_answered();
    let correct = session.correct_answer();

    let choices = session
        .choices()
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            let mark = match (answered, *choice == correct) {
                (false, _) => ChoiceMark::Hidden,
                (true, true) => ChoiceMark::Correct,
                (true, false) => ChoiceMark::Incorrect,
            };
            ChoiceView {
                text: choice.clone(),
                mark,
                picked: session.picked() == Some(index),
            }
        })
        .collect();

    QuestionView {
        number: session.current_index() + 1,
        total: session.total(),
        text: text::decode(&question.text).into_owned(),
        category: text::decode(&question.category).into_owned(),
        difficulty: question.difficulty,
        kind: question.kind,
        choices,
        outcome: session.history().last().filter(|_| answered).map(|r| r.is_correct),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::models::Difficulty;
    use crate::rank::Rank;

    #[derive(Default)]
    struct FakeSource {
        categories: Option<Vec<Category>>,
        questions: Option<Vec<Question>>,
        requests: Mutex<Vec<(Option<u32>, Difficulty, u32)>>,
    }

    impl FakeSource {
        fn with_questions(questions: Vec<Question>) -> Self {
            Self {
                categories: Some(vec![Category::new(9, "General")]),
                questions: Some(questions),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl TriviaSource for FakeSource {
        async fn fetch_categories(&self) -> Result<Vec<Category>> {
            self.categories
                .clone()
                .ok_or_else(|| QuizError::Network("connection refused".into()))
        }

        async fn fetch_questions(
            &self,
            category: Option<u32>,
            difficulty: Difficulty,
            count: u32,
        ) -> Result<Vec<Question>> {
            self.requests
                .lock()
                .unwrap()
                .push((category, difficulty, count));
            self.questions
                .clone()
                .ok_or_else(|| QuizError::Network("timed out".into()))
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        views: Vec<QuizView>,
    }

    impl Presenter for RecordingPresenter {
        fn present(&mut self, view: &QuizView) {
            self.views.push(view.clone());
        }
    }

    fn two_questions() -> Vec<Question> {
        vec![
            Question::new("Largest planet?", "Jupiter", ["Mars", "Venus", "Earth"]),
            Question::new("Author of &quot;Hamlet&quot;?", "Shakespeare", ["Dickens", "Austen", "Twain"]),
        ]
    }

    fn controller(source: FakeSource) -> QuizController<RecordingPresenter> {
        QuizController::new(Arc::new(source), RecordingPresenter::default())
            .with_rng(StdRng::seed_from_u64(42))
    }

    fn draft(count: u32) -> SettingsDraft {
        SettingsDraft {
            category: Some(9),
            difficulty: Some(Difficulty::Medium),
            question_count: Some(count),
        }
    }

    async fn configured(source: FakeSource) -> QuizController<RecordingPresenter> {
        let mut controller = controller(source);
        controller.load_categories().await;
        assert_eq!(controller.phase(), Phase::Configuring);
        controller
    }

    #[tokio::test]
    async fn full_round_scores_one_of_two() {
        let mut controller = configured(FakeSource::with_questions(two_questions())).await;

        controller.start_quiz(draft(2)).await;
        assert_eq!(controller.phase(), Phase::InProgress);
        let view = controller.view();
        let question = view.question.unwrap();
        assert_eq!((question.number, question.total), (1, 2));

        controller.submit_answer("Jupiter");
        assert_eq!(controller.phase(), Phase::Answered);
        controller.advance();
        assert_eq!(controller.phase(), Phase::InProgress);
        assert_eq!(controller.view().question.unwrap().text, "Author of \"Hamlet\"?");

        controller.submit_answer("Dickens");
        controller.advance();
        assert_eq!(controller.phase(), Phase::Finished);

        let result = controller.view().result.unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.percentage, 50);
        assert_eq!(result.rank, Rank::Contender);
    }

    #[tokio::test]
    async fn settings_reach_the_source() {
        let source = Arc::new(FakeSource::with_questions(two_questions()));
        let mut controller = QuizController::new(
            Arc::clone(&source) as Arc<dyn TriviaSource>,
            RecordingPresenter::default(),
        );
        controller.load_categories().await;
        controller.start_quiz(draft(2)).await;

        let requests = source.requests.lock().unwrap();
        assert_eq!(requests.as_slice(), [(Some(9), Difficulty::Medium, 2)]);
    }

    #[tokio::test]
    async fn category_failure_stays_idle_and_can_retry() {
        let mut controller = controller(FakeSource::default());
        controller.load_categories().await;

        assert_eq!(controller.phase(), Phase::Idle);
        let view = controller.view();
        assert!(view.error.unwrap().contains("connection refused"));
        assert!(!view.can_start);

        let request = controller.dispatch(Intent::Retry);
        assert!(matches!(request, Some(FetchRequest::Categories { .. })));
        assert_eq!(controller.phase(), Phase::Loading);
        assert!(controller.view().error.is_none());
    }

    #[tokio::test]
    async fn empty_batch_returns_to_settings_without_session() {
        let mut controller = configured(FakeSource::with_questions(Vec::new())).await;

        controller.start_quiz(draft(5)).await;

        assert_eq!(controller.phase(), Phase::Configuring);
        let view = controller.view();
        assert!(view.question.is_none());
        assert_eq!(
            view.error.as_deref(),
            Some("no questions for this configuration")
        );
    }

    #[tokio::test]
    async fn short_batch_is_rejected_and_long_batch_truncated() {
        let mut controller = configured(FakeSource::with_questions(two_questions())).await;
        controller.start_quiz(draft(3)).await;
        assert_eq!(controller.phase(), Phase::Configuring);
        assert!(controller.view().error.is_some());

        controller.start_quiz(draft(1)).await;
        assert_eq!(controller.phase(), Phase::InProgress);
        assert_eq!(controller.view().question.unwrap().total, 1);
        assert!(controller.view().error.is_none());
    }

    #[tokio::test]
    async fn network_failure_on_start_keeps_form() {
        let source = FakeSource {
            categories: Some(vec![Category::new(9, "General")]),
            ..FakeSource::default()
        };
        let mut controller = configured(source).await;

        controller.start_quiz(draft(2)).await;
        assert_eq!(controller.phase(), Phase::Configuring);
        assert!(controller.view().error.unwrap().contains("timed out"));
        assert!(controller.view().can_start);
    }

    #[tokio::test]
    async fn double_submit_scores_once() {
        let mut controller = configured(FakeSource::with_questions(two_questions())).await;
        controller.start_quiz(draft(2)).await;

        controller.submit_answer("Jupiter");
        controller.submit_answer("Jupiter");
        controller.submit_answer("Mars");
        assert_eq!(controller.view().score, 1);

        let question = controller.view().question.unwrap();
        assert_eq!(question.outcome, Some(true));
        for choice in &question.choices {
            let expected = if choice.text == "Jupiter" {
                ChoiceMark::Correct
            } else {
                ChoiceMark::Incorrect
            };
            assert_eq!(choice.mark, expected);
            assert_eq!(choice.picked, choice.text == "Jupiter");
        }
    }

    #[tokio::test]
    async fn answering_keeps_choice_order() {
        let mut controller = configured(FakeSource::with_questions(two_questions())).await;
        controller.start_quiz(draft(2)).await;

        let order = |c: &QuizController<RecordingPresenter>| -> Vec<String> {
            c.view()
                .question
                .unwrap()
                .choices
                .into_iter()
                .map(|choice| choice.text)
                .collect()
        };
        let before = order(&controller);
        controller.submit_answer("Venus");
        assert_eq!(order(&controller), before);
    }

    #[tokio::test]
    async fn advance_needs_an_answer() {
        let mut controller = configured(FakeSource::with_questions(two_questions())).await;
        controller.start_quiz(draft(2)).await;

        controller.advance();
        assert_eq!(controller.phase(), Phase::InProgress);
        assert_eq!(controller.view().question.unwrap().number, 1);

        controller.submit_answer("Earth");
        controller.advance();
        let question = controller.view().question.unwrap();
        assert_eq!(question.number, 2);
        assert_eq!(question.outcome, None);
        assert!(question.choices.iter().all(|c| c.mark == ChoiceMark::Hidden));
    }

    #[tokio::test]
    async fn reset_from_finished_clears_everything() {
        let mut controller = configured(FakeSource::with_questions(two_questions())).await;
        controller.start_quiz(draft(1)).await;
        controller.submit_answer("Jupiter");
        controller.advance();
        assert_eq!(controller.phase(), Phase::Finished);

        controller.reset();
        assert_eq!(controller.phase(), Phase::Configuring);
        assert!(controller.settings().is_none());
        let view = controller.view();
        assert!(view.question.is_none());
        assert!(view.result.is_none());
        assert!(view.history.is_empty());
        assert_eq!(view.score, 0);
        assert!(view.can_start);
    }

    #[tokio::test]
    async fn quit_needs_confirmation() {
        let mut controller = configured(FakeSource::with_questions(two_questions())).await;
        controller.start_quiz(draft(2)).await;
        controller.submit_answer("Jupiter");

        controller.dispatch(Intent::RequestQuit);
        assert!(controller.view().confirming_quit);

        controller.advance();
        assert_eq!(controller.phase(), Phase::Answered);

        controller.dispatch(Intent::ConfirmQuit(false));
        assert!(!controller.view().confirming_quit);
        assert_eq!(controller.phase(), Phase::Answered);
        assert_eq!(controller.view().score, 1);

        controller.dispatch(Intent::RequestQuit);
        controller.dispatch(Intent::ConfirmQuit(true));
        assert_eq!(controller.phase(), Phase::Configuring);
        assert!(controller.view().question.is_none());
        assert!(controller.settings().is_none());
    }

    #[tokio::test]
    async fn reset_during_a_question_is_ignored() {
        let mut controller = configured(FakeSource::with_questions(two_questions())).await;
        controller.start_quiz(draft(2)).await;

        controller.dispatch(Intent::Reset);
        assert_eq!(controller.phase(), Phase::InProgress);

        controller.submit_answer("Jupiter");
        controller.dispatch(Intent::Reset);
        assert_eq!(controller.phase(), Phase::Answered);
        assert_eq!(controller.view().score, 1);
        assert!(controller.settings().is_some());
        assert!(!controller.view().confirming_quit);
    }

    #[tokio::test]
    async fn encoded_correct_answer_is_compared_decoded() {
        let questions = vec![Question::new(
            "Which genre did Elvis popularise?",
            "Rock &amp; Roll",
            ["Jazz", "Blues", "Soul"],
        )];

        let mut controller = configured(FakeSource::with_questions(questions.clone())).await;
        controller.start_quiz(draft(1)).await;
        controller.submit_answer("Rock & Roll");
        assert_eq!(controller.view().score, 1);

        let question = controller.view().question.unwrap();
        assert_eq!(question.outcome, Some(true));
        let marked: Vec<(&str, ChoiceMark)> = question
            .choices
            .iter()
            .map(|choice| (choice.text.as_str(), choice.mark))
            .collect();
        assert!(marked.contains(&("Rock & Roll", ChoiceMark::Correct)));
        assert!(marked.contains(&("Jazz", ChoiceMark::Incorrect)));

        let mut controller = configured(FakeSource::with_questions(questions)).await;
        controller.start_quiz(draft(1)).await;
        controller.submit_answer("Rock &amp; Roll");
        assert_eq!(controller.view().score, 0);
        assert_eq!(controller.view().question.unwrap().outcome, Some(false));
    }

    #[tokio::test]
    async fn quit_from_result_screen() {
        let mut controller = configured(FakeSource::with_questions(two_questions())).await;
        controller.start_quiz(draft(1)).await;
        controller.submit_answer("Jupiter");
        controller.advance();
        assert_eq!(controller.phase(), Phase::Finished);

        controller.quit();
        assert!(controller.view().confirming_quit);
        controller.confirm_quit(false);
        assert_eq!(controller.phase(), Phase::Finished);
        assert_eq!(controller.view().result.unwrap().score, 1);

        controller.quit();
        controller.confirm_quit(true);
        assert_eq!(controller.phase(), Phase::Configuring);
        assert!(controller.view().result.is_none());
        assert!(!controller.view().confirming_quit);
    }

    #[tokio::test]
    async fn stale_categories_are_ignored() {
        let mut controller = controller(FakeSource::with_questions(two_questions()));
        let request = controller.begin_load_categories().unwrap();

        controller.complete(FetchOutcome::Categories {
            ticket: FetchTicket::new(),
            result: Ok(vec![Category::new(1, "Stale")]),
        });
        assert_eq!(controller.phase(), Phase::Loading);
        assert!(controller.categories().is_empty());

        let outcome = request.execute(controller.source().as_ref()).await;
        controller.complete(outcome);
        assert_eq!(controller.phase(), Phase::Configuring);

        controller.complete(FetchOutcome::Categories {
            ticket: FetchTicket::new(),
            result: Err(QuizError::Network("late".into())),
        });
        assert_eq!(controller.phase(), Phase::Configuring);
        assert_eq!(controller.categories(), [Category::new(9, "General")]);
        assert!(controller.view().error.is_none());
    }

    #[tokio::test]
    async fn quit_outside_a_quiz_is_ignored() {
        let mut controller = configured(FakeSource::with_questions(two_questions())).await;
        controller.quit();
        assert!(!controller.view().confirming_quit);
        controller.confirm_quit(true);
        assert_eq!(controller.phase(), Phase::Configuring);
    }

    #[tokio::test]
    async fn stale_questions_after_reset_are_ignored() {
        let source = FakeSource::with_questions(two_questions());
        let mut controller = configured(source).await;

        let request = controller.begin_start_quiz(draft(2)).unwrap();
        assert!(controller.begin_start_quiz(draft(2)).is_none());
        assert!(!controller.view().can_start);

        controller.reset();
        let outcome = request.execute(controller.source().as_ref()).await;
        controller.complete(outcome);

        assert_eq!(controller.phase(), Phase::Configuring);
        assert!(controller.view().question.is_none());
    }

    #[tokio::test]
    async fn only_one_category_fetch_at_a_time() {
        let mut controller = controller(FakeSource::with_questions(two_questions()));
        let request = controller.begin_load_categories().unwrap();
        assert!(controller.begin_load_categories().is_none());

        let outcome = request.execute(controller.source().as_ref()).await;
        controller.complete(outcome);
        assert_eq!(controller.phase(), Phase::Configuring);
        assert_eq!(controller.categories(), [Category::new(9, "General")]);
    }

    #[tokio::test]
    async fn start_before_categories_is_ignored() {
        let mut controller = controller(FakeSource::with_questions(two_questions()));
        assert!(controller.dispatch(Intent::Start(draft(2))).is_none());
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn retry_after_failed_start_reuses_settings() {
        let mut controller = configured(FakeSource::with_questions(two_questions())).await;
        controller.start_quiz(draft(5)).await;
        assert!(controller.view().error.is_some());

        match controller.dispatch(Intent::Retry) {
            Some(FetchRequest::Questions { settings, .. }) => {
                assert_eq!(settings.question_count(), 5);
                assert_eq!(settings.category(), Some(9));
            }
            other => panic!("expected a questions request, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn presenter_sees_every_transition() {
        let mut controller = configured(FakeSource::with_questions(two_questions())).await;
        controller.start_quiz(draft(1)).await;
        controller.submit_answer("Mars");
        controller.advance();

        let phases: Vec<Phase> = controller
            .presenter()
            .views
            .iter()
            .map(|view| view.phase)
            .collect();
        assert_eq!(
            phases,
            [
                Phase::Loading,
                Phase::Configuring,
                Phase::Loading,
                Phase::InProgress,
                Phase::Answered,
                Phase::Finished,
            ]
        );
    }
}
