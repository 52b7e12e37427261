//! Terminal front end: turns key presses into intents and keeps the latest
//! [`QuizView`] around for drawing.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::Config;
use crate::controller::{FetchOutcome, FetchRequest, QuizController};
use crate::error::Result;
use crate::models::{Difficulty, SettingsDraft};
use crate::presenter::{Intent, Phase, Presenter, QuizView};
use crate::source::{OpenTriviaDb, TriviaSource};
use crate::terminal::TerminalGuard;
use crate::ui;

/// Question counts offered on the settings form.
pub const COUNT_CHOICES: [u32; 5] = [5, 10, 15, 20, 25];
const DEFAULT_COUNT_INDEX: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Category,
    Difficulty,
    Count,
}

impl FormField {
    const ORDER: [FormField; 3] = [FormField::Category, FormField::Difficulty, FormField::Count];

    fn step(self, forward: bool) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let len = Self::ORDER.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Self::ORDER[next]
    }
}

/// Selections on the settings form. Category index 0 means any category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsForm {
    pub focus: FormField,
    pub category: usize,
    pub difficulty: usize,
    pub count: usize,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            focus: FormField::Category,
            category: 0,
            difficulty: 0,
            count: DEFAULT_COUNT_INDEX,
        }
    }
}

impl SettingsForm {
    fn cycle(&mut self, forward: bool, category_count: usize) {
        let (value, len) = match self.focus {
            FormField::Category => (&mut self.category, category_count + 1),
            FormField::Difficulty => (&mut self.difficulty, Difficulty::ALL.len()),
            FormField::Count => (&mut self.count, COUNT_CHOICES.len()),
        };
        *value = if forward {
            (*value + 1) % len
        } else {
            (*value + len - 1) % len
        };
    }

    pub fn draft(&self, view: &QuizView) -> SettingsDraft {
        SettingsDraft {
            category: self
                .category
                .checked_sub(1)
                .and_then(|index| view.categories.get(index))
                .map(|category| category.id),
            difficulty: Difficulty::ALL.get(self.difficulty).copied(),
            question_count: COUNT_CHOICES.get(self.count).copied(),
        }
    }
}

/// What a key press amounts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Exit,
    Dispatch(Intent),
}

/// Presenter state for the terminal UI.
#[derive(Debug, Default)]
pub struct Screen {
    view: Option<QuizView>,
    pub form: SettingsForm,
    pub answer_cursor: usize,
    pub result_scroll: usize,
}

impl Presenter for Screen {
    fn present(&mut self, view: &QuizView) {
        let previous = self.view.as_ref();
        let previous_phase = previous.map(|v| v.phase);
        let previous_number = previous.and_then(|v| v.question.as_ref()).map(|q| q.number);
        let number = view.question.as_ref().map(|q| q.number);

        if number != previous_number {
            self.answer_cursor = 0;
        }
        if view.phase == Phase::Finished && previous_phase != Some(Phase::Finished) {
            self.result_scroll = 0;
        }
        let left_quiz = matches!(
            previous_phase,
            Some(Phase::InProgress | Phase::Answered | Phase::Finished)
        );
        if view.phase == Phase::Configuring && left_quiz {
            self.form = SettingsForm::default();
        }

        self.view = Some(view.clone());
    }
}

impl Screen {
    pub fn view(&self) -> Option<&QuizView> {
        self.view.as_ref()
    }

    /// Translate a key press in the current phase.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Exit;
        }
        let Some(view) = self.view.clone() else {
            return quit_key(key.code);
        };

        if view.confirming_quit {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    KeyAction::Dispatch(Intent::ConfirmQuit(true))
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    KeyAction::Dispatch(Intent::ConfirmQuit(false))
                }
                _ => KeyAction::None,
            };
        }

        match view.phase {
            Phase::Idle => match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                    KeyAction::Dispatch(Intent::Retry)
                }
                KeyCode::Esc if view.error.is_some() => KeyAction::Dispatch(Intent::DismissError),
                code => quit_key(code),
            },
            Phase::Loading => quit_key(key.code),
            Phase::Configuring => self.handle_settings_key(&view, key.code),
            Phase::InProgress => self.handle_question_key(&view, key.code),
            Phase::Answered => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => {
                    KeyAction::Dispatch(Intent::Next)
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    KeyAction::Dispatch(Intent::RequestQuit)
                }
                _ => KeyAction::None,
            },
            Phase::Finished => self.handle_result_key(&view, key.code),
        }
    }

    fn handle_settings_key(&mut self, view: &QuizView, key: KeyCode) -> KeyAction {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.form.focus = self.form.focus.step(false),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.form.focus = self.form.focus.step(true)
            }
            KeyCode::Left | KeyCode::Char('h') => self.form.cycle(false, view.categories.len()),
            KeyCode::Right | KeyCode::Char('l') => self.form.cycle(true, view.categories.len()),
            KeyCode::Enter if view.can_start => {
                return KeyAction::Dispatch(Intent::Start(self.form.draft(view)));
            }
            KeyCode::Char('r') | KeyCode::Char('R') if view.error.is_some() => {
                return KeyAction::Dispatch(Intent::Retry);
            }
            KeyCode::Esc if view.error.is_some() => {
                return KeyAction::Dispatch(Intent::DismissError);
            }
            code => return quit_key(code),
        }
        KeyAction::None
    }

    fn handle_question_key(&mut self, view: &QuizView, key: KeyCode) -> KeyAction {
        let Some(question) = &view.question else {
            return KeyAction::None;
        };
        let len = question.choices.len().max(1);

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.answer_cursor = (self.answer_cursor + len - 1) % len;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.answer_cursor = (self.answer_cursor + 1) % len;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(choice) = question.choices.get(self.answer_cursor) {
                    return KeyAction::Dispatch(Intent::SelectAnswer(choice.text.clone()));
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(choice) = question.choices.get(index) {
                    self.answer_cursor = index;
                    return KeyAction::Dispatch(Intent::SelectAnswer(choice.text.clone()));
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                return KeyAction::Dispatch(Intent::RequestQuit);
            }
            _ => {}
        }
        KeyAction::None
    }

    fn handle_result_key(&mut self, view: &QuizView, key: KeyCode) -> KeyAction {
        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                let max_scroll = view.history.len().saturating_sub(1);
                self.result_scroll = (self.result_scroll + 1).min(max_scroll);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.result_scroll = self.result_scroll.saturating_sub(1);
            }
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                return KeyAction::Dispatch(Intent::Reset);
            }
            KeyCode::Esc => return KeyAction::Dispatch(Intent::RequestQuit),
            code => return quit_key(code),
        }
        KeyAction::None
    }
}

fn quit_key(key: KeyCode) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Exit,
        _ => KeyAction::None,
    }
}

fn spawn_fetch(
    source: Arc<dyn TriviaSource>,
    request: FetchRequest,
    outcomes: mpsc::UnboundedSender<FetchOutcome>,
) {
    tokio::spawn(async move {
        let outcome = request.execute(source.as_ref()).await;
        let _ = outcomes.send(outcome);
    });
}

/// Run the quiz in the terminal until the user exits.
pub async fn run(config: &Config) -> Result<()> {
    let source = OpenTriviaDb::new(config.api_url.as_str(), config.timeout())?;
    info!(api = source.base_url(), "trivia source ready");

    let mut controller = QuizController::new(Arc::new(source), Screen::default());
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut terminal = TerminalGuard::enter()?;
    let mut events = EventStream::new();

    if let Some(request) = controller.begin_load_categories() {
        spawn_fetch(controller.source(), request, tx.clone());
    }

    loop {
        terminal.draw(|frame| ui::render(frame, controller.presenter()))?;

        tokio::select! {
            Some(outcome) = rx.recv() => controller.complete(outcome),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    match controller.presenter_mut().handle_key(key) {
                        KeyAction::Exit => break,
                        KeyAction::Dispatch(intent) => {
                            debug!(?intent, "dispatching");
                            if let Some(request) = controller.dispatch(intent) {
                                spawn_fetch(controller.source(), request, tx.clone());
                            }
                        }
                        KeyAction::None => {}
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
        }
    }

    info!("exiting");
    Ok(())
}
