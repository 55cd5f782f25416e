use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::Backend, Frame, Terminal};

use crate::ai::{Agent, Difficulty};
use crate::config::AppConfig;
use crate::game::{
    Die, GameOutcome, GameState, MoveError, PlayerKind, PlayerProfile, COLS,
};

use super::{game_view, menu_view};

/// Names handed out to computer opponents at match setup.
const AI_NAMES: [&str; 8] = [
    "Greta", "Hans", "Lotte", "Emil", "Frieda", "Otto", "Mathilda", "Bruno",
];

enum Screen {
    Menu {
        selected: usize,
    },
    NameEntry(NameEntry),
    DifficultySelect {
        player_name: String,
        selected: usize,
    },
    Playing(MatchScreen),
    Results {
        players: [PlayerProfile; 2],
        scores: [u32; 2],
        outcome: GameOutcome,
    },
}

struct NameEntry {
    vs_ai: bool,
    entered: Vec<String>,
    buffer: String,
}

impl NameEntry {
    fn new(vs_ai: bool) -> Self {
        NameEntry {
            vs_ai,
            entered: Vec::new(),
            buffer: String::new(),
        }
    }

    fn prompt(&self) -> String {
        if self.vs_ai {
            "Enter your name".to_string()
        } else {
            format!("Enter name for Player {}", self.entered.len() + 1)
        }
    }

    /// Take the typed name, substituting a default for blank input.
    fn take_name(&mut self) -> String {
        let trimmed = self.buffer.trim();
        let name = if trimmed.is_empty() {
            format!("Player {}", self.entered.len() + 1)
        } else {
            trimmed.to_string()
        };
        self.buffer.clear();
        name
    }
}

/// Everything alive for the duration of one match.
struct MatchScreen {
    players: [PlayerProfile; 2],
    agents: [Option<Box<dyn Agent>>; 2],
    game: GameState,
    roll: Die,
    selected_column: usize,
    message: Option<String>,
    ai_move_due: Option<Instant>,
    think_delay: Duration,
}

impl MatchScreen {
    fn new(players: [PlayerProfile; 2], think_delay: Duration, rng: &mut StdRng) -> Self {
        let agents = players.each_ref().map(|p| match p.kind {
            PlayerKind::Ai(difficulty) => Some(difficulty.agent()),
            PlayerKind::Human => None,
        });

        let mut screen = MatchScreen {
            players,
            agents,
            game: GameState::initial(),
            roll: Die::roll(rng),
            selected_column: 0,
            message: None,
            ai_move_due: None,
            think_delay,
        };
        if !screen.human_turn() {
            screen.note_ai_thinking();
        }
        screen
    }

    fn human_turn(&self) -> bool {
        self.agents[self.game.current_player().index()].is_none()
    }

    fn note_ai_thinking(&mut self) {
        let seat = self.game.current_player();
        self.ai_move_due = Some(Instant::now() + self.think_delay);
        self.message = Some(format!("{} is thinking...", self.players[seat.index()].name));
    }

    /// Roll for the next player and arm the AI timer if it is their turn.
    fn begin_turn(&mut self, rng: &mut StdRng) {
        self.roll = Die::roll(rng);
        self.message = None;
        self.ai_move_due = None;
        if !self.human_turn() {
            self.note_ai_thinking();
        }
    }

    /// Play the current roll into `column`. Returns the follow-up screen
    /// when the move ended the match.
    fn play(&mut self, column: usize, rng: &mut StdRng) -> Option<Screen> {
        match self.game.apply_move_mut(column, self.roll) {
            Ok(()) => {
                if let Some(outcome) = self.game.outcome() {
                    Some(Screen::Results {
                        players: self.players.clone(),
                        scores: self.game.scores(),
                        outcome,
                    })
                } else {
                    self.begin_turn(rng);
                    None
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some(format!("Column {} is full, pick another.", column + 1));
                None
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Pick a column between 1 and 3.".to_string());
                None
            }
            Err(MoveError::GameOver) => None,
        }
    }

    /// Let a due AI move fire. Called from the event-loop tick.
    fn tick_ai(&mut self, rng: &mut StdRng) -> Option<Screen> {
        if self.human_turn() {
            return None;
        }
        match self.ai_move_due {
            Some(due) if Instant::now() >= due => {
                self.ai_move_due = None;
                let seat = self.game.current_player();
                let column = match self.agents[seat.index()].as_mut() {
                    Some(agent) => agent.select_column(&self.game, self.roll),
                    None => return None,
                };
                self.play(column, rng)
            }
            _ => None,
        }
    }
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    rng: StdRng,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            config,
            screen: Screen::Menu { selected: 0 },
            rng: StdRng::from_os_rng(),
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick()?;
        }
        Ok(())
    }

    /// One pass of the event loop: poll for input, then let a pending AI
    /// move fire.
    fn tick(&mut self) -> io::Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }

        if let Screen::Playing(m) = &mut self.screen {
            if let Some(next) = m.tick_ai(&mut self.rng) {
                self.screen = next;
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        let think_delay = Duration::from_millis(self.config.ai.think_delay_ms);
        let default_difficulty = self.config.ai.default_difficulty;

        let next = match &mut self.screen {
            Screen::Menu { selected } => match key.code {
                KeyCode::Up => {
                    *selected = selected.saturating_sub(1);
                    None
                }
                KeyCode::Down => {
                    *selected = (*selected + 1).min(2);
                    None
                }
                KeyCode::Char('1') => Some(Screen::NameEntry(NameEntry::new(false))),
                KeyCode::Char('2') => Some(Screen::NameEntry(NameEntry::new(true))),
                KeyCode::Char('3') | KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                    None
                }
                KeyCode::Enter => match *selected {
                    0 => Some(Screen::NameEntry(NameEntry::new(false))),
                    1 => Some(Screen::NameEntry(NameEntry::new(true))),
                    _ => {
                        self.should_quit = true;
                        None
                    }
                },
                _ => None,
            },

            Screen::NameEntry(entry) => match key.code {
                KeyCode::Esc => Some(Screen::Menu { selected: 0 }),
                KeyCode::Backspace => {
                    entry.buffer.pop();
                    None
                }
                KeyCode::Enter => {
                    let name = entry.take_name();
                    if entry.vs_ai {
                        Some(Screen::DifficultySelect {
                            player_name: name,
                            selected: difficulty_index(default_difficulty),
                        })
                    } else {
                        entry.entered.push(name);
                        if entry.entered.len() == 2 {
                            let players = [
                                PlayerProfile::human(entry.entered[0].clone()),
                                PlayerProfile::human(entry.entered[1].clone()),
                            ];
                            Some(Screen::Playing(MatchScreen::new(
                                players,
                                think_delay,
                                &mut self.rng,
                            )))
                        } else {
                            None
                        }
                    }
                }
                KeyCode::Char(c) if !c.is_control() && entry.buffer.chars().count() < 16 => {
                    entry.buffer.push(c);
                    None
                }
                _ => None,
            },

            Screen::DifficultySelect {
                player_name,
                selected,
            } => match key.code {
                KeyCode::Esc => Some(Screen::Menu { selected: 0 }),
                KeyCode::Up => {
                    *selected = selected.saturating_sub(1);
                    None
                }
                KeyCode::Down => {
                    *selected = (*selected + 1).min(Difficulty::ALL.len() - 1);
                    None
                }
                KeyCode::Char(c @ '1'..='3') => {
                    let difficulty = Difficulty::ALL[c as usize - '1' as usize];
                    Some(Self::start_ai_match(
                        std::mem::take(player_name),
                        difficulty,
                        think_delay,
                        &mut self.rng,
                    ))
                }
                KeyCode::Enter => {
                    let difficulty = Difficulty::ALL[*selected];
                    Some(Self::start_ai_match(
                        std::mem::take(player_name),
                        difficulty,
                        think_delay,
                        &mut self.rng,
                    ))
                }
                _ => None,
            },

            Screen::Playing(m) => match key.code {
                KeyCode::Esc => Some(Screen::Menu { selected: 0 }),
                _ if !m.human_turn() => None,
                KeyCode::Char(c @ '1'..='3') => m.play(c as usize - '1' as usize, &mut self.rng),
                KeyCode::Left => {
                    m.selected_column = m.selected_column.saturating_sub(1);
                    None
                }
                KeyCode::Right => {
                    m.selected_column = (m.selected_column + 1).min(COLS - 1);
                    None
                }
                KeyCode::Enter | KeyCode::Char(' ') => m.play(m.selected_column, &mut self.rng),
                _ => None,
            },

            Screen::Results { .. } => match key.code {
                KeyCode::Enter | KeyCode::Esc => Some(Screen::Menu { selected: 0 }),
                _ => None,
            },
        };

        if let Some(next) = next {
            self.screen = next;
        }
    }

    fn start_ai_match(
        player_name: String,
        difficulty: Difficulty,
        think_delay: Duration,
        rng: &mut StdRng,
    ) -> Screen {
        let ai_name = AI_NAMES[rng.random_range(0..AI_NAMES.len())];
        let players = [
            PlayerProfile::human(player_name),
            PlayerProfile::ai(ai_name, difficulty),
        ];
        Screen::Playing(MatchScreen::new(players, think_delay, rng))
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        match &self.screen {
            Screen::Menu { selected } => menu_view::render_menu(frame, *selected),
            Screen::NameEntry(entry) => {
                menu_view::render_name_entry(frame, &entry.prompt(), &entry.buffer)
            }
            Screen::DifficultySelect { selected, .. } => {
                menu_view::render_difficulty(frame, *selected, self.config.ai.default_difficulty)
            }
            Screen::Playing(m) => game_view::render(
                frame,
                &m.game,
                &m.players,
                m.roll,
                m.selected_column,
                m.human_turn(),
                &m.message,
            ),
            Screen::Results {
                players,
                scores,
                outcome,
            } => menu_view::render_results(frame, players, *scores, *outcome),
        }
    }
}

fn difficulty_index(difficulty: Difficulty) -> usize {
    Difficulty::ALL
        .iter()
        .position(|&d| d == difficulty)
        .unwrap_or(1)
}
