use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy_rank::game::session::report_game_over;
use flappy_rank::ui;
use flappy_rank::ui::id_entry_scene::IdEntryScreen;
use flappy_rank::{
    FileStorage, GameConfig, GameOverSummary, GameSession, IdentitySession, RankingStore, Screen,
    ScreenEvent, FRAME_INTERVAL_MS,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let config = GameConfig::default();
    if let Err(e) = config.validate() {
        eprintln!("Invalid game configuration: {}", e);
        std::process::exit(1);
    }

    let mut ranking = RankingStore::new(FileStorage::new()?);
    let mut identity = IdentitySession::new();
    let mut id_entry = IdEntryScreen::new();
    let mut screen = Screen::IdEntry;
    let mut session: Option<GameSession> = None;
    let mut summary: Option<GameOverSummary> = None;
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_frame = Instant::now();

    // Main loop
    loop {
        match screen {
            Screen::IdEntry => {
                terminal.draw(|f| ui::id_entry_scene::render(f, f.size(), &id_entry))?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char(c) => {
                                id_entry.handle_char(c);
                                id_entry.error = None;
                            }
                            KeyCode::Backspace => id_entry.handle_backspace(),
                            KeyCode::Enter => match identity.validate(&id_entry.input) {
                                Ok(_) => {
                                    id_entry = IdEntryScreen::new();
                                    screen = screen
                                        .apply(ScreenEvent::IdentityValidated, identity.is_set());
                                }
                                Err(e) => id_entry.error = Some(e.to_string()),
                            },
                            KeyCode::Tab => {
                                screen = screen
                                    .apply(ScreenEvent::ViewRankingRequested, identity.is_set());
                            }
                            KeyCode::Esc => break,
                            _ => {}
                        }
                    }
                }
            }

            Screen::StartScreen => {
                let user = match identity.current() {
                    Some(user) => user.clone(),
                    // Shouldn't happen: StartScreen is only reachable signed in.
                    None => {
                        screen = Screen::IdEntry;
                        continue;
                    }
                };
                terminal.draw(|f| ui::start_scene::render(f, f.size(), &user))?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char(' ') | KeyCode::Enter => {
                                screen =
                                    screen.apply(ScreenEvent::StartRequested, identity.is_set());
                            }
                            KeyCode::Char('r') | KeyCode::Char('R') => {
                                screen = screen
                                    .apply(ScreenEvent::ViewRankingRequested, identity.is_set());
                            }
                            KeyCode::Esc | KeyCode::Char('q') => break,
                            _ => {}
                        }
                    }
                }
            }

            Screen::Playing => {
                // A fresh session is built on entry; restarts land here with
                // `session` already cleared.
                if session.is_none() {
                    session = Some(GameSession::start(&config));
                    last_frame = Instant::now();
                }
                if let Some(game) = session.as_ref() {
                    terminal.draw(|f| ui::play_scene::render(f, f.size(), game, &config))?;
                }

                let mut view_ranking = false;
                if event::poll(Duration::from_millis(5))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            // Every flap trigger maps to the same impulse.
                            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                                if let Some(game) = session.as_mut() {
                                    game.flap(&config);
                                }
                            }
                            KeyCode::Char('r') | KeyCode::Char('R') => view_ranking = true,
                            KeyCode::Esc | KeyCode::Char('q') => break,
                            _ => {}
                        }
                    }
                }
                if view_ranking {
                    // Leaving Playing halts the tick loop; the paused run is
                    // abandoned, a new one starts from the start screen.
                    session = None;
                    screen = screen.apply(ScreenEvent::ViewRankingRequested, identity.is_set());
                    continue;
                }

                if last_frame.elapsed() >= Duration::from_millis(FRAME_INTERVAL_MS) {
                    let ended = match session.as_mut() {
                        Some(game) => game.tick(&config, &mut rng),
                        None => false,
                    };
                    last_frame = Instant::now();

                    if ended {
                        if let Some(game) = session.as_ref() {
                            summary = Some(report_game_over(game, &identity, &mut ranking)?);
                        }
                        session = None;
                        screen = screen.apply(ScreenEvent::SessionOver, identity.is_set());
                    }
                }
            }

            Screen::GameOver => {
                let shown = match summary.as_ref() {
                    Some(summary) => summary.clone(),
                    None => GameOverSummary {
                        final_score: 0,
                        best_score: 0,
                    },
                };
                terminal
                    .draw(|f| ui::game_over_scene::render(f, f.size(), &shown, identity.current()))?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char(' ') | KeyCode::Enter => {
                                summary = None;
                                screen =
                                    screen.apply(ScreenEvent::RestartRequested, identity.is_set());
                            }
                            KeyCode::Char('r') | KeyCode::Char('R') => {
                                screen = screen
                                    .apply(ScreenEvent::ViewRankingRequested, identity.is_set());
                            }
                            KeyCode::Esc => {
                                screen = screen.apply(ScreenEvent::ExitRequested, identity.is_set());
                                identity.clear();
                                summary = None;
                                id_entry = IdEntryScreen::new();
                            }
                            KeyCode::Char('q') => break,
                            _ => {}
                        }
                    }
                }
            }

            Screen::RankingView => {
                let records = ranking.sorted_descending();
                terminal.draw(|f| ui::ranking_scene::render(f, f.size(), &records))?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                                screen = screen.apply(ScreenEvent::BackRequested, identity.is_set());
                            }
                            KeyCode::Char('q') => break,
                            _ => {}
                        }
                    }
                }
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
