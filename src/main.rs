use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::config::{self, Command, Config, USAGE};
use flappy::core::constants::TICKS_PER_SECOND;
use flappy::input::{ClickTarget, InputMapper};
use flappy::ui::{game_over_targets, render_game, LoginAction, LoginScreen};
use flappy::utils::{build_info, logging, persistence};
use flappy::{Control, GameLoop, JsonScoreStore, Phase, Ticker};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::info;

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> io::Result<()> {
    let env_lookup = |key: &str| std::env::var(key).ok();
    let config = match config::parse_args(std::env::args().skip(1), &env_lookup) {
        Ok(Command::Play(config)) => config,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    match persistence::log_path() {
        Ok(path) => {
            if let Err(e) = logging::init(&path, &config.log_filter) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let scores_path = config.resolve_scores_path()?;
    info!(path = %scores_path.display(), version = %build_info::version_line(), "starting");
    let store = JsonScoreStore::new(scores_path);

    // Setup terminal
    let key_releases = supports_keyboard_enhancement().unwrap_or(false);
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    if key_releases {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = run(&mut terminal, &config, store, InputMapper::new(key_releases));

    // Restore terminal even if the session failed
    if key_releases {
        terminal
            .backend_mut()
            .execute(PopKeyboardEnhancementFlags)?;
    }
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    terminal.show_cursor()?;

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run(
    terminal: &mut Term,
    config: &Config,
    store: JsonScoreStore,
    mapper: InputMapper,
) -> io::Result<()> {
    let player = match &config.player {
        Some(player) => player.clone(),
        None => match login(terminal)? {
            Some(player) => player,
            None => return Ok(()),
        },
    };

    let mut game = if config.strict_scores {
        GameLoop::start(player, store)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
    } else {
        GameLoop::start_or_default(player, store)
    };

    let mut ticker = Ticker::new(TICKS_PER_SECOND);
    let mut rng = rand::thread_rng();
    let mut last_advance = Instant::now();

    loop {
        terminal.draw(|f| {
            let area = f.size();
            render_game(f, area, &game);
        })?;
        let buttons = game_over_targets(terminal.size()?);

        // Wait for input until the next tick is due, then drain the queue
        let timeout = ticker.time_until_next(last_advance.elapsed());
        if event::poll(timeout)? {
            loop {
                let event = event::read()?;
                let targets: &[ClickTarget] = if game.session().phase == Phase::GameOver {
                    &buttons
                } else {
                    &[]
                };
                for input in mapper.map(&event, targets) {
                    if game.handle_input(input) == Control::Exit {
                        return Ok(());
                    }
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let now = Instant::now();
        let due = ticker.advance(now - last_advance);
        last_advance = now;
        for _ in 0..due {
            let now_ms = ticker.tick();
            game.tick(now_ms, &mut rng);
        }
    }
}

/// Show the login gate. Returns `None` if the player quit instead.
fn login(terminal: &mut Term) -> io::Result<Option<String>> {
    let mut screen = LoginScreen::new();
    loop {
        terminal.draw(|f| {
            let area = f.size();
            screen.draw(f, area);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match screen.handle_key(key) {
                    LoginAction::Submit(player) => {
                        info!(%player, "logged in");
                        return Ok(Some(player));
                    }
                    LoginAction::Quit => {
                        info!("login cancelled");
                        return Ok(None);
                    }
                    LoginAction::None => {}
                }
            }
        }
    }
}
