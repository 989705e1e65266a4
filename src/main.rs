use crossterm::event;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::clock::FrameClock;
use flappy::constants::TARGET_FPS;
use flappy::game::{
    process_input, process_tick, CrashCause, InputOutcome, Scene, SceneEvent,
};
use flappy::{build_info, input, logging, ui};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flappy - terminal arcade game\n");
                println!("Usage: flappy [option]\n");
                println!("Controls:");
                println!("  Space      Flap / start a new run");
                println!("  Esc, q     Quit\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let log_file = logging::init()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let high_score = result?;
    println!("High score: {}", high_score);
    if let Some(path) = log_file {
        println!("Log written to {}", path.display());
    }

    Ok(())
}

/// Run the game loop until the player quits. Returns the session high score.
fn run<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<u32> {
    let mut scene = Scene::new();
    let mut clock = FrameClock::new(TARGET_FPS);
    let mut rng = rand::thread_rng();

    log::info!("Session started at {} fps", TARGET_FPS);

    loop {
        // Drain every pending event before simulating
        while event::poll(Duration::ZERO)? {
            let Some(input) = input::map_event(&event::read()?) else {
                continue;
            };
            match process_input(&mut scene, input, clock.now_ms()) {
                InputOutcome::Quit => {
                    log::info!("Quit with high score {}", scene.high_score());
                    return Ok(scene.high_score());
                }
                InputOutcome::Started => {
                    log::info!("Run started (high score {})", scene.high_score());
                }
                InputOutcome::Flapped | InputOutcome::Ignored => {}
            }
        }

        for event in process_tick(&mut scene, clock.now_ms(), &mut rng) {
            log_scene_event(event);
        }

        terminal.draw(|frame| ui::render_flappy(frame, &scene))?;
        clock.wait_for_next_frame();
    }
}

fn log_scene_event(event: SceneEvent) {
    match event {
        SceneEvent::PipeSpawned { top_height } => {
            log::debug!("Pipe spawned (top {})", top_height);
        }
        SceneEvent::PipePassed { score } => log::debug!("Pipe passed, score {}", score),
        SceneEvent::NewHighScore { high_score } => {
            log::info!("New high score: {}", high_score);
        }
        SceneEvent::Crashed { cause, score } => {
            let what = match cause {
                CrashCause::Ground => "the ground",
                CrashCause::Pipe => "a pipe",
            };
            log::info!("Crashed into {} with score {}", what, score);
        }
    }
}
