use datadeck::app::App;
use datadeck::cli::{parse_args, print_help, print_version, CliCommand};
use datadeck::config::AppConfig;
use datadeck::coordinator::FetchCompletion;
use datadeck::logging::init_logging;
use datadeck::terminal::{setup_panic_hook, TerminalManager};
use datadeck::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Handle CLI flags before any terminal setup
    let options = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            print_version();
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            print_help();
            return Ok(());
        }
        Ok(CliCommand::Run(options)) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let config = match AppConfig::from_env() {
        Ok(config) => config.apply_cli(&options),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let log_path = init_logging(config.log_file.as_deref());

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    tracing::info!(
        version = datadeck::cli::VERSION,
        log = ?log_path,
        delay_scale = config.delay_scale,
        seed = ?config.seed,
        "Starting datadeck"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut manager = TerminalManager::new()?;
        let mut app = App::new(config);
        app.initialize();

        let result = run_app(manager.terminal(), &mut app).await;

        app.dispose();
        manager.restore()?;
        result
    })?;

    tracing::info!("Exited cleanly");
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the completion receiver from the coordinator (we need ownership for select!)
    let mut completion_rx: Option<mpsc::UnboundedReceiver<FetchCompletion>> =
        app.take_completion_receiver();

    let mut ticker = tokio::time::interval(app.config.tick_rate);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            let state = app.screen_state();
            let tick = app.tick_count;
            terminal.draw(|f| ui::render_scrolled(f, &state, tick, &mut app.scroll))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Terminal event error");
                    }
                    None => app.quit(),
                }
            }

            Some(completion) = async {
                match completion_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_completion(completion);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
