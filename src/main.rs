use petpal::api::PetPalClient;
use petpal::app::App;
use petpal::cli::{handle_health_command, parse_args, version_string, CliCommand, USAGE};
use petpal::input::{CommandRegistry, InputContext};
use petpal::startup::{init_tracing, PetPalConfig};
use petpal::terminal::{setup_panic_hook, TerminalManager};
use petpal::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace};

/// Animation tick (about 60 fps)
const TICK_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, USAGE);
            std::process::exit(2);
        }
    };

    match args.command {
        CliCommand::Version => {
            println!("{}", version_string());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Health | CliCommand::RunTui => {}
    }

    color_eyre::install()?;

    let mut config = PetPalConfig::from_env()?;
    if let Some(url) = args.api_url.as_deref() {
        config = config.with_api_base_url(url)?;
    }

    // The TUI owns stdout, so logs go to a file. Startup continues without
    // logging if the file cannot be opened.
    let logging = init_tracing(&config);
    info!(
        version = petpal::cli::VERSION,
        api = %config.api_base_url,
        recipe_count = config.recipe_count,
        logging,
        "starting petpal"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let client = PetPalClient::new(config.api_base_url.clone());

    if args.command == CliCommand::Health {
        let healthy = runtime.block_on(handle_health_command(&client));
        std::process::exit(if healthy { 0 } else { 1 });
    }

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(client, config.recipe_count);

    let result = runtime.block_on(async {
        app.start_reference_data_load();
        run_app(manager.terminal(), &mut app).await
    });

    manager.restore()?;
    info!("petpal exited");
    result
}

/// Main event loop: keys, paste and resize from the terminal, replies from
/// spawned requests, and the animation tick.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;

    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = ticker.tick() => app.tick(),

            Some(msg) = message_rx.recv() => app.handle_message(msg),

            event = event_stream.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    let ctx = InputContext::new(app.focus)
                        .with_notification(app.notification.is_some());
                    match registry.dispatch(key, &ctx) {
                        Some(cmd) => {
                            trace!(?cmd, "command");
                            app.handle_command(cmd);
                        }
                        None => trace!(code = ?key.code, "unbound key"),
                    }
                }
                Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                Some(Ok(Event::Resize(width, height))) => {
                    debug!(width, height, "terminal resized");
                    app.mark_dirty();
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => return Ok(()),
            },
        }
    }
}
