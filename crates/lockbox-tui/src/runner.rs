//! Main TUI runner: drives the engine and draws frames

use lockbox_app::Engine;
use lockbox_core::prelude::*;

use crate::{event, render, terminal};

/// Run the landing page until the user quits or a signal arrives
pub async fn run(mut engine: Engine) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    engine.start();
    info!("Landing page started");

    let result = run_loop(&mut term, &mut engine).await;

    engine.shutdown();
    ratatui::restore();

    if let Err(e) = &result {
        error!("Landing page stopped with error: {}", e);
    }
    result
}

async fn run_loop(term: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        term.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }

        // Let timer tasks and the action spawns make progress
        tokio::task::yield_now().await;
    }
    Ok(())
}
