//! Terminal viewer.
//!
//! Controls:
//! - `w`/`s`, `a`/`d`, `r`/`f`: move along world X, Y, Z
//! - arrow keys: turn
//! - `q`, Esc or Ctrl-C: quit

use isocast::terminal::Terminal;
use isocast::{RendererState, Result, ViewerConfig};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for isocast.
    // Override with RUST_LOG (e.g. RUST_LOG=isocast=debug). Logs go to stderr,
    // which shares the tty with the frame: redirect it (`2>isocast.log`) when
    // raising the level.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("isocast=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ViewerConfig::default();
    let mut state = RendererState::from_config(&config)?;
    let mut terminal = Terminal::enter()?;

    loop {
        state.render_frame();
        terminal.draw(state.camera(), state.screen())?;
        let command = terminal.next_command()?;
        if !state.apply(command) {
            break;
        }
    }

    drop(terminal);
    tracing::info!("viewer closed");
    Ok(())
}
