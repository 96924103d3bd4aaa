//! callcenter-tui - A terminal dashboard for call-center administration
//!
//! Browse the call log and review campaign results from the terminal.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod tui;

use action::Action;
use anyhow::Result;
use app::App;
use component::Component;
use crossterm::event::Event;
use std::time::Duration;
use tui::Tui;

fn main() -> Result<()> {
    let mut app = App::new();
    app.init()?;

    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    let result = run_app(&mut app, &mut tui);

    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Main event loop
///
/// Draws the UI, polls for events, and feeds the resulting actions
/// through the app until the chain is exhausted.
fn run_app(app: &mut App, tui: &mut Tui) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            draw_result = app.draw(frame, frame.area());
        })?;
        draw_result?;

        let mut action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(width, height)) => Some(Action::Resize(width, height)),
            _ => Some(Action::Tick),
        };

        // Actions can produce follow-up actions
        while let Some(current) = action {
            action = app.update(current)?;
        }
    }

    Ok(())
}
