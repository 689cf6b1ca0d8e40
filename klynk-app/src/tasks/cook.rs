//! Cook loop
//!
//! Waits on the session channel and the cooking clock. Ticks and
//! commands are applied to the controller one at a time, in arrival
//! order, and the screen is redrawn after anything visible changed.

use std::io::Write;

use klynk_core::catalog::{CategoryFilter, RecipeFilter, ALL_CATEGORIES_ID};
use klynk_core::state::{Event, SessionState};
use klynk_protocol::RecipeSource;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, warn};

use super::tick::{Ticker, TICK_PERIOD};
use crate::channels::Message;
use crate::controller::Controller;
use crate::display::Renderer;
use crate::error::AppError;
use crate::input::{Command, HELP_TEXT};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// User pressed `q`
    Quit,
    /// User backed out to the recipe list
    Browsing,
    /// Input ran out or every sender hung up
    Closed,
}

/// Run an interactive session until it ends
pub async fn run_session<S, W>(
    controller: &mut Controller<S>,
    rx: &mut Receiver<Message>,
    out: &mut W,
) -> Result<SessionEnd, AppError>
where
    S: RecipeSource,
    W: Write,
{
    let mut renderer = Renderer::new();
    let mut ticker = Ticker::every(TICK_PERIOD);
    draw(controller, &mut renderer, out, None)?;

    let end = loop {
        tokio::select! {
            biased;

            message = rx.recv() => {
                let Some(message) = message else {
                    break SessionEnd::Closed;
                };
                if let Some(end) =
                    handle_message(controller, &mut renderer, &mut ticker, out, message)?
                {
                    break end;
                }
            }

            () = ticker.next() => {
                let event = controller.tick();
                let running = controller.sequencer().is_some_and(|s| s.is_active());
                if event.is_some() || running {
                    draw(controller, &mut renderer, out, None)?;
                }
            }
        }
    };

    info!(?end, "session ended");
    Ok(end)
}

fn handle_message<S, W>(
    controller: &mut Controller<S>,
    renderer: &mut Renderer,
    ticker: &mut Ticker,
    out: &mut W,
    message: Message,
) -> Result<Option<SessionEnd>, AppError>
where
    S: RecipeSource,
    W: Write,
{
    match message {
        Message::Input(Command::Quit) => return Ok(Some(SessionEnd::Quit)),
        Message::Input(Command::Help) => {
            renderer.render_text(HELP_TEXT);
            write_screen(renderer, out)?;
        }
        Message::Input(command) => {
            if controller.process_command(command) == Some(Event::TimerStarted) {
                ticker.rearm();
            }
            draw(controller, renderer, out, None)?;
            if controller.state() == SessionState::Browsing {
                return Ok(Some(SessionEnd::Browsing));
            }
        }
        Message::Rejected(e) => {
            debug!(error = %e, "input rejected");
            let notice = e.to_string();
            draw(controller, renderer, out, Some(&notice))?;
        }
        Message::InputClosed => return Ok(Some(SessionEnd::Closed)),
    }
    Ok(None)
}

/// Render the screen for the controller's current state
pub fn render_current_state<S: RecipeSource>(controller: &Controller<S>, renderer: &mut Renderer) {
    match controller.state() {
        SessionState::Browsing | SessionState::Loading => {
            let filter = RecipeFilter::default();
            match controller.catalog(&filter) {
                Ok(recipes) => renderer.render_catalog(
                    filter.section_title(),
                    controller.categories(),
                    selected_category(&filter.category),
                    &recipes,
                ),
                Err(e) => {
                    warn!(error = %e, "catalog unavailable");
                    renderer.render_text("The recipe catalog is unavailable.");
                }
            }
        }
        SessionState::Detail => {
            if let (Some(recipe), Some(servings)) = (controller.recipe(), controller.servings()) {
                renderer.render_detail(
                    recipe,
                    servings,
                    &controller.ingredient_groups(),
                    controller.checklist(),
                );
            }
        }
        SessionState::Cooking => {
            if let (Some(recipe), Some(sequencer)) = (controller.recipe(), controller.sequencer()) {
                renderer.render_cooking(&recipe.title, sequencer, controller.is_complete());
            }
        }
        SessionState::NotFound => renderer.render_not_found(controller.requested_id()),
    }

    if let Some(notice) = controller.notice() {
        renderer.push_notice(notice);
    }
}

/// Category pill id for a filter
pub fn selected_category(category: &CategoryFilter) -> &str {
    match category {
        CategoryFilter::All => ALL_CATEGORIES_ID,
        CategoryFilter::Named(name) => name,
    }
}

fn draw<S, W>(
    controller: &Controller<S>,
    renderer: &mut Renderer,
    out: &mut W,
    notice: Option<&str>,
) -> Result<(), AppError>
where
    S: RecipeSource,
    W: Write,
{
    render_current_state(controller, renderer);
    if let Some(notice) = notice {
        renderer.push_notice(notice);
    }
    write_screen(renderer, out)
}

fn write_screen<W: Write>(renderer: &Renderer, out: &mut W) -> Result<(), AppError> {
    writeln!(out)?;
    write!(out, "{}", renderer.screen())?;
    out.flush()?;
    Ok(())
}
