//! Line-based terminal front end.
//!
//! Reads commands from stdin and drives the session one [`Command`] at a
//! time. A one-second interval feeds countdown ticks while a challenge is
//! open; the interval is reset whenever a new challenge starts.

pub mod input;
pub mod render;

use anyhow::Result;
use input::{HELP, Input};
use std::io::Write;
use strictly_checkers::{CheckersGame, Command, Event, GameConfig, GameError, Side, Tick};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Duration, MissedTickBehavior, interval, sleep};
use tracing::{debug, info, instrument, warn};

/// Runs an interactive game until `quit` or end of input.
#[instrument(skip_all)]
pub async fn run(config: GameConfig) -> Result<()> {
    let ai_delay = Duration::from_millis(*config.ai_delay_ms());
    let mut game = CheckersGame::new(config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    println!("Strictly Checkers. Type 'help' for commands.\n");
    print!("{}", render::frame(&game.snapshot()));

    loop {
        if game.to_move() == Side::Ai && !game.phase().is_over() {
            sleep(ai_delay).await;
            let result = game.dispatch(Command::AiTurn);
            report(&game, result);
            continue;
        }

        prompt()?;
        let open_challenge = game.active_challenge().map(|active| active.id());

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("Input closed");
                    break;
                };
                match input::parse(&line) {
                    Ok(Input::Quit) => break,
                    Ok(Input::Game(command)) => {
                        let result = game.dispatch(command);
                        if let Ok(Event::ChallengeStarted(_)) = &result {
                            ticker.reset();
                        }
                        report(&game, result);
                    }
                    Ok(Input::Hint) => println!("{}", game.hint()),
                    Ok(Input::Board) => print!("{}", render::frame(&game.snapshot())),
                    Ok(Input::Help) => println!("{HELP}"),
                    Ok(Input::Empty) => {}
                    Err(e) => println!("{e}"),
                }
            }
            _ = ticker.tick(), if open_challenge.is_some() => {
                if let Some(id) = open_challenge {
                    let result = game.dispatch(Command::Tick(id));
                    report(&game, result);
                }
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

/// Prints what a command did.
fn report(game: &CheckersGame, result: Result<Event, GameError>) {
    let event = match result {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Command rejected");
            println!("{e}");
            return;
        }
    };
    debug!(?event, "Command applied");

    match event {
        Event::Selected { cell, destinations } => {
            print!("{}", render::frame(&game.snapshot()));
            if destinations.is_empty() {
                println!("{cell} has no legal moves.");
            }
        }
        Event::SelectionCleared => println!("Not a legal move. Selection cleared."),
        Event::Ignored => println!("Select one of your pieces."),
        Event::ChallengeStarted(_) => {
            if let Some(view) = game.snapshot().challenge() {
                print!("{}", render::challenge(view));
            }
        }
        Event::AnswerChosen(answer) => {
            println!("Chosen: {}. Type 'submit' to answer.", strictly_checkers::word(answer));
        }
        Event::Resolved(resolution) | Event::Ticked(Tick::Expired(resolution)) => {
            println!("\n{}", render::resolution(&resolution));
            print!("{}", render::frame(&game.snapshot()));
        }
        Event::Ticked(Tick::Remaining(left)) => {
            if left <= 10 || left % 30 == 0 {
                println!("\n{left}s left");
            }
        }
        Event::Ticked(Tick::Stale) => {}
        Event::AiMoved(ai) => {
            println!("{}", render::ai_move(&ai));
            print!("{}", render::frame(&game.snapshot()));
        }
        Event::NewGame => {
            println!("New game.");
            print!("{}", render::frame(&game.snapshot()));
        }
    }
}
