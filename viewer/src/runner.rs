//! Event loop
//!
//! Reads commands line by line, runs searches in the background and
//! writes every view to the output. When input ends, the loop keeps
//! waiting until the latest search has resolved so its result or error
//! is still shown.

use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::client::RepovizClient;
use crate::command;
use crate::error::SearchError;
use crate::models::UserData;
use crate::session::Session;

/// Animation frame interval for the map rotation
pub const FRAME: Duration = Duration::from_millis(16);

type SearchOutcome = (u64, Result<UserData, SearchError>);

/// Run a session reading commands from `input` and writing views to `output`
pub async fn run<R, W>(client: RepovizClient, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new();

    let (results_tx, mut results_rx) = mpsc::unbounded_channel::<SearchOutcome>();
    let mut lines = input.lines();
    let mut input_open = true;
    let mut frames = tokio::time::interval(FRAME);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    output.write_all(command::help_text().as_bytes()).await?;
    output.flush().await?;

    loop {
        if !input_open && !session.is_loading() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    tracing::debug!("Input closed");
                    input_open = false;
                    continue;
                };
                let reply = session.handle_line(&line);

                if let Some(ticket) = reply.search {
                    let client = client.clone();
                    let results_tx = results_tx.clone();
                    tokio::spawn(async move {
                        let outcome = client.fetch_user_data(&ticket.username).await;
                        if let Err(e) = &outcome {
                            tracing::warn!(username = %ticket.username, error = %e, "Search failed");
                        }
                        // The receiver only goes away on shutdown
                        let _ = results_tx.send((ticket.seq, outcome));
                    });
                }

                output.write_all(reply.output.as_bytes()).await?;
                output.flush().await?;
                if reply.quit {
                    break;
                }
            }
            Some((seq, outcome)) = results_rx.recv() => {
                if let Some(view) = session.apply_result(seq, outcome) {
                    output.write_all(view.as_bytes()).await?;
                    output.flush().await?;
                }
            }
            _ = frames.tick() => {
                session.tick();
            }
        }
    }

    Ok(())
}
