//! Line-oriented driver for [`UsersView`].
//!
//! Each line read from the input replaces the name field, `/add` presses the
//! add button and `/quit` leaves. The page is redrawn after every change.

use std::io::ErrorKind;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::task::JoinSet;
use tracing::warn;

use crate::error::Result;
use crate::view::UsersView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Quit,
    Input(String),
}

pub fn parse_line(line: &str) -> Command {
    match line.trim() {
        "/add" => Command::Add,
        "/quit" => Command::Quit,
        _ => Command::Input(line.to_string()),
    }
}

/// Run the page until `/quit` or end of input.
///
/// Requests run on their own tasks, so a second add can start while the
/// first is still waiting on the server. Failures are only logged. At end of
/// input the requests already started are awaited and the last state drawn;
/// `/quit` abandons them.
pub async fn run<R, W>(view: UsersView, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut changes = view.subscribe();
    let mut requests = JoinSet::new();

    let loader = view.clone();
    requests.spawn(async move {
        if let Err(err) = loader.mount().await {
            warn!(error = %err, "Initial user load failed");
        }
    });

    draw(&mut output, &view).await?;

    let end_of_input = loop {
        tokio::select! {
            // Pending changes are drawn before the next line is read
            biased;

            changed = changes.changed() => {
                if changed.is_err() {
                    break false;
                }
                draw(&mut output, &view).await?;
            }
            Some(_) = requests.join_next(), if !requests.is_empty() => {}
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break true,
                    Err(err) if err.kind() == ErrorKind::InvalidData => {
                        warn!(error = %err, "Skipping unreadable input line");
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                };

                match parse_line(&line) {
                    Command::Quit => break false,
                    Command::Add => {
                        let view = view.clone();
                        requests.spawn(async move {
                            if let Err(err) = view.add_user().await {
                                warn!(error = %err, "Add user failed");
                            }
                        });
                    }
                    Command::Input(value) => view.set_name(value),
                }
            }
        }
    };

    if end_of_input {
        while requests.join_next().await.is_some() {}
        if changes.has_changed().unwrap_or(false) {
            draw(&mut output, &view).await?;
        }
    }

    Ok(())
}

async fn draw<W>(output: &mut W, view: &UsersView) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let frame = format!("{}\n", view.render());
    output.write_all(frame.as_bytes()).await?;
    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("/add"), Command::Add);
        assert_eq!(parse_line("  /quit "), Command::Quit);
    }

    #[test]
    fn test_other_lines_are_input() {
        assert_eq!(parse_line("Bob"), Command::Input("Bob".to_string()));
        assert_eq!(parse_line(""), Command::Input(String::new()));
        assert_eq!(parse_line(" Bob "), Command::Input(" Bob ".to_string()));
    }
}
