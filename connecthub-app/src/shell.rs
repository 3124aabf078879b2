use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error};

use connecthub_commands::{Route, dispatch};
use connecthub_core::state::AppState;
use connecthub_core::{Context, Data};
use connecthub_utils::COMMAND_PREFIX;
use connecthub_utils::parse::split_command_line;

#[derive(Debug, PartialEq, Eq)]
enum ShellInput {
    Empty,
    Quit,
    Hint,
    Invalid(String),
    Run(Route),
}

fn interpret(line: &str) -> ShellInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ShellInput::Empty;
    }

    if trimmed
        .strip_prefix(COMMAND_PREFIX)
        .is_some_and(|rest| rest.trim().is_empty())
    {
        return ShellInput::Invalid(format!(
            "Type a command after `{COMMAND_PREFIX}`, for example {COMMAND_PREFIX}help."
        ));
    }

    let Some(words) = split_command_line(trimmed) else {
        return if trimmed.starts_with(COMMAND_PREFIX) {
            ShellInput::Invalid("Could not read that command (unbalanced quotes?).".to_owned())
        } else {
            ShellInput::Hint
        };
    };

    if matches!(words[0].as_str(), "quit" | "exit") {
        return ShellInput::Quit;
    }

    match Route::parse_words(&words) {
        Ok(route) => ShellInput::Run(route),
        Err(e) => ShellInput::Invalid(e.render().to_string().trim_end().to_owned()),
    }
}

pub async fn run(data: &Data, state: &mut AppState) -> anyhow::Result<()> {
    println!("ConnectHub gamification shell. Type {COMMAND_PREFIX}help for commands, {COMMAND_PREFIX}quit to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("connecthub:{}> ", state.screen.label());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match interpret(&line) {
            ShellInput::Empty => {}
            ShellInput::Quit => break,
            ShellInput::Hint => {
                println!("Commands start with `{COMMAND_PREFIX}`. Try {COMMAND_PREFIX}help.")
            }
            ShellInput::Invalid(message) => {
                debug!(line = %line.trim(), "unparseable shell line");
                println!("{message}");
            }
            ShellInput::Run(route) => {
                let mut ctx = Context::new(data, state);
                if let Err(e) = dispatch(&mut ctx, route).await {
                    error!(?e, "command error");
                    ctx.say("Something went wrong while running this command.");
                }

                for reply in ctx.into_replies() {
                    println!("{reply}\n");
                }
            }
        }
    }

    Ok(())
}
