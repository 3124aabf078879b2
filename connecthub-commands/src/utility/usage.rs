use connecthub_core::{Context, Error};
use connecthub_utils::COMMAND_PREFIX;

use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "Show usage syntax for a specific command.",
    category: "utility",
    usage: "!usage <command>",
};

pub fn usage(ctx: &mut Context<'_>, command: Option<&str>) -> Result<(), Error> {
    let Some(raw_name) = command else {
        ctx.say(format!("Usage: {}", META.usage));
        return Ok(());
    };

    let lookup = raw_name
        .trim()
        .trim_start_matches(COMMAND_PREFIX)
        .to_ascii_lowercase();

    let Some(command) = COMMANDS.iter().find(|command| command.name == lookup) else {
        ctx.say(format!("Unknown command: {}", lookup));
        return Ok(());
    };

    ctx.say(format!("Usage: {}", command.usage));
    Ok(())
}
