use connecthub_utils::formatting::display_category;

use crate::CommandMeta;

pub fn unknown_category_message(wanted_category: &str, valid_categories: &[&str]) -> String {
    let valid = valid_categories
        .iter()
        .map(|category| display_category(category))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Unknown category: {}\nValid categories: {}",
        display_category(wanted_category),
        valid
    )
}

pub fn no_commands_message(category: Option<&str>) -> String {
    match category {
        Some(cat) => format!("No commands found in category: {}", display_category(cat)),
        None => "No commands registered.".to_owned(),
    }
}

pub fn page_out_of_range_message(requested_page: usize, total_pages: usize) -> String {
    format!(
        "Page {} does not exist. Available pages: 1-{}.",
        requested_page,
        total_pages.max(1)
    )
}

pub fn grouped_help_description(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category: Option<&str> = None;

    for command in commands {
        if current_category != Some(command.category) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("{}\n", display_category(command.category)));
            current_category = Some(command.category);
        }

        out.push_str(&format!("  {:<14} {}\n", command.name, command.desc));
    }

    if out.is_empty() {
        out.push_str("No commands available.");
    }

    out.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::{grouped_help_description, page_out_of_range_message, unknown_category_message};
    use crate::CommandMeta;

    const A: CommandMeta = CommandMeta {
        name: "stats",
        desc: "Show stats.",
        category: "gamification",
        usage: "!stats",
    };
    const B: CommandMeta = CommandMeta {
        name: "help",
        desc: "List commands.",
        category: "utility",
        usage: "!help",
    };

    #[test]
    fn groups_commands_by_category() {
        let text = grouped_help_description(&[&A, &B]);
        assert_eq!(
            text,
            "Gamification\n  stats          Show stats.\n\nUtility\n  help           List commands."
        );
    }

    #[test]
    fn messages_name_valid_options() {
        assert_eq!(
            unknown_category_message("fun", &["gamification", "utility"]),
            "Unknown category: Fun\nValid categories: Gamification, Utility"
        );
        assert_eq!(
            page_out_of_range_message(4, 2),
            "Page 4 does not exist. Available pages: 1-2."
        );
    }
}
