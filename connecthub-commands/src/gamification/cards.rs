use connecthub_api::ApiError;
use connecthub_api::model::achievements::Achievement;
use connecthub_api::model::challenges::Challenge;
use connecthub_api::model::leveling::{LevelError, LevelProgress};
use connecthub_api::model::rewards::Reward;
use connecthub_api::model::stats::{AwardResult, StreakUpdate, UserStats};
use connecthub_utils::card::Card;
use connecthub_utils::formatting::{format_points, format_streak, progress_bar, status_marker};

pub const PROGRESS_BAR_WIDTH: usize = 20;

pub fn progress_line(progress: &LevelProgress) -> String {
    format!(
        "{} {}%",
        progress_bar(progress.fraction, PROGRESS_BAR_WIDTH),
        progress.percent()
    )
}

pub fn stats_card(stats: &UserStats) -> Card {
    let mut card = Card::new("Your Stats")
        .field("Level", stats.level)
        .field("Points", format_points(stats.total_points))
        .field("Streak", format_streak(stats.current_streak));

    if let Some(longest) = stats.longest_streak {
        card = card.field("Best streak", format_streak(longest));
    }

    card = card.field("Coins", format_points(stats.coins));

    if let Some(rank) = stats.rank {
        card = card.field("Rank", format!("#{}", format_points(rank)));
    }

    match stats.progress() {
        Ok(progress) => card
            .line(String::new())
            .line(progress_line(&progress))
            .footer(format!(
                "{} points to level {}",
                format_points(progress.points_to_next()),
                progress.level + 1
            )),
        Err(e) => card.footer(level_error_message(&e)),
    }
}

pub fn progress_card(progress: &LevelProgress) -> Card {
    Card::new(format!("Level {} Progress", progress.level))
        .field("Points", format_points(progress.total_points))
        .field("Level starts", format_points(progress.level_start))
        .field("Next level", format_points(progress.level_end))
        .field("Into level", format_points(progress.points_into_level()))
        .field("Remaining", format_points(progress.points_to_next()))
        .line(String::new())
        .line(progress_line(progress))
}

pub fn challenge_line(challenge: &Challenge) -> String {
    let (done, target) = challenge.completion();
    let mut line = format!(
        "{} {} (+{} pts) {}/{}",
        status_marker(challenge.completed),
        challenge.title,
        format_points(challenge.points),
        done,
        target
    );

    if !challenge.description.is_empty() {
        line.push_str(&format!("\n    {}", challenge.description));
    }

    line
}

pub fn challenges_card(challenges: &[Challenge]) -> Card {
    if challenges.is_empty() {
        return Card::new("Daily Challenges").line("No challenges today. Check back tomorrow.");
    }

    let completed = challenges.iter().filter(|c| c.completed).count();
    let body = challenges
        .iter()
        .map(challenge_line)
        .collect::<Vec<_>>()
        .join("\n");

    Card::new("Daily Challenges")
        .description(body)
        .footer(format!("{}/{} completed", completed, challenges.len()))
}

pub fn achievement_line(achievement: &Achievement) -> String {
    let mut line = format!(
        "{} {} (+{} pts)",
        status_marker(achievement.unlocked),
        achievement.name,
        format_points(achievement.points)
    );

    if let Some(when) = achievement.unlocked_at.as_deref() {
        line.push_str(&format!(" unlocked {when}"));
    }

    line
}

pub fn reward_line(reward: &Reward, coins: Option<i64>) -> String {
    let availability = match (reward.available, coins) {
        (false, _) => "unavailable",
        (true, Some(coins)) if reward.affordable_with(coins) => "affordable",
        (true, Some(_)) => "need more coins",
        (true, None) => "available",
    };

    format!(
        "{} - {} coins ({})",
        reward.name,
        format_points(reward.cost),
        availability
    )
}

pub fn rewards_card(rewards: &[Reward], coins: Option<i64>) -> Card {
    let title = "Rewards";
    if rewards.is_empty() {
        return Card::new(title).line("No rewards are on offer right now.");
    }

    let card = Card::new(title).description(
        rewards
            .iter()
            .map(|reward| reward_line(reward, coins))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    match coins {
        Some(coins) => card.footer(format!("You have {} coins", format_points(coins))),
        None => card,
    }
}

pub fn award_card(result: &AwardResult, stats: Option<&UserStats>) -> Card {
    let mut card = Card::new("Points Awarded")
        .field("Awarded", format!("+{}", format_points(result.points_awarded)))
        .field("Total", format_points(result.total_points));

    let progress = match stats {
        Some(stats) => stats.progress(),
        None => LevelProgress::for_points(result.total_points),
    };
    if let Ok(progress) = progress {
        card = card
            .field("Level", progress.level)
            .line(progress_line(&progress));
    }

    for achievement in &result.new_achievements {
        card = card.line(format!("Unlocked: {}", achievement.name));
    }

    card
}

pub fn streak_card(update: &StreakUpdate) -> Card {
    let mut card = Card::new("Daily Streak").field("Current", format_streak(update.current_streak));

    if let Some(longest) = update.longest_streak {
        card = card.field("Best", format_streak(longest));
    }

    if update.bonus_points > 0 {
        card = card.field("Bonus", format!("+{}", format_points(update.bonus_points)));
    }

    card
}

pub fn level_error_message(error: &LevelError) -> String {
    match error {
        LevelError::InvalidArgument(message) => format!("Invalid input: {message}"),
        LevelError::Overflow(level) => format!("Level {level} is out of range."),
    }
}

/// User-facing text for a failed backend call.
pub fn failure_message(what: &str, error: &anyhow::Error) -> String {
    match error.downcast_ref::<ApiError>() {
        Some(api) if api.is_unauthorized() => {
            "Not authorized. Set CONNECTHUB_API_TOKEN to a valid token.".to_owned()
        }
        Some(ApiError::InvalidRequest(message)) => format!("Invalid request: {message}"),
        Some(ApiError::Transport { .. }) => {
            format!("Could not reach the gamification service while loading {what}.")
        }
        _ => format!("Request for {what} failed: {error}"),
    }
}
