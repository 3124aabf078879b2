pub mod gamification;
pub mod utility;

use clap::{Parser, Subcommand};

use connecthub_core::state::{Action, Screen};
use connecthub_core::{Context, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::usage::META,
    gamification::stats::META,
    gamification::progress::META,
    gamification::challenges::META,
    gamification::achievements::META,
    gamification::rewards::META,
    gamification::award::META,
    gamification::streak::META,
];

/// Every command the client understands.
#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Route {
    /// Show points, level, streak and coins.
    Stats,
    /// Show progress toward the next level.
    Progress {
        /// Level to measure against (defaults to the level your points imply)
        #[arg(allow_negative_numbers = true)]
        level: Option<i64>,
        /// Total points (defaults to your current total)
        #[arg(allow_negative_numbers = true, requires = "level")]
        points: Option<i64>,
    },
    /// List today's challenges.
    Challenges,
    /// List achievements, unlocked first.
    Achievements {
        /// Page number
        #[arg(long, short, default_value_t = 1)]
        page: usize,
    },
    /// List rewards and whether you can afford them.
    Rewards,
    /// Award points for an action.
    Award {
        /// Points to award
        #[arg(allow_negative_numbers = true)]
        points: i64,
        /// Why the points are awarded
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        reason: Vec<String>,
    },
    /// Check in for today and update your streak.
    Streak,
    /// List available commands.
    Help {
        /// Page number or category
        query: Option<String>,
    },
    /// Show usage syntax for a specific command.
    Usage {
        /// Command name
        command: Option<String>,
    },
}

impl Route {
    pub fn screen(&self) -> Screen {
        match self {
            Self::Stats => Screen::Stats,
            Self::Progress { .. } => Screen::Progress,
            Self::Challenges => Screen::Challenges,
            Self::Achievements { .. } => Screen::Achievements,
            Self::Rewards => Screen::Rewards,
            Self::Award { .. } | Self::Streak => Screen::Stats,
            Self::Help { .. } | Self::Usage { .. } => Screen::Help,
        }
    }

    /// Parse the words of one shell line (without the prefix).
    pub fn parse_words<I, T>(words: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        ShellLine::try_parse_from(words).map(|line| line.route)
    }
}

#[derive(Debug, Parser)]
#[command(name = "connecthub", no_binary_name = true, disable_help_subcommand = true)]
struct ShellLine {
    #[command(subcommand)]
    route: Route,
}

/// Run the handler that owns `route`.
pub async fn dispatch(ctx: &mut Context<'_>, route: Route) -> Result<(), Error> {
    ctx.apply(Action::Navigate(route.screen()));

    match route {
        Route::Stats => gamification::stats::stats(ctx).await,
        Route::Progress { level, points } => {
            gamification::progress::progress(ctx, level, points).await
        }
        Route::Challenges => gamification::challenges::challenges(ctx).await,
        Route::Achievements { page } => gamification::achievements::achievements(ctx, page).await,
        Route::Rewards => gamification::rewards::rewards(ctx).await,
        Route::Award { points, reason } => {
            gamification::award::award(ctx, points, &reason.join(" ")).await
        }
        Route::Streak => gamification::streak::streak(ctx).await,
        Route::Help { query } => utility::help::help(ctx, query.as_deref()),
        Route::Usage { command } => utility::usage::usage(ctx, command.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use connecthub_api::{ApiConfig, GamificationApi};
    use connecthub_core::state::{AppState, Screen};
    use connecthub_core::{Context, Data};

    use super::{COMMANDS, Route, dispatch};

    fn offline_data() -> Data {
        let mut config = ApiConfig::new("http://127.0.0.1:9");
        config.timeout = Duration::from_secs(2);
        Data {
            api: GamificationApi::new(config).unwrap(),
        }
    }

    async fn run(data: &Data, state: &mut AppState, route: Route) -> Vec<String> {
        let mut ctx = Context::new(data, state);
        dispatch(&mut ctx, route).await.unwrap();
        ctx.into_replies()
    }

    #[test]
    fn parses_shell_words_into_routes() {
        assert_eq!(Route::parse_words(["stats"]).unwrap(), Route::Stats);
        assert_eq!(
            Route::parse_words(["award", "20", "shared", "a", "post"]).unwrap(),
            Route::Award {
                points: 20,
                reason: vec!["shared".into(), "a".into(), "post".into()],
            }
        );
        assert_eq!(
            Route::parse_words(["progress", "3", "650"]).unwrap(),
            Route::Progress {
                level: Some(3),
                points: Some(650),
            }
        );
        assert_eq!(
            Route::parse_words(["achievements", "--page", "2"]).unwrap(),
            Route::Achievements { page: 2 }
        );
        assert_eq!(
            Route::parse_words(["help"]).unwrap(),
            Route::Help { query: None }
        );
    }

    #[test]
    fn negative_numbers_reach_validation() {
        assert_eq!(
            Route::parse_words(["progress", "-1", "50"]).unwrap(),
            Route::Progress {
                level: Some(-1),
                points: Some(50),
            }
        );
    }

    #[test]
    fn rejects_unknown_and_incomplete_lines() {
        assert!(Route::parse_words(["dance"]).is_err());
        assert!(Route::parse_words(["award", "20"]).is_err());
        assert!(Route::parse_words(Vec::<String>::new()).is_err());
    }

    #[test]
    fn every_route_has_metadata() {
        for name in [
            "stats",
            "progress",
            "challenges",
            "achievements",
            "rewards",
            "award",
            "streak",
            "help",
            "usage",
        ] {
            assert!(
                COMMANDS.iter().any(|meta| meta.name == name),
                "missing metadata for {name}"
            );
        }
    }

    #[tokio::test]
    async fn progress_with_arguments_works_offline() {
        let data = offline_data();
        let mut state = AppState::default();

        let replies = run(
            &data,
            &mut state,
            Route::Progress {
                level: Some(3),
                points: Some(650),
            },
        )
        .await;

        assert_eq!(replies.len(), 1);
        assert!(replies[0].starts_with("Level 3 Progress"));
        assert!(replies[0].contains("50%"));
        assert_eq!(state.screen, Screen::Progress);
    }

    #[tokio::test]
    async fn progress_rejects_invalid_level() {
        let data = offline_data();
        let mut state = AppState::default();

        let replies = run(
            &data,
            &mut state,
            Route::Progress {
                level: Some(0),
                points: Some(10),
            },
        )
        .await;

        assert_eq!(
            replies,
            vec!["Invalid input: level must be at least 1, got 0".to_owned()]
        );
    }

    #[tokio::test]
    async fn unreachable_backend_is_reported_not_raised() {
        let data = offline_data();
        let mut state = AppState::default();

        let replies = run(&data, &mut state, Route::Stats).await;

        assert_eq!(replies.len(), 1);
        assert_eq!(state.notice.as_deref(), Some(replies[0].as_str()));
        assert!(state.stats.is_none());
    }

    #[tokio::test]
    async fn usage_looks_up_registered_commands() {
        let data = offline_data();
        let mut state = AppState::default();

        let replies = run(
            &data,
            &mut state,
            Route::Usage {
                command: Some("!Award".to_owned()),
            },
        )
        .await;
        assert_eq!(replies, vec!["Usage: !award <points> <reason>".to_owned()]);

        let replies = run(
            &data,
            &mut state,
            Route::Help {
                query: Some("nope".to_owned()),
            },
        )
        .await;
        assert!(replies[0].starts_with("Unknown category: Nope"));
        assert_eq!(state.screen, Screen::Help);
    }
}
