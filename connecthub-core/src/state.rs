use tracing::warn;

use connecthub_api::model::achievements::Achievement;
use connecthub_api::model::challenges::Challenge;
use connecthub_api::model::rewards::Reward;
use connecthub_api::model::stats::{AwardResult, StreakUpdate, UserStats};

/// Panels the client can show. Closed set; routing matches on it exhaustively.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Stats,
    Challenges,
    Achievements,
    Rewards,
    Progress,
    Help,
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Stats => "stats",
            Self::Challenges => "challenges",
            Self::Achievements => "achievements",
            Self::Rewards => "rewards",
            Self::Progress => "progress",
            Self::Help => "help",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub language: String,
    pub authenticated: bool,
}

/// Every state change the client can make.
#[derive(Clone, Debug)]
pub enum Action {
    Navigate(Screen),
    SignedIn(Session),
    SignedOut,
    StatsLoaded(UserStats),
    ChallengesLoaded(Vec<Challenge>),
    AchievementsLoaded(Vec<Achievement>),
    RewardsLoaded(Vec<Reward>),
    PointsAwarded(AwardResult),
    StreakUpdated(StreakUpdate),
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub screen: Screen,
    pub session: Option<Session>,
    pub stats: Option<UserStats>,
    pub challenges: Vec<Challenge>,
    pub achievements: Vec<Achievement>,
    pub rewards: Vec<Reward>,
    pub last_award: Option<AwardResult>,
    /// One-shot message for the next render; cleared by every action.
    pub notice: Option<String>,
}

impl AppState {
    pub fn is_signed_in(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.authenticated)
    }

    /// The only place state changes.
    pub fn reduce(&mut self, action: Action) {
        self.notice = None;

        match action {
            Action::Navigate(screen) => self.screen = screen,
            Action::SignedIn(session) => self.session = Some(session),
            Action::SignedOut => *self = Self::default(),
            Action::StatsLoaded(stats) => self.stats = Some(reconcile_level(stats)),
            Action::ChallengesLoaded(challenges) => self.challenges = challenges,
            Action::AchievementsLoaded(achievements) => self.achievements = achievements,
            Action::RewardsLoaded(rewards) => self.rewards = rewards,
            Action::PointsAwarded(result) => self.apply_award(result),
            Action::StreakUpdated(update) => self.apply_streak(update),
            Action::Failed(message) => self.notice = Some(message),
        }
    }

    fn apply_award(&mut self, result: AwardResult) {
        for unlocked in &result.new_achievements {
            match self
                .achievements
                .iter_mut()
                .find(|known| known.id == unlocked.id)
            {
                Some(known) => *known = unlocked.clone(),
                None => self.achievements.push(unlocked.clone()),
            }
        }

        self.notice = Some(format!("+{} points", result.points_awarded));

        // Streak and coins are unknown until stats are loaded.
        if let Some(mut stats) = self.stats.take() {
            let previous_level = stats.level;
            stats.total_points = result.total_points;
            if let Some(coins) = result.coins {
                stats.coins = coins;
            }
            if let Some(level) = result.level {
                stats.level = level;
            }
            let stats = reconcile_level(stats);

            if stats.level > previous_level {
                self.notice = Some(format!("Level up! You reached level {}.", stats.level));
            }
            self.stats = Some(stats);
        }

        self.last_award = Some(result);
    }

    fn apply_streak(&mut self, update: StreakUpdate) {
        // The bonus only adds to a known total.
        if let Some(mut stats) = self.stats.take() {
            stats.current_streak = update.current_streak;
            if let Some(longest) = update.longest_streak {
                stats.longest_streak = Some(longest);
            }
            stats.total_points = stats.total_points.saturating_add(update.bonus_points.max(0));
            self.stats = Some(reconcile_level(stats));
        }

        if update.bonus_points > 0 {
            self.notice = Some(format!("Streak bonus: +{} points", update.bonus_points));
        }
    }
}

/// The client owns the level: it is recomputed from the points so progress
/// is never rendered against a stale level reported by the backend.
fn reconcile_level(mut stats: UserStats) -> UserStats {
    if stats.level_is_consistent() {
        return stats;
    }

    match stats.computed_level() {
        Ok(computed) => {
            warn!(
                reported_level = stats.level,
                computed_level = computed,
                total_points = stats.total_points,
                "backend level disagrees with points; using computed level"
            );
            stats.level = computed;
        }
        Err(e) => warn!(?e, total_points = stats.total_points, "cannot compute level"),
    }
    stats
}
