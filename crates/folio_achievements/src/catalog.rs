//! Achievement catalog
//!
//! Static display metadata for every achievement plus the threshold table
//! mapping `(counter, exact count)` to the achievement it grants.

use folio_toast::{IconId, ToastContent};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Blog,
    Meta,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 2] = [Self::Blog, Self::Meta];

    pub fn title(&self) -> &'static str {
        match self {
            AchievementCategory::Blog => "Blog",
            AchievementCategory::Meta => "Meta",
        }
    }
}

/// Display content shown in toasts and the achievements modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AchievementContent {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstRead,
    Bookworm,
    Bibliophile,
    Tinkerer,
    Curious,
}

impl AchievementId {
    /// Catalog order
    pub const ALL: [AchievementId; 5] = [
        AchievementId::FirstRead,
        AchievementId::Bookworm,
        AchievementId::Bibliophile,
        AchievementId::Tinkerer,
        AchievementId::Curious,
    ];

    pub fn category(&self) -> AchievementCategory {
        match self {
            AchievementId::FirstRead | AchievementId::Bookworm | AchievementId::Bibliophile => {
                AchievementCategory::Blog
            }
            AchievementId::Tinkerer | AchievementId::Curious => AchievementCategory::Meta,
        }
    }

    pub fn content(&self) -> AchievementContent {
        match self {
            AchievementId::FirstRead => AchievementContent {
                title: "First Chapter",
                description: "Read your first blog post",
                icon: IconId::Book,
            },
            AchievementId::Bookworm => AchievementContent {
                title: "Bookworm",
                description: "Read 5 blog posts",
                icon: IconId::Books,
            },
            AchievementId::Bibliophile => AchievementContent {
                title: "Bibliophile",
                description: "Read 10 blog posts",
                icon: IconId::Books,
            },
            AchievementId::Tinkerer => AchievementContent {
                title: "Tinkerer",
                description: "Opened the customization panel",
                icon: IconId::Palette,
            },
            AchievementId::Curious => AchievementContent {
                title: "Curious",
                description: "Checked out the achievements list",
                icon: IconId::Eye,
            },
        }
    }

    /// Toast body announcing the unlock
    pub fn toast_content(&self) -> ToastContent {
        let content = self.content();
        ToastContent::new(
            format!("Achievement unlocked: {}", content.title),
            content.description,
        )
        .with_icon(content.icon)
    }

    /// Achievements in `category`, in catalog order
    pub fn in_category(category: AchievementCategory) -> impl Iterator<Item = AchievementId> {
        Self::ALL
            .into_iter()
            .filter(move |id| id.category() == category)
    }
}

/// Activity counters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    BlogsRead,
    CustomizationsOpened,
    AchievementsViewed,
}

/// A qualifying visitor activity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    BlogRead,
    CustomizationOpened,
    AchievementsOpened,
}

impl ActivityKind {
    /// Counter incremented by this activity
    pub fn counter(&self) -> Counter {
        match self {
            ActivityKind::BlogRead => Counter::BlogsRead,
            ActivityKind::CustomizationOpened => Counter::CustomizationsOpened,
            ActivityKind::AchievementsOpened => Counter::AchievementsViewed,
        }
    }
}

/// `(counter, exact count, granted achievement)`
pub const THRESHOLDS: &[(Counter, u32, AchievementId)] = &[
    (Counter::BlogsRead, 1, AchievementId::FirstRead),
    (Counter::BlogsRead, 5, AchievementId::Bookworm),
    (Counter::BlogsRead, 10, AchievementId::Bibliophile),
    (Counter::CustomizationsOpened, 1, AchievementId::Tinkerer),
    (Counter::AchievementsViewed, 1, AchievementId::Curious),
];

/// Achievement granted when `counter` equals exactly `count`
pub fn threshold(counter: Counter, count: u32) -> Option<AchievementId> {
    THRESHOLDS
        .iter()
        .find(|(c, n, _)| *c == counter && *n == count)
        .map(|(_, _, id)| *id)
}
