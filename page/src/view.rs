//! Render model of the quest page.
//!
//! Every region is either shown or a skeleton placeholder; nothing renders
//! partially-loaded data.

use quest_types::{Address, Loadable, NftItem, QuestDocument, UserTask};
use std::fmt;

/// A region that is either rendered or stands in with a placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<T> {
    Skeleton,
    Shown(T),
}

impl<T> Slot<T> {
    pub fn is_skeleton(&self) -> bool {
        matches!(self, Self::Skeleton)
    }

    pub fn shown(&self) -> Option<&T> {
        match self {
            Self::Shown(value) => Some(value),
            Self::Skeleton => None,
        }
    }
}

/// Issuer and reward NFTs shown at the top of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NftShowcase {
    pub issuer: String,
    pub logo: String,
    pub nfts: Vec<NftItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskView {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub href: String,
    pub cta: String,
    /// Where the verify action goes; `None` until a wallet is connected.
    pub verify_url: Option<String>,
    pub completed: bool,
}

/// The claim affordance below the task list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardView {
    pub title: String,
    pub img: String,
    pub claim_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskSection {
    pub tasks: Vec<TaskView>,
    pub reward: RewardView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestView {
    pub showcase: Slot<NftShowcase>,
    pub title: Slot<String>,
    pub description: Slot<String>,
    pub tasks: Slot<TaskSection>,
}

impl QuestView {
    /// Project page state into what is drawn.
    ///
    /// The task section needs both a loaded quest and a non-empty task list.
    pub fn build(
        quest: &Loadable<QuestDocument>,
        tasks: &Loadable<Vec<UserTask>>,
        address: Option<&Address>,
        claim_enabled: bool,
    ) -> Self {
        let Some(quest) = quest.loaded() else {
            return Self {
                showcase: Slot::Skeleton,
                title: Slot::Skeleton,
                description: Slot::Skeleton,
                tasks: Slot::Skeleton,
            };
        };

        let tasks = match tasks.loaded() {
            Some(tasks) if !tasks.is_empty() => Slot::Shown(TaskSection {
                tasks: tasks.iter().map(|task| task_view(task, address)).collect(),
                reward: RewardView {
                    title: quest.rewards_title.clone(),
                    img: quest.rewards_img.clone(),
                    claim_enabled,
                },
            }),
            _ => Slot::Skeleton,
        };

        Self {
            showcase: Slot::Shown(NftShowcase {
                issuer: quest.issuer.clone(),
                logo: quest.logo.clone(),
                nfts: quest.rewards_nfts.clone(),
            }),
            title: Slot::Shown(quest.name.clone()),
            description: Slot::Shown(quest.desc.clone()),
            tasks,
        }
    }
}

fn task_view(task: &UserTask, address: Option<&Address>) -> TaskView {
    TaskView {
        id: task.id,
        name: task.name.clone(),
        description: task.desc.clone(),
        href: task.href.clone(),
        cta: task.cta.clone(),
        verify_url: address.map(|a| task.verify_url(a)),
        completed: task.completed,
    }
}

const SKELETON: &str = "░░░░░░░░";

impl fmt::Display for QuestView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.showcase {
            Slot::Shown(showcase) => {
                writeln!(f, "[{}]", showcase.issuer)?;
                for nft in &showcase.nfts {
                    writeln!(f, "  nft lvl {}: {}", nft.level, nft.img)?;
                }
            }
            Slot::Skeleton => writeln!(f, "[{SKELETON}]")?,
        }
        writeln!(f)?;
        match &self.title {
            Slot::Shown(title) => writeln!(f, "{title}")?,
            Slot::Skeleton => writeln!(f, "{SKELETON}{SKELETON}")?,
        }
        match &self.description {
            Slot::Shown(desc) => writeln!(f, "{desc}")?,
            Slot::Skeleton => writeln!(f, "{SKELETON}")?,
        }
        writeln!(f)?;
        match &self.tasks {
            Slot::Shown(section) => {
                for task in &section.tasks {
                    let mark = if task.completed { "x" } else { " " };
                    writeln!(f, "[{mark}] {}: {}", task.name, task.description)?;
                    if !task.href.is_empty() {
                        writeln!(f, "    {} -> {}", task.cta, task.href)?;
                    }
                }
                let state = if section.reward.claim_enabled {
                    "claimable"
                } else {
                    "nothing to claim"
                };
                write!(f, "Reward: {} ({state})", section.reward.title)
            }
            Slot::Skeleton => write!(f, "{SKELETON}\n{SKELETON}\n{SKELETON}"),
        }
    }
}
