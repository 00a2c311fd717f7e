use serde::Serialize;

/// One daily activity a user can mark done.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Task {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub category: &'static str,
    /// Recurs every day.
    pub streak: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Link {
    pub name: &'static str,
    pub url: &'static str,
}

/// Optional activity. Roles never count towards daily progress.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Role {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub links: &'static [Link],
    /// CSS gradient stops for the role badge.
    pub colors: (&'static str, &'static str),
}

const DISCORD_BOT_COMMANDS: &str =
    "https://discord.com/channels/1262723650424016946/1262758096032497735";
const DISCORD_ART: &str = "https://discord.com/channels/1262723650424016946/1350890512273379360";

pub static DAILY_TASKS: &[Task] = &[
    Task {
        id: "testnet-swap",
        title: "Test Network Swaps",
        description: "Swap SUI for nBTC and back on the Native testnet to help test the protocol.",
        link: "https://byield.gonative.cc/",
        category: "Testing",
        streak: false,
    },
    Task {
        id: "daily-claim",
        title: "Daily Claim",
        description: "Claim your daily rewards in Discord #bot-commands using /claim daily command to earn points.",
        link: DISCORD_BOT_COMMANDS,
        category: "Discord",
        streak: true,
    },
    Task {
        id: "discord-activity",
        title: "Discord Engagement",
        description: "Stay active in Discord community - chat, react, and engage with other BeeLievers.",
        link: "https://discord.com/channels/1262723650424016946/1262757322816753674",
        category: "Discord",
        streak: true,
    },
    Task {
        id: "twitter-engagement",
        title: "Twitter Activity",
        description: "Like, retweet, and comment on Native posts to support the community daily.",
        link: "https://x.com/gonativecc",
        category: "Social",
        streak: true,
    },
];

pub static OPTIONAL_ROLES: &[Role] = &[
    Role {
        id: "artist",
        title: "Bee Artist role",
        description: "Create Native-themed artwork and share it with the community.",
        links: &[
            Link { name: "PicsArt Editor", url: "https://picsart.com/create/editor" },
            Link { name: "Online Photoshop", url: "https://online-photoshop.org/edit/" },
            Link { name: "Discord Art Channel", url: DISCORD_ART },
        ],
        colors: ("#a855f7", "#ec4899"),
    },
    Role {
        id: "meme",
        title: "Native LOLs role",
        description: "Create and share memes about Native to spread the buzz.",
        links: &[
            Link { name: "ImgFlip Meme Generator", url: "https://imgflip.com/memegenerator" },
            Link { name: "ILoveImg", url: "https://www.iloveimg.com/meme-generator" },
            Link { name: "Discord Meme Channel", url: DISCORD_ART },
        ],
        colors: ("#f97316", "#ef4444"),
    },
    Role {
        id: "angel",
        title: "Bee Angel role",
        description: "Reach 1000 points through daily activities and unlock the Bee Angel role.",
        links: &[
            Link { name: "Discord Bot commands", url: DISCORD_BOT_COMMANDS },
            Link {
                name: "Discord Engage",
                url: "https://discord.com/channels/1262723650424016946/1358750604738035895",
            },
            Link {
                name: "Discord Most Gaming",
                url: "https://discord.com/channels/1262723650424016946/1350185075941179494",
            },
        ],
        colors: ("#eab308", "#f97316"),
    },
    Role {
        id: "tutorial",
        title: "Native Tutorial",
        description: "Learn about Native protocol through interactive tutorials and guides.",
        links: &[
            Link { name: "Start Tutorial", url: "https://native-tutorial.vercel.app/" },
            Link {
                name: "Discord Support",
                url: "https://discord.com/channels/1262723650424016946/1262758069671297114",
            },
        ],
        colors: ("#3b82f6", "#4f46e5"),
    },
    Role {
        id: "game",
        title: "Native Game",
        description: "Play the Native game beta and have fun while learning about the ecosystem.",
        links: &[Link { name: "Play Game", url: "https://native-game-beta.vercel.app/" }],
        colors: ("#22c55e", "#059669"),
    },
];

pub fn find_task<'a>(tasks: &'a [Task], id: &str) -> Option<&'a Task> {
    tasks.iter().find(|task| task.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn daily_catalog_has_four_unique_tasks() {
        assert_eq!(DAILY_TASKS.len(), 4);
        let ids: HashSet<_> = DAILY_TASKS.iter().map(|task| task.id).collect();
        assert_eq!(ids.len(), DAILY_TASKS.len());
    }

    #[test]
    fn roles_do_not_share_ids_with_tasks() {
        for role in OPTIONAL_ROLES {
            assert!(find_task(DAILY_TASKS, role.id).is_none(), "role {} shadows a task", role.id);
            assert!(!role.links.is_empty());
        }
    }

    #[test]
    fn find_task_by_id() {
        assert_eq!(find_task(DAILY_TASKS, "daily-claim").map(|t| t.title), Some("Daily Claim"));
        assert!(find_task(DAILY_TASKS, "artist").is_none());
    }
}
