//! Community panel
//!
//! A local feed seeded with sample posts, plus challenges, trending topics,
//! top contributors and headline stats. Shared drafts are prepended to the
//! feed of this panel instance only; nothing leaves the device.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostCategory {
    Recipe,
    SuccessStory,
    Tip,
    Photo,
    General,
}

impl PostCategory {
    pub fn label(self) -> &'static str {
        match self {
            PostCategory::Recipe => "Recipe",
            PostCategory::SuccessStory => "Success Story",
            PostCategory::Tip => "Tip",
            PostCategory::Photo => "Photo",
            PostCategory::General => "Post",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub author: String,
    /// Initials shown in the avatar
    pub avatar: String,
    pub time: String,
    pub category: PostCategory,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub likes: u32,
    pub comments: u32,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub name: &'static str,
    pub participants: u32,
    pub days_left: u32,
    pub description: &'static str,
}

impl Challenge {
    /// e.g. "1,250 participants"
    pub fn participants_label(&self) -> String {
        format!("{} participants", group_thousands(self.participants as u64))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contributor {
    pub name: &'static str,
    pub badge: &'static str,
    pub posts: u32,
}

impl Contributor {
    pub fn initials(&self) -> String {
        initials_of(self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityStats {
    pub active_members: &'static str,
    pub recipes_shared: &'static str,
    pub success_stories: &'static str,
}

pub const CHALLENGES: &[Challenge] = &[
    Challenge {
        name: "30-Day Natural Detox",
        participants: 1250,
        days_left: 12,
        description: "Natural detox using traditional Indian herbs and foods",
    },
    Challenge {
        name: "Mindful Eating Challenge",
        participants: 890,
        days_left: 8,
        description: "Practice mindful eating and gratitude with meals",
    },
    Challenge {
        name: "Regional Recipe Exchange",
        participants: 2100,
        days_left: 20,
        description: "Share and try traditional recipes from different states",
    },
];

pub const TRENDING_TOPICS: &[&str] = &[
    "#ayurveda",
    "#plantbased",
    "#regionalcuisine",
    "#detox",
    "#immunity",
];

pub const TOP_CONTRIBUTORS: &[Contributor] = &[
    Contributor {
        name: "Dr. Priya Kumar",
        badge: "Expert",
        posts: 145,
    },
    Contributor {
        name: "Maya Sharma",
        badge: "Recipe Master",
        posts: 89,
    },
    Contributor {
        name: "Raj Patel",
        badge: "Motivator",
        posts: 67,
    },
];

pub const COMMUNITY_STATS: CommunityStats = CommunityStats {
    active_members: "12,500+",
    recipes_shared: "2,850",
    success_stories: "450",
};

struct SeedPost {
    id: u64,
    author: &'static str,
    avatar: &'static str,
    time: &'static str,
    category: PostCategory,
    title: &'static str,
    content: &'static str,
    image: &'static str,
    likes: u32,
    comments: u32,
    tags: &'static [&'static str],
}

impl SeedPost {
    fn to_post(&self) -> Post {
        Post {
            id: self.id,
            author: self.author.to_string(),
            avatar: self.avatar.to_string(),
            time: self.time.to_string(),
            category: self.category,
            title: self.title.to_string(),
            content: self.content.to_string(),
            image: Some(self.image.to_string()),
            likes: self.likes,
            comments: self.comments,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        id: 1,
        author: "Maya Sharma",
        avatar: "MS",
        time: "2 hours ago",
        category: PostCategory::Recipe,
        title: "Heart-Healthy Quinoa Bowl Recipe",
        content: "Just tried this amazing quinoa bowl with roasted vegetables and tahini dressing. Perfect for my heart health journey! 🥗❤️",
        image: "🥗",
        likes: 24,
        comments: 8,
        tags: &["heart-healthy", "quinoa", "vegetarian"],
    },
    SeedPost {
        id: 2,
        author: "Raj Patel",
        avatar: "RP",
        time: "5 hours ago",
        category: PostCategory::SuccessStory,
        title: "7-Day Streak with Rajasthani Diet!",
        content: "Completed my first week following traditional Rajasthani diet plan. Feeling more energetic and my digestion has improved significantly! 💪",
        image: "🏜️",
        likes: 45,
        comments: 12,
        tags: &["success", "rajasthani", "energy"],
    },
    SeedPost {
        id: 3,
        author: "Dr. Priya Kumar",
        avatar: "PK",
        time: "1 day ago",
        category: PostCategory::Tip,
        title: "Morning Ayurvedic Routine",
        content: "Start your day with warm water + lemon + honey. This simple Ayurvedic practice kickstarts metabolism and aids digestion. Try it for a week! 🌅",
        image: "🍯",
        likes: 67,
        comments: 15,
        tags: &["ayurveda", "morning-routine", "digestion"],
    },
];

/// Seed posts shown on every fresh feed
pub fn sample_posts() -> Vec<Post> {
    SEED_POSTS.iter().map(SeedPost::to_post).collect()
}

/// Which section of the panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommunityTab {
    #[default]
    Feed,
    Challenges,
    Recipes,
}

/// Longest title derived from a draft, in characters
const TITLE_LIMIT: usize = 60;

#[derive(Debug, Clone)]
pub struct CommunityPanel {
    tab: CommunityTab,
    draft: String,
    draft_category: PostCategory,
    feed: Vec<Post>,
    author: String,
}

impl Default for CommunityPanel {
    fn default() -> Self {
        Self::new("You")
    }
}

impl CommunityPanel {
    /// A fresh feed; shared drafts are attributed to `author`
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            tab: CommunityTab::default(),
            draft: String::new(),
            draft_category: PostCategory::General,
            feed: sample_posts(),
            author: author.into(),
        }
    }

    pub fn tab(&self) -> CommunityTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: CommunityTab) {
        self.tab = tab;
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Tag the draft as a photo, recipe or tip
    pub fn set_draft_category(&mut self, category: PostCategory) {
        self.draft_category = category;
    }

    pub fn feed(&self) -> &[Post] {
        &self.feed
    }

    /// Publish the draft to the top of the feed
    ///
    /// Blank drafts are ignored. Hashtags in the text become tags.
    pub fn share(&mut self) -> Option<&Post> {
        let content = self.draft.trim();
        if content.is_empty() {
            return None;
        }

        let id = self.feed.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let title = content
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(TITLE_LIMIT)
            .collect();
        let tags = content
            .split_whitespace()
            .filter_map(|word| word.strip_prefix('#'))
            .map(|tag| tag.trim_end_matches(|c: char| !c.is_alphanumeric() && c != '-'))
            .filter(|tag| !tag.is_empty())
            .map(str::to_lowercase)
            .collect();

        let post = Post {
            id,
            author: self.author.clone(),
            avatar: initials_of(&self.author),
            time: "Just now".to_string(),
            category: self.draft_category,
            title,
            content: content.to_string(),
            image: None,
            likes: 0,
            comments: 0,
            tags,
        };

        tracing::debug!(post = id, "Shared community post");
        self.feed.insert(0, post);
        self.draft.clear();
        self.draft_category = PostCategory::General;
        self.feed.first()
    }

    pub fn challenges(&self) -> &'static [Challenge] {
        CHALLENGES
    }

    pub fn trending_topics(&self) -> &'static [&'static str] {
        TRENDING_TOPICS
    }

    pub fn top_contributors(&self) -> &'static [Contributor] {
        TOP_CONTRIBUTORS
    }

    pub fn stats(&self) -> CommunityStats {
        COMMUNITY_STATS
    }
}

/// First letter of every word, uppercased
pub fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Format with comma thousands separators
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_starts_with_samples() {
        let panel = CommunityPanel::default();
        assert_eq!(panel.tab(), CommunityTab::Feed);
        let ids: Vec<u64> = panel.feed().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_blank_draft_is_not_shared() {
        let mut panel = CommunityPanel::default();
        panel.set_draft("   \n ");
        assert!(panel.share().is_none());
        assert_eq!(panel.feed().len(), 3);
    }

    #[test]
    fn test_share_prepends_and_clears_draft() {
        let mut panel = CommunityPanel::new("Asha Rao");
        panel.set_draft_category(PostCategory::Recipe);
        panel.set_draft("Moong dal chilla for breakfast #protein #Breakfast!\nRecipe below");

        let post = panel.share().unwrap().clone();
        assert_eq!(post.id, 4);
        assert_eq!(post.avatar, "AR");
        assert_eq!(post.category, PostCategory::Recipe);
        assert_eq!(post.title, "Moong dal chilla for breakfast #protein #Breakfast!");
        assert_eq!(post.tags, vec!["protein", "breakfast"]);

        assert_eq!(panel.feed()[0], post);
        assert_eq!(panel.feed().len(), 4);
        assert_eq!(panel.draft(), "");
    }

    #[test]
    fn test_long_first_line_is_truncated() {
        let mut panel = CommunityPanel::default();
        panel.set_draft("a".repeat(100));
        assert_eq!(panel.share().unwrap().title.len(), TITLE_LIMIT);
    }

    #[test]
    fn test_sidebar_content() {
        assert_eq!(CHALLENGES[0].participants_label(), "1,250 participants");
        assert_eq!(CHALLENGES[1].participants_label(), "890 participants");
        assert_eq!(TOP_CONTRIBUTORS[0].initials(), "DPK");
        assert_eq!(TRENDING_TOPICS.len(), 5);
        assert_eq!(COMMUNITY_STATS.active_members, "12,500+");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
