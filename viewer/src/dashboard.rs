//! Dashboard view
//!
//! Profile card, four summary tiles and the top-language proportion chart,
//! built from one search result and rendered as markdown.

use crate::models::{Profile, Stats};

/// Chart colors, assigned by rank
pub const PALETTE: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6384", "#C9CBCF",
];

/// Number of languages shown in the chart
pub const TOP_LANGUAGES: usize = 8;

/// A single scalar tile
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub label: &'static str,
    pub value: u64,
}

/// One slice of the language chart
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSlice {
    pub language: String,
    pub count: u64,
    /// Fraction of the charted repositories, 0.0..=1.0
    pub share: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub display_name: String,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub joined: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub card: ProfileCard,
    pub tiles: [Tile; 4],
    /// Empty until language data is available
    pub languages: Vec<LanguageSlice>,
}

impl Dashboard {
    pub fn build(profile: &Profile, stats: Option<&Stats>) -> Self {
        let non_empty = |s: &Option<String>| s.clone().filter(|v| !v.trim().is_empty());

        let card = ProfileCard {
            display_name: profile.display_name().to_string(),
            login: profile.login.clone(),
            avatar_url: profile.avatar_url.clone(),
            html_url: profile.html_url.clone(),
            bio: non_empty(&profile.bio),
            location: non_empty(&profile.location),
            website: non_empty(&profile.blog),
            joined: profile.created_at.format("%Y-%m-%d").to_string(),
        };

        let tiles = [
            Tile {
                label: "Public Repos",
                value: u64::from(profile.public_repos),
            },
            Tile {
                label: "Followers",
                value: u64::from(profile.followers),
            },
            Tile {
                label: "Following",
                value: u64::from(profile.following),
            },
            Tile {
                label: "Total Stars",
                value: stats.map(|s| s.total_stars).unwrap_or(0),
            },
        ];

        Self {
            card,
            tiles,
            languages: stats.map(language_chart).unwrap_or_default(),
        }
    }
}

/// Top languages by repository count with their share and color
pub fn language_chart(stats: &Stats) -> Vec<LanguageSlice> {
    let top: Vec<(&str, u64)> = stats
        .languages
        .ranked()
        .into_iter()
        .take(TOP_LANGUAGES)
        .collect();
    let charted: u64 = top.iter().map(|(_, count)| count).sum();

    top.into_iter()
        .zip(PALETTE)
        .map(|((language, count), color)| LanguageSlice {
            language: language.to_string(),
            count,
            share: if charted == 0 {
                0.0
            } else {
                count as f64 / charted as f64
            },
            color,
        })
        .collect()
}

/// Render the dashboard to markdown
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut buf = String::new();
    let card = &dashboard.card;

    buf.push_str(&format!("# {} (@{})\n\n", card.display_name, card.login));
    buf.push_str(&format!("![avatar]({})\n", card.avatar_url));
    if let Some(bio) = &card.bio {
        buf.push_str(&format!("\n{}\n", bio));
    }
    buf.push('\n');
    if let Some(location) = &card.location {
        buf.push_str(&format!("- Location: {}\n", location));
    }
    if let Some(website) = &card.website {
        buf.push_str(&format!("- Website: {}\n", website));
    }
    buf.push_str(&format!("- Joined: {}\n", card.joined));
    buf.push_str(&format!("- Profile: {}\n\n", card.html_url));

    for tile in &dashboard.tiles {
        buf.push_str(&format!("| {} ", tile.label));
    }
    buf.push_str("|\n");
    buf.push_str(&"|---".repeat(dashboard.tiles.len()));
    buf.push_str("|\n");
    for tile in &dashboard.tiles {
        buf.push_str(&format!("| {} ", tile.value));
    }
    buf.push_str("|\n");

    if !dashboard.languages.is_empty() {
        buf.push_str("\n## Top Languages\n\n");
        for slice in &dashboard.languages {
            buf.push_str(&render_slice(slice));
        }
    }

    buf
}

fn render_slice(slice: &LanguageSlice) -> String {
    const BAR_WIDTH: f64 = 20.0;
    let filled = (slice.share * BAR_WIDTH).round() as usize;
    format!(
        "{} {:<12} {:<20} {:>3} repos ({:.1}%)\n",
        slice.color,
        slice.language,
        "#".repeat(filled),
        slice.count,
        slice.share * 100.0
    )
}
