//! Visual attributes derived from a place's category and trending score.

/// Palette used by category and score badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Orange,
    Red,
    Yellow,
    Blue,
    Pink,
    Green,
    Mint,
    Gray,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Pink => "pink",
            Color::Green => "green",
            Color::Mint => "mint",
            Color::Gray => "gray",
        };
        f.write_str(name)
    }
}

/// Symbol shown next to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ForkKnife,
    Flame,
    Fish,
    WineGlass,
    Leaf,
    MapPin,
}

impl Icon {
    /// System symbol name used by the host platform.
    #[must_use]
    pub fn symbol_name(self) -> &'static str {
        match self {
            Icon::ForkKnife => "fork.knife",
            Icon::Flame => "flame.fill",
            Icon::Fish => "fish.fill",
            Icon::WineGlass => "wineglass.fill",
            Icon::Leaf => "leaf.fill",
            Icon::MapPin => "mappin.circle.fill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAttributes {
    pub color: Color,
    pub icon: Icon,
}

/// Ordered substring rules; the first rule contained in the lowercased
/// category wins.
const CATEGORY_RULES: &[(&str, CategoryAttributes)] = &[
    (
        "tapa",
        CategoryAttributes {
            color: Color::Orange,
            icon: Icon::ForkKnife,
        },
    ),
    (
        "asador",
        CategoryAttributes {
            color: Color::Red,
            icon: Icon::ForkKnife,
        },
    ),
    (
        "madril",
        CategoryAttributes {
            color: Color::Yellow,
            icon: Icon::Flame,
        },
    ),
    (
        "maris",
        CategoryAttributes {
            color: Color::Blue,
            icon: Icon::Fish,
        },
    ),
    (
        "taberna",
        CategoryAttributes {
            color: Color::Pink,
            icon: Icon::WineGlass,
        },
    ),
    (
        "casera",
        CategoryAttributes {
            color: Color::Green,
            icon: Icon::Leaf,
        },
    ),
];

const DEFAULT_CATEGORY_ATTRIBUTES: CategoryAttributes = CategoryAttributes {
    color: Color::Blue,
    icon: Icon::MapPin,
};

/// Color and icon for a free-text category label.
#[must_use]
pub fn category_attributes(category: &str) -> CategoryAttributes {
    let lowered = category.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map_or(DEFAULT_CATEGORY_ATTRIBUTES, |(_, attrs)| *attrs)
}

/// Popularity band of a trending score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreTier {
    Low,
    Mid,
    High,
    Peak,
}

impl ScoreTier {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ScoreTier::Peak => Color::Orange,
            ScoreTier::High => Color::Mint,
            ScoreTier::Mid => Color::Blue,
            ScoreTier::Low => Color::Gray,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::Peak => "Tendencia máxima",
            ScoreTier::High => "Muy popular",
            ScoreTier::Mid => "Popular",
            ScoreTier::Low => "En alza",
        }
    }
}

#[must_use]
pub fn score_tier(score: i32) -> ScoreTier {
    match score {
        90.. => ScoreTier::Peak,
        80..=89 => ScoreTier::High,
        70..=79 => ScoreTier::Mid,
        _ => ScoreTier::Low,
    }
}
