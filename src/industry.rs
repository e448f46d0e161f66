//! Static industry styling table.
//!
//! Each industry maps to recommended colors, mockup types and a styling
//! triple (logo size, text style, layout). The table is versioned with the
//! code, loaded once and never mutated at runtime.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Education,
    Retail,
    FoodBeverage,
    Fashion,
    Sports,
    Entertainment,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 10] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Education,
        Industry::Retail,
        Industry::FoodBeverage,
        Industry::Fashion,
        Industry::Sports,
        Industry::Entertainment,
        Industry::Other,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "technology" => Industry::Technology,
            "healthcare" => Industry::Healthcare,
            "finance" => Industry::Finance,
            "education" => Industry::Education,
            "retail" => Industry::Retail,
            "food-beverage" => Industry::FoodBeverage,
            "fashion" => Industry::Fashion,
            "sports" => Industry::Sports,
            "entertainment" => Industry::Entertainment,
            "other" => Industry::Other,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Healthcare => "healthcare",
            Industry::Finance => "finance",
            Industry::Education => "education",
            Industry::Retail => "retail",
            Industry::FoodBeverage => "food-beverage",
            Industry::Fashion => "fashion",
            Industry::Sports => "sports",
            Industry::Entertainment => "entertainment",
            Industry::Other => "other",
        }
    }

    pub fn profile(self) -> &'static IndustryProfile {
        profile(self)
    }
}

/// Garment kind x side. Several kinds intentionally share template art,
/// see `compositor::template_candidates`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MockupType {
    TshirtFront,
    TshirtBack,
    HoodieFront,
    HoodieBack,
    SweatshirtFront,
    SweatshirtBack,
    PoloFront,
    PoloBack,
    TankTopFront,
    TankTopBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
}

impl MockupType {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "tshirt-front" => MockupType::TshirtFront,
            "tshirt-back" => MockupType::TshirtBack,
            "hoodie-front" => MockupType::HoodieFront,
            "hoodie-back" => MockupType::HoodieBack,
            "sweatshirt-front" => MockupType::SweatshirtFront,
            "sweatshirt-back" => MockupType::SweatshirtBack,
            "polo-front" => MockupType::PoloFront,
            "polo-back" => MockupType::PoloBack,
            "tank-top-front" => MockupType::TankTopFront,
            "tank-top-back" => MockupType::TankTopBack,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MockupType::TshirtFront => "tshirt-front",
            MockupType::TshirtBack => "tshirt-back",
            MockupType::HoodieFront => "hoodie-front",
            MockupType::HoodieBack => "hoodie-back",
            MockupType::SweatshirtFront => "sweatshirt-front",
            MockupType::SweatshirtBack => "sweatshirt-back",
            MockupType::PoloFront => "polo-front",
            MockupType::PoloBack => "polo-back",
            MockupType::TankTopFront => "tank-top-front",
            MockupType::TankTopBack => "tank-top-back",
        }
    }

    /// Garment kind without the side suffix, used for template lookup.
    pub fn kind(self) -> &'static str {
        match self {
            MockupType::TshirtFront | MockupType::TshirtBack => "tshirt",
            MockupType::HoodieFront | MockupType::HoodieBack => "hoodie",
            MockupType::SweatshirtFront | MockupType::SweatshirtBack => "sweatshirt",
            MockupType::PoloFront | MockupType::PoloBack => "polo",
            MockupType::TankTopFront | MockupType::TankTopBack => "tank-top",
        }
    }

    pub fn side(self) -> Side {
        match self {
            MockupType::TshirtFront
            | MockupType::HoodieFront
            | MockupType::SweatshirtFront
            | MockupType::PoloFront
            | MockupType::TankTopFront => Side::Front,
            MockupType::TshirtBack
            | MockupType::HoodieBack
            | MockupType::SweatshirtBack
            | MockupType::PoloBack
            | MockupType::TankTopBack => Side::Back,
        }
    }
}

impl std::fmt::Display for MockupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit logo placement override. When set it wins over both the
/// front/back convention and the industry layout policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoPosition {
    Center,
    LeftChest,
    RightChest,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl LogoPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            LogoPosition::Center => "center",
            LogoPosition::LeftChest => "left-chest",
            LogoPosition::RightChest => "right-chest",
            LogoPosition::TopLeft => "top-left",
            LogoPosition::TopRight => "top-right",
            LogoPosition::BottomLeft => "bottom-left",
            LogoPosition::BottomRight => "bottom-right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoSize {
    Small,
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    Bold,
    Elegant,
    Casual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    Centered,
    Corner,
    FullWidth,
}

#[derive(Clone, Copy, Debug)]
pub struct Styling {
    pub logo_size: LogoSize,
    pub text_style: TextStyle,
    pub layout: Layout,
}

#[derive(Debug)]
pub struct IndustryProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub primary_colors: &'static [&'static str],
    pub secondary_colors: &'static [&'static str],
    pub recommended_types: &'static [MockupType],
    pub styling: Styling,
}

pub fn profile(industry: Industry) -> &'static IndustryProfile {
    match industry {
        Industry::Technology => &TECHNOLOGY,
        Industry::Healthcare => &HEALTHCARE,
        Industry::Finance => &FINANCE,
        Industry::Education => &EDUCATION,
        Industry::Retail => &RETAIL,
        Industry::FoodBeverage => &FOOD_BEVERAGE,
        Industry::Fashion => &FASHION,
        Industry::Sports => &SPORTS,
        Industry::Entertainment => &ENTERTAINMENT,
        Industry::Other => &OTHER,
    }
}

/// First primary/secondary pair, the recommended starting palette.
pub fn recommended_colors(industry: Industry) -> (&'static str, &'static str) {
    let p = profile(industry);
    (
        p.primary_colors.first().copied().unwrap_or("#3B82F6"),
        p.secondary_colors.first().copied().unwrap_or("#1E293B"),
    )
}

static TECHNOLOGY: IndustryProfile = IndustryProfile {
    name: "Technology",
    description: "Modern, clean designs for tech companies and startups",
    primary_colors: &["#3B82F6", "#1E40AF", "#6366F1", "#8B5CF6", "#06B6D4"],
    secondary_colors: &["#1E293B", "#475569", "#64748B", "#94A3B8"],
    recommended_types: &[
        MockupType::TshirtFront,
        MockupType::HoodieFront,
        MockupType::PoloFront,
    ],
    styling: Styling {
        logo_size: LogoSize::Medium,
        text_style: TextStyle::Bold,
        layout: Layout::Centered,
    },
};

static HEALTHCARE: IndustryProfile = IndustryProfile {
    name: "Healthcare",
    description: "Professional and trustworthy designs for medical organizations",
    primary_colors: &["#059669", "#047857", "#0D9488", "#0891B2", "#0EA5E9"],
    secondary_colors: &["#1E293B", "#374151", "#4B5563"],
    recommended_types: &[
        MockupType::PoloFront,
        MockupType::TshirtFront,
        MockupType::SweatshirtFront,
    ],
    styling: Styling {
        logo_size: LogoSize::Medium,
        text_style: TextStyle::Elegant,
        layout: Layout::Centered,
    },
};

static FINANCE: IndustryProfile = IndustryProfile {
    name: "Finance",
    description: "Sophisticated designs for financial institutions",
    primary_colors: &["#1E293B", "#334155", "#475569", "#64748B", "#0F172A"],
    secondary_colors: &["#F59E0B", "#D97706", "#B45309", "#92400E"],
    recommended_types: &[
        MockupType::PoloFront,
        MockupType::TshirtFront,
        MockupType::HoodieFront,
    ],
    styling: Styling {
        logo_size: LogoSize::Medium,
        text_style: TextStyle::Elegant,
        layout: Layout::Centered,
    },
};

static EDUCATION: IndustryProfile = IndustryProfile {
    name: "Education",
    description: "Engaging designs for schools and educational institutions",
    primary_colors: &["#DC2626", "#EA580C", "#D97706", "#059669", "#0D9488"],
    secondary_colors: &["#1E293B", "#374151", "#4B5563"],
    recommended_types: &[
        MockupType::TshirtFront,
        MockupType::HoodieFront,
        MockupType::SweatshirtFront,
    ],
    styling: Styling {
        logo_size: LogoSize::Large,
        text_style: TextStyle::Casual,
        layout: Layout::FullWidth,
    },
};

static RETAIL: IndustryProfile = IndustryProfile {
    name: "Retail",
    description: "Vibrant designs for retail and e-commerce businesses",
    primary_colors: &["#DC2626", "#EA580C", "#D97706", "#059669", "#0D9488"],
    secondary_colors: &["#1E293B", "#374151", "#4B5563"],
    recommended_types: &[
        MockupType::TshirtFront,
        MockupType::TankTopFront,
        MockupType::HoodieFront,
    ],
    styling: Styling {
        logo_size: LogoSize::Medium,
        text_style: TextStyle::Casual,
        layout: Layout::Centered,
    },
};

static FOOD_BEVERAGE: IndustryProfile = IndustryProfile {
    name: "Food & Beverage",
    description: "Appetizing designs for restaurants and food businesses",
    primary_colors: &["#DC2626", "#EA580C", "#D97706", "#059669", "#0D9488"],
    secondary_colors: &["#1E293B", "#374151", "#4B5563"],
    recommended_types: &[
        MockupType::TshirtFront,
        MockupType::TankTopFront,
        MockupType::PoloFront,
    ],
    styling: Styling {
        logo_size: LogoSize::Large,
        text_style: TextStyle::Casual,
        layout: Layout::Centered,
    },
};

static FASHION: IndustryProfile = IndustryProfile {
    name: "Fashion",
    description: "Trendy designs for fashion and lifestyle brands",
    primary_colors: &["#8B5CF6", "#A855F7", "#C084FC", "#F472B6", "#EC4899"],
    secondary_colors: &["#1E293B", "#374151", "#4B5563"],
    recommended_types: &[
        MockupType::TshirtFront,
        MockupType::TankTopFront,
        MockupType::HoodieFront,
    ],
    styling: Styling {
        logo_size: LogoSize::Medium,
        text_style: TextStyle::Elegant,
        layout: Layout::Corner,
    },
};

static SPORTS: IndustryProfile = IndustryProfile {
    name: "Sports",
    description: "Dynamic designs for sports teams and athletic brands",
    primary_colors: &["#DC2626", "#EA580C", "#D97706", "#059669", "#0D9488"],
    secondary_colors: &["#1E293B", "#374151", "#4B5563"],
    recommended_types: &[
        MockupType::TshirtFront,
        MockupType::TankTopFront,
        MockupType::HoodieFront,
    ],
    styling: Styling {
        logo_size: LogoSize::Large,
        text_style: TextStyle::Bold,
        layout: Layout::Centered,
    },
};

static ENTERTAINMENT: IndustryProfile = IndustryProfile {
    name: "Entertainment",
    description: "Creative designs for entertainment and media companies",
    primary_colors: &["#8B5CF6", "#A855F7", "#C084FC", "#F472B6", "#EC4899"],
    secondary_colors: &["#1E293B", "#374151", "#4B5563"],
    recommended_types: &[
        MockupType::TshirtFront,
        MockupType::HoodieFront,
        MockupType::TankTopFront,
    ],
    styling: Styling {
        logo_size: LogoSize::Large,
        text_style: TextStyle::Casual,
        layout: Layout::FullWidth,
    },
};

static OTHER: IndustryProfile = IndustryProfile {
    name: "Other",
    description: "Versatile designs for any business type",
    primary_colors: &["#3B82F6", "#1E40AF", "#6366F1", "#8B5CF6", "#06B6D4"],
    secondary_colors: &["#1E293B", "#475569", "#64748B", "#94A3B8"],
    recommended_types: &[
        MockupType::TshirtFront,
        MockupType::PoloFront,
        MockupType::HoodieFront,
    ],
    styling: Styling {
        logo_size: LogoSize::Medium,
        text_style: TextStyle::Bold,
        layout: Layout::Centered,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_industry_parses_its_own_key() {
        for industry in Industry::ALL {
            assert_eq!(Industry::parse(industry.as_str()), Some(industry));
        }
        assert_eq!(Industry::parse("agriculture"), None);
    }

    #[test]
    fn serde_uses_kebab_case_keys() {
        let json = serde_json::to_string(&Industry::FoodBeverage).unwrap();
        assert_eq!(json, "\"food-beverage\"");
        let t: MockupType = serde_json::from_str("\"tank-top-front\"").unwrap();
        assert_eq!(t, MockupType::TankTopFront);
        let p: LogoPosition = serde_json::from_str("\"left-chest\"").unwrap();
        assert_eq!(p, LogoPosition::LeftChest);
    }

    #[test]
    fn mockup_type_round_trips_and_splits() {
        let t = MockupType::parse("sweatshirt-back").unwrap();
        assert_eq!(t.as_str(), "sweatshirt-back");
        assert_eq!(t.kind(), "sweatshirt");
        assert_eq!(t.side(), Side::Back);
        assert_eq!(MockupType::parse("tshirt-left"), None);
    }

    #[test]
    fn profiles_are_complete() {
        for industry in Industry::ALL {
            let p = industry.profile();
            assert!(!p.name.is_empty());
            assert!(!p.primary_colors.is_empty());
            assert!(!p.secondary_colors.is_empty());
            assert!(!p.recommended_types.is_empty());
        }
        let (primary, secondary) = recommended_colors(Industry::Technology);
        assert_eq!(primary, "#3B82F6");
        assert_eq!(secondary, "#1E293B");
    }
}
