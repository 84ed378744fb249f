use anyhow::{Context, Result};
use regex::Regex;

use crate::models::Category;

/// How a rule's keywords are matched against a description.
enum Pattern {
    /// Any keyword equals a whole token of the description.
    Tokens(&'static [&'static str]),
    /// Any keyword appears anywhere in the lower-cased description.
    /// Used for multi-word merchant names, which never survive tokenizing.
    Phrase(&'static [&'static str]),
}

struct Rule {
    pattern: Pattern,
    category: Category,
}

/// Evaluated top to bottom, first match wins. Order is part of the
/// contract: "late" must outrank every merchant keyword, and "atm"
/// must be checked before the shopping merchants.
static RULES: &[Rule] = &[
    Rule {
        pattern: Pattern::Phrase(&["late"]),
        category: Category::Penalties,
    },
    Rule {
        pattern: Pattern::Tokens(&["firstservice", "resident"]),
        category: Category::Rent,
    },
    Rule {
        pattern: Pattern::Tokens(&["atm"]),
        category: Category::Atm,
    },
    Rule {
        pattern: Pattern::Phrase(&[
            "target",
            "walmart",
            "amazon",
            "nordstrom",
            "paypal",
            "3 sisters",
        ]),
        category: Category::Shopping,
    },
    Rule {
        pattern: Pattern::Tokens(&["uber"]),
        category: Category::Cab,
    },
    Rule {
        pattern: Pattern::Phrase(&["netflix"]),
        category: Category::Entertainment,
    },
    Rule {
        pattern: Pattern::Tokens(&["chevron", "exxon", "shell"]),
        category: Category::Fuel,
    },
    Rule {
        pattern: Pattern::Phrase(&["mobile gas"]),
        category: Category::Utilities,
    },
    Rule {
        pattern: Pattern::Phrase(RESTAURANT_VENUES),
        category: Category::Restaurants,
    },
];

static RESTAURANT_VENUES: &[&str] = &[
    "mesh on mass",
    "brugge brasserie",
    "mama carolla's old italian",
    "recess",
    "yats",
    "twenty tap",
    "goose the market",
    "siam square",
    "shapiro's delicatessen",
    "bluebeard",
    "iaria's italian restaurant",
    "bazbeaux",
    "union 50",
    "taste cafe & marketplace",
    "st. elmo steak house",
    "cafe patachou",
    "the tamale place",
    "mug n' bun",
    "the loft at trader's point creamery",
    "shoefly public house",
    "scotty's brewhouse",
    "sahm's place",
    "delicia",
    "pizzology",
];

pub(crate) struct Categorizer {
    splitter: Regex,
}

impl Categorizer {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            // Bank descriptions separate fields with spaces, colons, and
            // asterisks, e.g. "UBER   *TRIP 123".
            splitter: Regex::new(r"[ :*]").context("Failed to compile token delimiter")?,
        })
    }

    /// Total over all inputs: unmatched text is Other, not an error.
    pub(crate) fn categorize(&self, description: &str) -> Category {
        let desc = description.to_lowercase();
        let tokens: Vec<&str> = self.splitter.split(&desc).collect();

        for rule in RULES {
            let matched = match rule.pattern {
                Pattern::Tokens(keywords) => keywords.iter().any(|k| tokens.contains(k)),
                Pattern::Phrase(keywords) => keywords.iter().any(|k| desc.contains(k)),
            };
            if matched {
                return rule.category;
            }
        }

        Category::Other
    }
}

/// Sort rank for the report: 1 is the most urgent spending to cut,
/// 5 the least. Total over every category.
pub(crate) fn priority(category: Category) -> u8 {
    match category {
        Category::Penalties => 1,
        Category::Restaurants | Category::Entertainment | Category::Cab => 2,
        Category::Shopping => 3,
        Category::Atm | Category::Other => 4,
        Category::Rent | Category::Utilities | Category::Fuel => 5,
    }
}
