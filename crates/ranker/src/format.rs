//! Presentation helpers for ranked results.
//!
//! These are pure functions whose output is rendered next to every ranked
//! listing, so they live with the ranking core rather than the display
//! layer.

use listings::Marketplace;

/// Render a whole-unit amount as US-style currency: `"$1,500"`, `"$0"`.
///
/// No fractional digits; thousands separated by commas.
pub fn format_currency(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Style token attached to a marketplace badge.
///
/// The display layer maps these to whatever visual treatment it has;
/// unknown sources always get `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Craigslist,
    Facebook,
    Offerup,
    Neutral,
}

impl BadgeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeStyle::Craigslist => "craigslist",
            BadgeStyle::Facebook => "facebook",
            BadgeStyle::Offerup => "offerup",
            BadgeStyle::Neutral => "neutral",
        }
    }
}

/// A short marketplace tag: two-letter label plus style token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub style: BadgeStyle,
}

/// Deterministic badge for a listing source.
///
/// The three known marketplaces get fixed labels and their own style; any
/// other source gets its first two letters uppercased and the neutral style.
pub fn marketplace_badge(source: &Marketplace) -> Badge {
    match source {
        Marketplace::Craigslist => Badge {
            label: "CL".to_string(),
            style: BadgeStyle::Craigslist,
        },
        Marketplace::Facebook => Badge {
            label: "FB".to_string(),
            style: BadgeStyle::Facebook,
        },
        Marketplace::Offerup => Badge {
            label: "OU".to_string(),
            style: BadgeStyle::Offerup,
        },
        Marketplace::Other(name) => Badge {
            label: name.chars().take(2).flat_map(char::to_uppercase).collect(),
            style: BadgeStyle::Neutral,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(499), "$499");
        assert_eq!(format_currency(1500), "$1,500");
        assert_eq!(format_currency(12345), "$12,345");
        assert_eq!(format_currency(1234567), "$1,234,567");
        assert_eq!(format_currency(1000), "$1,000");
    }

    #[test]
    fn test_known_marketplace_badges() {
        let badge = marketplace_badge(&Marketplace::Craigslist);
        assert_eq!(badge.label, "CL");
        assert_eq!(badge.style, BadgeStyle::Craigslist);

        let badge = marketplace_badge(&Marketplace::Facebook);
        assert_eq!(badge.label, "FB");
        assert_eq!(badge.style, BadgeStyle::Facebook);

        let badge = marketplace_badge(&Marketplace::Offerup);
        assert_eq!(badge.label, "OU");
        assert_eq!(badge.style, BadgeStyle::Offerup);
    }

    #[test]
    fn test_unknown_marketplace_badge() {
        let badge = marketplace_badge(&Marketplace::Other("mercari".to_string()));
        assert_eq!(badge.label, "ME");
        assert_eq!(badge.style, BadgeStyle::Neutral);
    }

    #[test]
    fn test_short_unknown_source() {
        let badge = marketplace_badge(&Marketplace::Other("x".to_string()));
        assert_eq!(badge.label, "X");
        assert_eq!(badge.style, BadgeStyle::Neutral);
    }
}
