//! Output-tip annotation for print/seller-oriented styles.
//!
//! Tips are an ordered table of (predicate, advisory) rules over the
//! lower-cased style string. The first matching rule wins; sticker and
//! clip-art rules deliberately precede the generic mockup fallback.

/// A single tip rule.
///
/// Matches when the style contains every substring in `all` and, when `any`
/// is non-empty, at least one substring in `any`. Substrings are lower-case.
#[derive(Debug)]
pub struct TipRule {
    pub all: &'static [&'static str],
    pub any: &'static [&'static str],
    pub advisory: &'static str,
}

impl TipRule {
    fn matches(&self, style: &str) -> bool {
        self.all.iter().all(|needle| style.contains(needle))
            && (self.any.is_empty() || self.any.iter().any(|needle| style.contains(needle)))
    }
}

/// Ordered tip rules, first match wins.
pub const TIP_RULES: &[TipRule] = &[
    TipRule {
        all: &[],
        any: &["sticker"],
        advisory: "Sticker production specs: crisp vector-like edges, high contrast, clean silhouette; white offset stroke (2–4px); transparent background PNG (300 DPI); die-cut friendly outline.",
    },
    TipRule {
        all: &[],
        any: &["clip art", "svg"],
        advisory: "Clip art set specs: simple shapes, flat fills, smooth paths; transparent PNG (300 DPI) + SVG; consistent palette and stroke weight.",
    },
    TipRule {
        all: &["mockup"],
        any: &["shirt"],
        advisory: "Apparel mockup: front-view unisex crewneck on neutral studio background, realistic lighting, true-to-size print area; high-res 3000px+.",
    },
    TipRule {
        all: &["mockup"],
        any: &["mug"],
        advisory: "Mug mockup: 11oz ceramic 3/4 view, minimalist surface, soft shadows, centered print area; 3000px+.",
    },
    TipRule {
        all: &["mockup"],
        any: &["wall art", "poster"],
        advisory: "Wall art mockup: framed poster, soft daylight, minimal room decor, no glare; high-res 3000px+.",
    },
    TipRule {
        all: &["mockup"],
        any: &[],
        advisory: "Product mockup: neutral studio scene, accurate proportions, soft realistic shadows; high-res 3000px+.",
    },
    TipRule {
        all: &[],
        any: &["pattern", "seamless", "paper pack"],
        advisory: "Pattern: perfectly seamless tile, edges match, repeatable motif, even spacing; export square 2048–4096px.",
    },
    TipRule {
        all: &[],
        any: &["photoreal", "3d realistic"],
        advisory: "Photoreal: lifelike materials, realistic lighting/shadows, subtle imperfections, natural color balance, DoF.",
    },
];

/// Advisory text for a style, or empty string when no rule matches.
///
/// Pure function of its input; the style is lower-cased before matching.
pub fn tip_for_style(style: &str) -> &'static str {
    let normalized = style.to_lowercase();
    TIP_RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.advisory)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const STICKER_ADVISORY: &str = TIP_RULES[0].advisory;

    #[test]
    fn sticker_styles_get_the_sticker_advisory() {
        for style in ["Sticker (Kiss-Cut)", "sticker pack (die-cut)", "STICKER (Holographic Look)"] {
            assert_eq!(tip_for_style(style), STICKER_ADVISORY);
        }
    }

    #[test]
    fn sticker_wins_over_mockup_and_pattern() {
        // The sticker rule precedes every other rule in the table.
        assert_eq!(tip_for_style("Sticker Mockup Seamless"), STICKER_ADVISORY);
    }

    #[test]
    fn mockup_sub_rules_match_product_variants() {
        assert!(tip_for_style("Product Mockup (T-Shirt)").starts_with("Apparel mockup:"));
        assert!(tip_for_style("Product Mockup (Mug)").starts_with("Mug mockup:"));
        assert!(tip_for_style("Product Mockup (Wall Art)").starts_with("Wall art mockup:"));
        assert!(tip_for_style("Poster Mockup").starts_with("Wall art mockup:"));
        assert!(tip_for_style("Product Mockup (Tote Bag)").starts_with("Product mockup:"));
    }

    #[test]
    fn pattern_and_photoreal_branches_are_independent() {
        assert!(tip_for_style("Seamless Pattern (Repeat Tile)").starts_with("Pattern:"));
        assert!(tip_for_style("Patterned Paper Pack").starts_with("Pattern:"));
        assert!(tip_for_style("Photorealism").starts_with("Photoreal:"));
        assert!(tip_for_style("3D Realistic").starts_with("Photoreal:"));
    }

    #[test]
    fn unmatched_styles_yield_empty_string() {
        for style in ["Watercolor", "Oil Painting", "Ukiyo-e", ""] {
            assert_eq!(tip_for_style(style), "");
        }
    }

    proptest! {
        #[test]
        fn any_style_containing_sticker_gets_the_sticker_advisory(
            prefix in "[A-Za-z ()-]{0,20}",
            suffix in "[A-Za-z ()-]{0,20}",
        ) {
            let style = format!("{prefix}StIcKeR{suffix}");
            prop_assert_eq!(tip_for_style(&style), STICKER_ADVISORY);
        }
    }
}
