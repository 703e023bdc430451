//! Project category filter

use crate::consts::FILTER_STAGGER_S;

/// Selected category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a `data-filter` value; missing or "all" shows everything
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("all") => Filter::All,
            Some(category) => Filter::Category(category.to_string()),
        }
    }

    /// Whether a card with this `data-category` stays visible
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(wanted) => category == Some(wanted.as_str()),
        }
    }
}

/// What to do with one card after a selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardAction {
    /// Show with an entrance animation delayed by `stagger_s`
    Show { stagger_s: f64 },
    /// Fade out, then drop from layout
    Hide,
}

/// Active filter state
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    active: Filter,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn active(&self) -> &Filter {
        &self.active
    }

    /// Select a filter and plan every card, given each card's category in
    /// document order. Stagger is indexed by card position, hidden cards
    /// included.
    pub fn select<'a, I>(&mut self, filter: Filter, categories: I) -> Vec<CardAction>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        self.active = filter;
        categories
            .into_iter()
            .enumerate()
            .map(|(index, category)| {
                if self.active.matches(category) {
                    CardAction::Show {
                        stagger_s: index as f64 * FILTER_STAGGER_S,
                    }
                } else {
                    CardAction::Hide
                }
            })
            .collect()
    }
}

/// CSS animation value for a shown card
pub fn entrance_animation(stagger_s: f64) -> String {
    format!("fadeInUp 0.6s ease-out {}s forwards", (stagger_s * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: [Option<&str>; 4] = [Some("web"), Some("ai"), Some("web"), None];

    fn visible(actions: &[CardAction]) -> Vec<usize> {
        actions
            .iter()
            .enumerate()
            .filter(|(_, a)| matches!(a, CardAction::Show { .. }))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_all_shows_every_card() {
        let mut filter = ProjectFilter::new();
        let actions = filter.select(Filter::parse(Some("all")), CARDS);
        assert_eq!(visible(&actions), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_category_shows_only_matches() {
        let mut filter = ProjectFilter::new();
        let actions = filter.select(Filter::parse(Some("web")), CARDS);
        assert_eq!(visible(&actions), vec![0, 2]);
        assert_eq!(actions[1], CardAction::Hide);
        assert_eq!(filter.active(), &Filter::Category("web".into()));
    }

    #[test]
    fn test_stagger_uses_card_position() {
        let mut filter = ProjectFilter::new();
        let actions = filter.select(Filter::parse(Some("web")), CARDS);
        match actions[2] {
            CardAction::Show { stagger_s } => assert!((stagger_s - 0.2).abs() < 1e-9),
            CardAction::Hide => panic!("card 2 should be shown"),
        }
    }

    #[test]
    fn test_unknown_category_hides_all() {
        let mut filter = ProjectFilter::new();
        let actions = filter.select(Filter::parse(Some("games")), CARDS);
        assert!(visible(&actions).is_empty());
    }

    #[test]
    fn test_entrance_animation_string() {
        assert_eq!(entrance_animation(0.0), "fadeInUp 0.6s ease-out 0s forwards");
        assert_eq!(
            entrance_animation(3.0 * FILTER_STAGGER_S),
            "fadeInUp 0.6s ease-out 0.3s forwards"
        );
    }
}
