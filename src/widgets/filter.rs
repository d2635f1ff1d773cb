use log::debug;

use super::classes::ClassList;

pub const FILTER_ALL: &str = "all";
pub const ACTIVE: &str = "active";
pub const HIDDEN: &str = "hidden";

#[derive(Clone, Debug, PartialEq)]
pub struct FilterButton {
    pub filter: String,
    pub classes: ClassList,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub category: String,
    pub classes: ClassList,
}

impl Card {
    pub fn is_hidden(&self) -> bool {
        self.classes.contains(HIDDEN)
    }
}

/// Filter buttons over a grid of categorized cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardFilter {
    buttons: Vec<FilterButton>,
    cards: Vec<Card>,
}

impl CardFilter {
    pub fn new<B, C>(filters: B, categories: C) -> CardFilter
    where
        B: IntoIterator,
        B::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        CardFilter {
            buttons: filters
                .into_iter()
                .map(|filter| FilterButton {
                    filter: filter.into(),
                    classes: ClassList::new(),
                })
                .collect(),
            cards: categories
                .into_iter()
                .map(|category| Card {
                    category: category.into(),
                    classes: ClassList::new(),
                })
                .collect(),
        }
    }

    /// Handles a click on button `index`. Returns false for an unknown button.
    pub fn select(&mut self, index: usize) -> bool {
        let filter = match self.buttons.get(index) {
            Some(button) => button.filter.clone(),
            None => return false,
        };
        for button in self.buttons.iter_mut() {
            button.classes.remove(ACTIVE);
        }
        self.buttons[index].classes.add(ACTIVE);

        for card in self.cards.iter_mut() {
            let shown = filter == FILTER_ALL || card.category == filter;
            card.classes.set(HIDDEN, !shown);
        }
        debug!("Filter '{}' selected", filter);
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.buttons
            .iter()
            .find(|button| button.classes.contains(ACTIVE))
            .map(|button| button.filter.as_str())
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(|card| !card.is_hidden())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> CardFilter {
        CardFilter::new(
            ["all", "web", "design"],
            ["web", "design", "web", "video"],
        )
    }

    #[test]
    fn nothing_active_initially() {
        let filter = filter();
        assert_eq!(filter.active(), None);
        assert_eq!(filter.visible_cards().count(), 4);
    }

    #[test]
    fn category_hides_other_cards() {
        let mut filter = filter();
        assert!(filter.select(1));
        assert_eq!(filter.active(), Some("web"));
        let hidden: Vec<bool> = filter.cards().iter().map(Card::is_hidden).collect();
        assert_eq!(hidden, vec![false, true, false, true]);
    }

    #[test]
    fn all_shows_every_card_again() {
        let mut filter = filter();
        filter.select(2);
        filter.select(0);
        assert_eq!(filter.active(), Some("all"));
        assert_eq!(filter.visible_cards().count(), 4);
        let active: Vec<bool> = filter
            .buttons()
            .iter()
            .map(|button| button.classes.contains(ACTIVE))
            .collect();
        assert_eq!(active, vec![true, false, false]);
    }

    #[test]
    fn selecting_twice_is_idempotent() {
        let mut filter = filter();
        filter.select(2);
        let once = filter.clone();
        filter.select(2);
        assert_eq!(filter, once);
    }

    #[test]
    fn unknown_button_is_ignored() {
        let mut filter = filter();
        filter.select(1);
        assert!(!filter.select(9));
        assert_eq!(filter.active(), Some("web"));
    }
}
