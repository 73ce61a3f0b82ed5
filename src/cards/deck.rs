//! Deck factory and deck queries.
//!
//! `build_deck` takes the first `num_cards / 2` distinct assets of a theme,
//! duplicates each one and shuffles. Every token in a built deck appears
//! exactly twice.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardIndex, IdentityToken};
use super::theme::Theme;
use crate::core::{DeckError, DeckRng, Result};

/// An ordered sequence of cards.
///
/// Serializes as a plain card list. Deserializing runs the same pairing
/// check as `Deck::try_from`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = DeckError;

    /// Accept a layout only if every token appears exactly twice and both
    /// cards of a pair agree on being matched.
    fn try_from(cards: Vec<Card>) -> Result<Self> {
        if cards.len() < 2 {
            return Err(DeckError::TooFewCards { count: cards.len() });
        }
        if cards.len() % 2 != 0 {
            return Err(DeckError::OddCardCount { count: cards.len() });
        }

        let mut pairs: FxHashMap<&IdentityToken, (usize, usize)> = FxHashMap::default();
        for card in &cards {
            let (copies, matched) = pairs.entry(card.token()).or_insert((0, 0));
            *copies += 1;
            *matched += usize::from(card.is_matched());
        }
        // Sorted so the reported token does not depend on hash order
        let mut pairs: Vec<_> = pairs.into_iter().collect();
        pairs.sort_unstable_by_key(|(token, _)| *token);

        for (token, (copies, matched)) in pairs {
            if copies != 2 {
                return Err(DeckError::UnpairedToken {
                    token: token.to_string(),
                    copies,
                });
            }
            if matched == 1 {
                return Err(DeckError::SplitPair {
                    token: token.to_string(),
                });
            }
        }

        Ok(Self { cards })
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

/// Build a shuffled deck of `num_cards` cards from `theme`.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{build_deck, Theme};
/// use memory_match::core::DeckRng;
///
/// let theme = Theme::new("shapes", ["circle", "square", "star"]);
/// let deck = build_deck(&theme, 4, &mut DeckRng::new(1)).unwrap();
///
/// assert_eq!(deck.len(), 4);
/// assert_eq!(deck.total_pairs(), 2);
/// ```
pub fn build_deck(theme: &Theme, num_cards: usize, rng: &mut DeckRng) -> Result<Deck> {
    if num_cards < 2 {
        return Err(DeckError::TooFewCards { count: num_cards });
    }
    if num_cards % 2 != 0 {
        return Err(DeckError::OddCardCount { count: num_cards });
    }

    let needed = num_cards / 2;
    if theme.len() < needed {
        return Err(DeckError::NotEnoughAssets {
            theme: theme.id().to_string(),
            needed,
            available: theme.len(),
        });
    }

    let mut cards: Vec<Card> = theme.assets()[..needed]
        .iter()
        .flat_map(|token| [Card::new(token.clone()), Card::new(token.clone())])
        .collect();
    rng.shuffle(&mut cards);

    tracing::debug!(theme = theme.id(), num_cards, seed = rng.seed(), "deck built");

    Ok(Deck { cards })
}

impl Deck {
    /// Build a deck from an explicit layout, no shuffling.
    ///
    /// Returns `None` unless every token appears exactly twice.
    #[must_use]
    pub fn from_tokens<I, K>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<IdentityToken>,
    {
        let cards: Vec<Card> = tokens.into_iter().map(|t| Card::new(t.into())).collect();
        Self::try_from(cards).ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by index.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.0)
    }

    pub(crate) fn get_mut(&mut self, index: CardIndex) -> Option<&mut Card> {
        self.cards.get_mut(index.0)
    }

    /// Iterate over cards with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (CardIndex, &Card)> {
        self.cards.iter().enumerate().map(|(i, c)| (CardIndex(i), c))
    }

    /// Cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Has every card been matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Number of pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count() / 2
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Indices of cards not yet matched.
    #[must_use]
    pub fn unmatched_indices(&self) -> Vec<CardIndex> {
        self.iter()
            .filter(|(_, c)| !c.is_matched())
            .map(|(i, _)| i)
            .collect()
    }
}
