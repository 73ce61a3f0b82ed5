//! Card identity and runtime state.
//!
//! A `Card` pairs an immutable `IdentityToken` with the two flags the game
//! mutates: `flipped` (face up, unresolved or revealed) and `matched`.

use serde::{Deserialize, Serialize};

/// Theme-relative asset key. Two cards with equal tokens form a pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdentityToken(pub String);

impl IdentityToken {
    /// Create a new token.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw asset key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IdentityToken {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for IdentityToken {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl std::fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position of a card in the deck.
///
/// The presentation layer lays cards out in deck order and reports taps by
/// index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIndex(pub usize);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// A card on the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    token: IdentityToken,
    flipped: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(token: IdentityToken) -> Self {
        Self {
            token,
            flipped: false,
            matched: false,
        }
    }

    #[must_use]
    pub fn token(&self) -> &IdentityToken {
        &self.token
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Visible face up, either flipped or already matched.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.flipped || self.matched
    }

    /// Can this card be picked by a tap?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }

    /// Does this card pair with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.token == other.token
    }

    pub(crate) fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }

    pub(crate) fn set_matched(&mut self) {
        self.matched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(IdentityToken::new("cat.png"));

        assert!(!card.is_flipped());
        assert!(!card.is_matched());
        assert!(!card.is_face_up());
        assert!(card.is_selectable());
        assert_eq!(card.token().as_str(), "cat.png");
    }

    #[test]
    fn test_flags() {
        let mut card = Card::new("dog.png".into());

        card.set_flipped(true);
        assert!(card.is_face_up());
        assert!(!card.is_selectable());

        card.set_matched();
        card.set_flipped(false);
        assert!(card.is_face_up());
        assert!(!card.is_selectable());
    }

    #[test]
    fn test_pairs_with() {
        let a1 = Card::new("a".into());
        let a2 = Card::new("a".into());
        let b = Card::new("b".into());

        assert!(a1.pairs_with(&a2));
        assert!(!a1.pairs_with(&b));
    }

    #[test]
    fn test_card_serialization() {
        let mut card = Card::new("owl.png".into());
        card.set_flipped(true);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
