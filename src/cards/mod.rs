//! Card system: identity tokens, cards, themes and the deck factory.
//!
//! ## Key Types
//!
//! - `IdentityToken`: Asset key used to decide whether two cards pair
//! - `Card`: A token plus its `flipped` / `matched` flags
//! - `Theme`: The distinct assets a deck is drawn from
//! - `Deck`: Ordered cards where every token appears exactly twice

pub mod card;
pub mod deck;
pub mod theme;

pub use card::{Card, CardIndex, IdentityToken};
pub use deck::{build_deck, Deck};
pub use theme::Theme;
