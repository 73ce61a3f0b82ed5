//! Themes - the asset sets cards are drawn from.
//!
//! A theme is an identifier plus an ordered list of asset keys. Loading the
//! images is the host's job; the engine only needs the keys, and optionally
//! the sound cue paired with each key for audio assist.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::IdentityToken;

/// A named set of card faces.
///
/// ## Example
///
/// ```
/// use memory_match::cards::Theme;
///
/// let theme = Theme::new("animals", ["cat.png", "dog.png", "cat.png"])
///     .with_audio_cue("cat.png", "cat.wav");
///
/// // Duplicate keys collapse
/// assert_eq!(theme.len(), 2);
/// assert_eq!(theme.audio_cue(&"cat.png".into()), Some("cat.wav"));
/// assert_eq!(theme.audio_cue(&"dog.png".into()), None);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "ThemeDoc")]
pub struct Theme {
    id: String,
    assets: Vec<IdentityToken>,
    audio_cues: FxHashMap<IdentityToken, String>,
}

/// Serialized form of a theme. Loading goes through `Theme::new` so a
/// theme file cannot smuggle in duplicate keys or cues for missing assets.
#[derive(Deserialize)]
struct ThemeDoc {
    id: String,
    assets: Vec<IdentityToken>,
    #[serde(default)]
    audio_cues: FxHashMap<IdentityToken, String>,
}

impl From<ThemeDoc> for Theme {
    fn from(doc: ThemeDoc) -> Self {
        doc.audio_cues
            .into_iter()
            .fold(Theme::new(doc.id, doc.assets), |theme, (asset, cue)| {
                theme.with_audio_cue(asset, cue)
            })
    }
}

impl Theme {
    /// Create a theme. Duplicate asset keys are dropped, first one wins.
    #[must_use]
    pub fn new<I, K>(id: impl Into<String>, assets: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<IdentityToken>,
    {
        let mut theme = Self {
            id: id.into(),
            assets: Vec::new(),
            audio_cues: FxHashMap::default(),
        };
        for asset in assets {
            theme.push_asset(asset.into());
        }
        theme
    }

    /// Attach a sound cue to an asset (builder pattern).
    ///
    /// Ignored if the asset is not part of the theme.
    #[must_use]
    pub fn with_audio_cue(
        mut self,
        asset: impl Into<IdentityToken>,
        cue: impl Into<String>,
    ) -> Self {
        let asset = asset.into();
        if self.assets.contains(&asset) {
            self.audio_cues.insert(asset, cue.into());
        }
        self
    }

    fn push_asset(&mut self, asset: IdentityToken) {
        if !self.assets.contains(&asset) {
            self.assets.push(asset);
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Distinct asset keys in theme order.
    #[must_use]
    pub fn assets(&self) -> &[IdentityToken] {
        &self.assets
    }

    /// Number of distinct assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Sound cue for an asset, if the theme has one.
    #[must_use]
    pub fn audio_cue(&self, token: &IdentityToken) -> Option<&str> {
        self.audio_cues.get(token).map(String::as_str)
    }
}
