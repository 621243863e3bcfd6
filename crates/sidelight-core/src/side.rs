// SPDX-License-Identifier: MIT OR Apache-2.0
//! Left/right designation of the two compared documents.
//!
//! The differencer takes the left document first and the right document
//! second. Renderings and errors are tagged with the side they refer to:
//! `removed` paths only paint the left rendering (the node still exists
//! there) and `added` paths only paint the right rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two compared documents a rendering or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The first input document
    Left,
    /// The second input document
    Right,
}

impl Side {
    /// Lowercase name of the side, as used in CLI arguments and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
