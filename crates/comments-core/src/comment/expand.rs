//! Bit-flag set selecting which optional parts of a comment the service returns

use crate::error::CommentsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Expand options as a raw integer bitmask.
///
/// `ALL` is the literal `-17` the service expects. It is not the union of the
/// named flags and must never be recomputed from them. Bits outside the named
/// flags are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentExpandOptions(i32);

const NAMED: &[(&str, CommentExpandOptions)] = &[
    ("reactions", CommentExpandOptions::REACTIONS),
    ("renderedText", CommentExpandOptions::RENDERED_TEXT),
    ("renderedTextOnly", CommentExpandOptions::RENDERED_TEXT_ONLY),
    ("children", CommentExpandOptions::CHILDREN),
];

impl CommentExpandOptions {
    /// Comments only: no mentions, reactions or rendered text
    pub const NONE: Self = Self(0);
    /// Include comment reactions
    pub const REACTIONS: Self = Self(1);
    /// Include rendered HTML in addition to the markdown text
    pub const RENDERED_TEXT: Self = Self(8);
    pub const RENDERED_TEXT_ONLY: Self = Self(16);
    /// Expand replies in the results
    pub const CHILDREN: Self = Self(32);
    /// Everything, including reactions, mentions and rendered text
    pub const ALL: Self = Self(-17);

    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> i32 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for CommentExpandOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CommentExpandOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<CommentExpandOptions> for i32 {
    fn from(value: CommentExpandOptions) -> i32 {
        value.0
    }
}

impl fmt::Display for CommentExpandOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ALL {
            return f.write_str("all");
        }
        if self.is_none() {
            return f.write_str("none");
        }

        let mut names = Vec::new();
        let mut rest = self.0;
        for (name, flag) in NAMED {
            if self.contains(*flag) {
                names.push((*name).to_string());
                rest &= !flag.0;
            }
        }
        if rest != 0 {
            names.push(format!("{:#x}", rest));
        }
        f.write_str(&names.join(","))
    }
}

/// Parses `all`, `none`, or a `,`/`|` separated list of flag names
impl FromStr for CommentExpandOptions {
    type Err = CommentsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = Self::NONE;
        for part in s.split([',', '|']).map(str::trim).filter(|p| !p.is_empty()) {
            if part.eq_ignore_ascii_case("all") {
                return Ok(Self::ALL);
            }
            if part.eq_ignore_ascii_case("none") {
                continue;
            }
            let (_, flag) = NAMED
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(part))
                .ok_or_else(|| CommentsError::UnknownName {
                    kind: "CommentExpandOptions",
                    name: part.to_string(),
                })?;
            options |= *flag;
        }
        Ok(options)
    }
}
