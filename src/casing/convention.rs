//! Casing convention selector and the text transform behind each variant.

use std::fmt;

use heck::{CamelCase, KebabCase, MixedCase, ShoutySnakeCase, SnakeCase, TitleCase};
use serde::{Deserialize, Serialize};

/// Text transform applied to the textual form of a key.
pub type Coercion = fn(&str) -> String;

/// Identifier casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum CasingConvention {
    /// `PascalCase`
    Pascal,
    /// `camelCase`
    Camel,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnake,
    /// `snake_case`
    Snake,
    /// `kebab-case`
    Kebab,
    /// `Camel_Snake_Case`
    CamelSnake,
    /// A name outside the supported set. Keys pass through as identifiers.
    Unrecognized,
}

impl CasingConvention {
    /// All supported conventions, in declaration order.
    pub const SUPPORTED: [CasingConvention; 6] = [
        CasingConvention::Pascal,
        CasingConvention::Camel,
        CasingConvention::ScreamingSnake,
        CasingConvention::Snake,
        CasingConvention::Kebab,
        CasingConvention::CamelSnake,
    ];

    /// Resolve a convention by canonical name or short alias.
    pub fn from_name(name: &str) -> Self {
        match name {
            "PascalCase" | "pascal" => CasingConvention::Pascal,
            "camelCase" | "camel" => CasingConvention::Camel,
            "SCREAMING_SNAKE_CASE" | "screaming-snake" => CasingConvention::ScreamingSnake,
            "snake_case" | "snake" => CasingConvention::Snake,
            "kebab-case" | "kebab" => CasingConvention::Kebab,
            "Camel_Snake_Case" | "camel-snake" => CasingConvention::CamelSnake,
            _ => CasingConvention::Unrecognized,
        }
    }

    /// Canonical name, written in the convention itself.
    pub fn name(self) -> &'static str {
        match self {
            CasingConvention::Pascal => "PascalCase",
            CasingConvention::Camel => "camelCase",
            CasingConvention::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            CasingConvention::Snake => "snake_case",
            CasingConvention::Kebab => "kebab-case",
            CasingConvention::CamelSnake => "Camel_Snake_Case",
            CasingConvention::Unrecognized => "unrecognized",
        }
    }

    /// The text transform for this convention, `None` when unrecognized.
    pub fn coercion(self) -> Option<Coercion> {
        match self {
            CasingConvention::Pascal => Some(to_pascal_case),
            CasingConvention::Camel => Some(to_camel_case),
            CasingConvention::ScreamingSnake => Some(to_screaming_snake_case),
            CasingConvention::Snake => Some(to_snake_case),
            CasingConvention::Kebab => Some(to_kebab_case),
            CasingConvention::CamelSnake => Some(to_camel_snake_case),
            CasingConvention::Unrecognized => None,
        }
    }
}

/// Upper bound on re-applying a heck transform to its own output.
const MAX_SETTLE_PASSES: usize = 4;

/// Re-apply `step` until its output stops changing.
///
/// heck splits words differently around digits once a key is already
/// cased (`x-1-y` → `X1Y` → `X1y`), so a single pass is not a fixed point.
fn settle(text: &str, step: impl Fn(&str) -> String) -> String {
    let mut current = step(text);
    for _ in 0..MAX_SETTLE_PASSES {
        let next = step(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn to_pascal_case(text: &str) -> String {
    settle(text, |text| text.to_camel_case())
}

fn to_camel_case(text: &str) -> String {
    settle(text, |text| text.to_mixed_case())
}

fn to_screaming_snake_case(text: &str) -> String {
    settle(text, |text| text.to_shouty_snake_case())
}

fn to_snake_case(text: &str) -> String {
    settle(text, |text| SnakeCase::to_snake_case(text))
}

fn to_kebab_case(text: &str) -> String {
    settle(text, |text| KebabCase::to_kebab_case(text))
}

/// `user-id` → `User_Id`
fn to_camel_snake_case(text: &str) -> String {
    settle(text, |text| text.to_title_case().replace(' ', "_"))
}

impl From<String> for CasingConvention {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<&str> for CasingConvention {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<CasingConvention> for String {
    fn from(convention: CasingConvention) -> Self {
        convention.name().to_string()
    }
}

impl fmt::Display for CasingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
