//! Canonical character record and the normalizer that produces it.
//!
//! Upstream objects are loosely typed: any field may be missing, null, or of
//! an unexpected type. Normalization is total. Each text field is resolved
//! through [`TEXT_FIELDS`] and the image through [`IMAGE_SOURCES`], both
//! plain lookup tables read in order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

pub const DEFAULT_PLACEHOLDER_NAME: &str = "Sem nome";
pub const MISSING_ATTRIBUTE: &str = "-";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub race: String,
    pub description: String,
    pub quote: String,
    /// `None` means no image is available, which is not the same as `Some("")`.
    pub image: Option<String>,
}

impl Character {
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|url| !url.is_empty())
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Age => &mut self.age,
            TextField::Gender => &mut self.gender,
            TextField::Race => &mut self.race,
            TextField::Description => &mut self.description,
            TextField::Quote => &mut self.quote,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum TextField {
    Name,
    Age,
    Gender,
    Race,
    Description,
    Quote,
}

#[derive(Clone, Copy, Debug)]
enum Fallback {
    Placeholder,
    Dash,
    Blank,
}

const TEXT_FIELDS: [(TextField, &str, Fallback); 6] = [
    (TextField::Name, "name", Fallback::Placeholder),
    (TextField::Age, "age", Fallback::Dash),
    (TextField::Gender, "gender", Fallback::Dash),
    (TextField::Race, "race", Fallback::Dash),
    (TextField::Description, "description", Fallback::Blank),
    (TextField::Quote, "quote", Fallback::Blank),
];

#[derive(Clone, Copy, Debug)]
enum ImageSource {
    Direct(&'static str),
    FirstOf(&'static str),
}

const IMAGE_SOURCES: [ImageSource; 3] = [
    ImageSource::Direct("image"),
    ImageSource::Direct("img"),
    ImageSource::FirstOf("images"),
];

/// Normalizes raw catalog objects into [`Character`] records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalizer {
    placeholder_name: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_NAME)
    }
}

impl Normalizer {
    pub fn new(placeholder_name: impl Into<String>) -> Self {
        Self {
            placeholder_name: placeholder_name.into(),
        }
    }

    pub fn placeholder_name(&self) -> &str {
        &self.placeholder_name
    }

    /// `position` is the entry's index in a list response and is only used
    /// when the object carries no usable `id`.
    pub fn normalize(&self, raw: &Value, position: Option<usize>) -> Character {
        let id = match (raw.get("id").and_then(scalar_text), position) {
            (Some(id), _) => id,
            (None, Some(index)) => index.to_string(),
            (None, None) => {
                warn!("catalog entry has no id and no positional fallback");
                String::new()
            }
        };

        let mut character = Character {
            id,
            image: resolve_image(raw),
            ..Character::default()
        };

        for (field, key, fallback) in TEXT_FIELDS {
            *character.text_mut(field) = raw
                .get(key)
                .and_then(scalar_text)
                .unwrap_or_else(|| self.fallback(fallback));
        }

        character
    }

    fn fallback(&self, fallback: Fallback) -> String {
        match fallback {
            Fallback::Placeholder => self.placeholder_name.clone(),
            Fallback::Dash => MISSING_ATTRIBUTE.to_string(),
            Fallback::Blank => String::new(),
        }
    }
}

/// Normalizes with the default placeholder name.
pub fn normalize(raw: &Value, position: Option<usize>) -> Character {
    Normalizer::default().normalize(raw, position)
}

/// Strings pass through; numbers and booleans use their JSON text. Null,
/// arrays and objects are treated as absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn image_ref(value: &Value) -> Option<String> {
    match value {
        Value::Object(record) => record.get("url").and_then(scalar_text),
        other => scalar_text(other),
    }
}

fn resolve_image(raw: &Value) -> Option<String> {
    IMAGE_SOURCES.iter().find_map(|source| match *source {
        ImageSource::Direct(key) => raw.get(key).and_then(image_ref),
        ImageSource::FirstOf(key) => raw
            .get(key)
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .and_then(image_ref),
    })
}
