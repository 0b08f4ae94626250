use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A breed as TheDogAPI describes it.
///
/// Only `id` and `name` are guaranteed. Fields this crate does not know about are kept in
/// [`Breed::extra`] so the payload survives a round trip untouched.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Breed {
    /// The numeric id used in `/breeds/{id}`.
    pub id: u32,
    /// The display name, e.g. "Labrador Retriever".
    pub name: String,
    /// Comma separated temperament traits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperament: Option<String>,
    /// Typical life span, e.g. "10 - 13 years".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_span: Option<String>,
    /// What the breed was originally bred for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bred_for: Option<String>,
    /// Kennel club group, e.g. "Sporting".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed_group: Option<String>,
    /// Country or region of origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Weight range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Measure>,
    /// Height range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Measure>,
    /// Id of the breed's reference picture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_image_id: Option<String>,
    /// The reference picture itself. Only the list endpoint sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<BreedImage>,
    /// Anything else the API sent along.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Breed {
    /// The temperament split into individual traits.
    pub fn traits(&self) -> Vec<&str> {
        self.temperament
            .as_deref()
            .map(|t| t.split(',').map(str::trim).filter(|t| !t.is_empty()).collect())
            .unwrap_or_default()
    }

    /// Urls the reference picture may live at, most likely first.
    ///
    /// An explicit image url is authoritative. With only the image id the extension is unknown, so
    /// both extensions the cdn serves are offered in turn.
    pub fn image_urls(&self) -> Vec<String> {
        if let Some(image) = self.image.as_ref().filter(|image| !image.url.is_empty()) {
            return vec![image.url.clone()];
        }

        match &self.reference_image_id {
            Some(id) if !id.is_empty() => IMAGE_EXTENSIONS
                .iter()
                .map(|ext| format!("{IMAGE_CDN}/{id}.{ext}"))
                .collect(),
            _ => Vec::new(),
        }
    }
}

const IMAGE_CDN: &str = "https://cdn2.thedogapi.com/images";
const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "png"];

/// A picture as the list endpoint embeds it.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct BreedImage {
    /// Id of the picture, the same as [`Breed::reference_image_id`].
    #[serde(default)]
    pub id: String,
    /// Where the picture can be downloaded, extension included.
    pub url: String,
}

/// A range given in both unit systems, e.g. `{"imperial": "55 - 80", "metric": "25 - 36"}`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct Measure {
    /// Pounds or inches.
    #[serde(default)]
    pub imperial: String,
    /// Kilograms or centimeters.
    #[serde(default)]
    pub metric: String,
}

/// Which breed to ask for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BreedTarget {
    /// Look the breed up by its numeric id.
    Id(u32),
    /// Look the breed up by name.
    Name(String),
}

impl BreedTarget {
    /// Prefer the numeric id and fall back to the name.
    pub fn new(name: &str, id: Option<u32>) -> Self {
        match id {
            Some(id) => BreedTarget::Id(id),
            None => BreedTarget::Name(name.to_string()),
        }
    }

    /// The last path segment of `/breeds/{target}`, percent-encoded.
    pub fn path_segment(&self) -> String {
        match self {
            BreedTarget::Id(id) => id.to_string(),
            BreedTarget::Name(name) => urlencoding::encode(name).into_owned(),
        }
    }
}

impl Display for BreedTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreedTarget::Id(id) => write!(f, "#{id}"),
            BreedTarget::Name(name) => write!(f, "{name:?}"),
        }
    }
}
