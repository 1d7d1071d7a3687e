use serde::{Deserialize, Serialize};

use forgestore_core::{Entity, ProductId, ValueObject};

/// Image shown when a product has no primary image of its own.
pub const PLACEHOLDER_IMAGE: &str = "default-image.png";

/// Subcategory within a category (`(category, slug)` is unique in the
/// source dataset; `slug` alone identifies a subcategory inside one
/// collection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub slug: String,
    pub name: String,
}

impl ValueObject for Subcategory {}

/// A purchasable catalog item.
///
/// Products are immutable read-only records sourced from the bundled
/// inventory dataset; there is no create/update/delete lifecycle in this
/// core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub category: String,
    pub subcategory: Subcategory,
    #[serde(default)]
    pub is_featured: bool,
    /// Primary image. `None` renders as [`PLACEHOLDER_IMAGE`].
    #[serde(default)]
    pub image_url: Option<String>,
    /// Additional gallery images, in display order.
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default)]
    pub rating: f32,
}

impl Product {
    /// The image to display for this product, falling back to the
    /// placeholder when the dataset carries none.
    pub fn display_image(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// All displayable images: the primary image first, then the additional
    /// gallery images in order.
    pub fn gallery(&self) -> Vec<&str> {
        let mut images = Vec::with_capacity(1 + self.additional_images.len());
        images.push(self.display_image());
        images.extend(self.additional_images.iter().map(String::as_str));
        images
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// Both sides are lower-cased before comparison. The empty query matches
    /// every product (the empty string is a substring of everything).
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
