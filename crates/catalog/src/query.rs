//! The catalog query service.
//!
//! One generic service answers every catalog query the storefront UI makes
//! (browsing, search, subcategory filtering, featured-product selection),
//! parameterized by collection name over the injected [`Inventory`].
//! All operations are pure reads; the only non-determinism is confined to
//! the caller-supplied random source.

use rand::Rng;

use crate::inventory::Inventory;
use crate::page::{DEFAULT_PAGE_SIZE, PageEnvelope, paginate};
use crate::product::Product;
use crate::sample::sample;

/// Number of products a random featured selection returns by default.
pub const DEFAULT_FEATURED_COUNT: usize = 12;

/// Read-only query facade over the inventory.
///
/// Holds a borrow of the dataset for its lifetime; every call returns fresh
/// owned results, so callers can never mutate the canonical dataset through
/// a page.
#[derive(Debug, Clone, Copy)]
pub struct CatalogQuery<'a> {
    inventory: &'a Inventory,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        Self { inventory }
    }

    /// All items of `collection`, paginated. Unknown collection names yield
    /// an empty envelope with `count == 0` rather than an error.
    pub fn get_all(&self, collection: &str, page: usize) -> PageEnvelope<Product> {
        paginate(self.items(collection), page, DEFAULT_PAGE_SIZE)
    }

    /// Items whose name or description contains `query` as a
    /// case-insensitive substring, in dataset order. No tokenization, no
    /// ranking; the empty query matches everything.
    pub fn search(&self, collection: &str, query: &str, page: usize) -> PageEnvelope<Product> {
        let matches: Vec<&Product> = self
            .items(collection)
            .iter()
            .filter(|product| product.matches_search(query))
            .collect();
        page_of(matches, page)
    }

    /// Items whose subcategory slug equals `slug` exactly (case-sensitive).
    /// The sentinel slug `"all"` behaves exactly like [`Self::get_all`].
    pub fn by_subcategory(&self, collection: &str, slug: &str, page: usize) -> PageEnvelope<Product> {
        if slug == "all" {
            return self.get_all(collection, page);
        }
        let matches: Vec<&Product> = self
            .items(collection)
            .iter()
            .filter(|product| product.subcategory.slug == slug)
            .collect();
        page_of(matches, page)
    }

    /// Featured items across `collections`, concatenated in the order given,
    /// paginated.
    pub fn featured(&self, collections: &[&str], page: usize) -> PageEnvelope<Product> {
        page_of(self.featured_items(collections), page)
    }

    /// A random selection of `count` featured items across `collections`.
    ///
    /// `results` holds the sample; `count` holds the TOTAL number of
    /// featured items (the population, not the sample size). Callers use it
    /// to size "view all" affordances while showing only the sample.
    pub fn random_featured<R: Rng + ?Sized>(
        &self,
        collections: &[&str],
        count: usize,
        rng: &mut R,
    ) -> PageEnvelope<Product> {
        let featured = self.featured_items(collections);
        PageEnvelope {
            count: featured.len(),
            results: sample(&featured, count, rng)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    fn items(&self, collection: &str) -> &'a [Product] {
        if !self.inventory.has_collection(collection) {
            tracing::debug!(collection, "query against unknown collection");
        }
        self.inventory.collection(collection)
    }

    fn featured_items(&self, collections: &[&str]) -> Vec<&'a Product> {
        collections
            .iter()
            .flat_map(|name| self.items(name))
            .filter(|product| product.is_featured)
            .collect()
    }
}

// Paginate a filtered view, cloning only the returned page.
fn page_of(matches: Vec<&Product>, page: usize) -> PageEnvelope<Product> {
    let envelope = paginate(&matches, page, DEFAULT_PAGE_SIZE);
    PageEnvelope {
        results: envelope.results.into_iter().cloned().collect(),
        count: envelope.count,
    }
}
