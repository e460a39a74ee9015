//! Provider image entities - image metadata as supplied by the photo provider

/// Image URLs at the sizes the gallery renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUrls {
    pub thumb: String,
    pub small: Option<String>,
    pub regular: Option<String>,
    pub full: String,
}

/// A single image record returned by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderImage {
    /// Provider-assigned identifier
    pub id: String,
    pub alt_description: Option<String>,
    pub description: Option<String>,
    pub urls: ImageUrls,
    /// Photographer display name
    pub user_name: String,
    /// Like count as reported by the provider
    pub likes: i64,
    /// Tag titles
    pub tags: Vec<String>,
}

/// One page of provider results with pagination metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderPage {
    pub images: Vec<ProviderImage>,
    pub total: u64,
    pub total_pages: u32,
}

impl ProviderPage {
    /// Build a page from a total item count, deriving the page count.
    pub fn from_total(images: Vec<ProviderImage>, total: u64, per_page: u32) -> Self {
        Self {
            images,
            total,
            total_pages: total_pages(total, per_page),
        }
    }

    /// Image ids in page order
    pub fn ids(&self) -> Vec<String> {
        self.images.iter().map(|image| image.id.clone()).collect()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Number of pages needed for `total` items; never less than one.
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    let pages = total.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
