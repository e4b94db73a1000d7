/// Reference to the image of a point.
///
/// A point either links an external image (`uri`) or names
/// a bundled asset (`local`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRef {
    pub uri: Option<String>,
    pub local: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
    Url(&'a str),
    Asset(&'static str),
    Placeholder,
}

pub const PLACEHOLDER_ASSET: &str = "placeholder.jpg";

/// Images that are bundled with the app.
pub const LOCAL_ASSETS: &[&str] = &[
    "batik_sabdo1.jpg",
    "batik_sabdo2.jpg",
    "gerabah_sabdo1.jpg",
    "gerabah_sabdo2.jpg",
    "perak_sabdo1.jpg",
    "perak_sabdo2.jpg",
    "kayu_sabdo1.jpg",
    "kayu_sabdo2.jpg",
    "manding_leather1.jpg",
    "manding_leather2.jpg",
    "anyaman_sabdo1.jpg",
    "anyaman_sabdo2.jpg",
    "studio_modern1.jpg",
    "studio_modern2.jpg",
    PLACEHOLDER_ASSET,
];

#[derive(Debug, Clone, Copy)]
pub struct AssetTable {
    keys: &'static [&'static str],
}

impl Default for AssetTable {
    fn default() -> Self {
        Self { keys: LOCAL_ASSETS }
    }
}

impl AssetTable {
    pub const fn new(keys: &'static [&'static str]) -> Self {
        Self { keys }
    }

    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.keys.iter().copied().find(|k| *k == key)
    }
}

fn is_remote(s: &str) -> bool {
    s.starts_with("http")
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ImageRef {
    pub fn is_empty(&self) -> bool {
        non_blank(&self.uri).is_none() && non_blank(&self.local).is_none()
    }

    /// URL first, then a bundled asset, then the placeholder.
    pub fn resolve(&self, assets: &AssetTable) -> ImageSource<'_> {
        if let Some(uri) = non_blank(&self.uri) {
            return ImageSource::Url(uri);
        }
        if let Some(local) = non_blank(&self.local) {
            if is_remote(local) {
                return ImageSource::Url(local);
            }
            if let Some(asset) = assets.lookup(local) {
                return ImageSource::Asset(asset);
            }
        }
        ImageSource::Placeholder
    }
}
