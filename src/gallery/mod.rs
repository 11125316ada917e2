mod list;
mod markup;
mod viewer;

pub use list::{GalleryError, ImageList};
pub use markup::{ImageMarkup, MarkupStyle};
pub use viewer::{ImageViewer, Navigation};

/// Pictures shipped with the default site.
pub const DEFAULT_PICTURES: [&str; 5] = [
    "12143351_10207282122748594_7296485508454759107_n.jpg",
    "11892136_10100501027220870_2977168626840559920_n.jpg",
    "11150711_10206032039417292_1988554892302920147_n.jpg",
    "15350602_10210416944517179_5078769292854320016_n.jpg",
    "526828_10151555714703240_1895636344_n.jpg",
];
