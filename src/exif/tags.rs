use exif::{Context, Tag};

/// Resolve a primary-image tag ID to its standard EXIF name.
///
/// IFD0 and Exif sub-IFD tags share one number space, so both tables are
/// consulted. Returns `None` for IDs the decoder does not know.
pub fn tag_name(id: u16) -> Option<String> {
    [Context::Tiff, Context::Exif]
        .into_iter()
        .map(|ctx| Tag(ctx, id))
        .find(|tag| tag.description().is_some())
        .map(|tag| tag.to_string())
}
