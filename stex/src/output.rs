const STEX_EXTENSION: &[u8] = b".stex";
const FALLBACK_NAME: &str = "converted";

/// Returns true if `name` ends with `.stex`, ignoring case.
///
/// Only advisory, inputs without the extension are still converted.
pub fn has_stex_extension(name: &str) -> bool {
    name.len() >= STEX_EXTENSION.len()
        && name.as_bytes()[name.len() - STEX_EXTENSION.len()..].eq_ignore_ascii_case(STEX_EXTENSION)
}

/// Derive the png file name for a texture named `name`.
///
/// A trailing `.stex` (any case) is replaced by `.png`, other names get `.png` appended
/// and an empty base name falls back to `converted.png`.
///
/// ```
/// assert_eq!(stex::output_filename("image.stex"), "image.png");
/// assert_eq!(stex::output_filename("IMAGE.STEX"), "IMAGE.png");
/// assert_eq!(stex::output_filename("noext"), "noext.png");
/// assert_eq!(stex::output_filename(""), "converted.png");
/// ```
pub fn output_filename(name: &str) -> String {
    // the suffix is ascii so the cut always lands on a char boundary
    let base = if has_stex_extension(name) {
        &name[..name.len() - STEX_EXTENSION.len()]
    } else {
        name
    };

    if base.is_empty() {
        format!("{}.png", FALLBACK_NAME)
    } else {
        format!("{}.png", base)
    }
}

/// A converted texture ready to be offered as a download or written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PngResource {
    filename: String,
    data: Vec<u8>,
}

impl PngResource {
    pub const MIME_TYPE: &'static str = "image/png";

    pub(crate) fn new(input_name: &str, data: Vec<u8>) -> Self {
        Self {
            filename: output_filename(input_name),
            data,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn mime(&self) -> &'static str {
        Self::MIME_TYPE
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
