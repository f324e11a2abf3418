//! Image references of the form `<image-name>:<tag>`
//!
//! The tag is whatever follows the last colon, so registry hosts with a
//! port (`registry:5000/scanner:v1.0.0`) keep their prefix intact.

/// A borrowed view over an image reference split at its last colon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageReference<'a> {
    raw: &'a str,
    split: usize,
}

impl<'a> ImageReference<'a> {
    /// Split a raw value, returning None when it has no colon
    pub fn parse(raw: &'a str) -> Option<Self> {
        let split = raw.rfind(':')?;
        Some(Self { raw, split })
    }

    /// Everything before the last colon
    pub fn image(&self) -> &'a str {
        &self.raw[..self.split]
    }

    /// Everything after the last colon
    pub fn tag(&self) -> &'a str {
        &self.raw[self.split + 1..]
    }

    /// The same reference pointing at another tag
    pub fn with_tag(&self, tag: &str) -> String {
        format!("{}:{}", self.image(), tag)
    }
}
