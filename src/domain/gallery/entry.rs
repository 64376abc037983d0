// SPDX-License-Identifier: MPL-2.0
//! Gallery image entries.
//!
//! An [`ImageEntry`] is collected once from the page and never changes
//! afterwards, so all fields are private and exposed through accessors.

/// Which text the overlay shows under the enlarged image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptionSource {
    /// The image alt text.
    #[default]
    Alt,
    /// The title, falling back to the alt text when there is none.
    Title,
    /// "title — description", dropping whichever part is missing.
    TitleAndDescription,
}

/// One image of the gallery, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    source_url: String,
    alt_text: String,
    title: Option<String>,
    description: Option<String>,
    download_url: Option<String>,
}

impl ImageEntry {
    /// Creates an entry with only the required fields.
    #[must_use]
    pub fn new(source_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            alt_text: alt_text.into(),
            title: None,
            description: None,
            download_url: None,
        }
    }

    /// Sets the optional title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_blank(title.into());
        self
    }

    /// Sets the optional description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(description.into());
        self
    }

    /// Sets the optional download URL.
    #[must_use]
    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = non_blank(url.into());
        self
    }

    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    /// Returns the caption text for the given source.
    #[must_use]
    pub fn caption(&self, source: CaptionSource) -> String {
        match source {
            CaptionSource::Alt => self.alt_text.clone(),
            CaptionSource::Title => self
                .title
                .clone()
                .unwrap_or_else(|| self.alt_text.clone()),
            CaptionSource::TitleAndDescription => {
                match (self.title.as_deref(), self.description.as_deref()) {
                    (Some(title), Some(desc)) => format!("{title} — {desc}"),
                    (Some(title), None) => title.to_string(),
                    (None, Some(desc)) => desc.to_string(),
                    (None, None) => self.alt_text.clone(),
                }
            }
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_has_no_optional_fields() {
        let entry = ImageEntry::new("a.jpg", "First");
        assert_eq!(entry.source_url(), "a.jpg");
        assert_eq!(entry.alt_text(), "First");
        assert!(entry.title().is_none());
        assert!(entry.description().is_none());
        assert!(entry.download_url().is_none());
    }

    #[test]
    fn blank_optional_fields_are_dropped() {
        let entry = ImageEntry::new("a.jpg", "")
            .with_title("   ")
            .with_description("")
            .with_download_url(" a-full.jpg ");
        assert!(entry.title().is_none());
        assert!(entry.description().is_none());
        assert_eq!(entry.download_url(), Some("a-full.jpg"));
    }

    #[test]
    fn alt_caption_uses_alt_text() {
        let entry = ImageEntry::new("a.jpg", "Graduation").with_title("2019");
        assert_eq!(entry.caption(CaptionSource::Alt), "Graduation");
    }

    #[test]
    fn title_caption_falls_back_to_alt() {
        let entry = ImageEntry::new("a.jpg", "Graduation");
        assert_eq!(entry.caption(CaptionSource::Title), "Graduation");

        let titled = entry.with_title("Class of 2019");
        assert_eq!(titled.caption(CaptionSource::Title), "Class of 2019");
    }

    #[test]
    fn title_and_description_caption_joins_parts() {
        let entry = ImageEntry::new("a.jpg", "alt")
            .with_title("Lab")
            .with_description("Robot arm calibration");
        assert_eq!(
            entry.caption(CaptionSource::TitleAndDescription),
            "Lab — Robot arm calibration"
        );

        let only_desc = ImageEntry::new("b.jpg", "alt").with_description("Desc");
        assert_eq!(only_desc.caption(CaptionSource::TitleAndDescription), "Desc");

        let bare = ImageEntry::new("c.jpg", "alt");
        assert_eq!(bare.caption(CaptionSource::TitleAndDescription), "alt");
    }
}
