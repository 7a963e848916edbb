use crate::models::catalog::CatalogRecord;
use crate::models::media::Media;

/// What happened inside an open lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxEvent<'a> {
    BackdropClick,
    CloseClick,
    /// A click on the enlarged image or document itself.
    ContentClick,
    Key(&'a str),
}

/// Full-screen viewer for one media item. Owned by the detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<Media>,
}

impl Lightbox {
    pub fn new() -> Self {
        Lightbox::default()
    }

    /// Lightbox state for a detail request: open on the record's `view`-th
    /// media item, closed when `view` is absent or out of range.
    pub fn for_view(record: &CatalogRecord, view: Option<usize>) -> Self {
        let mut lightbox = Lightbox::new();
        if let Some(media) = view.and_then(|i| record.media(i)) {
            lightbox.open(media.clone());
        }
        lightbox
    }

    pub fn open(&mut self, media: Media) {
        self.selected = Some(media);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Media> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Apply an event. Returns true when it closed the lightbox.
    ///
    /// Content clicks never reach the backdrop handler, so they leave the
    /// selection alone.
    pub fn handle(&mut self, event: LightboxEvent<'_>) -> bool {
        if !self.is_open() {
            return false;
        }
        match event {
            LightboxEvent::BackdropClick | LightboxEvent::CloseClick => {
                self.close();
                true
            }
            LightboxEvent::Key("Escape") => {
                self.close();
                true
            }
            LightboxEvent::Key(_) | LightboxEvent::ContentClick => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_on_closed_lightbox_are_ignored() {
        let mut lb = Lightbox::new();
        assert!(!lb.handle(LightboxEvent::Key("Escape")));
        assert!(!lb.is_open());
    }

    #[test]
    fn other_keys_do_not_close() {
        let mut lb = Lightbox::new();
        lb.open(Media::new("/a.png"));
        assert!(!lb.handle(LightboxEvent::Key("Enter")));
        assert!(!lb.handle(LightboxEvent::Key("escape")));
        assert!(lb.is_open());
    }
}
