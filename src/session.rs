// session.rs
// Page flow for one user:
//   Upload   --Analyze-->       Results   (needs an image)
//   Results  --ViewProducts-->  Products
//   Results  --ViewRemedies-->  Remedies
//   Products --ViewRemedies-->  Remedies
//   Products/Remedies --BackToResults--> Results
//   any non-upload page --StartOver--> Upload (drops image and assessment)
use rand::Rng;
use crate::assessment;
use crate::error::ImageError;
use crate::image_source::ImageHandle;
use crate::skin::Assessment;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page { #[default] Upload, Results, Products, Remedies }

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Self::Upload   => "Image Upload",
            Self::Results  => "Analysis Results",
            Self::Products => "Product Recommendations",
            Self::Remedies => "Home Remedies",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action { Analyze, ViewProducts, ViewRemedies, BackToResults, StartOver }

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition { pub from: Page, pub to: Page }

impl Transition {
    pub fn moved(&self) -> bool { self.from != self.to }
}

/// Everything one user has done so far. Owned by the app and passed to the
/// page renderers; never shared.
#[derive(Debug, Default)]
pub struct Session {
    page: Page,
    image: Option<ImageHandle>,
    assessment: Option<Assessment>,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    pub fn page(&self) -> Page { self.page }
    pub fn image(&self) -> Option<&ImageHandle> { self.image.as_ref() }
    pub fn assessment(&self) -> Option<&Assessment> { self.assessment.as_ref() }

    /// Replaces the pending image. Only the upload page takes images.
    pub fn attach_image(&mut self, image: ImageHandle) -> Result<(), ImageError> {
        if self.page != Page::Upload { return Err(ImageError::WrongPage); }
        tracing::info!(id = image.id, origin = %image.origin, "image attached");
        self.image = Some(image);
        Ok(())
    }

    pub fn clear_image(&mut self) {
        if self.page == Page::Upload { self.image = None; }
    }

    /// Applies `action`. Anything not allowed from the current page, or an
    /// analysis without an image, leaves the session untouched.
    pub fn dispatch<R: Rng + ?Sized>(&mut self, action: Action, rng: &mut R) -> Transition {
        let from = self.page;
        let to = match (from, action) {
            (Page::Upload, Action::Analyze) if self.image.is_some() => {
                self.assessment = Some(assessment::generate(rng));
                Page::Results
            }
            (Page::Results, Action::ViewProducts)                         => Page::Products,
            (Page::Results | Page::Products, Action::ViewRemedies)        => Page::Remedies,
            (Page::Products | Page::Remedies, Action::BackToResults)      => Page::Results,
            (Page::Results | Page::Products | Page::Remedies, Action::StartOver) => {
                self.image = None;
                self.assessment = None;
                Page::Upload
            }
            _ => from,
        };
        self.page = to;
        let t = Transition { from, to };
        if t.moved() {
            tracing::debug!(?action, from = from.title(), to = to.title(), "page transition");
        } else {
            tracing::debug!(?action, page = from.title(), "action ignored");
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_source::{fixtures::PNG, ImageOrigin};
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng { StdRng::seed_from_u64(11) }
    fn png() -> ImageHandle { ImageHandle::from_bytes(ImageOrigin::Camera, PNG).unwrap() }

    fn analyzed() -> (Session, StdRng) {
        let mut s = Session::new();
        let mut r = rng();
        s.attach_image(png()).unwrap();
        assert_eq!(s.dispatch(Action::Analyze, &mut r), Transition { from: Page::Upload, to: Page::Results });
        (s, r)
    }

    #[test]
    fn analyze_without_image_is_a_no_op() {
        let mut s = Session::new();
        let t = s.dispatch(Action::Analyze, &mut rng());
        assert!(!t.moved());
        assert_eq!(s.page(), Page::Upload);
        assert!(s.assessment().is_none());
    }

    #[test]
    fn analyze_stores_an_assessment() {
        let (s, _) = analyzed();
        assert!(s.assessment().is_some());
        assert!(s.image().is_some());
    }

    #[test]
    fn view_remedies_keeps_the_assessment() {
        let (mut s, mut r) = analyzed();
        let before = *s.assessment().unwrap();
        let t = s.dispatch(Action::ViewRemedies, &mut r);
        assert_eq!(t, Transition { from: Page::Results, to: Page::Remedies });
        assert_eq!(s.assessment(), Some(&before));
    }

    #[test]
    fn navigation_table() {
        let (mut s, mut r) = analyzed();
        let before = *s.assessment().unwrap();
        let steps = [
            (Action::ViewProducts,  Page::Products),
            (Action::ViewProducts,  Page::Products),
            (Action::ViewRemedies,  Page::Remedies),
            (Action::ViewProducts,  Page::Remedies),
            (Action::Analyze,       Page::Remedies),
            (Action::BackToResults, Page::Results),
            (Action::BackToResults, Page::Results),
            (Action::ViewProducts,  Page::Products),
            (Action::BackToResults, Page::Results),
        ];
        for (action, want) in steps {
            s.dispatch(action, &mut r);
            assert_eq!(s.page(), want, "after {action:?}");
            assert_eq!(s.assessment(), Some(&before));
        }
    }

    #[test]
    fn start_over_discards_state() {
        let (mut s, mut r) = analyzed();
        s.dispatch(Action::ViewProducts, &mut r);
        let t = s.dispatch(Action::StartOver, &mut r);
        assert_eq!(t.to, Page::Upload);
        assert!(s.assessment().is_none());
        assert!(s.image().is_none());
        assert!(!s.dispatch(Action::StartOver, &mut r).moved());
    }

    #[test]
    fn images_only_attach_on_upload() {
        let (mut s, _) = analyzed();
        assert!(matches!(s.attach_image(png()), Err(ImageError::WrongPage)));
        s.clear_image();
        assert!(s.image().is_some());
    }

    #[test]
    fn reanalysis_replaces_the_assessment() {
        let (mut s, mut r) = analyzed();
        let first = *s.assessment().unwrap();
        s.dispatch(Action::StartOver, &mut r);
        s.attach_image(png()).unwrap();
        s.dispatch(Action::Analyze, &mut r);
        assert_eq!(s.page(), Page::Results);
        assert_ne!(s.assessment(), Some(&first));
    }
}
