//! Section navigation
//!
//! The view decides what scrolling to a section means. The model only hands
//! over the opaque [`SectionRef`].

use ac_checklist::SectionRef;

/// Receives scroll/focus requests
pub trait SectionNavigator {
    fn navigate(&mut self, section: &SectionRef);
}

impl<F> SectionNavigator for F
where
    F: FnMut(&SectionRef),
{
    fn navigate(&mut self, section: &SectionRef) {
        self(section);
    }
}

/// Navigator that remembers every request, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    pub visited: Vec<SectionRef>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last(&self) -> Option<&SectionRef> {
        self.visited.last()
    }
}

impl SectionNavigator for RecordingNavigator {
    fn navigate(&mut self, section: &SectionRef) {
        self.visited.push(section.clone());
    }
}
