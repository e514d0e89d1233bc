//! Maps the viewport scroll offset to the section currently in view.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Distance below the top of the viewport used as the reference line.
pub const LOOKAHEAD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Certifications,
    Contact,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Certifications,
        Section::Contact,
    ];

    /// Element id of the section container.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Certifications => "certifications",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Certifications => "Certifications",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a section as laid out by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `top <= position < top + height`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Source of section geometry. `None` means the element is not on the page.
pub trait SectionLayout {
    fn extent(&self, section: Section) -> Option<Extent>;
}

impl<F> SectionLayout for F
where
    F: Fn(Section) -> Option<Extent>,
{
    fn extent(&self, section: Section) -> Option<Extent> {
        self(section)
    }
}

/// First section, in display order, whose extent contains `offset + LOOKAHEAD`.
pub fn locate(offset: f64, layout: &impl SectionLayout) -> Option<Section> {
    let reference = offset + LOOKAHEAD;
    Section::ALL.into_iter().find(|&section| {
        layout
            .extent(section)
            .is_some_and(|extent| extent.contains(reference))
    })
}

/// Tracks the active section across scroll events.
///
/// When no section contains the reference line the previous value is kept,
/// so scrolling past the last section leaves its link highlighted.
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    active: Section,
    detached: bool,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_attached(&self) -> bool {
        !self.detached
    }

    /// Feed one scroll offset. Returns the new section only when it changed.
    pub fn observe(&mut self, offset: f64, layout: &impl SectionLayout) -> Option<Section> {
        if self.detached {
            return None;
        }
        let found = locate(offset, layout)?;
        if found == self.active {
            return None;
        }
        self.active = found;
        Some(found)
    }

    /// Stop reacting to scroll events. Called once at teardown.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Page(HashMap<Section, Extent>);

    impl SectionLayout for Page {
        fn extent(&self, section: Section) -> Option<Extent> {
            self.0.get(&section).copied()
        }
    }

    fn layout(extents: &[(Section, f64, f64)]) -> Page {
        Page(
            extents
                .iter()
                .map(|&(s, top, height)| (s, Extent::new(top, height)))
                .collect(),
        )
    }

    // every section 600 high, stacked in display order
    fn full_page() -> Page {
        let mut top = 0.0;
        Page(
            Section::ALL
                .into_iter()
                .map(|s| {
                    let extent = Extent::new(top, 600.0);
                    top += 600.0;
                    (s, extent)
                })
                .collect(),
        )
    }

    #[test]
    fn test_home_about_scenario() {
        let page = layout(&[(Section::Home, 0.0, 500.0), (Section::About, 500.0, 300.0)]);
        let mut spy = ScrollSpy::new();

        assert_eq!(spy.observe(450.0, &page), Some(Section::About));
        assert_eq!(spy.active(), Section::About);

        assert_eq!(spy.observe(0.0, &page), Some(Section::Home));
        assert_eq!(spy.active(), Section::Home);
    }

    #[test]
    fn test_default_is_first_section() {
        assert_eq!(ScrollSpy::new().active(), Section::Home);
        assert_eq!(Section::default(), Section::ALL[0]);
    }

    #[test]
    fn test_locate_matches_containing_interval() {
        let page = full_page();
        for (i, section) in Section::ALL.into_iter().enumerate() {
            let top = i as f64 * 600.0;
            // reference line sits exactly on the top edge
            assert_eq!(locate(top - LOOKAHEAD, &page), Some(section));
            assert_eq!(locate(top + 599.0 - LOOKAHEAD, &page), Some(section));
        }
    }

    #[test]
    fn test_bottom_edge_is_exclusive() {
        let page = layout(&[(Section::Home, 0.0, 500.0), (Section::About, 500.0, 300.0)]);
        assert_eq!(locate(400.0, &page), Some(Section::About));
        assert_eq!(locate(399.5, &page), Some(Section::Home));
    }

    #[test]
    fn test_overlap_first_match_wins() {
        let page = layout(&[
            (Section::Home, 0.0, 1000.0),
            (Section::About, 200.0, 1000.0),
        ]);
        assert_eq!(locate(500.0, &page), Some(Section::Home));
        assert_eq!(locate(1000.0, &page), Some(Section::About));
    }

    #[test]
    fn test_no_match_is_sticky() {
        let page = layout(&[(Section::Home, 0.0, 500.0), (Section::About, 500.0, 300.0)]);
        let mut spy = ScrollSpy::new();
        spy.observe(600.0, &page);
        assert_eq!(spy.active(), Section::About);

        // scrolled past the bottom of the last section
        assert_eq!(spy.observe(5000.0, &page), None);
        assert_eq!(spy.active(), Section::About);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let page = layout(&[(Section::Projects, 0.0, 400.0)]);
        let mut spy = ScrollSpy::new();
        assert_eq!(spy.observe(0.0, &page), Some(Section::Projects));

        let empty = layout(&[]);
        assert_eq!(locate(0.0, &empty), None);
        assert_eq!(spy.observe(0.0, &empty), None);
        assert_eq!(spy.active(), Section::Projects);
    }

    #[test]
    fn test_observe_is_idempotent() {
        let page = full_page();
        let mut spy = ScrollSpy::new();
        assert_eq!(spy.observe(1300.0, &page), Some(Section::Experience));
        assert_eq!(spy.observe(1300.0, &page), None);
        assert_eq!(spy.active(), Section::Experience);

        // initial mount at the top reports nothing new
        let mut fresh = ScrollSpy::new();
        assert_eq!(fresh.observe(0.0, &page), None);
        assert_eq!(fresh.active(), Section::Home);
    }

    #[test]
    fn test_detached_spy_ignores_scrolls() {
        let page = full_page();
        let mut spy = ScrollSpy::new();
        spy.observe(700.0, &page);
        spy.detach();
        assert!(!spy.is_attached());

        assert_eq!(spy.observe(3000.0, &page), None);
        assert_eq!(spy.active(), Section::About);
    }

    #[test]
    fn test_closure_layout() {
        let layout = |s: Section| match s {
            Section::Contact => Some(Extent::new(0.0, 200.0)),
            _ => None,
        };
        assert_eq!(locate(50.0, &layout), Some(Section::Contact));
    }

    #[test]
    fn test_section_parsing() {
        assert_eq!("skills".parse::<Section>().unwrap(), Section::Skills);
        assert_eq!("#contact".parse::<Section>().unwrap(), Section::Contact);
        assert!(matches!(
            "footer".parse::<Section>(),
            Err(SiteError::UnknownSection(s)) if s == "footer"
        ));
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_section_serde_uses_element_ids() {
        let json = serde_json::to_string(&Section::Certifications).unwrap();
        assert_eq!(json, "\"certifications\"");
        let parsed: Section = serde_json::from_str("\"education\"").unwrap();
        assert_eq!(parsed, Section::Education);
    }
}
