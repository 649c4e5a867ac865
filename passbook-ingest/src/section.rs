//! Locate the transaction table inside the full document text.
//!
//! The table opens at the column-header banner and closes at a footer banner.
//! A statement spanning several pages repeats the banner on each page, so the
//! section reopens after every page footer.

use crate::profile::StatementProfile;

/// Why a raw line was kept out of the transaction section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipReason {
    HeaderBanner,
    FooterBanner,
    PageBreak,
    OutsideSection,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLine<'a> {
    /// Trimmed, non-empty line inside the section.
    Body(&'a str),
    Skipped(SkipReason),
}

/// Line-at-a-time section filter.
#[derive(Debug)]
pub struct SectionLocator<'p> {
    profile: &'p StatementProfile,
    in_section: bool,
}

impl<'p> SectionLocator<'p> {
    pub fn new(profile: &'p StatementProfile) -> Self {
        Self {
            profile,
            in_section: false,
        }
    }

    pub fn in_section(&self) -> bool {
        self.in_section
    }

    pub fn feed<'a>(&mut self, raw: &'a str) -> SectionLine<'a> {
        let line = raw.trim();

        if self.profile.is_header_banner(line) {
            self.in_section = true;
            return SectionLine::Skipped(SkipReason::HeaderBanner);
        }
        if self.profile.is_page_break(line) {
            return SectionLine::Skipped(SkipReason::PageBreak);
        }
        if !self.in_section {
            return SectionLine::Skipped(SkipReason::OutsideSection);
        }
        if line.is_empty() {
            return SectionLine::Skipped(SkipReason::Empty);
        }
        if self.profile.is_footer_banner(line) {
            self.in_section = false;
            return SectionLine::Skipped(SkipReason::FooterBanner);
        }

        SectionLine::Body(line)
    }
}

/// Lines of `text` that fall inside the transaction section, trimmed.
pub fn section_lines<'a>(
    text: &'a str,
    profile: &'a StatementProfile,
) -> impl Iterator<Item = &'a str> + 'a {
    let mut locator = SectionLocator::new(profile);
    text.lines().filter_map(move |raw| match locator.feed(raw) {
        SectionLine::Body(line) => Some(line),
        SectionLine::Skipped(_) => None,
    })
}
