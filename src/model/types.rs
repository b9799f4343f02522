//! Core type definitions for the application

/// Which part of the storefront currently has keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Search,
    Sections,
    Trending,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Sections,
            ActiveSection::Sections => ActiveSection::Trending,
            ActiveSection::Trending => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Trending,
            ActiveSection::Sections => ActiveSection::Search,
            ActiveSection::Trending => ActiveSection::Sections,
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_query: String,
    /// Index of the focused category section
    pub section_selected: usize,
    /// Index of the focused song within that section
    pub song_selected: usize,
    pub trending_selected: usize,
    pub show_help_popup: bool,
}
