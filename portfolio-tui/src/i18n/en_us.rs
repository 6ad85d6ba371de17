//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, HelpTexts, HintTexts, HomeTexts, KeyNames, SectorTexts, SidebarTexts,
    StatusBarTexts, TransitionTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        quit: "Quit",
        back: "Back",
        open: "Open",
        menu: "Menu",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            arrows_vertical: "↑↓",
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            alt_s: "Alt+s",
            q: "q",
            question: "?",
        },
        select: "Select",
        scroll: "Scroll",
        toggle_sidebar: "Sidebar",
        close_sidebar: "Close",
        cycle_links: "Links",
        help: "Help",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        title: "Selected Work",
        welcome: "Welcome",
        subtitle: "Move the mouse to the left edge or press Alt+s to open navigation",
        empty: "No sectors in the catalog",
    },

    sector: SectorTexts {
        overview: "Overview",
        duration: "Duration",
        team: "Team",
        technologies: "Technologies",
        links: "Links",
        challenges: "Challenges",
        solutions: "Solutions",
        results: "Results",
        gallery: "Gallery",
        mockup: "Preview",
    },

    sidebar: SidebarTexts {
        title: "Navigate",
        home: "Home",
    },

    transition: TransitionTexts {
        loading: "Loading…",
    },

    status_bar: StatusBarTexts {
        navigation_failed: "Navigation failed",
        invalid_link: "Invalid link",
        config_warning: "Config file ignored",
    },

    help: HelpTexts {
        title: "Help",
        lines: &[
            ("↑↓ / jk", "Select / scroll"),
            ("Enter", "Open"),
            ("Esc / Backspace", "Back"),
            ("Alt+←", "History back"),
            ("Alt+s", "Toggle sidebar"),
            ("Tab", "Cycle sidebar links"),
            ("?", "Toggle help"),
            ("q / Ctrl+C", "Quit"),
        ],
    },
};
