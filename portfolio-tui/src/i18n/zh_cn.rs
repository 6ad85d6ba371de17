//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, HelpTexts, HintTexts, HomeTexts, KeyNames, SectorTexts, SidebarTexts,
    StatusBarTexts, TransitionTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        quit: "退出",
        back: "返回",
        open: "打开",
        menu: "菜单",
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
        select: "选择",
        scroll: "滚动",
        toggle_sidebar: "侧边栏",
        close_sidebar: "关闭",
        cycle_links: "切换链接",
        help: "帮助",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        title: "精选作品",
        welcome: "欢迎",
        subtitle: "将鼠标移到左侧边缘或按 Alt+s 打开导航",
        empty: "目录中没有作品",
    },

    sector: SectorTexts {
        overview: "概览",
        duration: "周期",
        team: "团队",
        technologies: "技术栈",
        links: "链接",
        challenges: "挑战",
        solutions: "方案",
        results: "成果",
        gallery: "图库",
        mockup: "预览",
    },

    sidebar: SidebarTexts {
        title: "导航",
        home: "首页",
    },

    transition: TransitionTexts {
        loading: "加载中…",
    },

    status_bar: StatusBarTexts {
        navigation_failed: "跳转失败",
        invalid_link: "无效链接",
        config_warning: "配置文件已忽略",
    },

    help: HelpTexts {
        title: "帮助",
        lines: &[
            ("↑↓ / jk", "选择 / 滚动"),
            ("Enter", "打开"),
            ("Esc / Backspace", "返回"),
            ("Alt+←", "历史后退"),
            ("Alt+s", "显示/隐藏侧边栏"),
            ("Tab", "切换侧边栏链接"),
            ("?", "显示/隐藏帮助"),
            ("q / Ctrl+C", "退出"),
        ],
    },
};
