//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `home.*`, `sector.*`
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 作品数据本身（标题、描述等）来自目录，不参与翻译。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 首页文本
    pub home: HomeTexts,
    /// 作品详情页文本
    pub sector: SectorTexts,
    /// 侧边栏文本
    pub sidebar: SidebarTexts,
    /// 页面切换遮罩文本
    pub transition: TransitionTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub quit: &'static str,
    pub back: &'static str,
    pub open: &'static str,
    pub menu: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示
pub struct HintTexts {
    pub keys: KeyNames,
    pub select: &'static str,
    pub scroll: &'static str,
    pub toggle_sidebar: &'static str,
    pub close_sidebar: &'static str,
    pub cycle_links: &'static str,
    pub help: &'static str,
}

/// 按键名称
pub struct KeyNames {
    pub arrows_vertical: &'static str,
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub alt_s: &'static str,
    pub q: &'static str,
    pub question: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 首页文本
pub struct HomeTexts {
    pub title: &'static str,
    pub welcome: &'static str,
    pub subtitle: &'static str,
    pub empty: &'static str,
}

/// 作品详情页文本
pub struct SectorTexts {
    pub overview: &'static str,
    pub duration: &'static str,
    pub team: &'static str,
    pub technologies: &'static str,
    pub links: &'static str,
    pub challenges: &'static str,
    pub solutions: &'static str,
    pub results: &'static str,
    pub gallery: &'static str,
    pub mockup: &'static str,
}

/// 侧边栏文本
pub struct SidebarTexts {
    pub title: &'static str,
    pub home: &'static str,
}

/// 页面切换遮罩文本
pub struct TransitionTexts {
    pub loading: &'static str,
}

/// 状态栏文本
pub struct StatusBarTexts {
    pub navigation_failed: &'static str,
    pub invalid_link: &'static str,
    pub config_warning: &'static str,
}

/// 帮助文本
pub struct HelpTexts {
    pub title: &'static str,
    pub lines: &'static [(&'static str, &'static str)],
}
