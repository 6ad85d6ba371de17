//! 面板内可聚焦元素集合与焦点陷阱

use crate::traits::Document;

/// 面板内可聚焦元素（文档顺序，挂载时捕获一次）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusableSet {
    ids: Vec<String>,
}

impl FocusableSet {
    /// 捕获 `root` 下的全部可聚焦后代
    #[must_use]
    pub fn capture(doc: &dyn Document, root: &str) -> Self {
        Self {
            ids: doc.focusable_descendants(root),
        }
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.ids.last().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// 设置键盘可达性（`tabindex` 0 / -1）
    pub fn set_tabbable(&self, doc: &mut dyn Document, tabbable: bool) {
        let value = if tabbable { "0" } else { "-1" };
        for id in &self.ids {
            doc.set_attribute(id, "tabindex", value);
        }
    }

    /// 焦点陷阱：计算 Tab 需要改写到的目标
    ///
    /// 返回 `None` 表示交给宿主默认行为。焦点在边界上时回绕，
    /// 焦点不在集合内时拉回集合。
    #[must_use]
    pub fn wrap_target(&self, active: Option<&str>, backwards: bool) -> Option<&str> {
        let (first, last) = (self.first()?, self.last()?);
        match active {
            Some(id) if self.contains(id) => {
                if backwards && id == first {
                    Some(last)
                } else if !backwards && id == last {
                    Some(first)
                } else {
                    None
                }
            }
            _ => Some(if backwards { last } else { first }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::InMemoryDocument;

    fn doc() -> InMemoryDocument {
        InMemoryDocument::new()
            .with_element("sidebar")
            .with_child("sidebar", "a", true)
            .with_child("sidebar", "b", true)
            .with_child("sidebar", "c", true)
            .with_element("outside")
    }

    #[test]
    fn wraps_at_both_ends() {
        let set = FocusableSet::capture(&doc(), "sidebar");
        assert_eq!(set.wrap_target(Some("c"), false), Some("a"));
        assert_eq!(set.wrap_target(Some("a"), true), Some("c"));
        assert_eq!(set.wrap_target(Some("b"), false), None);
        assert_eq!(set.wrap_target(Some("b"), true), None);
    }

    #[test]
    fn focus_outside_is_pulled_back() {
        let set = FocusableSet::capture(&doc(), "sidebar");
        assert_eq!(set.wrap_target(Some("outside"), false), Some("a"));
        assert_eq!(set.wrap_target(None, true), Some("c"));
    }

    #[test]
    fn empty_set_never_traps() {
        let set = FocusableSet::default();
        assert_eq!(set.wrap_target(Some("a"), false), None);
    }

    #[test]
    fn tabbable_sets_tabindex() {
        let mut doc = doc();
        let set = FocusableSet::capture(&doc, "sidebar");
        set.set_tabbable(&mut doc, false);
        assert_eq!(doc.attribute("b", "tabindex"), Some("-1"));
        set.set_tabbable(&mut doc, true);
        assert_eq!(doc.attribute("b", "tabindex"), Some("0"));
    }
}
