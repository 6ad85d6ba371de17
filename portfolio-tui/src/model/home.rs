//! 首页卡片选择状态

/// 首页状态
#[derive(Debug, Default)]
pub struct HomeState {
    /// 当前选中的卡片索引
    pub selected: usize,
}

impl HomeState {
    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self, count: usize) {
        if self.selected < count.saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, count: usize) {
        self.selected = count.saturating_sub(1);
    }

    /// 选择指定卡片（越界时忽略）
    pub fn select(&mut self, index: usize, count: usize) {
        if index < count {
            self.selected = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_clamped() {
        let mut home = HomeState::default();
        home.select_previous();
        assert_eq!(home.selected, 0);

        home.select_next(2);
        home.select_next(2);
        assert_eq!(home.selected, 1);

        home.select(5, 2);
        assert_eq!(home.selected, 1);

        home.select_first();
        home.select_last(4);
        assert_eq!(home.selected, 3);
    }
}
