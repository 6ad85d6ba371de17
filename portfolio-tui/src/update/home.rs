//! 首页更新逻辑

use crate::message::HomeMessage;
use crate::model::{App, CARD_PREFIX};

/// 处理首页消息
pub fn update(app: &mut App, msg: HomeMessage) {
    let count = app.session.card_sector_ids().len();

    match msg {
        HomeMessage::SelectPrevious => app.home.select_previous(),
        HomeMessage::SelectNext => app.home.select_next(count),
        HomeMessage::SelectFirst => app.home.select_first(),
        HomeMessage::SelectLast => app.home.select_last(count),
        HomeMessage::Open => open_selected(app),
    }
}

/// 打开选中的卡片（走卡片自身的 `#<id>` 链接）
pub(super) fn open_selected(app: &mut App) {
    let Some(id) = app
        .session
        .card_sector_ids()
        .get(app.home.selected)
        .map(|id| format!("{CARD_PREFIX}{id}"))
    else {
        return;
    };

    if let Some(href) = app.session.href(&id).map(str::to_string) {
        super::open_link(app, &href);
    }
}
