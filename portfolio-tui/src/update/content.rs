//! 详情页更新逻辑

use crate::message::ContentMessage;
use crate::model::App;
use crate::view::pages::sector::line_count;

/// 处理详情页滚动
pub fn update(app: &mut App, msg: ContentMessage) {
    if !app.session.page.is_detail_page() || app.session.is_not_found() {
        return;
    }

    let max = u16::try_from(line_count(&app.session.document).saturating_sub(1))
        .unwrap_or(u16::MAX);

    app.scroll = match msg {
        ContentMessage::ScrollUp => app.scroll.saturating_sub(1),
        ContentMessage::ScrollDown => app.scroll.saturating_add(1).min(max),
        ContentMessage::ScrollTop => 0,
        ContentMessage::ScrollBottom => max,
    };
}
