//! 侧边栏配置

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 手势阈值（像素）：水平滑动超过该距离才视为显示/隐藏意图
pub const GESTURE_THRESHOLD: f64 = 50.0;

/// 悬停 "peek" 按钮后延迟显示的时间
pub const PEEK_DELAY: Duration = Duration::from_millis(300);

/// 窗口尺寸变化的防抖时间
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// 侧边栏配置（构造时解析一次）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarConfig {
    /// 左侧检测区宽度（像素）
    pub detection_width: u32,
    /// 显示/隐藏动画时长
    #[serde(with = "crate::utils::millis")]
    pub animation_duration: Duration,
    /// 指针离开后的隐藏延迟
    #[serde(with = "crate::utils::millis")]
    pub hide_delay: Duration,
    pub enable_keyboard: bool,
    pub enable_touch: bool,
    /// 指针采样最小间隔
    #[serde(with = "crate::utils::millis")]
    pub debounce_interval: Duration,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            detection_width: 60,
            animation_duration: Duration::from_millis(350),
            hide_delay: Duration::from_millis(200),
            enable_keyboard: true,
            enable_touch: true,
            debounce_interval: Duration::from_millis(16),
        }
    }
}

impl SidebarConfig {
    /// 默认配置叠加调用方选项
    #[must_use]
    pub fn from_options(options: &SidebarOptions) -> Self {
        let mut config = Self::default();
        config.apply(options);
        config
    }

    /// 浅合并：只覆盖调用方给出的字段
    pub fn apply(&mut self, options: &SidebarOptions) {
        if let Some(v) = options.detection_width {
            self.detection_width = v;
        }
        if let Some(v) = options.animation_duration {
            self.animation_duration = v;
        }
        if let Some(v) = options.hide_delay {
            self.hide_delay = v;
        }
        if let Some(v) = options.enable_keyboard {
            self.enable_keyboard = v;
        }
        if let Some(v) = options.enable_touch {
            self.enable_touch = v;
        }
        if let Some(v) = options.debounce_interval {
            self.debounce_interval = v;
        }
    }

    /// 检测区宽度（浮点像素，用于与指针坐标比较）
    #[must_use]
    pub fn detection_width_px(&self) -> f64 {
        f64::from(self.detection_width)
    }
}

/// 调用方选项（全部可选）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_width: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::utils::millis::option"
    )]
    pub animation_duration: Option<Duration>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::utils::millis::option"
    )]
    pub hide_delay: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_keyboard: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_touch: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::utils::millis::option"
    )]
    pub debounce_interval: Option<Duration>,
}

/// 宿主能力（启动时查询一次后传入）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostCapabilities {
    /// 是否支持触摸输入
    pub touch: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SidebarConfig::default();
        assert_eq!(config.detection_width, 60);
        assert_eq!(config.animation_duration, Duration::from_millis(350));
        assert_eq!(config.hide_delay, Duration::from_millis(200));
        assert!(config.enable_keyboard);
        assert!(config.enable_touch);
        assert_eq!(config.debounce_interval, Duration::from_millis(16));
    }

    #[test]
    fn options_override_only_given_fields() {
        let options = SidebarOptions {
            detection_width: Some(80),
            enable_touch: Some(false),
            ..SidebarOptions::default()
        };
        let config = SidebarConfig::from_options(&options);
        assert_eq!(config.detection_width, 80);
        assert!(!config.enable_touch);
        assert_eq!(config.hide_delay, Duration::from_millis(200));
    }

    #[test]
    fn options_parse_from_camel_case_json() {
        let options: SidebarOptions =
            serde_json::from_str(r#"{"hideDelay": 500, "enableKeyboard": false}"#).unwrap();
        assert_eq!(options.hide_delay, Some(Duration::from_millis(500)));
        assert_eq!(options.enable_keyboard, Some(false));
        assert_eq!(options.detection_width, None);
    }

    #[test]
    fn negative_durations_are_rejected() {
        assert!(serde_json::from_str::<SidebarOptions>(r#"{"animationDuration": -5}"#).is_err());
    }
}
