// src/config/settings.rs
//! ゲームの設定値だよ！⚙️
//!
//! グローバル変数に置かずに、必要な場所 (Game、DrawCardAction、ヒント探索) へ
//! 値として渡していく。設定はゲーム中に変わらないので `Copy` にしてある。

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// ゲーム全体の設定。
///
/// JSON のキーは camelCase で、書かれていないキーはデフォルト値になるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// 山札が空になって捨て札を戻すとき、シャッフルするかどうか。
    pub reshuffle_on_empty: bool,
    /// ヒント機能を使えるかどうか。
    pub hints_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reshuffle_on_empty: false,
            hints_enabled: true,
        }
    }
}

impl GameConfig {
    /// JSON 文字列から設定を読み込む。
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    /// 設定を JSON 文字列にする。
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }
}
