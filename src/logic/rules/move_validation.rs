// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::logic::rules::{foundation, tableau};

/// `card` を `target` のパイル (中身は `target_pile`) に置けるか検証する。
///
/// `target_pile` は移動先パイルのスナップショット (下から順)。
/// 何枚かまとめて動かすときは、一番下のカードを渡してね。
pub fn is_move_valid(card: &Card, target_pile: &[Card], target: StackType) -> bool {
    match target {
        StackType::Tableau(_) => tableau::can_move_to_tableau(card, target_pile),
        StackType::Foundation(index) => foundation::can_move_to_foundation(card, target_pile, index),
        StackType::Stock | StackType::Waste => {
            // 山札と捨て札にはプレイヤーがカードを置けない
            debug!("[Rules] Moving to {:?} is not allowed.", target);
            false
        }
    }
}
