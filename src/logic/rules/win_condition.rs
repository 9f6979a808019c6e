//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::config::layout::DECK_SIZE;

/// ゲームのクリア条件（全てのカードが組札にあるか）を判定する。
pub fn check_win_condition(foundation_card_count: usize) -> bool {
    foundation_card_count == DECK_SIZE
}
