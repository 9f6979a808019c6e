//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::Card;

/// 指定されたカードが、場札の列 `target_pile` の一番上に置けるかチェックする。
///
/// - 空の列には King だけ置ける 👑
/// - それ以外は「色が違う」かつ「ランクがちょうど1つ下」のときだけ OK
pub fn can_move_to_tableau(card_to_move: &Card, target_pile: &[Card]) -> bool {
    match target_pile.last() {
        Some(target_top_card) => {
            let colors_different = card_to_move.color() != target_top_card.color();
            let rank_is_one_less = card_to_move.value() + 1 == target_top_card.value();

            trace!(
                "[Rules] Moving {} onto {}. Colors different: {}. Rank is one less: {}.",
                card_to_move,
                target_top_card,
                colors_different,
                rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
        None => {
            let is_king = card_to_move.is_king();
            trace!("[Rules] Moving {} onto empty tableau. Is King: {}.", card_to_move, is_king);
            is_king
        }
    }
}
