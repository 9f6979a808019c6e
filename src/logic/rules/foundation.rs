//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use super::common::get_foundation_suit;
use crate::components::card::Card;

/// 指定されたカードが、組札 `target_foundation_index` の一番上に置けるかチェックする。
///
/// 組札ごとにスートが決まってるので、違うスートは問答無用で NG！
/// 空ならエースだけ、そうじゃなければ同じスートでランクが1つ上のカードだけ置ける。
pub fn can_move_to_foundation(
    card_to_move: &Card,
    target_pile: &[Card],
    target_foundation_index: u8,
) -> bool {
    let target_suit = match get_foundation_suit(target_foundation_index) {
        Some(suit) => suit,
        None => {
            trace!("[Rules] Invalid foundation index: {}", target_foundation_index);
            return false;
        }
    };
    if card_to_move.suit != target_suit {
        trace!(
            "[Rules] {} does not belong on Foundation({}) ({:?})",
            card_to_move,
            target_foundation_index,
            target_suit
        );
        return false;
    }

    let result = match (target_pile.first(), target_pile.last()) {
        (Some(bottom), Some(top)) => {
            card_to_move.suit == bottom.suit && card_to_move.value() == top.value() + 1
        }
        _ => card_to_move.is_ace(),
    };
    trace!(
        "[Rules] Final result for {} to Foundation({}): {}",
        card_to_move,
        target_foundation_index,
        result
    );
    result
}
