// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! どのカードがどの組札に自動で移動できるか、を判断するんだ。

use log::debug;

use crate::components::card::CardId;
use crate::components::stack::StackType;
use crate::config::layout::FOUNDATION_PILE_COUNT;
use crate::logic::rules;
use crate::world::World;

/// 特定のカードが、今の盤面で移動できる組札 (Foundation) を探す関数だよ。
///
/// 見つかったら `StackType::Foundation(index)` を、なければ `None` を返す。
pub fn find_automatic_foundation_move(world: &World, card_id: CardId) -> Option<StackType> {
    let card = world.get_card(card_id)?;
    debug!("[AutoMove] Finding automatic foundation move for {}...", card);

    for i in 0..FOUNDATION_PILE_COUNT as u8 {
        let target = StackType::Foundation(i);
        let Ok(pile) = world.pile_cards(target) else {
            continue;
        };
        if rules::is_move_valid(card, &pile, target) {
            debug!("[AutoMove]   Found valid foundation [{}] for {}.", i, card);
            return Some(target);
        }
    }

    debug!("[AutoMove]   No suitable foundation found for {}.", card);
    None
}
