// src/systems/deal_system.rs

use log::{info, warn};

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::config::layout::TABLEAU_PILE_COUNT;
use crate::world::World;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// シャッフル済みのデッキを配って、新しい World を作るよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. デッキのカードを全部 World のアリーナに入れて、その順番で山札に積む。
    /// 2. 場札の列 i に (i + 1) 枚、山札の先頭から列ごとに順番に配る。
    ///    - 1列目は1枚、2列目は2枚 ... 7列目は7枚。一番上だけ表向き。
    /// 3. 残り (標準デッキなら 24 枚) はそのまま裏向きで山札に残る。
    pub fn execute(&self, deck: Vec<Card>) -> World {
        let mut world = World::from_deck(deck);

        for tableau_index in 0..TABLEAU_PILE_COUNT {
            let count = tableau_index + 1;
            let available = world.stock().len();
            if available < count {
                warn!("[Deal] Not enough cards for tableau {} ({} left)", tableau_index, available);
                break;
            }

            let dealt: Vec<_> = world.stock_mut().drain(..count).collect();
            for &id in &dealt {
                world.set_revealed(id, false);
            }
            if let Some(&top) = dealt.last() {
                // その列の一番上のカードだけ表向きにするよ！👀
                world.set_revealed(top, true);
            }
            if let Ok(pile) = world.pile_mut(StackType::Tableau(tableau_index as u8)) {
                pile.extend(dealt);
            }
        }

        let stock: Vec<_> = world.stock().to_vec();
        for id in stock {
            world.set_revealed(id, false);
        }

        info!("[Deal] Dealt {} cards, {} left in stock", world.card_count() - world.stock().len(), world.stock().len());
        world
    }
}
