// src/logic/hints.rs
//! ヒント (次の一手のおすすめ) を探すよ！💡
//!
//! 今の盤面で打てる手を全部並べて点数を付けて、一番いいものを選ぶだけの一手読み。
//! 盤面は読むだけで、絶対に書き換えない。

use log::debug;

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::config::layout::{FOUNDATION_PILE_COUNT, TABLEAU_PILE_COUNT};
use crate::config::GameConfig;
use crate::logic::actions::{Action, DrawCardAction, MoveCardsAction};
use crate::logic::rules;
use crate::logic::scoring::{self, HintScores};
use crate::world::World;

/// 打てる手を全部、ヒント点数付きで返す。
///
/// 並び順: 場札→場札、捨て札 (→組札、なければ→場札)、場札→組札、山札をめくる。
pub fn enumerate_moves(world: &World, config: &GameConfig) -> Vec<(Action, i32)> {
    let mut moves = Vec::new();
    collect_tableau_to_tableau(world, &mut moves);
    collect_waste_moves(world, &mut moves);
    collect_tableau_to_foundation(world, &mut moves);

    if rules::can_draw(world.stock().is_empty(), world.waste().is_empty()) {
        let draw = DrawCardAction::new(config.reshuffle_on_empty);
        moves.push((Action::Draw(draw), HintScores::DRAW_CARD));
    }
    moves
}

/// 一番点数の高い手を返す。同点なら先に見つかった方。打つ手がなければ `None`。
pub fn find_hint(world: &World, config: &GameConfig) -> Option<Action> {
    let best = enumerate_moves(world, config)
        .into_iter()
        .fold(None, |best: Option<(Action, i32)>, (action, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((action, score)),
        });

    match best {
        Some((action, score)) => {
            debug!("[Hint] Best move: {} (score {})", action.describe(world), score);
            Some(action)
        }
        None => {
            debug!("[Hint] No moves left");
            None
        }
    }
}

fn tableau_snapshot(world: &World, pile: usize) -> Vec<Card> {
    world
        .tableau_pile(pile)
        .map(|ids| world.cards_of(ids))
        .unwrap_or_default()
}

fn collect_tableau_to_tableau(world: &World, moves: &mut Vec<(Action, i32)>) {
    let snapshots: Vec<Vec<Card>> = (0..TABLEAU_PILE_COUNT).map(|i| tableau_snapshot(world, i)).collect();

    for (src, pile) in snapshots.iter().enumerate() {
        let Ok(ids) = world.tableau_pile(src) else {
            continue;
        };
        for (card_idx, card) in pile.iter().enumerate() {
            if !card.revealed {
                continue;
            }
            // すぐ下の表向きカードにちゃんと乗ってるなら、同じ形の場所に動かすだけになる
            let sits_on_its_parent = card_idx > 0
                && pile[card_idx - 1].revealed
                && rules::can_move_to_tableau(card, &pile[..card_idx]);

            for (dst, dest_pile) in snapshots.iter().enumerate() {
                if dst == src || sits_on_its_parent {
                    continue;
                }
                let dest = StackType::Tableau(dst as u8);
                if !rules::is_move_valid(card, dest_pile, dest) {
                    continue;
                }
                // 一番下にいる King を空いてる列に動かしても意味がない
                if card_idx == 0 && dest_pile.is_empty() && card.is_king() {
                    continue;
                }

                let source = StackType::Tableau(src as u8);
                let cards = ids[card_idx..].to_vec();
                let score = scoring::calculate_tableau_hint_score(world, source, &cards, dest);
                moves.push((Action::MoveCards(MoveCardsAction::new(source, dest, cards)), score));
            }
        }
    }
}

fn collect_waste_moves(world: &World, moves: &mut Vec<(Action, i32)>) {
    let Some(top) = world.top_waste() else {
        return;
    };
    let card = world.card(top);

    for i in 0..FOUNDATION_PILE_COUNT as u8 {
        let dest = StackType::Foundation(i);
        let Ok(pile) = world.pile_cards(dest) else {
            continue;
        };
        if rules::is_move_valid(card, &pile, dest) {
            let action = MoveCardsAction::new(StackType::Waste, dest, vec![top]);
            moves.push((Action::MoveCards(action), HintScores::MOVE_TO_FOUNDATION));
            return;
        }
    }

    for i in 0..TABLEAU_PILE_COUNT as u8 {
        let dest = StackType::Tableau(i);
        let pile = tableau_snapshot(world, usize::from(i));
        if rules::is_move_valid(card, &pile, dest) {
            let action = MoveCardsAction::new(StackType::Waste, dest, vec![top]);
            moves.push((Action::MoveCards(action), HintScores::MOVE_FROM_WASTE_TO_TABLEAU));
            return;
        }
    }
}

fn collect_tableau_to_foundation(world: &World, moves: &mut Vec<(Action, i32)>) {
    for src in 0..TABLEAU_PILE_COUNT as u8 {
        let source = StackType::Tableau(src);
        let Ok(Some(top)) = world.top_card(source) else {
            continue;
        };
        let card = world.card(top);
        if !card.revealed {
            continue;
        }
        let dest = StackType::Foundation(rules::foundation_index_for(card.suit));
        let Ok(pile) = world.pile_cards(dest) else {
            continue;
        };
        if rules::is_move_valid(card, &pile, dest) {
            let action = MoveCardsAction::new(source, dest, vec![top]);
            moves.push((Action::MoveCards(action), HintScores::MOVE_TO_FOUNDATION));
        }
    }
}
