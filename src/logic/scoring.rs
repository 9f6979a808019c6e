// src/logic/scoring.rs
//! 点数表と点数計算だよ！💯
//!
//! アクションの点数は「実行する前の盤面」を見て計算する。
//! Undo すると盤面が実行前に戻るので、Undo の後に同じ計算をすれば同じ点数が出るよ。

use crate::components::card::CardId;
use crate::components::stack::StackType;
use crate::logic::actions::{Action, MoveCardsAction};
use crate::world::World;

/// プレイヤーの操作ごとの点数。
pub struct ActionScores;

impl ActionScores {
    pub const MOVE_TO_FOUNDATION: i32 = 15;
    pub const REVEAL_TABLEAU_CARD: i32 = 10;
    pub const MOVE_FROM_WASTE_TO_TABLEAU: i32 = 5;
    pub const MOVE_KING_TO_EMPTY_SPACE: i32 = 3;
    /// 場札どうしの移動は 0 点。行ったり来たりで点数を稼げないようにしてある。
    pub const MOVE_FROM_TABLEAU_TO_TABLEAU: i32 = 0;
    pub const MOVE_FROM_FOUNDATION_TO_TABLEAU: i32 = -20;
    pub const UNDO_PENALTY: i32 = -1;
    pub const HINT_PENALTY: i32 = -3;
    /// 終了時に手数にかける係数。
    pub const MOVE_PENALTY: f32 = -0.4;
}

/// ヒントの候補を比べるための点数。
pub struct HintScores;

impl HintScores {
    pub const MOVE_TO_FOUNDATION: i32 = 100;
    pub const REVEAL_TABLEAU_CARD: i32 = 75;
    pub const MOVE_KING_TO_EMPTY_SPACE: i32 = 60;
    pub const MOVE_FROM_WASTE_TO_TABLEAU: i32 = 50;
    /// 何もめくれない場札どうしの移動は、これに動かすカードのランクを足す。
    pub const BASE_TABLEAU_MOVE: i32 = 10;
    pub const DRAW_CARD: i32 = 1;
}

/// タイムボーナスが付き始める秒数。これ「より長く」かかったら付く。
pub const TIME_BONUS_THRESHOLD_SECS: u64 = 30;
pub const TIME_BONUS_NUMERATOR: u64 = 700_000;

/// アクションを実行したときの点数。実行「前」の盤面を渡してね。
pub fn calculate_action_score(action: &Action, world: &World) -> i32 {
    match action {
        Action::Draw(_) => 0,
        Action::MoveCards(mv) => calculate_move_score(mv, world),
    }
}

fn calculate_move_score(mv: &MoveCardsAction, world: &World) -> i32 {
    match (mv.source(), mv.dest()) {
        (_, StackType::Foundation(_)) => ActionScores::MOVE_TO_FOUNDATION,
        (StackType::Tableau(_), StackType::Tableau(_)) => {
            let mut score = ActionScores::MOVE_FROM_TABLEAU_TO_TABLEAU;
            if is_revealing_new_card(world, mv.source(), mv.cards()) {
                score += ActionScores::REVEAL_TABLEAU_CARD;
            }
            if is_moving_king_to_empty_space(world, mv.dest(), mv.cards()) {
                score += ActionScores::MOVE_KING_TO_EMPTY_SPACE;
            }
            score
        }
        (StackType::Foundation(_), StackType::Tableau(_)) => ActionScores::MOVE_FROM_FOUNDATION_TO_TABLEAU,
        (StackType::Waste, StackType::Tableau(_)) => ActionScores::MOVE_FROM_WASTE_TO_TABLEAU,
        _ => 0,
    }
}

/// 場札どうしの移動候補のヒント点数。
///
/// 裏向きのカードがめくれるなら +75、King を空いた列に動かすなら +60 (両方なら足し算)。
/// どっちでもなければ 10 + 動かすカードのランク。
pub fn calculate_tableau_hint_score(
    world: &World,
    source: StackType,
    cards: &[CardId],
    dest: StackType,
) -> i32 {
    let mut score = 0;
    if is_revealing_new_card(world, source, cards) {
        score += HintScores::REVEAL_TABLEAU_CARD;
    }
    if is_moving_king_to_empty_space(world, dest, cards) {
        score += HintScores::MOVE_KING_TO_EMPTY_SPACE;
    }
    if score == 0 {
        let rank = cards
            .first()
            .and_then(|&id| world.get_card(id))
            .map_or(0, |card| i32::from(card.value()));
        score = HintScores::BASE_TABLEAU_MOVE + rank;
    }
    score
}

/// `cards` を場札 `source` から取り除くと、その下の裏向きカードが出てくるか。
pub fn is_revealing_new_card(world: &World, source: StackType, cards: &[CardId]) -> bool {
    if !source.is_tableau() {
        return false;
    }
    let Ok(pile) = world.pile(source) else {
        return false;
    };
    let Some(below) = pile.len().checked_sub(cards.len() + 1) else {
        return false;
    };
    !world.card(pile[below]).revealed
}

/// 空いている場札の列に King を動かす移動か。
pub fn is_moving_king_to_empty_space(world: &World, dest: StackType, cards: &[CardId]) -> bool {
    if !dest.is_tableau() {
        return false;
    }
    let dest_is_empty = world.pile(dest).map_or(false, |pile| pile.is_empty());
    let lead_is_king = cards
        .first()
        .and_then(|&id| world.get_card(id))
        .map_or(false, |card| card.is_king());
    dest_is_empty && lead_is_king
}

/// 勝利時のタイムボーナス。30 秒以内に勝ったら 0。
pub fn time_bonus(elapsed_seconds: u64) -> i32 {
    if elapsed_seconds > TIME_BONUS_THRESHOLD_SECS {
        i32::try_from(TIME_BONUS_NUMERATOR / elapsed_seconds).unwrap_or(i32::MAX)
    } else {
        0
    }
}

/// 勝利時の手数ペナルティ。小数点以下は 0 の方向に切り捨て。
pub fn moves_penalty(moves: u32) -> i32 {
    (moves as f32 * ActionScores::MOVE_PENALTY) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use crate::logic::actions::DrawCardAction;

    fn world_with(tableau: Vec<Vec<Card>>, waste: Vec<Card>, foundations: Vec<Vec<Card>>) -> World {
        World::from_piles(Vec::new(), waste, foundations, tableau).unwrap()
    }

    fn empty_foundations() -> Vec<Vec<Card>> {
        vec![Vec::new(); 4]
    }

    fn move_action(world: &World, source: StackType, from: usize, dest: StackType) -> Action {
        let cards = world.pile(source).unwrap()[from..].to_vec();
        Action::MoveCards(MoveCardsAction::new(source, dest, cards))
    }

    #[test]
    fn tableau_to_tableau_is_worth_nothing_unless_it_reveals() {
        let mut tableau = vec![Vec::new(); 7];
        tableau[0] = vec![Card::face_up(Suit::Club, Rank::Nine), Card::face_up(Suit::Heart, Rank::Five)];
        tableau[1] = vec![Card::face_up(Suit::Spade, Rank::Six)];
        let world = world_with(tableau, Vec::new(), empty_foundations());

        let action = move_action(&world, StackType::Tableau(0), 1, StackType::Tableau(1));
        assert_eq!(calculate_action_score(&action, &world), 0, "行ったり来たりで稼げないはず");
    }

    #[test]
    fn king_to_empty_pile_that_reveals_scores_both() {
        let mut tableau = vec![Vec::new(); 7];
        tableau[0] = vec![Card::new(Suit::Club, Rank::Two), Card::face_up(Suit::Heart, Rank::King)];
        let world = world_with(tableau, Vec::new(), empty_foundations());

        let action = move_action(&world, StackType::Tableau(0), 1, StackType::Tableau(3));
        assert_eq!(calculate_action_score(&action, &world), 10 + 3);

        let cards = world.tableau_pile(0).unwrap()[1..].to_vec();
        assert_eq!(
            calculate_tableau_hint_score(&world, StackType::Tableau(0), &cards, StackType::Tableau(3)),
            75 + 60
        );
    }

    #[test]
    fn other_moves() {
        let mut tableau = vec![Vec::new(); 7];
        tableau[0] = vec![Card::face_up(Suit::Spade, Rank::Six)];
        let foundations = vec![vec![Card::face_up(Suit::Heart, Rank::Ace)], Vec::new(), Vec::new(), Vec::new()];
        let world = world_with(tableau, vec![Card::face_up(Suit::Heart, Rank::Five)], foundations);

        let waste_to_tableau = move_action(&world, StackType::Waste, 0, StackType::Tableau(0));
        assert_eq!(calculate_action_score(&waste_to_tableau, &world), 5);

        let waste_to_foundation = move_action(&world, StackType::Waste, 0, StackType::Foundation(0));
        assert_eq!(calculate_action_score(&waste_to_foundation, &world), 15);

        let foundation_to_tableau = move_action(&world, StackType::Foundation(0), 0, StackType::Tableau(1));
        assert_eq!(calculate_action_score(&foundation_to_tableau, &world), -20);

        let draw = Action::Draw(DrawCardAction::new(false));
        assert_eq!(calculate_action_score(&draw, &world), 0);
    }

    #[test]
    fn plain_tableau_hint_uses_the_rank() {
        let mut tableau = vec![Vec::new(); 7];
        tableau[0] = vec![Card::face_up(Suit::Club, Rank::Nine), Card::face_up(Suit::Heart, Rank::Five)];
        tableau[1] = vec![Card::face_up(Suit::Spade, Rank::Six)];
        let world = world_with(tableau, Vec::new(), empty_foundations());
        let cards = world.tableau_pile(0).unwrap()[1..].to_vec();
        assert_eq!(
            calculate_tableau_hint_score(&world, StackType::Tableau(0), &cards, StackType::Tableau(1)),
            15
        );
    }

    #[test]
    fn end_of_game_terms() {
        assert_eq!(time_bonus(30), 0);
        assert_eq!(time_bonus(31), 700_000 / 31);
        assert_eq!(time_bonus(100), 7000);
        assert_eq!(moves_penalty(0), 0);
        assert_eq!(moves_penalty(7), -2);
        assert_eq!(moves_penalty(100), -40);
    }
}
