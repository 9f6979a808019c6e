// src/config/layout.rs
//! 盤面の形に関する定数を定義するよ！
//! 場札の列数や組札の数、1スートあたりの枚数など。

pub const TABLEAU_PILE_COUNT: usize = 7; // 場札 (Tableau) の列数
pub const FOUNDATION_PILE_COUNT: usize = 4; // 組札 (Foundation) の数 (スートごとに1つ)
pub const CARDS_PER_SUIT: usize = 13; // A から K まで
pub const DECK_SIZE: usize = FOUNDATION_PILE_COUNT * CARDS_PER_SUIT; // 52枚

// 初期配置で場札に配られる枚数の合計 (1 + 2 + ... + 7 = 28)。残りの 24 枚が山札になる。
pub const DEALT_TABLEAU_CARDS: usize = TABLEAU_PILE_COUNT * (TABLEAU_PILE_COUNT + 1) / 2;
pub const INITIAL_STOCK_SIZE: usize = DECK_SIZE - DEALT_TABLEAU_CARDS;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_shape_adds_up() {
        assert_eq!(DECK_SIZE, 52);
        assert_eq!(DEALT_TABLEAU_CARDS, 28);
        assert_eq!(INITIAL_STOCK_SIZE, 24);
    }
}
