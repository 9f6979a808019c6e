// src/components/card.rs

// serde を使う宣言！カード情報をスナップショットに書き出す時に使うよ！
use serde::{Deserialize, Serialize};
use std::fmt;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// 並び順は組札 (Foundation) のインデックスと同じにしてあるよ。
/// 0: Heart, 1: Diamond, 2: Club, 3: Spade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord でランクの大小比較 (`<`, `>`) もできるよ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // J (11 扱い)
    Queen, // Q (12 扱い)
    King,  // K (13 扱い)
}

/// カードの色（赤か黒か）だよ。場札のルール (色違い) で使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Suit {
    /// 表示用の記号。
    pub fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

impl Rank {
    /// 数値としてのランク (1-13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 1-13 の数値からランクを作る。範囲外なら `None`。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードの実体が入っているアリーナ (`World`) の中での番号だよ。
///
/// パイルはカードそのものじゃなくてこの ID の列を持つ。
/// 一度配られたら、ゲームが終わるまで同じカードは同じ ID のまま！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub usize);

/// カードそのものを表す構造体だよ！🃏
///
/// - `suit`: カードのスート
/// - `rank`: カードのランク
/// - `revealed`: 表向きかどうか (true なら表向き)。これだけはゲーム中に変わるよ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub revealed: bool,
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, revealed: false }
    }

    /// 表向きのカードを作る。テストや盤面の復元で便利！
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, revealed: true }
    }

    pub fn color(&self) -> CardColor {
        CardColor::from_suit(self.suit)
    }

    /// ランクの数値 (1-13)。
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_card() {
        let card = Card::new(Suit::Spade, Rank::Ace);

        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert!(!card.revealed, "新しいカードは裏向きのはず");
        assert!(card.is_ace());
        assert_eq!(card.to_string(), "A♠");
    }

    #[test]
    fn rank_comparison() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::from_value(11), Some(Rank::Jack));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn card_color() {
        assert_eq!(CardColor::from_suit(Suit::Heart), CardColor::Red);
        assert_eq!(CardColor::from_suit(Suit::Diamond), CardColor::Red);
        assert_eq!(CardColor::from_suit(Suit::Club), CardColor::Black);
        assert_eq!(CardColor::from_suit(Suit::Spade), CardColor::Black);
        assert_eq!(Card::face_up(Suit::Heart, Rank::Ten).to_string(), "10♥");
    }
}
