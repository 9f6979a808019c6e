// src/components/stack.rs

use serde::{Deserialize, Serialize};

/// カードが存在する場所の種類を示す Enum だよ。
/// 山札にあるのか、場札の何列目にあるのか、などを区別するよ。
/// 移動元・移動先・選択元の指定は全部これでやる！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。スートごとに4つ。
    /// 0: Heart, 1: Diamond, 2: Club, 3: Spade
    Foundation(u8),
    /// 山札 (Stock)。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
}

impl StackType {
    /// エラーメッセージ用のエリア名。
    pub fn area_name(self) -> &'static str {
        match self {
            StackType::Tableau(_) => "tableau",
            StackType::Foundation(_) => "foundation",
            StackType::Stock => "stock",
            StackType::Waste => "waste",
        }
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }
}
