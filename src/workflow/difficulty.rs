use serde::{Deserialize, Serialize};

/// 难度枚举：控制一个单词隐藏多少个字母
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 简单：只藏 1 个
    Simple,
    /// 一般：约 30%
    General,
    /// 中等：约 50%
    Medium,
    /// 困难：约 80%，且最多只留 1 个不藏
    Hard,
}

impl Difficulty {
    /// 根据单词长度计算需要隐藏的字母数
    ///
    /// 比例部分向下取整；max 下限保证短词也有挑战；
    /// 结果始终夹在 [1, length] 内（length 为 0 时返回 0）
    pub fn num_hide(self, length: usize) -> usize {
        if length == 0 {
            return 0;
        }
        let raw = match self {
            Difficulty::Simple => 1,
            Difficulty::General => usize::max(2, length * 3 / 10),
            Difficulty::Medium => usize::max(3, length / 2),
            Difficulty::Hard => usize::max(length - 1, length * 4 / 5),
        };
        raw.clamp(1, length)
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Simple => "simple",
            Difficulty::General => "general",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// 尝试从字符串解析难度（精确匹配）
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "simple" => Some(Difficulty::Simple),
            "general" => Some(Difficulty::General),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Difficulty; 4] = [
        Difficulty::Simple,
        Difficulty::General,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    #[test]
    fn test_num_hide_within_bounds() {
        // 任意难度和长度下，隐藏数都落在 [1, length] 内
        for difficulty in ALL {
            for length in 1..=30 {
                let n = difficulty.num_hide(length);
                assert!(n >= 1, "{} / 长度 {} 隐藏数为 {}", difficulty, length, n);
                assert!(n <= length, "{} / 长度 {} 隐藏数为 {}", difficulty, length, n);
            }
        }
    }

    #[test]
    fn test_hard_leaves_at_most_one_revealed() {
        for length in 2..=30 {
            assert!(Difficulty::Hard.num_hide(length) >= length - 1);
        }
    }

    #[test]
    fn test_hard_single_letter_word_still_hides() {
        // 单字母的困难词必须隐藏那 1 个字母，而不是 0 个
        assert_eq!(Difficulty::Hard.num_hide(1), 1);
    }

    #[test]
    fn test_num_hide_known_values() {
        assert_eq!(Difficulty::Simple.num_hide(10), 1);
        assert_eq!(Difficulty::General.num_hide(10), 3);
        assert_eq!(Difficulty::General.num_hide(4), 2);
        assert_eq!(Difficulty::Medium.num_hide(10), 5);
        assert_eq!(Difficulty::Medium.num_hide(4), 3);
        assert_eq!(Difficulty::Hard.num_hide(10), 9);
        // 短词被 max 下限顶到全隐藏
        assert_eq!(Difficulty::Medium.num_hide(2), 2);
        assert_eq!(Difficulty::General.num_hide(1), 1);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Difficulty::from_str("simple"), Some(Difficulty::Simple));
        assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("超难"), None);
    }
}
