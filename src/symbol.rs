//! 数字符号表模块
//!
//! 汉字数字字符 → 数值 的静态映射，以及数位/单位的拼音音节表
//!
//! 支持的字符集：〇零一二两三四五六七八九十拾廿卅百千萬万億亿兆

/// 符号类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// 数位字符（0-9，含"两"）
    Digit,
    /// 节内单位（十、拾、廿、卅、百、千），只在当前节内起乘法作用
    SmallUnit,
    /// 大单位（萬、億、兆），开启一个新的加法节
    LargeUnit,
}

/// 查询汉字数字字符的数值
///
/// # 返回
/// - `Some(value)`: 字符在符号表中
/// - `None`: 未知字符
pub fn symbol_value(ch: char) -> Option<u64> {
    let value = match ch {
        '〇' | '零' => 0,
        '一' => 1,
        '二' | '两' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        '十' | '拾' => 10,
        '廿' => 20,
        '卅' => 30,
        '百' => 100,
        '千' => 1_000,
        '萬' | '万' => 10_000,
        '億' | '亿' => 100_000_000,
        '兆' => 1_000_000_000_000,
        _ => return None,
    };
    Some(value)
}

/// 按数值划分符号类别
pub fn classify(value: u64) -> SymbolClass {
    if value < 10 {
        SymbolClass::Digit
    } else if value < 10_000 {
        SymbolClass::SmallUnit
    } else {
        SymbolClass::LargeUnit
    }
}

/// 检查字符是否为单位符号（十、百、千、萬、億、兆 等）
pub fn is_unit_symbol(ch: char) -> bool {
    matches!(symbol_value(ch), Some(value) if value >= 10)
}

// 零与"两"的音节
pub const LING: &str = "líng";
pub const LIANG: &str = "liǎng";

// 单位音节
pub const SHI: &str = "shí";
pub const BAI: &str = "bǎi";
pub const QIAN: &str = "qiān";
pub const WAN: &str = "wàn";
pub const YI: &str = "yì";

// 负号音节
pub const FU: &str = "fù";

/// 数位 0-9 的拼音音节（调用方只传入 0-9）
pub fn digit_pinyin(digit: u64) -> &'static str {
    match digit {
        1 => "yī",
        2 => "èr",
        3 => "sān",
        4 => "sì",
        5 => "wǔ",
        6 => "liù",
        7 => "qī",
        8 => "bā",
        9 => "jiǔ",
        _ => LING,
    }
}

/// 检查音节是否以带调元音开头
///
/// GB/T 16159-2012 隔音规则：以元音开头的音节紧跟在其他音节之后时，
/// 需用隔音符号 ' 分隔（如 shí'èr，而不是 shíèr）
pub fn starts_with_vowel(syllable: &str) -> bool {
    matches!(
        syllable.chars().next(),
        Some(
            'ā' | 'á' | 'ǎ' | 'à'
                | 'ē' | 'é' | 'ě' | 'è'
                | 'ī' | 'í' | 'ǐ' | 'ì'
                | 'ō' | 'ó' | 'ǒ' | 'ò'
                | 'ū' | 'ú' | 'ǔ' | 'ù'
                | 'ǖ' | 'ǘ' | 'ǚ' | 'ǜ'
        )
    )
}
