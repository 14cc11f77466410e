//! 農曆名稱表與格式化功能

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 天干名表。
pub const STEMS: &[&str] = &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 地支名表。
pub const BRANCHES: &[&str] = &[
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// 生肖名表，依地支順序。
const ZODIAC: &[&str] = &[
    "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
];

/// 西洋星座名表，首項為魔羯（摩羯）。
const SIGNS: &[&str] = &[
    "魔羯", "水瓶", "雙魚", "白羊", "金牛", "雙子", "巨蟹", "獅子", "處女", "天秤", "天蠍", "射手",
];

/// 依六十循環序差取得干支名：天干取序差模十，地支取序差模十二。
///
/// # 用例
///
/// ```
/// use nongli::lunar::fmt;
///
/// assert_eq!("甲子", fmt::cycle(0));
/// assert_eq!("癸亥", fmt::cycle(59));
/// ```
pub fn cycle(offset: i64) -> String {
    STEMS[offset.rem_euclid(10) as usize].to_owned() + BRANCHES[offset.rem_euclid(12) as usize]
}

/// 取得公元年的干支名。
///
/// 依傳統推法：天干序為 `(year - 3) mod 10`，地支序為 `(year - 3) mod 12`，
/// 餘數為零時回繞至表末（即視為十、十二），再以此序取第 `序 - 1` 項。
///
/// # 用例
///
/// ```
/// use nongli::lunar::fmt;
///
/// assert_eq!("庚子", fmt::year_sexagenary(1900));
/// assert_eq!("辛亥", fmt::year_sexagenary(1911));
/// ```
pub fn year_sexagenary(year: i32) -> String {
    let mut stem = (year - 3).rem_euclid(10);
    if stem == 0 {
        stem = 10;
    }
    let mut branch = (year - 3).rem_euclid(12);
    if branch == 0 {
        branch = 12;
    }
    STEMS[(stem - 1) as usize].to_owned() + BRANCHES[(branch - 1) as usize]
}

/// 取得農曆年的生肖。
///
/// # 用例
///
/// ```
/// use nongli::lunar::fmt;
///
/// assert_eq!("龍", fmt::zodiac(2024));
/// ```
pub fn zodiac(year: i32) -> &'static str {
    ZODIAC[(year - 4).rem_euclid(12) as usize]
}

/// 取得公曆月日對應的西洋星座。交界日屬於後一星座。
///
/// # 用例
///
/// ```
/// use nongli::lunar::fmt;
///
/// assert_eq!("魔羯", fmt::zodiac_sign(1, 19));
/// assert_eq!("水瓶", fmt::zodiac_sign(1, 20));
/// ```
///
/// # Panics
///
/// 若月序不在 `1..=12` 間則 panic。
pub fn zodiac_sign(month: u32, day: u32) -> &'static str {
    const BOUNDARY: [u32; 12] = [20, 19, 21, 21, 21, 22, 23, 23, 23, 23, 22, 22];
    let m = match month {
        1..=12 => month as usize,
        _ => panic!("month {} not in 1..=12", month),
    };
    if day < BOUNDARY[m - 1] {
        SIGNS[m - 1]
    } else {
        SIGNS[m % 12]
    }
}

/// 取得月名（含「月」字）。十一、十二月稱「冬月」「臘月」，閏月冠「閏」字。
///
/// # 用例
///
/// ```
/// use nongli::lunar::{fmt, Month::*};
///
/// assert_eq!("冬月", fmt::month(Common(11)));
/// assert_eq!("閏六月", fmt::month(Leap(6)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: super::Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "閏";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "臘",
        _ => panic!("month {} not in 1..=12", num),
    };
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」，
/// 二十、三十日稱「二十」「三十」。
///
/// # 用例
///
/// ```
/// use nongli::lunar::fmt;
///
/// assert_eq!("初十", fmt::day(10));
/// assert_eq!("廿五", fmt::day(25));
/// assert_eq!("三十", fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

/// 節氣序號轉為名稱。`1..=24` 分別為小寒到冬至。
///
/// # 用例
///
/// ```
/// use nongli::lunar::fmt;
///
/// assert_eq!("小寒", fmt::solar_term(1));
/// assert_eq!("冬至", fmt::solar_term(24));
/// ```
pub fn solar_term(term: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "冬至", "小寒", "大寒", "立春", "雨水", "驚蟄", "春分", "清明", "穀雨", "立夏", "小滿",
        "芒種", "夏至", "小暑", "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬",
        "小雪", "大雪",
    ];
    NAMES[term.rem_euclid(24) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        for (std, offset) in [("甲子", 0), ("乙丑", 1), ("甲戌", 10), ("癸亥", 59), ("甲子", 60)] {
            assert_eq!(std, cycle(offset));
        }
    }

    #[test]
    fn test_year_sexagenary() {
        for (std, year) in [
            ("庚子", 1900),
            ("癸卯", 1903), // 天干餘數為零，回繞至「癸」
            ("辛亥", 1911), // 地支餘數為零，回繞至「亥」
            ("甲子", 1984),
            ("庚辰", 2000),
            ("甲辰", 2024),
        ] {
            assert_eq!(std, year_sexagenary(year));
        }
    }

    #[test]
    fn year_sexagenary_has_period_sixty() {
        for year in 1900..=2040 {
            assert_eq!(year_sexagenary(year), year_sexagenary(year + 60));
        }
    }

    #[test]
    fn test_zodiac() {
        for (std, year) in [("鼠", 1900), ("兔", 1999), ("龍", 2000), ("雞", 2017), ("豬", 2031)] {
            assert_eq!(std, zodiac(year));
        }
        for year in 1900..=2088 {
            assert_eq!(zodiac(year), zodiac(year + 12));
        }
    }

    #[test]
    fn test_zodiac_sign() {
        for (std, m, d) in [
            ("魔羯", 1, 1),
            ("魔羯", 1, 19),
            ("水瓶", 1, 20),
            ("水瓶", 2, 18),
            ("雙魚", 2, 19),
            ("白羊", 3, 21),
            ("獅子", 7, 23),
            ("射手", 12, 21),
            ("魔羯", 12, 22),
        ] {
            assert_eq!(std, zodiac_sign(m, d), "{m}-{d}");
        }
    }

    #[test]
    fn test_month() {
        use super::super::Month::*;
        for (std, m) in [
            ("正月", Common(1)),
            ("二月", Common(2)),
            ("十月", Common(10)),
            ("冬月", Common(11)),
            ("臘月", Common(12)),
            ("閏正月", Leap(1)),
            ("閏六月", Leap(6)),
        ] {
            assert_eq!(std, month(m));
        }
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("十九", 19),
            ("二十", 20),
            ("廿一", 21),
            ("廿九", 29),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d));
        }
    }

    #[test]
    fn test_solar_term() {
        for (std, term) in [
            ("小寒", 1),
            ("大寒", 2),
            ("立春", 3),
            ("春分", 6),
            ("清明", 7),
            ("夏至", 12),
            ("大雪", 23),
            ("冬至", 24),
        ] {
            assert_eq!(std, solar_term(term));
        }
    }
}
