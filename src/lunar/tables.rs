//! 農曆年表與節氣表（1900–2100）
//!
//! 年表與節氣表均以緊湊整數形式編碼，首次使用時一次性解碼為結構化曆表，
//! 此後全程只讀。曆表數據同 [jjonline/calendar.js] 所用年表。
//!
//! [jjonline/calendar.js]: https://github.com/jjonline/calendar.js

use std::sync::LazyLock;

use tracing::debug;

/// 曆表覆蓋的首個公元年。
pub const FIRST_YEAR: i32 = 1900;
/// 曆表覆蓋的最末公元年。
pub const LAST_YEAR: i32 = 2100;

/// 各年農曆信息的緊湊編碼，按公元年序排列。
///
/// 第 `16-m` 位（`m` 取 1..=12）標記 `m` 月是否為大月，低四位為閏月月序
/// （0 表示無閏月），第 16 位標記閏月是否為大月。
const YEAR_INFO_PACKED: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520, // 2100
];

/// 節氣日期編碼單元。每個值的六位十進制數字串按 `[0], [1..3], [3], [4..6]`
/// 切分，依次給出連續四個節氣的交節日（某月第幾日）。
const TERM_GROUPS: [u32; 44] = [
    0x97783, 0x97bd0, 0x97c36, 0xb0b6f, 0xc9274, 0xc91aa, 0x97b6b, 0x97bd1,
    0x9801e, 0xc9210, 0xc965c, 0xc920e, 0x97bcf, 0x97c35, 0x98082, 0xc95f8,
    0xc920f, 0xb06bd, 0xb0722, 0xe1cfc, 0xb0270, 0x9801d, 0xc8dc2, 0x7f595,
    0x7f530, 0xb0b0b, 0x7f0e3, 0x7f148, 0x7f531, 0x7f0e4, 0xb0723, 0xb0b70,
    0xb0721, 0x7f0e2, 0xb0787, 0x7f149, 0x7f07e, 0xb02d5, 0x7ec96, 0x66aa8,
    0x98083, 0x6665b, 0x665f6, 0x66a44,
];

/// 一年的節氣編碼由六個單元組成（每單元四個節氣）；全表僅出現 68 種組合，
/// 此處列出各組合的單元序號。
const TERM_PATTERNS: [[u8; 6]; 68] = [
    [0, 1, 2, 3, 4, 5], [6, 7, 8, 9, 10, 11], [12, 13, 14, 15, 10, 16], [1, 17, 18, 10, 19, 16],
    [20, 1, 2, 3, 4, 5], [12, 13, 8, 15, 10, 16], [0, 7, 8, 9, 10, 11], [6, 7, 8, 15, 10, 16],
    [1, 21, 14, 15, 19, 16], [1, 1, 2, 3, 9, 22], [0, 7, 2, 9, 4, 5], [6, 7, 8, 15, 10, 11],
    [0, 1, 2, 9, 4, 5], [12, 13, 14, 15, 19, 16], [1, 1, 13, 3, 16, 18], [1, 1, 23, 3, 16, 18],
    [0, 1, 2, 3, 9, 22], [0, 7, 8, 9, 4, 11], [1, 24, 23, 25, 16, 18], [26, 1, 2, 3, 9, 22],
    [0, 1, 2, 9, 4, 11], [1, 27, 23, 25, 16, 18], [12, 27, 23, 25, 3, 18], [26, 1, 13, 3, 16, 18],
    [12, 27, 28, 25, 3, 18], [26, 1, 23, 3, 16, 18], [6, 7, 8, 9, 4, 11], [12, 29, 28, 25, 3, 18],
    [26, 1, 23, 25, 16, 18], [0, 1, 2, 3, 9, 5], [6, 7, 2, 9, 4, 11], [6, 29, 28, 30, 3, 18],
    [26, 24, 23, 25, 16, 18], [0, 1, 2, 31, 4, 5], [6, 29, 28, 30, 3, 32], [26, 27, 23, 25, 3, 18],
    [26, 1, 13, 3, 9, 22], [33, 27, 23, 25, 3, 18], [33, 27, 28, 25, 3, 18], [6, 29, 28, 30, 34, 32],
    [33, 29, 28, 25, 3, 18], [6, 29, 35, 30, 34, 32], [33, 29, 28, 30, 3, 18], [0, 26, 35, 30, 34, 32],
    [36, 29, 28, 30, 3, 18], [0, 26, 35, 14, 34, 32], [36, 29, 28, 30, 3, 32], [0, 26, 35, 14, 34, 17],
    [36, 29, 35, 30, 34, 32], [0, 26, 35, 14, 30, 17], [36, 26, 35, 30, 34, 32], [0, 26, 27, 14, 30, 37],
    [38, 26, 35, 14, 34, 32], [26, 26, 27, 14, 30, 37], [26, 27, 28, 25, 3, 18], [38, 26, 35, 14, 34, 17],
    [26, 26, 27, 14, 18, 13], [26, 26, 39, 8, 18, 13], [38, 26, 35, 14, 30, 17], [36, 26, 35, 40, 34, 32],
    [38, 26, 27, 14, 30, 37], [36, 26, 35, 14, 34, 32], [26, 41, 39, 8, 14, 13], [42, 26, 27, 14, 30, 37],
    [26, 41, 43, 8, 14, 13], [42, 26, 27, 14, 18, 13], [33, 41, 43, 8, 14, 13], [42, 26, 27, 8, 18, 13],
];

/// 各年節氣編碼對應的組合序號。
const TERM_PATTERN_OF_YEAR: [u8; 201] = [
    0, 1, 2, 3, 4, 1, 5, 3, 4, 1, // 1900
    5, 3, 4, 6, 7, 8, 9, 10, 11, 8, // 1910
    9, 12, 11, 13, 9, 12, 1, 2, 14, 0, // 1920
    1, 2, 14, 0, 1, 5, 14, 0, 1, 5, // 1930
    14, 0, 1, 5, 15, 16, 17, 7, 18, 19, // 1940
    20, 7, 18, 19, 12, 1, 21, 19, 0, 1, // 1950
    22, 23, 0, 1, 22, 23, 0, 1, 24, 23, // 1960
    0, 1, 24, 25, 0, 26, 27, 28, 29, 30, // 1970
    27, 28, 16, 20, 31, 32, 19, 33, 34, 35, // 1980
    36, 0, 34, 37, 23, 0, 34, 38, 23, 0, // 1990
    34, 38, 23, 0, 34, 38, 28, 0, 39, 40, // 2000
    28, 29, 41, 42, 28, 16, 43, 44, 32, 36, // 2010
    45, 46, 35, 36, 47, 46, 38, 23, 47, 46, // 2020
    38, 23, 47, 46, 38, 28, 47, 46, 38, 28, // 2030
    47, 48, 40, 28, 49, 50, 42, 28, 51, 52, // 2040
    44, 35, 53, 52, 44, 54, 53, 55, 46, 54, // 2050
    56, 55, 46, 38, 56, 55, 46, 38, 57, 55, // 2060
    48, 38, 57, 58, 48, 42, 57, 58, 59, 42, // 2070
    57, 60, 61, 44, 62, 63, 52, 44, 64, 63, // 2080
    55, 46, 64, 65, 55, 46, 66, 67, 55, 46, // 2090
    38, // 2100
];

/// 一年的農曆信息：十二個月的天數、閏月月序及閏月天數。
#[derive(Debug, Clone, Copy)]
pub struct YearInfo {
    month_days: [u8; 12],
    leap_month: u8,
    leap_days: u8,
}

static YEAR_INFO: LazyLock<[YearInfo; 201]> = LazyLock::new(|| {
    let mut table = [YearInfo {
        month_days: [0; 12],
        leap_month: 0,
        leap_days: 0,
    }; 201];
    for (info, &packed) in table.iter_mut().zip(YEAR_INFO_PACKED.iter()) {
        for m in 1..=12u32 {
            info.month_days[(m - 1) as usize] = if packed & (0x10000 >> m) != 0 { 30 } else { 29 };
        }
        info.leap_month = (packed & 0xf) as u8;
        info.leap_days = match (info.leap_month, packed & 0x10000) {
            (0, _) => 0,
            (_, 0) => 29,
            _ => 30,
        };
    }
    debug!("decoded lunar year table for {FIRST_YEAR}..={LAST_YEAR}");
    table
});

impl YearInfo {
    /// 取得公元 `year` 年的農曆信息。
    ///
    /// 年份超出 1900–2100 範圍則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::lunar::tables::YearInfo;
    ///
    /// let info = YearInfo::get(2017).unwrap();
    /// assert_eq!(Some(6), info.leap_month());
    /// assert!(YearInfo::get(1899).is_none());
    /// ```
    pub fn get(year: i32) -> Option<&'static Self> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return None;
        }
        Some(&YEAR_INFO[(year - FIRST_YEAR) as usize])
    }

    /// 全年總天數，含閏月。
    pub fn total_days(&self) -> u32 {
        self.month_days.iter().map(|&d| u32::from(d)).sum::<u32>() + self.leap_days()
    }
    /// `month` 月的天數（29 或 30）。月序超出 1–12 則返回 `None`。
    pub fn month_days(&self, month: u32) -> Option<u32> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(self.month_days[(month - 1) as usize].into())
    }
    /// 閏月月序（1–12），無閏月則返回 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        (self.leap_month != 0).then(|| self.leap_month.into())
    }
    /// 閏月天數（29 或 30），無閏月為 0。
    pub fn leap_days(&self) -> u32 {
        self.leap_days.into()
    }
}

static SOLAR_TERM_DAYS: LazyLock<[[u8; 24]; 201]> = LazyLock::new(|| {
    let mut table = [[0u8; 24]; 201];
    for (days, &pattern) in table.iter_mut().zip(TERM_PATTERN_OF_YEAR.iter()) {
        for (i, &group) in TERM_PATTERNS[pattern as usize].iter().enumerate() {
            let n = TERM_GROUPS[group as usize];
            days[i * 4] = (n / 100_000) as u8;
            days[i * 4 + 1] = (n / 1_000 % 100) as u8;
            days[i * 4 + 2] = (n / 100 % 10) as u8;
            days[i * 4 + 3] = (n % 100) as u8;
        }
    }
    debug!("decoded solar term table for {FIRST_YEAR}..={LAST_YEAR}");
    table
});

/// 取得公元 `year` 年第 `term` 個節氣的交節日（該月第幾日）。
///
/// 節氣自小寒起依次編為 1..=24，第 `term` 個節氣在公曆 `(term + 1) / 2` 月
/// 交節。年份超出 1900–2100 或序號超出 1–24 則返回 `None`。
///
/// # 用例
///
/// ```
/// use nongli::lunar::tables::solar_term_day;
///
/// // 2017 年立春（第 3 個節氣）在 2 月 3 日交節
/// assert_eq!(Some(3), solar_term_day(2017, 3));
/// assert_eq!(None, solar_term_day(2017, 25));
/// ```
pub fn solar_term_day(year: i32, term: u32) -> Option<u32> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) || !(1..=24).contains(&term) {
        return None;
    }
    Some(SOLAR_TERM_DAYS[(year - FIRST_YEAR) as usize][(term - 1) as usize].into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_totals_match_month_sums() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let info = YearInfo::get(year).unwrap();
            let sum: u32 = (1..=12).map(|m| info.month_days(m).unwrap()).sum();
            assert_eq!(sum + info.leap_days(), info.total_days(), "{year}");
            assert!(
                (353..=385).contains(&info.total_days()),
                "{year}: {}",
                info.total_days()
            );
        }
    }

    #[test]
    fn leap_length_only_with_leap_month() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let info = YearInfo::get(year).unwrap();
            match info.leap_month() {
                None => assert_eq!(0, info.leap_days(), "{year}"),
                Some(m) => {
                    assert!((1..=12).contains(&m), "{year}");
                    assert!(matches!(info.leap_days(), 29 | 30), "{year}");
                }
            }
        }
    }

    #[test]
    fn no_year_has_a_leap_twelfth_month() {
        // 月序推進依賴此性質：閏十二月須在次年首月前插入，本曆表內不出現。
        for year in FIRST_YEAR..=LAST_YEAR {
            assert_ne!(Some(12), YearInfo::get(year).unwrap().leap_month(), "{year}");
        }
    }

    #[test]
    fn known_years() {
        let info = YearInfo::get(1900).unwrap();
        assert_eq!(Some(8), info.leap_month());
        assert_eq!(29, info.leap_days());
        assert_eq!(384, info.total_days());

        let info = YearInfo::get(2017).unwrap();
        assert_eq!(Some(6), info.leap_month());
        assert_eq!(30, info.leap_days());

        let info = YearInfo::get(2033).unwrap();
        assert_eq!(Some(11), info.leap_month());

        let info = YearInfo::get(2000).unwrap();
        assert_eq!(None, info.leap_month());
        assert_eq!(0, info.leap_days());
    }

    #[test]
    fn out_of_range_years() {
        assert!(YearInfo::get(1899).is_none());
        assert!(YearInfo::get(2101).is_none());
        assert!(YearInfo::get(0).is_none());
    }

    #[test]
    fn invalid_month_number() {
        let info = YearInfo::get(2000).unwrap();
        assert_eq!(None, info.month_days(0));
        assert_eq!(None, info.month_days(13));
    }

    #[test]
    fn known_term_days() {
        // 1900 年小寒、大寒、立春、雨水
        assert_eq!(Some(6), solar_term_day(1900, 1));
        assert_eq!(Some(20), solar_term_day(1900, 2));
        assert_eq!(Some(4), solar_term_day(1900, 3));
        assert_eq!(Some(19), solar_term_day(1900, 4));
        // 2000 年小寒、大寒
        assert_eq!(Some(6), solar_term_day(2000, 1));
        assert_eq!(Some(21), solar_term_day(2000, 2));
        // 2016 年冬至在 12 月 21 日，2017 年在 12 月 22 日
        assert_eq!(Some(21), solar_term_day(2016, 24));
        assert_eq!(Some(22), solar_term_day(2017, 24));
    }

    #[test]
    fn term_days_within_month_bounds() {
        for year in FIRST_YEAR..=LAST_YEAR {
            for term in 1..=24 {
                let day = solar_term_day(year, term).unwrap();
                assert!((1..=31).contains(&day), "{year} term {term}: {day}");
            }
        }
    }

    #[test]
    fn term_lookup_bounds() {
        assert_eq!(None, solar_term_day(1899, 1));
        assert_eq!(None, solar_term_day(2101, 1));
        assert_eq!(None, solar_term_day(2000, 0));
        assert_eq!(None, solar_term_day(2000, 25));
    }
}
