//! Chinese lunisolar calendar.
//!
//! 註：為便於使用曆法術語，本模塊文檔以中文書寫。
//!
//! 本模塊以預製的緊湊年表（1900–2100）編算農曆，見 [`tables`]。自公曆日期
//! 推農曆採用日數累減法：先自曆表起算日（1900 年 1 月 31 日，即庚子年正月
//! 初一）起逐年減去各農曆年總天數定出所在年，再逐月減去各月天數定出月、日，
//! 閏月在其所閏之月後插入。

use std::fmt::{Display, Formatter};

use thiserror::Error;
use tracing::trace;

use crate::date::Date;

pub mod fmt;
pub mod tables;

use tables::{FIRST_YEAR, LAST_YEAR, YearInfo};

/// 曆表起算日 1900-01-31 的儒略日數。
const EPOCH_JDN: u32 = 2415051;

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        match *self {
            Month::Common(n) | Month::Leap(n) => n,
        }
    }
    /// 閏月為 `true`，平月為 `false`。
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，見 [`fmt::month`]。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// 表示所給日期超出曆表覆蓋範圍，無對應農曆數據。
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum Unsupported {
    /// 公元年超出 1900–2100。
    #[error("year {0} is outside the supported range 1900..=2100")]
    YearOutOfRange(i32),
    /// 1900 年內早於曆表起算日（1900 年 1 月 31 日）的日期。
    #[error("dates before 1900-01-31 precede the table epoch")]
    BeforeEpoch,
    /// 公曆月或日超出有效範圍。
    #[error("month {month} or day {day} does not denote a valid Gregorian date")]
    InvalidDate { month: i32, day: i32 },
}

/// 農曆年月日，附當日節氣（若當日交節）。
///
/// # 用例
///
/// ```
/// use nongli::{Date, LunarDate};
/// use nongli::lunar::Month::*;
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// let lunar = LunarDate::from_date(date).unwrap();
///
/// assert_eq!((1999, Common(11), 25), (lunar.year, lunar.month, lunar.day));
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LunarDate {
    /// 農曆年，以正月初一為歲首的公元紀年。
    pub year: i32,
    /// 月名。
    pub month: Month,
    /// 日序，1..=30。
    pub day: u32,
    /// 當日交節的節氣序號（1..=24，小寒至冬至），非交節日為 `None`。
    pub solar_term: Option<u32>,
}

impl LunarDate {
    /// 取得給定公曆日期對應的農曆日期。
    ///
    /// 日期超出曆表範圍（公元年不在 1900–2100 間，或早於 1900 年 1 月
    /// 31 日）則回報 [`Unsupported`]。
    pub fn from_date(date: Date) -> Result<Self, Unsupported> {
        let (y, m, d) = date.gregorian();
        if !(FIRST_YEAR..=LAST_YEAR).contains(&y) {
            return Err(Unsupported::YearOutOfRange(y));
        }
        let mut offset = date - Date::from_jdn(EPOCH_JDN);
        if offset < 0 {
            return Err(Unsupported::BeforeEpoch);
        }

        // 逐年累減，定出農曆年。
        let mut year = FIRST_YEAR;
        let mut last = 0;
        while offset > 0 {
            let Some(info) = YearInfo::get(year) else {
                break;
            };
            last = info.total_days() as i32;
            offset -= last;
            year += 1;
        }
        if offset < 0 {
            offset += last;
            year -= 1;
        }
        let info = YearInfo::get(year).ok_or(Unsupported::YearOutOfRange(year))?;

        // 逐月累減，定出月、日。閏月在其所閏之月後插入，插入時月序不進。
        let leap = info.leap_month().map_or(0, |m| m as i32);
        let mut is_leap = false;
        let mut month = 1;
        while month < 13 && offset > 0 {
            if leap > 0 && month == leap + 1 && !is_leap {
                month -= 1;
                is_leap = true;
                last = info.leap_days() as i32;
            } else {
                let Some(days) = info.month_days(month as u32) else {
                    break;
                };
                last = days as i32;
            }
            if is_leap && month == leap + 1 {
                is_leap = false;
            }
            offset -= last;
            month += 1;
        }
        // 日數恰盡於閏月交界時，只翻轉閏旗標，月序不得再進退。
        if offset == 0 && leap > 0 && month == leap + 1 {
            if is_leap {
                is_leap = false;
            } else {
                month -= 1;
                is_leap = true;
            }
        } else if offset < 0 {
            offset += last;
            month -= 1;
        }

        let month = if is_leap {
            Month::Leap(month as u32)
        } else {
            Month::Common(month as u32)
        };
        let day = (offset + 1) as u32;
        let solar_term = solar_term_on(y, m, d);
        trace!(year, ?month, day, "lunar date for {}", date.iso_gregorian());
        Ok(LunarDate {
            year,
            month,
            day,
            solar_term,
        })
    }
}

/// 若公曆 `(year, month, day)` 當日交節，給出節氣序號。
fn solar_term_on(year: i32, month: i32, day: i32) -> Option<u32> {
    let second = month as u32 * 2;
    if tables::solar_term_day(year, second - 1) == Some(day as u32) {
        Some(second - 1)
    } else if tables::solar_term_day(year, second) == Some(day as u32) {
        Some(second)
    } else {
        None
    }
}

/// 完整的農曆信息記錄：農曆年月日、干支、生肖、節氣與西洋星座。
///
/// 各名稱字段均為自持文本，不引用曆表。
///
/// # 用例
///
/// ```
/// use nongli::Lunar;
///
/// let lunar = Lunar::from_gregorian(2017, 7, 23).unwrap();
///
/// assert_eq!("丁酉年閏六月初一", lunar.to_string());
/// assert_eq!("雞", lunar.zodiac);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lunar {
    /// 農曆年月日。
    pub date: LunarDate,
    /// 生肖。
    pub zodiac: &'static str,
    /// 月名文本，如「閏六月」。
    pub month: String,
    /// 日名文本，如「廿五」。
    pub day: String,
    /// 年干支。
    pub year_sexagenary: String,
    /// 月干支，以節令為界。
    pub month_sexagenary: String,
    /// 日干支。
    pub day_sexagenary: String,
    /// 當日節氣名，非交節日為 `None`。
    pub solar_term: Option<&'static str>,
    /// 西洋星座。
    pub zodiac_sign: &'static str,
}

impl Lunar {
    /// 取得給定公曆日期的完整農曆信息。
    pub fn from_date(date: Date) -> Result<Self, Unsupported> {
        let lunar = LunarDate::from_date(date)?;
        let (y, m, d) = date.gregorian();

        // 月干支以節令為界：當月首個節氣交節之後方換月柱。
        let first_term = tables::solar_term_day(y, m as u32 * 2 - 1)
            .ok_or(Unsupported::YearOutOfRange(y))?;
        let month_cycle = i64::from(y - FIRST_YEAR) * 12
            + i64::from(m)
            + if d as u32 >= first_term { 12 } else { 11 };

        Ok(Lunar {
            zodiac: fmt::zodiac(lunar.year),
            month: lunar.month.name(),
            day: fmt::day(lunar.day),
            year_sexagenary: fmt::year_sexagenary(lunar.year),
            month_sexagenary: fmt::cycle(month_cycle),
            day_sexagenary: fmt::cycle(i64::from(date.jdn()) + 49),
            solar_term: lunar.solar_term.map(fmt::solar_term),
            zodiac_sign: fmt::zodiac_sign(m as u32, d as u32),
            date: lunar,
        })
    }

    /// 以公曆年月日取得完整農曆信息，為本庫的主要入口。
    ///
    /// 月、日超出有效範圍回報 [`Unsupported::InvalidDate`]，年份超出
    /// 1900–2100 或日期早於 1900 年 1 月 31 日亦回報 [`Unsupported`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::Lunar;
    ///
    /// let lunar = Lunar::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("己卯年冬月廿五", lunar.to_string());
    ///
    /// assert!(Lunar::from_gregorian(1899, 12, 31).is_err());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Result<Self, Unsupported> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Unsupported::YearOutOfRange(year));
        }
        let date =
            Date::from_gregorian(year, month, day).ok_or(Unsupported::InvalidDate { month, day })?;
        Self::from_date(date)
    }
}

impl Display for Lunar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}年{}{}", self.year_sexagenary, self.month, self.day)
    }
}
