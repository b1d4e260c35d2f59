use crate::Date;
use std::sync::{PoisonError, RwLock};

/// Renders a day number with its English ordinal suffix: `1st`, `2nd`,
/// `3rd`, `4th`, ... Numbers ending in 11, 12 or 13 always take `th`.
pub fn ordinal(day: u8) -> String {
    let suffix = match day % 100 {
        11..=13 => "th",
        n => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{day}{suffix}")
}

/// A way to render a [`Date`] as text.
///
/// The numeric variants cover the common component orderings crossed with
/// zero-padding choices; the calendar variants combine weekday and month
/// names. `Custom` holds a template compiled once by [`DateFormat::custom`]
/// and is reusable across renders without re-parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    /// `2/3/2017`
    DayMonthYear,
    /// `02/03/2017`
    PaddedDayMonthYear,
    /// `02/03/2017` with the year also padded to at least two digits
    PaddedDayMonthPaddedYear,
    /// `2017/3/2`
    YearMonthDay,
    /// `2017/03/02` (the initial process-wide default)
    YearPaddedMonthDay,
    /// `2017/03/02` with the year also padded to at least two digits
    PaddedYearMonthDay,
    /// `Thursday, March 2, 2017`
    WeekdayMonthDayYear,
    /// `Thursday, March 2nd, 2017`
    WeekdayMonthOrdinalYear,
    /// `Thurs, Mar 2, 2017`
    ShortWeekdayMonthDayYear,
    /// `Thurs, Mar 2nd, 2017`
    ShortWeekdayMonthOrdinalYear,
    /// A compiled custom template, see [`DateFormat::custom`]
    Custom(CustomFormat),
}

impl DateFormat {
    /// Compiles a custom format from a template string.
    ///
    /// The template may contain these `$`-delimited tokens, each replaced
    /// with the corresponding value of the rendered date:
    ///
    /// | token  | meaning                              |
    /// |--------|--------------------------------------|
    /// | `$d$`  | day, no padding                      |
    /// | `$dd$` | day, zero-padded to 2 digits         |
    /// | `$D$`  | day with ordinal suffix              |
    /// | `$m$`  | month number, no padding             |
    /// | `$mm$` | month number, zero-padded to 2 digits|
    /// | `$M$`  | month long name                      |
    /// | `$Ms$` | month short name                     |
    /// | `$y$`  | year, no padding                     |
    /// | `$yy$` | year, zero-padded to 2 digits        |
    /// | `$W$`  | day-of-week long name                |
    /// | `$Ws$` | day-of-week short name               |
    ///
    /// Text outside tokens passes through unchanged. Unrecognized `$...$`
    /// sequences and unmatched `$` characters are kept literally rather
    /// than rejected; malformed templates never fail.
    pub fn custom(template: &str) -> Self {
        Self::Custom(CustomFormat::compile(template))
    }

    /// Renders the given date with this format
    pub fn render(&self, date: &Date) -> String {
        let (y, m, d) = (date.year(), date.month_number(), date.day());
        match self {
            Self::DayMonthYear => format!("{d}/{m}/{y}"),
            Self::PaddedDayMonthYear => format!("{d:02}/{m:02}/{y}"),
            Self::PaddedDayMonthPaddedYear => format!("{d:02}/{m:02}/{y:02}"),
            Self::YearMonthDay => format!("{y}/{m}/{d}"),
            Self::YearPaddedMonthDay => format!("{y}/{m:02}/{d:02}"),
            Self::PaddedYearMonthDay => format!("{y:02}/{m:02}/{d:02}"),
            Self::WeekdayMonthDayYear => {
                format!("{}, {} {d}, {y}", date.day_of_week().name(), date.month().name())
            }
            Self::WeekdayMonthOrdinalYear => format!(
                "{}, {} {}, {y}",
                date.day_of_week().name(),
                date.month().name(),
                ordinal(d)
            ),
            Self::ShortWeekdayMonthDayYear => format!(
                "{}, {} {d}, {y}",
                date.day_of_week().short_name(),
                date.month().short_name()
            ),
            Self::ShortWeekdayMonthOrdinalYear => format!(
                "{}, {} {}, {y}",
                date.day_of_week().short_name(),
                date.month().short_name(),
                ordinal(d)
            ),
            Self::Custom(custom) => custom.render(date),
        }
    }
}

/// The recognized substitution tokens of a custom template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Day,
    PaddedDay,
    OrdinalDay,
    MonthNumber,
    PaddedMonth,
    MonthName,
    MonthShortName,
    Year,
    PaddedYear,
    WeekdayName,
    WeekdayShortName,
}

impl Token {
    fn parse(body: &str) -> Option<Self> {
        Some(match body {
            "d" => Self::Day,
            "dd" => Self::PaddedDay,
            "D" => Self::OrdinalDay,
            "m" => Self::MonthNumber,
            "mm" => Self::PaddedMonth,
            "M" => Self::MonthName,
            "Ms" => Self::MonthShortName,
            "y" => Self::Year,
            "yy" => Self::PaddedYear,
            "W" => Self::WeekdayName,
            "Ws" => Self::WeekdayShortName,
            _ => return None,
        })
    }

    fn render(self, date: &Date, out: &mut String) {
        match self {
            Self::Day => out.push_str(&date.day().to_string()),
            Self::PaddedDay => out.push_str(&format!("{:02}", date.day())),
            Self::OrdinalDay => out.push_str(&ordinal(date.day())),
            Self::MonthNumber => out.push_str(&date.month_number().to_string()),
            Self::PaddedMonth => out.push_str(&format!("{:02}", date.month_number())),
            Self::MonthName => out.push_str(date.month().name()),
            Self::MonthShortName => out.push_str(date.month().short_name()),
            Self::Year => out.push_str(&date.year().to_string()),
            Self::PaddedYear => out.push_str(&format!("{:02}", date.year())),
            Self::WeekdayName => out.push_str(date.day_of_week().name()),
            Self::WeekdayShortName => out.push_str(date.day_of_week().short_name()),
        }
    }
}

/// One piece of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Token(Token),
}

/// A custom template compiled into a literal/token segment list, so that
/// rendering never re-parses the template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFormat {
    segments: Vec<Segment>,
}

impl CustomFormat {
    /// Compiles the template; see [`DateFormat::custom`] for the token set.
    pub fn compile(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(start) = rest.find('$') {
            literal.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            let recognized = after
                .find('$')
                .and_then(|end| Token::parse(&after[..end]).map(|token| (token, end)));

            match recognized {
                Some((token, end)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Token(token));
                    rest = &after[end + 1..];
                }
                None => {
                    // Not a token: the '$' is literal text. Rescan from the
                    // next character so a later token can still start inside
                    // what looked like a malformed one.
                    literal.push('$');
                    rest = after;
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Renders the given date through the compiled segments
    pub fn render(&self, date: &Date) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Token(token) => token.render(date, &mut out),
            }
        }
        out
    }
}

/// The process-wide default format used by [`Date::format`] and `Display`.
static DEFAULT_FORMAT: RwLock<DateFormat> = RwLock::new(DateFormat::YearPaddedMonthDay);

/// Returns a copy of the process-wide default format
pub fn default_format() -> DateFormat {
    DEFAULT_FORMAT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the process-wide default format
pub fn set_default_format(format: DateFormat) {
    *DEFAULT_FORMAT.write().unwrap_or_else(PoisonError::into_inner) = format;
}
