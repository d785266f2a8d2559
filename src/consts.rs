/// IANA identifier of the zone whose wall clock defines BS day boundaries
pub const TARGET_TIMEZONE: &str = "Asia/Kathmandu";

/// Number of months in every Bikram Sambat year
pub const MONTHS_PER_YEAR: usize = 12;

/// Largest month index (Chaitra), months are 0-indexed
pub const MAX_MONTH_INDEX: u8 = 11;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest possible BS month
pub const MAX_DAY: u8 = 32;

/// Shortest month length accepted in a calendar table row
pub const MIN_MONTH_LENGTH: u8 = 29;
/// Longest month length accepted in a calendar table row
pub const MAX_MONTH_LENGTH: u8 = 32;

/// Accepted totals for one BS year
pub const MIN_YEAR_LENGTH: u16 = 365;
pub const MAX_YEAR_LENGTH: u16 = 366;

/// Gregorian side of the built-in anchor: 2025-01-14 (a Tuesday)
pub const ANCHOR_GREGORIAN: (i32, u32, u32) = (2025, 1, 14);
/// BS side of the built-in anchor: 2081 Magh 1
pub const ANCHOR_BS: (u16, u8, u8) = (2081, 9, 1);

/// Built-in month lengths, Baishakh..Chaitra
pub const BUILTIN_CALENDAR: [(u16, [u8; MONTHS_PER_YEAR]); 2] = [
    (2081, [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30]),
    (2082, [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30]),
];

/// Devanagari numerals, indexed by ASCII digit value
pub const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Month names, Baishakh first
pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "बैशाख",
    "जेठ",
    "असार",
    "साउन",
    "भदौ",
    "असोज",
    "कात्तिक",
    "मंसिर",
    "पुष",
    "माघ",
    "फागुन",
    "चैत",
];

/// Weekday names, Sunday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "आइतबार",
    "सोमबार",
    "मंगलबार",
    "बुधबार",
    "बिहीबार",
    "शुक्रबार",
    "शनिबार",
];

/// Marker for hours before noon
pub const ANTE_MERIDIEM: &str = "पूर्वाह्न";
/// Marker for hours from noon on
pub const POST_MERIDIEM: &str = "अपराह्न";

/// Word following the year in the long format
pub const YEAR_WORD: &str = "साल";
/// Word following the day in the long format
pub const DAY_WORD: &str = "गते";
/// Label preceding the time in the long format
pub const TIME_LABEL: &str = "समय";

/// Short date separator, as used on article stamps
pub const DATE_SEPARATOR: char = '/';
/// Alternate separator accepted when parsing (ISO style)
pub const ISO_DATE_SEPARATOR: char = '-';
