//! Invoice number generation
//!
//! Numbers follow the office's long-standing format
//! `{seq:02}/INV/BMM/{roman-month}/{year}`, e.g. `03/INV/BMM/VIII/2026`.

/// Fixed company segment of every invoice number
pub const INVOICE_PREFIX: &str = "BMM";

const ROMAN_MONTHS: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// Roman numeral for a 1-based month; None outside 1..=12
pub fn roman_month(month: u32) -> Option<&'static str> {
    ROMAN_MONTHS.get(month.checked_sub(1)? as usize).copied()
}

pub fn invoice_number(seq: u32, month: u32, year: i32) -> Option<String> {
    let roman = roman_month(month)?;
    Some(format!("{seq:02}/INV/{INVOICE_PREFIX}/{roman}/{year}"))
}
