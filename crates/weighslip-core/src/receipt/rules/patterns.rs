//! Common regex patterns for Korean weighbridge receipt extraction.
//!
//! All patterns run against normalized text (see `normalize`), where every
//! space and tab has been stripped. The `\s`/`[ \t]` tolerances mirror the
//! label spacing the OCR produces before normalization and are harmless on
//! already-stripped input.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date: YYYY[-/.]MM[-/.]DD, years 2000-2099
    pub static ref DATE: Regex = Regex::new(
        r"(20\d{2})[-/.](\d{2})[-/.](\d{2})"
    ).unwrap();

    // Clock time with word boundaries, ASCII or full-width colon
    pub static ref TIME_HMS: Regex = Regex::new(
        r"\b([01]?\d|2[0-3])[:：]([0-5]\d)(?:[:：]([0-5]\d))?\b"
    ).unwrap();

    // Boundary-free variant used to strip clock tokens out of weighing lines
    pub static ref TIME_HMS_LOOSE: Regex = Regex::new(
        r"([01]?\d|2[0-3])\s*[:：]\s*([0-5]\d)(?:\s*[:：]\s*([0-5]\d))?"
    ).unwrap();

    // Korean time idiom: 11시 33분
    pub static ref TIME_KO: Regex = Regex::new(
        r"(\d{1,2})\s*시\s*(\d{1,2})\s*분"
    ).unwrap();

    // Bare HHMM token (e.g. '2026-02-02 0016')
    pub static ref TIME_HHMM: Regex = Regex::new(
        r"\b(\d{4})\b"
    ).unwrap();

    // Anything that looks like a time fragment, stripped from the text
    // following a weight label so a clock never gets absorbed into a number
    pub static ref TIME_TOKEN: Regex = Regex::new(
        r"(\d{1,2}\s*[:：]\s*\d{1,2})|(\d{1,2}\s*시\s*\d{1,2}\s*분)|(\d{1,2}\s*시)|(\d{1,2}\s*분)"
    ).unwrap();

    // Latitude/longitude pair: signed decimals with 1-3 integer digits
    pub static ref LAT_LON: Regex = Regex::new(
        r"(-?\d{1,3}\.\d+)\s*,\s*(-?\d{1,3}\.\d+)"
    ).unwrap();

    // Weight number followed by a kg unit, digit groups split by comma/space
    pub static ref KG_BLOCK: Regex = Regex::new(
        r"(?i)([0-9][0-9 ,]*)\s*kg"
    ).unwrap();

    // Vehicle number labels, in priority order
    pub static ref VEHICLE_NO: Regex = Regex::new(
        r"차량\s*번호\s*[:：][ \t]*([0-9A-Za-z가-힣-]+)"
    ).unwrap();

    pub static ref VEHICLE_NO_ALT: Regex = Regex::new(
        r"(?i)차량\s*No\.?[ \t]*[:：]?[ \t]*([0-9A-Za-z가-힣-]+)"
    ).unwrap();

    pub static ref VEHICLE_NO_SHORT: Regex = Regex::new(
        r"차\s*번호\s*[:：][ \t]*([0-9A-Za-z가-힣-]+)"
    ).unwrap();

    pub static ref TRAILING_NON_DIGITS: Regex = Regex::new(
        r"[^0-9]+$"
    ).unwrap();

    pub static ref ANY_DIGIT: Regex = Regex::new(
        r"\d"
    ).unwrap();

    // Counterparty labels: 거래처 then 상호
    pub static ref PARTNER: Regex = Regex::new(
        r"거\s*래\s*처\s*[:：][ \t]*([^\n]+)"
    ).unwrap();

    pub static ref PARTNER_ALT: Regex = Regex::new(
        r"상\s*호\s*[:：][ \t]*([^\n]+)"
    ).unwrap();

    // Honorific fallback: text before 귀하 on the same line
    pub static ref PARTNER_HONORIFIC: Regex = Regex::new(
        r"([^\n]+)\s*귀하"
    ).unwrap();

    // Issuer: a full line carrying a corporate marker
    pub static ref ISSUER_LINE: Regex = Regex::new(
        r"\n([^\n]*(?:\(주\)|주식회사)[^\n]*)\n"
    ).unwrap();

    // Item name: labeled, or bare 품명 terminated by the 구분 label
    pub static ref ITEM_NAME: Regex = Regex::new(
        r"품\s*명\s*[:：][ \t]*([^\n]+)"
    ).unwrap();

    pub static ref ITEM_NAME_BEFORE_CATEGORY: Regex = Regex::new(
        r"품\s*명[ \t]*([^\n]+)\s+구\s*분"
    ).unwrap();

    // Direction label (입고/출고)
    pub static ref DIRECTION_LABEL: Regex = Regex::new(
        r"구\s*분\s*[:：][ \t]*([^\n]+)"
    ).unwrap();

    pub static ref INBOUND_BOUNDED: Regex = Regex::new(
        r"\b입\s*고\b"
    ).unwrap();

    pub static ref OUTBOUND_BOUNDED: Regex = Regex::new(
        r"\b출\s*고\b"
    ).unwrap();

    pub static ref INBOUND: Regex = Regex::new(
        r"입\s*고"
    ).unwrap();

    pub static ref OUTBOUND: Regex = Regex::new(
        r"출\s*고"
    ).unwrap();

    // Weight labels
    pub static ref GROSS_LABEL: Regex = Regex::new(
        r"총\s*중\s*량\s*[:：]?\s*"
    ).unwrap();

    pub static ref TARE_LABEL: Regex = Regex::new(
        r"(?:차\s*중\s*량|공\s*차\s*중\s*량)\s*[:：]?\s*"
    ).unwrap();

    pub static ref NET_LABEL: Regex = Regex::new(
        r"실\s*중\s*량[ \t]*[:：]?[ \t]*"
    ).unwrap();

    // Identifiers
    pub static ref ID_NO: Regex = Regex::new(
        r"(?i)I\s*D\s*-\s*N\s*O\s*[:：][ \t]*([0-9A-Za-z-]+)"
    ).unwrap();

    pub static ref WEIGH_COUNT: Regex = Regex::new(
        r"계\s*량\s*횟\s*수\s*[:：]?[ \t]*([0-9]{3,})"
    ).unwrap();
}
