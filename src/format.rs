//! VND display formatting.
//!
//! Display only; amounts travel as integers everywhere else. The
//! separator before `₫` is a no-break space, as Vietnamese locale
//! formatting produces.

const SUFFIX: &str = "\u{a0}₫";

/// Compact units: nghìn, triệu, tỷ.
const UNITS: &[(u128, &str)] = &[(1_000, "N"), (1_000_000, "Tr"), (1_000_000_000, "T")];

/// `1250000` → `1.250.000 ₫`.
pub fn format_vnd(amount: i128) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{}{SUFFIX}", group_thousands(amount.unsigned_abs()))
}

/// `5000000` → `5 Tr ₫`, `1200000` → `1,2 Tr ₫`, `800` → `800 ₫`.
///
/// One fractional digit at most, rounded half up; a trailing `,0` is
/// dropped.
pub fn format_vnd_compact(amount: i128) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();

    let Some(mut idx) = UNITS.iter().rposition(|(unit, _)| abs >= *unit) else {
        return format!("{sign}{abs}{SUFFIX}");
    };

    let mut tenths = round_tenths(abs, UNITS[idx].0);
    // 999.95 N rounds to 1000 N, which reads better as 1 Tr.
    if tenths >= 10_000 && idx + 1 < UNITS.len() {
        idx += 1;
        tenths = round_tenths(abs, UNITS[idx].0);
    }

    let whole = tenths / 10;
    let frac = tenths % 10;
    let number = if frac == 0 {
        group_thousands(whole)
    } else {
        format!("{},{frac}", group_thousands(whole))
    };
    format!("{sign}{number} {}{SUFFIX}", UNITS[idx].1)
}

fn round_tenths(value: u128, unit: u128) -> u128 {
    (value.saturating_mul(10) + unit / 2) / unit
}

/// `1234567` → `1.234.567`.
fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
