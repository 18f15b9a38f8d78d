const P01: u64 = 10;
const P02: u64 = 100;
const P03: u64 = 1_000;
const P04: u64 = 10_000;
const P05: u64 = 100_000;
const P06: u64 = 1_000_000;
const P07: u64 = 10_000_000;
const P08: u64 = 100_000_000;
const P09: u64 = 1_000_000_000;
const P10: u64 = 10_000_000_000;
const P11: u64 = 100_000_000_000;
const P12: u64 = 1_000_000_000_000;

/// Number of digits in the canonical decimal form of `value` (1..=20).
///
/// Small values resolve in a handful of comparisons. Anything `>= 10^12`
/// recurses once on `value / 10^12`, which is below `10^8` for every `u64`,
/// so the recursion depth is bounded at one.
#[must_use]
pub const fn digit_count(value: u64) -> u32 {
    if value < P01 {
        return 1;
    }
    if value < P02 {
        return 2;
    }
    if value < P03 {
        return 3;
    }
    if value < P12 {
        if value < P08 {
            if value < P06 {
                if value < P04 {
                    return 4;
                }
                return if value < P05 { 5 } else { 6 };
            }
            return if value < P07 { 7 } else { 8 };
        }
        if value < P10 {
            return if value < P09 { 9 } else { 10 };
        }
        return if value < P11 { 11 } else { 12 };
    }
    12 + digit_count(value / P12)
}
