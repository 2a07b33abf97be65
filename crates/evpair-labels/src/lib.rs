//! Name tables for input event constants.
//!
//! Key codes, motion axes, LED identifiers and policy flags each have a
//! fixed dictionary mapping symbolic names (`"HOME"`, `"X"`, `"NUM_LOCK"`,
//! `"WAKE"`) to their integer values. Configuration files name constants
//! symbolically; tooling prints values back as names. Both directions live
//! here, with no I/O and no allocation.
//!
//! Name lookups deliberately return the `0` sentinel for unknown names
//! instead of an error: key layout files treat an unrecognized name as
//! "no mapping" (`"UNKNOWN"`, axis `"X"`, flag none), and threading a
//! `Result` through every parser for that was never worth it. Value
//! lookups return `None` for unmapped values.
//!
//! ```
//! use evpair_labels::{axis_from_name, keycode_name, KEYCODES};
//!
//! assert_eq!(keycode_name(3), Some("HOME"));
//! assert_eq!(axis_from_name("RZ"), 14);
//! assert_eq!(evpair_labels::code_for(KEYCODES, "NOT_A_KEY"), 0);
//! ```

mod tables;

pub use tables::{Label, AXES, FLAGS, KEYCODES, LEDS};

/// Resolve `name` in `table`, returning `0` when the name is unknown.
pub fn code_for(table: &[Label], name: &str) -> i32 {
    table
        .iter()
        .find(|label| label.name == name)
        .map_or(0, |label| label.value)
}

/// Resolve `value` in `table` back to its name.
pub fn name_for(table: &[Label], value: i32) -> Option<&'static str> {
    table
        .iter()
        .find(|label| label.value == value)
        .map(|label| label.name)
}

/// The key code for `name`, or `0` (`"UNKNOWN"`) when unrecognized.
pub fn keycode_from_name(name: &str) -> i32 {
    code_for(KEYCODES, name)
}

/// The name of key code `code`.
///
/// Key codes are mostly contiguous, so the table position usually is the
/// value and the common case is a single probe; the media-step group past
/// the contiguous range falls back to a scan.
pub fn keycode_name(code: i32) -> Option<&'static str> {
    if code >= 0 {
        if let Some(label) = KEYCODES.get(code as usize) {
            if label.value == code {
                return Some(label.name);
            }
        }
    }
    name_for(KEYCODES, code)
}

/// The axis identifier for `name`, or `0` (`"X"`) when unrecognized.
pub fn axis_from_name(name: &str) -> i32 {
    code_for(AXES, name)
}

/// The name of axis `axis`.
pub fn axis_name(axis: i32) -> Option<&'static str> {
    name_for(AXES, axis)
}

/// The LED identifier for `name`, or `0` (`"NUM_LOCK"`) when unrecognized.
pub fn led_from_name(name: &str) -> i32 {
    code_for(LEDS, name)
}

/// The policy flag bit for `name`, or `0` (no flag) when unrecognized.
pub fn flag_from_name(name: &str) -> u32 {
    code_for(FLAGS, name) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keycode_names_resolve_both_ways() {
        assert_eq!(keycode_from_name("UNKNOWN"), 0);
        assert_eq!(keycode_from_name("HOME"), 3);
        assert_eq!(keycode_from_name("NAVIGATE_OUT"), 263);
        assert_eq!(keycode_name(0), Some("UNKNOWN"));
        assert_eq!(keycode_name(3), Some("HOME"));
        assert_eq!(keycode_name(263), Some("NAVIGATE_OUT"));
    }

    #[test]
    fn unknown_keycode_name_is_sentinel_zero() {
        assert_eq!(keycode_from_name("NOT_A_KEY"), 0);
        assert_eq!(keycode_from_name("home"), 0, "lookups are case-sensitive");
    }

    #[test]
    fn media_step_group_sits_past_the_contiguous_range() {
        assert_eq!(keycode_from_name("MEDIA_SKIP_FORWARD"), 272);
        assert_eq!(keycode_from_name("MEDIA_STEP_BACKWARD"), 275);
        assert_eq!(keycode_name(272), Some("MEDIA_SKIP_FORWARD"));
        assert_eq!(keycode_name(273), Some("MEDIA_SKIP_BACKWARD"));
        assert_eq!(keycode_name(274), Some("MEDIA_STEP_FORWARD"));
        assert_eq!(keycode_name(275), Some("MEDIA_STEP_BACKWARD"));
        // The values skipped over by that jump map to nothing.
        for code in 264..272 {
            assert_eq!(keycode_name(code), None);
        }
    }

    #[test]
    fn out_of_range_keycodes_have_no_name() {
        assert_eq!(keycode_name(-1), None);
        assert_eq!(keycode_name(276), None);
        assert_eq!(keycode_name(i32::MAX), None);
    }

    #[test]
    fn every_keycode_value_survives_a_roundtrip() {
        for label in KEYCODES {
            assert_eq!(keycode_from_name(label.name), label.value);
            assert_eq!(keycode_name(label.value), Some(label.name));
        }
    }

    #[test]
    fn axis_tables_have_the_reserved_gap() {
        assert_eq!(axis_from_name("X"), 0);
        assert_eq!(axis_from_name("TILT"), 25);
        assert_eq!(axis_from_name("GENERIC_1"), 32);
        assert_eq!(axis_from_name("GENERIC_16"), 47);
        assert_eq!(axis_name(25), Some("TILT"));
        for axis in 26..32 {
            assert_eq!(axis_name(axis), None);
        }
        assert_eq!(axis_name(32), Some("GENERIC_1"));
    }

    #[test]
    fn led_lookup_matches_controller_block() {
        assert_eq!(led_from_name("CHARGING"), 10);
        assert_eq!(led_from_name("CONTROLLER_1"), 0x10);
        assert_eq!(led_from_name("CONTROLLER_4"), 0x13);
        assert_eq!(name_for(LEDS, 11), None);
        assert_eq!(name_for(LEDS, 0x10), Some("CONTROLLER_1"));
    }

    #[test]
    fn flags_are_single_bits() {
        assert_eq!(flag_from_name("WAKE"), 0x1);
        assert_eq!(flag_from_name("VIRTUAL"), 0x2);
        assert_eq!(flag_from_name("FUNCTION"), 0x4);
        assert_eq!(flag_from_name("GESTURE"), 0x8);
        assert_eq!(flag_from_name("BOGUS"), 0);

        let mut seen = 0u32;
        for flag in FLAGS {
            let bit = flag.value as u32;
            assert_eq!(bit.count_ones(), 1, "{} must be one bit", flag.name);
            assert_eq!(seen & bit, 0, "{} overlaps another flag", flag.name);
            seen |= bit;
        }
    }

    #[test]
    fn table_names_are_unique() {
        for table in [KEYCODES, AXES, LEDS, FLAGS] {
            for (i, a) in table.iter().enumerate() {
                for b in &table[i + 1..] {
                    assert_ne!(a.name, b.name, "duplicate name {}", a.name);
                }
            }
        }
    }
}
