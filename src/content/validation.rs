//! Validation for loaded tunables.

use super::data::TuningFile;

/// A tunable outside the range the controller can work with.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningIssue {
    pub field: &'static str,
    pub value: f32,
    pub reason: &'static str,
}

impl std::fmt::Display for TuningIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {} ({})", self.field, self.value, self.reason)
    }
}

/// Helper macro for checking one numeric field
macro_rules! check_field {
    (@test $issues:expr, $owner:expr, $field:ident, $prefix:literal, $ok:expr, $reason:expr) => {
        let value = $owner.$field;
        if !value.is_finite() {
            $issues.push(TuningIssue {
                field: concat!($prefix, stringify!($field)),
                value,
                reason: "must be finite",
            });
        } else if !($ok)(value) {
            $issues.push(TuningIssue {
                field: concat!($prefix, stringify!($field)),
                value,
                reason: $reason,
            });
        }
    };
    ($issues:expr, $owner:expr, $field:ident, $prefix:literal, positive) => {
        check_field!(@test $issues, $owner, $field, $prefix, |v: f32| v > 0.0, "must be > 0")
    };
    ($issues:expr, $owner:expr, $field:ident, $prefix:literal, non_negative) => {
        check_field!(@test $issues, $owner, $field, $prefix, |v: f32| v >= 0.0, "must be >= 0")
    };
    ($issues:expr, $owner:expr, $field:ident, $prefix:literal, finite) => {
        check_field!(@test $issues, $owner, $field, $prefix, |_: f32| true, "")
    };
}

/// Check every tunable. Returns an empty list if the file is usable.
pub fn validate_tuning(tuning: &TuningFile) -> Vec<TuningIssue> {
    let mut issues = Vec::new();
    let movement = &tuning.movement;

    check_field!(issues, movement, movement_acceleration, "movement.", positive);
    check_field!(issues, movement, walk_speed, "movement.", non_negative);
    check_field!(issues, movement, movement_lerp_speed, "movement.", positive);
    check_field!(issues, movement, jump_force, "movement.", positive);
    check_field!(issues, movement, fall_multiplier, "movement.", non_negative);
    check_field!(issues, movement, jump_velocity_falloff, "movement.", finite);
    check_field!(issues, movement, hang_time, "movement.", non_negative);
    check_field!(issues, movement, jump_buffer_length, "movement.", non_negative);
    check_field!(issues, movement, slide_speed, "movement.", non_negative);
    check_field!(issues, movement, dash_speed, "movement.", non_negative);
    check_field!(issues, movement, dash_length, "movement.", positive);
    check_field!(issues, movement, dash_exit_vertical_cap, "movement.", finite);
    check_field!(issues, movement, wall_jump_lock, "movement.", non_negative);
    check_field!(issues, movement, wall_jump_movement_lerp, "movement.", positive);
    check_field!(issues, movement, ground_probe_distance, "movement.", positive);
    check_field!(issues, movement, wall_probe_distance, "movement.", positive);

    let input = &tuning.input;
    check_field!(issues, input, sensitivity, "input.", positive);
    check_field!(issues, input, gravity, "input.", positive);

    issues
}
