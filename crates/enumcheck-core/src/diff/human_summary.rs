//! Human-readable summary renderer for enumeration diffs.

use crate::diff::model::EnumDiff;

/// Render a human-readable Markdown/text summary of an [`EnumDiff`].
///
/// Used as the panic message of `assert_same_members`. Informational only.
pub fn render_human_summary(diff: &EnumDiff) -> String {
    let mut out = String::new();

    out.push_str("## Enum Diff\n\n");
    out.push_str(&format!(
        "**Left**: `{}`  \n**Right**: `{}`\n\n",
        diff.left, diff.right
    ));

    if diff.is_empty() && diff.value_mismatches.is_empty() {
        out.push_str("_No member differences detected._\n");
        return out;
    }

    if !diff.only_in_left.is_empty() {
        out.push_str(&format!(
            "### Only in `{}` ({})\n\n",
            diff.left,
            diff.only_in_left.len()
        ));
        for name in &diff.only_in_left {
            out.push_str(&format!("- `{}.{}`\n", diff.left, name));
        }
        out.push('\n');
    }

    if !diff.only_in_right.is_empty() {
        out.push_str(&format!(
            "### Only in `{}` ({})\n\n",
            diff.right,
            diff.only_in_right.len()
        ));
        for name in &diff.only_in_right {
            out.push_str(&format!("- `{}.{}`\n", diff.right, name));
        }
        out.push('\n');
    }

    if !diff.value_mismatches.is_empty() {
        out.push_str("### Value Mismatches\n\n");
        out.push_str("| Member | Left | Right |\n|---|---|---|\n");
        for m in &diff.value_mismatches {
            out.push_str(&format!("| `{}` | {} | {} |\n", m.name, m.left, m.right));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::ValueMismatch;

    fn diff() -> EnumDiff {
        EnumDiff {
            left: "Namespace.T1".to_string(),
            right: "Namespace.T2".to_string(),
            only_in_left: vec![],
            only_in_right: vec![],
            value_mismatches: vec![],
        }
    }

    #[test]
    fn test_summary_identical() {
        let s = render_human_summary(&diff());
        assert!(s.contains("`Namespace.T1`"));
        assert!(s.contains("_No member differences detected._"));
    }

    #[test]
    fn test_summary_lists_both_sides() {
        let d = EnumDiff {
            only_in_left: vec!["Alpha".to_string()],
            only_in_right: vec!["Delta".to_string()],
            ..diff()
        };
        let s = render_human_summary(&d);
        assert!(s.contains("### Only in `Namespace.T1` (1)"));
        assert!(s.contains("- `Namespace.T1.Alpha`"));
        assert!(s.contains("### Only in `Namespace.T2` (1)"));
        assert!(s.contains("- `Namespace.T2.Delta`"));
        assert!(!s.contains("Value Mismatches"));
    }

    #[test]
    fn test_summary_value_mismatches() {
        let d = EnumDiff {
            value_mismatches: vec![ValueMismatch {
                name: "Beta".to_string(),
                left: 1,
                right: 7,
            }],
            ..diff()
        };
        let s = render_human_summary(&d);
        assert!(s.contains("### Value Mismatches"));
        assert!(s.contains("| `Beta` | 1 | 7 |"));
        assert!(!s.contains("_No member differences detected._"));
    }
}
