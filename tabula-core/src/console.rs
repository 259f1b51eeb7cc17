//! Terminal framing helpers.

/// Frame `lines` in a box-drawing border, padding each line to the widest one.
///
/// ```text
/// ┌────────────────┐
/// │ models/user.ts │
/// └────────────────┘
/// ```
pub fn boxed<S: AsRef<str>>(lines: &[S]) -> String {
    let width = lines
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    let rule = "─".repeat(width + 2);

    let mut out = format!("┌{rule}┐\n");
    for line in lines {
        let line = line.as_ref();
        let padding = " ".repeat(width - line.chars().count());
        out.push_str(&format!("│ {line}{padding} │\n"));
    }
    out.push_str(&format!("└{rule}┘\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_single_line() {
        insta::assert_snapshot!(boxed(&["src/models/user.ts"]), @r"
        ┌────────────────────┐
        │ src/models/user.ts │
        └────────────────────┘
        ");
    }

    #[test]
    fn test_boxed_pads_to_widest_line() {
        let out = boxed(&["a", "abc"]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["┌─────┐", "│ a   │", "│ abc │", "└─────┘"]);
    }

    #[test]
    fn test_boxed_empty() {
        assert_eq!(boxed::<&str>(&[]), "┌──┐\n└──┘\n");
    }
}
