use crate::model::AgeDistribution;

const RULE_WIDTH: usize = 50;

/// Fixed-format console summary, starting with a blank line.
pub fn format_summary(country_count: usize, distribution: &AgeDistribution) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    [
        String::new(),
        rule.clone(),
        "DEMOGRAPHIC SUMMARY".to_string(),
        rule.clone(),
        format!("Countries analyzed: {}", country_count),
        "Average age distribution:".to_string(),
        format!("  - Children (0-14): {:.1}%", distribution.children),
        format!("  - Working age (15-64): {:.1}%", distribution.working_age),
        format!("  - Elderly (65+): {:.1}%", distribution.elderly),
        rule,
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_layout() {
        let dist = AgeDistribution {
            children: 18.1125,
            working_age: 65.2125,
            elderly: 16.6,
        };
        let text = format_summary(8, &dist);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[2], "DEMOGRAPHIC SUMMARY");
        assert_eq!(lines[4], "Countries analyzed: 8");
        assert_eq!(lines[6], "  - Children (0-14): 18.1%");
        assert_eq!(lines[7], "  - Working age (15-64): 65.2%");
        assert_eq!(lines[8], "  - Elderly (65+): 16.6%");
        assert_eq!(lines[9], "=".repeat(50));
    }
}
