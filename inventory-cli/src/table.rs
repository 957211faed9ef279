//! Console rendering of store contents

use inventory_engine::storage::Computer;

const RULE_WIDTH: usize = 81;

/// Render records as a bordered table, one row per record
pub fn render(title: &str, records: &[Computer]) -> String {
    let rule = "-".repeat(RULE_WIDTH);

    let mut lines = vec![
        title.to_string(),
        rule.clone(),
        format!(
            "|{:<20}|{:<20}|{:<10}|{:<10}|{:<15}|",
            "Processor type", "Frequency", "RAM", "HDD", "Monitor type"
        ),
        rule.clone(),
    ];
    lines.extend(records.iter().map(|record| {
        format!(
            "|{:<20}|{:<20.6}|{:<10}|{:<10}|{:<15}|",
            record.processor_type,
            record.processor_frequency,
            record.ram_capacity,
            record.hdd_capacity,
            record.monitor_type,
        )
    }));
    lines.push(rule);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rows() {
        let records = vec![
            Computer::new("Intel", 3.2, 16, 512, "LED"),
            Computer::new("AMD", 4.0, 32, 1024, "LCD"),
        ];
        let table = render("Computers", &records);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Computers");
        assert_eq!(lines[1].len(), RULE_WIDTH);
        assert!(lines[2].starts_with("|Processor type      |Frequency"));
        assert_eq!(
            lines[4],
            "|Intel               |3.200000            |16        |512       |LED            |"
        );
        assert!(lines[5].starts_with("|AMD                 |4.000000"));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_render_no_rows() {
        let table = render("Results", &[]);
        assert_eq!(table.lines().count(), 5);
        assert!(table.ends_with(&format!("{}\n", "-".repeat(RULE_WIDTH))));
    }
}
