    /// Number of draws used by distribution checks.
    #[allow(dead_code)]
    const LARGE_COUNT: usize = 100_000;

    /// Allowed deviation (in percentage points) from expected share over `LARGE_COUNT` draws.
    #[allow(dead_code)]
    const SHARE_TOLERANCE: f64 = 1.0;

    #[allow(dead_code)]
    fn assert_share(name: &str, count: usize, total: usize, expected_percent: f64) {
        assert!(total > 0, "empty population for {}", name);
        let percent = count as f64 * 100.0 / total as f64;
        if (percent - expected_percent).abs() > SHARE_TOLERANCE {
            assert!(false, "{}: {:.2}% observed, {:.2}% expected", name, percent, expected_percent);
        }
    }

    /// Splits data line into its pipe separated fields and checks the fixed ones.
    /// Returns (index, outcome, category label, category value, millis).
    #[allow(dead_code)]
    fn parse_line(line: &str) -> (i64, String, String, String, u64) {
        let fields: Vec<&str> = line.split('|').collect();
        assert_eq!(fields.len(), 10, "unexpected field count in line: {}", line);
        assert_eq!(fields[1], "index");
        assert_eq!(fields[3], "document classified");
        assert_eq!(fields[4], "outcome");
        assert_eq!(fields[8], "millis");
        (
            fields[2].parse().unwrap(),
            fields[5].to_string(),
            fields[6].to_string(),
            fields[7].to_string(),
            fields[9].parse().unwrap(),
        )
    }
