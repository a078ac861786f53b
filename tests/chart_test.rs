use retail_charts::analytics::View;
use retail_charts::vis::{center_text, BarChartConfig, ChartConfig, ChartStyle};
use retail_charts::{
    monthly_transactions, print_bar_chart, write_bar_chart, BarChart, Chart, ChartSeries, Error,
};

fn render(title: &str, labels: &[&str], values: &[i64]) -> String {
    let mut buf = Vec::new();
    write_bar_chart(&mut buf, title, labels, values).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_print_bar_chart_length_mismatch() {
    let result = print_bar_chart("Mismatch", &["a", "b", "c"], &[1, 2]);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_chart_block_layout() {
    let output = render("Sales", &["Cash", "Debit Card"], &[3, 1]);
    let expected = format!(
        "{}Sales\n\nCash       | ███ (3)\n\nDebit Card | █ (1)\n\n",
        " ".repeat(37)
    );
    assert_eq!(output, expected);
}

#[test]
fn test_labels_align_on_unicode_width() {
    let output = render("", &["10:00–11:00", "x"], &[1, 1]);
    let lines: Vec<&str> = output.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines[0], "10:00–11:00 | █ (1)");
    assert_eq!(lines[1], format!("x{} | █ (1)", " ".repeat(10)));
}

#[test]
fn test_scaled_bars() {
    // max 66 -> scale 1, max 101 -> scale 2
    let unscaled = render("", &["egg"], &[66]);
    assert!(unscaled.contains(&"█".repeat(66)));

    let scaled = render("", &["big", "small"], &[101, 7]);
    assert!(scaled.contains(&format!("big   | {} (101)", "█".repeat(50))));
    assert!(scaled.contains(&format!("small | {} (7)", "█".repeat(3))));
}

#[test]
fn test_zero_values_draw_empty_bars() {
    let output = render("", &["a", "b"], &[0, 0]);
    assert_eq!(output, "a |  (0)\n\nb |  (0)\n\n");
}

#[test]
fn test_custom_width_and_style() {
    let config = BarChartConfig {
        base: ChartConfig {
            width: 20,
            title: Some("Ten chars!".to_string()),
        },
        style: ChartStyle::Ascii,
        ..Default::default()
    };
    let chart = BarChart::with_config(&["a"], &[4], config).unwrap();
    assert_eq!(chart.render(), "     Ten chars!\n\na | #### (4)\n\n");
}

#[test]
fn test_center_text() {
    assert_eq!(center_text("abcd", 10), "   abcd");
    assert_eq!(center_text("abc", 10), "   abc");
    assert_eq!(center_text("", 4), "  ");
}

#[test]
fn test_series_rejects_mismatch() {
    let result = ChartSeries::new("t", vec!["a".to_string()], vec![1, 2]);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_store_section_chart_from_fixture() {
    let transactions = monthly_transactions();
    let series = View::ItemsSoldByStoreSection.compute(&transactions);
    let output = BarChart::from_series(&series).render();

    let title = "Items Sold by Store Section";
    assert!(output.starts_with(&format!("{}{}\n\n", " ".repeat((80 - title.len()) / 2), title)));
    assert!(output.contains(&format!("Mixed  | {} (73)", "█".repeat(73))));
    assert!(output.contains(&format!("Bakery | {} (8)", "█".repeat(8))));
}
