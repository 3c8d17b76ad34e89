use housing_lottery::lottery::report::views::DatasetStats;
use housing_lottery::lottery::{Category, LotteryReport};

pub(crate) fn render_report(cities: &[&str], report: &LotteryReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", dataset_line(&report.stats)));
    out.push_str(&format!("Available cities: {}\n", cities.join(", ")));

    out.push_str("\nLoaded lotteries\n");
    out.push_str(&loaded_lotteries(report));

    out.push_str("\nLottery results\n");
    let lottery_rows: Vec<Vec<String>> = report
        .lotteries
        .iter()
        .map(|row| {
            vec![
                row.name.clone(),
                row.city.clone(),
                group_thousands(row.total_houses),
                group_thousands(row.applicants),
                group_thousands(row.general_pool_houses),
                group_thousands(row.competitors),
                row.win_probability_label.clone(),
            ]
        })
        .collect();
    out.push_str(&table(
        &[
            "Name",
            "City",
            "Total Houses",
            "Applicants",
            "General Pool",
            "Competitors",
            "P(Win)",
        ],
        &lottery_rows,
    ));

    out.push_str("\nCity & overall probabilities\n");
    let mut scope_rows = vec![vec![
        "Overall (selected cities)".to_string(),
        report.overall.detail(),
        report.overall.probability_label.clone(),
    ]];
    scope_rows.extend(report.cities.iter().map(|row| {
        vec![
            "City".to_string(),
            format!("{} ({} lotteries)", row.city, row.lotteries),
            row.probability_label.clone(),
        ]
    }));
    out.push_str(&table(&["Scope", "Detail", "Probability"], &scope_rows));

    out
}

fn loaded_lotteries(report: &LotteryReport) -> String {
    let category_headers: Vec<String> = Category::ordered()
        .iter()
        .map(|category| format!("{} Houses", category.label()))
        .collect();
    let mut headers = vec!["Name", "City", "Total Houses", "Applicants"];
    headers.extend(category_headers.iter().map(String::as_str));

    let rows: Vec<Vec<String>> = report
        .lotteries
        .iter()
        .map(|row| {
            let mut cells = vec![
                row.name.clone(),
                row.city.clone(),
                group_thousands(row.total_houses),
                group_thousands(row.applicants),
            ];
            cells.extend(
                row.categories
                    .iter()
                    .map(|view| group_thousands(view.houses)),
            );
            cells
        })
        .collect();

    table(&headers, &rows)
}

fn dataset_line(stats: &DatasetStats) -> String {
    format!(
        "Dataset: {} lotteries across {} cities, {} applicants, {} units",
        stats.lotteries,
        stats.cities,
        group_thousands(stats.total_applicants),
        group_thousands(stats.total_houses)
    )
}

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "No data available.\n".to_string();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
