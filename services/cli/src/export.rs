use housing_lottery::lottery::LotteryReport;
use std::io::Write;
use std::path::Path;

pub(crate) fn write_to_path(path: &Path, report: &LotteryReport) -> Result<(), csv::Error> {
    let writer = std::fs::File::create(path)?;
    write_results(writer, report)
}

/// One row per lottery followed by the overall row for the selected cities.
pub(crate) fn write_results<W: Write>(writer: W, report: &LotteryReport) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(["Name", "City", "P_Win_Lottery"])?;
    for row in &report.lotteries {
        csv_writer.write_record([
            row.name.as_str(),
            row.city.as_str(),
            row.win_probability_label.as_str(),
        ])?;
    }
    csv_writer.write_record([
        "(Overall)",
        report.overall.detail().as_str(),
        report.overall.probability_label.as_str(),
    ])?;

    csv_writer.flush()?;
    Ok(())
}
