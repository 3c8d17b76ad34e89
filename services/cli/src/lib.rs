mod cli;
mod export;
mod render;
mod report;

use housing_lottery::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
