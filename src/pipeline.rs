// Orchestration: fetch, pick live or sample data, normalize, render
use crate::analyzer::{average_age_distribution, population_totals};
use crate::config::AppConfig;
use crate::fallback::sample_data;
use crate::fetcher::progress::FETCH_BANNER;
use crate::fetcher::{IndicatorSource, fetch_all};
use crate::model::{
    AgeDistribution, AppError, ColumnarData, DataOrigin, DemographicRecordSet, IndicatorSet,
    RenderError,
};
use crate::normalizer::{normalize, tabulate};
use crate::renderer::{format_summary, render_svg, write_chart};
use tracing::info;

/// Live data is used only when more indicators than this were fetched.
pub const LIVE_DATA_THRESHOLD: usize = 2;

pub struct Report {
    pub origin: DataOrigin,
    pub record_set: DemographicRecordSet,
    pub distribution: AgeDistribution,
    pub svg: String,
}

/// Chooses between the fetched indicators and the built-in sample.
pub fn select_source(indicators: &IndicatorSet) -> (DataOrigin, ColumnarData) {
    if indicators.len() > LIVE_DATA_THRESHOLD {
        (DataOrigin::Live, tabulate(indicators))
    } else {
        (DataOrigin::Sample, sample_data())
    }
}

/// Everything after fetching; no I/O.
pub fn build_report(
    indicators: &IndicatorSet,
    chart_size: (u32, u32),
) -> Result<Report, RenderError> {
    let (origin, data) = select_source(indicators);
    let record_set = normalize(&data);
    let distribution = average_age_distribution(&record_set);
    let svg = render_svg(&record_set, &distribution, origin, chart_size)?;

    Ok(Report {
        origin,
        record_set,
        distribution,
        svg,
    })
}

pub async fn run(source: &dyn IndicatorSource, config: &AppConfig) -> Result<Report, AppError> {
    println!("{}", FETCH_BANNER);
    let indicators = fetch_all(source, &config.countries_param(), &config.year).await?;
    info!("{} of 5 indicators available", indicators.len());

    let report = build_report(&indicators, (config.chart_width, config.chart_height))?;
    println!("{}", report.origin.banner());

    let (male, female) = population_totals(&report.record_set);
    info!(
        "{} countries, population male = {:.1}, female = {:.1}",
        report.record_set.len(),
        male,
        female
    );

    write_chart(&report.svg, &config.output_path)?;
    println!("Chart saved to {}", config.output_path);

    println!(
        "{}",
        format_summary(report.record_set.len(), &report.distribution)
    );

    Ok(report)
}
