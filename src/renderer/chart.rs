// SVG figure: gender bars per country and the average age distribution
use crate::analyzer::max_population;
use crate::model::{AgeDistribution, DataOrigin, DemographicRecordSet, RenderError};
use crate::utils::shorten_label;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, FontTransform};
use plotters::style::text_anchor::{HPos, Pos, VPos};

const MALE_COLOR: RGBColor = RGBColor(173, 216, 230);
const FEMALE_COLOR: RGBColor = RGBColor(255, 182, 193);
const AGE_COLORS: [RGBColor; 3] = [
    RGBColor(144, 238, 144),
    RGBColor(255, 165, 0),
    RGBColor(240, 128, 128),
];
const BAR_ALPHA: f64 = 0.8;
/// Width of one gender bar as a fraction of a country slot.
const BAR_WIDTH: f64 = 0.35;

pub const AGE_CATEGORIES: [&str; 3] = ["0-14 years", "15-64 years", "65+ years"];

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

fn drawing_error<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Drawing(e.to_string())
}

fn title_font() -> FontDesc<'static> {
    ("sans-serif", 22).into_font().style(FontStyle::Bold)
}

/// Renders both panels side by side and returns the SVG document.
pub fn render_svg(
    set: &DemographicRecordSet,
    distribution: &AgeDistribution,
    origin: DataOrigin,
    size: (u32, u32),
) -> Result<String, RenderError> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let panels = root.split_evenly((1, 2));
        draw_gender_panel(&panels[0], set, origin)?;
        draw_age_panel(&panels[1], distribution)?;

        root.present().map_err(drawing_error)?;
    }
    Ok(buffer)
}

fn draw_gender_panel(
    area: &Panel<'_>,
    set: &DemographicRecordSet,
    origin: DataOrigin,
) -> Result<(), RenderError> {
    let labels: Vec<String> = set
        .records
        .iter()
        .map(|r| shorten_label(&r.country))
        .collect();
    let slots = labels.len().max(1);
    let y_max = max_population(set).max(1.0) * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption("Gender Distribution by Country", title_font())
        .margin(15)
        .x_label_area_size(130)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5f64..(slots as f64 - 0.5), 0f64..y_max)
        .map_err(drawing_error)?;

    // quarter turns are the only rotations the backend offers
    let tick_style = TextStyle::from(("sans-serif", 13).into_font())
        .transform(FontTransform::Rotate270)
        .pos(Pos::new(HPos::Right, VPos::Center));
    let label_at = |x: &f64| slot_label(&labels, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&label_at)
        .x_label_style(tick_style)
        .x_desc("Countries")
        .y_desc(origin.population_axis())
        .draw()
        .map_err(drawing_error)?;

    chart
        .draw_series(set.records.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            Rectangle::new(
                [(x - BAR_WIDTH, 0.0), (x, r.male_population)],
                MALE_COLOR.mix(BAR_ALPHA).filled(),
            )
        }))
        .map_err(drawing_error)?
        .label("Male")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], MALE_COLOR.filled()));

    chart
        .draw_series(set.records.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            Rectangle::new(
                [(x, 0.0), (x + BAR_WIDTH, r.female_population)],
                FEMALE_COLOR.mix(BAR_ALPHA).filled(),
            )
        }))
        .map_err(drawing_error)?
        .label("Female")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], FEMALE_COLOR.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(drawing_error)?;

    Ok(())
}

fn draw_age_panel(area: &Panel<'_>, distribution: &AgeDistribution) -> Result<(), RenderError> {
    let averages = [
        distribution.children,
        distribution.working_age,
        distribution.elderly,
    ];
    let y_max = averages.iter().copied().fold(0.0, f64::max).max(1.0) * 1.15;

    let mut chart = ChartBuilder::on(area)
        .caption("Global Age Distribution", title_font())
        .margin(15)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..2.5f64, 0f64..y_max)
        .map_err(drawing_error)?;

    let categories: Vec<String> = AGE_CATEGORIES.iter().map(|c| c.to_string()).collect();
    let label_at = |x: &f64| slot_label(&categories, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(AGE_CATEGORIES.len())
        .x_label_formatter(&label_at)
        .y_desc("Average Percentage")
        .draw()
        .map_err(drawing_error)?;

    chart
        .draw_series(averages.iter().zip(AGE_COLORS).enumerate().map(|(i, (&v, color))| {
            let x = i as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, v)], color.mix(BAR_ALPHA).filled())
        }))
        .map_err(drawing_error)?;

    let value_style = TextStyle::from(("sans-serif", 15).into_font().style(FontStyle::Bold))
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(averages.iter().enumerate().map(|(i, &v)| {
            Text::new(format!("{:.1}%", v), (i as f64, v + 0.5), value_style.clone())
        }))
        .map_err(drawing_error)?;

    Ok(())
}

/// Label for a tick at `x`: the label of the slot when `x` sits on a slot
/// centre, empty otherwise.
fn slot_label(labels: &[String], x: f64) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    labels.get(slot as usize).cloned().unwrap_or_default()
}
