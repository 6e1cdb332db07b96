extern crate plotters;

use std::path::Path;
use plotters::prelude::*;
use plotters::coord::Shift;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::RenderConfig;
use crate::visualize::figure::{Curve, Figure};
use crate::visualize::style::DashStyle;
use crate::Float;

const FONT: &str = "sans-serif";
const GRID_COLOR: RGBColor = RGBColor(176, 176, 176);
const FRAME_COLOR: RGBColor = RGBColor(204, 204, 204);
const ANNOTATION_FILL: RGBColor = RGBColor(245, 222, 179);
const TICK_FONT_SIZE: Float = 10.0;
const MARGIN_POINTS: Float = 7.2;

type PixelArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// On/off lengths of each dash pattern, in multiples of the stroke width.
pub fn dash_pattern(dash: DashStyle) -> &'static [Float] {
    match dash {
        DashStyle::Solid => &[],
        DashStyle::Dashed => &[3.7, 1.6],
        DashStyle::DashDot => &[6.4, 1.6, 1.0, 1.6],
        DashStyle::Dotted => &[1.0, 1.65]
    }
}

/// Splits a polyline into the "on" pieces of a repeating dash pattern.
///
/// `pattern` alternates on and off lengths measured along the path and must have an
/// even number of positive entries; anything else draws the polyline unbroken.
pub fn dash_polyline(points: &[(Float, Float)], pattern: &[Float]) -> Vec<Vec<(Float, Float)>> {
    if pattern.is_empty() || pattern.len() % 2 != 0 || pattern.iter().any(|p| !(*p > 0.0)) {
        return vec!(points.to_vec());
    }

    let mut dashes = Vec::new();
    let mut current = Vec::new();
    let mut idx = 0;
    let mut remaining = pattern[0];

    if let Some(&first) = points.first() {
        current.push(first);
    }

    for segment in points.windows(2) {
        let (mut x0, mut y0) = segment[0];
        let (x1, y1) = segment[1];
        let mut length = ((x1-x0).powi(2) + (y1-y0).powi(2)).sqrt();

        while length > remaining {
            let t = remaining/length;
            let split = (x0 + (x1-x0)*t, y0 + (y1-y0)*t);
            current.push(split);
            if idx % 2 == 0 {
                dashes.push(std::mem::take(&mut current));
            }
            x0 = split.0;
            y0 = split.1;
            length -= remaining;
            idx = (idx + 1) % pattern.len();
            remaining = pattern[idx];
        }

        remaining -= length;
        if idx % 2 == 0 {
            current.push((x1, y1));
        }
    }

    if idx % 2 == 0 && current.len() > 1 {
        dashes.push(current);
    }
    dashes
}

fn font_px(config: &RenderConfig, points: Float) -> f64 {
    config.pixels(points) as f64
}

fn line_style(curve: &Curve, config: &RenderConfig) -> ShapeStyle {
    ShapeStyle {
        color: curve.style.color.mix(curve.style.opacity),
        filled: false,
        stroke_width: config.pixels(curve.style.line_width)
    }
}

/// Draws a pixel space polyline with the curve's dash pattern.
fn draw_dashed(area: &PixelArea, points: &[(i32, i32)], dash: DashStyle, style: ShapeStyle) -> Result<(), Box<dyn std::error::Error>> {
    let scale = style.stroke_width.max(1) as Float;
    let pattern = dash_pattern(dash).iter().map(|p| p*scale).collect::<Vec<Float>>();
    let as_float = points.iter().map(|&(x, y)| (x as Float, y as Float)).collect::<Vec<(Float, Float)>>();

    for dash in dash_polyline(&as_float, &pattern) {
        let pixels = dash.iter().map(|&(x, y)| (x.round() as i32, y.round() as i32)).collect::<Vec<(i32, i32)>>();
        area.draw(&PathElement::new(pixels, style))?;
    }
    Ok(())
}

fn draw_title(area: &PixelArea, config: &RenderConfig) -> Result<(), Box<dyn std::error::Error>> {
    let size = font_px(config, config.title_font_size);
    let style = TextStyle::from((FONT, size).into_font().style(FontStyle::Bold)).pos(Pos::new(HPos::Center, VPos::Top));
    let (width, _) = area.dim_in_pixel();
    let line_height = (size*1.25).round() as i32;

    for (i, line) in config.title.iter().enumerate() {
        area.draw_text(line, &style, ((width/2) as i32, i as i32*line_height))?;
    }
    Ok(())
}

/// Two column legend anchored in the upper left corner, filled column by column.
fn draw_legend(area: &PixelArea, curves: &[Curve], config: &RenderConfig) -> Result<(), Box<dyn std::error::Error>> {
    if curves.is_empty() {
        return Ok(());
    }

    let entry_size = font_px(config, config.legend_font_size);
    let title_size = font_px(config, config.legend_title_font_size);
    let entry_font = TextStyle::from((FONT, entry_size).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
    let title_font = TextStyle::from((FONT, title_size).into_font()).pos(Pos::new(HPos::Center, VPos::Top));

    let pad = entry_size.round() as i32;
    let offset = (entry_size*0.5).round() as i32;
    let row_height = (entry_size*1.4).round() as i32;
    let handle = (entry_size*2.0).round() as i32;
    let handle_gap = (entry_size*0.8).round() as i32;
    let column_gap = (entry_size*2.0).round() as i32;
    let title_height = (title_size*1.4).round() as i32;

    let rows = (curves.len() + config.legend_columns - 1)/config.legend_columns;
    let columns = (curves.len() + rows - 1)/rows;

    let mut column_widths = Vec::with_capacity(columns);
    for column in curves.chunks(rows) {
        let mut widest = 0;
        for curve in column {
            widest = widest.max(area.estimate_text_size(&curve.label, &entry_font)?.0 as i32);
        }
        column_widths.push(handle + handle_gap + widest);
    }

    let (title_width, _) = area.estimate_text_size(&config.legend_title, &title_font)?;
    let body_width = column_widths.iter().sum::<i32>() + column_gap*(columns as i32 - 1);
    let width = body_width.max(title_width as i32) + 2*pad;
    let height = title_height + rows as i32*row_height + pad;

    let top_left = (offset, offset);
    let bottom_right = (offset + width, offset + height);
    area.draw(&Rectangle::new([top_left, bottom_right], WHITE.mix(config.legend_opacity).filled()))?;
    area.draw(&Rectangle::new([top_left, bottom_right], FRAME_COLOR.stroke_width(1)))?;
    area.draw_text(&config.legend_title, &title_font, (offset + width/2, offset + pad/2))?;

    let mut x = offset + pad;
    for (column, entries) in curves.chunks(rows).enumerate() {
        for (row, curve) in entries.iter().enumerate() {
            let y = offset + pad/2 + title_height + row as i32*row_height + row_height/2;
            let style = line_style(curve, config);
            draw_dashed(area, &[(x, y), (x + handle, y)], curve.style.dash, style)?;
            area.draw_text(&curve.label, &entry_font, (x + handle + handle_gap, y))?;
        }
        x += column_widths[column] + column_gap;
    }
    Ok(())
}

/// Explanatory text box in the upper right corner.
fn draw_annotation(area: &PixelArea, config: &RenderConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.annotation.is_empty() {
        return Ok(());
    }

    let size = font_px(config, config.annotation_font_size);
    let font = TextStyle::from((FONT, size).into_font()).pos(Pos::new(HPos::Right, VPos::Top));
    let pad = (size*0.5).round() as i32;
    let offset = (size*0.5).round() as i32;
    let line_height = (size*1.3).round() as i32;

    let mut text_width = 0;
    for line in &config.annotation {
        text_width = text_width.max(area.estimate_text_size(line, &font)?.0 as i32);
    }

    let (width, _) = area.dim_in_pixel();
    let right = width as i32 - offset;
    let left = right - text_width - 2*pad;
    let bottom = offset + 2*pad + line_height*config.annotation.len() as i32;

    area.draw(&Rectangle::new([(left, offset), (right, bottom)], ANNOTATION_FILL.mix(config.annotation_opacity).filled()))?;
    area.draw(&Rectangle::new([(left, offset), (right, bottom)], BLACK.mix(config.annotation_opacity).stroke_width(1)))?;
    for (i, line) in config.annotation.iter().enumerate() {
        area.draw_text(line, &font, (right - pad, offset + pad + i as i32*line_height))?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layer {
    Fill(Float),
    Line,
}

/// Every area fill in curve order, then every line in curve order, so no fill
/// tints a line.
pub fn paint_order(curves: &[Curve]) -> Vec<(Layer, &Curve)> {
    let fills = curves.iter().filter_map(|c| c.style.fill_opacity.map(|o| (Layer::Fill(o), c)));
    let lines = curves.iter().map(|c| (Layer::Line, c));
    fills.chain(lines).collect()
}

/// Renders every curve of `figure` with its decorations into a bitmap at `path`.
pub fn draw_figure(figure: &Figure, y_upper: Float, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = &figure.config;
    let (x_min, x_max) = figure.x_range();

    let root = BitMapBackend::new(path, config.pixel_size()).into_drawing_area();
    root.fill(&WHITE)?;

    let margin = config.pixels(MARGIN_POINTS);
    let inner = root.margin(margin, margin, margin, margin);

    let title_size = font_px(config, config.title_font_size);
    let title_height = ((title_size*1.25)*config.title.len() as f64 + title_size*0.8).round() as u32;
    let (title_area, chart_area) = inner.split_vertically(title_height);
    draw_title(&title_area, config)?;

    let tick_size = font_px(config, TICK_FONT_SIZE);
    let axis_size = font_px(config, config.axis_label_font_size);
    let axis_font = (FONT, axis_size).into_font().style(FontStyle::Bold);

    let mut chart = ChartBuilder::on(&chart_area)
        .margin_right(margin)
        .x_label_area_size((tick_size + axis_size*2.2).round() as u32)
        .y_label_area_size((tick_size*3.0 + axis_size*2.2).round() as u32)
        .build_cartesian_2d(x_min..x_max, 0.0..y_upper)?;

    // The grid goes down first so every curve is drawn over it.
    chart
        .configure_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .axis_desc_style(axis_font)
        .label_style((FONT, tick_size))
        .x_labels(8)
        .y_labels(8)
        .y_label_formatter(&|v| format!("{:.2}", v))
        .bold_line_style(GRID_COLOR.mix(config.grid_opacity))
        .light_line_style(TRANSPARENT)
        .draw()?;

    for (layer, curve) in paint_order(figure.curves()) {
        match layer {
            Layer::Fill(fill_opacity) => {
                chart.draw_series(AreaSeries::new(curve.samples.iter().cloned(), 0.0, curve.style.color.mix(fill_opacity)))?;
            },
            Layer::Line => {
                let style = line_style(curve, config);
                match curve.style.dash {
                    DashStyle::Solid => {
                        chart.draw_series(LineSeries::new(curve.samples.iter().cloned(), style))?;
                    },
                    dash => {
                        let pixels = curve.samples.iter().map(|s| chart.backend_coord(s)).collect::<Vec<(i32, i32)>>();
                        draw_dashed(&root, &pixels, dash, style)?;
                    }
                }
            }
        }
    }

    let plot_pixels = chart.plotting_area().strip_coord_spec();
    draw_legend(&plot_pixels, figure.curves(), config)?;
    draw_annotation(&plot_pixels, config)?;

    root.present()?;
    tracing::debug!("drew {} curves into {}", figure.curves().len(), path.display());
    Ok(())
}
