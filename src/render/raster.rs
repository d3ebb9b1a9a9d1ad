//! Software chart renderer
//!
//! Rasterizes a [`RenderRequest`] straight into an RGBA buffer: grid,
//! axes, series geometry and pie slices. No text is drawn; titles and
//! labels stay with the presentation layer.

use crate::data::{ChartRenderer, ChartSurface, RenderRequest, palette_color};
use crate::types::{ChartKind, Row};
use image::{Rgba, RgbaImage};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const AXIS: Rgba<u8> = Rgba([51, 51, 51, 255]);
const GRID: Rgba<u8> = Rgba([224, 224, 224, 255]);

const PLOT_MARGIN: u32 = 40;
const GRID_LINES: u32 = 5;
const POINT_RADIUS: i64 = 3;

/// A rendered chart held in memory
#[derive(Clone, Debug)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl ChartSurface for RasterSurface {
    fn capture(&self) -> Result<RgbaImage, String> {
        Ok(self.image.clone())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RasterRenderer;

impl RasterRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ChartRenderer for RasterRenderer {
    fn render(&mut self, request: &RenderRequest<'_>) -> Box<dyn ChartSurface> {
        let image = match request.kind {
            ChartKind::Pie => draw_pie(request),
            _ => draw_axes_chart(request),
        };
        tracing::debug!(
            kind = %request.kind,
            width = image.width(),
            height = image.height(),
            rows = request.rows.len(),
            "Rendered chart"
        );
        Box::new(RasterSurface::new(image))
    }
}

/// Parse a `#RRGGBB` palette entry
pub fn parse_hex_color(hex: &str) -> Option<Rgba<u8>> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some(Rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255]))
}

fn series_color(index: usize) -> Rgba<u8> {
    parse_hex_color(palette_color(index)).unwrap_or(AXIS)
}

fn column_values(request: &RenderRequest<'_>, column: Option<&str>) -> Vec<Option<f64>> {
    let index = column.and_then(|name| request.headers.iter().position(|h| h == name));
    request
        .rows
        .iter()
        .map(|row: &Row| index.and_then(|i| row.get(i).as_f64()))
        .collect()
}

/// Maps data space onto the plot rectangle
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    min: f64,
    max: f64,
}

impl PlotArea {
    fn new(image: &RgbaImage, values: &[Option<f64>]) -> Self {
        let margin = PLOT_MARGIN.min(image.width() / 4).min(image.height() / 4) as f64;
        // Zero is always inside the value range so bars have a baseline
        let (min, mut max) = values
            .iter()
            .flatten()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        if (max - min).abs() < f64::EPSILON {
            max = min + 1.0;
        }
        Self {
            left: margin,
            top: margin,
            width: (image.width() as f64 - 2.0 * margin).max(1.0),
            height: (image.height() as f64 - 2.0 * margin).max(1.0),
            min,
            max,
        }
    }

    fn y(&self, value: f64) -> f64 {
        self.top + self.height * (1.0 - (value - self.min) / (self.max - self.min))
    }

    fn baseline(&self) -> f64 {
        self.y(0.0_f64.clamp(self.min, self.max))
    }

    /// Centre of slot `index` out of `count` evenly spaced slots
    fn slot_x(&self, index: usize, count: usize) -> f64 {
        let slot = self.width / count.max(1) as f64;
        self.left + slot * (index as f64 + 0.5)
    }

    fn slot_width(&self, count: usize) -> f64 {
        self.width / count.max(1) as f64
    }
}

/// Series index per row, numbered by first appearance of the category value
fn category_series(request: &RenderRequest<'_>) -> Vec<usize> {
    let Some(index) = request
        .bindings
        .category_column
        .as_deref()
        .and_then(|name| request.headers.iter().position(|h| h == name))
    else {
        return vec![0; request.rows.len()];
    };
    let mut seen: Vec<String> = Vec::new();
    request
        .rows
        .iter()
        .map(|row| {
            let key = row.get(index).to_string();
            match seen.iter().position(|k| *k == key) {
                Some(series) => series,
                None => {
                    seen.push(key);
                    seen.len() - 1
                }
            }
        })
        .collect()
}

fn draw_axes_chart(request: &RenderRequest<'_>) -> RgbaImage {
    let (width, height) = (request.display.width, request.display.height);
    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);
    let values = column_values(request, request.bindings.y_column.as_deref());
    let series = category_series(request);
    let plot = PlotArea::new(&image, &values);

    if request.display.show_grid {
        for step in 0..=GRID_LINES {
            let y = plot.top + plot.height * step as f64 / GRID_LINES as f64;
            draw_line(&mut image, (plot.left, y), (plot.left + plot.width, y), GRID);
        }
    }

    let count = values.len();
    match request.kind {
        ChartKind::Bar => {
            let bar_width = (plot.slot_width(count) * 0.8).max(1.0);
            for (i, value) in values.iter().enumerate() {
                if let Some(v) = value {
                    let x = plot.slot_x(i, count) - bar_width / 2.0;
                    let (top, bottom) = ordered(plot.y(*v), plot.baseline());
                    let color = series_color(series[i]);
                    fill_rect(&mut image, x, top, bar_width, bottom - top, color);
                }
            }
        }
        ChartKind::Line | ChartKind::Area => {
            let series_count = series.iter().max().map_or(0, |m| m + 1);
            for current in 0..series_count {
                let color = series_color(current);
                let points: Vec<(f64, f64)> = values
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| series[*i] == current)
                    .filter_map(|(i, v)| v.map(|v| (plot.slot_x(i, count), plot.y(v))))
                    .collect();
                if request.kind == ChartKind::Area {
                    let mut fill = color;
                    fill.0[3] = 96;
                    for pair in points.windows(2) {
                        fill_under(&mut image, pair[0], pair[1], plot.baseline(), fill);
                    }
                }
                for pair in points.windows(2) {
                    draw_line(&mut image, pair[0], pair[1], color);
                }
            }
        }
        ChartKind::Scatter => {
            let xs = column_values(request, request.bindings.x_column.as_deref());
            let numeric_x = xs.iter().any(Option::is_some);
            let (x_min, x_max) = xs
                .iter()
                .flatten()
                .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
            let span = if x_max > x_min { x_max - x_min } else { 1.0 };

            for (i, value) in values.iter().enumerate() {
                let x = match (numeric_x, xs[i]) {
                    (true, Some(x)) => plot.left + plot.width * (x - x_min) / span,
                    (true, None) => continue,
                    (false, _) => plot.slot_x(i, count),
                };
                if let Some(v) = value {
                    draw_point(&mut image, x, plot.y(*v), series_color(series[i]));
                }
            }
        }
        ChartKind::Pie => {}
    }

    let bottom = plot.top + plot.height;
    draw_line(&mut image, (plot.left, plot.top), (plot.left, bottom), AXIS);
    draw_line(&mut image, (plot.left, bottom), (plot.left + plot.width, bottom), AXIS);
    image
}

fn draw_pie(request: &RenderRequest<'_>) -> RgbaImage {
    let Some(pie) = request.pie.as_ref() else {
        return RgbaImage::from_pixel(request.display.width, request.display.height, BACKGROUND);
    };
    let mut image = RgbaImage::from_pixel(pie.width, pie.height, BACKGROUND);

    let values: Vec<f64> = column_values(request, pie.value_column.as_deref())
        .into_iter()
        .map(|v| v.filter(|v| *v > 0.0).unwrap_or(0.0))
        .collect();
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return image;
    }

    // Cumulative slice boundaries as fractions of a full turn
    let mut bounds = Vec::with_capacity(values.len());
    let mut acc = 0.0;
    for v in &values {
        acc += v / total;
        bounds.push(acc);
    }

    let cx = pie.width as f64 / 2.0;
    let cy = pie.height as f64 / 2.0;
    let radius = (pie.outer_radius as f64).min(cx).min(cy);

    for (px, py, pixel) in image.enumerate_pixels_mut() {
        let dx = px as f64 + 0.5 - cx;
        let dy = py as f64 + 0.5 - cy;
        if dx * dx + dy * dy > radius * radius {
            continue;
        }
        // Clockwise from twelve o'clock
        let turn = (dx.atan2(-dy) / std::f64::consts::TAU).rem_euclid(1.0);
        let slice = bounds.partition_point(|b| *b <= turn).min(bounds.len() - 1);
        *pixel = series_color(slice);
    }
    image
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

fn put(image: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return;
    }
    let pixel = image.get_pixel_mut(x as u32, y as u32);
    if color.0[3] == 255 {
        *pixel = color;
        return;
    }
    let alpha = color.0[3] as f64 / 255.0;
    for c in 0..3 {
        pixel.0[c] = (color.0[c] as f64 * alpha + pixel.0[c] as f64 * (1.0 - alpha)).round() as u8;
    }
}

fn fill_rect(image: &mut RgbaImage, x: f64, y: f64, width: f64, height: f64, color: Rgba<u8>) {
    let (x0, y0) = (x.round() as i64, y.round() as i64);
    let (x1, y1) = ((x + width).round() as i64, (y + height).round() as i64);
    for py in y0..y1.max(y0 + 1) {
        for px in x0..x1.max(x0 + 1) {
            put(image, px, py, color);
        }
    }
}

fn draw_line(image: &mut RgbaImage, from: (f64, f64), to: (f64, f64), color: Rgba<u8>) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).ceil().max(1.0) as i64;
    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let x = from.0 + (to.0 - from.0) * t;
        let y = from.1 + (to.1 - from.1) * t;
        put(image, x.round() as i64, y.round() as i64, color);
    }
}

fn fill_under(
    image: &mut RgbaImage,
    from: (f64, f64),
    to: (f64, f64),
    baseline: f64,
    color: Rgba<u8>,
) {
    let (x0, x1) = (from.0.round() as i64, to.0.round() as i64);
    for px in x0..x1 {
        let t = (px as f64 - from.0) / (to.0 - from.0).max(f64::EPSILON);
        let y = from.1 + (to.1 - from.1) * t;
        let (top, bottom) = ordered(y, baseline);
        for py in top.round() as i64..bottom.round() as i64 {
            put(image, px, py, color);
        }
    }
}

fn draw_point(image: &mut RgbaImage, x: f64, y: f64, color: Rgba<u8>) {
    let (cx, cy) = (x.round() as i64, y.round() as i64);
    for dy in -POINT_RADIUS..=POINT_RADIUS {
        for dx in -POINT_RADIUS..=POINT_RADIUS {
            if dx * dx + dy * dy <= POINT_RADIUS * POINT_RADIUS {
                put(image, cx + dx, cy + dy, color);
            }
        }
    }
}
