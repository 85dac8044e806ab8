//! Chart Section Component
//!
//! "Health Overview" bar chart of a report's insights, drawn on an HTML5
//! canvas. One bar per chart point, in order.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use medscan::render::NO_DATA;
use medscan::ChartPoint;

const TITLE: &str = "Health Overview";
const BAR_COLOR: &str = "rgba(26, 26, 26, 0.8)";
const AXIS_COLOR: &str = "#6b7280";

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Bar chart component
#[component]
pub fn ChartSection(
    #[prop(into)]
    points: Signal<Vec<ChartPoint>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the selected report changes
    create_effect(move |_| {
        let points = points.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &points);
        }
    });

    view! {
        <section class="bg-white/80 rounded-3xl border border-white/60 shadow p-6">
            <canvas
                node_ref=canvas_ref
                width="600"
                height="320"
                class="w-full h-60"
            />
        </section>
    }
}

/// Pixel rectangle of one bar
#[derive(Debug, Clone, PartialEq)]
struct Bar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Lay bars out in a `width` x `height` canvas, scaled from zero to the
/// largest value
fn layout_bars(points: &[ChartPoint], width: f64, height: f64) -> Vec<Bar> {
    if points.is_empty() {
        return Vec::new();
    }

    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    let slot = plot_width / points.len() as f64;
    let bar_width = slot * 0.6;
    let baseline = MARGIN_TOP + plot_height;

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let h = if max > 0.0 {
                (point.value.max(0.0) / max) * plot_height
            } else {
                0.0
            };
            Bar {
                x: MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0,
                y: baseline - h,
                width: bar_width,
                height: h,
            }
        })
        .collect()
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, points: &[ChartPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    // Title
    ctx.set_fill_style(&"#1a1a1a".into());
    ctx.set_font("bold 16px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(TITLE, width / 2.0, 24.0);

    if points.is_empty() {
        ctx.set_fill_style(&AXIS_COLOR.into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text(NO_DATA, width / 2.0, height / 2.0);
        return;
    }

    let bars = layout_bars(points, width, height);

    // Baseline
    let baseline = height - MARGIN_BOTTOM;
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(MARGIN_LEFT, baseline);
    ctx.line_to(width - MARGIN_RIGHT, baseline);
    ctx.stroke();

    ctx.set_font("12px sans-serif");
    for (bar, point) in bars.iter().zip(points) {
        ctx.set_fill_style(&BAR_COLOR.into());
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);

        ctx.set_fill_style(&AXIS_COLOR.into());
        let center = bar.x + bar.width / 2.0;
        let _ = ctx.fill_text(&format_value(point.value), center, bar.y - 6.0);
        let _ = ctx.fill_text(&point.label, center, baseline + 18.0);
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, value: f64) -> ChartPoint {
        ChartPoint {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn test_layout_empty() {
        assert!(layout_bars(&[], 600.0, 320.0).is_empty());
    }

    #[test]
    fn test_layout_scales_to_max() {
        let bars = layout_bars(&[point("A", 50.0), point("B", 25.0)], 600.0, 320.0);
        let plot_height = 320.0 - MARGIN_TOP - MARGIN_BOTTOM;

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].height, plot_height);
        assert_eq!(bars[1].height, plot_height / 2.0);
        assert_eq!(bars[0].y + bars[0].height, bars[1].y + bars[1].height);
        assert!(bars[0].x < bars[1].x);
    }

    #[test]
    fn test_layout_all_zero() {
        let bars = layout_bars(&[point("A", 0.0)], 600.0, 320.0);
        assert_eq!(bars[0].height, 0.0);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(20.0), "20");
        assert_eq!(format_value(13.5), "13.5");
    }
}
