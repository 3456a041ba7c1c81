use crate::shared::number_format::format_usd;
use leptos::prelude::*;

const BAR_WIDTH: f64 = 72.0;
const BAR_GAP: f64 = 24.0;
const LABEL_AREA: f64 = 44.0;

/// Максимальное значение среди столбцов
pub fn max_value(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .fold(None, |acc: Option<f64>, v| match acc {
            Some(current) if current >= v => Some(current),
            _ => Some(v),
        })
}

/// Высоты столбцов в пикселях, пропорционально максимуму
///
/// Нулевой или отрицательный максимум даёт нулевые высоты.
pub fn bar_heights(values: &[f64], max_height: f64) -> Vec<f64> {
    let max = max_value(values).unwrap_or(0.0);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| (v.max(0.0) / max) * max_height)
        .collect()
}

/// Столбчатая диаграмма выручки по регионам (inline SVG)
///
/// Столбец с максимальным значением выделяется отдельным цветом.
#[component]
pub fn BarChart(
    /// (label, value) pairs, one bar each
    data: Vec<(String, f64)>,
    /// Высота области столбцов в пикселях
    #[prop(optional, default = 240.0)]
    height: f64,
) -> impl IntoView {
    let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
    let heights = bar_heights(&values, height);
    let max = max_value(&values).unwrap_or(0.0);

    let total_width = data.len() as f64 * (BAR_WIDTH + BAR_GAP);
    let total_height = height + LABEL_AREA;

    let bars = data
        .iter()
        .zip(heights.iter())
        .enumerate()
        .map(|(i, ((label, value), bar_height))| {
            let x = i as f64 * (BAR_WIDTH + BAR_GAP) + BAR_GAP / 2.0;
            let y = 20.0 + height - bar_height;
            let bar_class = if *value == max {
                "bar-chart__bar bar-chart__bar--max"
            } else {
                "bar-chart__bar"
            };
            let center = x + BAR_WIDTH / 2.0;

            view! {
                <g>
                    <rect
                        class=bar_class
                        x=x.to_string()
                        y=y.to_string()
                        width=BAR_WIDTH.to_string()
                        height=bar_height.to_string()
                        rx="3"
                    />
                    <text class="bar-chart__value" x=center.to_string() y=(y - 6.0).to_string() text-anchor="middle">
                        {format_usd(*value)}
                    </text>
                    <text
                        class="bar-chart__label"
                        x=center.to_string()
                        y=(20.0 + height + 18.0).to_string()
                        text-anchor="middle"
                    >
                        {label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            class="bar-chart"
            viewBox=format!("0 0 {} {}", total_width, total_height + 20.0)
            preserveAspectRatio="xMidYMid meet"
        >
            {bars}
        </svg>
    }
}
