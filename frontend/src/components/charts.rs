//! Dashboard charts, rendered as plain SVG and daisyUI progress bars.
//!
//! The geometry lives in [`donut_segments`] so the slice math stays
//! testable off-browser; the components only paint.

use leptos::prelude::*;
use sweetcrust_shared::{ProductCount, StatusCount};

const SLICE_COLORS: [&str; 4] = ["#FF6F61", "#6B5B95", "#88B04B", "#FFA500"];

// Radius chosen so the circle's circumference is 100: dash lengths are
// then percentages directly.
const DONUT_RADIUS: f64 = 15.915;

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub label: String,
    pub count: u64,
    /// Share of the whole, 0..=100.
    pub percent: f64,
    /// Where this slice starts, in cumulative percent.
    pub offset: f64,
    pub color: &'static str,
}

/// Turns per-status counts into donut slices. Empty when there is nothing
/// to draw (all-zero input included).
pub fn donut_segments(data: &[StatusCount]) -> Vec<DonutSegment> {
    let total: u64 = data.iter().map(|row| row.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut offset = 0.0;
    data.iter()
        .filter(|row| row.count > 0)
        .enumerate()
        .map(|(i, row)| {
            let percent = row.count as f64 * 100.0 / total as f64;
            let segment = DonutSegment {
                label: row.order_status.to_string(),
                count: row.count,
                percent,
                offset,
                color: SLICE_COLORS[i % SLICE_COLORS.len()],
            };
            offset += percent;
            segment
        })
        .collect()
}

/// Orders-by-status donut with a legend.
#[component]
pub fn StatusDonut(data: Vec<StatusCount>) -> impl IntoView {
    let segments = donut_segments(&data);

    if segments.is_empty() {
        return view! {
            <div class="text-center py-8 text-base-content/50">"No orders yet."</div>
        }
        .into_any();
    }

    let legend = segments.clone();
    view! {
        <div class="flex flex-col items-center gap-4">
            <svg viewBox="0 0 42 42" class="w-48 h-48">
                {segments
                    .into_iter()
                    .map(|seg| {
                        // SVG dash circles start at 3 o'clock; the quarter-turn
                        // offset puts the first slice at 12 o'clock.
                        let dasharray = format!("{:.3} {:.3}", seg.percent, 100.0 - seg.percent);
                        let dashoffset = format!("{:.3}", 25.0 - seg.offset);
                        view! {
                            <circle
                                cx="21"
                                cy="21"
                                r=DONUT_RADIUS
                                fill="none"
                                stroke=seg.color
                                stroke-width="6"
                                stroke-dasharray=dasharray
                                stroke-dashoffset=dashoffset
                            />
                        }
                    })
                    .collect_view()}
            </svg>
            <div class="flex flex-wrap justify-center gap-4">
                {legend
                    .into_iter()
                    .map(|seg| {
                        view! {
                            <div class="flex items-center gap-2 text-sm">
                                <span
                                    class="inline-block w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", seg.color)
                                ></span>
                                <span>{seg.label} " (" {seg.count} ")"</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

/// Top-products ranking as horizontal bars.
#[component]
pub fn TopProductsChart(data: Vec<ProductCount>) -> impl IntoView {
    if data.is_empty() {
        return view! {
            <div class="text-center py-8 text-base-content/50">"No products yet."</div>
        }
        .into_any();
    }

    let max = data.iter().map(|row| row.count).max().unwrap_or(1).max(1);
    view! {
        <div class="flex flex-col gap-3">
            {data
                .into_iter()
                .map(|row| {
                    view! {
                        <div class="flex items-center gap-3">
                            <span class="w-32 truncate text-sm">{row.product_ordered}</span>
                            <progress
                                class="progress progress-primary flex-1"
                                value=row.count.to_string()
                                max=max.to_string()
                            ></progress>
                            <span class="w-8 text-right text-sm font-bold">{row.count}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweetcrust_shared::OrderStatus;

    fn counts(pending: u64, completed: u64) -> Vec<StatusCount> {
        vec![
            StatusCount {
                order_status: OrderStatus::Pending,
                count: pending,
            },
            StatusCount {
                order_status: OrderStatus::Completed,
                count: completed,
            },
        ]
    }

    #[test]
    fn segments_cover_the_full_circle() {
        let segments = donut_segments(&counts(3, 1));
        let total: f64 = segments.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-6);
        assert!((segments[0].percent - 75.0).abs() < 1e-6);
        assert_eq!(segments[0].offset, 0.0);
        assert!((segments[1].offset - 75.0).abs() < 1e-6);
    }

    #[test]
    fn zero_count_rows_are_dropped() {
        let segments = donut_segments(&counts(5, 0));
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].label, "Pending");
    }

    #[test]
    fn all_zero_input_draws_nothing() {
        assert!(donut_segments(&counts(0, 0)).is_empty());
        assert!(donut_segments(&[]).is_empty());
    }
}
