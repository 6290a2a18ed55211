//! Trading performance dashboard: stat cards, the monthly export area
//! chart and the product distribution donut, drawn as plain SVG.

use dioxus::prelude::*;

use globalex_content::dashboard::{
    area_path, donut_slice_path, mix_fractions, polyline_points, StatFigure, Trend, EXPORT_VOLUME,
    PRODUCT_MIX, STAT_FIGURES,
};

use super::icons::{self, Icon};

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 200.0;

#[component]
pub fn Dashboard() -> Element {
    let tons: Vec<f64> = EXPORT_VOLUME.iter().map(|m| m.tons).collect();
    let area = area_path(&tons, CHART_WIDTH, CHART_HEIGHT);
    let line = polyline_points(&tons, CHART_WIDTH, CHART_HEIGHT);

    let gridlines = (1..4).map(|tick| {
        let y = CHART_HEIGHT * f64::from(tick) / 4.0;
        rsx! {
            line {
                key: "{tick}",
                x1: "0",
                y1: "{y}",
                x2: "{CHART_WIDTH}",
                y2: "{y}",
                stroke: "#27272a",
                stroke_dasharray: "3 3",
            }
        }
    });

    let month_step = CHART_WIDTH / (EXPORT_VOLUME.len() - 1) as f64;
    let month_labels = EXPORT_VOLUME.iter().enumerate().map(|(index, month)| {
        let x = index as f64 * month_step;
        rsx! {
            text {
                key: "{month.month}",
                x: "{x}",
                y: "{CHART_HEIGHT + 28.0}",
                fill: "#71717a",
                font_size: "14",
                text_anchor: "middle",
                "{month.month}"
            }
        }
    });

    let stat_icons = [icons::PACKAGE, icons::ANCHOR, icons::GLOBE, icons::DOLLAR_SIGN];

    let donut_slices = PRODUCT_MIX
        .iter()
        .zip(mix_fractions(&PRODUCT_MIX))
        .map(|(share, (start, end))| {
            let d = donut_slice_path(144.0, 144.0, 90.0, 70.0, start, end);
            rsx! {
                path { key: "{share.name}", d: "{d}", fill: "{share.color}" }
            }
        });

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 space-y-12 bg-zinc-950 min-h-screen",
            div {
                h2 { class: "text-4xl font-bold text-white", "Trading Performance" }
                p { class: "mt-3 text-xl text-zinc-400",
                    "Real-time export data and logistics overview."
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
                for (figure, icon) in STAT_FIGURES.iter().zip(stat_icons) {
                    StatCard { key: "{figure.title}", figure, icon }
                }
            }

            div { class: "grid grid-cols-1 lg:grid-cols-3 gap-10",
                div { class: "lg:col-span-2 bg-zinc-900/50 p-8 rounded-2xl border border-zinc-800",
                    div { class: "flex items-center justify-between mb-8",
                        div {
                            h3 { class: "text-2xl font-bold text-white", "Monthly Export Volume" }
                            p { class: "text-base text-zinc-400 mt-1", "Metric tons per month" }
                        }
                    }
                    div { class: "w-full",
                        svg {
                            class: "w-full h-96",
                            view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT + 40.0}",
                            preserve_aspect_ratio: "none",
                            defs {
                                linearGradient {
                                    id: "export-volume-fill",
                                    x1: "0",
                                    y1: "0",
                                    x2: "0",
                                    y2: "1",
                                    stop {
                                        offset: "5%",
                                        stop_color: "#10b981",
                                        stop_opacity: "0.2",
                                    }
                                    stop {
                                        offset: "95%",
                                        stop_color: "#10b981",
                                        stop_opacity: "0",
                                    }
                                }
                            }
                            {gridlines}
                            path { d: "{area}", fill: "url(#export-volume-fill)" }
                            polyline {
                                points: "{line}",
                                fill: "none",
                                stroke: "#10b981",
                                stroke_width: "3",
                            }
                            {month_labels}
                        }
                    }
                }

                div { class: "bg-zinc-900/50 p-8 rounded-2xl border border-zinc-800",
                    div { class: "mb-8",
                        h3 { class: "text-2xl font-bold text-white", "Product Distribution" }
                        p { class: "text-base text-zinc-400 mt-1", "Export share by wood type" }
                    }
                    div { class: "h-72 w-full relative",
                        svg { class: "w-full h-full", view_box: "0 0 288 288", {donut_slices} }
                        div { class: "absolute inset-0 flex flex-col items-center justify-center pointer-events-none",
                            span { class: "text-4xl font-bold text-white", "100%" }
                        }
                    }
                    div { class: "mt-6 space-y-4",
                        for share in PRODUCT_MIX.iter() {
                            div {
                                key: "{share.name}",
                                class: "flex items-center justify-between text-base",
                                div { class: "flex items-center",
                                    span {
                                        class: "w-4 h-4 rounded-full mr-3",
                                        style: "background-color: {share.color}",
                                    }
                                    span { class: "text-zinc-300", "{share.name}" }
                                }
                                span { class: "font-semibold text-white", "{share.percent}%" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(figure: &'static StatFigure, icon: &'static str) -> Element {
    let (trend_icon, trend_class) = match figure.trend {
        Trend::Up => (icons::TRENDING_UP, "text-emerald-500"),
        Trend::Down => (icons::TRENDING_DOWN, "text-rose-500"),
        Trend::Flat => (icons::TRENDING_UP, "text-zinc-400"),
    };

    rsx! {
        div { class: "bg-zinc-900/50 p-8 rounded-2xl border border-zinc-800 hover:border-zinc-700 transition-all",
            div { class: "flex justify-between items-start",
                div {
                    p { class: "text-base font-medium text-zinc-400", "{figure.title}" }
                    h3 { class: "mt-3 text-4xl font-bold text-white", "{figure.value}" }
                }
                div { class: "p-4 rounded-xl bg-zinc-800 text-emerald-500",
                    Icon { d: icon, size: 28 }
                }
            }
            div { class: "mt-6 flex items-center",
                Icon { d: trend_icon, size: 20, class: "{trend_class} mr-2" }
                span { class: "text-base font-medium {trend_class}", "{figure.change}" }
                span { class: "text-base text-zinc-500 ml-3", "vs last month" }
            }
        }
    }
}
