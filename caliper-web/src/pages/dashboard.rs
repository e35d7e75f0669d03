//! Demo dashboard exercising the instrumentation

use caliper_common::FontScale;
use caliper_ui::{
    scan_wide_elements, use_layout_probe, use_viewport, BreakpointBadge, ProbeOptions,
    ScrollContainer, WindowSizeBadge,
};
use dioxus::prelude::*;

const COLUMNS: [&str; 9] = [
    "Insurer", "Q1", "Q2", "Q3", "Q4", "YoY", "Loss ratio", "Expense ratio", "Combined",
];

const ROWS: [[&str; 9]; 4] = [
    [
        "Northwind Mutual", "41.2M", "43.8M", "44.1M", "47.9M", "+8.6%", "61.2%", "28.4%", "89.6%",
    ],
    [
        "Atlas General", "38.7M", "37.2M", "39.5M", "40.3M", "+4.1%", "64.8%", "30.1%", "94.9%",
    ],
    [
        "Meridian Casualty", "22.4M", "24.0M", "23.6M", "25.8M", "+15.2%", "58.9%", "27.7%",
        "86.6%",
    ],
    [
        "Harbor Specialty", "12.1M", "12.9M", "13.4M", "14.0M", "+15.7%", "66.3%", "31.9%",
        "98.2%",
    ],
];

#[component]
pub fn Dashboard() -> Element {
    let viewport = use_viewport();
    use_layout_probe(ProbeOptions::default());

    let breakpoint = viewport.breakpoint();
    let fonts = FontScale::for_breakpoint(breakpoint);

    rsx! {
        header { class: "dashboard-header",
            h1 { "Premium volume dashboard" }
            div { class: "dashboard-badges",
                BreakpointBadge { handle: viewport }
                WindowSizeBadge { handle: viewport }
            }
        }

        section { class: "panel-wrapper",
            h2 { class: "panel-title", style: "font-size: {fonts.title}px;",
                "Written premium by insurer"
            }
            ScrollContainer { class: "data-table-wrapper",
                table { class: "data-table",
                    thead {
                        tr {
                            for column in COLUMNS {
                                th { class: "axis-label", style: "font-size: {fonts.axis}px;",
                                    "{column}"
                                }
                            }
                        }
                    }
                    tbody {
                        for row in ROWS {
                            tr {
                                for cell in row {
                                    td { class: "tick-label", style: "font-size: {fonts.tick}px;",
                                        "{cell}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            p { class: "panel-legend", style: "font-size: {fonts.legend}px;",
                "Gross written premium, rolling four quarters. Scroll the table \
                 sideways on narrow windows."
            }
        }

        section { class: "panel-wrapper",
            h2 { class: "panel-title", "Layout tools" }
            button {
                class: "scan-button",
                onclick: move |_| {
                    let hits = scan_wide_elements(700.0);
                    tracing::info!(count = hits.len(), "wide-element scan finished");
                },
                "Scan for wide elements"
            }
        }
    }
}
