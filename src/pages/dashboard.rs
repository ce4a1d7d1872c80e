//! Dashboard page: filters, KPI cards, charts, anomalies, recommendations

use maud::{html, Markup};

use super::charts::{area_chart, bar_chart, line_chart, pie_chart};
use crate::derived::DerivedMetrics;
use crate::fixtures::{catalog, FixtureBundle};
use crate::routes::{ANOMALIES_ANCHOR, RECOMMENDATIONS_ANCHOR};
use crate::view::{DashboardView, Filters};

fn select(
    name: &str,
    placeholder: &str,
    options: &[(&str, &str)],
    selected: Option<&str>,
) -> Markup {
    html! {
        select name=(name) aria-label=(placeholder) {
            option value="" { (placeholder) }
            @for (value, label) in options {
                option value=(value) selected[selected == Some(*value)] { (label) }
            }
        }
    }
}

fn filters_section(filters: &Filters, bundle: &FixtureBundle) -> Markup {
    let services: Vec<(&str, &str)> = bundle
        .by_service
        .iter()
        .map(|s| (s.service.as_str(), s.service.as_str()))
        .collect();

    html! {
        form aria-label="Filters" class="grid cols-4" method="get" action="/" {
            (select(
                "subscription",
                "Subscription",
                &catalog::SUBSCRIPTIONS,
                filters.subscription.as_deref(),
            ))
            (select(
                "rg",
                "Resource group",
                &catalog::RESOURCE_GROUPS,
                filters.resource_group.as_deref(),
            ))
            (select("region", "Region", &catalog::REGIONS, filters.region.as_deref()))
            (select("service", "Service", &services, filters.service.as_deref()))
            noscript { button type="submit" { "Apply" } }
        }
    }
}

fn kpi_card(id: &str, heading: &str, body: Markup) -> Markup {
    html! {
        div.card aria-labelledby=(id) {
            h3 id=(id) { (heading) }
            div.row { (body) }
        }
    }
}

fn kpi_section(metrics: &DerivedMetrics) -> Markup {
    let total = html! {
        div.kpi { (metrics.total30_display()) }
        div.muted { "Avg daily $" (metrics.avg_daily) }
    };
    let forecast = html! {
        div.kpi { "$" (metrics.forecast_next7) }
        div.impact { "\u{2197} steady" }
    };
    let alerts = html! {
        div { "\u{26a0} " (metrics.anomaly_count) " anomalies" }
        div { "\u{1f4a1} " (metrics.recommendation_count) " recs" }
    };

    html! {
        section class="grid cols-3" {
            (kpi_card("kpi-total", "30-day Spend", total))
            (kpi_card("kpi-forecast", "Next 7d Forecast", forecast))
            (kpi_card("kpi-alerts", "Alerts & Recs", alerts))
        }
    }
}

fn charts_section(bundle: &FixtureBundle) -> Markup {
    html! {
        section class="grid cols-5" {
            div class="card span-3" aria-labelledby="forecast-title" {
                h3 id="forecast-title" { "Forecast vs Actual" }
                (area_chart(&bundle.days, 256.0, "Actual daily spend"))
                (line_chart(&bundle.forecast, 160.0, "Forecast daily spend"))
            }
            div class="card span-2" aria-labelledby="service-title" {
                h3 id="service-title" { "Cost by Service" }
                (bar_chart(&bundle.by_service, 320.0, "Cost by service"))
            }
        }
    }
}

fn anomalies_section(bundle: &FixtureBundle) -> Markup {
    html! {
        section id=(ANOMALIES_ANCHOR) class="grid cols-5" {
            div class="card span-3" aria-labelledby="drivers-title" {
                h3 id="drivers-title" { "Top 5 Cost Drivers" }
                (pie_chart(&bundle.by_service, "Top 5 cost drivers"))
            }
            div class="card span-2 grid" aria-labelledby="anomaly-title" {
                h3 id="anomaly-title" { "Daily Anomalies" }
                @for anomaly in &bundle.anomalies {
                    div.item {
                        div {
                            div { strong { (anomaly.service) } }
                            div class="muted small" {
                                (anomaly.date) " \u{2022} +" (anomaly.delta) "%"
                            }
                        }
                        button type="button" { "Investigate" }
                    }
                }
            }
        }
    }
}

fn recommendations_section(bundle: &FixtureBundle) -> Markup {
    html! {
        section id=(RECOMMENDATIONS_ANCHOR) {
            div.card aria-labelledby="recs-title" {
                h3 id="recs-title" { "Savings Recommendations" }
                div class="grid cols-3" {
                    @for rec in &bundle.recs {
                        div.item {
                            div {
                                div { strong { (rec.title) } }
                                div class="muted small" { "Area: " (rec.category) }
                            }
                            div.impact { "-$" (rec.impact) "/mo" }
                        }
                    }
                }
            }
        }
    }
}

pub fn render(view: &DashboardView) -> Markup {
    let bundle = view.bundle();
    let metrics = view.metrics();

    html! {
        div.container {
            header {
                h1.page-title { (view.title()) }
                p.muted { "Real-time costs, AI forecasts, anomalies, and optimization insights." }
            }
            (filters_section(view.filters(), bundle))
            (kpi_section(&metrics))
            (charts_section(bundle))
            (anomalies_section(bundle))
            (recommendations_section(bundle))
        }
    }
}
