//! Placeholder pages and the 404 page

use maud::{html, Markup};

fn placeholder(title: &str, description: &str) -> Markup {
    html! {
        div class="container narrow" {
            h1.page-title { (title) }
            p.muted { (description) }
        }
    }
}

pub fn budgets() -> Markup {
    placeholder(
        "Budgets",
        "Integrate Azure Budgets to enforce spend thresholds and trigger proactive alerts. \
         This UI will surface budget status and alerts per subscription/resource group.",
    )
}

pub fn reports() -> Markup {
    placeholder(
        "Reports",
        "Export monthly cost reports, service breakdowns, and variance analysis. \
         Coming soon with CSV/PDF exports.",
    )
}

pub fn settings() -> Markup {
    placeholder(
        "Settings",
        "Connect your Azure tenant and configure data ingestion, RBAC roles, and alert channels. \
         In production, this will authenticate via Azure AD and call your Functions backend.",
    )
}

pub fn not_found(path: &str) -> Markup {
    html! {
        div class="container not-found" {
            h1.page-title { "404" }
            p.muted { "Oops! Page not found" }
            p class="muted small" { "No page at " code { (path) } }
            a href="/" { "Return to Home" }
        }
    }
}
