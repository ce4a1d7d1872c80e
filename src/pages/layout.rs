//! Page shell: document head, sidebar and top bar

use maud::{html, Markup, DOCTYPE};

use crate::routes::{normalize_path, Navigation};
use crate::view::DashboardView;

const STYLE: &str = r#"
:root{--bg:#f8fafc;--fg:#0f172a;--muted:#64748b;--border:#e2e8f0;--primary:hsl(211 100% 45%);--destructive:#dc2626}
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,Segoe UI,sans-serif;background:var(--bg);color:var(--fg)}
a{color:inherit}
.shell{display:flex;min-height:100vh;width:100%}
.sidebar{width:15rem;border-right:1px solid var(--border);background:#fff;padding:1rem .75rem}
.sidebar h2{font-size:.7rem;text-transform:uppercase;letter-spacing:.05em;color:var(--muted);margin:1rem .5rem .5rem}
.sidebar ul{list-style:none;margin:0;padding:0}
.sidebar a{display:flex;gap:.5rem;padding:.45rem .5rem;border-radius:.375rem;text-decoration:none;font-size:.9rem}
.sidebar a.active{background:#e0ecff;font-weight:600}
.sidebar a.alert{color:var(--destructive)}
.inset{flex:1;min-width:0}
.topbar{height:3.5rem;display:flex;align-items:center;border-bottom:1px solid var(--border);padding:0 1rem;background:rgba(255,255,255,.8)}
.brand{font-weight:600;text-decoration:none}
.container{max-width:80rem;margin:0 auto;padding:1.5rem 1rem;display:grid;gap:1.5rem}
.container.narrow{gap:.5rem}
.page-title{font-size:1.5rem;font-weight:600;margin:0}
.muted{color:var(--muted);max-width:42rem;margin:0}
.small{font-size:.75rem}
.grid{display:grid;gap:1rem}
.cols-3{grid-template-columns:repeat(3,minmax(0,1fr))}
.cols-4{grid-template-columns:repeat(4,minmax(0,1fr))}
.cols-5{grid-template-columns:repeat(5,minmax(0,1fr))}
.span-2{grid-column:span 2}.span-3{grid-column:span 3}
.card{background:#fff;border:1px solid var(--border);border-radius:.5rem;padding:1rem;box-shadow:0 1px 2px rgba(0,0,0,.05)}
.card h3{margin:0 0 .75rem;font-size:1rem;font-weight:600}
.kpi{font-size:1.875rem;font-weight:600}
.row{display:flex;align-items:flex-end;justify-content:space-between;gap:1rem}
.item{display:flex;align-items:center;justify-content:space-between;border:1px solid var(--border);border-radius:.375rem;padding:.75rem}
.impact{color:var(--primary);font-weight:600;font-size:.875rem}
.chart{width:100%;height:auto}
.chart .grid{stroke:var(--border)}
.chart .tick{font-size:12px;fill:var(--muted)}
select,button{font:inherit;padding:.4rem .6rem;border:1px solid var(--border);border-radius:.375rem;background:#fff}
@media(max-width:900px){.cols-3,.cols-4,.cols-5{grid-template-columns:1fr}.span-2,.span-3{grid-column:auto}.sidebar{display:none}}
"#;

fn sidebar(path: &str) -> Markup {
    let navigation = Navigation::for_path(path);
    // Anchors live on the dashboard; elsewhere link through to it
    let on_dashboard = normalize_path(path) == "/";

    html! {
        aside.sidebar {
            nav {
                h2 { "Navigation" }
                ul {
                    @for item in &navigation.nav {
                        li {
                            a href=(item.url) data-icon=(item.icon)
                                class=[item.active.then_some("active")]
                                aria-current=[item.active.then_some("page")] {
                                span { (item.title) }
                            }
                        }
                    }
                }
                h2 { "Insights Today" }
                ul {
                    @for link in &navigation.insights {
                        @let class = if link.href == "#anomalies" { "alert" } else { "insight" };
                        @let href = if on_dashboard {
                            link.href.to_string()
                        } else {
                            format!("/{}", link.href)
                        };
                        li {
                            a class=(class) href=(href) data-icon=(link.icon) {
                                span { (link.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Wrap a page body in the full HTML document.
pub fn shell(view: &DashboardView, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (view.document().render_head())
                style { (STYLE) }
            }
            body {
                div.shell {
                    (sidebar(view.path()))
                    div.inset {
                        header.topbar {
                            a.brand href="/" { (view.title()) }
                        }
                        main { (body) }
                    }
                }
            }
        }
    }
}
