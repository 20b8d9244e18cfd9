use crate::analysis::summary::{format_thousands, ColumnDescription, SummaryMetrics};
use crate::error::AnalyticsError;
use crate::render::charts;
use crate::report::generator::Report;
use crate::report::narrative::*;
use crate::types::temporal_key::TemporalKey;

const PLOTLY_SCRIPT: &str = r#"<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>"#;

/// Renders the whole dashboard as a standalone HTML document.
pub fn render_html(report: &Report) -> Result<String, AnalyticsError> {
    let mut html = String::new();

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    {script}
    <style>
        body {{ font-family: -apple-system, 'Segoe UI', Roboto, Arial, sans-serif; margin: 0; background: #f4f6f9; color: #222; }}
        .container {{ max-width: 1300px; margin: 0 auto; padding: 30px 20px; }}
        h1 {{ text-align: center; font-weight: 400; }}
        section {{ background: white; border-radius: 10px; padding: 20px 25px; margin-bottom: 25px; box-shadow: 0 2px 8px rgba(0,0,0,0.08); }}
        table {{ border-collapse: collapse; width: 100%; font-size: 0.85rem; }}
        th, td {{ padding: 6px 10px; border-bottom: 1px solid #e3e6ea; text-align: right; }}
        th:first-child, td:first-child {{ text-align: left; }}
        .overflow {{ overflow-x: auto; }}
        .tabs button {{ border: none; background: #e3e6ea; padding: 8px 16px; cursor: pointer; border-radius: 6px 6px 0 0; }}
        .tabs button.active {{ background: #1f77b4; color: white; }}
        .tab-panel {{ display: none; }}
        .tab-panel.active {{ display: block; }}
        .note {{ font-style: italic; color: #555; }}
        .metrics {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 15px; }}
        .metric {{ background: #f5f7fa; border-left: 4px solid #1f77b4; border-radius: 6px; padding: 15px; }}
        .metric .label {{ font-size: 0.8rem; text-transform: uppercase; opacity: 0.7; }}
        .metric .value {{ font-size: 1.6rem; margin-top: 5px; }}
        .columns {{ display: grid; grid-template-columns: 1fr 1fr; gap: 20px; }}
    </style>
</head>
<body>
<div class="container">
<h1>{title}</h1>
"#,
        title = escape(DASHBOARD_TITLE),
        script = PLOTLY_SCRIPT,
    ));

    push_description(&mut html, report);

    // Tabbed averages
    html.push_str(&format!("<section>\n<h2>{}</h2>\n<div class=\"tabs\">\n", escape(SECTION_BUSIEST_TIME)));
    for (i, key) in TemporalKey::ALL.iter().enumerate() {
        html.push_str(&format!(
            "<button class=\"{}\" data-tab=\"tab-{}\">{}</button>\n",
            if i == 0 { "active" } else { "" },
            i,
            escape(key.title())
        ));
    }
    html.push_str("</div>\n");
    for (i, key) in TemporalKey::ALL.iter().enumerate() {
        html.push_str(&format!(
            "<div class=\"tab-panel{}\" id=\"tab-{}\">\n",
            if i == 0 { " active" } else { "" },
            i
        ));
        html.push_str(&charts::temporal_chart(report.temporal(*key), &format!("temporal-{}", i))?);
        html.push_str("</div>\n");
    }
    if let Some(note) = report.peak_hour_note() {
        html.push_str(&format!("<p class=\"note\">{}</p>\n", escape(&note)));
    }
    html.push_str("</section>\n");

    html.push_str(&format!("<section>\n<h2>{}</h2>\n", escape(SECTION_WEATHER)));
    html.push_str(&charts::weather_box_chart(&report.weather, "weather-box")?);
    html.push_str("</section>\n");

    html.push_str(&format!("<section>\n<h2>{}</h2>\n", escape(SECTION_HOURLY_CORRELATION)));
    html.push_str(&charts::correlation_heatmap(
        &report.hourly_correlation,
        "Korelasi Variabel (Hour)",
        "hourly-correlation",
    )?);
    html.push_str("</section>\n");
    push_metrics(&mut html, SECTION_HOURLY_METRICS, &report.hourly_metrics);

    html.push_str(&format!("<section>\n<h2>{}</h2>\n", escape(SECTION_DAILY_CORRELATION)));
    html.push_str(&charts::correlation_heatmap(
        &report.daily_correlation,
        "Korelasi Variabel (Day)",
        "daily-correlation",
    )?);
    html.push_str("</section>\n");
    push_metrics(&mut html, SECTION_DAILY_METRICS, &report.daily_metrics);

    // Recommendations, side by side
    html.push_str(&format!(
        "<section>\n<h2>{}</h2>\n<div class=\"columns\">\n",
        escape(SECTION_RECOMMENDATIONS)
    ));
    let [best_time, factors] = &report.recommendations;
    html.push_str("<div>\n");
    push_recommendation(&mut html, best_time);
    html.push_str(&charts::temporal_chart(&report.hourly, "recommendation-hourly")?);
    html.push_str("</div>\n<div>\n");
    push_recommendation(&mut html, factors);
    html.push_str(&charts::weather_mean_chart(&report.weather, "recommendation-weather")?);
    html.push_str("</div>\n</div>\n</section>\n");

    html.push_str("<section>\n");
    push_recommendation(&mut html, &report.conclusions);
    html.push_str("</section>\n");

    html.push_str(
        r#"</div>
<script>
document.querySelectorAll('.tabs button').forEach(function (button) {
    button.addEventListener('click', function () {
        document.querySelectorAll('.tabs button').forEach(function (b) { b.classList.remove('active'); });
        document.querySelectorAll('.tab-panel').forEach(function (p) { p.classList.remove('active'); });
        button.classList.add('active');
        var panel = document.getElementById(button.dataset.tab);
        panel.classList.add('active');
        panel.querySelectorAll('.js-plotly-plot').forEach(function (plot) { Plotly.Plots.resize(plot); });
    });
});
</script>
</body>
</html>
"#,
    );

    Ok(html)
}

fn push_description(html: &mut String, report: &Report) {
    let description = &report.description;
    html.push_str(&format!("<section>\n<h2>{}</h2>\n", escape(SECTION_SUMMARY)));
    if let Some((first, last)) = report.period {
        html.push_str(&format!(
            "<p>{} baris, periode {} sampai {}</p>\n",
            format_thousands(description.rows as f64),
            first,
            last
        ));
    }
    html.push_str("<div class=\"overflow\">\n<table>\n<tr><th></th>");
    for column in &description.columns {
        html.push_str(&format!("<th>{}</th>", escape(&column.column)));
    }
    html.push_str("</tr>\n");

    let rows: [(&str, fn(&ColumnDescription) -> String); 8] = [
        ("count", |c| c.count.to_string()),
        ("mean", |c| format_stat(c.mean)),
        ("std", |c| format_stat(c.std)),
        ("min", |c| format_stat(c.min)),
        ("25%", |c| format_stat(c.q25)),
        ("50%", |c| format_stat(c.median)),
        ("75%", |c| format_stat(c.q75)),
        ("max", |c| format_stat(c.max)),
    ];
    for (name, cell) in rows {
        html.push_str(&format!("<tr><th>{}</th>", name));
        for column in &description.columns {
            html.push_str(&format!("<td>{}</td>", cell(column)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n</div>\n</section>\n");
}

fn push_metrics(html: &mut String, title: &str, metrics: &SummaryMetrics) {
    html.push_str(&format!(
        "<section>\n<h2>{}</h2>\n<div class=\"metrics\">\n",
        escape(title)
    ));
    for (label, value) in [
        (METRIC_TOTAL, metrics.display_sum()),
        (METRIC_MEAN, metrics.display_mean()),
        (METRIC_MAX, metrics.display_max()),
    ] {
        html.push_str(&format!(
            "<div class=\"metric\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>\n",
            escape(label),
            escape(&value)
        ));
    }
    html.push_str("</div>\n</section>\n");
}

fn push_recommendation(html: &mut String, recommendation: &Recommendation) {
    html.push_str(&format!("<h3>{}</h3>\n<ul>\n", escape(recommendation.title)));
    for point in recommendation.points {
        html.push_str(&format!("<li>{}</li>\n", escape(point)));
    }
    html.push_str("</ul>\n");
}

fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => "-".to_string(),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
