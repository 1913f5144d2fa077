use futures::executor::block_on;
use salescast_core::{Category, ChartStyle, CompanySize, Prediction, chart::assemble_figure};
use salescast_web::app::App;
use salescast_web::components::header::Header;
use salescast_web::components::prediction_summary::PredictionSummary;
use salescast_web::components::sales_chart::SalesChart;
use yew::{AttrValue, LocalServerRenderer};

#[test]
fn header_renders_title() {
    let props = salescast_web::components::header::Props {
        title: AttrValue::from("Video Game Sales Prediction"),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("<h1"));
    assert!(html.contains("Video Game Sales Prediction"));
}

#[test]
fn app_renders_every_control_and_initial_chart() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    for id in ["price", "critic-score", "company", "genre", "rating", "platform"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing control {id}");
        assert!(html.contains(&format!("{id}-text")), "missing echo for {id}");
    }
    for placeholder in [
        "Select a Company size",
        "Select a Genre",
        "Select a Rating",
        "Select a Platform",
    ] {
        assert!(html.contains(placeholder));
    }
    assert!(html.contains("Show Results"));
    assert!(html.contains("You have selected"));
    assert!(html.contains("19.99"));
    assert!(html.contains("sales-chart"));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn sales_chart_embeds_figure_json() {
    let preds = [Prediction {
        company: None,
        sales: 1.0,
    }];
    let figure = assemble_figure(&[0.5, 1.2], None, &preds, &ChartStyle::default());
    let props = salescast_web::components::sales_chart::Props {
        figure,
        element_id: AttrValue::from("chart-under-test"),
    };
    let html = block_on(LocalServerRenderer::<SalesChart>::with_props(props).render());
    assert!(html.contains("chart-under-test"));
    assert!(html.contains("data-figure"));
    assert!(html.contains("histogram"));
    assert!(html.contains("DarkSlateGrey"));
}

#[test]
fn prediction_summary_lists_each_company() {
    let predictions = CompanySize::ALL
        .iter()
        .map(|&size| Prediction {
            company: Some(size),
            sales: 1.5,
        })
        .collect();
    let props = salescast_web::components::prediction_summary::Props { predictions };
    let html = block_on(LocalServerRenderer::<PredictionSummary>::with_props(props).render());
    assert!(html.contains("Large Company: 1.5 million"));
    assert!(html.contains("Small Company: 1.5 million"));
}

#[test]
fn prediction_summary_is_empty_without_predictions() {
    let props = salescast_web::components::prediction_summary::Props {
        predictions: Vec::new(),
    };
    let html = block_on(LocalServerRenderer::<PredictionSummary>::with_props(props).render());
    assert!(!html.contains("prediction-summary"));
}
