use std::{sync::Arc, time::Duration};

use axum::{
    Form,
    Router,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{cli::InputPolicy, form::CalculationForm, page::Page, prelude::*};

struct AppState {
    input_policy: InputPolicy,
}

pub fn router(input_policy: InputPolicy, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(show_form).post(calculate))
        .with_state(Arc::new(AppState { input_policy }))
        .layer((TraceLayer::new_for_http(), TimeoutLayer::new(request_timeout)))
}

#[instrument(skip_all)]
async fn show_form() -> Response {
    render(&Page::Blank, StatusCode::OK)
}

#[instrument(skip_all)]
async fn calculate(
    State(state): State<Arc<AppState>>,
    pairs: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let form: CalculationForm = match (pairs, state.input_policy) {
        (Ok(Form(pairs)), _) => pairs.into_iter().collect(),
        (Err(rejection), InputPolicy::Lenient) => {
            debug!("ignoring the body: {rejection}");
            CalculationForm::default()
        }
        (Err(rejection), InputPolicy::Strict) => {
            info!("rejected the body: {rejection}");
            return rejection.into_response();
        }
    };
    match form.parse(state.input_policy) {
        Ok(input) => {
            let result = input.compute();
            debug!(
                ?input.power,
                ?input.price,
                ?input.penalty_free_share,
                ?result.revenue,
                ?result.penalty,
                ?result.profit,
                "computed"
            );
            render(&Page::Computed { input, result }, StatusCode::OK)
        }
        Err(error) => {
            info!(error.name, "rejected the form: {error:#}");
            render(&Page::Rejected { form, error }, StatusCode::BAD_REQUEST)
        }
    }
}

fn render(page: &Page, status: StatusCode) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(error) => {
            error!("failed to render the page: {error:#}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
