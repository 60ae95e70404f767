//! Route handlers.

use super::AppState;
use super::html;
use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::warn;
use valuelens::lenses::{LensKind, ProfileKind};
use valuelens::{Analysis, AnalysisError};

/// Query string shared by the analysis routes.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnalyzeParams {
    ticker: Option<String>,
    lens: Option<String>,
    profile: Option<String>,
}

impl AnalyzeParams {
    fn ticker(&self) -> &str {
        self.ticker.as_deref().unwrap_or_default()
    }

    fn lens(&self) -> Result<LensKind, AnalysisError> {
        match self.lens.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key.parse::<LensKind>()?),
            _ => Ok(LensKind::default()),
        }
    }

    /// Explicit profile; an empty value falls back to the lens default.
    fn profile(&self) -> Result<Option<ProfileKind>, AnalysisError> {
        match self.profile.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(Some(key.parse::<ProfileKind>()?)),
            _ => Ok(None),
        }
    }
}

fn status_for(err: &AnalysisError) -> StatusCode {
    if err.is_user_error() {
        StatusCode::BAD_REQUEST
    } else if matches!(err, AnalysisError::Data(_)) {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn user_message(ticker: &str, err: &AnalysisError) -> String {
    if err.is_user_error() {
        format!("{err}")
    } else if err.is_retryable() {
        format!(
            "Failed to fetch data for {}: {err}. Yahoo Finance sometimes returns empty \
             responses or throttles requests; please try again in a moment.",
            ticker.trim().to_uppercase()
        )
    } else {
        format!("Analysis failed: {err}")
    }
}

async fn run(state: &AppState, params: &AnalyzeParams) -> Result<Analysis, AnalysisError> {
    let lens = params.lens()?;
    let profile = params.profile()?;
    let analysis = Analysis::run(state.source.as_ref(), params.ticker(), lens).await?;
    Ok(match profile {
        Some(kind) => analysis.with_profile(kind),
        None => analysis,
    })
}

pub(crate) async fn index() -> Html<String> {
    Html(html::index_page())
}

pub(crate) async fn analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Response {
    let lens = params.lens().unwrap_or_default();
    let profile = params.profile().unwrap_or_default();
    let rendered = async {
        let analysis = run(&state, &params).await?;
        let report = analysis.report()?;
        let verdict_json = report.verdict_json()?;
        Ok::<_, AnalysisError>(html::analysis_page(
            &analysis.ticker,
            &report,
            profile,
            &verdict_json,
        ))
    }
    .await;

    match rendered {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            warn!(ticker = params.ticker(), error = %err, "analysis failed");
            let message = user_message(params.ticker(), &err);
            (
                status_for(&err),
                Html(html::error_page(params.ticker(), lens, profile, &message)),
            )
                .into_response()
        }
    }
}

pub(crate) async fn api_analysis(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Response {
    let report = async { Ok::<_, AnalysisError>(run(&state, &params).await?.report()?) }.await;
    match report {
        Ok(report) => Json(report).into_response(),
        Err(err) => {
            warn!(ticker = params.ticker(), error = %err, "analysis failed");
            (
                status_for(&err),
                Json(serde_json::json!({
                    "error": user_message(params.ticker(), &err),
                    "retryable": err.is_retryable(),
                })),
            )
                .into_response()
        }
    }
}

pub(crate) async fn report_pdf(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Response {
    let rendered = async {
        let analysis = run(&state, &params).await?;
        Ok::<_, AnalysisError>((analysis.pdf_file_name(), analysis.pdf()?))
    }
    .await;

    match rendered {
        Ok((file_name, bytes)) => (
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{file_name}\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(err) => {
            warn!(ticker = params.ticker(), error = %err, "PDF rendering failed");
            (status_for(&err), user_message(params.ticker(), &err)).into_response()
        }
    }
}

pub(crate) async fn health() -> &'static str {
    "ok"
}
