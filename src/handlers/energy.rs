use axum::{
    extract::{Path, State},
    http::Uri,
    response::Json,
};

use crate::dates::parse_date;
use crate::error::{AppError, Result};
use crate::models::{DayTypeFilter, FeedType, SampleSeries};
use crate::repositories::solar_reference_day;
use crate::routes::AppState;

fn parse_feed(feed: &str) -> Result<FeedType> {
    feed.parse::<FeedType>()
        .map_err(|e| AppError::NotFound(e.to_string()))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path((feed, date)): Path<(String, String)>,
) -> Result<Json<SampleSeries>> {
    let feed = parse_feed(&feed)?;
    let date = parse_date(&date);

    let series = state.loader.load(feed, date).await?;
    Ok(Json(series))
}

pub async fn get_average(
    State(state): State<AppState>,
    Path((feed, day_type, date)): Path<(String, String, String)>,
) -> Result<Json<SampleSeries>> {
    let feed = parse_feed(&feed)?;
    let filter: DayTypeFilter = day_type.parse().map_err(AppError::InvalidInput)?;
    let anchor = parse_date(&date);

    let series = state.averager.average(feed, filter, anchor).await?;
    Ok(Json(series))
}

pub async fn get_solar() -> Json<SampleSeries> {
    Json(solar_reference_day())
}

pub async fn api_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No API route for {}", uri.path()))
}
