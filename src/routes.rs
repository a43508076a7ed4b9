use axum::{
    Router,
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::cookie::SignedCookieJar;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::{
    AppState,
    error::{AppError, AppResult},
    flash,
    models::{
        EditForm, FindQuery, IdQuery, MovieStatus, NewMovie, Notice, SearchForm, rank_movies,
        release_year,
    },
    templates,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list))
        .route("/add", get(add_form).post(add_search))
        .route("/find", get(add_confirm))
        .route("/edit", get(edit_form).post(edit_submit))
        .route("/delete", get(delete))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn list(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let (jar, notice) = flash::take(jar);
    let movies = state.store.list_by_rating().await?;
    debug!(count = movies.len(), "listing movies");
    Ok((jar, Html(templates::list_page(&rank_movies(movies), notice))))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page("", None))
}

pub async fn add_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let title = form.title.trim();
    if title.is_empty() {
        return Ok(Html(templates::add_page("", Some("Please enter a movie title."))));
    }

    let results = state.tmdb.search_by_title(title).await?;
    Ok(Html(templates::select_page(title, &results)))
}

pub async fn add_confirm(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(q): Query<FindQuery>,
) -> AppResult<(SignedCookieJar, Redirect)> {
    let detail = state.tmdb.fetch_detail_by_id(q.id).await?;
    if detail.original_title.trim().is_empty() {
        return Err(AppError::Upstream(format!("movie {} has no title", q.id)));
    }

    let Some(year) = release_year(&q.year, &detail.release_date) else {
        return Err(AppError::BadRequest(format!("movie {} has no release year yet", q.id)));
    };

    let new = NewMovie {
        title: detail.original_title.clone(),
        year: year.to_string(),
        description: detail.overview.clone(),
        img_url: state.tmdb.poster_url(&detail),
    };
    let id = state.store.create(new).await?;
    info!(id = id, tmdb_id = q.id, title = %detail.original_title, "added movie");

    Ok((flash::set(jar, Notice::Added), Redirect::to(&format!("/edit?id={id}"))))
}

pub async fn edit_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(q): Query<IdQuery>,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let movie = state.store.get(q.id).await?.ok_or(AppError::NotFound(q.id))?;
    let (jar, notice) = flash::take(jar);

    let body = if MovieStatus::from_code(movie.status) == Some(MovieStatus::Rated) {
        templates::edit_page(&movie, &movie.rating, &movie.review, None, notice)
    } else {
        templates::edit_page(&movie, "", "", None, notice)
    };
    Ok((jar, Html(body)))
}

pub async fn edit_submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(q): Query<IdQuery>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let rating = form.rating.trim();
    let review = form.review.trim();

    if rating.is_empty() || review.is_empty() {
        let movie = state.store.get(q.id).await?.ok_or(AppError::NotFound(q.id))?;
        let body = templates::edit_page(
            &movie,
            rating,
            review,
            Some("Both a rating and a review are required."),
            None,
        );
        return Ok(Html(body).into_response());
    }

    let movie = state.store.update(q.id, rating, review).await?.ok_or(AppError::NotFound(q.id))?;
    info!(id = movie.id, rating = %movie.rating, "rated movie");

    Ok((flash::set(jar, Notice::Rated), Redirect::to("/")).into_response())
}

pub async fn delete(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(q): Query<IdQuery>,
) -> AppResult<(SignedCookieJar, Redirect)> {
    if !state.store.delete(q.id).await? {
        return Err(AppError::NotFound(q.id));
    }
    info!(id = q.id, "deleted movie");

    Ok((flash::set(jar, Notice::Deleted), Redirect::to("/")))
}
