use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    models::{MovieStatus, Notice, RankedMovie, SearchResult},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn list_page(movies: &[RankedMovie], notice: Option<Notice>) -> String {
    page(
        "My Top Movies",
        html! {
            div class="max-w-4xl mx-auto px-6 py-12" {
                div class="flex items-start justify-between gap-6" {
                    div {
                        h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                        p class="mt-2 text-gray-600" { "These are my all-time favourite movies." }
                    }
                    a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                }

                (notice_banner(notice))

                @if movies.is_empty() {
                    div class="mt-10 bg-white shadow rounded-lg p-8" {
                        p class="text-gray-600" { "Nothing here yet. Search for a movie to get started." }
                    }
                } @else {
                    div class="mt-10 space-y-4" {
                        @for ranked in movies {
                            (movie_card(ranked))
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(title: &str, error: Option<&str>) -> String {
    page(
        "Add Movie",
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-3xl font-bold text-gray-900" { "Add a Movie" }
                    form class="mt-8 space-y-6" method="post" action="/add" {
                        div {
                            label class="block text-sm font-medium text-gray-700" for="title" { "Movie Title" }
                            input class=(INPUT_CLASS) name="title" id="title" value=(title) required;
                            (field_error(error))
                        }
                        button class=(BUTTON_CLASS) type="submit" { "Add Movie" }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, results: &[SearchResult]) -> String {
    page(
        "Select Movie",
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-3xl font-bold text-gray-900" { "Select Movie" }
                    p class="mt-2 text-gray-600" { "Results for \u{201c}" (query) "\u{201d}" }

                    @if results.is_empty() {
                        p class="mt-6 text-gray-600" { "No movies matched that title." }
                    } @else {
                        ul class="mt-6 divide-y divide-gray-200" {
                            @for result in results {
                                li class="py-3" {
                                    a class="text-blue-600 hover:text-blue-800" href=(find_url(result)) {
                                        (result.display_title())
                                        @if !result.release_date.is_empty() {
                                            span class="ml-2 text-gray-500" { "- " (result.release_date) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                }
            }
        },
    )
}

pub fn edit_page(
    movie: &movie::Model,
    rating: &str,
    review: &str,
    error: Option<&str>,
    notice: Option<Notice>,
) -> String {
    page(
        "Edit Movie",
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                (notice_banner(notice))
                div class="mt-6 bg-white shadow rounded-lg p-8" {
                    h1 class="text-3xl font-bold text-gray-900" { (movie.title) }
                    p class="mt-2 text-gray-600" { "Edit movie rating" }

                    form class="mt-8 space-y-6" method="post" action=(format!("/edit?id={}", movie.id)) {
                        div {
                            label class="block text-sm font-medium text-gray-700" for="rating" { "Your Rating Out of 10. eg 6.5" }
                            input class=(INPUT_CLASS) name="rating" id="rating" value=(rating) required;
                        }
                        div {
                            label class="block text-sm font-medium text-gray-700" for="review" { "Your Review" }
                            input class=(INPUT_CLASS) name="review" id="review" value=(review) required;
                        }
                        (field_error(error))
                        button class=(BUTTON_CLASS) type="submit" { "Done" }
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" {
                            "Error " (status.as_u16())
                        }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const BUTTON_CLASS: &str =
    "w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body class="min-h-screen bg-gray-50" { (body) }
        }
    }
    .into_string()
}

fn notice_banner(notice: Option<Notice>) -> Markup {
    html! {
        @if let Some(notice) = notice {
            div class="mt-6 rounded-md border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-800" role="status" {
                (notice.message())
            }
        }
    }
}

fn field_error(error: Option<&str>) -> Markup {
    html! {
        @if let Some(error) = error {
            p class="mt-2 text-sm text-red-600" { (error) }
        }
    }
}

fn movie_card(ranked: &RankedMovie) -> Markup {
    let movie = &ranked.movie;
    let rated = MovieStatus::from_code(movie.status) == Some(MovieStatus::Rated);

    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            @if let Some(img_url) = &movie.img_url {
                img class="w-24 rounded" src=(img_url) alt=(movie.title);
            }
            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        span class="mr-2 text-gray-400" { "#" (ranked.rank) }
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    @if rated {
                        span class="text-lg font-bold text-yellow-600" { (movie.rating) }
                    } @else {
                        span class="text-sm text-gray-400" { "Not rated yet" }
                    }
                }
                @if rated {
                    p class="mt-2 italic text-gray-700" { "\u{201c}" (movie.review) "\u{201d}" }
                }
                p class="mt-2 text-sm text-gray-600" { (movie.description) }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit?id={}", movie.id)) { "Update" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete?id={}", movie.id)) { "Delete" }
                    @if let Some(added) = format_added_at(movie.added_at) {
                        span class="ml-auto text-gray-400" { "Added " (added) }
                    }
                }
            }
        }
    }
}

fn find_url(result: &SearchResult) -> String {
    format!("/find?id={}&year={}", result.id, urlencoding::encode(&result.release_date))
}

fn format_added_at(added_at: i64) -> Option<String> {
    jiff::Timestamp::from_second(added_at).ok().map(|ts| ts.strftime("%Y-%m-%d").to_string())
}
