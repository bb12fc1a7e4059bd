//! # Blog Listing Page
//!
//! A decoupled consumer that renders post summaries as cards. It currently
//! renders the shared fixture list; fetching from the live API is a
//! follow-on task.

use std::env;

use actix_web::{App, HttpResponse, HttpServer, web};

use blog_shared::cards::{PostCard, fixture_cards};

fn render_card(card: &PostCard) -> String {
    format!(
        concat!(
            "<div class=\"card\">",
            "<img src=\"{image}\" alt=\"{title}\">",
            "<div class=\"card-body\"><h2>{title}</h2><p>{description}</p></div>",
            "</div>"
        ),
        image = card.image,
        title = card.title,
        description = card.description,
    )
}

fn render_page(cards: &[PostCard]) -> String {
    let cards_html: String = cards.iter().map(render_card).collect();
    format!(
        concat!(
            "<!DOCTYPE html><html><head><title>Demo Blog</title></head>",
            "<body><main><h1>Welcome to My Demo Blog</h1>",
            "<div class=\"grid\">{}</div>",
            "</main></body></html>"
        ),
        cards_html
    )
}

async fn index() -> HttpResponse {
    let page = render_page(&fixture_cards());
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let port: u16 = env::var("WEB_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Starting blog listing page on 127.0.0.1:{}", port);

    HttpServer::new(|| App::new().route("/", web::get().to(index)))
        .bind(("127.0.0.1", port))?
        .run()
        .await
}
