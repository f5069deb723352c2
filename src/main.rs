use actix_files::Files;
use actix_web::{post, web, App, HttpResponse, HttpServer, Responder};
use anyhow::{Context, Result};
use clap::Parser;
use code::{FixRequest, FixResponse, HelpRequest, HelpResponse, RunRequest};
use error::{decode, require, RequestError};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

mod assist;
mod code;
mod error;

#[derive(Parser)]
#[command(name = "code_assist")]
#[command(author, version, about = "Simulated code assistance over HTTP", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3001")]
    addr: String,

    /// Directory holding index.html and its assets
    #[arg(long, default_value = "./static")]
    static_dir: PathBuf,
}

/// 200 with the answer, or 400 with the rejection carried in the same shape.
fn respond<T>(result: Result<T, RequestError>) -> HttpResponse
where
    T: Serialize + From<RequestError>,
{
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(err) => HttpResponse::BadRequest().json(T::from(err)),
    }
}

#[post("/run")]
async fn run(body: web::Bytes) -> impl Responder {
    let span = tracing::debug_span!("request", id = %Uuid::new_v4(), route = "/run");
    let _enter = span.enter();
    respond(decode::<RunRequest>(&body).map(|req| {
        let res = assist::check_run(&req.code);
        tracing::debug!(status = ?res.status, "run checked");
        res
    }))
}

#[post("/autofix")]
async fn autofix(body: web::Bytes) -> impl Responder {
    let span = tracing::debug_span!("request", id = %Uuid::new_v4(), route = "/autofix");
    let _enter = span.enter();
    respond(decode::<FixRequest>(&body).and_then(|req| {
        let code = require(&req.code, "No code provided to fix")?;
        let fixed_code = assist::autofix(code);
        tracing::debug!(before = code.len(), after = fixed_code.len(), "code fixed");
        Ok(FixResponse { fixed_code })
    }))
}

#[post("/help")]
async fn help(body: web::Bytes) -> impl Responder {
    let span = tracing::debug_span!("request", id = %Uuid::new_v4(), route = "/help");
    let _enter = span.enter();
    respond(decode::<HelpRequest>(&body).and_then(|req| {
        let query = require(
            &req.query,
            "No query provided. Please provide a topic to get help with.",
        )?;
        tracing::debug!(query, "help requested");
        Ok(HelpResponse {
            help: assist::help_text(query).to_string(),
        })
    }))
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(run).service(autofix).service(help);
}

/// Mounted last so the API routes win over same-named files.
fn static_files(dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(Files::new("/", dir).index_file("index.html"));
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "code_assist=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let static_dir = cli.static_dir;
    tracing::info!(static_dir = %static_dir.display(), "serving static assets");

    let server = HttpServer::new(move || {
        App::new()
            .configure(routes)
            .configure(static_files(static_dir.clone()))
    })
    .bind(cli.addr.as_str())
    .with_context(|| format!("failed to bind {}", cli.addr))?;

    tracing::info!("Server running on http://{}", cli.addr);
    server.run().await.context("server terminated")?;
    Ok(())
}
