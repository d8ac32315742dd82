//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    get, post,
    web::{self, Json},
    App, HttpResponse, HttpServer, Responder,
};
use pairing_planner_web::{
    generate_round_robin, selectable_options, solve, validate_players, ScheduleConfig,
};
use serde::Deserialize;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct OptionsBody {
    players: Vec<String>,
    /// Current dropdown values, one per round slot; empty string means unselected.
    #[serde(default)]
    selections: Vec<String>,
}

#[derive(Deserialize)]
struct SolveBody {
    players: Vec<String>,
    #[serde(default)]
    chosen: Vec<String>,
    #[serde(default)]
    config: ScheduleConfig,
}

#[derive(Deserialize)]
struct RoundRobinBody {
    players: Vec<String>,
    /// Number of rounds to list; defaults to one full cycle.
    rounds: Option<usize>,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "pairing-planner-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Selectable opponents per round slot, after validating the roster.
/// Returns one option list per entry in `selections` so the page can refresh
/// every dropdown in one call.
#[post("/api/schedule/options")]
async fn api_schedule_options(body: Json<OptionsBody>) -> HttpResponse {
    let roster = match validate_players(&body.players) {
        Ok(r) => r,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    let slots: Vec<Vec<String>> = (0..body.selections.len())
        .map(|i| selectable_options(&roster, &body.selections, i))
        .collect();
    HttpResponse::Ok().json(serde_json::json!({ "slots": slots }))
}

/// Solve the schedule: validate everything and return two candidate completions.
#[post("/api/schedule/solve")]
async fn api_schedule_solve(body: Json<SolveBody>) -> HttpResponse {
    match solve(&body.config, &body.players, &body.chosen) {
        Ok((first, second)) => {
            HttpResponse::Ok().json(serde_json::json!({ "completions": [first, second] }))
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Baseline round-robin schedule with the first player pinned.
#[post("/api/schedule/round-robin")]
async fn api_schedule_round_robin(body: Json<RoundRobinBody>) -> HttpResponse {
    let roster = match validate_players(&body.players) {
        Ok(r) => r,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    let cycle = match generate_round_robin(roster.names()) {
        Ok(c) => c,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    let total = body.rounds.unwrap_or(cycle.len());
    let rounds: Vec<serde_json::Value> = (1..=total)
        .map(|r| {
            let idx = (r - 1) % cycle.len();
            serde_json::json!({ "round": r, "pairs": cycle[idx] })
        })
        .collect();
    HttpResponse::Ok().json(serde_json::json!({ "rounds": rounds }))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_schedule_options)
            .service(api_schedule_solve)
            .service(api_schedule_round_robin)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
