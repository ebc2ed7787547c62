use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{info, warn};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::config;
use crate::direction::Direction;
use crate::error::Error;
use crate::models::{Body, Food, Vector, World};
#[cfg(feature = "debug")]
use crate::strategy::TimingWrapper;
use crate::strategy::{legal_moves, GreedyStrategy, Strategy, Turn};

/// The token sent when a request never reaches the strategy, or the
/// strategy has nothing left to offer. The protocol demands a move every
/// turn; `left` is the same default `Direction::from_vector` documents.
const FALLBACK_DIRECTION: Direction = Direction::Left;

pub async fn run() {
    let addr = format!("0.0.0.0:{}", config().port);
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("binding listener failed");
    axum::serve(listener, router()).await.expect("server failed");
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/start", post(start))
        .route("/ping", post(ping))
        .route("/move", post(make_move))
        .route("/end", post(end))
}

async fn index() -> Html<&'static str> {
    Html(
        "Battlesnake documentation can be found at \
         <a href=\"https://docs.battlesnake.io\">https://docs.battlesnake.io</a>.",
    )
}

async fn start() -> Json<StartResponse> {
    info!("game started");
    Json(StartResponse {
        color: config().color.clone(),
    })
}

async fn ping() -> Json<serde_json::Value> {
    Json(json!({}))
}

async fn end() -> Json<serde_json::Value> {
    info!("game over");
    Json(json!({}))
}

async fn make_move(payload: Result<Json<MoveRequest>, JsonRejection>) -> Json<MoveResponse> {
    let direction = match payload {
        Ok(Json(request)) => match decide_move(&request) {
            Ok(direction) => {
                info!("turn {}: moving {}", request.turn, direction.token());
                direction
            }
            Err(err) => {
                warn!("rejecting move request: {}", err);
                FALLBACK_DIRECTION
            }
        },
        Err(err) => {
            warn!("unreadable move request: {}", err);
            FALLBACK_DIRECTION
        }
    };
    Json(MoveResponse {
        mv: direction.token(),
    })
}

#[cfg(not(feature = "debug"))]
fn get_strategy() -> GreedyStrategy {
    GreedyStrategy::new()
}

#[cfg(feature = "debug")]
fn get_strategy() -> TimingWrapper<GreedyStrategy> {
    TimingWrapper::new(GreedyStrategy::new())
}

fn decide_move(request: &MoveRequest) -> Result<Direction, Error> {
    let snapshot = decode_snapshot(request)?;
    let head = snapshot.you.head().ok_or(Error::EmptyBody)?;
    let mut strategy = get_strategy();
    let decision = strategy.decide(request.turn, &snapshot.world, &snapshot.food, &snapshot.you)?;
    Ok(decision.unwrap_or_else(|| {
        // Boxed in: every move loses, but silence is not an answer.
        // Any in-bounds direction is still a legal wire token.
        warn!(
            "turn {}: no safe move from ({}, {}), moving anyway",
            request.turn, head.x, head.y
        );
        legal_moves(&snapshot.world, head)
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(FALLBACK_DIRECTION)
    }))
}

#[derive(Debug)]
struct Snapshot {
    world: World,
    food: Vec<Food>,
    you: Body,
}

fn decode_snapshot(request: &MoveRequest) -> Result<Snapshot, Error> {
    if request.width <= 0 || request.height <= 0 {
        return Err(Error::BadBoard {
            width: request.width,
            height: request.height,
        });
    }

    let mut world = World::new(request.width, request.height);
    for snake in &request.snakes.data {
        world.add_body(decode_body(snake)?);
    }
    let you = decode_body(&request.you)?;
    // The agent's own body blocks cells like any other; register it even
    // though the snakes list usually carries it already.
    world.add_body(you.clone());

    let food = request
        .food
        .data
        .iter()
        .map(|p| Food {
            point_: Vector::new(p.x, p.y),
        })
        .collect();

    Ok(Snapshot { world, food, you })
}

fn decode_body(snake: &SnakeData) -> Result<Body, Error> {
    let mut body = Body::new();
    for part in &snake.body.data {
        body.add_part(Vector::new(part.x, part.y));
    }
    if body.is_empty() {
        return Err(Error::EmptyBody);
    }
    Ok(body)
}

#[derive(Debug, Deserialize)]
struct MoveRequest {
    #[serde(default)]
    turn: Turn,
    width: i64,
    height: i64,
    food: DataList<PointData>,
    snakes: DataList<SnakeData>,
    you: SnakeData,
}

#[derive(Debug, Deserialize)]
struct DataList<T> {
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct PointData {
    x: i64,
    y: i64,
}

#[derive(Debug, Deserialize)]
struct SnakeData {
    body: DataList<PointData>,
}

#[derive(Debug, Serialize)]
struct StartResponse {
    color: String,
}

#[derive(Debug, Serialize)]
struct MoveResponse {
    #[serde(rename = "move")]
    mv: &'static str,
}
