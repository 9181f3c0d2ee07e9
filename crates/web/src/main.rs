use anyhow::Context;
use qigua_core::{
    decode_codes, divine, Board, Catalog, Color, Kind, RngState, Selection, Token, SELECTION_SIZE,
};
use qigua_data::{assets_dir, load_catalog, load_server_config, ServerConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tiny_http::{Header, Method, Response, Server, StatusCode};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qigua=info")),
        )
        .init();

    let assets = assets_dir();
    let state = AppState {
        catalog: load_catalog(&assets).context("load catalog")?,
        config: load_server_config(&assets).context("load server config")?,
    };
    let server = Server::http(state.config.bind.as_str())
        .map_err(|err| anyhow::anyhow!("start server on {}: {err}", state.config.bind))?;
    info!(bind = %state.config.bind, "qigua web server listening");
    for request in server.incoming_requests() {
        if let Err(err) = handle_request(request, &state) {
            error!("request error: {err}");
        }
    }
    Ok(())
}

struct AppState {
    catalog: Catalog,
    config: ServerConfig,
}

#[derive(Debug, Clone, PartialEq)]
struct Reply {
    status: u16,
    body: Value,
}

impl Reply {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: serde_json::json!({ "error": message.into() }),
        }
    }

    fn empty(status: u16) -> Self {
        Self {
            status,
            body: Value::Null,
        }
    }
}

#[derive(Serialize)]
struct BoardResponse<'a> {
    seed: u64,
    pieces: &'a [Token],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PieceInput {
    Code(String),
    Fields { kind: Kind, color: Color },
}

fn handle_request(
    mut request: tiny_http::Request,
    state: &AppState,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = request.url().to_string();
    let method = request.method().clone();
    let mut body = String::new();
    if method == Method::Post {
        request.as_reader().read_to_string(&mut body)?;
    }
    let reply = route(state, &method, &url, &body);
    if reply.status >= 400 {
        warn!(%method, %url, status = reply.status, "request rejected");
    } else {
        info!(%method, %url, status = reply.status, "request served");
    }
    respond(request, reply, &state.config)
}

fn respond(
    request: tiny_http::Request,
    reply: Reply,
    config: &ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let cors = Header::from_bytes(
        &b"Access-Control-Allow-Origin"[..],
        config.cors_origin.as_bytes(),
    )
    .map_err(|_| "invalid cors header")?;
    if reply.body.is_null() {
        let response = Response::empty(StatusCode(reply.status))
            .with_header(cors)
            .with_header(
                Header::from_bytes(
                    &b"Access-Control-Allow-Headers"[..],
                    &b"Content-Type"[..],
                )
                .map_err(|_| "invalid allow-headers header")?,
            );
        request.respond(response)?;
        return Ok(());
    }
    let body = if config.pretty {
        serde_json::to_vec_pretty(&reply.body)?
    } else {
        serde_json::to_vec(&reply.body)?
    };
    let content_type = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .map_err(|_| "invalid content type header")?;
    let response = Response::from_data(body)
        .with_status_code(StatusCode(reply.status))
        .with_header(content_type)
        .with_header(cors);
    request.respond(response)?;
    Ok(())
}

fn route(state: &AppState, method: &Method, url: &str, body: &str) -> Reply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    match (method, path) {
        (Method::Options, path) if path.starts_with("/api/") => Reply::empty(204),
        (Method::Get, "/api/board/new") => new_board(state, query),
        (Method::Post, "/api/divination") => divination_from_body(state, body),
        (Method::Get, "/api/divination") => divination_from_query(state, query),
        _ => Reply::error(404, "not found"),
    }
}

fn new_board(state: &AppState, query: &str) -> Reply {
    let mut rng = match query_param(query, "seed") {
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => RngState::from_seed(seed),
            Err(_) => return Reply::error(400, "invalid seed"),
        },
        None => RngState::from_entropy(),
    };
    let board = Board::shuffled(&state.catalog, &mut rng);
    to_reply(&BoardResponse {
        seed: board.seed,
        pieces: &board.pieces,
    })
}

fn divination_from_body(state: &AppState, body: &str) -> Reply {
    let Ok(payload) = serde_json::from_str::<Value>(body) else {
        return Reply::error(400, "Missing piece selection");
    };
    let Some(pieces) = payload.get("pieces").and_then(Value::as_array) else {
        return Reply::error(400, "Missing piece selection");
    };
    if pieces.len() != SELECTION_SIZE {
        return Reply::error(400, "Exactly 5 pieces must be selected");
    }
    let mut tokens = Vec::with_capacity(SELECTION_SIZE);
    for piece in pieces {
        let token = match serde_json::from_value::<PieceInput>(piece.clone()) {
            Ok(PieceInput::Fields { kind, color }) => state.catalog.token(kind, color),
            Ok(PieceInput::Code(code)) => match decode_codes([code.as_str()], &state.catalog) {
                Ok(decoded) => match decoded.tokens.first() {
                    Some(token) => Ok(*token),
                    None => return Reply::error(400, "Invalid piece data format"),
                },
                Err(err) => Err(err),
            },
            Err(_) => return Reply::error(400, "Invalid piece data format"),
        };
        match token {
            Ok(token) => tokens.push(token),
            Err(err) => return Reply::error(500, err.to_string()),
        }
    }
    divine_tokens(tokens)
}

fn divination_from_query(state: &AppState, query: &str) -> Reply {
    let Some(raw) = query_param(query, "pieces") else {
        return Reply::error(400, "Missing piece selection");
    };
    let raw = raw.replace("%2C", ",").replace("%2c", ",");
    let decoded = match decode_codes(raw.split(','), &state.catalog) {
        Ok(decoded) => decoded,
        Err(err) => return Reply::error(500, err.to_string()),
    };
    if !decoded.dropped.is_empty() {
        warn!(dropped = ?decoded.dropped, "dropped malformed piece codes");
    }
    if decoded.tokens.len() != SELECTION_SIZE {
        return Reply::error(400, "Exactly 5 pieces must be selected");
    }
    divine_tokens(decoded.tokens)
}

fn divine_tokens(tokens: Vec<Token>) -> Reply {
    match Selection::new(tokens) {
        Ok(selection) => to_reply(&divine(&selection)),
        Err(err) => Reply::error(400, err.to_string()),
    }
}

fn to_reply<T: Serialize>(value: &T) -> Reply {
    match serde_json::to_value(value) {
        Ok(body) => Reply::ok(body),
        Err(err) => Reply::error(500, err.to_string()),
    }
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState {
            catalog: Catalog::standard().clone(),
            config: ServerConfig::default(),
        }
    }

    fn post(body: &str) -> Reply {
        route(&state(), &Method::Post, "/api/divination", body)
    }

    #[test]
    fn new_board_has_all_pieces() {
        let reply = route(&state(), &Method::Get, "/api/board/new?seed=9", "");
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["seed"], 9);
        assert_eq!(reply.body["pieces"].as_array().map(Vec::len), Some(32));
    }

    #[test]
    fn seeded_boards_repeat() {
        let a = route(&state(), &Method::Get, "/api/board/new?seed=3", "");
        let b = route(&state(), &Method::Get, "/api/board/new?seed=3", "");
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_seed_is_rejected() {
        let reply = route(&state(), &Method::Get, "/api/board/new?seed=abc", "");
        assert_eq!(reply.status, 400);
    }

    #[test]
    fn post_divination_with_piece_objects() {
        let reply = post(
            r#"{"pieces":[
                {"kind":"soldier","color":"red"},
                {"kind":"soldier","color":"red"},
                {"kind":"soldier","color":"red"},
                {"kind":"advisor","color":"black"},
                {"kind":"advisor","color":"black"}
            ]}"#,
        );
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["balance_score"], 100);
        assert_eq!(reply.body["positions"]["center"]["code"], "RP");
    }

    #[test]
    fn post_divination_accepts_codes() {
        let reply = post(r#"{"pieces":["RK","BA","RE","BR","RP"]}"#);
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["selection"][1]["label"], "士");
    }

    #[test]
    fn post_without_pieces_is_rejected() {
        assert_eq!(post("").status, 400);
        assert_eq!(post("{}").status, 400);
        assert_eq!(post(r#"{"pieces":"RK"}"#).status, 400);
    }

    #[test]
    fn post_with_wrong_count_is_rejected() {
        let reply = post(r#"{"pieces":["RK","BA","RE","BR"]}"#);
        assert_eq!(reply.status, 400);
        assert_eq!(reply.body["error"], "Exactly 5 pieces must be selected");
    }

    #[test]
    fn post_with_malformed_piece_is_rejected() {
        let reply = post(r#"{"pieces":["RK","BA","RE","BR","XX"]}"#);
        assert_eq!(reply.status, 400);
        let reply = post(
            r#"{"pieces":["RK","BA","RE","BR",{"kind":"queen","color":"red"}]}"#,
        );
        assert_eq!(reply.status, 400);
    }

    #[test]
    fn query_divination_uses_wire_codes() {
        let reply = route(
            &state(),
            &Method::Get,
            "/api/divination?pieces=RP%2CRP,RP,BA,BA",
            "",
        );
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["balanced"], true);
    }

    #[test]
    fn query_drops_malformed_codes_then_counts() {
        let reply = route(
            &state(),
            &Method::Get,
            "/api/divination?pieces=RP,RP,ZZ,BA,BA",
            "",
        );
        assert_eq!(reply.status, 400);
        let reply = route(
            &state(),
            &Method::Get,
            "/api/divination?pieces=RP,RP,ZZ,BA,BA,BK",
            "",
        );
        assert_eq!(reply.status, 200);
    }

    #[test]
    fn unknown_route_is_not_found() {
        let reply = route(&state(), &Method::Get, "/api/unknown", "");
        assert_eq!(reply.status, 404);
    }

    #[test]
    fn preflight_is_answered() {
        let reply = route(&state(), &Method::Options, "/api/divination", "");
        assert_eq!(reply.status, 204);
    }
}
