use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tiny_http::{Header, Method, Response, Server, StatusCode};
use tombola_core::{
    chance_percent, sample_roster, Category, Event, EventBus, Mode, Participant, RngState, Session,
};
use tombola_store::Store;

fn main() {
    let server = Server::http("0.0.0.0:7878").expect("start server");
    println!("Tombola web server on http://localhost:7878");
    let state = Arc::new(Mutex::new(AppState::new()));
    for request in server.incoming_requests() {
        let state = state.clone();
        if let Err(err) = handle_request(request, state) {
            eprintln!("request error: {err}");
        }
    }
}

struct AppState {
    session: Session,
    events: EventBus,
    store: Option<Store>,
    last_winner: Option<(String, u32)>,
}

impl AppState {
    fn new() -> Self {
        let store = Store::open_default();
        let (roster, saved_mode) = match &store {
            Some(store) => (
                store
                    .load_roster()
                    .unwrap_or_else(|err| {
                        eprintln!("load roster: {err}");
                        None
                    })
                    .unwrap_or_default(),
                store.load_mode().unwrap_or_else(|err| {
                    eprintln!("load mode: {err}");
                    None
                }),
            ),
            None => (Vec::new(), None),
        };
        let mode = saved_mode.or(Some(Mode::Normal));
        let session = Session::restore(roster, mode, RngState::from_entropy());
        Self {
            session,
            events: EventBus::default(),
            store,
            last_winner: None,
        }
    }
}

#[derive(Serialize)]
struct ApiResponse {
    ok: bool,
    error: Option<String>,
    state: UiState,
    events: Vec<Event>,
}

#[derive(Serialize)]
struct UiState {
    mode: Option<Mode>,
    roster_size: usize,
    eligible: Vec<UiEntry>,
    eligible_count: usize,
    total_weight: u64,
    winners: Vec<String>,
    last_winner: Option<UiWinner>,
}

#[derive(Serialize)]
struct UiEntry {
    name: String,
    weight: u32,
    category: Category,
    chance: f64,
}

#[derive(Serialize)]
struct UiWinner {
    name: String,
    weight: u32,
}

#[derive(Deserialize)]
struct ActionRequest {
    action: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    target: Option<String>,
}

fn handle_request(
    mut request: tiny_http::Request,
    state: Arc<Mutex<AppState>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = request.url().to_string();
    match (request.method(), url.as_str()) {
        (&Method::Get, "/") => {
            respond_with_file(request, web_path("index.html"), "text/html; charset=utf-8")?;
        }
        (&Method::Get, "/app.js") => {
            respond_with_file(request, web_path("app.js"), "application/javascript")?;
        }
        (&Method::Get, "/styles.css") => {
            respond_with_file(request, web_path("styles.css"), "text/css; charset=utf-8")?;
        }
        (&Method::Get, "/api/state") => {
            let mut guard = state.lock().unwrap();
            let response = build_response(&mut guard, None);
            respond_json(request, response)?;
        }
        (&Method::Post, "/api/action") => {
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body)?;
            let action: ActionRequest = serde_json::from_str(&body)?;
            let mut guard = state.lock().unwrap();
            let err = apply_action(&mut guard, action);
            let response = build_response(&mut guard, err);
            respond_json(request, response)?;
        }
        _ => {
            let response = Response::empty(StatusCode(404));
            request.respond(response)?;
        }
    }
    Ok(())
}

fn web_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("web")
        .join(file)
}

fn respond_with_file(
    request: tiny_http::Request,
    path: PathBuf,
    content_type: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = std::fs::File::open(path)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    let header =
        Header::from_bytes(&b"Content-Type"[..], content_type).map_err(|_| "bad content type")?;
    let response = Response::from_data(content).with_header(header);
    request.respond(response)?;
    Ok(())
}

fn respond_json(
    request: tiny_http::Request,
    response: ApiResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = serde_json::to_vec_pretty(&response)?;
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .map_err(|_| "bad content type")?;
    request.respond(Response::from_data(body).with_header(header))?;
    Ok(())
}

fn build_response(state: &mut AppState, err: Option<String>) -> ApiResponse {
    let events: Vec<_> = state.events.drain().collect();
    ApiResponse {
        ok: err.is_none(),
        error: err,
        state: snapshot_state(state),
        events,
    }
}

fn snapshot_state(state: &AppState) -> UiState {
    let session = &state.session;
    let total_weight = session.total_weight();
    let mut by_weight: Vec<&Participant> = session.eligible().iter().collect();
    by_weight.sort_by(|a, b| b.weight.cmp(&a.weight));
    let eligible: Vec<UiEntry> = by_weight
        .into_iter()
        .map(|entry| UiEntry {
            name: entry.name.clone(),
            weight: entry.weight,
            category: entry.category,
            chance: (chance_percent(entry.weight, total_weight) * 10.0).round() / 10.0,
        })
        .collect();
    UiState {
        mode: session.mode(),
        roster_size: session.roster().len(),
        eligible_count: eligible.len(),
        eligible,
        total_weight,
        winners: session.winners().to_vec(),
        last_winner: state
            .last_winner
            .as_ref()
            .map(|(name, weight)| UiWinner {
                name: name.clone(),
                weight: *weight,
            }),
    }
}

fn apply_action(state: &mut AppState, req: ActionRequest) -> Option<String> {
    match req.action.as_str() {
        "import" => {
            let Some(text) = req.text.as_deref() else {
                return Some("missing roster text".to_string());
            };
            let category = match req.category.as_deref().and_then(Category::parse) {
                Some(category) => category,
                None => return Some("missing or unknown category".to_string()),
            };
            state.session.import(text, category, &mut state.events);
            state.last_winner = None;
            persist_roster(state);
            None
        }
        "mode" => {
            let mode = req.target.as_deref().and_then(Mode::parse);
            state.session.set_mode(mode, &mut state.events);
            state.last_winner = None;
            if let (Some(store), Some(mode)) = (&state.store, mode) {
                if let Err(err) = store.save_mode(mode) {
                    eprintln!("save mode: {err}");
                }
            }
            None
        }
        "draw" => match state.session.draw(&mut state.events) {
            Ok(winner) => {
                state.last_winner = Some((winner.name.clone(), winner.weight));
                persist_roster(state);
                None
            }
            Err(err) => Some(err.to_string()),
        },
        "reset" => {
            state.session.reset(&mut state.events);
            state.last_winner = None;
            if let Some(store) = &state.store {
                if let Err(err) = store.clear() {
                    eprintln!("clear store: {err}");
                }
            }
            None
        }
        "test_data" => {
            state
                .session
                .import_records(&sample_roster(), &mut state.events);
            state.last_winner = None;
            persist_roster(state);
            None
        }
        _ => Some("unknown action".to_string()),
    }
}

fn persist_roster(state: &AppState) {
    if let Some(store) = &state.store {
        if let Err(err) = store.save_roster(state.session.roster()) {
            eprintln!("save roster: {err}");
        }
    }
}
