use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const FIRST_WEEK_END: i64 = 1_704_672_000_000;

#[derive(Debug, Deserialize)]
struct WeekView {
    end_timestamp: i64,
    filled: bool,
    start_label: String,
    end_label: String,
}

#[derive(Debug, Deserialize)]
struct YearView {
    weeks: Vec<WeekView>,
}

#[derive(Debug, Deserialize)]
struct AmountView {
    ceiling: u64,
    value: u64,
}

#[derive(Debug, Deserialize)]
struct JourneyView {
    start_date: String,
    end_date: String,
    total_weeks: usize,
    weeks_passed: usize,
    years: Vec<YearView>,
    amount: AmountView,
}

#[derive(Debug, Deserialize)]
struct CommandResponse {
    notice: Option<String>,
    journey: JourneyView,
}

struct TestServer {
    base_url: String,
    data_path: PathBuf,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("journey_http_{}_{}.json", std::process::id(), nanos));
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/journey")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_journey_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", &data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        data_path,
        child,
    }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn post(client: &Client, url: String, body: serde_json::Value) -> reqwest::Response {
    client.post(url).json(&body).send().await.unwrap()
}

async fn apply_dates(client: &Client, server: &TestServer, start: &str, end: &str) -> CommandResponse {
    let response = post(
        client,
        format!("{}/api/dates", server.base_url),
        serde_json::json!({ "start": start, "end": end }),
    )
    .await;
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

fn stored_document(server: &TestServer) -> serde_json::Value {
    let bytes = std::fs::read(&server.data_path).expect("data file written");
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn http_apply_dates_rebuilds_grid() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let applied = apply_dates(&client, &server, "2024-01-02", "2024-01-16").await;
    assert_eq!(applied.notice.as_deref(), Some("Journey timeline updated successfully"));
    assert_eq!(applied.journey.start_date, "2024-01-02");
    assert_eq!(applied.journey.end_date, "2024-01-16");
    assert_eq!(applied.journey.total_weeks, 2);
    assert_eq!(applied.journey.years.len(), 1);
    assert_eq!(applied.journey.years[0].weeks.len(), 2);
    let first = &applied.journey.years[0].weeks[0];
    assert_eq!(first.start_label, "Jan 2, 2024");
    assert_eq!(first.end_label, "Jan 8, 2024");

    let stored = stored_document(&server);
    assert_eq!(stored["journeyStartDate"], "2024-01-02");
    assert_eq!(stored["journeyEndDate"], "2024-01-16");

    let response = post(
        &client,
        format!("{}/api/dates", server.base_url),
        serde_json::json!({ "start": "2024-01-16", "end": "2024-01-02" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "End date must be after start date");

    let response = post(
        &client,
        format!("{}/api/dates", server.base_url),
        serde_json::json!({ "start": "not a date", "end": "2024-01-02" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let current: JourneyView = client
        .get(format!("{}/api/journey", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(current.start_date, "2024-01-02");
}

#[tokio::test]
async fn http_toggle_persists_explicit_override() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let applied = apply_dates(&client, &server, "2024-01-02", "2024-01-16").await;
    let before = applied
        .journey
        .years[0]
        .weeks
        .iter()
        .find(|week| week.end_timestamp == FIRST_WEEK_END)
        .unwrap()
        .filled;

    let response = client
        .post(format!("{}/api/weeks/{FIRST_WEEK_END}/toggle", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let toggled: CommandResponse = response.json().await.unwrap();
    let week = &toggled.journey.years[0].weeks[0];
    assert_eq!(week.filled, !before);
    assert_eq!(stored_document(&server)["journeyWeeks"][FIRST_WEEK_END.to_string()], !before);

    let widened = apply_dates(&client, &server, "2024-01-02", "2024-02-27").await;
    let week = widened
        .journey
        .years[0]
        .weeks
        .iter()
        .find(|week| week.end_timestamp == FIRST_WEEK_END)
        .unwrap();
    assert_eq!(week.filled, !before);
    assert_eq!(widened.journey.total_weeks, 8);
    assert_eq!(widened.journey.weeks_passed, 8 - usize::from(before));

    let response = client
        .post(format!("{}/api/weeks/12345/toggle", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_amount_respects_ceiling() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = post(
        &client,
        format!("{}/api/max-amount", server.base_url),
        serde_json::json!({ "value": "100000" }),
    )
    .await;
    assert!(response.status().is_success());

    let set: CommandResponse = post(
        &client,
        format!("{}/api/amount", server.base_url),
        serde_json::json!({ "value": "40000" }),
    )
    .await
    .json()
    .await
    .unwrap();
    assert_eq!(set.journey.amount.value, 40_000);

    let response = post(
        &client,
        format!("{}/api/amount", server.base_url),
        serde_json::json!({ "value": "150000" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "Amount cannot exceed maximum of $100,000");

    let response = post(
        &client,
        format!("{}/api/max-amount", server.base_url),
        serde_json::json!({ "value": "-4" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let lowered: CommandResponse = post(
        &client,
        format!("{}/api/max-amount", server.base_url),
        serde_json::json!({ "value": "30000" }),
    )
    .await
    .json()
    .await
    .unwrap();
    assert_eq!(lowered.journey.amount.ceiling, 30_000);
    assert_eq!(lowered.journey.amount.value, 30_000);

    let stored = stored_document(&server);
    assert_eq!(stored["journeyMaxAmount"], "30000");
    assert_eq!(stored["journeySliderValue"], "30000");
}
