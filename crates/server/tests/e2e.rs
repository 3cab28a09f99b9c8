use std::net::SocketAddr;

use configs::{AppConfig, ServerConfig, WorkshopConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server(sweater_score: Option<&str>) -> anyhow::Result<TestApp> {
    let app = server::build_app(&WorkshopConfig::resolve(sweater_score));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_get_post_get() -> anyhow::Result<()> {
    let app = start_server(Some("9")).await?;
    let c = reqwest::Client::new();
    let url = format!("{}/workshop", app.base_url);

    let res = c.get(&url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["sweaterscore"], 9);
    assert_eq!(body["presentator"], "AE Consultants");

    let record = json!({
        "name": "Ops Day",
        "date": "5/5/2026",
        "presentator": "SRE Team",
        "participants": ["Ann", "Ben"],
        "sweaterscore": 6
    });
    let res = c.post(&url).json(&record).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, record);

    let res = c.get(&url).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?, record);
    Ok(())
}

#[tokio::test]
async fn e2e_rejections_are_plain_text() -> anyhow::Result<()> {
    let app = start_server(None).await?;
    let c = reqwest::Client::new();
    let url = format!("{}/workshop", app.base_url);

    let res = c.post(&url).body("{oops").send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "Invalid JSON data");

    let res = c.post(&url).json(&json!({"sweaterscore": 12})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "Invalid SweaterScore: 12. Score must be between 1 and 10.");

    let res = c.delete(&url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.text().await?, "Method not allowed");

    let res = c.get(&url).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?["sweaterscore"], 5);
    Ok(())
}

#[tokio::test]
async fn e2e_concurrent_posts_leave_a_whole_record() -> anyhow::Result<()> {
    let app = start_server(None).await?;
    let c = reqwest::Client::new();
    let url = format!("{}/workshop", app.base_url);

    let mut handles = Vec::new();
    for score in 1..=10 {
        let (c, url) = (c.clone(), url.clone());
        handles.push(tokio::spawn(async move {
            let record = json!({
                "name": format!("w{score}"),
                "date": format!("d{score}"),
                "presentator": format!("p{score}"),
                "participants": [format!("x{score}")],
                "sweaterscore": score
            });
            c.post(&url).json(&record).send().await.map(|r| r.status())
        }));
    }
    for h in handles {
        assert_eq!(h.await??, HttpStatusCode::OK);
    }

    let body = c.get(&url).send().await?.json::<serde_json::Value>().await?;
    let score = body["sweaterscore"].as_i64().unwrap_or_default();
    assert!((1..=10).contains(&score));
    assert_eq!(body["name"], format!("w{score}"));
    assert_eq!(body["date"], format!("d{score}"));
    assert_eq!(body["presentator"], format!("p{score}"));
    assert_eq!(body["participants"], json!([format!("x{score}")]));
    Ok(())
}

#[tokio::test]
async fn run_stops_on_shutdown_signal() -> anyhow::Result<()> {
    let cfg = AppConfig {
        server: ServerConfig { host: "127.0.0.1".into(), port: 0, worker_threads: None },
        workshop: WorkshopConfig::default(),
    };
    server::run(cfg, async {}).await
}
