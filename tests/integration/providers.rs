//! Provider clients against wiremock upstreams

use marketmood::error::FetchError;
use marketmood::models::SentimentLabel;
use marketmood::services::{
    HeadlineProvider, HttpTickerListSource, NewsClient, QuoteProvider, RedditClient,
    SearchInterestProvider, SocialFeedProvider, TickerSource, TrendsClient, YahooClient,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chart(closes: &[Option<f64>]) -> serde_json::Value {
    json!({
        "chart": {
            "result": [{ "indicators": { "quote": [{ "close": closes }] } }],
            "error": null
        }
    })
}

#[tokio::test]
async fn reddit_hot_posts_are_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/wallstreetbets/hot/.json"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "children": [
                { "data": { "title": "GME to the moon", "selftext": "", "ups": 1200 } },
                { "data": { "title": "PLTR DD", "selftext": "long thesis" } },
                { "data": { "selftext": "no title, skipped" } }
            ]}
        })))
        .mount(&server)
        .await;

    let client = RedditClient::new(server.uri(), reqwest::Client::new(), "wallstreetbets");
    let posts = client.hot_posts().await.expect("posts");

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "GME to the moon");
    assert_eq!(posts[0].upvotes, Some(1200));
    assert_eq!(posts[1].body, "long thesis");
    assert_eq!(posts[1].upvotes, None);
}

#[tokio::test]
async fn reddit_rate_limit_and_status_errors() {
    let server = MockServer::start().await;
    Mock::given(path("/r/limited/hot/.json"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    Mock::given(path("/r/broken/hot/.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(path("/r/html/hot/.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
        .mount(&server)
        .await;

    let limited = RedditClient::new(server.uri(), reqwest::Client::new(), "limited");
    assert!(matches!(
        limited.hot_posts().await,
        Err(FetchError::RateLimited { .. })
    ));

    let broken = RedditClient::new(server.uri(), reqwest::Client::new(), "broken");
    assert_eq!(
        broken.hot_posts().await,
        Err(FetchError::Status { status: 500 })
    );

    let html = RedditClient::new(server.uri(), reqwest::Client::new(), "html");
    assert!(matches!(html.hot_posts().await, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn news_without_key_makes_no_request() {
    let server = MockServer::start().await;
    let client = NewsClient::new(server.uri(), reqwest::Client::new(), None);

    assert_eq!(
        client.headline_sentiment("stock market").await,
        Err(FetchError::MissingCredential("NEWSAPI_KEY"))
    );
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn news_headlines_are_scored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(header("X-Api-Key", "test-key"))
        .and(query_param("q", "stock market"))
        .and(query_param("language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "articles": [
                { "title": "Stocks rally to record high" },
                { "title": "Recession fear grows" },
                { "title": "Markets surge on earnings" },
                { "title": null }
            ]
        })))
        .mount(&server)
        .await;

    let client = NewsClient::new(
        server.uri(),
        reqwest::Client::new(),
        Some("test-key".to_string()),
    );
    let sentiment = client.headline_sentiment("stock market").await.expect("sentiment");

    assert_eq!(sentiment.score, 52.0);
    assert_eq!(sentiment.label, SentimentLabel::Mixed);
}

#[tokio::test]
async fn news_rate_limit_by_status_or_payload() {
    let server = MockServer::start().await;
    Mock::given(path("/v2/everything"))
        .and(query_param("q", "limited"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    Mock::given(path("/v2/everything"))
        .and(query_param("q", "payload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "code": "rateLimited",
            "message": "You have made too many requests recently."
        })))
        .mount(&server)
        .await;

    let client = NewsClient::new(server.uri(), reqwest::Client::new(), Some("k".to_string()));
    assert!(matches!(
        client.titles("limited").await,
        Err(FetchError::RateLimited { .. })
    ));
    assert!(matches!(
        client.titles("payload").await,
        Err(FetchError::RateLimited { .. })
    ));
}

#[tokio::test]
async fn yahoo_closes_skip_gaps() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("/v8/finance/chart/.*VIX$"))
        .and(query_param("interval", "1d"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chart(&[Some(18.5), None, Some(21.25)])),
        )
        .mount(&server)
        .await;

    let client = YahooClient::new(server.uri(), reqwest::Client::new());
    let closes = client.daily_closes("^VIX", "5d").await.expect("closes");
    assert_eq!(closes, vec![18.5, 21.25]);
    assert_eq!(client.latest_close("^VIX").await, Ok(21.25));
}

#[tokio::test]
async fn yahoo_percent_change_uses_last_two_closes() {
    let server = MockServer::start().await;
    Mock::given(path_regex("/GME$"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chart(&[Some(8.0), Some(10.0), Some(11.0)])),
        )
        .mount(&server)
        .await;
    Mock::given(path_regex("/ONE$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart(&[Some(5.0)])))
        .mount(&server)
        .await;

    let client = YahooClient::new(server.uri(), reqwest::Client::new());
    let change = client.percent_change("GME").await.expect("change");
    assert!((change - 10.0).abs() < 1e-9);

    assert!(matches!(
        client.percent_change("ONE").await,
        Err(FetchError::Empty(_))
    ));
}

#[tokio::test]
async fn yahoo_chart_error_and_missing_symbol() {
    let server = MockServer::start().await;
    Mock::given(path_regex("/NOPE$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
            }
        })))
        .mount(&server)
        .await;

    let client = YahooClient::new(server.uri(), reqwest::Client::new());
    assert!(matches!(
        client.latest_close("NOPE").await,
        Err(FetchError::Parse(_))
    ));
    // nothing mounted for this symbol, wiremock answers 404
    assert_eq!(
        client.latest_close("MISSING").await,
        Err(FetchError::Status { status: 404 })
    );
}

async fn mount_trends_cookie(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/trends/explore/"))
        .and(query_param("geo", "US"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "NID=511=session; path=/; HttpOnly"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn trends_follows_explore_token() {
    let server = MockServer::start().await;
    mount_trends_cookie(&server).await;
    Mock::given(method("POST"))
        .and(path("/trends/api/explore"))
        .and(query_param("hl", "en-US"))
        .and(header("cookie", "NID=511=session"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            ")]}'\n{\"widgets\":[{\"id\":\"RELATED_QUERIES\",\"token\":\"other\",\"request\":{}},{\"id\":\"TIMESERIES\",\"token\":\"abc123\",\"request\":{\"time\":\"now 7-d\"}}]}",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/trends/api/widgetdata/multiline"))
        .and(query_param("token", "abc123"))
        .and(header("cookie", "NID=511=session"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            ")]}',\n{\"default\":{\"timelineData\":[{\"value\":[41]},{\"value\":[55]},{\"value\":[72]}]}}",
        ))
        .mount(&server)
        .await;

    let client = TrendsClient::new(server.uri(), reqwest::Client::new());
    assert_eq!(client.interest("stock market crash").await, Ok(72.0));
    // the session cookie is fetched once per client
    assert_eq!(client.interest("stock market crash").await, Ok(72.0));
    let cookie_visits = server
        .received_requests()
        .await
        .expect("request recording")
        .iter()
        .filter(|r| r.url.path() == "/trends/explore/")
        .count();
    assert_eq!(cookie_visits, 1);
}

#[tokio::test]
async fn trends_explore_without_session_cookie_is_refused() {
    let server = MockServer::start().await;
    // no cookie endpoint mounted: explore goes out bare and is rejected
    Mock::given(method("POST"))
        .and(path("/trends/api/explore"))
        .and(header("cookie", "NID=511=session"))
        .respond_with(ResponseTemplate::new(200).set_body_string(")]}'\n{\"widgets\":[]}"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(429))
        .with_priority(10)
        .mount(&server)
        .await;

    let client = TrendsClient::new(server.uri(), reqwest::Client::new());
    assert!(matches!(
        client.interest("stock market crash").await,
        Err(FetchError::RateLimited { .. })
    ));
}

#[tokio::test]
async fn trends_rate_limit() {
    let server = MockServer::start().await;
    mount_trends_cookie(&server).await;
    Mock::given(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = TrendsClient::new(server.uri(), reqwest::Client::new());
    assert!(matches!(
        client.interest("stock market crash").await,
        Err(FetchError::RateLimited { .. })
    ));
}

#[tokio::test]
async fn ticker_list_source_loads_csv() {
    let server = MockServer::start().await;
    Mock::given(path("/constituents.csv"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("Symbol,Security\nMMM,3M\nKO,Coca-Cola\n"),
        )
        .mount(&server)
        .await;
    Mock::given(path("/empty.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Symbol,Security\n"))
        .mount(&server)
        .await;

    let source = HttpTickerListSource::new(
        format!("{}/constituents.csv", server.uri()),
        reqwest::Client::new(),
    );
    let symbols = source.load().await.expect("symbols");
    assert!(symbols.contains("MMM"));
    assert!(symbols.contains("KO"));

    let empty = HttpTickerListSource::new(
        format!("{}/empty.csv", server.uri()),
        reqwest::Client::new(),
    );
    assert!(matches!(empty.load().await, Err(FetchError::Empty(_))));
}
