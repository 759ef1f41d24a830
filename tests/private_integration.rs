use std::sync::Arc;

use rust_decimal::Decimal;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mexbt_api_client::auth::{
    Credentials, NonceProvider, StaticCredentials, sign_request,
};
use mexbt_api_client::error::MexbtError;
use mexbt_api_client::rest::MexbtRestClient;
use mexbt_api_client::rest::private::CreateOrderRequest;
use mexbt_api_client::types::{Accepted, BTCMXN, BTCUSD, Side};

const API_KEY: &str = "test_api_key";
const PRIVATE_KEY: &str = "test_private_key";
const USER_ID: &str = "trader@example.com";
const NONCE: u64 = 1416559390000;
const SIGNATURE: &str = "94809B7B06F886263F775FC786E717AF976EDC295DF34CB07D01C77F8F9F53F8";

struct FixedNonce(u64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn build_client(server: &MockServer) -> MexbtRestClient {
    init_tracing();
    let credentials = Arc::new(StaticCredentials::new(API_KEY, PRIVATE_KEY, USER_ID));
    MexbtRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .nonce_provider(Arc::new(FixedNonce(NONCE)))
        .build()
        .unwrap()
}

fn envelope(ins: &str) -> serde_json::Value {
    serde_json::json!({
        "apiKey": API_KEY,
        "apiNonce": NONCE,
        "apiSig": SIGNATURE,
        "ins": ins
    })
}

#[tokio::test]
async fn test_create_limit_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/private/v1/orders/create"))
        .and(body_partial_json(envelope(BTCMXN)))
        .and(body_partial_json(serde_json::json!({
            "side": "buy",
            "orderType": 0,
            "qty": "12.42",
            "px": "2.02"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ServerOrderId": 1,
            "DateTimeUtc": 1234,
            "IsAccepted": true
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = client
        .create_limit_order(
            BTCMXN,
            Side::Buy,
            "12.42".parse().unwrap(),
            "2.02".parse().unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(order.server_order_id, 1);
    assert_eq!(order.date_time_utc, 1234);
    assert!(order.is_accepted());
}

#[tokio::test]
async fn test_create_market_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/private/v1/orders/create"))
        .and(body_partial_json(serde_json::json!({
            "side": "sell",
            "orderType": 1,
            "qty": "0.5",
            "px": "0"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ServerOrderId": 2,
            "DateTimeUtc": 1235,
            "IsAccepted": true
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = client
        .create_market_order(BTCUSD, Side::Sell, Decimal::new(5, 1))
        .await
        .unwrap();
    assert_eq!(order.server_order_id, 2);
}

#[tokio::test]
async fn test_rejected_order_surfaces_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/private/v1/orders/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "IsAccepted": false,
            "RejectReason": "insufficient funds"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CreateOrderRequest::limit(BTCMXN, Side::Buy, Decimal::ONE, Decimal::ONE);
    let response = client.create_order(&request).await.unwrap();

    assert!(!response.is_accepted());
    assert_eq!(
        response.status.reject_reason.as_deref(),
        Some("insufficient funds")
    );

    let err = response.accepted().unwrap_err();
    assert!(matches!(
        err,
        MexbtError::Rejected(ref rejection) if rejection.reason == "insufficient funds"
    ));
}

#[tokio::test]
async fn test_move_to_top_and_execute_now() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/private/v1/orders/modify"))
        .and(body_partial_json(serde_json::json!({
            "serverOrderId": 10,
            "modifyAction": 0,
            "ins": "BTCMXN"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ServerOrderId": 11,
            "DateTimeUtc": 2000,
            "IsAccepted": true
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/private/v1/orders/modify"))
        .and(body_partial_json(serde_json::json!({
            "serverOrderId": 11,
            "modifyAction": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ServerOrderId": 11,
            "DateTimeUtc": 2001,
            "IsAccepted": true
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let moved = client.move_to_top(BTCMXN, 10).await.unwrap();
    assert_eq!(moved.server_order_id, 11);

    let executed = client.execute_now(BTCMXN, moved.server_order_id).await.unwrap();
    assert_eq!(executed.date_time_utc, 2001);
}

#[tokio::test]
async fn test_cancel_order_and_cancel_all() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/private/v1/orders/cancel"))
        .and(body_partial_json(serde_json::json!({ "serverOrderId": 11 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ServerOrderId": 11,
            "DateTimeUtc": 3000,
            "IsAccepted": true
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/private/v1/orders/cancel-all"))
        .and(body_partial_json(envelope(BTCUSD)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "IsAccepted": true })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let cancelled = client.cancel_order(BTCMXN, 11).await.unwrap();
    assert!(cancelled.is_accepted());

    let status = client.cancel_all_orders(BTCUSD).await.unwrap();
    assert!(status.is_accepted);
}

#[tokio::test]
async fn test_account_scoped_calls_send_empty_instrument() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/private/v1/balance"))
        .and(body_partial_json(envelope("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Currencies": [
                { "Name": "BTC", "Balance": 2.0, "Hold": 0.5, "TradeCount": 3 },
                { "Name": "MXN", "Balance": 1000.0, "Hold": 0, "TradeCount": 1 }
            ],
            "IsAccepted": true
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/private/v1/me"))
        .and(body_partial_json(envelope("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "UserInfoKVP": [
                { "Key": "UserName", "Value": "trader" },
                { "Key": "Email", "Value": "trader@example.com" }
            ],
            "IsAccepted": true
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/private/v1/deposit-addresses"))
        .and(body_partial_json(envelope("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Addresses": [{ "Name": "BTC", "DepositAddress": "1BoatSLRHtKNngkdXEeobR76b53LETtpyT" }],
            "IsAccepted": true
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/private/v1/orders"))
        .and(body_partial_json(envelope("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "DateTimeUtc": 635520961900000000i64,
            "OpenOrdersInfo": [{
                "Ins": "BTCMXN",
                "OpenOrders": [{
                    "ServerOrderId": 5,
                    "AccountId": 1,
                    "Price": 2.02,
                    "QtyTotal": 12.42,
                    "QtyRemaining": 12.42,
                    "ReceiveTime": 635520961800000000i64,
                    "Side": 0
                }]
            }],
            "IsAccepted": true
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);

    let balance = client.get_balance().await.unwrap();
    assert_eq!(balance.get("BTC").unwrap().available(), 1.5);

    let me = client.get_user_info().await.unwrap();
    assert_eq!(me.get("Email"), Some("trader@example.com"));

    let addresses = client.get_deposit_addresses().await.unwrap();
    assert_eq!(addresses.get("BTC"), Some("1BoatSLRHtKNngkdXEeobR76b53LETtpyT"));

    let orders = client.get_open_orders().await.unwrap();
    assert_eq!(orders.for_instrument(BTCMXN)[0].server_order_id, 5);
    assert_eq!(orders.for_instrument(BTCMXN)[0].side(), Some(Side::Buy));
}

#[tokio::test]
async fn test_get_account_trades() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/private/v1/trades"))
        .and(body_partial_json(envelope(BTCUSD)))
        .and(body_partial_json(serde_json::json!({ "startIndex": -1, "count": 20 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "DateTimeUtc": 635520961900000000i64,
            "Ins": "BTCUSD",
            "StartIndex": -1,
            "Count": 20,
            "Trades": [{
                "TID": 3, "Px": 380.5, "Qty": 0.01, "Unixtime": 1416559000,
                "UTCTicks": 635520958000000000i64, "IncomingOrderSide": 1,
                "IncomingServerOrderId": 7, "BookServerOrderId": 6
            }],
            "IsAccepted": true
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let trades = client.get_account_trades(BTCUSD, -1, 20).await.unwrap();

    assert_eq!(trades.trades.len(), 1);
    assert_eq!(trades.trades[0].taker_side(), Some(Side::Sell));
}

#[tokio::test]
async fn test_withdraw() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/private/v1/withdraw"))
        .and(body_partial_json(envelope("BTC")))
        .and(body_partial_json(serde_json::json!({
            "amount": "0.015",
            "sendToAddress": "1BoatSLRHtKNngkdXEeobR76b53LETtpyT"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "IsAccepted": false,
            "RejectReason": "Withdrawals disabled"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let status = client
        .withdraw(
            "BTC",
            "0.015".parse().unwrap(),
            "1BoatSLRHtKNngkdXEeobR76b53LETtpyT",
        )
        .await
        .unwrap();

    assert!(!status.is_accepted);
    assert_eq!(
        status.check().unwrap_err().reject_reason(),
        Some("Withdrawals disabled")
    );
}

#[tokio::test]
async fn test_private_call_without_credentials() {
    let server = MockServer::start().await;
    let client = MexbtRestClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap();

    let err = client.get_balance().await.unwrap_err();
    assert!(matches!(err, MexbtError::MissingCredentials));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_default_nonces_increase_and_signatures_verify() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/private/v1/balance"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "IsAccepted": true })),
        )
        .mount(&server)
        .await;

    let client = MexbtRestClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new(API_KEY, PRIVATE_KEY, USER_ID)))
        .build()
        .unwrap();

    for _ in 0..3 {
        client.get_balance().await.unwrap();
    }

    let credentials = Credentials::new(API_KEY, PRIVATE_KEY, USER_ID);
    let mut last_nonce = 0u64;
    for request in server.received_requests().await.unwrap() {
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        let nonce = body["apiNonce"].as_u64().unwrap();
        assert!(nonce > last_nonce);
        last_nonce = nonce;

        let expected = sign_request(&credentials, nonce).unwrap();
        assert_eq!(body["apiSig"], expected.as_str());
        assert!(!request.body.windows(PRIVATE_KEY.len()).any(|w| w == PRIVATE_KEY.as_bytes()));
    }
}
