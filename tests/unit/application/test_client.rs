use crate::common::{
    DAY, ScriptedTransport, connectable, login_response, not_sold_response, sell_again_response,
    status_response,
};
use allegro_webapi::prelude::*;
use serde_json::json;
use tokio_test::{assert_ok, block_on};

fn client(transport: ScriptedTransport) -> WebApiClient<ScriptedTransport> {
    WebApiClient::with_transport(transport)
}

#[tokio::test]
async fn test_connect_queries_status_before_login() {
    let mut client = client(connectable());

    client.connect("seller", "secret", "KEY").await.unwrap();

    assert_eq!(
        client.transport().methods(),
        vec!["doQueryAllSysStatus", "doLoginEnc"]
    );
    assert_eq!(
        client.transport().params_of("doQueryAllSysStatus"),
        vec![json!({"countryId": 1, "webapiKey": "KEY"})]
    );
}

#[tokio::test]
async fn test_connect_sends_version_key_of_configured_country() {
    let mut client = client(connectable());
    client.set_country_id(228);

    let session = client.connect("seller", "secret", "KEY").await.unwrap();
    assert_eq!(session.handle, "HANDLE");
    assert_eq!(session.country_id, 228);
    assert_eq!(session.user_id, Some(4242));

    let login = client.transport().params_of("doLoginEnc");
    assert_eq!(
        login,
        vec![json!({
            "userLogin": "seller",
            "userHashPassword": hash_password("secret"),
            "webapiKey": "KEY",
            "countryCode": 228,
            "localVersion": 222
        })]
    );
    let keys: Vec<String> = login[0].as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        ["userLogin", "userHashPassword", "webapiKey", "countryCode", "localVersion"]
    );
    assert_eq!(client.version_keys().len(), 2);
    assert_eq!(client.version_keys().ver_key(1), Some(111));
}

#[tokio::test]
async fn test_connect_never_sends_raw_password() {
    let mut client = client(connectable());
    client.connect("seller", "secret", "KEY").await.unwrap();

    for (_, params) in client.transport().calls() {
        assert!(!params.values().any(|value| value == "secret"));
    }
    assert_eq!(
        client.credentials().unwrap().password_hash(),
        hash_password("secret")
    );
}

#[tokio::test]
async fn test_connect_login_fault_is_auth_error() {
    let transport = ScriptedTransport::new()
        .respond("doQueryAllSysStatus", status_response(&[(1, 111)]))
        .fault("doLoginEnc", "ERR_USER_PASSWD", "Wrong login or password");
    let mut client = client(transport);

    let result = client.connect("seller", "wrong", "KEY").await;

    match result {
        Err(AppError::Auth(AuthError::LoginRejected(fault))) => {
            assert_eq!(fault.code, "ERR_USER_PASSWD");
            assert_eq!(fault.message, "Wrong login or password");
        }
        other => panic!("Expected login rejection, got {other:?}"),
    }
    assert!(!client.is_connected());
}

#[tokio::test]
async fn test_connect_status_fault_is_auth_error() {
    let transport =
        ScriptedTransport::new().fault("doQueryAllSysStatus", "ERR_WEBAPI_KEY", "Invalid key");
    let mut client = client(transport);

    let result = client.connect("seller", "secret", "BAD").await;

    match result {
        Err(AppError::Auth(AuthError::StatusRejected(fault))) => {
            assert_eq!(fault, SoapFault::new("ERR_WEBAPI_KEY", "Invalid key"));
        }
        other => panic!("Expected status rejection, got {other:?}"),
    }
    assert_eq!(client.transport().methods(), vec!["doQueryAllSysStatus"]);
}

#[tokio::test]
async fn test_connect_without_version_key_for_country() {
    let mut client = client(connectable());
    client.set_country_id(56);

    let result = client.connect("seller", "secret", "KEY").await;

    assert!(matches!(
        result,
        Err(AppError::Auth(AuthError::MissingVersionKey(56)))
    ));
    assert_eq!(client.transport().methods(), vec!["doQueryAllSysStatus"]);
}

#[tokio::test]
async fn test_calls_before_connect_are_rejected_locally() {
    let client = client(connectable());

    assert!(matches!(
        client.do_get_my_not_sold_items().await,
        Err(AppError::NotConnected)
    ));
    assert!(matches!(
        client
            .do_sell_some_again(SellAgainOptions {
                item_id: 1,
                duration: 7,
                sell_starting_time: 0,
                sell_option: SellOption::DEFAULT,
            })
            .await,
        Err(AppError::NotConnected)
    ));
    assert!(matches!(
        client.republish_not_sold_items().await,
        Err(AppError::NotConnected)
    ));
    assert!(client.transport().calls().is_empty());
}

#[tokio::test]
async fn test_set_country_after_connect_keeps_open_session() {
    let transport = connectable().respond("doGetMyNotSoldItems", not_sold_response(&[]));
    let mut client = client(transport);
    client.connect("seller", "secret", "KEY").await.unwrap();

    client.set_country_id(228);

    assert_eq!(client.country_id(), 228);
    let session = client.session().unwrap();
    assert_eq!(session.country_id, 1);
    assert_eq!(session.handle, "HANDLE");

    client.do_get_my_not_sold_items().await.unwrap();
    assert_eq!(
        client.transport().params_of("doGetMyNotSoldItems"),
        vec![json!({"sessionId": "HANDLE"})]
    );
    assert_eq!(client.transport().params_of("doLoginEnc").len(), 1);
}

#[tokio::test]
async fn test_connect_twice_replaces_session() {
    let transport = ScriptedTransport::new()
        .respond("doQueryAllSysStatus", status_response(&[(1, 111)]))
        .respond("doQueryAllSysStatus", status_response(&[(1, 112)]))
        .respond("doLoginEnc", login_response("FIRST"))
        .respond("doLoginEnc", login_response("SECOND"));
    let mut client = client(transport);

    client.connect("seller", "secret", "KEY").await.unwrap();
    assert_eq!(client.session().unwrap().handle, "FIRST");

    client.connect("seller", "secret", "KEY").await.unwrap();
    assert_eq!(client.session().unwrap().handle, "SECOND");
    assert_eq!(client.version_keys().ver_key(1), Some(112));
    assert_eq!(
        client.transport().methods(),
        vec![
            "doQueryAllSysStatus",
            "doLoginEnc",
            "doQueryAllSysStatus",
            "doLoginEnc"
        ]
    );
}

#[tokio::test]
async fn test_failed_reconnect_keeps_previous_session() {
    let transport = ScriptedTransport::new()
        .respond("doQueryAllSysStatus", status_response(&[(1, 111)]))
        .respond("doLoginEnc", login_response("FIRST"))
        .fault("doLoginEnc", "ERR_USER_PASSWD", "Wrong login or password");
    let mut client = client(transport);

    client.connect("seller", "secret", "KEY").await.unwrap();
    assert!(client.connect("seller", "wrong", "KEY").await.is_err());

    assert_eq!(client.session().unwrap().handle, "FIRST");
    assert_eq!(
        client.credentials().unwrap().password_hash(),
        hash_password("secret")
    );
}

#[tokio::test]
async fn test_not_sold_items_are_decoded() {
    let transport = connectable().respond(
        "doGetMyNotSoldItems",
        not_sold_response(&[(10, 1000, 1000 + 7 * DAY), (20, 0, DAY)]),
    );
    let mut client = client(transport);
    client.connect("seller", "secret", "KEY").await.unwrap();

    let response = client.do_get_my_not_sold_items().await.unwrap();

    assert_eq!(response.not_sold_items_counter, Some(2));
    assert_eq!(response.not_sold_items_list.len(), 2);
    assert_eq!(response.not_sold_items_list[0].item_id, 10);
    assert_eq!(response.not_sold_items_list[0].duration_days(), 7);
}

#[tokio::test]
async fn test_sell_some_again_maps_duration() {
    let transport = connectable().respond("doSellSomeAgain", sell_again_response(5));
    let mut client = client(transport);
    client.connect("seller", "secret", "KEY").await.unwrap();

    for duration in [9, 10] {
        client
            .do_sell_some_again(SellAgainOptions {
                item_id: 5,
                duration,
                sell_starting_time: 1_700_000_000,
                sell_option: SellOption::new(2).unwrap(),
            })
            .await
            .unwrap();
    }

    assert_eq!(
        client.transport().params_of("doSellSomeAgain"),
        vec![
            json!({
                "sessionHandle": "HANDLE",
                "sellItemsArray": {"item": [5]},
                "sellAuctionDuration": 3,
                "sellStartingTime": 1_700_000_000,
                "sellOptions": 2
            }),
            json!({
                "sessionHandle": "HANDLE",
                "sellItemsArray": {"item": [5]},
                "sellAuctionDuration": 10,
                "sellStartingTime": 1_700_000_000,
                "sellOptions": 2
            }),
        ]
    );
}

#[tokio::test]
async fn test_republish_empty_list_is_nothing_to_do() {
    let transport = connectable().respond("doGetMyNotSoldItems", not_sold_response(&[]));
    let mut client = client(transport);
    client.connect("seller", "secret", "KEY").await.unwrap();

    let outcome = client.republish_not_sold_items().await.unwrap();

    assert_eq!(outcome, RepublishOutcome::NothingToDo);
    assert_eq!(outcome.relisted_count(), 0);
    assert!(client.transport().params_of("doSellSomeAgain").is_empty());
}

#[tokio::test]
async fn test_republish_relists_each_item_in_order() {
    let transport = connectable()
        .respond(
            "doGetMyNotSoldItems",
            not_sold_response(&[
                (10, 1000, 1000 + 7 * DAY),
                (20, 0, 9 * DAY),
                (30, 5000, 5000 + 14 * DAY + 3600),
            ]),
        )
        .respond("doSellSomeAgain", sell_again_response(10))
        .respond("doSellSomeAgain", sell_again_response(20))
        .respond("doSellSomeAgain", sell_again_response(30));
    let mut client = client(transport);
    client.connect("seller", "secret", "KEY").await.unwrap();

    let outcome = client.republish_not_sold_items().await.unwrap();

    let RepublishOutcome::Relisted(responses) = outcome else {
        panic!("Expected relisted items");
    };
    let relisted: Vec<i64> = responses
        .iter()
        .map(|response| response.items_sell_again[0].sell_item_id)
        .collect();
    assert_eq!(relisted, vec![10, 20, 30]);

    let sent: Vec<(serde_json::Value, serde_json::Value)> = client
        .transport()
        .params_of("doSellSomeAgain")
        .into_iter()
        .map(|params| {
            assert_eq!(params["sessionHandle"], "HANDLE");
            assert_eq!(params["sellStartingTime"], 0);
            assert_eq!(params["sellOptions"], 1);
            (
                params["sellItemsArray"]["item"].clone(),
                params["sellAuctionDuration"].clone(),
            )
        })
        .collect();
    assert_eq!(
        sent,
        vec![
            (json!([10]), json!(7)),
            (json!([20]), json!(3)),
            (json!([30]), json!(14)),
        ]
    );
}

#[tokio::test]
async fn test_republish_single_item_in_soap_shape() {
    let transport = connectable()
        .respond(
            "doGetMyNotSoldItems",
            json!({
                "notSoldItemsCounter": "1",
                "notSoldItemsList": {"item": {
                    "itemId": "77",
                    "itemStartTime": "0",
                    "itemEndTime": (5 * DAY).to_string()
                }}
            }),
        )
        .respond("doSellSomeAgain", sell_again_response(77));
    let mut client = client(transport);
    client.connect("seller", "secret", "KEY").await.unwrap();

    let outcome = client.republish_not_sold_items().await.unwrap();

    assert_eq!(outcome.relisted_count(), 1);
    assert_eq!(
        client.transport().params_of("doSellSomeAgain")[0]["sellAuctionDuration"],
        5
    );
}

#[tokio::test]
async fn test_republish_stops_at_first_failure() {
    let transport = connectable()
        .respond(
            "doGetMyNotSoldItems",
            not_sold_response(&[(10, 0, 7 * DAY), (20, 0, 7 * DAY)]),
        )
        .fault("doSellSomeAgain", "ERR_NO_FUNDS", "Not enough funds");
    let mut client = client(transport);
    client.connect("seller", "secret", "KEY").await.unwrap();

    let result = client.republish_not_sold_items().await;

    assert_eq!(
        result.unwrap_err().fault(),
        Some(&SoapFault::new("ERR_NO_FUNDS", "Not enough funds"))
    );
    assert_eq!(client.transport().params_of("doSellSomeAgain").len(), 1);
}

#[test]
fn test_client_best_allowed_duration() {
    let client = client(ScriptedTransport::new());
    assert_eq!(client.best_allowed_duration(14), 14);
    assert_eq!(client.best_allowed_duration(9), 3);
    assert_eq!(client.best_allowed_duration(-5), 3);
    assert!(!client.is_connected());
    assert_eq!(client.country_id(), DEFAULT_COUNTRY_ID);
}

#[test]
fn test_republish_outcome_counts_relists() {
    let transport = connectable()
        .respond(
            "doGetMyNotSoldItems",
            not_sold_response(&[(10, 0, 5 * DAY), (20, 0, 10 * DAY)]),
        )
        .respond("doSellSomeAgain", sell_again_response(10))
        .respond("doSellSomeAgain", sell_again_response(20));
    let mut client = client(transport);
    assert_ok!(block_on(client.connect("seller", "secret", "KEY")));

    let outcome = assert_ok!(block_on(client.republish_not_sold_items()));

    assert_eq!(outcome.relisted_count(), 2);
    assert_eq!(RepublishOutcome::NothingToDo.relisted_count(), 0);
}
